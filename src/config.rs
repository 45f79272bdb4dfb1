//! Command-line and environment configuration.

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, Result};

/// Environment variable consulted when `--seed` is not given.
pub const SEED_ENV: &str = "NEXT_PIECES_SEED";

pub const USAGE: &str = "\
usage: next-pieces [--seed <u32>] [--plain] [--json] [--help]

  --seed <u32>  seed for piece kinds (default: $NEXT_PIECES_SEED, then the clock)
  --plain       line-oriented menu on stdin/stdout, no raw terminal mode
  --json        line-oriented, one JSON state object per input line
  --help        show this message";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub seed: u32,
    pub plain: bool,
    pub json: bool,
    pub help: bool,
}

/// Parse argv (without the program name).
///
/// `env_seed` is the raw value of [`SEED_ENV`], if set. An explicit `--seed`
/// wins over it; when neither is present the seed comes from the clock.
pub fn parse_args(args: &[String], env_seed: Option<&str>) -> Result<AppConfig> {
    let mut seed: Option<u32> = None;
    let mut plain = false;
    let mut json = false;
    let mut help = false;

    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--seed" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --seed"))?;
                seed = Some(parse_seed(v)?);
            }
            "--plain" => plain = true,
            "--json" => json = true,
            "--help" | "-h" => help = true,
            other => {
                return Err(anyhow!("unknown argument: {}", other));
            }
        }
        i += 1;
    }

    let seed = match (seed, env_seed) {
        (Some(s), _) => s,
        (None, Some(v)) => {
            parse_seed(v).map_err(|e| anyhow!("{}: {}", SEED_ENV, e))?
        }
        (None, None) => clock_seed(),
    };

    Ok(AppConfig {
        seed,
        plain,
        json,
        help,
    })
}

fn parse_seed(v: &str) -> Result<u32> {
    v.trim()
        .parse::<u32>()
        .map_err(|_| anyhow!("invalid seed value: {}", v))
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as u32 ^ d.subsec_nanos())
        .unwrap_or(1)
}
