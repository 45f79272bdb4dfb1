//! Menu input module.
//!
//! Maps a typed menu line or a `crossterm` key press into a [`MenuChoice`].
//! Nothing here touches game state; the caller decides what a choice does.

pub mod map;

pub use next_pieces_types as types;

pub use map::{handle_key_event, parse_choice, should_quit, MenuChoice};
