//! Next Pieces (workspace facade crate).
//!
//! Re-exports the workspace crates as `next_pieces::{core,input,term,types}`
//! and hosts the binary's configuration, JSON report and menu driver.

pub mod app;
pub mod config;
pub mod report;

pub use next_pieces_core as core;
pub use next_pieces_input as input;
pub use next_pieces_term as term;
pub use next_pieces_types as types;
