//! Terminal presentation for the piece pipeline.
//!
//! [`view`] turns a session into styled lines without doing any I/O;
//! [`renderer`] writes those lines to a terminal with `crossterm`.

pub mod renderer;
pub mod style;
pub mod view;

pub use next_pieces_core as core;
pub use next_pieces_types as types;

pub use renderer::{encode_lines_into, TerminalRenderer};
pub use style::{kind_color, Line, Rgb, Span, Style};
pub use view::{plain_text, MenuEntry, StateView};
