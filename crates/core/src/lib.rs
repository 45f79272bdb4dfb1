//! Core piece pipeline - pure, deterministic, and testable
//!
//! This crate contains the bounded containers, the operations that move
//! pieces between them, and the one-level undo. It has **no dependencies** on
//! terminal, input, or I/O code:
//!
//! - **Deterministic**: Same seed produces the same piece kinds
//! - **Allocation-free**: Both containers live inline (array ring, `ArrayVec`)
//! - **Non-fatal**: Every refusal is a return value, nothing here panics on input
//!
//! # Module Structure
//!
//! - [`queue`]: fixed-capacity ring buffer (the next queue)
//! - [`stack`]: fixed-capacity LIFO (the reserve stack)
//! - [`rng`]: seeded LCG and the id-assigning piece generator
//! - [`snapshot`]: single-slot, single-use undo
//! - [`ops`]: play, reserve, use-reserved, swap-top-front, invert
//! - [`session`]: owns all of the above for one player
//!
//! # Example
//!
//! ```
//! use next_pieces_core::Session;
//! use next_pieces_types::{OperationKind, Outcome};
//!
//! let mut session = Session::new(12345);
//!
//! // Snapshot, then play the front piece
//! let outcome = session.step(OperationKind::Play);
//! assert!(matches!(outcome, Outcome::Played(p) if p.id == 1));
//!
//! // The queue was refilled with a fresh piece
//! let ids: Vec<u32> = session.queue_view().map(|p| p.id).collect();
//! assert_eq!(ids, vec![2, 3, 4, 5, 6]);
//!
//! // One level of undo
//! assert!(session.undo().is_ok());
//! assert!(session.undo().is_err());
//! ```

pub mod error;
pub mod ops;
pub mod queue;
pub mod rng;
pub mod session;
pub mod snapshot;
pub mod stack;

pub use next_pieces_types as types;

use types::{Piece, QUEUE_CAPACITY, STACK_CAPACITY};

/// The next queue: upcoming pieces, front first.
pub type NextQueue = queue::RingQueue<Piece, QUEUE_CAPACITY>;

/// The reserve stack.
pub type ReserveStack = stack::BoundedStack<Piece, STACK_CAPACITY>;

// Re-export commonly used types for convenience
pub use error::{NothingToUndo, QueueFull, StackFull};
pub use queue::RingQueue;
pub use rng::{PieceGenerator, SimpleRng};
pub use session::Session;
pub use snapshot::{Snapshot, UndoSlot};
pub use stack::BoundedStack;
