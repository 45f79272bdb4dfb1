//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are plain data with no external dependencies, so they can be used
//! by the core containers, the terminal view and the JSON report alike.
//!
//! # Capacities
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `QUEUE_CAPACITY` | 5 | Upcoming pieces held by the next queue |
//! | `STACK_CAPACITY` | 3 | Pieces that can be held in reserve |
//!
//! # Examples
//!
//! ```
//! use next_pieces_types::{OperationKind, Piece, PieceKind, QUEUE_CAPACITY};
//!
//! let piece = Piece::new(7, PieceKind::T);
//! assert_eq!(piece.to_string(), "T (id 7)");
//!
//! // Parse from string (case-insensitive)
//! assert_eq!(PieceKind::from_str("t"), Some(PieceKind::T));
//! assert_eq!(OperationKind::from_str("reserve"), Some(OperationKind::Reserve));
//!
//! assert_eq!(QUEUE_CAPACITY, 5);
//! ```

use std::fmt;

/// Number of upcoming pieces kept in the next queue (5)
pub const QUEUE_CAPACITY: usize = 5;

/// Number of pieces the reserve stack can hold (3)
pub const STACK_CAPACITY: usize = 3;

/// The piece alphabet, in the order the generator indexes it.
pub const PIECE_KINDS: [PieceKind; 7] = [
    PieceKind::I,
    PieceKind::O,
    PieceKind::T,
    PieceKind::L,
    PieceKind::J,
    PieceKind::S,
    PieceKind::Z,
];

/// The seven piece type tags
///
/// Only the tag is modeled; there is no shape or rotation attached to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    L,
    J,
    S,
    Z,
}

impl PieceKind {
    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use next_pieces_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "l" => Some(PieceKind::L),
            "j" => Some(PieceKind::J),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    ///
    /// ```
    /// use next_pieces_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::L.as_str(), "l");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::T => "t",
            PieceKind::L => "l",
            PieceKind::J => "j",
            PieceKind::S => "s",
            PieceKind::Z => "z",
        }
    }

    /// Uppercase display letter.
    pub fn as_char(&self) -> char {
        match self {
            PieceKind::I => 'I',
            PieceKind::O => 'O',
            PieceKind::T => 'T',
            PieceKind::L => 'L',
            PieceKind::J => 'J',
            PieceKind::S => 'S',
            PieceKind::Z => 'Z',
        }
    }
}

/// A piece circulating through the queue and the reserve stack.
///
/// Identity is the `id`. Ids start at 1 and are handed out by a single
/// generator, so two pieces with the same id are the same piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub id: u32,
    pub kind: PieceKind,
}

impl Piece {
    pub const fn new(id: u32, kind: PieceKind) -> Self {
        Self { id, kind }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (id {})", self.kind.as_char(), self.id)
    }
}

/// Player-triggered operations on the queue and the reserve stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    /// Consume the queue front and refill the queue
    Play,
    /// Move the queue front onto the reserve stack and refill the queue
    Reserve,
    /// Consume the top of the reserve stack
    UseReserved,
    /// Exchange the stack top with the queue front
    SwapTopFront,
    /// Reverse both the queue and the stack
    Invert,
}

impl OperationKind {
    pub const ALL: [OperationKind; 5] = [
        OperationKind::Play,
        OperationKind::Reserve,
        OperationKind::UseReserved,
        OperationKind::SwapTopFront,
        OperationKind::Invert,
    ];

    /// Parse operation from string
    ///
    /// # Examples
    ///
    /// ```
    /// use next_pieces_types::OperationKind;
    ///
    /// assert_eq!(OperationKind::from_str("play"), Some(OperationKind::Play));
    /// assert_eq!(OperationKind::from_str("useReserved"), Some(OperationKind::UseReserved));
    /// assert_eq!(OperationKind::from_str("hold"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "play" => Some(OperationKind::Play),
            "reserve" => Some(OperationKind::Reserve),
            "usereserved" | "use" => Some(OperationKind::UseReserved),
            "swaptopfront" | "swap" => Some(OperationKind::SwapTopFront),
            "invert" => Some(OperationKind::Invert),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationKind::Play => "play",
            OperationKind::Reserve => "reserve",
            OperationKind::UseReserved => "useReserved",
            OperationKind::SwapTopFront => "swapTopFront",
            OperationKind::Invert => "invert",
        }
    }
}

/// What an operation did, reported back to the caller for display.
///
/// Refusals are ordinary outcomes, not errors: the operation left both
/// containers untouched and says why.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Played(Piece),
    NothingToPlay,
    Reserved(Piece),
    /// Reserve refused because the stack is at capacity
    StackFull,
    NothingToReserve,
    Used(Piece),
    NothingReserved,
    /// `to_queue` now sits at the queue front, `to_stack` on the stack top.
    Swapped { to_queue: Piece, to_stack: Piece },
    /// Swap refused because the stack is empty
    StackEmpty,
    /// Swap refused because the queue is empty
    QueueEmpty,
    Inverted,
}

impl Outcome {
    /// Whether the operation mutated the queue or the stack.
    pub fn changed_state(&self) -> bool {
        matches!(
            self,
            Outcome::Played(_)
                | Outcome::Reserved(_)
                | Outcome::Used(_)
                | Outcome::Swapped { .. }
                | Outcome::Inverted
        )
    }

    /// Stable snake_case tag, used by the JSON report.
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Played(_) => "played",
            Outcome::NothingToPlay => "nothing_to_play",
            Outcome::Reserved(_) => "reserved",
            Outcome::StackFull => "stack_full",
            Outcome::NothingToReserve => "nothing_to_reserve",
            Outcome::Used(_) => "used",
            Outcome::NothingReserved => "nothing_reserved",
            Outcome::Swapped { .. } => "swapped",
            Outcome::StackEmpty => "stack_empty",
            Outcome::QueueEmpty => "queue_empty",
            Outcome::Inverted => "inverted",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Played(p) => write!(f, "played {}", p),
            Outcome::NothingToPlay => write!(f, "queue empty, nothing to play"),
            Outcome::Reserved(p) => write!(f, "reserved {}", p),
            Outcome::StackFull => write!(f, "stack full, cannot reserve"),
            Outcome::NothingToReserve => write!(f, "queue empty, nothing to reserve"),
            Outcome::Used(p) => write!(f, "used reserved {}", p),
            Outcome::NothingReserved => write!(f, "stack empty, nothing reserved to use"),
            Outcome::Swapped { to_queue, to_stack } => write!(
                f,
                "swapped stack top {} <-> queue front {}",
                to_queue, to_stack
            ),
            Outcome::StackEmpty => write!(f, "stack empty, nothing to swap"),
            Outcome::QueueEmpty => write!(f, "queue empty, nothing to swap"),
            Outcome::Inverted => write!(f, "inverted queue and stack"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_capacities() {
        assert_eq!(QUEUE_CAPACITY, 5);
        assert_eq!(STACK_CAPACITY, 3);
    }

    #[test]
    fn piece_kinds_cover_alphabet_once() {
        for kind in PIECE_KINDS {
            assert_eq!(PIECE_KINDS.iter().filter(|k| **k == kind).count(), 1);
            assert_eq!(PieceKind::from_str(kind.as_str()), Some(kind));
            assert_eq!(kind.as_char().to_ascii_lowercase().to_string(), kind.as_str());
        }
    }

    #[test]
    fn operation_names_parse_back() {
        for op in OperationKind::ALL {
            assert_eq!(OperationKind::from_str(op.as_str()), Some(op));
        }
        assert_eq!(OperationKind::from_str("SWAP"), Some(OperationKind::SwapTopFront));
    }

    #[test]
    fn outcome_messages_name_the_piece() {
        let p = Piece::new(3, PieceKind::J);
        assert_eq!(Outcome::Played(p).to_string(), "played J (id 3)");
        assert_eq!(Outcome::StackFull.to_string(), "stack full, cannot reserve");

        let swapped = Outcome::Swapped {
            to_queue: Piece::new(1, PieceKind::I),
            to_stack: Piece::new(6, PieceKind::O),
        };
        assert_eq!(
            swapped.to_string(),
            "swapped stack top I (id 1) <-> queue front O (id 6)"
        );
    }

    #[test]
    fn refusals_do_not_change_state() {
        assert!(!Outcome::StackFull.changed_state());
        assert!(!Outcome::NothingToPlay.changed_state());
        assert!(!Outcome::QueueEmpty.changed_state());
        assert!(Outcome::Inverted.changed_state());
        assert!(Outcome::Used(Piece::new(1, PieceKind::S)).changed_state());
    }
}
