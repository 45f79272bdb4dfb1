use crate::error::NothingToUndo;
use crate::{NextQueue, ReserveStack};

/// Deep copy of both containers, cursor positions included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub queue: NextQueue,
    pub stack: ReserveStack,
}

/// Single-slot, single-use undo.
///
/// `save` overwrites whatever the slot held; `restore` empties it. There is
/// no history: undo is exactly one level deep.
#[derive(Debug, Clone, Default)]
pub struct UndoSlot {
    saved: Option<Snapshot>,
}

impl UndoSlot {
    pub fn new() -> Self {
        Self { saved: None }
    }

    pub fn save(&mut self, queue: &NextQueue, stack: &ReserveStack) {
        self.saved = Some(Snapshot {
            queue: *queue,
            stack: stack.clone(),
        });
    }

    /// Overwrite `queue` and `stack` with the saved copies and consume the slot.
    pub fn restore(
        &mut self,
        queue: &mut NextQueue,
        stack: &mut ReserveStack,
    ) -> Result<(), NothingToUndo> {
        let snap = self.saved.take().ok_or(NothingToUndo)?;
        *queue = snap.queue;
        *stack = snap.stack;
        Ok(())
    }

    pub fn is_available(&self) -> bool {
        self.saved.is_some()
    }

    pub fn peek(&self) -> Option<&Snapshot> {
        self.saved.as_ref()
    }
}
