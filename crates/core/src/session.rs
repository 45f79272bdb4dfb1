use crate::error::NothingToUndo;
use crate::ops;
use crate::queue;
use crate::rng::PieceGenerator;
use crate::snapshot::UndoSlot;
use crate::types::{OperationKind, Outcome, Piece};
use crate::{NextQueue, ReserveStack};

/// Complete state of one player's piece pipeline.
///
/// Owns the next queue, the reserve stack, the piece generator and the undo
/// slot. Callers hold it and pass it by `&mut` into every operation.
#[derive(Debug, Clone)]
pub struct Session {
    queue: NextQueue,
    stack: ReserveStack,
    generator: PieceGenerator,
    undo: UndoSlot,
    seed: u32,
}

impl Session {
    /// New session: queue filled to capacity, stack empty, nothing to undo.
    pub fn new(seed: u32) -> Self {
        let mut generator = PieceGenerator::new(seed);
        let mut queue = NextQueue::new();
        while !queue.is_full() {
            let filled = queue.enqueue(generator.generate());
            debug_assert!(filled.is_ok());
        }
        Self {
            queue,
            stack: ReserveStack::new(),
            generator,
            undo: UndoSlot::new(),
            seed,
        }
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Run one operation without touching the undo slot.
    pub fn run_operation(&mut self, kind: OperationKind) -> Outcome {
        ops::run(kind, &mut self.queue, &mut self.stack, &mut self.generator)
    }

    /// Save a snapshot, then run the operation.
    ///
    /// The snapshot is taken even when the operation turns out to be a
    /// refusal, so a following undo may restore an identical state.
    pub fn step(&mut self, kind: OperationKind) -> Outcome {
        self.save_snapshot();
        self.run_operation(kind)
    }

    pub fn save_snapshot(&mut self) {
        self.undo.save(&self.queue, &self.stack);
    }

    /// Restore the last snapshot. Ids handed out since then stay consumed.
    pub fn undo(&mut self) -> Result<(), NothingToUndo> {
        self.undo.restore(&mut self.queue, &mut self.stack)
    }

    pub fn undo_available(&self) -> bool {
        self.undo.is_available()
    }

    /// Queue contents, front to back.
    pub fn queue_view(&self) -> queue::Iter<'_, Piece, { crate::types::QUEUE_CAPACITY }> {
        self.queue.iter()
    }

    /// Stack contents, top to base.
    pub fn stack_view(&self) -> std::iter::Rev<std::slice::Iter<'_, Piece>> {
        self.stack.iter()
    }

    pub fn queue(&self) -> &NextQueue {
        &self.queue
    }

    pub fn stack(&self) -> &ReserveStack {
        &self.stack
    }

    /// Id the next generated piece will carry.
    pub fn next_id(&self) -> u32 {
        self.generator.peek_id()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(1)
    }
}
