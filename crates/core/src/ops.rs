//! The five player operations.
//!
//! Each one is built from queue/stack primitives and reports an [`Outcome`].
//! Refusals leave both containers untouched. None of these snapshot; the
//! caller decides when to save.

use crate::rng::PieceGenerator;
use crate::types::{OperationKind, Outcome};
use crate::{NextQueue, ReserveStack};

/// Dispatch an operation by kind.
pub fn run(
    kind: OperationKind,
    queue: &mut NextQueue,
    stack: &mut ReserveStack,
    generator: &mut PieceGenerator,
) -> Outcome {
    match kind {
        OperationKind::Play => play(queue, generator),
        OperationKind::Reserve => reserve(queue, stack, generator),
        OperationKind::UseReserved => use_reserved(stack),
        OperationKind::SwapTopFront => swap_top_front(queue, stack),
        OperationKind::Invert => invert(queue, stack),
    }
}

/// Consume the queue front, then top the queue back up.
pub fn play(queue: &mut NextQueue, generator: &mut PieceGenerator) -> Outcome {
    match queue.dequeue() {
        Some(piece) => {
            refill(queue, generator);
            Outcome::Played(piece)
        }
        None => Outcome::NothingToPlay,
    }
}

/// Move the queue front onto the reserve stack, then top the queue back up.
pub fn reserve(
    queue: &mut NextQueue,
    stack: &mut ReserveStack,
    generator: &mut PieceGenerator,
) -> Outcome {
    // Checked before dequeuing so a refused reserve never touches the queue.
    if stack.is_full() {
        return Outcome::StackFull;
    }
    let Some(piece) = queue.dequeue() else {
        return Outcome::NothingToReserve;
    };
    let pushed = stack.push(piece);
    debug_assert!(pushed.is_ok(), "stack capacity checked above");
    refill(queue, generator);
    Outcome::Reserved(piece)
}

pub fn use_reserved(stack: &mut ReserveStack) -> Outcome {
    match stack.pop() {
        Some(piece) => Outcome::Used(piece),
        None => Outcome::NothingReserved,
    }
}

/// Exchange the stack top with the queue front. Occupancy of both is unchanged.
pub fn swap_top_front(queue: &mut NextQueue, stack: &mut ReserveStack) -> Outcome {
    let Some(top) = stack.top_mut() else {
        return Outcome::StackEmpty;
    };
    let Some(front) = queue.front_mut() else {
        return Outcome::QueueEmpty;
    };
    std::mem::swap(top, front);
    Outcome::Swapped {
        to_queue: *front,
        to_stack: *top,
    }
}

pub fn invert(queue: &mut NextQueue, stack: &mut ReserveStack) -> Outcome {
    queue.reverse_in_place();
    stack.reverse_in_place();
    Outcome::Inverted
}

fn refill(queue: &mut NextQueue, generator: &mut PieceGenerator) {
    let refilled = queue.enqueue(generator.generate());
    debug_assert!(refilled.is_ok(), "refill follows a dequeue and cannot overflow");
}
