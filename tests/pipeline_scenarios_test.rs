//! End-to-end scenarios against the session API.

use next_pieces::core::{NothingToUndo, Session};
use next_pieces::types::{OperationKind, Outcome, QUEUE_CAPACITY, STACK_CAPACITY};

fn queue_ids(s: &Session) -> Vec<u32> {
    s.queue_view().map(|p| p.id).collect()
}

fn stack_ids(s: &Session) -> Vec<u32> {
    s.stack_view().map(|p| p.id).collect()
}

#[test]
fn test_play_from_fresh_session() {
    let mut s = Session::new(12345);
    assert_eq!(queue_ids(&s), vec![1, 2, 3, 4, 5]);
    assert!(s.stack().is_empty());

    let outcome = s.step(OperationKind::Play);
    assert!(matches!(outcome, Outcome::Played(p) if p.id == 1));
    assert_eq!(queue_ids(&s), vec![2, 3, 4, 5, 6]);
    assert!(s.stack().is_empty());
}

#[test]
fn test_reserve_from_fresh_session() {
    let mut s = Session::new(12345);
    let outcome = s.step(OperationKind::Reserve);
    assert!(matches!(outcome, Outcome::Reserved(p) if p.id == 1));
    assert_eq!(stack_ids(&s), vec![1]);
    assert_eq!(queue_ids(&s), vec![2, 3, 4, 5, 6]);
}

#[test]
fn test_reserve_into_full_stack() {
    let mut s = Session::new(12345);
    for _ in 0..STACK_CAPACITY {
        s.step(OperationKind::Reserve);
    }
    assert_eq!(stack_ids(&s), vec![3, 2, 1]);
    let queue_before = queue_ids(&s);

    assert_eq!(s.step(OperationKind::Reserve), Outcome::StackFull);
    assert_eq!(
        s.step(OperationKind::Reserve).to_string(),
        "stack full, cannot reserve"
    );
    assert_eq!(queue_ids(&s), queue_before);
    assert_eq!(stack_ids(&s), vec![3, 2, 1]);
}

#[test]
fn test_undo_play_restores_queue_exactly() {
    let mut s = Session::new(12345);
    s.step(OperationKind::Reserve);
    let queue_before = *s.queue();

    s.save_snapshot();
    s.run_operation(OperationKind::Play);
    assert_ne!(*s.queue(), queue_before);

    assert_eq!(s.undo(), Ok(()));
    assert_eq!(*s.queue(), queue_before);
    assert_eq!(s.queue().front_index(), queue_before.front_index());
    assert_eq!(s.queue().back_index(), queue_before.back_index());
    assert_eq!(s.undo(), Err(NothingToUndo));
}

#[test]
fn test_swap_top_front_keeps_counts() {
    let mut s = Session::new(12345);
    for _ in 0..STACK_CAPACITY {
        s.step(OperationKind::Reserve);
    }
    // stack (top -> base): 3, 2, 1; queue front: 4
    let outcome = s.step(OperationKind::SwapTopFront);
    match outcome {
        Outcome::Swapped { to_queue, to_stack } => {
            assert_eq!(to_queue.id, 3);
            assert_eq!(to_stack.id, 4);
        }
        other => panic!("unexpected outcome: {:?}", other),
    }
    assert_eq!(stack_ids(&s), vec![4, 2, 1]);
    assert_eq!(queue_ids(&s), vec![3, 5, 6, 7, 8]);
    assert_eq!(s.queue().len(), QUEUE_CAPACITY);
    assert_eq!(s.stack().len(), STACK_CAPACITY);
}

#[test]
fn test_swap_with_empty_stack() {
    let mut s = Session::new(12345);
    assert_eq!(s.step(OperationKind::SwapTopFront), Outcome::StackEmpty);
    assert_eq!(queue_ids(&s), vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_use_reserved_leaves_queue() {
    let mut s = Session::new(12345);
    assert_eq!(s.step(OperationKind::UseReserved), Outcome::NothingReserved);

    s.step(OperationKind::Reserve);
    let queue_before = queue_ids(&s);
    let outcome = s.step(OperationKind::UseReserved);
    assert!(matches!(outcome, Outcome::Used(p) if p.id == 1));
    assert!(s.stack().is_empty());
    assert_eq!(queue_ids(&s), queue_before);
}

#[test]
fn test_invert_then_play_takes_old_back() {
    let mut s = Session::new(12345);
    s.step(OperationKind::Reserve);
    s.step(OperationKind::Reserve);
    assert_eq!(s.step(OperationKind::Invert), Outcome::Inverted);
    assert_eq!(queue_ids(&s), vec![7, 6, 5, 4, 3]);
    assert_eq!(stack_ids(&s), vec![1, 2]);

    let outcome = s.step(OperationKind::Play);
    assert!(matches!(outcome, Outcome::Played(p) if p.id == 7));
    assert_eq!(queue_ids(&s), vec![6, 5, 4, 3, 8]);
}

#[test]
fn test_invert_twice_is_identity() {
    let mut s = Session::new(3);
    s.step(OperationKind::Play);
    s.step(OperationKind::Reserve);
    s.step(OperationKind::Reserve);
    let (q, st) = (queue_ids(&s), stack_ids(&s));

    s.step(OperationKind::Invert);
    s.step(OperationKind::Invert);
    assert_eq!(queue_ids(&s), q);
    assert_eq!(stack_ids(&s), st);
}

#[test]
fn test_new_snapshot_overwrites_old() {
    let mut s = Session::new(12345);
    s.step(OperationKind::Play);
    let after_first = queue_ids(&s);
    s.step(OperationKind::Play);

    s.undo().unwrap();
    assert_eq!(queue_ids(&s), after_first);
    assert!(s.undo().is_err());
}

#[test]
fn test_independent_sessions_do_not_share_ids() {
    let mut a = Session::new(1);
    let b = Session::new(1);
    a.step(OperationKind::Play);
    assert_eq!(queue_ids(&b), vec![1, 2, 3, 4, 5]);
    assert_eq!(b.next_id(), 6);
    assert_eq!(a.next_id(), 7);
}
