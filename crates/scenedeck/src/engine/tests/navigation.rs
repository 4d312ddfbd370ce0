use super::*;
use crate::engine::input::NavCommand;

#[test]
fn goto_while_transitioning_is_rejected() {
    let (mut p, probe) = presentation(&[true, true, true]);
    p.initialize(0);
    settle(&mut p);
    p.goto(1);
    step(&mut p);

    let scene_before = p.active_scene().map(|s| s.root().id());
    for target in [0, 1, 2, 7] {
        assert!(p.goto(target).is_none());
        assert_eq!(p.current_index(), 0);
        assert_eq!(p.active_scene().map(|s| s.root().id()), scene_before);
    }
    settle(&mut p);
    assert_eq!(p.current_index(), 1);
    assert_eq!(probe.borrow().created.len(), 2);
}

#[test]
fn rejected_input_is_not_queued() {
    let (mut p, _probe) = presentation(&[true, true, true]);
    p.initialize(0);
    settle(&mut p);
    p.next();
    p.next();
    p.next();
    settle(&mut p);
    assert_eq!(p.current_index(), 1);
    assert!(!p.is_transitioning());
}

#[test]
fn out_of_range_goto_is_noop() {
    let (mut p, _probe) = presentation(&[true, true]);
    p.initialize(0);
    settle(&mut p);
    assert!(p.goto(2).is_none());
    assert!(p.goto(usize::MAX).is_none());
    assert!(!p.is_transitioning());
    assert_eq!(p.current_index(), 0);
}

#[test]
fn goto_before_initialize_is_noop() {
    let (mut p, probe) = presentation(&[true, true]);
    assert!(p.goto(1).is_none());
    assert!(!p.is_initialized());
    assert!(probe.borrow().created.is_empty());
}

#[test]
fn no_wraparound_at_either_end() {
    let (mut p, _probe) = presentation(&[true, true, true]);
    p.initialize(0);
    settle(&mut p);
    assert!(p.previous().is_none());

    p.last();
    settle(&mut p);
    assert_eq!(p.current_index(), 2);
    assert!(p.next().is_none());
    assert!(!p.is_transitioning());
}

#[test]
fn jumps_directly_without_intermediate_slides() {
    let (mut p, probe) = presentation(&[true, true, true, true, true]);
    p.initialize(0);
    settle(&mut p);
    p.goto(4);
    settle(&mut p);
    assert_eq!(p.current_index(), 4);
    let created: Vec<usize> = probe.borrow().created.iter().map(|(i, _)| *i).collect();
    assert_eq!(created, vec![0, 4]);
}

#[test]
fn commands_map_to_operations() {
    let (mut p, _probe) = presentation(&[true, true, true, true]);
    p.initialize(1);
    settle(&mut p);

    p.apply(NavCommand::Last);
    settle(&mut p);
    assert_eq!(p.current_index(), 3);

    p.apply(NavCommand::Previous);
    settle(&mut p);
    assert_eq!(p.current_index(), 2);

    p.apply(NavCommand::First);
    settle(&mut p);
    assert_eq!(p.current_index(), 0);

    p.apply(NavCommand::Next);
    settle(&mut p);
    assert_eq!(p.current_index(), 1);

    p.apply(NavCommand::GoTo(3));
    settle(&mut p);
    assert_eq!(p.current_index(), 3);
}

#[test]
fn current_index_updates_on_settle() {
    let (mut p, _probe) = presentation(&[true, true]);
    p.initialize(0);
    settle(&mut p);
    p.next();
    assert_eq!(p.transition_target(), Some(1));
    assert_eq!(p.current_index(), 0);
    settle(&mut p);
    assert_eq!(p.current_index(), 1);
    assert_eq!(p.transition_target(), None);
}
