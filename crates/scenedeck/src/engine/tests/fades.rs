use super::*;
use crate::engine::TransitionEvent;
use crate::engine::clock::Tick;

#[test]
fn fade_out_then_fade_in_budgets() {
    let (mut p, _probe) = presentation(&[true, true]);
    p.initialize(0);
    settle(&mut p);
    p.goto(1);

    let mut fade_out_ticks = None;
    let mut ticks = 0;
    while p.is_transitioning() {
        let events = p.tick(Tick::frames(1.0));
        ticks += 1;
        if events.contains(&TransitionEvent::FadeOutComplete) {
            fade_out_ticks = Some(ticks);
        }
    }
    assert_eq!(fade_out_ticks, Some(12));
    assert_eq!(ticks, 27);
}

#[test]
fn sampled_opacity_is_monotonic() {
    let (mut p, _probe) = presentation(&[true, true]);
    p.initialize(0);
    settle(&mut p);
    let outgoing = p.active_scene().unwrap().root().id();
    p.goto(1);

    let mut out_samples = Vec::new();
    let mut in_samples = Vec::new();
    while p.is_transitioning() {
        // Uneven deltas, like a real frame clock.
        p.tick(Tick::frames(0.8 + (out_samples.len() + in_samples.len()) as f32 % 3.0 * 0.3));
        if let Some(scene) = p.active_scene() {
            if scene.root().id() == outgoing {
                out_samples.push(scene.root().opacity());
            } else {
                in_samples.push(scene.root().opacity());
            }
        }
    }

    assert!(out_samples.windows(2).all(|w| w[1] <= w[0]));
    assert!(in_samples.windows(2).all(|w| w[1] >= w[0]));
    assert_eq!(in_samples.first().copied(), Some(0.0));
    assert_eq!(in_samples.last().copied(), Some(1.0));
}

#[test]
fn outgoing_opacity_is_exactly_zero_at_teardown() {
    let (mut p, probe) = presentation(&[true, true]);
    p.initialize(0);
    settle(&mut p);
    p.goto(1);
    // Big steps overshoot the budget; the clamp must still land on 0.
    let mut last_outgoing = None;
    let outgoing = p.active_scene().unwrap().root().id();
    loop {
        p.tick(Tick::frames(5.0));
        match p.active_scene() {
            Some(s) if s.root().id() == outgoing => last_outgoing = Some(s.root().opacity()),
            _ => break,
        }
    }
    assert!(last_outgoing.is_some_and(|o| o > 0.0 && o < 1.0));
    assert_eq!(probe.borrow().teardown_opacity, vec![0.0]);
    assert!(!p.stage().is_attached(outgoing));
    assert_eq!(active_opacity(&p), Some(0.0));
}

#[test]
fn fade_is_driven_by_delta_not_tick_count() {
    let (mut p, _probe) = presentation(&[true]);
    p.initialize(0);
    // 15 frame budget covered by three ticks of five frames each.
    p.tick(Tick::frames(5.0));
    p.tick(Tick::frames(5.0));
    assert!(p.is_transitioning());
    p.tick(Tick::frames(5.0));
    assert!(!p.is_transitioning());
    assert_eq!(active_opacity(&p), Some(1.0));
}

#[test]
fn zero_delta_ticks_do_not_progress_fades() {
    let (mut p, _probe) = presentation(&[true]);
    p.initialize(0);
    for _ in 0..100 {
        p.tick(Tick::frames(0.0));
    }
    assert!(p.is_transitioning());
    assert_eq!(active_opacity(&p), Some(0.0));
}
