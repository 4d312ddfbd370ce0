use super::*;

#[test]
fn initialize_mounts_one_scene_at_full_opacity() {
    for i in 0..3 {
        let (mut p, probe) = presentation(&[true, true, true]);
        p.initialize(i);
        settle(&mut p);

        assert_eq!(p.current_index(), i);
        let scene = p.active_scene().expect("scene mounted");
        assert_eq!(scene.root().opacity(), 1.0);
        assert!(p.stage().is_attached(scene.root().id()));
        assert_eq!(p.stage().len(), 1);
        assert_eq!(probe.borrow().live(), 1);
    }
}

#[test]
fn initialize_skips_fade_out() {
    let (mut p, _probe) = presentation(&[true, true]);
    p.initialize(0);
    assert!(p.is_transitioning());
    assert_eq!(active_opacity(&p), Some(0.0));
    assert_eq!(settle(&mut p), 15);
}

#[test]
fn initialize_clamps_out_of_range() {
    let (mut p, _probe) = presentation(&[true, true, true]);
    p.initialize(42);
    settle(&mut p);
    assert_eq!(p.current_index(), 2);
}

#[test]
fn initialize_on_overlay_only_slide_settles_immediately() {
    let (mut p, probe) = presentation(&[false, true]);
    let handle = p.initialize(0);
    assert!(handle.is_some());
    assert!(!p.is_transitioning());
    assert!(p.active_scene().is_none());
    assert_eq!(p.chrome().active_overlay(), Some(0));
    assert_eq!(p.chrome().counter(), "1 / 2");
    assert!(probe.borrow().created.is_empty());
}

#[test]
fn second_initialize_is_ignored() {
    let (mut p, probe) = presentation(&[true, true]);
    p.initialize(0);
    settle(&mut p);
    assert!(p.initialize(1).is_none());
    assert_eq!(p.current_index(), 0);
    assert_eq!(probe.borrow().created.len(), 1);
}

#[test]
fn outgoing_scene_is_destroyed_before_incoming_is_built() {
    let (mut p, probe) = presentation(&[true, true, true, true]);
    p.initialize(0);
    settle(&mut p);
    for target in [1, 3, 2, 0, 2] {
        p.goto(target);
        settle(&mut p);
    }
    let probe = probe.borrow();
    assert!(probe.live_at_creation.iter().all(|live| *live == 0));
    assert_eq!(probe.live(), 1);
    assert_eq!(probe.created.len(), 6);
}

#[test]
fn never_more_than_one_live_scene_during_transition() {
    let (mut p, probe) = presentation(&[true, true]);
    p.initialize(0);
    settle(&mut p);
    p.goto(1);
    while p.is_transitioning() {
        step(&mut p);
        assert!(probe.borrow().live() <= 1);
        assert!(p.stage().len() <= 1);
    }
}

#[test]
fn torn_down_scene_is_detached() {
    let (mut p, probe) = presentation(&[true, true]);
    p.initialize(0);
    settle(&mut p);
    let first = p.active_scene().unwrap().root().id();
    p.goto(1);
    settle(&mut p);
    assert!(!p.stage().is_attached(first));
    assert_eq!(probe.borrow().torn_down, vec![first]);
}

#[test]
fn destroyed_scene_receives_no_further_updates() {
    let (mut p, probe) = presentation(&[true, true]);
    p.initialize(0);
    settle(&mut p);
    let first = p.active_scene().unwrap().root().id();
    p.goto(1);
    settle(&mut p);

    let before = probe.borrow().updates.iter().filter(|id| **id == first).count();
    for _ in 0..10 {
        step(&mut p);
    }
    let after = probe.borrow().updates.iter().filter(|id| **id == first).count();
    assert_eq!(before, after);
}

#[test]
fn active_scene_updates_once_per_tick() {
    let (mut p, probe) = presentation(&[true]);
    p.initialize(0);
    settle(&mut p);
    let baseline = probe.borrow().updates.len();
    for _ in 0..5 {
        step(&mut p);
    }
    assert_eq!(probe.borrow().updates.len(), baseline + 5);
}

#[test]
fn goto_current_replaces_without_leaking() {
    let (mut p, probe) = presentation(&[true, true]);
    p.initialize(1);
    settle(&mut p);
    let first = p.active_scene().unwrap().root().id();

    assert!(p.goto(1).is_some());
    settle(&mut p);

    assert_eq!(p.current_index(), 1);
    let replacement = p.active_scene().unwrap().root().id();
    assert_ne!(first, replacement);
    assert_eq!(probe.borrow().live(), 1);
    assert_eq!(p.stage().children(), &[replacement]);
}

#[test]
fn dropping_presentation_tears_down_live_scene() {
    let (mut p, probe) = presentation(&[true]);
    p.initialize(0);
    settle(&mut p);
    drop(p);
    assert_eq!(probe.borrow().live(), 0);
}

#[test]
fn factories_see_the_latest_viewport() {
    let sizes: Rc<RefCell<Vec<(f32, f32)>>> = Rc::default();
    let entries = (0..2)
        .map(|i| {
            let sizes = Rc::clone(&sizes);
            SlideEntry::scene(format!("{i}"), Overlay::new("x"), move |ctx| {
                sizes.borrow_mut().push((ctx.width, ctx.height));
                Box::new(ProbeScene {
                    root: RenderNode::new(),
                    probe: SharedProbe::default(),
                })
            })
        })
        .collect();
    let registry = SlideRegistry::new(entries).unwrap();
    let mut p = Presentation::new(registry, PresentationOptions::default());

    p.set_viewport(800.0, 600.0);
    p.initialize(0);
    settle(&mut p);
    p.set_viewport(1920.0, 1080.0);
    p.next();
    settle(&mut p);

    assert_eq!(*sizes.borrow(), vec![(800.0, 600.0), (1920.0, 1080.0)]);
}
