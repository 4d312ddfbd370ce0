mod fades;
mod lifecycle;
mod navigation;

use std::cell::RefCell;
use std::rc::Rc;

use super::clock::Tick;
use super::presentation::{Presentation, PresentationOptions};
use super::registry::{Overlay, SlideEntry, SlideRegistry};
use super::scene::Scene;
use super::stage::{NodeId, RenderNode};

/// Lifecycle record shared by every probe scene of one test.
#[derive(Debug, Default)]
struct Probe {
    created: Vec<(usize, NodeId)>,
    torn_down: Vec<NodeId>,
    /// Root opacity at the moment teardown ran.
    teardown_opacity: Vec<f32>,
    updates: Vec<NodeId>,
    /// Live scene count observed at the moment each factory ran.
    live_at_creation: Vec<usize>,
}

impl Probe {
    fn live(&self) -> usize {
        self.created.len() - self.torn_down.len()
    }
}

type SharedProbe = Rc<RefCell<Probe>>;

struct ProbeScene {
    root: RenderNode,
    probe: SharedProbe,
}

impl Scene for ProbeScene {
    fn root(&self) -> &RenderNode {
        &self.root
    }

    fn root_mut(&mut self) -> &mut RenderNode {
        &mut self.root
    }

    fn update(&mut self, _dt: f32) {
        self.probe.borrow_mut().updates.push(self.root.id());
    }

    fn teardown(&mut self) {
        let mut probe = self.probe.borrow_mut();
        probe.torn_down.push(self.root.id());
        probe.teardown_opacity.push(self.root.opacity());
    }
}

/// Build a registry where `true` is a canvas slide and `false` an
/// overlay-only slide.
fn deck(layout: &[bool], probe: &SharedProbe) -> SlideRegistry {
    let entries = layout
        .iter()
        .enumerate()
        .map(|(i, has_scene)| {
            let title = format!("Slide {i}");
            if !has_scene {
                return SlideEntry::overlay_only(title.clone(), Overlay::new(title));
            }
            let probe = Rc::clone(probe);
            SlideEntry::scene(title.clone(), Overlay::new(title), move |_ctx| {
                let root = RenderNode::new();
                let mut p = probe.borrow_mut();
                let live = p.live();
                p.live_at_creation.push(live);
                p.created.push((i, root.id()));
                Box::new(ProbeScene {
                    root,
                    probe: Rc::clone(&probe),
                })
            })
        })
        .collect();
    SlideRegistry::new(entries).unwrap()
}

fn presentation(layout: &[bool]) -> (Presentation, SharedProbe) {
    let probe = SharedProbe::default();
    let options = PresentationOptions {
        seed: Some(1),
        ..PresentationOptions::default()
    };
    (Presentation::new(deck(layout, &probe), options), probe)
}

fn step(p: &mut Presentation) {
    p.tick(Tick::frames(1.0));
}

/// Tick one frame at a time until the transition lock is released.
/// Returns the number of ticks taken.
fn settle(p: &mut Presentation) -> usize {
    let mut ticks = 0;
    while p.is_transitioning() {
        step(p);
        ticks += 1;
        assert!(ticks < 10_000, "transition never settled");
    }
    ticks
}

fn active_opacity(p: &Presentation) -> Option<f32> {
    p.active_scene().map(|s| s.root().opacity())
}
