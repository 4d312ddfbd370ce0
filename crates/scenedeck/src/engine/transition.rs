use log::trace;

use super::fade::Fade;
use super::registry::SlideRegistry;
use super::scene::{Scene, SceneEnvironment};
use super::stage::RenderRoot;

pub const DEFAULT_FADE_OUT_FRAMES: f32 = 12.0;
pub const DEFAULT_FADE_IN_FRAMES: f32 = 15.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionTimings {
    pub fade_out_frames: f32,
    pub fade_in_frames: f32,
}

impl Default for TransitionTimings {
    fn default() -> Self {
        Self {
            fade_out_frames: DEFAULT_FADE_OUT_FRAMES,
            fade_in_frames: DEFAULT_FADE_IN_FRAMES,
        }
    }
}

/// Milestones of a running transition, reported in the order they happen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionEvent {
    /// The outgoing scene reached zero opacity, was detached and torn down.
    FadeOutComplete,
    /// Overlays now belong to `index`; `mounted` says whether a scene was built.
    Swapped { index: usize, mounted: bool },
    /// The sequence finished and the lock can be released.
    Settled { index: usize },
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    FadingOut(Fade),
    FadingIn(Fade),
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Transition {
    target: usize,
    phase: Phase,
}

/// The resources a transition mutates. Only the presentation controller
/// builds one of these.
pub struct Surface<'a> {
    pub registry: &'a SlideRegistry,
    pub stage: &'a mut RenderRoot,
    pub slot: &'a mut Option<Box<dyn Scene>>,
    pub environment: &'a SceneEnvironment,
}

/// Runs fade-out, swap and fade-in one after another. At most one sequence
/// exists at a time and it always runs to completion.
#[derive(Debug, Default)]
pub struct TransitionController {
    timings: TransitionTimings,
    current: Option<Transition>,
}

impl TransitionController {
    pub fn new(timings: TransitionTimings) -> Self {
        Self {
            timings,
            current: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.current.is_some()
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn target(&self) -> Option<usize> {
        self.current.map(|t| t.target)
    }

    /// Start a sequence towards `target`. With no outgoing scene the fade-out
    /// is skipped and the swap happens immediately.
    pub fn begin(&mut self, target: usize, surface: Surface<'_>) -> Vec<TransitionEvent> {
        debug_assert!(self.current.is_none(), "transition already running");

        if let Some(scene) = surface.slot.as_ref() {
            let fade = Fade::out_from(scene.root().opacity(), self.timings.fade_out_frames);
            trace!("fade out of {} towards slide {target}", scene.root().id());
            self.current = Some(Transition {
                target,
                phase: Phase::FadingOut(fade),
            });
            return Vec::new();
        }

        let mut events = Vec::with_capacity(2);
        self.swap_in(target, surface, &mut events);
        events
    }

    /// Advance the running sequence by `dt` frames.
    pub fn advance(&mut self, dt: f32, surface: Surface<'_>) -> Vec<TransitionEvent> {
        let mut events = Vec::new();
        let Some(mut transition) = self.current.take() else {
            return events;
        };

        match &mut transition.phase {
            Phase::FadingOut(fade) => {
                let opacity = fade.advance(dt);
                if let Some(scene) = surface.slot.as_mut() {
                    scene.root_mut().set_opacity(opacity);
                }
                if !fade.is_complete() {
                    self.current = Some(transition);
                    return events;
                }
                destroy(surface.slot, surface.stage);
                events.push(TransitionEvent::FadeOutComplete);
                self.swap_in(transition.target, surface, &mut events);
            }
            Phase::FadingIn(fade) => {
                let opacity = fade.advance(dt);
                if let Some(scene) = surface.slot.as_mut() {
                    scene.root_mut().set_opacity(opacity);
                }
                if !fade.is_complete() {
                    self.current = Some(transition);
                    return events;
                }
                trace!("fade in of slide {} complete", transition.target);
                events.push(TransitionEvent::Settled {
                    index: transition.target,
                });
            }
        }
        events
    }

    fn swap_in(&mut self, target: usize, surface: Surface<'_>, events: &mut Vec<TransitionEvent>) {
        debug_assert!(surface.slot.is_none(), "outgoing scene still alive");

        let Some(factory) = surface.registry.factory(target) else {
            events.push(TransitionEvent::Swapped {
                index: target,
                mounted: false,
            });
            events.push(TransitionEvent::Settled { index: target });
            return;
        };

        let mut ctx = surface.environment.context_for(target);
        let mut scene = factory(&mut ctx);
        scene.root_mut().set_opacity(0.0);
        surface.stage.attach(scene.root().id());
        trace!("mounted {} for slide {target}", scene.root().id());
        *surface.slot = Some(scene);

        events.push(TransitionEvent::Swapped {
            index: target,
            mounted: true,
        });
        self.current = Some(Transition {
            target,
            phase: Phase::FadingIn(Fade::fade_in(self.timings.fade_in_frames)),
        });
    }
}

/// Detach and tear down whatever occupies the slot.
pub fn destroy(slot: &mut Option<Box<dyn Scene>>, stage: &mut RenderRoot) {
    if let Some(mut scene) = slot.take() {
        scene.root_mut().set_opacity(0.0);
        stage.detach(scene.root().id());
        scene.teardown();
        trace!("destroyed {}", scene.root().id());
    }
}
