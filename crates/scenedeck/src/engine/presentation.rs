use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use std::time::Duration;

use futures::channel::oneshot;
use log::{debug, info, warn};

use super::chrome::{ChromeState, DEFAULT_HINT_DELAY};
use super::clock::Tick;
use super::input::NavCommand;
use super::location::{LocationStore, MemoryLocation};
use super::registry::SlideRegistry;
use super::scene::{Scene, SceneEnvironment};
use super::stage::RenderRoot;
use super::transition::{self, Surface, TransitionController, TransitionEvent, TransitionTimings};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PresentationOptions {
    pub timings: TransitionTimings,
    pub hint_delay: Duration,
    pub seed: Option<u64>,
}

impl Default for PresentationOptions {
    fn default() -> Self {
        Self {
            timings: TransitionTimings::default(),
            hint_delay: DEFAULT_HINT_DELAY,
            seed: None,
        }
    }
}

/// Resolves with the settled slide index once a transition finishes.
///
/// Yields `None` only if the presentation is dropped mid-transition.
#[derive(Debug)]
pub struct TransitionHandle {
    rx: oneshot::Receiver<usize>,
}

impl Future for TransitionHandle {
    type Output = Option<usize>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.rx).poll(cx).map(Result::ok)
    }
}

/// Owns the current slide, the single live scene and the transition lock.
///
/// Two states: idle, and transitioning (while a [`TransitionController`]
/// sequence is running). Navigation while transitioning is dropped, not queued.
pub struct Presentation {
    registry: SlideRegistry,
    stage: RenderRoot,
    active: Option<Box<dyn Scene>>,
    transitions: TransitionController,
    environment: SceneEnvironment,
    chrome: ChromeState,
    location: Box<dyn LocationStore>,
    current: usize,
    initialized: bool,
    pending: Option<oneshot::Sender<usize>>,
}

impl Presentation {
    pub fn new(registry: SlideRegistry, options: PresentationOptions) -> Self {
        let chrome = ChromeState::new(registry.len(), options.hint_delay);
        Self {
            registry,
            stage: RenderRoot::new(),
            active: None,
            transitions: TransitionController::new(options.timings),
            environment: SceneEnvironment {
                seed: options.seed,
                ..SceneEnvironment::default()
            },
            chrome,
            location: Box::new(MemoryLocation::new()),
            current: 0,
            initialized: false,
            pending: None,
        }
    }

    pub fn with_location(mut self, location: Box<dyn LocationStore>) -> Self {
        self.location = location;
        self
    }

    /// Viewport used by factory calls from now on. The live scene keeps the
    /// size it was built with.
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.environment.width = width;
        self.environment.height = height;
    }

    /// First activation. Out-of-range indices are clamped and there is no
    /// fade-out because nothing is on stage yet.
    pub fn initialize(&mut self, initial: usize) -> Option<TransitionHandle> {
        if self.initialized {
            warn!("presentation already initialized; ignoring initialize({initial})");
            return None;
        }
        let index = self.registry.clamp(initial);
        if index != initial {
            debug!("initial slide {initial} clamped to {index}");
        }
        info!("starting at slide {} of {}", index + 1, self.registry.len());
        self.initialized = true;
        self.current = index;
        Some(self.begin(index))
    }

    /// Jump straight to `target`. A no-op while a transition runs or when the
    /// index is out of range.
    pub fn goto(&mut self, target: usize) -> Option<TransitionHandle> {
        if !self.initialized {
            debug!("goto({target}) before initialize; ignored");
            return None;
        }
        if self.is_transitioning() {
            debug!("goto({target}) dropped: transition in flight");
            return None;
        }
        if !self.registry.contains(target) {
            debug!("goto({target}) dropped: out of range");
            return None;
        }
        debug!("goto {} -> {target}", self.current);
        Some(self.begin(target))
    }

    pub fn next(&mut self) -> Option<TransitionHandle> {
        self.goto(self.current + 1)
    }

    pub fn previous(&mut self) -> Option<TransitionHandle> {
        self.goto(self.current.checked_sub(1)?)
    }

    pub fn first(&mut self) -> Option<TransitionHandle> {
        self.goto(0)
    }

    pub fn last(&mut self) -> Option<TransitionHandle> {
        self.goto(self.registry.last_index())
    }

    pub fn apply(&mut self, command: NavCommand) -> Option<TransitionHandle> {
        match command {
            NavCommand::Next => self.next(),
            NavCommand::Previous => self.previous(),
            NavCommand::First => self.first(),
            NavCommand::Last => self.last(),
            NavCommand::GoTo(index) => self.goto(index),
        }
    }

    /// One clock tick: update the live scene, then advance any transition.
    pub fn tick(&mut self, tick: Tick) -> Vec<TransitionEvent> {
        if let Some(scene) = self.active.as_mut() {
            scene.update(tick.delta);
        }

        let events = if self.transitions.is_running() {
            let surface = Surface {
                registry: &self.registry,
                stage: &mut self.stage,
                slot: &mut self.active,
                environment: &self.environment,
            };
            self.transitions.advance(tick.delta, surface)
        } else {
            Vec::new()
        };
        self.handle_events(&events);

        self.chrome.advance_hint(tick.elapsed);
        events
    }

    fn begin(&mut self, target: usize) -> TransitionHandle {
        let (tx, rx) = oneshot::channel();
        self.pending = Some(tx);

        let surface = Surface {
            registry: &self.registry,
            stage: &mut self.stage,
            slot: &mut self.active,
            environment: &self.environment,
        };
        let events = self.transitions.begin(target, surface);
        self.handle_events(&events);

        TransitionHandle { rx }
    }

    fn handle_events(&mut self, events: &[TransitionEvent]) {
        for event in events {
            match *event {
                TransitionEvent::FadeOutComplete => {}
                TransitionEvent::Swapped { index, .. } => self.chrome.show_overlay(index),
                TransitionEvent::Settled { index } => self.settle(index),
            }
        }
    }

    fn settle(&mut self, index: usize) {
        self.current = index;
        self.chrome.settle(index);
        if let Err(e) = self.location.store(self.chrome.location()) {
            warn!("Failed to persist location: {e}");
        }
        if let Some(tx) = self.pending.take() {
            // The caller may have dropped its handle.
            let _ = tx.send(index);
        }
        debug!("settled on slide {}", index + 1);
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn is_transitioning(&self) -> bool {
        self.transitions.is_running()
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn transition_target(&self) -> Option<usize> {
        self.transitions.target()
    }

    pub fn active_scene(&self) -> Option<&dyn Scene> {
        self.active.as_deref()
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn stage(&self) -> &RenderRoot {
        &self.stage
    }

    pub fn chrome(&self) -> &ChromeState {
        &self.chrome
    }

    pub fn registry(&self) -> &SlideRegistry {
        &self.registry
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn slide_count(&self) -> usize {
        self.registry.len()
    }
}

impl Drop for Presentation {
    fn drop(&mut self) {
        transition::destroy(&mut self.active, &mut self.stage);
    }
}
