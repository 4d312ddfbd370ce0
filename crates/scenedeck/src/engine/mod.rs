//! Slide lifecycle and transition engine.
//!
//! The [`Presentation`] owns at most one live [`Scene`], drives it from a
//! shared [`FrameClock`] and swaps scenes with a fade-out, swap, fade-in
//! sequence run by the [`TransitionController`].

pub mod chrome;
pub mod clock;
pub mod fade;
pub mod input;
pub mod location;
pub mod presentation;
pub mod registry;
pub mod scene;
pub mod stage;
pub mod transition;

#[cfg(test)]
mod tests;

pub use chrome::ChromeState;
pub use clock::FrameClock;
pub use input::{Key, KeyboardAdapter, SwipeTracker};
pub use presentation::{Presentation, PresentationOptions};
pub use registry::{Overlay, SlideEntry, SlideRegistry};
pub use scene::{RenderContext, Scene};
pub use stage::{Label, RenderNode};
pub use transition::TransitionEvent;
