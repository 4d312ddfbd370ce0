use std::time::Duration;

use super::location;

pub const DEFAULT_HINT_DELAY: Duration = Duration::from_secs(5);

/// Everything drawn around the canvas: per-slide overlays, progress bar,
/// counter, the launch hint and the location token.
#[derive(Debug, Clone, PartialEq)]
pub struct ChromeState {
    overlays: Vec<bool>,
    progress: f32,
    counter: String,
    location: String,
    hint_visible: bool,
    hint_remaining: Duration,
}

impl ChromeState {
    pub fn new(slide_count: usize, hint_delay: Duration) -> Self {
        Self {
            overlays: vec![false; slide_count],
            progress: 0.0,
            counter: counter_text(0, slide_count),
            location: String::new(),
            hint_visible: true,
            hint_remaining: hint_delay,
        }
    }

    /// Mark exactly one overlay as active.
    pub fn show_overlay(&mut self, index: usize) {
        for (i, active) in self.overlays.iter_mut().enumerate() {
            *active = i == index;
        }
    }

    pub fn active_overlay(&self) -> Option<usize> {
        self.overlays.iter().position(|active| *active)
    }

    /// Refresh progress, counter and location after a transition settles.
    pub fn settle(&mut self, index: usize) {
        let total = self.overlays.len();
        self.progress = progress_ratio(index, total);
        self.counter = counter_text(index, total);
        self.location = location::format_token(index);
    }

    /// Count down the launch hint. It hides once and never comes back.
    pub fn advance_hint(&mut self, elapsed: Duration) {
        if !self.hint_visible {
            return;
        }
        self.hint_remaining = self.hint_remaining.saturating_sub(elapsed);
        if self.hint_remaining.is_zero() {
            self.hint_visible = false;
        }
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn counter(&self) -> &str {
        &self.counter
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn hint_visible(&self) -> bool {
        self.hint_visible
    }
}

/// `index / (total - 1)`; a single-slide deck counts as complete.
pub fn progress_ratio(index: usize, total: usize) -> f32 {
    if total <= 1 {
        return 1.0;
    }
    index as f32 / (total - 1) as f32
}

pub fn counter_text(index: usize, total: usize) -> String {
    format!("{} / {}", index + 1, total)
}
