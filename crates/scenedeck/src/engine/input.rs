pub const DEFAULT_SWIPE_THRESHOLD: f32 = 60.0;

/// Keys the presentation reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    ArrowRight,
    ArrowLeft,
    Space,
    Enter,
    Backspace,
    Home,
    End,
}

impl Key {
    #[cfg_attr(not(test), allow(dead_code))]
    pub const ALL: [Key; 7] = [
        Key::ArrowRight,
        Key::ArrowLeft,
        Key::Space,
        Key::Enter,
        Key::Backspace,
        Key::Home,
        Key::End,
    ];
}

/// A "go to" request in the vocabulary of the input surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavCommand {
    Next,
    Previous,
    First,
    Last,
    #[cfg_attr(not(test), allow(dead_code))]
    GoTo(usize),
}

/// Result of feeding one key press to the keyboard adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyOutcome {
    pub command: NavCommand,
    /// The host should swallow the key instead of running its default action.
    pub suppress_default: bool,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct KeyboardAdapter;

impl KeyboardAdapter {
    pub fn map(&self, key: Key) -> KeyOutcome {
        let command = match key {
            Key::ArrowRight | Key::Space | Key::Enter => NavCommand::Next,
            Key::ArrowLeft | Key::Backspace => NavCommand::Previous,
            Key::Home => NavCommand::First,
            Key::End => NavCommand::Last,
        };
        KeyOutcome {
            command,
            suppress_default: true,
        }
    }
}

/// Horizontal swipe detection over touch start/end pairs.
#[derive(Debug, Clone, Copy)]
pub struct SwipeTracker {
    threshold: f32,
    start_x: Option<f32>,
}

impl SwipeTracker {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold: threshold.abs(),
            start_x: None,
        }
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn is_tracking(&self) -> bool {
        self.start_x.is_some()
    }

    pub fn touch_start(&mut self, x: f32) {
        self.start_x = Some(x);
    }

    /// Leftward movement past the threshold means "next", rightward means
    /// "previous". Anything shorter is ignored.
    pub fn touch_end(&mut self, x: f32) -> Option<NavCommand> {
        let start = self.start_x.take()?;
        let dx = x - start;
        if dx.abs() <= self.threshold {
            return None;
        }
        if dx < 0.0 {
            Some(NavCommand::Next)
        } else {
            Some(NavCommand::Previous)
        }
    }

    pub fn cancel(&mut self) {
        self.start_x = None;
    }
}

impl Default for SwipeTracker {
    fn default() -> Self {
        Self::new(DEFAULT_SWIPE_THRESHOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_bindings() {
        let keys = KeyboardAdapter;
        assert_eq!(keys.map(Key::ArrowRight).command, NavCommand::Next);
        assert_eq!(keys.map(Key::Space).command, NavCommand::Next);
        assert_eq!(keys.map(Key::Enter).command, NavCommand::Next);
        assert_eq!(keys.map(Key::ArrowLeft).command, NavCommand::Previous);
        assert_eq!(keys.map(Key::Backspace).command, NavCommand::Previous);
        assert_eq!(keys.map(Key::Home).command, NavCommand::First);
        assert_eq!(keys.map(Key::End).command, NavCommand::Last);
        assert!(Key::ALL.iter().all(|k| keys.map(*k).suppress_default));
    }

    #[test]
    fn long_left_swipe_is_next() {
        let mut swipe = SwipeTracker::default();
        swipe.touch_start(300.0);
        assert_eq!(swipe.touch_end(220.0), Some(NavCommand::Next));
        assert!(!swipe.is_tracking());
    }

    #[test]
    fn long_right_swipe_is_previous() {
        let mut swipe = SwipeTracker::default();
        swipe.touch_start(100.0);
        assert_eq!(swipe.touch_end(200.0), Some(NavCommand::Previous));
    }

    #[test]
    fn short_swipes_are_ignored() {
        let mut swipe = SwipeTracker::default();
        swipe.touch_start(300.0);
        assert_eq!(swipe.touch_end(260.0), None);
        swipe.touch_start(300.0);
        assert_eq!(swipe.touch_end(360.0), None);
    }

    #[test]
    fn end_without_start_is_ignored() {
        let mut swipe = SwipeTracker::default();
        assert_eq!(swipe.touch_end(0.0), None);
        swipe.touch_start(500.0);
        swipe.cancel();
        assert_eq!(swipe.touch_end(0.0), None);
    }
}
