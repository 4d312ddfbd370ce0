use anyhow::Result;

use super::scene::{RenderContext, Scene, SceneFactory};

/// Overlay text drawn above the canvas while a slide is active.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overlay {
    pub kicker: Option<String>,
    pub heading: String,
    pub body: Option<String>,
}

impl Overlay {
    pub fn new(heading: impl Into<String>) -> Self {
        Self {
            kicker: None,
            heading: heading.into(),
            body: None,
        }
    }

    pub fn kicker(mut self, kicker: impl Into<String>) -> Self {
        self.kicker = Some(kicker.into());
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }
}

pub struct SlideEntry {
    pub title: String,
    pub overlay: Overlay,
    /// `None` marks an overlay-only slide with nothing on the canvas.
    pub factory: Option<SceneFactory>,
}

impl SlideEntry {
    pub fn scene<F>(title: impl Into<String>, overlay: Overlay, factory: F) -> Self
    where
        F: Fn(&mut RenderContext) -> Box<dyn Scene> + 'static,
    {
        Self {
            title: title.into(),
            overlay,
            factory: Some(Box::new(factory)),
        }
    }

    pub fn overlay_only(title: impl Into<String>, overlay: Overlay) -> Self {
        Self {
            title: title.into(),
            overlay,
            factory: None,
        }
    }

    pub fn has_scene(&self) -> bool {
        self.factory.is_some()
    }
}

impl std::fmt::Debug for SlideEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SlideEntry")
            .field("title", &self.title)
            .field("overlay", &self.overlay)
            .field("factory", &self.factory.as_ref().map(|_| "<factory>"))
            .finish()
    }
}

/// Ordered, fixed-size table of slides.
#[derive(Debug)]
pub struct SlideRegistry {
    entries: Vec<SlideEntry>,
}

impl SlideRegistry {
    pub fn new(entries: Vec<SlideEntry>) -> Result<Self> {
        if entries.is_empty() {
            anyhow::bail!("A presentation needs at least one slide");
        }
        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn last_index(&self) -> usize {
        self.entries.len() - 1
    }

    pub fn contains(&self, index: usize) -> bool {
        index < self.entries.len()
    }

    pub fn get(&self, index: usize) -> Option<&SlideEntry> {
        self.entries.get(index)
    }

    pub fn factory(&self, index: usize) -> Option<&SceneFactory> {
        self.entries.get(index).and_then(|e| e.factory.as_ref())
    }

    pub fn clamp(&self, index: usize) -> usize {
        index.min(self.last_index())
    }

    pub fn iter(&self) -> impl Iterator<Item = &SlideEntry> {
        self.entries.iter()
    }
}
