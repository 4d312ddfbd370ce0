use eframe::egui;
use rand::SeedableRng;
use rand::rngs::StdRng;

use super::stage::RenderNode;

/// One slide's renderable content plus its per-frame hooks.
///
/// Implementors own their root node. `update` and `teardown` are optional
/// capabilities; the defaults do nothing.
pub trait Scene {
    fn root(&self) -> &RenderNode;

    fn root_mut(&mut self) -> &mut RenderNode;

    /// Called once per clock tick while the scene is active. `dt` is in
    /// frame-equivalent units.
    fn update(&mut self, _dt: f32) {}

    /// Release anything held outside of the root node.
    fn teardown(&mut self) {}
}

/// Everything a factory may look at while building a scene.
pub struct RenderContext {
    pub width: f32,
    pub height: f32,
    pub rng: StdRng,
}

impl RenderContext {
    pub fn new(width: f32, height: f32, rng: StdRng) -> Self {
        Self { width, height, rng }
    }

    /// Context with a fixed seed, for reproducible scene content.
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn seeded(width: f32, height: f32, seed: u64) -> Self {
        Self::new(width, height, StdRng::seed_from_u64(seed))
    }

    pub fn center(&self) -> egui::Pos2 {
        egui::pos2(self.width / 2.0, self.height / 2.0)
    }
}

pub type SceneFactory = Box<dyn Fn(&mut RenderContext) -> Box<dyn Scene>>;

/// Viewport and randomness source handed to every factory call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneEnvironment {
    pub width: f32,
    pub height: f32,
    /// With a seed, slide `i` always sees the same random stream.
    pub seed: Option<u64>,
}

impl SceneEnvironment {
    pub fn new(width: f32, height: f32, seed: Option<u64>) -> Self {
        Self {
            width,
            height,
            seed,
        }
    }

    pub fn context_for(&self, index: usize) -> RenderContext {
        let rng = match self.seed {
            Some(seed) => {
                StdRng::seed_from_u64(seed ^ (index as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15))
            }
            None => StdRng::from_os_rng(),
        };
        RenderContext::new(self.width, self.height, rng)
    }
}

impl Default for SceneEnvironment {
    fn default() -> Self {
        Self::new(1280.0, 720.0, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Bare {
        root: RenderNode,
    }

    impl Scene for Bare {
        fn root(&self) -> &RenderNode {
            &self.root
        }

        fn root_mut(&mut self) -> &mut RenderNode {
            &mut self.root
        }
    }

    #[test]
    fn default_hooks_are_noops() {
        let mut scene = Bare {
            root: RenderNode::new(),
        };
        scene.update(1.0);
        scene.teardown();
        assert_eq!(scene.root().opacity(), 1.0);
    }

    #[test]
    fn seeded_contexts_are_reproducible() {
        use rand::Rng;
        let mut a = RenderContext::seeded(800.0, 600.0, 7);
        let mut b = RenderContext::seeded(800.0, 600.0, 7);
        assert_eq!(a.rng.random::<u64>(), b.rng.random::<u64>());
        assert_eq!(a.center(), egui::pos2(400.0, 300.0));
    }

    #[test]
    fn environment_seeds_per_slide() {
        use rand::Rng;
        let env = SceneEnvironment::new(640.0, 480.0, Some(42));
        let first: u64 = env.context_for(3).rng.random();
        let again: u64 = env.context_for(3).rng.random();
        let other: u64 = env.context_for(4).rng.random();
        assert_eq!(first, again);
        assert_ne!(first, other);
        let ctx = env.context_for(0);
        assert_eq!((ctx.width, ctx.height), (640.0, 480.0));
    }
}
