//! Letters spring into place, one phrase after another.

use eframe::egui::{Color32, pos2};
use rand::Rng;
use rand::rngs::StdRng;

use super::tint;
use crate::engine::{Label, RenderContext, RenderNode, Scene};

const PHRASES: [&str; 3] = ["MOVE FAST", "THINK BIG", "SHIP IT"];
/// Frames each phrase stays on screen.
const PHRASE_FRAMES: f32 = 200.0;
const CHAR_WIDTH: f32 = 48.0;
const FONT_SIZE: f32 = 80.0;
/// Stagger between letters, in frames.
const LETTER_DELAY: f32 = 6.0;

struct Letter {
    ch: char,
    x: f32,
    y: f32,
    target_y: f32,
    vy: f32,
    scale: f32,
    vscale: f32,
    alpha: f32,
    delay: f32,
}

pub struct KineticScene {
    root: RenderNode,
    rng: StdRng,
    width: f32,
    height: f32,
    phrase: usize,
    letters: Vec<Letter>,
    phrase_time: f32,
}

pub fn build(ctx: &mut RenderContext) -> Box<dyn Scene> {
    Box::new(KineticScene::new(ctx))
}

impl KineticScene {
    fn new(ctx: &RenderContext) -> Self {
        let mut scene = Self {
            root: RenderNode::new(),
            rng: ctx.rng.clone(),
            width: ctx.width,
            height: ctx.height,
            phrase: 0,
            letters: Vec::new(),
            phrase_time: 0.0,
        };
        scene.spell(0);
        scene
    }

    fn spell(&mut self, phrase: usize) {
        let text = PHRASES[phrase];
        let total = text.chars().count() as f32 * CHAR_WIDTH;
        let start_x = (self.width - total) / 2.0;

        self.phrase = phrase;
        self.phrase_time = 0.0;
        self.letters = text
            .chars()
            .enumerate()
            .filter(|(_, ch)| *ch != ' ')
            .map(|(i, ch)| Letter {
                ch,
                x: start_x + i as f32 * CHAR_WIDTH + CHAR_WIDTH / 2.0,
                // Alternate letters enter from above and below.
                y: if i % 2 == 0 { -100.0 } else { self.height + 100.0 },
                target_y: self.height * 0.5,
                vy: 0.0,
                scale: self.rng.random_range(0.2..0.4),
                vscale: 0.0,
                alpha: 0.0,
                delay: i as f32 * LETTER_DELAY,
            })
            .collect();
    }

    fn draw(&mut self) {
        self.root.clear();
        for l in &self.letters {
            if l.alpha <= 0.0 {
                continue;
            }
            self.root.label(Label::new(
                l.ch.to_string(),
                pos2(l.x, l.y),
                FONT_SIZE * l.scale,
                tint(Color32::WHITE, l.alpha),
            ));
        }
    }
}

impl Scene for KineticScene {
    fn root(&self) -> &RenderNode {
        &self.root
    }

    fn root_mut(&mut self) -> &mut RenderNode {
        &mut self.root
    }

    fn update(&mut self, dt: f32) {
        self.phrase_time += dt;
        if self.phrase_time > PHRASE_FRAMES {
            self.spell((self.phrase + 1) % PHRASES.len());
        }

        let elapsed = self.phrase_time;
        for l in self.letters.iter_mut().filter(|l| elapsed >= l.delay) {
            l.vy += (l.target_y - l.y) * 0.06;
            l.vy *= 0.82;
            l.y += l.vy * dt * 0.5;

            l.vscale += (1.0 - l.scale) * 0.08;
            l.vscale *= 0.82;
            l.scale = (l.scale + l.vscale * dt * 0.5).max(0.1);

            l.alpha = (l.alpha + 0.05 * dt).min(1.0);
        }

        self.draw();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scene() -> KineticScene {
        KineticScene::new(&RenderContext::seeded(1280.0, 720.0, 4))
    }

    #[test]
    fn spaces_are_skipped() {
        let s = scene();
        assert_eq!(s.letters.len(), "MOVEFAST".len());
    }

    #[test]
    fn letters_settle_on_the_midline() {
        let mut s = scene();
        for _ in 0..150 {
            s.update(1.0);
        }
        for l in &s.letters {
            assert!((l.y - 360.0).abs() < 2.0, "{} at {}", l.ch, l.y);
            assert!((l.scale - 1.0).abs() < 0.05);
            assert_eq!(l.alpha, 1.0);
        }
        assert_eq!(s.root().labels().len(), s.letters.len());
    }

    #[test]
    fn phrases_cycle() {
        let mut s = scene();
        for _ in 0..201 {
            s.update(1.0);
        }
        assert_eq!(s.phrase, 1);
        assert_eq!(s.letters.len(), "THINKBIG".len());
    }
}
