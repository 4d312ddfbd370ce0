//! Rockets launch, burst, and shed confetti.

use std::collections::VecDeque;
use std::f32::consts::TAU;

use eframe::egui::{Color32, Pos2, Rect, Shape, Vec2, pos2, vec2};
use rand::Rng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;

use super::tint;
use crate::engine::{RenderContext, RenderNode, Scene};
use crate::theme::palette;

const TRAIL_LEN: usize = 10;

struct Rocket {
    x: f32,
    y: f32,
    vy: f32,
    target_y: f32,
    color: Color32,
    trail: VecDeque<Pos2>,
}

struct Spark {
    pos: Pos2,
    vel: Vec2,
    color: Color32,
    life: f32,
    decay: f32,
    size: f32,
}

struct Confetti {
    pos: Pos2,
    vel: Vec2,
    color: Color32,
    life: f32,
    decay: f32,
    w: f32,
    h: f32,
}

pub struct FireworksScene {
    root: RenderNode,
    rng: StdRng,
    width: f32,
    height: f32,
    rockets: Vec<Rocket>,
    sparks: Vec<Spark>,
    confetti: Vec<Confetti>,
    next_launch: f32,
}

pub fn build(ctx: &mut RenderContext) -> Box<dyn Scene> {
    Box::new(FireworksScene::new(ctx))
}

impl FireworksScene {
    fn new(ctx: &RenderContext) -> Self {
        Self {
            root: RenderNode::new(),
            rng: ctx.rng.clone(),
            width: ctx.width,
            height: ctx.height,
            rockets: Vec::new(),
            sparks: Vec::new(),
            confetti: Vec::new(),
            next_launch: 20.0,
        }
    }

    fn pick_color(&mut self) -> Color32 {
        palette::ALL
            .choose(&mut self.rng)
            .copied()
            .unwrap_or(palette::RED)
    }

    fn launch(&mut self) {
        let color = self.pick_color();
        self.rockets.push(Rocket {
            x: self.width * 0.15 + self.rng.random_range(0.0..=self.width * 0.7),
            y: self.height + 5.0,
            vy: -self.rng.random_range(7.0..11.0),
            target_y: self.height * 0.12 + self.rng.random_range(0.0..=self.height * 0.35),
            color,
            trail: VecDeque::with_capacity(TRAIL_LEN),
        });
    }

    fn explode(&mut self, at: Pos2, color: Color32) {
        let count = self.rng.random_range(30..55);
        for _ in 0..count {
            let angle = self.rng.random_range(0.0..TAU);
            let speed = self.rng.random_range(1.0..5.5);
            self.sparks.push(Spark {
                pos: at,
                vel: vec2(angle.cos(), angle.sin()) * speed,
                color,
                life: 1.0,
                decay: self.rng.random_range(0.007..0.015),
                size: self.rng.random_range(0.5..3.0),
            });
        }
        for _ in 0..12 {
            let color = self.pick_color();
            self.confetti.push(Confetti {
                pos: pos2(at.x + self.rng.random_range(-15.0..15.0), at.y),
                vel: vec2(self.rng.random_range(-1.0..1.0), self.rng.random_range(-0.5..0.5)),
                color,
                life: 1.0,
                decay: self.rng.random_range(0.003..0.006),
                w: self.rng.random_range(3.0..7.0),
                h: self.rng.random_range(2.0..4.0),
            });
        }
    }

    fn step(&mut self, dt: f32) {
        self.next_launch -= dt;
        if self.next_launch <= 0.0 {
            self.launch();
            self.next_launch = self.rng.random_range(35.0..80.0);
        }

        let mut exploded = Vec::new();
        self.rockets.retain_mut(|r| {
            r.y += r.vy * dt;
            if r.trail.len() == TRAIL_LEN {
                r.trail.pop_front();
            }
            r.trail.push_back(pos2(r.x, r.y));
            if r.y <= r.target_y {
                exploded.push((pos2(r.x, r.y), r.color));
                false
            } else {
                true
            }
        });
        for (at, color) in exploded {
            self.explode(at, color);
        }

        for s in &mut self.sparks {
            s.pos += s.vel * dt;
            s.vel.y += 0.03 * dt;
            s.life -= s.decay * dt;
        }
        self.sparks.retain(|s| s.life > 0.0);

        for c in &mut self.confetti {
            c.pos += c.vel * dt;
            c.vel.y += 0.02 * dt;
            c.life -= c.decay * dt;
        }
        self.confetti.retain(|c| c.life > 0.0);
    }

    fn draw(&mut self) {
        self.root.clear();

        for r in &self.rockets {
            let n = r.trail.len() as f32;
            for (j, p) in r.trail.iter().enumerate() {
                self.root
                    .push(Shape::circle_filled(*p, 1.5, tint(r.color, j as f32 / n * 0.5)));
            }
            self.root
                .push(Shape::circle_filled(pos2(r.x, r.y), 2.5, tint(Color32::WHITE, 0.9)));
        }

        for s in &self.sparks {
            self.root
                .push(Shape::circle_filled(s.pos, s.size * s.life, tint(s.color, s.life * 0.8)));
        }

        for c in &self.confetti {
            let rect = Rect::from_center_size(c.pos, vec2(c.w, c.h));
            self.root
                .push(Shape::rect_filled(rect, 0.0, tint(c.color, c.life * 0.7)));
        }
    }
}

impl Scene for FireworksScene {
    fn root(&self) -> &RenderNode {
        &self.root
    }

    fn root_mut(&mut self) -> &mut RenderNode {
        &mut self.root
    }

    fn update(&mut self, dt: f32) {
        self.step(dt);
        self.draw();
    }

    fn teardown(&mut self) {
        self.rockets.clear();
        self.sparks.clear();
        self.confetti.clear();
    }
}
