//! Swirling particle vortex, squashed for a bit of perspective.

use std::f32::consts::TAU;

use eframe::egui::{Color32, Pos2, Shape, pos2};
use rand::Rng;

use super::{glow, lerp_color, tint};
use crate::engine::{RenderContext, RenderNode, Scene};
use crate::theme::palette;

const COUNT: usize = 900;
const MIN_DIST: f32 = 20.0;
const MAX_DIST: f32 = 320.0;

struct Particle {
    angle: f32,
    dist: f32,
    speed: f32,
    size: f32,
    drift: f32,
}

pub struct NebulaScene {
    root: RenderNode,
    center: Pos2,
    particles: Vec<Particle>,
    elapsed: f32,
}

pub fn build(ctx: &mut RenderContext) -> Box<dyn Scene> {
    let particles = (0..COUNT)
        .map(|_| {
            let dist = ctx.rng.random_range(30.0..310.0);
            Particle {
                angle: ctx.rng.random_range(0.0..TAU),
                dist,
                speed: ctx.rng.random_range(0.15..0.5) / (dist * 0.01).max(1.0),
                size: ctx.rng.random_range(0.4..2.2),
                drift: ctx.rng.random_range(-0.05..0.05),
            }
        })
        .collect();

    let mut scene = NebulaScene {
        root: RenderNode::new(),
        // Offset right so the overlay text has room.
        center: pos2(ctx.width * 0.6, ctx.height * 0.5),
        particles,
        elapsed: 0.0,
    };
    scene.draw();
    Box::new(scene)
}

/// Cyan at the core, through red and purple, to blue at the rim.
fn nebula_color(dist: f32) -> Color32 {
    let t = (dist / 300.0).min(1.0);
    if t < 0.35 {
        lerp_color(palette::CYAN, palette::RED, t / 0.35)
    } else if t < 0.65 {
        lerp_color(palette::RED, palette::PURPLE, (t - 0.35) / 0.3)
    } else {
        lerp_color(palette::PURPLE, palette::BLUE, (t - 0.65) / 0.35)
    }
}

impl NebulaScene {
    fn draw(&mut self) {
        self.root.clear();
        let mut cores = Vec::with_capacity(self.particles.len());

        for p in &self.particles {
            let pos = pos2(
                self.center.x + p.angle.cos() * p.dist,
                self.center.y + p.angle.sin() * p.dist * 0.65,
            );
            let color = nebula_color(p.dist);
            let alpha = 0.4 + (self.elapsed * 0.01 + p.angle).sin() * 0.2;
            self.root
                .push(Shape::circle_filled(pos, p.size * 3.0, tint(color, alpha * 0.15)));
            cores.push(Shape::circle_filled(pos, p.size, tint(color, (alpha + 0.2).min(1.0))));
        }
        for shape in cores {
            self.root.push(shape);
        }

        let pulse = 1.0 + (self.elapsed * 0.032).sin() * 0.1;
        let layers = [
            (60.0 * pulse, palette::RED, 0.04),
            (25.0 * pulse, palette::RED, 0.1),
            (6.0 * pulse, Color32::WHITE, 0.3),
        ];
        for shape in glow(self.center, &layers) {
            self.root.push(shape);
        }
    }
}

impl Scene for NebulaScene {
    fn root(&self) -> &RenderNode {
        &self.root
    }

    fn root_mut(&mut self) -> &mut RenderNode {
        &mut self.root
    }

    fn update(&mut self, dt: f32) {
        self.elapsed += dt;
        for p in &mut self.particles {
            p.angle += p.speed * dt * 0.02;
            p.dist += p.drift * dt * 0.3;
            if p.dist < MIN_DIST {
                p.drift = p.drift.abs();
            }
            if p.dist > MAX_DIST {
                p.drift = -p.drift.abs();
            }
        }
        self.draw();
    }
}
