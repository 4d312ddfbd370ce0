//! Hyperspace tunnel: stars streak outward from the center.

use std::f32::consts::TAU;

use eframe::egui::{Color32, Pos2, Shape, Stroke, pos2};
use rand::Rng;
use rand::rngs::StdRng;

use super::tint;
use crate::engine::{RenderContext, RenderNode, Scene};
use crate::theme::palette;

const STAR_COUNT: usize = 400;
/// How far off-center stars originate.
const SPREAD: f32 = 600.0;
const FAR_Z: f32 = 1200.0;

struct Star {
    angle: f32,
    z: f32,
    speed: f32,
    prev: Option<Pos2>,
}

impl Star {
    fn spawn(rng: &mut StdRng) -> Self {
        Self {
            angle: rng.random_range(0.0..TAU),
            z: rng.random_range(100.0..1300.0),
            speed: rng.random_range(6.0..14.0),
            prev: None,
        }
    }

    fn respawn(&mut self, rng: &mut StdRng) {
        *self = Self::spawn(rng);
        self.z = rng.random_range(1000.0..1200.0);
    }
}

pub struct WarpScene {
    root: RenderNode,
    rng: StdRng,
    width: f32,
    height: f32,
    center: Pos2,
    stars: Vec<Star>,
    elapsed: f32,
}

pub fn build(ctx: &mut RenderContext) -> Box<dyn Scene> {
    let stars = (0..STAR_COUNT).map(|_| Star::spawn(&mut ctx.rng)).collect();
    let mut scene = WarpScene {
        root: RenderNode::new(),
        rng: ctx.rng.clone(),
        width: ctx.width,
        height: ctx.height,
        center: ctx.center(),
        stars,
        elapsed: 0.0,
    };
    scene.draw_rings();
    Box::new(scene)
}

/// Far stars are dim blue, mid stars white, close stars warm.
fn star_color(z: f32) -> Color32 {
    let t = (z / 1000.0).min(1.0);
    if t > 0.6 {
        Color32::from_rgb(0x44, 0x88, 0xCC)
    } else if t > 0.3 {
        Color32::WHITE
    } else {
        Color32::from_rgb(0xFF, 0xCC, 0xAA)
    }
}

impl WarpScene {
    fn draw_rings(&mut self) {
        let pulse = 1.0 + (self.elapsed * 0.03).sin() * 0.15;
        let ring_stroke = Stroke::new(0.5, tint(palette::RED, 0.03));
        let mut r = 40.0;
        while r <= 300.0 {
            self.root
                .push(Shape::circle_stroke(self.center, r * pulse, ring_stroke));
            r += 60.0;
        }
        self.root
            .push(Shape::circle_filled(self.center, 30.0 * pulse, tint(palette::RED, 0.06)));
        self.root
            .push(Shape::circle_filled(self.center, 8.0 * pulse, tint(Color32::WHITE, 0.15)));
    }

    fn out_of_view(&self, pos: Pos2) -> bool {
        pos.x < -100.0
            || pos.x > self.width + 100.0
            || pos.y < -100.0
            || pos.y > self.height + 100.0
    }
}

impl Scene for WarpScene {
    fn root(&self) -> &RenderNode {
        &self.root
    }

    fn root_mut(&mut self) -> &mut RenderNode {
        &mut self.root
    }

    fn update(&mut self, dt: f32) {
        self.elapsed += dt;
        self.root.clear();
        self.draw_rings();

        let mut stars = std::mem::take(&mut self.stars);
        for star in &mut stars {
            let scale = 500.0 / star.z;
            let pos = pos2(
                self.center.x + star.angle.cos() * SPREAD * scale,
                self.center.y + star.angle.sin() * SPREAD * scale,
            );

            let accel = 1.0 + (1.0 - star.z / FAR_Z) * 2.0;
            star.z -= star.speed * dt * accel;

            if star.z <= 1.0 || self.out_of_view(pos) {
                star.respawn(&mut self.rng);
                continue;
            }

            let closeness = 1.0 - star.z / FAR_Z;
            let brightness = (closeness * 1.5).min(1.0);
            if let Some(prev) = star.prev {
                self.root.push(Shape::line_segment(
                    [prev, pos],
                    Stroke::new(
                        (closeness * 3.0).max(0.4),
                        tint(star_color(star.z), brightness * 0.8),
                    ),
                ));
                self.root.push(Shape::circle_filled(
                    pos,
                    (closeness * 2.5).max(0.6),
                    tint(Color32::WHITE, brightness),
                ));
            }
            star.prev = Some(pos);
        }
        self.stars = stars;
    }
}
