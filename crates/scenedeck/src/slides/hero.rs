//! Starfield with orbiting planets and tilted rings.

use eframe::egui::{Color32, Pos2, Shape, Stroke, pos2};
use rand::Rng;
use rand::rngs::StdRng;

use super::{ellipse, glow, tint};
use crate::engine::{RenderContext, RenderNode, Scene};
use crate::theme::palette;

const STAR_COUNT: usize = 250;

struct Star {
    x: f32,
    y: f32,
    radius: f32,
    speed: f32,
    base_alpha: f32,
    twinkle: f32,
}

struct Ring {
    rx: f32,
    ry: f32,
    rotation: f32,
}

struct Planet {
    ring: usize,
    size: f32,
    color: Color32,
    speed: f32,
    offset: f32,
}

const RINGS: [Ring; 3] = [
    Ring { rx: 220.0, ry: 80.0, rotation: -0.15 },
    Ring { rx: 340.0, ry: 120.0, rotation: 0.1 },
    Ring { rx: 460.0, ry: 160.0, rotation: -0.05 },
];

const PLANETS: [Planet; 5] = [
    Planet { ring: 0, size: 10.0, color: palette::BLUE, speed: 0.004, offset: 0.0 },
    Planet { ring: 1, size: 14.0, color: palette::RED, speed: 0.0025, offset: 2.1 },
    Planet { ring: 1, size: 7.0, color: palette::GREEN, speed: 0.0025, offset: 5.2 },
    Planet { ring: 2, size: 9.0, color: palette::PURPLE, speed: 0.0015, offset: 1.0 },
    Planet { ring: 2, size: 6.0, color: palette::AMBER, speed: 0.0015, offset: 3.8 },
];

pub struct HeroScene {
    root: RenderNode,
    rng: StdRng,
    width: f32,
    height: f32,
    center: Pos2,
    stars: Vec<Star>,
    elapsed: f32,
}

pub fn build(ctx: &mut RenderContext) -> Box<dyn Scene> {
    let (width, height) = (ctx.width.max(1.0), ctx.height.max(1.0));
    let stars = (0..STAR_COUNT)
        .map(|_| Star {
            x: ctx.rng.random_range(0.0..width),
            y: ctx.rng.random_range(0.0..height),
            radius: ctx.rng.random_range(0.3..1.7),
            speed: ctx.rng.random_range(0.05..0.35),
            base_alpha: ctx.rng.random_range(0.2..0.8),
            twinkle: ctx.rng.random_range(0.01..0.04),
        })
        .collect();

    let mut scene = HeroScene {
        root: RenderNode::new(),
        rng: ctx.rng.clone(),
        width,
        height,
        center: ctx.center(),
        stars,
        elapsed: 0.0,
    };
    scene.draw();
    Box::new(scene)
}

impl HeroScene {
    fn draw(&mut self) {
        let t = self.elapsed * 0.016;
        self.root.clear();

        for star in &self.stars {
            let alpha = (star.base_alpha + (self.elapsed * star.twinkle).sin() * 0.2).max(0.05);
            self.root.push(Shape::circle_filled(
                pos2(star.x, star.y),
                star.radius,
                tint(Color32::WHITE, alpha),
            ));
        }

        let ring_stroke = Stroke::new(0.6, tint(Color32::WHITE, 0.07));
        for ring in &RINGS {
            self.root
                .push(ellipse(self.center, ring.rx, ring.ry, ring.rotation, ring_stroke));
        }

        for planet in &PLANETS {
            let ring = &RINGS[planet.ring];
            let angle = t * planet.speed * 60.0 + planet.offset;
            let (x, y) = (angle.cos() * ring.rx, angle.sin() * ring.ry);
            let (sin, cos) = ring.rotation.sin_cos();
            let pos = pos2(
                self.center.x + x * cos - y * sin,
                self.center.y + x * sin + y * cos,
            );
            self.root.push(Shape::circle_filled(pos, planet.size * 2.5, tint(planet.color, 0.08)));
            self.root.push(Shape::circle_filled(pos, planet.size, tint(planet.color, 0.9)));
        }

        let pulse = 1.0 + (t * 1.5).sin() * 0.15;
        let layers = [
            (40.0 * pulse, palette::RED, 0.06),
            (18.0 * pulse, palette::RED, 0.12),
            (4.0 * pulse, Color32::WHITE, 0.5),
        ];
        for shape in glow(self.center, &layers) {
            self.root.push(shape);
        }
    }
}

impl Scene for HeroScene {
    fn root(&self) -> &RenderNode {
        &self.root
    }

    fn root_mut(&mut self) -> &mut RenderNode {
        &mut self.root
    }

    fn update(&mut self, dt: f32) {
        self.elapsed += dt;
        for star in &mut self.stars {
            star.y += star.speed * dt;
            if star.y > self.height + 4.0 {
                star.y = -4.0;
                star.x = self.rng.random_range(0.0..self.width);
            }
        }
        self.draw();
    }
}
