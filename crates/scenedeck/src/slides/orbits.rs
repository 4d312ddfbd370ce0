//! Platform services orbiting a central hub, trading packets along the spokes.

use eframe::egui::{Align2, Color32, Pos2, Shape, Stroke, pos2, vec2};
use rand::Rng;
use rand::rngs::StdRng;

use super::{glow, tint};
use crate::engine::{Label, RenderContext, RenderNode, Scene};
use crate::theme::palette;

const MAX_PACKETS: usize = 10;
/// Frames between packet spawns.
const PACKET_INTERVAL: f32 = 40.0;

struct Platform {
    name: &'static str,
    color: Color32,
    radius: f32,
    size: f32,
    speed: f32,
    offset: f32,
}

const fn platform(
    name: &'static str,
    color: Color32,
    radius: f32,
    size: f32,
    speed: f32,
    offset: f32,
) -> Platform {
    Platform {
        name,
        color,
        radius,
        size,
        speed,
        offset,
    }
}

const PLATFORMS: [Platform; 5] = [
    platform("CMS", palette::BLUE, 110.0, 14.0, 0.012, 0.0),
    platform("Analytics", palette::GREEN, 170.0, 11.0, 0.008, 1.5),
    platform("CRM", palette::AMBER, 170.0, 11.0, 0.008, 4.2),
    platform("Search", palette::PURPLE, 240.0, 10.0, 0.005, 0.8),
    platform("CDN", palette::CYAN, 240.0, 10.0, 0.005, 3.5),
];

const ORBIT_RADII: [f32; 3] = [110.0, 170.0, 240.0];

struct Packet {
    from: Pos2,
    to: Pos2,
    color: Color32,
    t: f32,
    speed: f32,
}

pub struct OrbitsScene {
    root: RenderNode,
    rng: StdRng,
    center: Pos2,
    positions: Vec<Pos2>,
    packets: Vec<Packet>,
    spawn_timer: f32,
    elapsed: f32,
}

pub fn build(ctx: &mut RenderContext) -> Box<dyn Scene> {
    let center = pos2(ctx.width * 0.58, ctx.height * 0.5);
    let mut scene = OrbitsScene {
        root: RenderNode::new(),
        rng: ctx.rng.clone(),
        center,
        positions: vec![center; PLATFORMS.len()],
        packets: Vec::new(),
        spawn_timer: 0.0,
        elapsed: 0.0,
    };
    scene.place_platforms();
    scene.draw();
    Box::new(scene)
}

impl OrbitsScene {
    fn place_platforms(&mut self) {
        let t = self.elapsed * 0.016;
        for (pos, p) in self.positions.iter_mut().zip(&PLATFORMS) {
            let angle = t * p.speed * 60.0 + p.offset;
            *pos = pos2(
                self.center.x + angle.cos() * p.radius,
                self.center.y + angle.sin() * p.radius,
            );
        }
    }

    fn spawn_packet(&mut self) {
        let idx = self.rng.random_range(0..PLATFORMS.len());
        let planet = self.positions[idx];
        let (from, to) = if self.rng.random_bool(0.5) {
            (self.center, planet)
        } else {
            (planet, self.center)
        };
        self.packets.push(Packet {
            from,
            to,
            color: PLATFORMS[idx].color,
            t: 0.0,
            speed: self.rng.random_range(0.01..0.02),
        });
    }

    fn draw(&mut self) {
        let t = self.elapsed * 0.016;
        self.root.clear();

        let orbit_stroke = Stroke::new(0.6, tint(Color32::WHITE, 0.06));
        for radius in ORBIT_RADII {
            self.root
                .push(Shape::circle_stroke(self.center, radius, orbit_stroke));
        }

        for (pos, p) in self.positions.iter().zip(&PLATFORMS) {
            self.root.push(Shape::line_segment(
                [self.center, *pos],
                Stroke::new(0.5, tint(p.color, 0.08)),
            ));
        }

        let pulse = 1.0 + (t * 2.0).sin() * 0.08;
        let layers = [
            (50.0 * pulse, palette::RED, 0.06),
            (28.0 * pulse, palette::RED, 0.15),
            (14.0 * pulse, palette::RED, 0.6),
            (5.0 * pulse, Color32::WHITE, 0.9),
        ];
        for shape in glow(self.center, &layers) {
            self.root.push(shape);
        }
        self.root.label(
            Label::new("HORIZON", self.center + vec2(0.0, 22.0), 10.0, palette::RED)
                .anchored(Align2::CENTER_TOP),
        );

        for (pos, p) in self.positions.iter().zip(&PLATFORMS) {
            self.root
                .push(Shape::circle_filled(*pos, p.size * 2.5, tint(p.color, 0.1)));
            self.root
                .push(Shape::circle_filled(*pos, p.size, tint(p.color, 0.85)));
            self.root.label(
                Label::new(p.name, pos2(pos.x, pos.y + p.size + 8.0), 10.0, p.color)
                    .anchored(Align2::CENTER_TOP),
            );
        }

        for packet in &self.packets {
            let pos = packet.from.lerp(packet.to, packet.t);
            // Fade in and out at the ends of the spoke.
            let alpha = 1.0 - (packet.t - 0.5).abs() * 2.0;
            self.root
                .push(Shape::circle_filled(pos, 3.0, tint(packet.color, alpha * 0.9)));
        }
    }
}

impl Scene for OrbitsScene {
    fn root(&self) -> &RenderNode {
        &self.root
    }

    fn root_mut(&mut self) -> &mut RenderNode {
        &mut self.root
    }

    fn update(&mut self, dt: f32) {
        self.elapsed += dt;
        self.place_platforms();

        self.spawn_timer += dt;
        if self.spawn_timer >= PACKET_INTERVAL && self.packets.len() < MAX_PACKETS {
            self.spawn_timer = 0.0;
            self.spawn_packet();
        }

        for packet in &mut self.packets {
            packet.t += packet.speed * dt;
        }
        self.packets.retain(|p| p.t < 1.0);

        self.draw();
    }
}
