//! Force-directed service graph with packets flowing along the edges.

use eframe::egui::{Align2, Color32, Pos2, Shape, Stroke, Vec2, pos2, vec2};
use rand::Rng;
use rand::rngs::StdRng;

use super::tint;
use crate::engine::{Label, RenderContext, RenderNode, Scene};
use crate::theme::palette;

const REPULSION: f32 = 4000.0;
const SPRING_LENGTH: f32 = 90.0;
const SPRING_K: f32 = 0.008;
const GRAVITY: f32 = 0.0008;
const DAMPING: f32 = 0.9;
const MAX_PACKETS: usize = 15;
const PACKET_INTERVAL: f32 = 12.0;

const NODES: [(&str, Color32, f32); 10] = [
    ("API Gateway", palette::RED, 16.0),
    ("Auth", palette::BLUE, 12.0),
    ("CMS", palette::GREEN, 14.0),
    ("Search", palette::PURPLE, 12.0),
    ("Analytics", palette::AMBER, 11.0),
    ("CDN", palette::CYAN, 13.0),
    ("Cache", palette::BLUE, 10.0),
    ("Queue", palette::GREEN, 10.0),
    ("Storage", palette::AMBER, 11.0),
    ("Monitor", palette::PURPLE, 10.0),
];

const EDGES: [(usize, usize); 14] = [
    (0, 1),
    (0, 2),
    (0, 3),
    (0, 5),
    (1, 6),
    (2, 3),
    (2, 7),
    (3, 4),
    (4, 9),
    (5, 6),
    (5, 8),
    (7, 8),
    (8, 9),
    (1, 4),
];

struct Node {
    pos: Pos2,
    vel: Vec2,
}

struct Packet {
    from: usize,
    to: usize,
    t: f32,
    speed: f32,
}

pub struct NetworkScene {
    root: RenderNode,
    rng: StdRng,
    center: Pos2,
    nodes: Vec<Node>,
    packets: Vec<Packet>,
    packet_timer: f32,
}

pub fn build(ctx: &mut RenderContext) -> Box<dyn Scene> {
    let mut scene = NetworkScene::new(ctx);
    scene.draw();
    Box::new(scene)
}

impl NetworkScene {
    fn new(ctx: &mut RenderContext) -> Self {
        let center = pos2(ctx.width * 0.55, ctx.height * 0.5);
        let nodes = NODES
            .iter()
            .map(|_| Node {
                pos: center
                    + vec2(
                        ctx.rng.random_range(-125.0..125.0),
                        ctx.rng.random_range(-125.0..125.0),
                    ),
                vel: Vec2::ZERO,
            })
            .collect();
        Self {
            root: RenderNode::new(),
            rng: ctx.rng.clone(),
            center,
            nodes,
            packets: Vec::new(),
            packet_timer: 0.0,
        }
    }

    /// One relaxation step: pairwise repulsion, edge springs, a pull toward
    /// the center, then damping.
    fn relax(&mut self) {
        let n = self.nodes.len();
        for i in 0..n {
            for j in (i + 1)..n {
                let d = self.nodes[j].pos - self.nodes[i].pos;
                let dist = d.length().max(15.0);
                let f = d / dist * (REPULSION / (dist * dist));
                self.nodes[i].vel -= f;
                self.nodes[j].vel += f;
            }
        }

        for &(a, b) in &EDGES {
            let d = self.nodes[b].pos - self.nodes[a].pos;
            let dist = d.length().max(1.0);
            let f = d / dist * ((dist - SPRING_LENGTH) * SPRING_K);
            self.nodes[a].vel += f;
            self.nodes[b].vel -= f;
        }

        for node in &mut self.nodes {
            node.vel += (self.center - node.pos) * GRAVITY;
            node.vel *= DAMPING;
            node.pos += node.vel;
        }
    }

    fn spawn_packet(&mut self) {
        let (a, b) = EDGES[self.rng.random_range(0..EDGES.len())];
        let (from, to) = if self.rng.random_bool(0.5) { (a, b) } else { (b, a) };
        self.packets.push(Packet {
            from,
            to,
            t: 0.0,
            speed: self.rng.random_range(0.012..0.022),
        });
    }

    fn draw(&mut self) {
        self.root.clear();

        let edge_stroke = Stroke::new(0.8, tint(Color32::WHITE, 0.06));
        for &(a, b) in &EDGES {
            self.root
                .push(Shape::line_segment([self.nodes[a].pos, self.nodes[b].pos], edge_stroke));
        }

        for packet in &self.packets {
            let pos = self.nodes[packet.from].pos.lerp(self.nodes[packet.to].pos, packet.t);
            let alpha = 1.0 - (packet.t - 0.5).abs() * 2.0;
            let color = NODES[packet.from].1;
            self.root
                .push(Shape::circle_filled(pos, 3.0, tint(color, alpha * 0.9)));
        }

        for (node, &(name, color, size)) in self.nodes.iter().zip(&NODES) {
            self.root
                .push(Shape::circle_filled(node.pos, size * 2.2, tint(color, 0.08)));
            self.root
                .push(Shape::circle_filled(node.pos, size, tint(color, 0.85)));
            self.root.label(
                Label::new(name, node.pos + vec2(0.0, size + 6.0), 9.0, color)
                    .anchored(Align2::CENTER_TOP),
            );
        }
    }
}

impl Scene for NetworkScene {
    fn root(&self) -> &RenderNode {
        &self.root
    }

    fn root_mut(&mut self) -> &mut RenderNode {
        &mut self.root
    }

    fn update(&mut self, dt: f32) {
        self.relax();

        self.packet_timer += dt;
        if self.packet_timer > PACKET_INTERVAL && self.packets.len() < MAX_PACKETS {
            self.spawn_packet();
            self.packet_timer = 0.0;
        }
        for packet in &mut self.packets {
            packet.t += packet.speed * dt;
        }
        self.packets.retain(|p| p.t < 1.0);

        self.draw();
    }
}
