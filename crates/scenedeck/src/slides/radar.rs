//! Spider chart comparing two datasets, growing out from the center.

use std::f32::consts::{FRAC_PI_2, TAU};

use eframe::egui::{Align2, Color32, Pos2, Shape, Stroke, pos2};

use super::tint;
use crate::engine::{Label, RenderContext, RenderNode, Scene};
use crate::theme::palette;

const AXES: [&str; 6] = ["Performance", "Security", "Scalability", "UX", "SEO", "Accessibility"];
const CURRENT: [f32; 6] = [0.9, 0.85, 0.95, 0.8, 0.88, 0.75];
const LEGACY: [f32; 6] = [0.45, 0.5, 0.35, 0.4, 0.55, 0.3];
/// Frames for the polygons to reach full size.
const GROW_FRAMES: f32 = 60.0;
const GRID_RINGS: usize = 4;

const LEGACY_FILL: Color32 = Color32::from_rgb(0x55, 0x55, 0x55);
const LEGACY_STROKE: Color32 = Color32::from_rgb(0x88, 0x88, 0x88);

pub struct RadarScene {
    root: RenderNode,
    center: Pos2,
    radius: f32,
    elapsed: f32,
}

pub fn build(ctx: &mut RenderContext) -> Box<dyn Scene> {
    let mut scene = RadarScene {
        root: RenderNode::new(),
        center: pos2(ctx.width * 0.55, ctx.height * 0.5),
        radius: ctx.width.min(ctx.height) * 0.28,
        elapsed: 0.0,
    };
    scene.draw();
    Box::new(scene)
}

/// Ease-out cubic over the grow window.
fn grow_progress(elapsed: f32) -> f32 {
    let t = (elapsed / GROW_FRAMES).clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

impl RadarScene {
    fn axis_point(&self, axis: usize, r: f32) -> Pos2 {
        let a = axis as f32 * TAU / AXES.len() as f32 - FRAC_PI_2;
        pos2(self.center.x + a.cos() * r, self.center.y + a.sin() * r)
    }

    fn draw_grid(&mut self) {
        let grid = Stroke::new(0.5, tint(Color32::WHITE, 0.05));
        for ring in 1..=GRID_RINGS {
            let r = ring as f32 / GRID_RINGS as f32 * self.radius;
            let points = (0..AXES.len()).map(|i| self.axis_point(i, r)).collect();
            self.root.push(Shape::closed_line(points, grid));
        }
        for (i, name) in AXES.iter().enumerate() {
            let end = self.axis_point(i, self.radius);
            self.root.push(Shape::line_segment([self.center, end], grid));
            let at = self.axis_point(i, self.radius + 24.0);
            self.root.label(Label::new(*name, at, 10.0, LEGACY_STROKE));
        }

        let legend = [("Horizon", palette::RED), ("Legacy", LEGACY_FILL)];
        for (i, (name, color)) in legend.into_iter().enumerate() {
            let y = self.center.y + self.radius + 60.0 + i as f32 * 20.0;
            self.root
                .push(Shape::circle_filled(pos2(self.center.x - 40.0, y), 4.0, tint(color, 0.8)));
            self.root.label(
                Label::new(name, pos2(self.center.x - 30.0, y), 11.0, color)
                    .anchored(Align2::LEFT_CENTER),
            );
        }
    }

    fn draw_dataset(
        &mut self,
        data: &[f32],
        progress: f32,
        fill: Color32,
        stroke: Color32,
        fill_alpha: f32,
    ) {
        let points: Vec<Pos2> = data
            .iter()
            .enumerate()
            .map(|(i, v)| self.axis_point(i, v * self.radius * progress))
            .collect();
        // Not convex in general, but always star-shaped around the center.
        for i in 0..points.len() {
            let next = points[(i + 1) % points.len()];
            self.root.push(Shape::convex_polygon(
                vec![self.center, points[i], next],
                tint(fill, fill_alpha),
                Stroke::NONE,
            ));
        }
        self.root
            .push(Shape::closed_line(points.clone(), Stroke::new(1.5, tint(stroke, 0.8))));
        for p in points {
            self.root.push(Shape::circle_filled(p, 3.0, tint(stroke, 0.9)));
        }
    }

    fn draw(&mut self) {
        self.root.clear();
        self.draw_grid();
        let progress = grow_progress(self.elapsed);
        self.draw_dataset(&LEGACY, progress, LEGACY_FILL, LEGACY_STROKE, 0.08);
        self.draw_dataset(&CURRENT, progress, palette::RED, palette::RED, 0.12);
    }
}

impl Scene for RadarScene {
    fn root(&self) -> &RenderNode {
        &self.root
    }

    fn root_mut(&mut self) -> &mut RenderNode {
        &mut self.root
    }

    fn update(&mut self, dt: f32) {
        self.elapsed += dt;
        self.draw();
    }
}
