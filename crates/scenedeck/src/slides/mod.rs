//! The slide table and the procedural scenes behind it.
//!
//! Scenes work in viewport coordinates with the origin at the top-left of the
//! canvas; the renderer translates them into the window.

pub mod fireworks;
pub mod hero;
pub mod kinetic;
pub mod nebula;
pub mod network;
pub mod orbits;
pub mod radar;
pub mod warp;

use std::f32::consts::TAU;

use anyhow::Result;
use eframe::egui::{Color32, Pos2, Shape, Stroke, pos2};

use crate::engine::{Overlay, SlideEntry, SlideRegistry};
use crate::theme::Theme;

/// Segments used when approximating an ellipse.
const ELLIPSE_SEGMENTS: usize = 96;

pub fn registry() -> Result<SlideRegistry> {
    SlideRegistry::new(vec![
        SlideEntry::scene(
            "Hero",
            Overlay::new("Scenes in Motion")
                .kicker("SCENEDECK")
                .body("Procedural slides, one live scene at a time."),
            hero::build,
        ),
        SlideEntry::scene(
            "Particle Nebula",
            Overlay::new("Particle Nebula")
                .kicker("01 / PARTICLES")
                .body("Nine hundred particles circling a glowing core."),
            nebula::build,
        ),
        SlideEntry::scene(
            "Platform Orbits",
            Overlay::new("Everything Orbits the Core")
                .kicker("02 / PLATFORM")
                .body("Services circle the hub while packets travel the spokes."),
            orbits::build,
        ),
        SlideEntry::scene(
            "Warp Speed",
            Overlay::new("Warp Speed").kicker("03 / VELOCITY"),
            warp::build,
        ),
        SlideEntry::scene(
            "Fireworks",
            Overlay::new("Launch Day")
                .kicker("04 / CELEBRATE")
                .body("Rockets, bursts and confetti."),
            fireworks::build,
        ),
        SlideEntry::scene(
            "Network Graph",
            Overlay::new("A Living Network")
                .kicker("05 / ARCHITECTURE")
                .body("A force-directed layout settling in real time."),
            network::build,
        ),
        SlideEntry::scene(
            "Kinetic Typography",
            Overlay::new("").kicker("06 / TYPE"),
            kinetic::build,
        ),
        SlideEntry::scene(
            "Radar Chart",
            Overlay::new("Capability Radar")
                .kicker("07 / COMPARISON")
                .body("New platform against the legacy stack."),
            radar::build,
        ),
        SlideEntry::overlay_only(
            "Closing",
            Overlay::new("Thank You")
                .kicker("FIN")
                .body("Press Home to start over."),
        ),
    ])
}

pub(crate) fn tint(color: Color32, alpha: f32) -> Color32 {
    Theme::with_opacity(color, alpha)
}

pub(crate) fn lerp_color(a: Color32, b: Color32, t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let mix = |x: u8, y: u8| (x as f32 + (y as f32 - x as f32) * t).round() as u8;
    Color32::from_rgb(mix(a.r(), b.r()), mix(a.g(), b.g()), mix(a.b(), b.b()))
}

/// Outline of an ellipse rotated by `rotation` radians around `center`.
pub(crate) fn ellipse(center: Pos2, rx: f32, ry: f32, rotation: f32, stroke: Stroke) -> Shape {
    let (sin, cos) = rotation.sin_cos();
    let points = (0..ELLIPSE_SEGMENTS)
        .map(|i| {
            let a = i as f32 / ELLIPSE_SEGMENTS as f32 * TAU;
            let (x, y) = (a.cos() * rx, a.sin() * ry);
            pos2(center.x + x * cos - y * sin, center.y + x * sin + y * cos)
        })
        .collect();
    Shape::closed_line(points, stroke)
}

/// Concentric filled discs, outermost first, for the soft glows most scenes use.
pub(crate) fn glow(
    center: Pos2,
    layers: &[(f32, Color32, f32)],
) -> impl Iterator<Item = Shape> + '_ {
    layers.iter().map(move |&(radius, color, alpha)| {
        Shape::circle_filled(center, radius, tint(color, alpha))
    })
}
