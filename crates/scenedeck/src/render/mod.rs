use eframe::egui;

use crate::engine::{ChromeState, Overlay, RenderNode};
use crate::theme::Theme;

const PROGRESS_HEIGHT: f32 = 3.0;
const HINT_TEXT: &str = "\u{2190} \u{2192}  space  or swipe to navigate";

/// Overlay and chrome sizes are authored for a 1280x720 canvas.
pub fn compute_scale(rect: egui::Rect) -> f32 {
    (rect.width() / 1280.0).min(rect.height() / 720.0)
}

/// Paint a scene's display list into `rect`, honouring the node's opacity.
pub fn render_node(ui: &egui::Ui, node: &RenderNode, rect: egui::Rect) {
    if node.opacity() <= 0.0 {
        return;
    }
    let mut painter = ui.painter_at(rect);
    painter.set_opacity(node.opacity());

    let offset = rect.min.to_vec2();
    painter.extend(node.shapes().iter().map(|shape| {
        let mut shape = shape.clone();
        shape.translate(offset);
        shape
    }));

    for label in node.labels() {
        painter.text(
            label.pos + offset,
            label.anchor,
            &label.text,
            label.font_id(),
            label.color,
        );
    }
}

/// Kicker, heading and body for the active slide, anchored to the lower left.
pub fn render_overlay(ui: &egui::Ui, overlay: &Overlay, theme: &Theme, rect: egui::Rect) {
    let scale = compute_scale(rect);
    let painter = ui.painter();
    let left = rect.left() + 80.0 * scale;
    let wrap = rect.width() * 0.45;

    let body = overlay.body.as_ref().map(|body| {
        painter.layout(
            body.clone(),
            egui::FontId::proportional(theme.body_size * scale),
            theme.foreground,
            wrap,
        )
    });
    let heading = (!overlay.heading.is_empty()).then(|| {
        painter.layout(
            overlay.heading.clone(),
            egui::FontId::proportional(theme.heading_size * scale),
            theme.heading_color,
            wrap,
        )
    });

    // Stack upward from the bottom margin.
    let mut y = rect.bottom() - 90.0 * scale;
    if let Some(galley) = body {
        y -= galley.rect.height();
        painter.galley(egui::pos2(left, y), galley, theme.foreground);
        y -= 16.0 * scale;
    }
    if let Some(galley) = heading {
        y -= galley.rect.height();
        painter.galley(egui::pos2(left, y), galley, theme.heading_color);
        y -= 12.0 * scale;
    }
    if let Some(kicker) = &overlay.kicker {
        painter.text(
            egui::pos2(left, y),
            egui::Align2::LEFT_BOTTOM,
            kicker,
            egui::FontId::monospace(theme.kicker_size * scale),
            theme.accent,
        );
    }
}

/// Progress bar, slide counter, navigation hint and frame rate.
pub fn render_chrome(
    ui: &egui::Ui,
    chrome: &ChromeState,
    theme: &Theme,
    rect: egui::Rect,
    fps: f32,
) {
    let scale = compute_scale(rect);
    let painter = ui.painter();

    // Progress bar
    let track = egui::Rect::from_min_max(
        egui::pos2(rect.left(), rect.bottom() - PROGRESS_HEIGHT * scale),
        rect.right_bottom(),
    );
    painter.rect_filled(track, 0.0, theme.progress_track);
    let mut fill = track;
    fill.set_width(track.width() * chrome.progress());
    painter.rect_filled(fill, 0.0, theme.accent);

    // Slide counter
    let counter_color = Theme::with_opacity(theme.foreground, 0.3);
    painter.text(
        egui::pos2(rect.right() - 16.0 * scale, rect.bottom() - 20.0 * scale),
        egui::Align2::RIGHT_BOTTOM,
        chrome.counter(),
        egui::FontId::monospace(theme.chrome_size * scale),
        counter_color,
    );

    if chrome.hint_visible() {
        painter.text(
            egui::pos2(rect.center().x, rect.bottom() - 20.0 * scale),
            egui::Align2::CENTER_BOTTOM,
            HINT_TEXT,
            egui::FontId::proportional(theme.chrome_size * scale),
            Theme::with_opacity(theme.muted, 0.8),
        );
    }

    // FPS overlay
    let fps_color = Theme::with_opacity(theme.foreground, 0.3);
    painter.text(
        egui::pos2(rect.right() - 12.0 * scale, rect.top() + 10.0 * scale),
        egui::Align2::RIGHT_TOP,
        format!("{fps:.0} fps"),
        egui::FontId::monospace(theme.chrome_size * scale),
        fps_color,
    );
}
