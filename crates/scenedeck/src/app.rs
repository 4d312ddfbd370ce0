use eframe::egui;
use std::time::Instant;

use log::{debug, trace, warn};

use crate::cli::LaunchOptions;
use crate::config::Config;
use crate::engine::location::{self, FileLocation, LocationStore, MemoryLocation};
use crate::engine::input::NavCommand;
use crate::engine::{
    FrameClock, Key, KeyboardAdapter, Presentation, PresentationOptions, SwipeTracker,
    TransitionEvent,
};
use crate::render;
use crate::slides;
use crate::theme::Theme;

const TITLE: &str = "scenedeck";

/// egui keys the keyboard adapter understands.
const KEY_BINDINGS: [(egui::Key, Key); 7] = [
    (egui::Key::ArrowRight, Key::ArrowRight),
    (egui::Key::ArrowLeft, Key::ArrowLeft),
    (egui::Key::Space, Key::Space),
    (egui::Key::Enter, Key::Enter),
    (egui::Key::Backspace, Key::Backspace),
    (egui::Key::Home, Key::Home),
    (egui::Key::End, Key::End),
];

struct DeckApp {
    presentation: Presentation,
    clock: FrameClock,
    keys: KeyboardAdapter,
    swipe: SwipeTracker,
    theme: Theme,
    start_index: usize,
    started: bool,
    frame_count: u32,
    fps: f32,
    fps_update: Instant,
}

impl DeckApp {
    fn new(
        presentation: Presentation,
        clock: FrameClock,
        swipe: SwipeTracker,
        theme: Theme,
        start_index: usize,
    ) -> Self {
        Self {
            presentation,
            clock,
            keys: KeyboardAdapter,
            swipe,
            theme,
            start_index,
            started: false,
            frame_count: 0,
            fps: 0.0,
            fps_update: Instant::now(),
        }
    }

    fn update_fps(&mut self) {
        self.frame_count += 1;
        let elapsed = self.fps_update.elapsed().as_secs_f32();
        if elapsed >= 0.5 {
            self.fps = self.frame_count as f32 / elapsed;
            self.frame_count = 0;
            self.fps_update = Instant::now();
        }
    }

    fn handle_swipe(&mut self, i: &egui::InputState) {
        for command in SwipeInput::from_input(i).feed(&mut self.swipe) {
            self.presentation.apply(command);
        }
    }

    fn log_events(&self, events: &[TransitionEvent]) {
        for event in events {
            match event {
                TransitionEvent::Settled { index } => debug!(
                    "settled on slide {} ({})",
                    index + 1,
                    self.presentation.chrome().location()
                ),
                other => trace!("{other:?}"),
            }
        }
    }
}

/// Horizontal positions of one frame's swipe-relevant input.
#[derive(Debug, Default)]
struct SwipeInput {
    touches: Vec<(egui::TouchPhase, f32)>,
    pressed_at: Option<f32>,
    /// `Some(None)` when the button went up at an unknown position.
    released_at: Option<Option<f32>>,
}

impl SwipeInput {
    fn from_input(i: &egui::InputState) -> Self {
        let touches = i
            .events
            .iter()
            .filter_map(|event| match event {
                egui::Event::Touch { phase, pos, .. } => Some((*phase, pos.x)),
                _ => None,
            })
            .collect();
        Self {
            touches,
            pressed_at: i
                .pointer
                .primary_pressed()
                .then(|| i.pointer.press_origin().map(|p| p.x))
                .flatten(),
            released_at: i
                .pointer
                .primary_released()
                .then(|| i.pointer.interact_pos().map(|p| p.x)),
        }
    }

    /// egui also simulates pointer events from touches, so the pointer path
    /// only counts in frames without touch events.
    fn feed(&self, swipe: &mut SwipeTracker) -> Vec<NavCommand> {
        let mut commands = Vec::new();
        if !self.touches.is_empty() {
            for &(phase, x) in &self.touches {
                match phase {
                    egui::TouchPhase::Start => swipe.touch_start(x),
                    egui::TouchPhase::End => commands.extend(swipe.touch_end(x)),
                    egui::TouchPhase::Cancel => swipe.cancel(),
                    egui::TouchPhase::Move => {}
                }
            }
            return commands;
        }

        if let Some(x) = self.pressed_at {
            swipe.touch_start(x);
        }
        match self.released_at {
            Some(Some(x)) => commands.extend(swipe.touch_end(x)),
            Some(None) => swipe.cancel(),
            None => {}
        }
        commands
    }
}

impl eframe::App for DeckApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.update_fps();

        // Collect viewport commands to send AFTER the input closure
        // (sending inside ctx.input() causes RwLock deadlock)
        let mut viewport_cmds: Vec<egui::ViewportCommand> = Vec::new();

        ctx.input_mut(|i| {
            if i.key_pressed(egui::Key::Q) {
                viewport_cmds.push(egui::ViewportCommand::Close);
                return;
            }

            if i.key_pressed(egui::Key::F) {
                viewport_cmds.push(egui::ViewportCommand::Fullscreen(
                    !i.viewport().fullscreen.unwrap_or(false),
                ));
                return;
            }

            if i.key_pressed(egui::Key::D) {
                self.theme = self.theme.toggled();
                return;
            }

            for (egui_key, key) in KEY_BINDINGS {
                let outcome = self.keys.map(key);
                let pressed = if outcome.suppress_default {
                    i.consume_key(egui::Modifiers::NONE, egui_key)
                } else {
                    i.key_pressed(egui_key)
                };
                if pressed {
                    self.presentation.apply(outcome.command);
                }
            }

            self.handle_swipe(i);
        });

        for cmd in viewport_cmds {
            ctx.send_viewport_cmd(cmd);
        }

        let bg = self.theme.background;
        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(bg).inner_margin(0.0))
            .show(ctx, |ui| {
                let rect = ui.max_rect();
                ui.painter().rect_filled(rect, 0.0, bg);

                self.presentation.set_viewport(rect.width(), rect.height());
                if !self.started {
                    self.started = true;
                    self.presentation.initialize(self.start_index);
                }

                let events = self.presentation.tick(self.clock.tick(Instant::now()));
                self.log_events(&events);

                if let Some(scene) = self.presentation.active_scene() {
                    render::render_node(ui, scene.root(), rect);
                }
                if let Some(index) = self.presentation.chrome().active_overlay() {
                    if let Some(entry) = self.presentation.registry().get(index) {
                        render::render_overlay(ui, &entry.overlay, &self.theme, rect);
                    }
                }
                render::render_chrome(ui, self.presentation.chrome(), &self.theme, rect, self.fps);
            });

        // Scenes animate continuously.
        ctx.request_repaint();
    }
}

/// Pick the first slide. Precedence: `--slide` (1-indexed), `--link`, the
/// remembered location, then `defaults.start_slide`. Always clamped.
pub fn resolve_start(
    slide: Option<usize>,
    link: Option<&str>,
    remembered: Option<&str>,
    configured: Option<usize>,
    slide_count: usize,
) -> anyhow::Result<usize> {
    let last = slide_count.saturating_sub(1);
    if let Some(n) = slide {
        return Ok(n.saturating_sub(1).min(last));
    }
    if let Some(token) = link {
        return location::resolve_token(token, slide_count).ok_or_else(|| {
            anyhow::anyhow!("Invalid link: {token}. Expected a token like 'slide=3'.")
        });
    }
    if let Some(index) = remembered.and_then(|t| location::resolve_token(t, slide_count)) {
        return Ok(index);
    }
    Ok(configured.map(|n| n.saturating_sub(1)).unwrap_or(0).min(last))
}

fn location_store(resume: bool) -> Box<dyn LocationStore> {
    if !resume {
        return Box::new(MemoryLocation::new());
    }
    match FileLocation::default_path() {
        Ok(path) => Box::new(FileLocation::new(path)),
        Err(e) => {
            warn!("not remembering the current slide: {e}");
            Box::new(MemoryLocation::new())
        }
    }
}

pub fn run(launch: LaunchOptions) -> anyhow::Result<()> {
    let config = Config::load_or_default();
    let settings = config.engine_settings();
    let registry = slides::registry()?;

    let location = location_store(launch.resume);
    let remembered = location.load();
    let start_index = resolve_start(
        launch.slide,
        launch.link.as_deref(),
        remembered.as_deref(),
        config.start_slide(),
        registry.len(),
    )?;

    let options = PresentationOptions {
        seed: launch.seed.or(settings.presentation.seed),
        ..settings.presentation
    };
    let presentation = Presentation::new(registry, options).with_location(location);
    let clock = FrameClock::new(settings.speed, settings.max_delta);
    let swipe = SwipeTracker::new(settings.swipe_threshold);
    let theme = Theme::from_name(&settings.theme);

    let viewport = if launch.windowed {
        egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 720.0])
            .with_title(TITLE)
    } else {
        egui::ViewportBuilder::default()
            .with_fullscreen(true)
            .with_title(TITLE)
    };

    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        TITLE,
        options,
        Box::new(move |_cc| {
            Ok(Box::new(DeckApp::new(
                presentation,
                clock,
                swipe,
                theme,
                start_index,
            )))
        }),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))
}
