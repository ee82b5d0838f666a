//! Interactive cubic Bézier demo.
//!
//! Keys 1-4 pick a control point which then follows the mouse, a left click
//! drops it again and logs the control points. `D` toggles the recursive
//! subdivision layer, `+`/`-` change its depth.
//!
//! egui reports the keypad digits as the same `Key::Num1`..`Key::Num4` as the
//! top row, so both select control points.

use anyhow::{anyhow, Context as _};
use casteljau::{Canvas, Color, ControlPoint, DemoOptions, DemoPoint, DemoState, InputEvent, Point};
use eframe::egui;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("casteljau demo v{} starting...", env!("CARGO_PKG_VERSION"));

    let res = run(DemoOptions::default());

    if let Err(err) = &res {
        log::error!("{err:#}");
    } else {
        log::info!("window closed, exiting");
    }

    res
}

fn run(options: DemoOptions) -> anyhow::Result<()> {
    let state = DemoState::new(options).context("invalid demo options")?;

    let title = state.options().window_title;
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(state.options().window_size)
            .with_title(title)
            .with_resizable(false),
        vsync: true,
        ..Default::default()
    };

    eframe::run_native(
        title,
        native_options,
        Box::new(move |_cc| Ok(Box::new(DemoApp { state }))),
    )
    .map_err(|err| anyhow!("failed to run the demo window: {err}"))
}

struct DemoApp {
    state: DemoState,
}

impl eframe::App for DemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.state.handle_events(collect_input_events(ctx));
        if !self.state.running() {
            log::debug!("close requested");
            return;
        }

        let hover = ctx.input(|i| i.pointer.hover_pos());
        let background = to_color32(self.state.options().background);
        let state = &mut self.state;

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(background))
            .show(ctx, |ui| {
                let origin = ui.max_rect().min;
                state.track_cursor(hover.map(|pos| panel_point(pos, origin)));

                let mut canvas = PainterCanvas {
                    painter: ui.painter(),
                    origin,
                };
                state.draw(&mut canvas);
            });

        // the selected point tracks the cursor every frame, vsync paces the loop
        ctx.request_repaint();
    }
}

/// Draws the demo's line segments with the egui painter of the central panel.
struct PainterCanvas<'a> {
    painter: &'a egui::Painter,
    origin: egui::Pos2,
}

impl PainterCanvas<'_> {
    fn to_screen(&self, p: DemoPoint) -> egui::Pos2 {
        egui::pos2(self.origin.x + p.x, self.origin.y + p.y)
    }
}

impl Canvas<DemoPoint> for PainterCanvas<'_> {
    fn line(&mut self, from: DemoPoint, to: DemoPoint, color: Color) {
        self.painter.line_segment(
            [self.to_screen(from), self.to_screen(to)],
            egui::Stroke::new(1.0, to_color32(color)),
        );
    }
}

/// Screen position to panel relative demo coordinates.
fn panel_point(pos: egui::Pos2, origin: egui::Pos2) -> DemoPoint {
    DemoPoint::from_xy(pos.x - origin.x, pos.y - origin.y)
}

fn to_color32(color: Color) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(color.r, color.g, color.b, color.a)
}

/// Translate this frame's raw egui input into demo events, in arrival order.
fn collect_input_events(ctx: &egui::Context) -> Vec<InputEvent> {
    ctx.input(|i| {
        let mut events: Vec<InputEvent> = i.events.iter().filter_map(translate_event).collect();
        if i.viewport().close_requested() {
            events.push(InputEvent::CloseRequested);
        }
        events
    })
}

fn translate_event(event: &egui::Event) -> Option<InputEvent> {
    match event {
        egui::Event::Key {
            key,
            pressed: true,
            repeat: false,
            ..
        } => key_event(*key),
        egui::Event::PointerButton {
            button: egui::PointerButton::Primary,
            pressed: true,
            ..
        } => Some(InputEvent::PrimaryClick),
        _ => None,
    }
}

fn key_event(key: egui::Key) -> Option<InputEvent> {
    let digit = match key {
        egui::Key::Num1 => 1,
        egui::Key::Num2 => 2,
        egui::Key::Num3 => 3,
        egui::Key::Num4 => 4,
        egui::Key::D => return Some(InputEvent::ToggleDivided),
        egui::Key::Plus | egui::Key::Equals => return Some(InputEvent::DeeperDivision),
        egui::Key::Minus => return Some(InputEvent::ShallowerDivision),
        _ => return None,
    };
    ControlPoint::from_digit(digit).map(InputEvent::SelectPoint)
}
