//! Interaction state of the demo, independent of any windowing library.
//!
//! The frame loop feeds `InputEvent`s into `DemoState::handle_event()`, reports the
//! cursor with `DemoState::track_cursor()` and finally calls `DemoState::draw()`.

use core::fmt;

use log::{debug, info};

use crate::cubic_bezier::{ControlPoint, CubicBezier};
use crate::draw::{self, Canvas, MAX_DIVIDE_DEPTH};
use crate::error::Result;
use crate::options::{DemoOptions, DemoPoint};

/// Everything the demo reacts to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum InputEvent {
    /// Digit keys 1 to 4: the point starts following the cursor.
    SelectPoint(ControlPoint),
    /// Left mouse button: drop the selection and log the control points.
    PrimaryClick,
    ToggleDivided,
    DeeperDivision,
    ShallowerDivision,
    CloseRequested,
}

#[derive(Clone, Debug)]
pub struct DemoState {
    options: DemoOptions,
    curve: CubicBezier<DemoPoint>,
    selected: Option<ControlPoint>,
    show_divided: bool,
    divide_depth: usize,
    running: bool,
}

impl DemoState {
    pub fn new(options: DemoOptions) -> Result<Self> {
        options.validate()?;
        Ok(DemoState {
            curve: options.initial_curve,
            selected: None,
            show_divided: options.show_divided,
            divide_depth: options.divide_depth,
            running: true,
            options,
        })
    }

    pub fn options(&self) -> &DemoOptions {
        &self.options
    }

    pub fn curve(&self) -> &CubicBezier<DemoPoint> {
        &self.curve
    }

    pub fn selected(&self) -> Option<ControlPoint> {
        self.selected
    }

    pub fn show_divided(&self) -> bool {
        self.show_divided
    }

    pub fn divide_depth(&self) -> usize {
        self.divide_depth
    }

    /// False once the window asked to close.
    pub fn running(&self) -> bool {
        self.running
    }

    pub fn handle_events<I>(&mut self, events: I)
    where
        I: IntoIterator<Item = InputEvent>,
    {
        for event in events {
            self.handle_event(event);
        }
    }

    pub fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::SelectPoint(which) => {
                debug!("selected control point p{}", which.number());
                self.selected = Some(which);
            }
            InputEvent::PrimaryClick => {
                self.selected = None;
                info!("{}", Coordinates(&self.curve));
            }
            InputEvent::ToggleDivided => {
                self.show_divided = !self.show_divided;
                debug!("subdivision layer {}", if self.show_divided { "on" } else { "off" });
            }
            InputEvent::DeeperDivision => {
                if self.divide_depth < MAX_DIVIDE_DEPTH {
                    self.divide_depth += 1;
                    debug!("subdivision depth {}", self.divide_depth);
                }
            }
            InputEvent::ShallowerDivision => {
                if self.divide_depth > 0 {
                    self.divide_depth -= 1;
                    debug!("subdivision depth {}", self.divide_depth);
                }
            }
            InputEvent::CloseRequested => {
                self.running = false;
            }
        }
    }

    /// Move the selected control point onto the cursor.
    /// Returns true if a point was moved.
    pub fn track_cursor(&mut self, cursor: Option<DemoPoint>) -> bool {
        match (self.selected, cursor) {
            (Some(which), Some(position)) => {
                self.curve.set_control_point(which, position);
                true
            }
            _ => false,
        }
    }

    /// Emit one frame worth of lines: control polygon, the uniform layers in
    /// configured order and, if enabled, the recursive subdivision.
    pub fn draw<C>(&self, canvas: &mut C)
    where
        C: Canvas<DemoPoint> + ?Sized,
    {
        draw::draw_control_polygon(&self.curve, canvas, self.options.polygon_color);
        for layer in self.options.sample_layers.iter() {
            draw::draw_uniform_sampled(&self.curve, layer.samples, canvas, layer.color);
        }
        if self.show_divided {
            draw::draw_divided(&self.curve, self.divide_depth, canvas, self.options.divide_color);
        }
    }
}

/// Formats the four control points as `p1 x, y p2 x, y p3 x, y p4 x y`.
pub struct Coordinates<'a>(pub &'a CubicBezier<DemoPoint>);

impl fmt::Display for Coordinates<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [p1, p2, p3, p4] = self.0.control_points();
        write!(
            f,
            "p1 {:.6}, {:.6} p2 {:.6}, {:.6} p3 {:.6}, {:.6} p4 {:.6} {:.6}",
            p1.x, p1.y, p2.x, p2.y, p3.x, p3.y, p4.x, p4.y
        )
    }
}
