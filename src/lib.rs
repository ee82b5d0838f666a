//! Cubic Bézier evaluation and subdivision, plus the pieces of an interactive
//! demo built on top of them.
//!
//! The kernel is [`CubicBezier::sample`] (De Casteljau evaluation) and
//! [`CubicBezier::divide`] (midpoint subdivision). The [`draw`] module turns
//! curves into straight line segments for any [`Canvas`], and [`DemoState`]
//! holds the interaction state of the demo binary.
#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod color;
pub mod cubic_bezier;
pub mod demo;
pub mod draw;
pub mod error;
pub mod options;
pub mod point;
pub mod point2;

pub use color::Color;
pub use cubic_bezier::{ControlPoint, CubicBezier};
pub use demo::{Coordinates, DemoState, InputEvent};
pub use draw::{Canvas, Segment, MAX_DIVIDE_DEPTH};
pub use error::DemoError;
pub use options::{DemoOptions, DemoPoint, SampleLayer, MAX_SAMPLE_LAYERS};
pub use point::Point;
pub use point2::Point2;
