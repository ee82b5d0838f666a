//! Compiled-in defaults for the demo window, the initial curve and the drawn layers.

use tinyvec::ArrayVec;

use crate::color::Color;
use crate::cubic_bezier::CubicBezier;
use crate::draw::MAX_DIVIDE_DEPTH;
use crate::error::{DemoError, Result};
use crate::point2::Point2;

/// Point type the demo works in, window pixel coordinates with y pointing down.
pub type DemoPoint = Point2<f32>;

/// Upper bound on the number of uniformly sampled approximations drawn per frame.
pub const MAX_SAMPLE_LAYERS: usize = 8;

/// One uniformly sampled approximation of the curve.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct SampleLayer {
    pub samples: usize,
    pub color: Color,
}

impl SampleLayer {
    pub const fn new(samples: usize, color: Color) -> Self {
        SampleLayer { samples, color }
    }
}

/// Everything the demo can be set up with. There is no file or command line
/// layer on top of this; `Default` is what the binary runs with.
#[derive(Clone, Debug, PartialEq)]
pub struct DemoOptions {
    pub window_title: &'static str,
    /// Inner window size in points.
    pub window_size: [f32; 2],
    pub background: Color,
    pub initial_curve: CubicBezier<DemoPoint>,
    pub polygon_color: Color,
    /// Drawn in order, so later layers end up on top. Holds at most
    /// `MAX_SAMPLE_LAYERS`, pushing past that panics; `add_sample_layer()`
    /// reports it as an error instead.
    pub sample_layers: ArrayVec<[SampleLayer; MAX_SAMPLE_LAYERS]>,
    pub show_divided: bool,
    pub divide_depth: usize,
    pub divide_color: Color,
}

impl Default for DemoOptions {
    fn default() -> Self {
        let mut sample_layers = ArrayVec::new();
        sample_layers.extend([
            SampleLayer::new(4, Color::BLUE),
            SampleLayer::new(8, Color::GREEN),
            SampleLayer::new(16, Color::RED),
        ]);

        DemoOptions {
            window_title: "bezier",
            window_size: [800.0, 600.0],
            background: Color::BLACK,
            initial_curve: CubicBezier::new(
                Point2::new(150.0, 450.0),
                Point2::new(250.0, 100.0),
                Point2::new(350.0, 450.0),
                Point2::new(450.0, 100.0),
            ),
            polygon_color: Color::WHITE,
            sample_layers,
            show_divided: false,
            divide_depth: MAX_DIVIDE_DEPTH,
            divide_color: Color::YELLOW,
        }
    }
}

impl DemoOptions {
    /// Append a layer to be drawn on top of the existing ones.
    pub fn add_sample_layer(&mut self, layer: SampleLayer) -> Result<()> {
        match self.sample_layers.try_push(layer) {
            None => Ok(()),
            Some(_) => Err(DemoError::TooManySampleLayers { max: MAX_SAMPLE_LAYERS }),
        }
    }

    /// Check the options for values the demo cannot draw.
    pub fn validate(&self) -> Result<()> {
        if self.divide_depth > MAX_DIVIDE_DEPTH {
            return Err(DemoError::DivideDepthTooLarge {
                depth: self.divide_depth,
                max: MAX_DIVIDE_DEPTH,
            });
        }
        if self.sample_layers.is_empty() {
            return Err(DemoError::NoSampleLayers);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let options = DemoOptions::default();
        assert_eq!(options.validate(), Ok(()));
        let samples: Vec<usize> = options.sample_layers.iter().map(|l| l.samples).collect();
        assert_eq!(samples, vec![4, 8, 16]);
        assert!(!options.show_divided);
    }

    #[test]
    fn rejects_deep_subdivision() {
        let options = DemoOptions {
            divide_depth: MAX_DIVIDE_DEPTH + 1,
            ..DemoOptions::default()
        };
        assert_eq!(
            options.validate(),
            Err(DemoError::DivideDepthTooLarge { depth: 6, max: 5 })
        );
    }

    #[test]
    fn layer_list_is_bounded() {
        let mut options = DemoOptions::default();
        options.sample_layers.clear();
        for samples in 1..=MAX_SAMPLE_LAYERS {
            assert_eq!(options.add_sample_layer(SampleLayer::new(samples, Color::WHITE)), Ok(()));
        }
        assert_eq!(
            options.add_sample_layer(SampleLayer::new(64, Color::WHITE)),
            Err(DemoError::TooManySampleLayers { max: MAX_SAMPLE_LAYERS })
        );
        assert_eq!(options.sample_layers.len(), MAX_SAMPLE_LAYERS);
        assert_eq!(options.sample_layers[MAX_SAMPLE_LAYERS - 1].samples, MAX_SAMPLE_LAYERS);
        assert_eq!(options.validate(), Ok(()));
    }

    #[test]
    fn rejects_empty_layer_list() {
        let mut options = DemoOptions::default();
        options.sample_layers.clear();
        assert_eq!(options.validate(), Err(DemoError::NoSampleLayers));
    }
}
