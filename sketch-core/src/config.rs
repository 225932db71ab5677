//! Tunable parameters for both sketches.
//!
//! Each config has a [`Default`] matching the classic look of the demo
//! and a `validate` step run by the sketch constructors.

use crate::error::ConfigError;
use std::f32::consts::PI;

/// Largest accepted `max_depth`; a tree this deep already has about two
/// million segments.
pub const DEPTH_CEILING: usize = 20;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FractalConfig {
    /// Side length of the square canvas in pixels.
    pub canvas_size: f32,
    /// Each child branch is this fraction of its parent's length.
    pub size_factor: f32,
    /// Angle added to / subtracted from the parent angle for each child.
    pub angle_factor: f32,
    /// Highest depth `advance` is allowed to reach.
    pub max_depth: usize,
}

impl Default for FractalConfig {
    fn default() -> Self {
        Self {
            canvas_size: 400.0,
            size_factor: 0.58,
            angle_factor: PI / 5.0,
            max_depth: 12,
        }
    }
}

impl FractalConfig {
    /// Length of the trunk: a third of the canvas.
    pub fn base_length(&self) -> f32 {
        self.canvas_size / 3.0
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.canvas_size.is_finite() && self.canvas_size > 0.0) {
            return Err(ConfigError::InvalidCanvasSize(self.canvas_size));
        }
        if !(self.size_factor > 0.0 && self.size_factor < 1.0) {
            return Err(ConfigError::InvalidSizeFactor(self.size_factor));
        }
        if !self.angle_factor.is_finite() {
            return Err(ConfigError::InvalidAngleFactor(self.angle_factor));
        }
        if self.max_depth > DEPTH_CEILING {
            return Err(ConfigError::DepthTooLarge {
                max_depth: self.max_depth,
                ceiling: DEPTH_CEILING,
            });
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CirclesConfig {
    pub canvas_size: f32,
    pub radius: f32,
    /// Font size of the distance label.
    pub label_size: f32,
}

impl Default for CirclesConfig {
    fn default() -> Self {
        Self {
            canvas_size: 400.0,
            radius: 20.0,
            label_size: 10.0,
        }
    }
}

impl CirclesConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.canvas_size.is_finite() && self.canvas_size > 0.0) {
            return Err(ConfigError::InvalidCanvasSize(self.canvas_size));
        }
        if !(self.radius.is_finite() && self.radius > 0.0) {
            return Err(ConfigError::InvalidRadius(self.radius));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert_eq!(FractalConfig::default().validate(), Ok(()));
        assert_eq!(CirclesConfig::default().validate(), Ok(()));
    }

    #[test]
    fn base_length_is_a_third_of_the_canvas() {
        let cfg = FractalConfig {
            canvas_size: 300.0,
            ..FractalConfig::default()
        };
        assert_eq!(cfg.base_length(), 100.0);
    }

    #[test]
    fn fractal_config_rejects_bad_values() {
        let mut cfg = FractalConfig::default();
        cfg.canvas_size = 0.0;
        assert_eq!(cfg.validate(), Err(ConfigError::InvalidCanvasSize(0.0)));

        let mut cfg = FractalConfig::default();
        cfg.size_factor = 1.0;
        assert_eq!(cfg.validate(), Err(ConfigError::InvalidSizeFactor(1.0)));

        let mut cfg = FractalConfig::default();
        cfg.angle_factor = f32::INFINITY;
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::InvalidAngleFactor(f32::INFINITY))
        );

        let mut cfg = FractalConfig::default();
        cfg.max_depth = DEPTH_CEILING + 1;
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::DepthTooLarge {
                max_depth: DEPTH_CEILING + 1,
                ceiling: DEPTH_CEILING,
            })
        );
    }

    #[test]
    fn circles_config_rejects_non_positive_radius() {
        let mut cfg = CirclesConfig::default();
        cfg.radius = -1.0;
        assert_eq!(cfg.validate(), Err(ConfigError::InvalidRadius(-1.0)));
    }
}
