//! Command-line arguments for the two binaries.

use clap::Parser;
use sketch_core::config::{CirclesConfig, FractalConfig};

/// Draws a fractal tree one recursion level at a time.
#[derive(Parser, Debug)]
#[command(name = "fractal-tree", version)]
pub struct FractalArgs {
    /// Side length of the square canvas in pixels.
    #[arg(long, default_value_t = 400.0)]
    pub size: f32,

    /// Deepest recursion level "Advance" may reach.
    #[arg(long, default_value_t = 12)]
    pub max_depth: usize,
}

impl FractalArgs {
    pub fn config(&self) -> FractalConfig {
        FractalConfig {
            canvas_size: self.size,
            max_depth: self.max_depth,
            ..FractalConfig::default()
        }
    }
}

/// Place two circles, then drag them around to see their distance.
#[derive(Parser, Debug)]
#[command(name = "moving-circles", version)]
pub struct CirclesArgs {
    /// Side length of the square canvas in pixels.
    #[arg(long, default_value_t = 400.0)]
    pub size: f32,

    /// Circle radius in pixels.
    #[arg(long, default_value_t = 20.0)]
    pub radius: f32,
}

impl CirclesArgs {
    pub fn config(&self) -> CirclesConfig {
        CirclesConfig {
            canvas_size: self.size,
            radius: self.radius,
            ..CirclesConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fractal_defaults_match_core_defaults() {
        let args = FractalArgs::try_parse_from(["fractal-tree"]).unwrap();
        assert_eq!(args.config(), FractalConfig::default());
    }

    #[test]
    fn fractal_flags_override_config() {
        let args =
            FractalArgs::try_parse_from(["fractal-tree", "--size", "600", "--max-depth", "4"])
                .unwrap();
        let cfg = args.config();
        assert_eq!(cfg.canvas_size, 600.0);
        assert_eq!(cfg.max_depth, 4);
        assert_eq!(cfg.size_factor, FractalConfig::default().size_factor);
    }

    #[test]
    fn circles_flags_override_config() {
        let args = CirclesArgs::try_parse_from(["moving-circles", "--radius", "35"]).unwrap();
        let cfg = args.config();
        assert_eq!(cfg.radius, 35.0);
        assert_eq!(cfg.canvas_size, 400.0);
    }

    #[test]
    fn negative_depth_is_rejected() {
        assert!(FractalArgs::try_parse_from(["fractal-tree", "--max-depth", "-1"]).is_err());
    }

    #[test]
    fn circles_defaults_match_core_defaults() {
        let args = CirclesArgs::try_parse_from(["moving-circles"]).unwrap();
        assert_eq!(args.config(), CirclesConfig::default());
    }
}
