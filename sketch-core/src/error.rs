use std::{error::Error, fmt};

#[derive(Debug, PartialEq)]
pub enum ConfigError {
    InvalidCanvasSize(f32),
    InvalidSizeFactor(f32),
    InvalidAngleFactor(f32),
    InvalidRadius(f32),
    DepthTooLarge { max_depth: usize, ceiling: usize },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCanvasSize(size) => {
                write!(f, "canvas size must be positive and finite, got {}", size)
            }
            Self::InvalidSizeFactor(factor) => {
                write!(f, "size factor must lie in (0, 1), got {}", factor)
            }
            Self::InvalidAngleFactor(factor) => {
                write!(f, "angle factor must be finite, got {}", factor)
            }
            Self::InvalidRadius(radius) => {
                write!(f, "circle radius must be positive and finite, got {}", radius)
            }
            Self::DepthTooLarge { max_depth, ceiling } => {
                write!(f, "max depth {} exceeds the ceiling of {}", max_depth, ceiling)
            }
        }
    }
}

impl Error for ConfigError {}

#[derive(Debug, PartialEq)]
pub enum FractalError {
    DepthLimitReached { max_depth: usize },
}

impl fmt::Display for FractalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DepthLimitReached { max_depth } => {
                write!(f, "recursion depth is already at the limit of {}", max_depth)
            }
        }
    }
}

impl Error for FractalError {}
