//! Recursive fractal tree.
//!
//! The tree is a trunk growing straight up from the bottom-centre of the
//! canvas. Every recursion level splits each branch tip into two
//! children, rotated by `±angle_factor` and shortened by `size_factor`.
//!
//! Screen coordinates are used throughout, so the y-axis points down and
//! an angle of `π/2` grows towards the top of the canvas.

use crate::{
    canvas::Canvas,
    config::FractalConfig,
    error::{ConfigError, FractalError},
    types::{Color, Tag},
};
use glam::Vec2;
use std::f32::consts::FRAC_PI_2;

/// Canvas tag shared by every branch segment.
pub const BRANCH_TAG: Tag = "branches";

/// One line segment of the tree.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Branch {
    pub start: Vec2,
    pub end: Vec2,
    pub length: f32,
    pub angle: f32,
    /// 0 for the trunk, 1 for its two children, and so on.
    pub level: usize,
}

impl Branch {
    /// Builds a segment of `length` from `start`, heading along `angle`.
    ///
    /// The y component is subtracted because screen y grows downward.
    pub fn new(start: Vec2, length: f32, angle: f32, level: usize) -> Self {
        let end = Vec2::new(
            start.x + angle.cos() * length,
            start.y - angle.sin() * length,
        );
        Self {
            start,
            end,
            length,
            angle,
            level,
        }
    }

    pub fn color(&self) -> Color {
        if self.level == 0 {
            Color::Brown
        } else {
            Color::Green
        }
    }
}

/// Number of segments a tree of the given depth consists of: `2^(depth+1) - 1`.
pub fn expected_segment_count(depth: usize) -> usize {
    (1usize << (depth + 1)) - 1
}

/// Computes every branch of a tree rooted at `origin`.
///
/// Branches are returned depth-first: a segment, then the subtree rotated
/// by `+angle_factor`, then the one rotated by `-angle_factor`.
///
/// ### Parameters
/// - `origin` - Start of the trunk.
/// - `length` - Trunk length; children shrink by `cfg.size_factor`.
/// - `angle` - Trunk direction in radians.
/// - `depth` - Branching levels below the trunk; `0` yields only the trunk.
/// - `cfg` - Supplies the size and angle factors.
pub fn branches(
    origin: Vec2,
    length: f32,
    angle: f32,
    depth: usize,
    cfg: &FractalConfig,
) -> Vec<Branch> {
    let mut out = Vec::with_capacity(expected_segment_count(depth));
    grow(origin, length, angle, depth, 0, cfg, &mut out);
    out
}

fn grow(
    origin: Vec2,
    length: f32,
    angle: f32,
    remaining: usize,
    level: usize,
    cfg: &FractalConfig,
    out: &mut Vec<Branch>,
) {
    let branch = Branch::new(origin, length, angle, level);
    out.push(branch);

    if remaining == 0 {
        return;
    }

    let child_len = length * cfg.size_factor;
    for child_angle in [angle + cfg.angle_factor, angle - cfg.angle_factor] {
        grow(
            branch.end,
            child_len,
            child_angle,
            remaining - 1,
            level + 1,
            cfg,
            out,
        );
    }
}

/// State of the fractal tree sketch: current depth plus the canvas it is drawn on.
#[derive(Debug)]
pub struct FractalTree {
    cfg: FractalConfig,
    depth: usize,
    canvas: Canvas,
}

impl FractalTree {
    /// Creates the sketch at depth 0 with the trunk already drawn.
    pub fn new(cfg: FractalConfig) -> Result<Self, ConfigError> {
        cfg.validate()?;

        let mut tree = Self {
            cfg,
            depth: 0,
            canvas: Canvas::new(cfg.canvas_size, cfg.canvas_size),
        };
        tree.redraw();
        Ok(tree)
    }

    pub fn config(&self) -> &FractalConfig {
        &self.cfg
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn segment_count(&self) -> usize {
        self.canvas.count_tag(BRANCH_TAG)
    }

    /// Bottom-centre of the canvas, where the trunk starts.
    pub fn origin(&self) -> Vec2 {
        Vec2::new(self.cfg.canvas_size / 2.0, self.cfg.canvas_size)
    }

    /// Goes one recursion level deeper and redraws the whole tree.
    ///
    /// ### Returns
    /// - `Ok(depth)` with the new depth.
    /// - `Err(FractalError::DepthLimitReached)` if the tree is already at
    ///   `max_depth`; nothing is changed in that case.
    pub fn advance(&mut self) -> Result<usize, FractalError> {
        if self.depth >= self.cfg.max_depth {
            return Err(FractalError::DepthLimitReached {
                max_depth: self.cfg.max_depth,
            });
        }

        self.depth += 1;
        self.redraw();
        log::info!(
            "advanced to depth {} ({} segments)",
            self.depth,
            self.segment_count()
        );
        Ok(self.depth)
    }

    /// Wipes the canvas and goes back to the bare trunk.
    pub fn reset(&mut self) {
        self.canvas.delete_all();
        self.depth = 0;
        self.redraw();
        log::info!("reset to depth 0");
    }

    /// Replaces every branch on the canvas with the tree at the current depth.
    fn redraw(&mut self) {
        self.canvas.delete_tag(BRANCH_TAG);

        let tree = branches(
            self.origin(),
            self.cfg.base_length(),
            FRAC_PI_2,
            self.depth,
            &self.cfg,
        );
        for b in &tree {
            self.canvas
                .create_line(BRANCH_TAG, b.start, b.end, b.color());
        }

        log::debug!("drew {} branches at depth {}", tree.len(), self.depth);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::Shape;
    use rand::Rng;

    const EPS: f32 = 1e-3;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < EPS
    }

    #[test]
    fn depth_zero_is_a_single_vertical_trunk() {
        let cfg = FractalConfig::default();
        let tree = branches(Vec2::new(200.0, 400.0), 400.0 / 3.0, FRAC_PI_2, 0, &cfg);

        assert_eq!(tree.len(), 1);
        let trunk = tree[0];
        assert_eq!(trunk.level, 0);
        assert!(close(trunk.end.x, 200.0), "trunk end = {:?}", trunk.end);
        assert!(close(trunk.end.y, 400.0 - 400.0 / 3.0), "trunk end = {:?}", trunk.end);
        assert_eq!(trunk.color(), Color::Brown);
    }

    #[test]
    fn segment_count_matches_closed_form() {
        let cfg = FractalConfig::default();
        for depth in 0..=10 {
            let tree = branches(Vec2::ZERO, 100.0, FRAC_PI_2, depth, &cfg);
            assert_eq!(tree.len(), expected_segment_count(depth));
            assert_eq!(tree.len(), 2usize.pow(depth as u32 + 1) - 1);
        }
    }

    #[test]
    fn branch_length_decays_geometrically_per_level() {
        let cfg = FractalConfig::default();
        let base = 120.0;
        let tree = branches(Vec2::ZERO, base, FRAC_PI_2, 6, &cfg);

        for b in &tree {
            let expected = base * cfg.size_factor.powi(b.level as i32);
            assert!(close(b.length, expected), "level {} length {}", b.level, b.length);
            assert!(close((b.end - b.start).length(), expected));
        }
    }

    #[test]
    fn children_start_at_parent_tip_and_rotate_by_angle_factor() {
        let cfg = FractalConfig::default();
        let tree = branches(Vec2::new(200.0, 400.0), 100.0, FRAC_PI_2, 1, &cfg);

        let [trunk, left, right] = [tree[0], tree[1], tree[2]];
        assert_eq!(left.start, trunk.end);
        assert_eq!(right.start, trunk.end);
        assert!(close(left.angle, trunk.angle + cfg.angle_factor));
        assert!(close(right.angle, trunk.angle - cfg.angle_factor));
        assert_eq!(left.color(), Color::Green);
    }

    #[test]
    fn every_node_angle_differs_from_its_parent_by_angle_factor() {
        let cfg = FractalConfig::default();
        let tree = branches(Vec2::ZERO, 100.0, FRAC_PI_2, 4, &cfg);

        // Each non-trunk branch starts at the tip of exactly one branch one level up.
        for child in tree.iter().filter(|b| b.level > 0) {
            let parent = tree
                .iter()
                .find(|p| p.level + 1 == child.level && (p.end - child.start).length() < EPS)
                .expect("child without parent");
            let diff = (child.angle - parent.angle).abs();
            assert!(close(diff, cfg.angle_factor), "diff = {}", diff);
        }
    }

    #[test]
    fn new_tree_draws_only_the_trunk() {
        let tree = FractalTree::new(FractalConfig::default()).unwrap();

        assert_eq!(tree.depth(), 0);
        assert_eq!(tree.segment_count(), 1);
        match &tree.canvas().items()[0].shape {
            Shape::Line { from, color, .. } => {
                assert_eq!(*from, Vec2::new(200.0, 400.0));
                assert_eq!(*color, Color::Brown);
            }
            other => panic!("unexpected shape {other:?}"),
        }
    }

    #[test]
    fn advance_redraws_instead_of_drawing_on_top() {
        let mut tree = FractalTree::new(FractalConfig::default()).unwrap();

        for depth in 1..=5 {
            assert_eq!(tree.advance(), Ok(depth));
            assert_eq!(tree.segment_count(), expected_segment_count(depth));
            assert_eq!(tree.canvas().len(), expected_segment_count(depth));
        }
    }

    #[test]
    fn reset_returns_to_single_segment_from_any_depth() {
        let mut rng = rand::rng();
        let mut tree = FractalTree::new(FractalConfig::default()).unwrap();

        for _ in 0..5 {
            let steps = rng.random_range(0..=8);
            for _ in 0..steps {
                tree.advance().unwrap();
            }
            tree.reset();

            assert_eq!(tree.depth(), 0);
            assert_eq!(tree.segment_count(), 1);
            assert_eq!(tree.canvas().len(), 1);
        }
    }

    #[test]
    fn advance_at_max_depth_is_a_no_op() {
        let cfg = FractalConfig {
            max_depth: 2,
            ..FractalConfig::default()
        };
        let mut tree = FractalTree::new(cfg).unwrap();
        tree.advance().unwrap();
        tree.advance().unwrap();
        let before = tree.canvas().items().to_vec();

        assert_eq!(
            tree.advance(),
            Err(FractalError::DepthLimitReached { max_depth: 2 })
        );
        assert_eq!(tree.depth(), 2);
        assert_eq!(tree.canvas().items(), before.as_slice());
    }

    #[test]
    fn max_depth_zero_never_advances() {
        let cfg = FractalConfig {
            max_depth: 0,
            ..FractalConfig::default()
        };
        let mut tree = FractalTree::new(cfg).unwrap();

        assert!(tree.advance().is_err());
        assert_eq!(tree.segment_count(), 1);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let cfg = FractalConfig {
            size_factor: 0.0,
            ..FractalConfig::default()
        };
        assert_eq!(
            FractalTree::new(cfg).unwrap_err(),
            ConfigError::InvalidSizeFactor(0.0)
        );
    }
}
