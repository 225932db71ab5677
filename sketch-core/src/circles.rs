//! Two draggable circles joined by a line with a live distance label.
//!
//! The sketch is a three-state machine driven by pointer events:
//!
//! 1. [`CircleState::WaitingForFirstClick`] — a click places circle 1.
//! 2. [`CircleState::WaitingForSecondClick`] — a click places circle 2 and
//!    draws the connecting line and label.
//! 3. [`CircleState::DraggingCircles`] — either circle can be dragged; the
//!    line and label are erased and redrawn on every drag event. Further
//!    clicks never create a third circle.
//!
//! [`MovingCircles::clear`] returns to the first state from anywhere.

use crate::{
    canvas::Canvas,
    config::CirclesConfig,
    error::ConfigError,
    types::{Color, ItemId, Tag},
};
use glam::Vec2;

pub const LINE_TAG: Tag = "line";
pub const TEXT_TAG: Tag = "text";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CircleId {
    First,
    Second,
}

impl CircleId {
    pub fn index(self) -> usize {
        match self {
            CircleId::First => 0,
            CircleId::Second => 1,
        }
    }

    pub fn tag(self) -> Tag {
        match self {
            CircleId::First => "circle1",
            CircleId::Second => "circle2",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CircleState {
    WaitingForFirstClick,
    WaitingForSecondClick { first: Vec2 },
    DraggingCircles { centers: [Vec2; 2] },
}

/// Derived line/label data for a pair of centers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Connection {
    pub start: Vec2,
    pub end: Vec2,
    pub distance: f32,
    pub midpoint: Vec2,
}

impl Connection {
    pub fn between(start: Vec2, end: Vec2) -> Self {
        Self {
            start,
            end,
            distance: start.distance(end),
            midpoint: (start + end) / 2.0,
        }
    }

    /// Distance formatted with two decimals, e.g. `"200.00"`.
    pub fn label(&self) -> String {
        format!("{:.2}", self.distance)
    }
}

#[derive(Debug)]
pub struct MovingCircles {
    cfg: CirclesConfig,
    state: CircleState,
    canvas: Canvas,
    circle_items: [Option<ItemId>; 2],
}

impl MovingCircles {
    pub fn new(cfg: CirclesConfig) -> Result<Self, ConfigError> {
        cfg.validate()?;

        Ok(Self {
            cfg,
            state: CircleState::WaitingForFirstClick,
            canvas: Canvas::new(cfg.canvas_size, cfg.canvas_size),
            circle_items: [None; 2],
        })
    }

    pub fn config(&self) -> &CirclesConfig {
        &self.cfg
    }

    pub fn state(&self) -> &CircleState {
        &self.state
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Centers of the circles that currently exist, in creation order.
    pub fn centers(&self) -> Vec<Vec2> {
        match self.state {
            CircleState::WaitingForFirstClick => Vec::new(),
            CircleState::WaitingForSecondClick { first } => vec![first],
            CircleState::DraggingCircles { centers } => centers.to_vec(),
        }
    }

    /// Line and label data, present only once both circles exist.
    pub fn connection(&self) -> Option<Connection> {
        match self.state {
            CircleState::DraggingCircles { centers: [a, b] } => Some(Connection::between(a, b)),
            _ => None,
        }
    }

    /// Handles a mouse-down on the canvas at `pos`.
    ///
    /// Places circle 1, then circle 2; once both exist, clicks are ignored
    /// here and only [`MovingCircles::drag`] changes anything.
    ///
    /// ### Returns
    /// The state after the click.
    pub fn click(&mut self, pos: Vec2) -> &CircleState {
        match self.state {
            CircleState::WaitingForFirstClick => {
                self.place_circle(CircleId::First, pos);
                self.state = CircleState::WaitingForSecondClick { first: pos };
                log::debug!("first circle at ({:.1}, {:.1})", pos.x, pos.y);
            }
            CircleState::WaitingForSecondClick { first } => {
                self.place_circle(CircleId::Second, pos);
                self.state = CircleState::DraggingCircles {
                    centers: [first, pos],
                };
                let conn = self.draw_connection(first, pos);
                log::debug!(
                    "second circle at ({:.1}, {:.1}), distance {}",
                    pos.x,
                    pos.y,
                    conn.label()
                );
            }
            CircleState::DraggingCircles { .. } => {
                log::trace!("click ignored while dragging");
            }
        }
        &self.state
    }

    /// Finds the circle under `pos`, if both circles exist.
    ///
    /// Circle 2 is drawn above circle 1, so it wins where they overlap.
    pub fn hit_test(&self, pos: Vec2) -> Option<CircleId> {
        let CircleState::DraggingCircles { centers } = self.state else {
            return None;
        };

        [CircleId::Second, CircleId::First]
            .into_iter()
            .find(|id| centers[id.index()].distance(pos) <= self.cfg.radius)
    }

    /// Moves circle `id` so its center sits at `pos`, then redraws the
    /// connecting line and distance label.
    ///
    /// ### Returns
    /// - `Some(connection)` reflecting the updated pair.
    /// - `None` if the circles are not both placed yet.
    pub fn drag(&mut self, id: CircleId, pos: Vec2) -> Option<Connection> {
        let CircleState::DraggingCircles { centers } = &mut self.state else {
            return None;
        };

        let delta = pos - centers[id.index()];
        centers[id.index()] = pos;
        let [a, b] = *centers;

        if let Some(item) = self.circle_items[id.index()] {
            self.canvas.move_item(item, delta);
        }
        self.canvas.delete_tags(&[LINE_TAG, TEXT_TAG]);
        Some(self.draw_connection(a, b))
    }

    /// Erases everything and waits for a first click again.
    pub fn clear(&mut self) {
        self.canvas.delete_all();
        self.circle_items = [None; 2];
        self.state = CircleState::WaitingForFirstClick;
        log::info!("cleared");
    }

    fn place_circle(&mut self, id: CircleId, center: Vec2) {
        let item = self
            .canvas
            .create_circle(id.tag(), center, self.cfg.radius, Color::Red);
        self.circle_items[id.index()] = Some(item);
    }

    fn draw_connection(&mut self, a: Vec2, b: Vec2) -> Connection {
        let conn = Connection::between(a, b);
        self.canvas.create_line(LINE_TAG, a, b, Color::Red);
        self.canvas.create_text(
            TEXT_TAG,
            conn.midpoint,
            conn.label(),
            self.cfg.label_size,
            Color::Black,
        );
        conn
    }
}
