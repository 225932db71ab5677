//! Retained drawing surface.
//!
//! [`Canvas`] keeps an ordered list of tagged shapes. The sketches only
//! ever create, move and delete items; painting them is left to the
//! viewer, which walks [`Canvas::items`] in insertion order so later
//! items end up on top.

use crate::types::{Color, ItemId, Tag};
use glam::Vec2;

#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Line {
        from: Vec2,
        to: Vec2,
        color: Color,
    },
    Circle {
        center: Vec2,
        radius: f32,
        fill: Color,
    },
    Text {
        pos: Vec2,
        text: String,
        size: f32,
        color: Color,
    },
}

impl Shape {
    /// Translates the shape by `delta` in place.
    fn translate(&mut self, delta: Vec2) {
        match self {
            Shape::Line { from, to, .. } => {
                *from += delta;
                *to += delta;
            }
            Shape::Circle { center, .. } => *center += delta,
            Shape::Text { pos, .. } => *pos += delta,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Item {
    pub id: ItemId,
    pub tag: Tag,
    pub shape: Shape,
}

#[derive(Clone, Debug)]
pub struct Canvas {
    width: f32,
    height: f32,
    items: Vec<Item>,
    next_id: ItemId,
}

impl Canvas {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            items: Vec::with_capacity(16),
            next_id: 0,
        }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Number of items currently carrying `tag`.
    pub fn count_tag(&self, tag: Tag) -> usize {
        self.items.iter().filter(|item| item.tag == tag).count()
    }

    fn push(&mut self, tag: Tag, shape: Shape) -> ItemId {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Item { id, tag, shape });
        id
    }

    pub fn create_line(&mut self, tag: Tag, from: Vec2, to: Vec2, color: Color) -> ItemId {
        self.push(tag, Shape::Line { from, to, color })
    }

    pub fn create_circle(&mut self, tag: Tag, center: Vec2, radius: f32, fill: Color) -> ItemId {
        self.push(
            tag,
            Shape::Circle {
                center,
                radius,
                fill,
            },
        )
    }

    pub fn create_text(
        &mut self,
        tag: Tag,
        pos: Vec2,
        text: impl Into<String>,
        size: f32,
        color: Color,
    ) -> ItemId {
        self.push(
            tag,
            Shape::Text {
                pos,
                text: text.into(),
                size,
                color,
            },
        )
    }

    /// Removes every item carrying `tag`.
    ///
    /// ### Returns
    /// The number of items removed.
    pub fn delete_tag(&mut self, tag: Tag) -> usize {
        self.delete_tags(&[tag])
    }

    /// Removes every item whose tag is one of `tags`.
    pub fn delete_tags(&mut self, tags: &[Tag]) -> usize {
        let before = self.items.len();
        self.items.retain(|item| !tags.contains(&item.tag));
        before - self.items.len()
    }

    pub fn delete_all(&mut self) {
        self.items.clear();
    }

    /// Translates a single item by `delta`.
    ///
    /// ### Returns
    /// `false` if no item with that id exists.
    pub fn move_item(&mut self, id: ItemId, delta: Vec2) -> bool {
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.shape.translate(delta);
                true
            }
            None => false,
        }
    }
}
