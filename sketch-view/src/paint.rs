//! Painting a [`Canvas`] with egui.
//!
//! Canvas coordinates put `(0, 0)` at the top-left corner of the drawing
//! area, so mapping to screen space is a plain offset by the allocated
//! rect's minimum corner.

use glam::Vec2;
use sketch_core::{
    canvas::{Canvas, Shape},
    types::Color,
};

pub fn color32(c: Color) -> egui::Color32 {
    match c {
        Color::Brown => egui::Color32::from_rgb(165, 42, 42),
        Color::Green => egui::Color32::GREEN,
        Color::Red => egui::Color32::RED,
        Color::Black => egui::Color32::BLACK,
    }
}

pub fn canvas_to_screen(p: Vec2, rect: egui::Rect) -> egui::Pos2 {
    egui::pos2(rect.min.x + p.x, rect.min.y + p.y)
}

pub fn screen_to_canvas(p: egui::Pos2, rect: egui::Rect) -> Vec2 {
    Vec2::new(p.x - rect.min.x, p.y - rect.min.y)
}

/// Reserves a fixed-size, bordered drawing area for `canvas` and paints
/// all of its items in order.
///
/// ### Returns
/// The interaction response for the area and its screen rect.
pub fn show_canvas(ui: &mut egui::Ui, canvas: &Canvas) -> (egui::Response, egui::Rect) {
    let size = egui::vec2(canvas.width(), canvas.height());
    let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click_and_drag());
    let painter = ui.painter_at(rect);

    painter.rect_filled(rect, 0.0, egui::Color32::WHITE);
    painter.rect_stroke(
        rect,
        0.0,
        egui::Stroke::new(1.0, egui::Color32::BLACK),
        egui::StrokeKind::Inside,
    );

    paint_items(&painter, rect, canvas);
    (response, rect)
}

fn paint_items(painter: &egui::Painter, rect: egui::Rect, canvas: &Canvas) {
    for item in canvas.items() {
        match &item.shape {
            Shape::Line { from, to, color } => {
                let a = canvas_to_screen(*from, rect);
                let b = canvas_to_screen(*to, rect);
                painter.line_segment([a, b], egui::Stroke::new(1.0, color32(*color)));
            }
            Shape::Circle {
                center,
                radius,
                fill,
            } => {
                painter.circle(
                    canvas_to_screen(*center, rect),
                    *radius,
                    color32(*fill),
                    egui::Stroke::new(1.0, egui::Color32::BLACK),
                );
            }
            Shape::Text {
                pos,
                text,
                size,
                color,
            } => {
                painter.text(
                    canvas_to_screen(*pos, rect),
                    egui::Align2::CENTER_CENTER,
                    text,
                    egui::FontId::proportional(*size),
                    color32(*color),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_rect() -> egui::Rect {
        egui::Rect::from_min_size(egui::Pos2::new(8.0, 30.0), egui::vec2(400.0, 400.0))
    }

    #[test]
    fn canvas_to_screen_and_back_is_roundtrip() {
        let rect = test_rect();
        for p in [
            Vec2::new(0.0, 0.0),
            Vec2::new(200.0, 400.0),
            Vec2::new(13.5, 299.25),
        ] {
            let back = screen_to_canvas(canvas_to_screen(p, rect), rect);
            assert!(
                (back - p).length() < 1e-4,
                "roundtrip mismatch: p={:?}, back={:?}",
                p,
                back
            );
        }
    }

    #[test]
    fn canvas_origin_is_rect_top_left() {
        let rect = test_rect();
        assert_eq!(canvas_to_screen(Vec2::ZERO, rect), rect.min);
        assert_eq!(
            canvas_to_screen(Vec2::new(400.0, 400.0), rect),
            rect.max
        );
    }

    #[test]
    fn colours_are_distinct() {
        let all = [Color::Brown, Color::Green, Color::Red, Color::Black].map(color32);
        for i in 0..all.len() {
            for j in (i + 1)..all.len() {
                assert_ne!(all[i], all[j]);
            }
        }
    }
}
