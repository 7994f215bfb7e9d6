//! Shape generation and primitive drawing

use glam::Vec2;
use sdl2::rect::{Point, Rect};
use sdl2::render::WindowCanvas;

use crate::error::{Error, Result};
use crate::palette;
use crate::sim::Scene;

/// Horizontal 1-pixel spans covering a filled circle
pub fn circle_spans(center: Vec2, radius: f32) -> Vec<Rect> {
    let r = radius.max(0.0).round() as i32;
    let cx = center.x.round() as i32;
    let cy = center.y.round() as i32;

    (-r..=r)
        .map(|dy| {
            // Half-width of the chord at this row
            let half = ((r * r - dy * dy) as f32).sqrt().round() as i32;
            Rect::new(cx - half, cy + dy, (2 * half + 1) as u32, 1)
        })
        .collect()
}

/// Draw every ball as a filled red circle in one batch
pub fn draw_scene(canvas: &mut WindowCanvas, scene: &Scene) -> Result<()> {
    let spans: Vec<Rect> = scene
        .balls
        .iter()
        .flat_map(|ball| circle_spans(ball.pos, ball.radius))
        .collect();

    canvas.set_draw_color(palette::RED);
    canvas.fill_rects(&spans).map_err(Error::Draw)
}

/// Filled and outlined rectangles of the geometry lesson, for a `width` x `height` viewport
pub fn geometry_rects(width: u32, height: u32) -> (Rect, Rect) {
    let fill = Rect::new(
        (width / 4) as i32,
        (height / 4) as i32,
        width / 2,
        height / 2,
    );
    let outline = Rect::new(
        (width / 6) as i32,
        (height / 6) as i32,
        width * 2 / 3,
        height * 2 / 3,
    );
    (fill, outline)
}

/// Red quad, green outline, yellow horizontal line and dotted vertical line
pub fn draw_geometry(canvas: &mut WindowCanvas, width: u32, height: u32) -> Result<()> {
    let (fill, outline) = geometry_rects(width, height);
    let (w, h) = (width as i32, height as i32);

    canvas.set_draw_color(palette::RED);
    canvas.fill_rect(fill).map_err(Error::Draw)?;

    canvas.set_draw_color(palette::GREEN);
    canvas.draw_rect(outline).map_err(Error::Draw)?;

    canvas.set_draw_color(palette::YELLOW);
    canvas
        .draw_line(Point::new(0, h / 2), Point::new(w, h / 2))
        .map_err(Error::Draw)?;

    let dots: Vec<Point> = (0..h).step_by(4).map(|y| Point::new(w / 2, y)).collect();
    canvas.draw_points(dots.as_slice()).map_err(Error::Draw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_spans_cover_bounding_square() {
        let center = Vec2::new(100.0, 50.0);
        let spans = circle_spans(center, 10.0);
        assert_eq!(spans.len(), 21);

        for span in &spans {
            assert_eq!(span.height(), 1);
            assert!(span.left() >= 90);
            assert!(span.right() <= 111);
            assert!((40..=60).contains(&span.y()));
        }

        // Middle row spans the full diameter
        assert_eq!(spans[10], Rect::new(90, 50, 21, 1));
        // Top row is a single pixel
        assert_eq!(spans[0], Rect::new(100, 40, 1, 1));
    }

    #[test]
    fn test_zero_radius_is_one_pixel() {
        let spans = circle_spans(Vec2::new(3.0, 4.0), 0.0);
        assert_eq!(spans, vec![Rect::new(3, 4, 1, 1)]);
    }

    #[test]
    fn test_geometry_rects() {
        let (fill, outline) = geometry_rects(1280, 480);
        assert_eq!(fill, Rect::new(320, 120, 640, 240));
        assert_eq!(outline, Rect::new(213, 80, 853, 320));
    }
}
