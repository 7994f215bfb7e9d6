//! Mouse-reactive buttons

use sdl2::event::Event;
use sdl2::rect::{Point, Rect};
use sdl2::render::WindowCanvas;

use crate::error::{Error, Result};
use crate::palette;
use crate::renderer::Texture;

/// Last mouse interaction seen by a button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MouseEventType {
    /// Pointer is outside the button
    #[default]
    Out,
    Motion,
    Down,
    Up,
}

/// Extract the kind and position of a mouse event; other events give `None`
pub fn pointer_event(event: &Event) -> Option<(MouseEventType, i32, i32)> {
    match *event {
        Event::MouseMotion { x, y, .. } => Some((MouseEventType::Motion, x, y)),
        Event::MouseButtonDown { x, y, .. } => Some((MouseEventType::Down, x, y)),
        Event::MouseButtonUp { x, y, .. } => Some((MouseEventType::Up, x, y)),
        _ => None,
    }
}

/// One label texture per button state
pub struct ButtonLabels<'a> {
    pub out: Texture<'a>,
    pub motion: Texture<'a>,
    pub down: Texture<'a>,
    pub up: Texture<'a>,
}

impl<'a> ButtonLabels<'a> {
    pub fn for_state(&self, state: MouseEventType) -> &Texture<'a> {
        match state {
            MouseEventType::Out => &self.out,
            MouseEventType::Motion => &self.motion,
            MouseEventType::Down => &self.down,
            MouseEventType::Up => &self.up,
        }
    }
}

/// A rectangular button that remembers the last mouse event over it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Button {
    bounds: Rect,
    state: MouseEventType,
}

impl Button {
    pub fn new(bounds: Rect) -> Self {
        Self {
            bounds,
            state: MouseEventType::Out,
        }
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn state(&self) -> MouseEventType {
        self.state
    }

    /// Feed any SDL event; non-mouse events are ignored
    pub fn handle_event(&mut self, event: &Event) {
        if let Some((kind, x, y)) = pointer_event(event) {
            self.handle_pointer(kind, x, y);
        }
    }

    /// Update state from a pointer event at `(x, y)`
    pub fn handle_pointer(&mut self, kind: MouseEventType, x: i32, y: i32) {
        self.state = if self.bounds.contains_point(Point::new(x, y)) {
            kind
        } else {
            MouseEventType::Out
        };
    }

    /// Fill the button and center the label for the current state
    pub fn render(&self, canvas: &mut WindowCanvas, labels: &ButtonLabels<'_>) -> Result<()> {
        canvas.set_draw_color(palette::BUTTON);
        canvas.fill_rect(self.bounds).map_err(Error::Draw)?;

        let label = labels.for_state(self.state);
        let x = self.bounds.x() + (self.bounds.width() as i32 - label.width() as i32) / 2;
        let y = self.bounds.y() + (self.bounds.height() as i32 - label.height() as i32) / 2;
        label.render_at(canvas, x, y)
    }
}

/// Four buttons tiling the screen in quadrants
pub fn quadrant_buttons(width: u32, height: u32) -> [Button; 4] {
    let (w2, h2) = (width / 2, height / 2);
    let (x2, y2) = (w2 as i32, h2 as i32);
    [
        Button::new(Rect::new(0, 0, w2, h2)),
        Button::new(Rect::new(x2, 0, w2, h2)),
        Button::new(Rect::new(0, y2, w2, h2)),
        Button::new(Rect::new(x2, y2, w2, h2)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_out() {
        let button = Button::new(Rect::new(0, 0, 100, 100));
        assert_eq!(button.state(), MouseEventType::Out);
    }

    #[test]
    fn test_inside_takes_event_kind() {
        let mut button = Button::new(Rect::new(10, 10, 100, 50));

        button.handle_pointer(MouseEventType::Motion, 20, 20);
        assert_eq!(button.state(), MouseEventType::Motion);

        button.handle_pointer(MouseEventType::Down, 20, 20);
        assert_eq!(button.state(), MouseEventType::Down);

        button.handle_pointer(MouseEventType::Up, 10, 10);
        assert_eq!(button.state(), MouseEventType::Up);
    }

    #[test]
    fn test_outside_resets_to_out() {
        let mut button = Button::new(Rect::new(10, 10, 100, 50));
        button.handle_pointer(MouseEventType::Down, 20, 20);

        button.handle_pointer(MouseEventType::Motion, 200, 20);
        assert_eq!(button.state(), MouseEventType::Out);

        // Right edge is exclusive
        button.handle_pointer(MouseEventType::Motion, 110, 20);
        assert_eq!(button.state(), MouseEventType::Out);
    }

    #[test]
    fn test_non_mouse_events_ignored() {
        let mut button = Button::new(Rect::new(0, 0, 100, 100));
        button.handle_pointer(MouseEventType::Down, 5, 5);
        button.handle_event(&Event::Quit { timestamp: 0 });
        assert_eq!(button.state(), MouseEventType::Down);
        assert_eq!(pointer_event(&Event::Quit { timestamp: 0 }), None);
    }

    #[test]
    fn test_quadrants_tile_the_screen() {
        let buttons = quadrant_buttons(1280, 960);
        assert_eq!(buttons[0].bounds(), Rect::new(0, 0, 640, 480));
        assert_eq!(buttons[3].bounds(), Rect::new(640, 480, 640, 480));

        let mut hits = 0;
        for mut b in buttons {
            b.handle_pointer(MouseEventType::Motion, 700, 100);
            if b.state() == MouseEventType::Motion {
                hits += 1;
            }
        }
        assert_eq!(hits, 1);
    }
}
