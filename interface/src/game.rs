pub type Color = [f32;4];

/// Parse a hex string of 6 or 8 bytes into a color.
/// Format is rrggbbaa, where the aa is optional.
#[track_caller]
pub fn hex(color: &str) -> Color {
    let a = match color.len() {
        8 => u8::from_str_radix(&color[6..], 16).unwrap(),
        6 => 255,
        _ => panic!("color string must be 6 or 8 characters")
    };
    let r = u8::from_str_radix(&color[..2], 16).unwrap();
    let g = u8::from_str_radix(&color[2..4], 16).unwrap();
    let b = u8::from_str_radix(&color[4..6], 16).unwrap();
    [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, a as f32 / 255.0]
}

/// The keys the game consumes.
/// The engine drops everything else before dispatching.
#[derive(Debug, Clone,Copy, PartialEq,Eq)]
pub enum Key {
    W,
    A,
    S,
    D,
}

/// One queued draw command, in window pixel coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Rectangle { color: Color,  area: [f32;4] },
    Circle { color: Color,  center: [f32;2],  radius: f32 },
}

/// An ordered queue of shapes.
/// The game fills it during `render()` and the engine drains it to the
/// screen afterwards. Push order is draw order.
#[derive(Default)]
pub struct Graphics {
    shapes: Vec<Shape>,
}

impl Graphics {
    /// Queue a filled rectangle. `area` is [x, y, width, height].
    pub fn rectangle(&mut self,  color: Color,  area: [f32;4]) {
        self.shapes.push(Shape::Rectangle { color, area });
    }

    /// Queue a filled circle around `center`.
    pub fn circle(&mut self,  color: Color,  center: [f32;2],  radius: f32) {
        self.shapes.push(Shape::Circle { color, center, radius });
    }

    /// Empty the queue in push order.
    pub fn drain(&mut self) -> std::vec::Drain<'_, Shape> {
        self.shapes.drain(..)
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }
}

pub trait Game {
    /// Queue everything that should be on screen this frame.
    fn render(&mut self,  gfx: &mut Graphics);
    /// Advance one fixed tick.
    /// The engine calls this at a constant rate, so speeds are per tick.
    fn update(&mut self);
    fn key_press(&mut self,  key: Key);
    fn key_release(&mut self,  key: Key);
}
