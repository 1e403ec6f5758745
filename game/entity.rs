use interface::game::*;

use crate::game::rect::Rect;

pub const PLAYER_RADIUS: f32 = 20.0;
pub const OBSTACLE_RADIUS: f32 = 50.0;
const MOVE_SPEED: f32 = 2.0; // pixels per tick
const SINK_SPEED: f32 = 1.0; // see Player::update
const PLAYER_COLOR: &str = "00ff00";
const OBSTACLE_COLOR: &str = "ff0000";

/// Anything taking part in the per-tick event/update/draw cycle.
///
/// An entity's position is the top-left corner of its bounding square
/// (side two radii); the circle is drawn inscribed in it. Rendering and
/// collision share that anchor so they can't disagree.
pub trait Entity {
    /// React to one key transition. Flags only, no movement.
    fn handle_key(&mut self,  _key: Key,  _pressed: bool) {}
    /// Advance one tick. `blockers` holds the bounding squares of
    /// every blocking entity in the world, in insertion order.
    fn update(&mut self,  _blockers: &[Rect]) {}
    /// Queue this entity's current state for drawing.
    fn draw(&self,  gfx: &mut Graphics);
    /// The square other entities can't move into, if this one blocks.
    fn blocker(&self) -> Option<Rect> { None }
}

fn draw_circle(gfx: &mut Graphics,  color: &str,  pos: [f32;2],  radius: f32) {
    gfx.circle(hex(color), [pos[0]+radius, pos[1]+radius], radius);
}

/// A static round obstacle. Immutable after construction:
/// it ignores input and ticks, and only reports its bounds and draws.
pub struct Obstacle {
    pos: [f32;2],
}

impl Obstacle {
    pub fn new(x: f32,  y: f32) -> Obstacle {
        Obstacle { pos: [x, y] }
    }
}

impl Entity for Obstacle {
    fn draw(&self,  gfx: &mut Graphics) {
        draw_circle(gfx, OBSTACLE_COLOR, self.pos, OBSTACLE_RADIUS);
    }
    fn blocker(&self) -> Option<Rect> {
        Some(Rect::square(self.pos, 2.0*OBSTACLE_RADIUS))
    }
}

#[derive(Clone,Copy, Default)]
struct Keys {
    up: bool,
    down: bool,
    left: bool,
    right: bool,
}

/// The keyboard-steered circle.
pub struct Player {
    pos: [f32;2],
    keys: Keys,
}

impl Player {
    pub fn new() -> Player {
        Player { pos: [0.0, 0.0],  keys: Keys::default() }
    }

    #[cfg(test)]
    pub(crate) fn at(pos: [f32;2]) -> Player {
        Player { pos,  keys: Keys::default() }
    }
}

impl Entity for Player {
    fn handle_key(&mut self,  key: Key,  pressed: bool) {
        match key {
            Key::D => self.keys.right = pressed,
            Key::A => self.keys.left = pressed,
            Key::W => self.keys.up = pressed,
            Key::S => self.keys.down = pressed,
        }
    }

    fn update(&mut self,  blockers: &[Rect]) {
        let old = self.pos;
        let dx = MOVE_SPEED * (self.keys.right as i8 - self.keys.left as i8) as f32;
        // a constant downward drift on top of the input velocity:
        // the player sinks when idle and climbs at half speed
        let dy = MOVE_SPEED * (self.keys.down as i8 - self.keys.up as i8) as f32
                + SINK_SPEED;
        self.pos = [old[0]+dx, old[1]+dy];

        let bounds = Rect::square(self.pos, 2.0*PLAYER_RADIUS);
        if blockers.iter().any(|blocker| bounds.intersects(blocker) ) {
            // the whole move is taken back, there is no sliding along
            // the surface on the free axis
            self.pos = old;
        }
    }

    fn draw(&self,  gfx: &mut Graphics) {
        draw_circle(gfx, PLAYER_COLOR, self.pos, PLAYER_RADIUS);
    }
}
