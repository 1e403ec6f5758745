use interface::game::*;

use crate::game::entity::{Entity, Obstacle, Player};
use crate::game::rect::Rect;

pub const NAME: &str = "bumper";
pub const INITIAL_SIZE: [f32;2] = [600.0, 800.0];

const OBSTACLE_SPOTS: [[f32;2];2] = [[200.0, 200.0], [400.0, 500.0]];

/// The world: the ordered list of entities, created once at startup
/// and owned exclusively by this struct for the rest of the process.
///
/// Insertion order is dispatch order for events, updates and drawing,
/// and nothing reorders the list.
pub struct Bumper {
    entities: Vec<Box<dyn Entity>>,
}

impl Bumper {
    pub fn new() -> Self {
        let mut entities: Vec<Box<dyn Entity>> = vec![Box::new(Player::new())];
        for [x, y] in OBSTACLE_SPOTS {
            entities.push(Box::new(Obstacle::new(x, y)));
        }
        Bumper { entities }
    }

    /// Snapshot of every blocking bounding square.
    /// The blockers never move, so taking it once per tick is exact.
    fn blockers(&self) -> Vec<Rect> {
        self.entities.iter().filter_map(|entity| entity.blocker() ).collect()
    }
}

impl Game for Bumper {
    fn render(&mut self,  gfx: &mut Graphics) {
        for entity in &self.entities {
            entity.draw(gfx);
        }
    }

    fn update(&mut self) {
        let blockers = self.blockers();
        for entity in &mut self.entities {
            entity.update(&blockers);
        }
    }

    fn key_press(&mut self,  key: Key) {
        for entity in &mut self.entities {
            entity.handle_key(key, true);
        }
    }

    fn key_release(&mut self,  key: Key) {
        for entity in &mut self.entities {
            entity.handle_key(key, false);
        }
    }
}
