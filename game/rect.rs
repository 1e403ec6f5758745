/// An axis-aligned rectangle anchored at its top-left corner.
#[derive(Clone,Copy, Debug, PartialEq)]
pub struct Rect {
    pub pos: [f32;2],
    pub size: [f32;2],
}

impl Rect {
    pub fn square(pos: [f32;2],  side: f32) -> Rect {
        Rect { pos,  size: [side, side] }
    }

    /// True if the two rectangles overlap with a positive area.
    /// Rectangles that only touch along an edge or corner don't count.
    pub fn intersects(&self,  other: &Rect) -> bool {
        self.pos[0] < other.pos[0]+other.size[0]
            && other.pos[0] < self.pos[0]+self.size[0]
            && self.pos[1] < other.pos[1]+other.size[1]
            && other.pos[1] < self.pos[1]+self.size[1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlapping_corners() {
        let a = Rect::square([0.0, 0.0], 40.0);
        let b = Rect::square([30.0, 30.0], 100.0);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn containment_is_intersection() {
        let outer = Rect::square([0.0, 0.0], 100.0);
        let inner = Rect::square([30.0, 30.0], 10.0);
        assert!(outer.intersects(&inner));
        assert!(inner.intersects(&outer));
    }

    #[test]
    fn disjoint() {
        let a = Rect::square([0.0, 0.0], 40.0);
        assert!(!a.intersects(&Rect::square([41.0, 0.0], 100.0)));
        assert!(!a.intersects(&Rect::square([0.0, 40.5], 100.0)));
        // overlap on one axis only is not enough
        assert!(!a.intersects(&Rect::square([10.0, 300.0], 100.0)));
    }

    // The documented boundary choice: a zero-area overlap is a miss,
    // so sliding along a surface never reads as a collision.
    #[test]
    fn touching_edges_do_not_intersect() {
        let a = Rect::square([0.0, 0.0], 40.0);
        let right = Rect::square([40.0, 0.0], 100.0);
        let below = Rect::square([0.0, 40.0], 100.0);
        let corner = Rect::square([40.0, 40.0], 100.0);
        assert!(!a.intersects(&right));
        assert!(!a.intersects(&below));
        assert!(!a.intersects(&corner));
    }
}
