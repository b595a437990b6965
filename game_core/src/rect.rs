use crate::Vector;

/// Axis-aligned box described by its center and size
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub pos: Vector,  // Center
    pub size: Vector, // Width, height
}

impl Rect {
    /// Box of the given size centered on the origin
    pub fn new(w: f32, h: f32) -> Self {
        Self {
            pos: Vector::ZERO,
            size: Vector::new(w, h),
        }
    }

    pub fn left(&self) -> f32 {
        self.pos.x - self.size.x / 2.0
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x / 2.0
    }

    pub fn top(&self) -> f32 {
        self.pos.y - self.size.y / 2.0
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y / 2.0
    }

    /// Strict overlap on both axes. Boxes that only touch do not overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}
