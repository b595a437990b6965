use crate::{Params, Rect, Vector};

/// Which end of the field a player defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,  // Human, index 0
    Right, // Follower, index 1
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::Left, Side::Right];

    pub fn index(self) -> usize {
        match self {
            Side::Left => 0,
            Side::Right => 1,
        }
    }

    pub fn opponent(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub rect: Rect,
    pub velocity: Vector,
}

impl Ball {
    pub fn new() -> Self {
        Self {
            rect: Rect::new(Params::BALL_SIZE, Params::BALL_SIZE),
            velocity: Vector::ZERO,
        }
    }

    /// Ball between points, waiting for a serve
    pub fn is_at_rest(&self) -> bool {
        self.velocity.x == 0.0 && self.velocity.y == 0.0
    }

    /// Put the ball on `center` and stop it
    pub fn reset(&mut self, center: Vector) {
        self.rect.pos = center;
        self.velocity = Vector::ZERO;
    }
}

impl Default for Ball {
    fn default() -> Self {
        Self::new()
    }
}

/// Player component - a paddle and its score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Player {
    pub side: Side,
    pub rect: Rect,
    pub score: u32,
}

impl Player {
    pub fn new(side: Side) -> Self {
        Self {
            side,
            rect: Rect::new(Params::PADDLE_WIDTH, Params::PADDLE_HEIGHT),
            score: 0,
        }
    }
}
