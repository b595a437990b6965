use glam::Vec2;

/// 2D point or magnitude used for positions, sizes and velocities
pub type Vector = Vec2;

/// Length accessors for [`Vector`]
pub trait Length {
    /// Euclidean length
    fn len(&self) -> f32;

    /// Rescale to `value` keeping the direction.
    ///
    /// A zero-length vector has no direction and is left unchanged.
    fn set_len(&mut self, value: f32);
}

impl Length for Vec2 {
    fn len(&self) -> f32 {
        self.length()
    }

    fn set_len(&mut self, value: f32) {
        let current = self.length();
        if current == 0.0 {
            return;
        }
        *self *= value / current;
    }
}
