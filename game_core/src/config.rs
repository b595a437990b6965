use crate::{GameError, Params, Vector};

/// Paddle hit behaviour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Ruleset {
    /// Bounce back with a random vertical kick and a 5% speed-up
    #[default]
    Classic,
    /// Bounce back by mirroring the horizontal velocity only
    Simple,
}

/// Game configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub field_width: f32,
    pub field_height: f32,
    pub ruleset: Ruleset,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            field_width: Params::FIELD_WIDTH,
            field_height: Params::FIELD_HEIGHT,
            ruleset: Ruleset::default(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration for a drawing surface of the given size
    pub fn for_field(width: f32, height: f32) -> Self {
        Self {
            field_width: width,
            field_height: height,
            ..Self::default()
        }
    }

    pub fn with_ruleset(mut self, ruleset: Ruleset) -> Self {
        self.ruleset = ruleset;
        self
    }

    pub fn validate(&self) -> Result<(), GameError> {
        let valid = |side: f32| side.is_finite() && side > 0.0;
        if valid(self.field_width) && valid(self.field_height) {
            Ok(())
        } else {
            Err(GameError::InvalidField {
                width: self.field_width,
                height: self.field_height,
            })
        }
    }

    /// Center of the field, where the ball rests between points
    pub fn center(&self) -> Vector {
        Vector::new(self.field_width / 2.0, self.field_height / 2.0)
    }

    /// Get X position for paddle based on player index
    pub fn paddle_x(&self, index: usize) -> f32 {
        if index == 0 {
            Params::PADDLE_INSET // Left paddle
        } else {
            self.field_width - Params::PADDLE_INSET // Right paddle
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::new();
        assert_eq!(config.field_width, 800.0);
        assert_eq!(config.field_height, 600.0);
        assert_eq!(config.ruleset, Ruleset::Classic, "Classic rules by default");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_paddle_x() {
        let config = Config::new();
        assert_eq!(config.paddle_x(0), 40.0, "Left paddle X position");
        assert_eq!(config.paddle_x(1), 760.0, "Right paddle X position");
    }

    #[test]
    fn test_config_center() {
        let config = Config::for_field(640.0, 480.0);
        assert_eq!(config.center(), Vector::new(320.0, 240.0));
    }

    #[test]
    fn test_with_ruleset() {
        let config = Config::new().with_ruleset(Ruleset::Simple);
        assert_eq!(config.ruleset, Ruleset::Simple);
        assert_eq!(config.field_width, Params::FIELD_WIDTH);
    }

    #[test]
    fn test_validate_rejects_bad_fields() {
        for (w, h) in [(0.0, 600.0), (800.0, -1.0), (f32::NAN, 600.0), (800.0, f32::INFINITY)] {
            let err = Config::for_field(w, h).validate();
            assert!(
                matches!(err, Err(GameError::InvalidField { .. })),
                "Field {}x{} should be rejected",
                w,
                h
            );
        }
    }
}
