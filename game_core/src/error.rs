/// Errors raised by the game API
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("Invalid field size {width}x{height}, both sides must be finite and positive")]
    InvalidField { width: f32, height: f32 },

    #[error("Game entity lookup failed, reason='{0}'")]
    Entity(#[from] hecs::ComponentError),
}
