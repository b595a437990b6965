use crate::{Ball, Config, GameRng, Length, Params};
use hecs::World;
use rand::Rng;

/// Put the ball back on the center spot at rest
pub fn reset_ball(world: &mut World, config: &Config) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.reset(config.center());
    }
}

/// Launch a resting ball in a random direction at serve speed.
///
/// Returns `false` when the ball is already in play.
pub fn serve_ball(world: &mut World, rng: &mut GameRng) -> bool {
    let mut served = false;

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if !ball.is_at_rest() {
            continue;
        }
        let sign = if rng.0.gen_bool(0.5) { 1.0 } else { -1.0 };
        ball.velocity.x = Params::SERVE_DRAW * sign;
        ball.velocity.y = rng.0.gen_range(-Params::SERVE_DRAW..Params::SERVE_DRAW);
        ball.velocity.set_len(Params::SERVE_SPEED);
        served = true;
        log::debug!("Serve with velocity {:?}", ball.velocity);
    }

    served
}
