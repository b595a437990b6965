use crate::{Ball, Config, Events, GameRng, Length, Params, Player, Ruleset};
use hecs::World;
use rand::Rng;

/// Bounce the ball off the top and bottom walls
pub fn bounce_walls(world: &mut World, config: &Config, events: &mut Events) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.rect.top() < 0.0 || ball.rect.bottom() > config.field_height {
            ball.velocity.y = -ball.velocity.y;
            events.ball_hit_wall = true;
            log::trace!("Wall bounce at y={}", ball.rect.pos.y);
        }
    }
}

/// Resolve a paddle hit. Returns whether the paddle and ball overlapped.
pub fn collide(player: &Player, ball: &mut Ball, ruleset: Ruleset, rng: &mut GameRng) -> bool {
    if !player.rect.overlaps(&ball.rect) {
        return false;
    }

    match ruleset {
        Ruleset::Classic => {
            let speed = ball.velocity.len();
            ball.velocity.x = -ball.velocity.x;
            ball.velocity.y += Params::HIT_JITTER * (rng.0.gen::<f32>() - 0.5);
            ball.velocity.set_len(speed * Params::HIT_SPEEDUP);
        }
        Ruleset::Simple => {
            ball.velocity.x = -ball.velocity.x;
        }
    }

    true
}

/// Check the ball against both paddles, left first
pub fn check_paddle_hits(
    world: &mut World,
    config: &Config,
    rng: &mut GameRng,
    events: &mut Events,
) {
    let mut players: Vec<Player> = world
        .query::<&Player>()
        .iter()
        .map(|(_e, player)| *player)
        .collect();
    players.sort_by_key(|player| player.side.index());

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        for player in &players {
            if collide(player, ball, config.ruleset, rng) {
                events.ball_hit_paddle = true;
                log::trace!(
                    "{:?} paddle hit, ball velocity now {:?}",
                    player.side,
                    ball.velocity
                );
            }
        }
    }
}
