use crate::{Ball, Config, Events, Player, Side};
use hecs::World;

/// Check if ball left the field through a goal line.
///
/// The player facing away from the ball's travel direction scores and the
/// ball goes back to the center at rest.
pub fn check_goal(world: &mut World, config: &Config, events: &mut Events) {
    let mut scorer = None;

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.rect.right() > config.field_width || ball.rect.left() < 0.0 {
            scorer = Some(if ball.velocity.x < 0.0 {
                Side::Right
            } else {
                Side::Left
            });
            ball.reset(config.center());
        }
    }

    let Some(scorer) = scorer else {
        return;
    };

    for (_entity, player) in world.query_mut::<&mut Player>() {
        if player.side == scorer {
            player.score += 1;
            log::debug!("{:?} player scores, now at {}", scorer, player.score);
        }
    }

    match scorer {
        Side::Left => events.left_scored = true,
        Side::Right => events.right_scored = true,
    }
}
