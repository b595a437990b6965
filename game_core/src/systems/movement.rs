use crate::{Ball, Player, Side};
use hecs::World;

/// Move ball based on velocity
pub fn move_ball(world: &mut World, dt: f32) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.rect.pos += ball.velocity * dt;
    }
}

/// Snap the right paddle onto the ball's height
pub fn follow_ball(world: &mut World) {
    let ball_y = world
        .query::<&Ball>()
        .iter()
        .next()
        .map(|(_e, ball)| ball.rect.pos.y);

    let Some(ball_y) = ball_y else {
        return; // No ball in world
    };

    for (_entity, player) in world.query_mut::<&mut Player>() {
        if player.side == Side::Right {
            player.rect.pos.y = ball_y;
        }
    }
}
