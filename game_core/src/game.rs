use crate::input::pointer_to_field_y;
use crate::render::{self, Surface};
use crate::systems::*;
use crate::{Ball, Config, Events, FrameClock, GameError, GameRng, Player, Side, Vector};
use hecs::{Entity, World};

/// A running Pong match: one ball, a human paddle on the left and a
/// follower paddle on the right.
pub struct Game {
    world: World,
    ball: Entity,
    players: [Entity; 2],
    config: Config,
    rng: GameRng,
    events: Events,
    clock: FrameClock,
}

impl Game {
    pub fn new(config: Config, seed: u64) -> Result<Self, GameError> {
        config.validate()?;

        let mut world = World::new();
        let players = Side::BOTH.map(|side| {
            let mut player = Player::new(side);
            player.rect.pos = Vector::new(config.paddle_x(side.index()), config.field_height / 2.0);
            world.spawn((player,))
        });
        let ball = world.spawn((Ball::new(),));

        log::info!(
            "New game on a {}x{} field with {:?} rules",
            config.field_width,
            config.field_height,
            config.ruleset
        );

        let mut game = Self {
            world,
            ball,
            players,
            config,
            rng: GameRng::new(seed),
            events: Events::new(),
            clock: FrameClock::new(),
        };
        game.reset();
        Ok(game)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    /// Events recorded by the last update
    pub fn events(&self) -> &Events {
        &self.events
    }

    pub fn ball(&self) -> Result<Ball, GameError> {
        Ok(*self.world.get::<&Ball>(self.ball)?)
    }

    pub fn player(&self, side: Side) -> Result<Player, GameError> {
        Ok(*self.world.get::<&Player>(self.players[side.index()])?)
    }

    /// (left, right) scores
    pub fn scores(&self) -> Result<(u32, u32), GameError> {
        Ok((
            self.player(Side::Left)?.score,
            self.player(Side::Right)?.score,
        ))
    }

    /// Place the ball directly, e.g. to set up a rally
    pub fn set_ball(&mut self, pos: Vector, velocity: Vector) -> Result<(), GameError> {
        let mut ball = self.world.get::<&mut Ball>(self.ball)?;
        ball.rect.pos = pos;
        ball.velocity = velocity;
        Ok(())
    }

    pub fn set_player_y(&mut self, side: Side, y: f32) -> Result<(), GameError> {
        self.world
            .get::<&mut Player>(self.players[side.index()])?
            .rect
            .pos
            .y = y;
        Ok(())
    }

    /// Advance the simulation by `dt` seconds
    pub fn update(&mut self, dt: f32) -> &Events {
        self.events.clear();

        move_ball(&mut self.world, dt);
        check_goal(&mut self.world, &self.config, &mut self.events);
        bounce_walls(&mut self.world, &self.config, &mut self.events);
        follow_ball(&mut self.world);
        check_paddle_hits(&mut self.world, &self.config, &mut self.rng, &mut self.events);

        &self.events
    }

    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        render::draw(&self.world, surface);
    }

    /// Update then redraw
    pub fn frame<S: Surface + ?Sized>(&mut self, dt: f32, surface: &mut S) {
        self.update(dt);
        self.draw(surface);
    }

    /// Host animation callback. The first frame only records its timestamp;
    /// every later one runs a full frame. Returns whether a frame ran.
    pub fn on_animation_frame<S: Surface + ?Sized>(&mut self, now_ms: f64, surface: &mut S) -> bool {
        match self.clock.tick(now_ms) {
            Some(dt) => {
                self.frame(dt, surface);
                true
            }
            None => false,
        }
    }

    /// Ball back to the center spot, at rest
    pub fn reset(&mut self) {
        reset_ball(&mut self.world, &self.config);
    }

    /// Serve if the ball is at rest. Returns whether a serve happened.
    pub fn start(&mut self) -> bool {
        serve_ball(&mut self.world, &mut self.rng)
    }

    /// Move the human paddle to the pointer
    pub fn on_pointer_move(&mut self, offset_y: f32, element_height: f32) -> Result<(), GameError> {
        let y = pointer_to_field_y(offset_y, element_height, self.config.field_height);
        self.set_player_y(Side::Left, y)
    }

    pub fn on_click(&mut self) -> bool {
        self.start()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Ruleset;

    fn new_game() -> Game {
        Game::new(Config::new(), 12345).unwrap()
    }

    #[test]
    fn test_initial_layout() {
        let game = new_game();
        let ball = game.ball().unwrap();
        assert_eq!(ball.rect.pos, Vector::new(400.0, 300.0));
        assert!(ball.is_at_rest());

        let left = game.player(Side::Left).unwrap();
        let right = game.player(Side::Right).unwrap();
        assert_eq!(left.rect.pos, Vector::new(40.0, 300.0));
        assert_eq!(right.rect.pos, Vector::new(760.0, 300.0));
        assert_eq!(game.scores().unwrap(), (0, 0));
    }

    #[test]
    fn test_invalid_field_is_rejected() {
        let result = Game::new(Config::for_field(0.0, 600.0), 1);
        assert!(matches!(result, Err(GameError::InvalidField { .. })));
    }

    #[test]
    fn test_update_moves_ball_without_scoring() {
        let mut game = new_game();
        game.set_ball(Vector::new(400.0, 300.0), Vector::new(300.0, 0.0))
            .unwrap();

        game.update(1.0);

        let ball = game.ball().unwrap();
        assert_eq!(ball.rect.pos, Vector::new(700.0, 300.0));
        assert_eq!(game.scores().unwrap(), (0, 0));
    }

    #[test]
    fn test_ball_exiting_right_scores_for_left() {
        let mut game = new_game();
        game.set_ball(Vector::new(790.0, 200.0), Vector::new(300.0, 0.0))
            .unwrap();

        let events = game.update(0.1).clone();

        assert!(events.left_scored);
        assert_eq!(game.scores().unwrap(), (1, 0));
        let ball = game.ball().unwrap();
        assert_eq!(ball.rect.pos, Vector::new(400.0, 300.0));
        assert!(ball.is_at_rest());
    }

    #[test]
    fn test_wall_bounce_keeps_x() {
        let mut game = new_game();
        game.set_ball(Vector::new(400.0, 10.0), Vector::new(100.0, -100.0))
            .unwrap();

        game.update(0.1);

        let ball = game.ball().unwrap();
        assert_eq!(ball.velocity, Vector::new(100.0, 100.0));
        assert_eq!(ball.rect.pos, Vector::new(410.0, 0.0));
        assert!(game.events().ball_hit_wall);
    }

    #[test]
    fn test_follower_tracks_ball() {
        let mut game = new_game();
        game.set_ball(Vector::new(400.0, 150.0), Vector::new(0.0, 100.0))
            .unwrap();

        game.update(0.5);

        assert_eq!(game.player(Side::Right).unwrap().rect.pos.y, 200.0);
        assert_eq!(game.player(Side::Left).unwrap().rect.pos.y, 300.0);
    }

    #[test]
    fn test_follower_returns_ball() {
        let mut game = Game::new(Config::new().with_ruleset(Ruleset::Simple), 1).unwrap();
        game.set_ball(Vector::new(745.0, 300.0), Vector::new(100.0, 0.0))
            .unwrap();

        game.update(0.05);

        let ball = game.ball().unwrap();
        assert_eq!(ball.velocity, Vector::new(-100.0, 0.0));
        assert!(game.events().ball_hit_paddle);
    }

    #[test]
    fn test_start_only_from_rest() {
        let mut game = new_game();
        assert!(game.start());
        let served = game.ball().unwrap().velocity;
        assert!((served.length() - 200.0).abs() < 1e-2);

        assert!(!game.start(), "Second serve is a no-op");
        assert_eq!(game.ball().unwrap().velocity, served);
    }

    #[test]
    fn test_reset_stops_ball() {
        let mut game = new_game();
        game.start();
        game.update(0.2);

        game.reset();

        let ball = game.ball().unwrap();
        assert_eq!(ball.rect.pos, Vector::new(400.0, 300.0));
        assert!(ball.is_at_rest());
    }

    #[test]
    fn test_pointer_move_drives_left_paddle() {
        let mut game = new_game();
        game.on_pointer_move(100.0, 300.0).unwrap();
        assert_eq!(game.player(Side::Left).unwrap().rect.pos.y, 200.0);
        assert_eq!(game.player(Side::Left).unwrap().rect.pos.x, 40.0);
    }

    #[test]
    fn test_click_serves() {
        let mut game = new_game();
        assert!(game.on_click());
        assert!(!game.ball().unwrap().is_at_rest());
    }
}
