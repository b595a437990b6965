//! Immediate-mode drawing of the scene onto a host surface

use crate::font::{layout_score, Glyph};
use crate::{Ball, Params, Player, Rect};
use hecs::World;

/// Solid fill color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color { r: 0, g: 0, b: 0 };
    pub const WHITE: Color = Color {
        r: 255,
        g: 255,
        b: 255,
    };

    /// CSS hex notation, e.g. `#ffffff`
    pub fn to_css(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Drawing collaborator provided by the host
pub trait Surface {
    /// Width and height of the drawable area
    fn size(&self) -> (f32, f32);

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color);

    /// Blit a score digit with its top-left corner at (x, y)
    fn draw_glyph(&mut self, glyph: Glyph, x: f32, y: f32, color: Color) {
        let px = Params::CHAR_PIXEL;
        for (col, row) in glyph.cells() {
            self.fill_rect(x + col as f32 * px, y + row as f32 * px, px, px, color);
        }
    }
}

fn draw_rect<S: Surface + ?Sized>(surface: &mut S, rect: &Rect) {
    surface.fill_rect(rect.left(), rect.top(), rect.size.x, rect.size.y, Color::WHITE);
}

/// Redraw the full scene: background, ball, paddles, scores
pub fn draw<S: Surface + ?Sized>(world: &World, surface: &mut S) {
    let (width, height) = surface.size();
    surface.fill_rect(0.0, 0.0, width, height, Color::BLACK);

    for (_e, ball) in world.query::<&Ball>().iter() {
        draw_rect(surface, &ball.rect);
    }

    let mut players: Vec<Player> = world
        .query::<&Player>()
        .iter()
        .map(|(_e, player)| *player)
        .collect();
    players.sort_by_key(|player| player.side.index());

    for player in &players {
        draw_rect(surface, &player.rect);
    }

    for player in &players {
        let layout = layout_score(player.score, player.side.index(), width, Params::CHAR_PIXEL);
        for (glyph, x) in layout {
            surface.draw_glyph(glyph, x, Params::SCORE_TOP, Color::WHITE);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Side, Vector};

    #[derive(Default)]
    struct Recorder {
        rects: Vec<(f32, f32, f32, f32, Color)>,
    }

    impl Surface for Recorder {
        fn size(&self) -> (f32, f32) {
            (800.0, 600.0)
        }

        fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
            self.rects.push((x, y, w, h, color));
        }
    }

    #[test]
    fn test_color_css() {
        assert_eq!(Color::BLACK.to_css(), "#000000");
        assert_eq!(Color::WHITE.to_css(), "#ffffff");
        assert_eq!(Color { r: 16, g: 1, b: 171 }.to_css(), "#1001ab");
    }

    #[test]
    fn test_default_glyph_fills_lit_cells() {
        let mut surface = Recorder::default();
        surface.draw_glyph(Glyph::digit(1).unwrap(), 100.0, 20.0, Color::WHITE);

        assert_eq!(surface.rects.len(), 5);
        assert_eq!(surface.rects[0], (110.0, 20.0, 10.0, 10.0, Color::WHITE));
        assert_eq!(surface.rects[4], (110.0, 60.0, 10.0, 10.0, Color::WHITE));
    }

    #[test]
    fn test_draw_order() {
        let mut world = World::new();
        let mut right = Player::new(Side::Right);
        right.rect.pos = Vector::new(760.0, 300.0);
        let mut left = Player::new(Side::Left);
        left.rect.pos = Vector::new(40.0, 250.0);
        world.spawn((right,));
        world.spawn((left,));
        let mut ball = Ball::new();
        ball.rect.pos = Vector::new(400.0, 300.0);
        world.spawn((ball,));

        let mut surface = Recorder::default();
        draw(&world, &mut surface);

        assert_eq!(surface.rects[0], (0.0, 0.0, 800.0, 600.0, Color::BLACK));
        assert_eq!(surface.rects[1], (395.0, 295.0, 10.0, 10.0, Color::WHITE));
        assert_eq!(surface.rects[2], (30.0, 200.0, 20.0, 100.0, Color::WHITE));
        assert_eq!(surface.rects[3], (750.0, 250.0, 20.0, 100.0, Color::WHITE));
        // Two zeros, 12 lit cells each
        assert_eq!(surface.rects.len(), 4 + 24);
    }
}
