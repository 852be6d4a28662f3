//! Ball-paddle interaction: overlap test and zone deflection

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::ball::components::*;
use crate::events::{EventBus, GameEvent};
use crate::player::{Paddle, PlayerId};

/// Which third of the paddle the ball struck
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HitZone {
    Top,
    Middle,
    Bottom,
}

impl HitZone {
    /// Zone for a contact `offset` pixels below the paddle's top edge
    pub fn from_offset(offset: i32, paddle_height: i32) -> Self {
        if offset < paddle_height / 3 {
            HitZone::Top
        } else if offset > (2 * paddle_height) / 3 {
            HitZone::Bottom
        } else {
            HitZone::Middle
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            HitZone::Top => "T",
            HitZone::Middle => "M",
            HitZone::Bottom => "B",
        }
    }
}

/// Lives on a paddle entity; pushes the ball toward `side` on contact.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Collider {
    pub side: Heading,
}

impl Collider {
    /// Player one sits on the right and returns the ball leftward
    pub fn for_player(player: PlayerId) -> Self {
        let side = match player {
            PlayerId::One => Heading::Left,
            PlayerId::Two => Heading::Right,
        };
        Self { side }
    }

    /// Box overlap between paddle and ball.
    ///
    /// Only the paddle's top-left edges are padded by the ball radius, so the
    /// test is deliberately one-sided; this matches how the game has always
    /// played.
    pub fn overlaps(paddle: &Paddle, ball: &Ball) -> bool {
        !(paddle.x >= ball.x + ball.radius
            || paddle.y >= ball.y + ball.radius
            || ball.x >= paddle.x + paddle.width
            || ball.y >= paddle.y + paddle.height)
    }

    /// Deflect the ball if it touches `paddle`. Re-applies every tick while
    /// the overlap lasts; the result is the same each time.
    pub fn collide(&self, paddle: &Paddle, ball: &mut Ball) -> Option<HitZone> {
        if !Self::overlaps(paddle, ball) {
            return None;
        }

        let zone = HitZone::from_offset(ball.y - paddle.y, paddle.height);
        match zone {
            HitZone::Top => ball.vy = -1,
            HitZone::Bottom => ball.vy = 1,
            HitZone::Middle => {}
        }
        ball.vx = self.side.dx();
        Some(zone)
    }
}

/// Runs in FixedUpdate after paddle movement: each collider checks the ball,
/// player one first.
pub fn resolve_collisions(
    mut event_bus: ResMut<EventBus>,
    paddles: Query<(&Paddle, &Collider, &PlayerId)>,
    mut balls: Query<&mut Ball>,
) {
    let mut colliders: Vec<_> = paddles.iter().collect();
    colliders.sort_by_key(|(_, _, player)| **player);

    for mut ball in &mut balls {
        for (paddle, collider, player) in &colliders {
            if let Some(zone) = collider.collide(paddle, &mut ball) {
                event_bus.emit(GameEvent::PaddleHit {
                    player: **player,
                    zone,
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn right_paddle() -> Paddle {
        Paddle::new(1310, 425, 10, 30)
    }

    #[test]
    fn test_zone_boundaries() {
        assert_eq!(HitZone::from_offset(-4, 30), HitZone::Top);
        assert_eq!(HitZone::from_offset(9, 30), HitZone::Top);
        assert_eq!(HitZone::from_offset(10, 30), HitZone::Middle);
        assert_eq!(HitZone::from_offset(20, 30), HitZone::Middle);
        assert_eq!(HitZone::from_offset(21, 30), HitZone::Bottom);
    }

    #[test]
    fn test_top_third_deflects_up() {
        let collider = Collider::for_player(PlayerId::One);
        let mut ball = Ball::new(1312, 430, 5, 4);
        ball.vy = 1;
        assert_eq!(collider.collide(&right_paddle(), &mut ball), Some(HitZone::Top));
        assert_eq!(ball.vy, -1);
        assert_eq!(ball.vx, -1);
    }

    #[test]
    fn test_bottom_third_deflects_down() {
        let collider = Collider::for_player(PlayerId::One);
        let mut ball = Ball::new(1312, 450, 5, 4);
        ball.vy = -1;
        assert_eq!(collider.collide(&right_paddle(), &mut ball), Some(HitZone::Bottom));
        assert_eq!(ball.vy, 1);
        assert_eq!(ball.vx, -1);
    }

    #[test]
    fn test_middle_third_keeps_vy() {
        let collider = Collider::for_player(PlayerId::Two);
        let paddle = Paddle::new(130, 425, 10, 30);
        for vy in [-1, 1] {
            let mut ball = Ball::new(135, 440, 5, 4);
            ball.vx = -1;
            ball.vy = vy;
            assert_eq!(collider.collide(&paddle, &mut ball), Some(HitZone::Middle));
            assert_eq!(ball.vy, vy);
            assert_eq!(ball.vx, 1);
        }
    }

    #[test]
    fn test_miss_leaves_ball_untouched() {
        let collider = Collider::for_player(PlayerId::One);
        let mut ball = Ball::new(720, 450, 5, 4);
        let before = ball;
        assert_eq!(collider.collide(&right_paddle(), &mut ball), None);
        assert_eq!(ball, before);
    }

    #[test]
    fn test_overlap_is_one_sided() {
        let paddle = right_paddle();
        // Padded by the radius on the top-left edges
        assert!(Collider::overlaps(&paddle, &Ball::new(1306, 430, 5, 4)));
        assert!(!Collider::overlaps(&paddle, &Ball::new(1305, 430, 5, 4)));
        assert!(Collider::overlaps(&paddle, &Ball::new(1315, 421, 5, 4)));
        // Not padded on the bottom-right edges
        assert!(!Collider::overlaps(&paddle, &Ball::new(1320, 430, 5, 4)));
        assert!(!Collider::overlaps(&paddle, &Ball::new(1315, 455, 5, 4)));
    }

    #[test]
    fn test_repeated_contact_is_idempotent() {
        let collider = Collider::for_player(PlayerId::One);
        let mut ball = Ball::new(1312, 430, 5, 4);
        collider.collide(&right_paddle(), &mut ball);
        let once = ball;
        collider.collide(&right_paddle(), &mut ball);
        assert_eq!(ball, once);
    }
}
