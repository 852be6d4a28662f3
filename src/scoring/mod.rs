//! Scoring module - score counters, the match referee and check_scoring system

use bevy::prelude::*;

use crate::ball::{Ball, Heading};
use crate::constants::*;
use crate::events::{EventBus, GameEvent};
use crate::player::PlayerId;
use crate::tuning::{PongTuning, ScreenBounds};

/// One player's score counter and where it is displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreUi {
    pub value: u32,
    /// Court side of the owning player. The score is drawn on the opposite
    /// half: side +1 lands left of the center line.
    pub side: i32,
}

impl ScoreUi {
    pub fn new(side: i32) -> Self {
        Self { value: 0, side }
    }

    pub fn increment(&mut self) {
        self.value += 1;
    }

    pub fn reset(&mut self) {
        self.value = 0;
    }

    /// Text center in screen pixels
    pub fn position(&self) -> (i32, i32) {
        (SCORE_ANCHOR.0 - self.side * SCORE_SIDE_OFFSET, SCORE_ANCHOR.1)
    }

    pub fn label(&self) -> String {
        self.value.to_string()
    }
}

/// Score resource holding both players' counters
#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct Scoreboard {
    pub one: ScoreUi,
    pub two: ScoreUi,
}

impl Default for Scoreboard {
    fn default() -> Self {
        Self {
            one: ScoreUi::new(PlayerId::One.court_side()),
            two: ScoreUi::new(PlayerId::Two.court_side()),
        }
    }
}

impl Scoreboard {
    pub fn get(&self, player: PlayerId) -> &ScoreUi {
        match player {
            PlayerId::One => &self.one,
            PlayerId::Two => &self.two,
        }
    }

    pub fn get_mut(&mut self, player: PlayerId) -> &mut ScoreUi {
        match player {
            PlayerId::One => &mut self.one,
            PlayerId::Two => &mut self.two,
        }
    }

    /// Back to 0-0 for a rematch
    pub fn reset(&mut self) {
        self.one.reset();
        self.two.reset();
    }
}

/// Where the current match stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchState {
    #[default]
    Playing,
    Finished { winner: PlayerId },
}

/// Match referee: credits points when the ball leaves the court and ends
/// the match at the winning score. It never stops the app itself; the
/// driver reads `state` and decides what to show.
#[derive(Resource, Debug, Clone)]
pub struct Referee {
    pub state: MatchState,
    pub win_score: u32,
    /// Ticks refereed in the current match
    pub ticks: u64,
    /// 1-based count of matches played this session
    pub match_number: u32,
}

impl Default for Referee {
    fn default() -> Self {
        Self::new(WIN_SCORE)
    }
}

impl Referee {
    pub fn new(win_score: u32) -> Self {
        Self {
            state: MatchState::Playing,
            win_score,
            ticks: 0,
            match_number: 1,
        }
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.state, MatchState::Finished { .. })
    }

    pub fn winner(&self) -> Option<PlayerId> {
        match self.state {
            MatchState::Finished { winner } => Some(winner),
            MatchState::Playing => None,
        }
    }

    /// Called once per tick. Returns the player credited this tick, if any.
    ///
    /// A ball past the left edge is a point for player two, past the right
    /// edge a point for player one; either way the ball is recentered and
    /// sent toward the player who just conceded. Finished matches accept no
    /// further points.
    pub fn score_update(
        &mut self,
        ball: &mut Ball,
        scoreboard: &mut Scoreboard,
        bounds: ScreenBounds,
    ) -> Option<PlayerId> {
        if self.is_finished() {
            return None;
        }
        self.ticks += 1;

        let scorer = if ball.exited_left() {
            ball.reset(Heading::Right, bounds);
            Some(PlayerId::Two)
        } else if ball.exited_right(bounds) {
            ball.reset(Heading::Left, bounds);
            Some(PlayerId::One)
        } else {
            None
        };

        if let Some(player) = scorer {
            scoreboard.get_mut(player).increment();
        }

        if let Some(winner) = PlayerId::ALL
            .into_iter()
            .find(|player| scoreboard.get(*player).value >= self.win_score)
        {
            self.state = MatchState::Finished { winner };
        }

        scorer
    }

    /// Reset state for the next match
    pub fn start_next_match(&mut self) {
        self.state = MatchState::Playing;
        self.ticks = 0;
        self.match_number += 1;
    }
}

/// Check if the ball left the court and award points.
/// Emits Goal and MatchEnd events to EventBus.
///
/// Referee and scoreboard are only flagged changed on a goal, so the HUD and
/// banner skip the ticks where nothing happened.
pub fn check_scoring(
    tuning: Res<PongTuning>,
    mut referee: ResMut<Referee>,
    mut scoreboard: ResMut<Scoreboard>,
    mut event_bus: ResMut<EventBus>,
    mut balls: Query<&mut Ball>,
) {
    let Ok(mut ball) = balls.single_mut() else {
        return;
    };

    let Some(player) = referee.bypass_change_detection().score_update(
        &mut ball,
        scoreboard.bypass_change_detection(),
        tuning.bounds,
    ) else {
        return;
    };
    referee.set_changed();
    scoreboard.set_changed();

    event_bus.emit(GameEvent::Goal {
        player,
        score_one: scoreboard.one.value,
        score_two: scoreboard.two.value,
    });

    if let Some(winner) = referee.winner() {
        event_bus.emit(GameEvent::MatchEnd {
            winner,
            score_one: scoreboard.one.value,
            score_two: scoreboard.two.value,
            ticks: referee.ticks,
        });
        info!("Player {} wins!", winner.number());
    }
}

/// Run condition: the match is still being played
pub fn match_in_play(referee: Res<Referee>) -> bool {
    !referee.is_finished()
}

/// Run condition: the match has a winner
pub fn match_finished(referee: Res<Referee>) -> bool {
    referee.is_finished()
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::system::RunSystemOnce;

    fn bounds() -> ScreenBounds {
        ScreenBounds::default()
    }

    #[test]
    fn test_left_exit_credits_player_two() {
        let mut referee = Referee::default();
        let mut scoreboard = Scoreboard::default();
        let mut ball = Ball::new(10, 450, 5, 4);
        ball.vx = -1;
        ball.vy = 1;

        ball.advance(bounds());
        assert_eq!(ball.x, 6);
        assert_eq!(referee.score_update(&mut ball, &mut scoreboard, bounds()), None);

        ball.x = -2;
        assert_eq!(
            referee.score_update(&mut ball, &mut scoreboard, bounds()),
            Some(PlayerId::Two)
        );
        assert_eq!(scoreboard.two.value, 1);
        assert_eq!(scoreboard.one.value, 0);
        assert_eq!((ball.x, ball.y), (720, 450));
        assert_eq!(ball.vx, 1);
        assert_eq!(ball.vy, -1);
    }

    #[test]
    fn test_right_exit_credits_player_one() {
        let mut referee = Referee::default();
        let mut scoreboard = Scoreboard::default();
        let mut ball = Ball::new(1441, 300, 5, 4);
        ball.vy = -1;

        assert_eq!(
            referee.score_update(&mut ball, &mut scoreboard, bounds()),
            Some(PlayerId::One)
        );
        assert_eq!(scoreboard.one.value, 1);
        assert_eq!(ball.vx, -1);
        assert_eq!(ball.vy, 1);
    }

    #[test]
    fn test_one_point_per_exit() {
        let mut referee = Referee::default();
        let mut scoreboard = Scoreboard::default();
        let mut ball = Ball::new(-3, 450, 5, 4);

        referee.score_update(&mut ball, &mut scoreboard, bounds());
        // Recentered ball is back in play
        assert_eq!(referee.score_update(&mut ball, &mut scoreboard, bounds()), None);
        assert_eq!(scoreboard.two.value, 1);
    }

    #[test]
    fn test_edges_are_in_play() {
        let mut referee = Referee::default();
        let mut scoreboard = Scoreboard::default();
        for x in [0, 1440] {
            let mut ball = Ball::new(x, 450, 5, 4);
            assert_eq!(referee.score_update(&mut ball, &mut scoreboard, bounds()), None);
        }
    }

    #[test]
    fn test_eleven_nil_finishes_match() {
        let mut referee = Referee::default();
        let mut scoreboard = Scoreboard::default();
        for point in 1..=11 {
            let mut ball = Ball::new(1500, 450, 5, 4);
            assert!(!referee.is_finished(), "finished early at {point}");
            referee.score_update(&mut ball, &mut scoreboard, bounds());
        }
        assert_eq!(scoreboard.one.value, 11);
        assert_eq!(referee.state, MatchState::Finished { winner: PlayerId::One });

        // No further score mutation
        let mut ball = Ball::new(-10, 450, 5, 4);
        assert_eq!(referee.score_update(&mut ball, &mut scoreboard, bounds()), None);
        assert_eq!(scoreboard.two.value, 0);
        assert_eq!(ball.x, -10);
    }

    #[test]
    fn test_rematch_resets() {
        let mut referee = Referee::new(1);
        let mut scoreboard = Scoreboard::default();
        let mut ball = Ball::new(-10, 450, 5, 4);
        referee.score_update(&mut ball, &mut scoreboard, bounds());
        assert_eq!(referee.winner(), Some(PlayerId::Two));

        scoreboard.reset();
        referee.start_next_match();
        assert_eq!(referee.state, MatchState::Playing);
        assert_eq!(referee.match_number, 2);
        assert_eq!(referee.ticks, 0);
        assert_eq!(scoreboard, Scoreboard::default());
    }

    #[test]
    fn test_score_positions_by_side() {
        let scoreboard = Scoreboard::default();
        // Player one defends the right but is displayed on the left
        assert_eq!(scoreboard.one.position(), (520, 85));
        assert_eq!(scoreboard.two.position(), (920, 85));
        assert_eq!(scoreboard.one.label(), "0");
    }

    fn scoring_world(ball: Ball) -> World {
        let mut world = World::new();
        world.insert_resource(PongTuning::default());
        world.insert_resource(Referee::default());
        world.insert_resource(Scoreboard::default());
        world.insert_resource(EventBus::new());
        world.spawn(ball);
        world.clear_trackers();
        world
    }

    #[test]
    fn test_quiet_tick_leaves_score_unchanged() {
        let mut world = scoring_world(Ball::new(720, 450, 5, 4));
        world.run_system_once(check_scoring).expect("check_scoring runs");

        assert_eq!(world.resource::<Referee>().ticks, 1);
        assert!(!world.is_resource_changed::<Referee>());
        assert!(!world.is_resource_changed::<Scoreboard>());
        assert_eq!(world.resource::<EventBus>().pending_count(), 0);
    }

    #[test]
    fn test_goal_flags_score_changed() {
        let mut world = scoring_world(Ball::new(1441, 450, 5, 4));
        world.run_system_once(check_scoring).expect("check_scoring runs");

        assert_eq!(world.resource::<Scoreboard>().one.value, 1);
        assert!(world.is_resource_changed::<Referee>());
        assert!(world.is_resource_changed::<Scoreboard>());
        assert_eq!(world.resource::<EventBus>().pending_count(), 1);
    }
}
