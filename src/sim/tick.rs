//! Per-frame simulation tick
//!
//! One call advances the game by exactly one display frame. Order within a
//! tick is fixed: restart, jump, physics, spawn, scroll/cull, collision,
//! score.

use rand::Rng;

use super::first_hit;
use super::state::{GameEvent, GamePhase, GameState, Lane, Obstacle};
use crate::consts::*;

/// Input flags written by the platform and consumed by `tick`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Jump key went down (cleared on key-up or when a jump is applied)
    pub jump: bool,
    /// Restart requested (click); only honored on the game-over screen
    pub restart: bool,
}

/// Advance the game state by one tick.
///
/// Returns the notable event of this tick, if any.
pub fn tick<R: Rng>(
    state: &mut GameState,
    input: &mut TickInput,
    rng: &mut R,
) -> Option<GameEvent> {
    let mut event = None;

    // A click while playing is dropped, not queued for the next game over
    if std::mem::take(&mut input.restart) && state.restart() {
        log::info!("Run restarted");
        event = Some(GameEvent::Restarted);
    }

    // Cosmetic clock keeps running on the game-over screen
    state.frame = state.frame.wrapping_add(1);

    if state.phase == GamePhase::GameOver {
        return event;
    }

    if std::mem::take(&mut input.jump) {
        state.player.jump();
    }
    state.player.integrate();

    if let Some(lane) = roll_spawn(rng) {
        log::debug!("Spawned {:?} obstacle at frame {}", lane.kind(), state.frame);
        state.obstacles.push(Obstacle::spawn(lane));
    }

    scroll_obstacles(&mut state.obstacles, state.speed);

    if first_hit(&state.player, &state.obstacles).is_some() {
        state.phase = GamePhase::GameOver;
        log::info!("Game over - score {}", state.score);
        return Some(GameEvent::Crashed { score: state.score });
    }

    state.score = GameState::score_for_speed(state.speed);
    state.ramp_speed();

    event
}

/// Decide whether an obstacle spawns this tick, and in which lane
pub fn roll_spawn<R: Rng>(rng: &mut R) -> Option<Lane> {
    if rng.random::<f64>() >= SPAWN_CHANCE {
        return None;
    }
    if rng.random_bool(0.5) {
        Some(Lane::Upper)
    } else {
        Some(Lane::Ground)
    }
}

/// Move every obstacle left and drop the ones that left the playfield
fn scroll_obstacles(obstacles: &mut Vec<Obstacle>, speed: f64) {
    let dx = speed as f32;
    for obs in obstacles.iter_mut() {
        obs.pos.x -= dx;
    }
    obstacles.retain(|obs| !obs.is_offscreen());
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::sim::state::ObstacleKind;
    use proptest::prelude::*;
    use rand::{RngCore, SeedableRng};
    use rand_pcg::Pcg32;

    /// RNG that returns the same word forever
    pub(crate) struct ConstRng(pub u64);

    impl RngCore for ConstRng {
        fn next_u32(&mut self) -> u32 {
            self.0 as u32
        }

        fn next_u64(&mut self) -> u64 {
            self.0
        }

        fn fill_bytes(&mut self, dst: &mut [u8]) {
            for (i, byte) in dst.iter_mut().enumerate() {
                *byte = self.0.to_le_bytes()[i % 8];
            }
        }
    }

    /// Never rolls under the spawn chance
    pub(crate) fn no_spawns() -> ConstRng {
        ConstRng(u64::MAX)
    }

    #[test]
    fn test_gravity_from_rest() {
        let mut state = GameState::new();
        let mut input = TickInput::default();

        tick(&mut state, &mut input, &mut no_spawns());
        assert_eq!(state.player.vel_y, 0.5);
        assert_eq!(state.player.pos.y, 150.5);

        tick(&mut state, &mut input, &mut no_spawns());
        assert_eq!(state.player.vel_y, 1.0);
        assert_eq!(state.player.pos.y, 151.5);
    }

    #[test]
    fn test_jump_applies_once_per_press() {
        let mut state = GameState::new();
        let mut input = TickInput {
            jump: true,
            ..Default::default()
        };

        tick(&mut state, &mut input, &mut no_spawns());
        // Impulse, then gravity in the same tick
        assert_eq!(state.player.vel_y, JUMP_IMPULSE + GRAVITY);
        assert_eq!(state.player.pos.y, 150.0 + JUMP_IMPULSE + GRAVITY);
        assert!(!input.jump, "jump flag should be consumed");

        // Key still held but no new key-down: gravity only
        tick(&mut state, &mut input, &mut no_spawns());
        assert_eq!(state.player.vel_y, JUMP_IMPULSE + 2.0 * GRAVITY);

        // Fresh press re-applies the impulse
        input.jump = true;
        tick(&mut state, &mut input, &mut no_spawns());
        assert_eq!(state.player.vel_y, JUMP_IMPULSE + GRAVITY);
    }

    #[test]
    fn test_player_rests_on_ground_accumulating_velocity() {
        let mut state = GameState::new();
        let mut input = TickInput::default();

        for _ in 0..200 {
            tick(&mut state, &mut input, &mut no_spawns());
        }
        assert_eq!(state.player.pos.y, PLAYER_GROUND_Y);
        assert!(state.player.vel_y > 50.0);

        // A jump from the floor overrides whatever velocity piled up
        input.jump = true;
        tick(&mut state, &mut input, &mut no_spawns());
        assert_eq!(state.player.pos.y, PLAYER_GROUND_Y + JUMP_IMPULSE + GRAVITY);
    }

    #[test]
    fn test_ten_ticks_ramp_speed_and_score() {
        let mut state = GameState::new();
        let mut input = TickInput::default();
        assert_eq!(state.speed, 3.0);
        assert_eq!(state.score, 0);

        for _ in 0..10 {
            tick(&mut state, &mut input, &mut no_spawns());
        }

        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.speed, 3.0 + 10.0 * SPEED_INCREMENT);
        assert_eq!(state.score, (state.speed * 10.0).floor() as u32);
        assert_eq!(state.score, 30);
        assert_eq!(state.frame, 10);
    }

    #[test]
    fn test_long_run_score_follows_ramp_exactly() {
        let mut state = GameState::new();
        let mut input = TickInput::default();

        for n in 1..=20_000u64 {
            tick(&mut state, &mut input, &mut no_spawns());
            let speed_before = 3.0 + (n - 1) as f64 * 0.0005;
            let expected = (speed_before * 10.0).floor() as u32;
            assert_eq!(state.score, expected, "tick {}", n);
            // One point per 200 ticks, on the dot
            assert_eq!(state.score, 30 + ((n - 1) / 200) as u32, "tick {}", n);
        }
        assert_eq!(state.score, 129);
        assert_eq!(state.speed, 3.0 + 20_000.0 * 0.0005);
    }

    #[test]
    fn test_score_tracks_speed_before_increment() {
        let mut state = GameState::new();
        state.ramp_ticks = 8500;
        state.speed = GameState::speed_after(8500);
        assert_eq!(state.speed, 7.25);
        tick(&mut state, &mut TickInput::default(), &mut no_spawns());
        assert_eq!(state.score, 72);
        assert_eq!(state.speed, GameState::speed_after(8501));
    }

    #[test]
    fn test_collision_tick_freezes_score_and_speed() {
        let mut state = GameState::new();
        // Some progress first so frozen values are distinguishable from defaults
        for _ in 0..5 {
            tick(&mut state, &mut TickInput::default(), &mut no_spawns());
        }
        let mut obs = Obstacle::spawn(Lane::Ground);
        obs.pos = state.player.pos;
        state.obstacles.push(obs);

        let speed_before = state.speed;
        let score_before = state.score;

        let event = tick(&mut state, &mut TickInput::default(), &mut no_spawns());

        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(event, Some(GameEvent::Crashed { score: score_before }));
        assert_eq!(state.speed, speed_before);
        assert_eq!(state.score, score_before);
    }

    #[test]
    fn test_game_over_suspends_updates() {
        let mut state = GameState::new();
        state.phase = GamePhase::GameOver;
        state.obstacles.push(Obstacle::spawn(Lane::Upper));
        let before = state.clone();

        let mut input = TickInput {
            jump: true,
            ..Default::default()
        };
        for _ in 0..30 {
            assert_eq!(tick(&mut state, &mut input, &mut ConstRng(0)), None);
        }

        assert_eq!(state.player, before.player);
        assert_eq!(state.obstacles, before.obstacles);
        assert_eq!(state.speed, before.speed);
        assert_eq!(state.score, before.score);
        assert_eq!(state.frame, 30);
        // Jump is only consumed by a playing tick
        assert!(input.jump);
    }

    #[test]
    fn test_restart_request_from_game_over() {
        let mut state = GameState::new();
        state.phase = GamePhase::GameOver;
        state.speed = 4.2;
        state.score = 41;
        state.frame = 500;
        state.player.pos.y = 268.0;
        state.player.vel_y = 12.0;
        state.obstacles.push(Obstacle::spawn(Lane::Ground));

        let mut input = TickInput {
            restart: true,
            ..Default::default()
        };
        let event = tick(&mut state, &mut input, &mut no_spawns());

        assert_eq!(event, Some(GameEvent::Restarted));
        assert!(!input.restart);
        assert_eq!(state.phase, GamePhase::Playing);
        assert!(state.obstacles.is_empty());
        assert_eq!(state.score, 30);
        assert_eq!(state.speed, START_SPEED + SPEED_INCREMENT);
        // Reset to 0, then this tick counted
        assert_eq!(state.frame, 1);
        assert_eq!(state.player.pos.y, PLAYER_START_Y + GRAVITY);
    }

    #[test]
    fn test_restart_request_while_playing_is_dropped() {
        let mut state = GameState::new();
        let mut input = TickInput {
            restart: true,
            ..Default::default()
        };
        for _ in 0..3 {
            tick(&mut state, &mut input, &mut no_spawns());
        }
        assert!(!input.restart);
        assert_eq!(state.frame, 3);

        // Crash afterwards: the old click must not restart the run
        let mut obs = Obstacle::spawn(Lane::Ground);
        obs.pos = state.player.pos;
        state.obstacles.push(obs);
        tick(&mut state, &mut input, &mut no_spawns());
        tick(&mut state, &mut input, &mut no_spawns());
        assert_eq!(state.phase, GamePhase::GameOver);
    }

    #[test]
    fn test_obstacles_scroll_and_cull_in_order() {
        let mut state = GameState::new();
        let xs = [-16.9, 200.0, -17.0, 120.0, -30.0];
        for x in xs {
            let mut obs = Obstacle::spawn(Lane::Upper);
            obs.pos.x = x;
            state.obstacles.push(obs);
        }

        tick(&mut state, &mut TickInput::default(), &mut no_spawns());

        let remaining: Vec<f32> = state.obstacles.iter().map(|o| o.pos.x).collect();
        assert_eq!(remaining.len(), 3);
        assert!((remaining[0] - -19.9).abs() < 1e-4);
        assert_eq!(remaining[1], 197.0);
        assert_eq!(remaining[2], 117.0);

        // Culled obstacles never come back
        for _ in 0..200 {
            tick(&mut state, &mut TickInput::default(), &mut no_spawns());
        }
        assert!(state.obstacles.is_empty());
    }

    #[test]
    fn test_spawned_obstacle_scrolls_same_tick() {
        let mut state = GameState::new();
        tick(&mut state, &mut TickInput::default(), &mut ConstRng(0));
        assert_eq!(state.obstacles.len(), 1);
        assert_eq!(state.obstacles[0].pos.x, FIELD_WIDTH - START_SPEED as f32);
    }

    #[test]
    fn test_spawn_rate_and_lanes() {
        let mut rng = Pcg32::seed_from_u64(42);
        let rolls = 20_000;
        let mut upper = 0;
        let mut ground = 0;
        for _ in 0..rolls {
            match roll_spawn(&mut rng) {
                Some(Lane::Upper) => upper += 1,
                Some(Lane::Ground) => ground += 1,
                None => {}
            }
        }
        let total = upper + ground;
        // Expected 500 spawns
        assert!((350..650).contains(&total), "spawned {}", total);
        assert!(upper > total / 4 && ground > total / 4);
    }

    #[test]
    fn test_lane_decides_kind_on_spawn() {
        let mut state = GameState::new();
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..400 {
            tick(&mut state, &mut TickInput::default(), &mut rng);
            for obs in &state.obstacles {
                match obs.kind {
                    ObstacleKind::Vodka => assert_eq!(obs.pos.y, UPPER_LANE_Y),
                    ObstacleKind::Beer => assert_eq!(obs.pos.y, GROUND_LANE_Y),
                }
            }
            if state.phase == GamePhase::GameOver {
                break;
            }
        }
    }

    #[test]
    fn test_determinism() {
        let mut state1 = GameState::new();
        let mut state2 = GameState::new();
        let mut rng1 = Pcg32::seed_from_u64(99999);
        let mut rng2 = Pcg32::seed_from_u64(99999);

        for i in 0..600 {
            let jump = i % 37 == 0;
            let mut input1 = TickInput { jump, restart: true };
            let mut input2 = input1.clone();
            tick(&mut state1, &mut input1, &mut rng1);
            tick(&mut state2, &mut input2, &mut rng2);
        }

        assert_eq!(state1, state2);
    }

    proptest! {
        #[test]
        fn prop_physics_step(y in 0.0f32..=PLAYER_GROUND_Y, vel in -30.0f32..30.0) {
            let mut state = GameState::new();
            state.player.pos.y = y;
            state.player.vel_y = vel;

            tick(&mut state, &mut TickInput::default(), &mut no_spawns());

            let expected_vel = vel + GRAVITY;
            prop_assert_eq!(state.player.vel_y, expected_vel);
            prop_assert_eq!(state.player.pos.y, (y + expected_vel).clamp(0.0, PLAYER_GROUND_Y));
        }

        #[test]
        fn prop_speed_monotonic_and_frozen_after_crash(seed in any::<u64>(), jump_every in 5usize..60) {
            let mut state = GameState::new();
            let mut rng = Pcg32::seed_from_u64(seed);
            let mut last_speed = state.speed;
            let mut last_score = state.score;

            for i in 0..1500 {
                let was_over = state.is_game_over();
                let mut input = TickInput { jump: i % jump_every == 0, restart: false };
                tick(&mut state, &mut input, &mut rng);

                prop_assert!(state.speed >= last_speed);
                prop_assert!(state.score >= last_score);
                if was_over {
                    prop_assert_eq!(state.speed, last_speed);
                    prop_assert_eq!(state.score, last_score);
                } else if !state.is_game_over() {
                    prop_assert_eq!(state.score, GameState::score_for_speed(last_speed));
                }
                prop_assert!(state.player.pos.y >= 0.0 && state.player.pos.y <= PLAYER_GROUND_Y);
                last_speed = state.speed;
                last_score = state.score;
            }
        }
    }
}
