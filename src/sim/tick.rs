//! Per-tick simulation protocol
//!
//! One call to [`tick`] is one frame, and the order inside a frame is
//! fixed: the ship moves first, then the rocks, then collisions resolve.
//! All population changes happen synchronously inside the owning pass.

use super::collision;
use super::state::GameState;

/// Input sampled for a single tick.
///
/// The rotation and thrust flags are level-triggered and read every tick.
/// `fire` is edge-triggered: the frontend sets it for the tick of the key
/// press and clears it afterwards; each set flag launches exactly one shot.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub rotate_left: bool,
    pub rotate_right: bool,
    pub thrust: bool,
    pub fire: bool,
}

/// Advance the session by one frame
pub fn tick(state: &mut GameState, input: &TickInput) {
    if !state.running() {
        return;
    }
    state.time_ticks += 1;

    // 1. Ship: controls first, then motion, then its shots
    state.ship.steer(input.rotate_left, input.rotate_right);
    if input.thrust {
        state.ship.thrust();
    }
    if input.fire {
        state.ship.fire();
    }
    state.ship.integrate(&state.field);
    state.ship.advance_shots(&state.field);

    // 2. Rocks drift and wrap; strays should not exist, but never survive
    let field = state.field;
    for rock in &mut state.rocks {
        rock.advance(&field);
    }
    state.rocks.retain(|rock| !rock.is_stray(&field));

    // 3. Collisions: shots first, then the ship
    collision::resolve(state);

    if !state.running() {
        log::info!(
            "session over after {} ticks: score {}",
            state.time_ticks,
            state.score
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::state::Rock;

    fn quiet() -> TickInput {
        TickInput::default()
    }

    /// Session with no rocks in the way
    fn clear_state(seed: u64) -> GameState {
        let mut state = GameState::new(seed);
        state.rocks.clear();
        state
    }

    #[test]
    fn test_fired_shot_travels_up_from_center() {
        let mut state = clear_state(5);
        let input = TickInput {
            fire: true,
            ..Default::default()
        };
        tick(&mut state, &input);

        assert_eq!(state.ship.shots.len(), 1);
        let shot = state.ship.shots[0];
        assert!((shot.pos.x - 400.0).abs() < 1e-4);
        assert!((shot.pos.y - 290.0).abs() < 1e-4);
    }

    #[test]
    fn test_fire_launches_one_shot_per_trigger() {
        let mut state = clear_state(5);
        let fire = TickInput {
            fire: true,
            ..Default::default()
        };
        tick(&mut state, &fire);
        assert_eq!(state.ship.shots.len(), 1);

        // flag cleared by the frontend: no more shots
        tick(&mut state, &quiet());
        assert_eq!(state.ship.shots.len(), 1);
    }

    #[test]
    fn test_shot_is_culled_after_leaving_the_field() {
        let mut state = clear_state(5);
        let fire = TickInput {
            fire: true,
            ..Default::default()
        };
        tick(&mut state, &fire);

        // 300 units to the top edge at 10 per tick
        for _ in 0..40 {
            tick(&mut state, &quiet());
        }
        assert!(state.ship.shots.is_empty());
    }

    #[test]
    fn test_thrust_accelerates_and_drag_coasts() {
        let mut state = clear_state(5);
        let thrust = TickInput {
            thrust: true,
            ..Default::default()
        };
        tick(&mut state, &thrust);
        assert!((state.ship.speed - SHIP_THRUST * SHIP_DRAG).abs() < 1e-5);
        assert!(state.ship.pos.y < 300.0); // moved along the default heading

        // idle ticks bleed the speed away
        for _ in 0..600 {
            tick(&mut state, &quiet());
        }
        assert!(state.ship.speed < 1e-2);
    }

    #[test]
    fn test_held_rotation_accumulates() {
        let mut state = clear_state(5);
        let right = TickInput {
            rotate_right: true,
            ..Default::default()
        };
        for _ in 0..3 {
            tick(&mut state, &right);
        }
        assert_eq!(state.ship.heading, 3.0 * SHIP_TURN_RATE);
    }

    #[test]
    fn test_every_entity_stays_on_field() {
        let mut state = GameState::new(9);
        for t in 0..200 {
            let input = TickInput {
                rotate_right: true,
                thrust: true,
                fire: t % 11 == 0,
                ..Default::default()
            };
            tick(&mut state, &input);
            if !state.running() {
                break;
            }
            assert!(state.field.contains(state.ship.pos));
            for rock in &state.rocks {
                assert!(state.field.contains(rock.pos));
            }
            // culling already removed anything off-field
            for shot in &state.ship.shots {
                assert!(state.field.contains(shot.pos));
            }
        }
    }

    #[test]
    fn test_game_over_freezes_the_state() {
        let mut state = clear_state(5);
        state.lives = 1;
        let center = state.field.center();
        let rock = Rock::new(&mut state.rng, 1, center);
        state.rocks.push(rock);

        tick(&mut state, &quiet());
        assert!(!state.running());

        let ticks = state.time_ticks;
        let score = state.score;
        for _ in 0..10 {
            tick(&mut state, &quiet());
        }
        assert_eq!(state.time_ticks, ticks);
        assert_eq!(state.score, score);
    }

    #[test]
    fn test_same_seed_same_run() {
        let mut a = GameState::new(1234);
        let mut b = GameState::new(1234);

        for t in 0..300u64 {
            let input = TickInput {
                rotate_right: t % 2 == 0,
                rotate_left: t % 5 == 0,
                thrust: t % 3 == 0,
                fire: t % 7 == 0,
            };
            tick(&mut a, &input);
            tick(&mut b, &input);
        }

        assert_eq!(a.time_ticks, b.time_ticks);
        assert_eq!(a.score, b.score);
        assert_eq!(a.lives, b.lives);
        assert_eq!(a.rocks.len(), b.rocks.len());
        assert_eq!(a.ship.pos, b.ship.pos);
        assert_eq!(a.ship.shots.len(), b.ship.shots.len());
    }
}
