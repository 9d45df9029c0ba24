//! Pairwise collision detection and resolution
//!
//! Both passes run after all motion for the tick: shots against rocks
//! first, then rocks against the ship. Offspring from split rocks are
//! buffered to the side and merged only after both passes, so nothing
//! spawned this tick is ever scanned this tick.

use glam::Vec2;

use super::state::{GamePhase, GameState, Rock};
use crate::consts::ROCK_SCORE;

/// Strict proximity test: touching exactly at the radius is a miss
#[inline]
pub fn circle_hit(point: Vec2, center: Vec2, radius: f32) -> bool {
    point.distance(center) < radius
}

/// Resolve every collision for the current tick, in shot-then-ship order
pub fn resolve(state: &mut GameState) {
    let mut offspring = Vec::new();
    resolve_shot_hits(state, &mut offspring);
    resolve_ship_hits(state);
    // eligible for collisions starting next tick
    state.rocks.append(&mut offspring);
}

/// First pass: each shot destroys at most the first rock it overlaps.
///
/// A kill scores the fixed reward whatever the tier; rocks above tier 1
/// leave two smaller offspring at the impact position, each with a fresh
/// drift and silhouette.
fn resolve_shot_hits(state: &mut GameState, offspring: &mut Vec<Rock>) {
    let mut s = 0;
    while s < state.ship.shots.len() {
        let pos = state.ship.shots[s].pos;
        let hit = state
            .rocks
            .iter()
            .position(|rock| circle_hit(pos, rock.pos, rock.radius()));
        match hit {
            Some(r) => {
                let rock = state.rocks.remove(r);
                state.score += ROCK_SCORE;
                if rock.tier > 1 {
                    offspring.push(Rock::new(&mut state.rng, rock.tier - 1, rock.pos));
                    offspring.push(Rock::new(&mut state.rng, rock.tier - 1, rock.pos));
                }
                log::debug!(
                    "rock down: tier {}, score {}, {} in flight",
                    rock.tier,
                    state.score,
                    state.rocks.len()
                );
                // the spent shot is removed; the next shot now sits at index s
                state.ship.shots.remove(s);
            }
            None => s += 1,
        }
    }
}

/// Second pass: rocks against the ship.
///
/// A hit with lives to spare consumes the rock whole (no offspring,
/// whatever the tier) and recenters the ship. The hit that spends the
/// last life ends the session on the spot and leaves everything in place.
fn resolve_ship_hits(state: &mut GameState) {
    let mut r = 0;
    while r < state.rocks.len() {
        let rock = &state.rocks[r];
        if circle_hit(state.ship.pos, rock.pos, rock.radius()) {
            state.lives = state.lives.saturating_sub(1);
            log::info!("ship hit by tier-{} rock: {} lives left", rock.tier, state.lives);
            if state.lives == 0 {
                state.phase = GamePhase::GameOver;
                return;
            }
            state.ship.reset(&state.field);
            state.rocks.remove(r);
            // the rock that shifted into r is tested next, against the reset position
        } else {
            r += 1;
        }
    }
}
