//! Game state and core simulation types
//!
//! Everything a session needs to be reproduced from its seed lives here.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::field::Field;
use crate::consts::*;
use crate::heading_to_vec;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Session in progress
    Playing,
    /// Lives exhausted; the state no longer advances
    GameOver,
}

/// A fired projectile
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Shot {
    pub pos: Vec2,
    /// Fixed at launch from the emitter heading; never changes afterwards
    pub vel: Vec2,
}

impl Shot {
    /// Launch from `pos` along `heading` (degrees) at the fixed shot speed
    pub fn new(pos: Vec2, heading: f32) -> Self {
        Self {
            pos,
            vel: heading_to_vec(heading) * SHOT_SPEED,
        }
    }

    /// Straight-line motion; shots never wrap
    pub fn advance(&mut self) {
        self.pos += self.vel;
    }

    /// A shot survives only while both coordinates are on the field
    pub fn in_field(&self, field: &Field) -> bool {
        field.contains(self.pos)
    }
}

/// A drifting rock
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rock {
    /// Size tier, at least 1. Tier-1 rocks vanish outright when shot;
    /// larger rocks split into two of the tier below.
    pub tier: u32,
    pub pos: Vec2,
    pub vel: Vec2,
    /// Silhouette vertices relative to `pos`, generated once at construction
    outline: Vec<Vec2>,
}

impl Rock {
    /// Build a rock at `pos` with a random drift and a random silhouette.
    ///
    /// Drift is a whole number of units per tick on each axis. The
    /// silhouette walks evenly spaced angles at the collision radius,
    /// jittering each vertex so no two rocks look alike.
    pub fn new(rng: &mut Pcg32, tier: u32, pos: Vec2) -> Self {
        let vel = Vec2::new(
            rng.random_range(-ROCK_MAX_AXIS_SPEED..=ROCK_MAX_AXIS_SPEED) as f32,
            rng.random_range(-ROCK_MAX_AXIS_SPEED..=ROCK_MAX_AXIS_SPEED) as f32,
        );
        let radius = tier as f32 * ROCK_RADIUS_PER_TIER;
        let outline = (0..ROCK_OUTLINE_POINTS)
            .map(|i| {
                let angle = i as f32 / ROCK_OUTLINE_POINTS as f32 * std::f32::consts::TAU;
                let r = radius + rng.random_range(-ROCK_OUTLINE_JITTER..=ROCK_OUTLINE_JITTER);
                Vec2::new(r * angle.cos(), r * angle.sin())
            })
            .collect();
        Self {
            tier,
            pos,
            vel,
            outline,
        }
    }

    /// Collision radius, shared by the shot and ship proximity checks
    #[inline]
    pub fn radius(&self) -> f32 {
        self.tier as f32 * ROCK_RADIUS_PER_TIER
    }

    /// Drift one tick and wrap onto the field
    pub fn advance(&mut self, field: &Field) {
        self.pos = field.wrap(self.pos + self.vel);
    }

    /// True only for rocks far outside the field.
    ///
    /// Wrapped motion never produces one; this guards the population
    /// against entities that should not exist.
    pub fn is_stray(&self, field: &Field) -> bool {
        field.beyond(self.pos, ROCK_STRAY_MARGIN)
    }

    /// World-space silhouette, an ordered closed polygon for the renderer
    pub fn world_outline(&self) -> Vec<Vec2> {
        self.outline.iter().map(|p| self.pos + *p).collect()
    }
}

/// The player's ship
///
/// A singleton that is never destroyed: a non-fatal hit resets it to the
/// field center instead. Its shots live here so their motion and culling
/// stay with their owner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ship {
    pub pos: Vec2,
    /// Heading in degrees: 0° points up, increasing clockwise
    pub heading: f32,
    /// Scalar speed along the heading (units per tick)
    pub speed: f32,
    pub shots: Vec<Shot>,
}

impl Ship {
    pub fn new(field: &Field) -> Self {
        Self {
            pos: field.center(),
            heading: 0.0,
            speed: 0.0,
            shots: Vec::new(),
        }
    }

    /// Turn by the fixed per-tick step; holding both directions cancels
    pub fn steer(&mut self, left: bool, right: bool) {
        if left {
            self.heading -= SHIP_TURN_RATE;
        }
        if right {
            self.heading += SHIP_TURN_RATE;
        }
    }

    /// Accelerate along the heading, capped at the speed limit
    pub fn thrust(&mut self) {
        self.speed = (self.speed + SHIP_THRUST).min(SHIP_MAX_SPEED);
    }

    /// Spawn one shot at the current position and heading
    pub fn fire(&mut self) {
        self.shots.push(Shot::new(self.pos, self.heading));
    }

    /// Apply drag, integrate along the heading, wrap onto the field.
    ///
    /// Drag runs every tick, thrusting or not, so an idle ship coasts to
    /// a stop on its own.
    pub fn integrate(&mut self, field: &Field) {
        self.speed *= SHIP_DRAG;
        self.pos = field.wrap(self.pos + heading_to_vec(self.heading) * self.speed);
    }

    /// Advance every shot, then drop the ones that left the field
    pub fn advance_shots(&mut self, field: &Field) {
        for shot in &mut self.shots {
            shot.advance();
        }
        self.shots.retain(|shot| shot.in_field(field));
    }

    /// Back to the field center at a dead stop, pointing up
    pub fn reset(&mut self, field: &Field) {
        self.pos = field.center();
        self.speed = 0.0;
        self.heading = 0.0;
    }

    /// Hull triangle in world space, nose first, for the renderer
    pub fn hull(&self) -> [Vec2; 3] {
        [
            self.pos + heading_to_vec(self.heading) * SHIP_NOSE_LEN,
            self.pos - heading_to_vec(self.heading + SHIP_TAIL_FLARE) * SHIP_TAIL_LEN,
            self.pos - heading_to_vec(self.heading - SHIP_TAIL_FLARE) * SHIP_TAIL_LEN,
        ]
    }
}

/// Complete session state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub field: Field,
    pub phase: GamePhase,
    /// Monotonically non-decreasing; only shot kills add to it
    pub score: u64,
    pub lives: u8,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub ship: Ship,
    pub rocks: Vec<Rock>,
    /// Session RNG; every rock drift and silhouette draws from it
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// New session on the default field: full lives, ship centered, the
    /// starting rock population scattered over the field.
    pub fn new(seed: u64) -> Self {
        let field = Field::default();
        let mut state = Self {
            seed,
            field,
            phase: GamePhase::Playing,
            score: 0,
            lives: START_LIVES,
            time_ticks: 0,
            ship: Ship::new(&field),
            rocks: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
        };
        state.spawn_rock_field(START_ROCKS, START_ROCK_TIER);
        log::info!(
            "session start: seed {seed}, {} tier-{START_ROCK_TIER} rocks",
            state.rocks.len()
        );
        state
    }

    /// Scatter `count` rocks of the given tier uniformly over the field
    pub fn spawn_rock_field(&mut self, count: usize, tier: u32) {
        for _ in 0..count {
            let pos = Vec2::new(
                self.rng.random_range(0.0..self.field.width),
                self.rng.random_range(0.0..self.field.height),
            );
            let rock = Rock::new(&mut self.rng, tier, pos);
            self.rocks.push(rock);
        }
    }

    /// Session still accepting ticks?
    #[inline]
    pub fn running(&self) -> bool {
        self.phase == GamePhase::Playing
    }
}
