//! Toroids - a wrap-around rocks-and-ship arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (motion, collisions, game state)
//!
//! Rendering, text, and input polling are external collaborators: the
//! simulation hands out world-space geometry and HUD values each frame and
//! consumes a [`sim::TickInput`] filled in by whatever frontend drives it.

pub mod sim;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    /// Session defaults
    pub const START_LIVES: u8 = 3;
    pub const START_ROCKS: usize = 10;
    pub const START_ROCK_TIER: u32 = 3;

    /// Score for a rock destroyed by a shot, whatever its tier
    pub const ROCK_SCORE: u64 = 10;

    /// Collision radius per size tier (also the silhouette base radius)
    pub const ROCK_RADIUS_PER_TIER: f32 = 10.0;
    /// Vertices in a rock silhouette
    pub const ROCK_OUTLINE_POINTS: usize = 12;
    /// Uniform jitter applied to each silhouette vertex radius
    pub const ROCK_OUTLINE_JITTER: f32 = 5.0;
    /// Per-axis rock drift is a whole number of units in this range
    pub const ROCK_MAX_AXIS_SPEED: i32 = 2;
    /// Rocks beyond this margin outside the field are stray and culled
    pub const ROCK_STRAY_MARGIN: f32 = 50.0;

    /// Shot launch speed (units per tick)
    pub const SHOT_SPEED: f32 = 10.0;

    /// Ship handling
    pub const SHIP_TURN_RATE: f32 = 5.0; // degrees per tick
    pub const SHIP_THRUST: f32 = 0.2;
    pub const SHIP_DRAG: f32 = 0.99;
    pub const SHIP_MAX_SPEED: f32 = 5.0;

    /// Hull triangle: nose reach and tail spread (render geometry)
    pub const SHIP_NOSE_LEN: f32 = 20.0;
    pub const SHIP_TAIL_LEN: f32 = 10.0;
    pub const SHIP_TAIL_FLARE: f32 = 30.0; // degrees off the heading axis
}

/// Unit vector for a heading in degrees: 0° points up, increasing clockwise.
///
/// Shared by the ship and its shots so a shot always leaves along the nose.
#[inline]
pub fn heading_to_vec(degrees: f32) -> Vec2 {
    let r = degrees.to_radians();
    Vec2::new(r.sin(), -r.cos())
}
