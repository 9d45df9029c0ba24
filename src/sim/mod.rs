//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per frame, fixed step
//! - Seeded RNG only
//! - Stable iteration order (collections scanned by index, front to back)
//! - No rendering or platform dependencies

pub mod collision;
pub mod field;
pub mod state;
pub mod tick;

pub use collision::circle_hit;
pub use field::Field;
pub use state::{GamePhase, GameState, Rock, Ship, Shot};
pub use tick::{TickInput, tick};
