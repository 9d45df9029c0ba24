//! Playfield geometry
//!
//! The field is a torus: an entity leaving one edge re-enters at the
//! opposite edge. Wrap is applied per axis after integration and never
//! touches velocity. Shots are the exception: they skip wrapping and die
//! off-field instead, so they cannot loop back around.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{FIELD_HEIGHT, FIELD_WIDTH};

/// Rectangular playfield with toroidal wrap topology
///
/// Coordinates are screen-style: origin at the top-left, +y down.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub width: f32,
    pub height: f32,
}

impl Default for Field {
    fn default() -> Self {
        Self {
            width: FIELD_WIDTH,
            height: FIELD_HEIGHT,
        }
    }
}

impl Field {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Field center, the ship spawn and reset point
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Wrap a position onto the field, one axis at a time.
    ///
    /// A coordinate below 0 lands on the far bound and one past the far
    /// bound lands on 0; there is no partial wrap.
    pub fn wrap(&self, pos: Vec2) -> Vec2 {
        let mut p = pos;
        if p.x < 0.0 {
            p.x = self.width;
        }
        if p.x > self.width {
            p.x = 0.0;
        }
        if p.y < 0.0 {
            p.y = self.height;
        }
        if p.y > self.height {
            p.y = 0.0;
        }
        p
    }

    /// Whether a position lies inside `[0, width] x [0, height]`
    pub fn contains(&self, pos: Vec2) -> bool {
        pos.x >= 0.0 && pos.x <= self.width && pos.y >= 0.0 && pos.y <= self.height
    }

    /// Whether a position is outside the field by more than `margin` on any side
    pub fn beyond(&self, pos: Vec2, margin: f32) -> bool {
        pos.x < -margin
            || pos.x > self.width + margin
            || pos.y < -margin
            || pos.y > self.height + margin
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_wrap_past_far_edge_lands_on_zero() {
        let field = Field::default();
        assert_eq!(
            field.wrap(Vec2::new(800.5, 100.0)),
            Vec2::new(0.0, 100.0)
        );
        assert_eq!(
            field.wrap(Vec2::new(100.0, 600.5)),
            Vec2::new(100.0, 0.0)
        );
    }

    #[test]
    fn test_wrap_below_zero_lands_on_far_edge() {
        let field = Field::default();
        assert_eq!(
            field.wrap(Vec2::new(-0.5, 100.0)),
            Vec2::new(800.0, 100.0)
        );
        assert_eq!(
            field.wrap(Vec2::new(100.0, -0.5)),
            Vec2::new(100.0, 600.0)
        );
    }

    #[test]
    fn test_wrap_leaves_interior_untouched() {
        let field = Field::default();
        let p = Vec2::new(400.0, 300.0);
        assert_eq!(field.wrap(p), p);
        // the bounds themselves are on the field
        assert_eq!(field.wrap(Vec2::new(0.0, 600.0)), Vec2::new(0.0, 600.0));
    }

    #[test]
    fn test_contains_is_bound_inclusive() {
        let field = Field::default();
        assert!(field.contains(Vec2::ZERO));
        assert!(field.contains(Vec2::new(800.0, 600.0)));
        assert!(!field.contains(Vec2::new(800.1, 300.0)));
        assert!(!field.contains(Vec2::new(400.0, -0.1)));
    }

    #[test]
    fn test_beyond_requires_full_margin() {
        let field = Field::default();
        assert!(!field.beyond(Vec2::new(-50.0, 300.0), 50.0));
        assert!(field.beyond(Vec2::new(-50.1, 300.0), 50.0));
        assert!(field.beyond(Vec2::new(400.0, 650.1), 50.0));
    }

    proptest! {
        // One integration step from anywhere on the field stays on the field,
        // even at the largest velocities the game produces.
        #[test]
        fn wrap_keeps_positions_on_field(
            x in 0.0f32..=800.0,
            y in 0.0f32..=600.0,
            vx in -800.0f32..=800.0,
            vy in -600.0f32..=600.0,
        ) {
            let field = Field::default();
            let p = field.wrap(Vec2::new(x + vx, y + vy));
            prop_assert!(p.x >= 0.0 && p.x <= field.width);
            prop_assert!(p.y >= 0.0 && p.y <= field.height);
        }
    }
}
