//! Movement domain: kinematic sweep against the avian spatial query pipeline.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::GameLayer;
use crate::movement::sweep::{ControllerHit, GROUND_NORMAL_MIN_Y, KinematicSweep, SweepOutcome};

/// Gap kept between the capsule and whatever it stops against.
const SKIN_WIDTH: f32 = 0.5;

/// Filter for everything that blocks the player capsule (sensors never do).
pub(crate) fn blocking_filter(player: Entity) -> SpatialQueryFilter {
    SpatialQueryFilter::from_mask([GameLayer::Ground, GameLayer::Wall, GameLayer::Crate])
        .with_excluded_entities([player])
}

/// [`KinematicSweep`] backed by shape casts.
///
/// The displacement is resolved one axis at a time (horizontal, then
/// vertical) so a wall only cancels horizontal motion and a floor only
/// cancels vertical motion.
pub(crate) struct SpatialSweep<'a, 'w, 's> {
    pub spatial_query: &'a SpatialQuery<'w, 's>,
    pub shape: &'a Collider,
    pub filter: &'a SpatialQueryFilter,
}

impl KinematicSweep for SpatialSweep<'_, '_, '_> {
    fn sweep(&mut self, from: Vec2, displacement: Vec2) -> SweepOutcome {
        let move_direction = displacement.normalize_or_zero();
        let mut outcome = SweepOutcome {
            position: from,
            ..default()
        };

        for axis in [Vec2::X, Vec2::Y] {
            let amount = displacement.dot(axis);
            if amount == 0.0 {
                continue;
            }
            let Ok(direction) = Dir2::new(axis * amount.signum()) else {
                continue;
            };
            let distance = amount.abs();

            let config = ShapeCastConfig::from_max_distance(distance + SKIN_WIDTH);
            let hit = self.spatial_query.cast_shape(
                self.shape,
                outcome.position,
                0.0,
                direction,
                &config,
                self.filter,
            );

            let Some(hit) = hit else {
                outcome.position += *direction * distance;
                continue;
            };

            let travel = (hit.distance - SKIN_WIDTH).clamp(0.0, distance);
            outcome.position += *direction * travel;
            outcome.hits.push(ControllerHit {
                entity: hit.entity,
                normal: hit.normal1,
                move_direction,
            });

            if axis == Vec2::Y && amount < 0.0 && hit.normal1.y >= GROUND_NORMAL_MIN_Y {
                outcome.grounded = true;
            }
        }

        outcome
    }
}
