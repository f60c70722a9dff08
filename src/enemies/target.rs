//! Trackable targets and nearest-target selection.

use bevy::prelude::{Entity, Vec2};

/// Read-only view of a target for one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetInfo {
    pub id: Entity,
    pub position: Vec2,
    pub alive: bool,
}

/// Source of the targets an enemy may track.
///
/// Iteration order must be stable within a tick; ties in target selection go
/// to whichever target is listed first.
pub trait TargetRegistry {
    fn targets(&self) -> &[TargetInfo];
}

impl TargetRegistry for [TargetInfo] {
    fn targets(&self) -> &[TargetInfo] {
        self
    }
}

impl TargetRegistry for Vec<TargetInfo> {
    fn targets(&self) -> &[TargetInfo] {
        self
    }
}

/// A selected target and how far away it was.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sighting {
    pub target: TargetInfo,
    pub distance: f32,
}

/// Pick the nearest live target within `detection_range` of `from`.
///
/// Equidistant targets resolve to the first one in registry order. Targets at a
/// non-finite position are skipped.
pub fn select_target(
    registry: &dyn TargetRegistry,
    from: Vec2,
    detection_range: f32,
) -> Option<Sighting> {
    let mut nearest: Option<Sighting> = None;
    for target in registry.targets().iter().filter(|target| target.alive) {
        let distance = from.distance(target.position);
        if !distance.is_finite() {
            continue;
        }
        if nearest.map_or(true, |best| distance < best.distance) {
            nearest = Some(Sighting {
                target: *target,
                distance,
            });
        }
    }
    nearest.filter(|sighting| sighting.distance <= detection_range)
}
