//! Snap guide detection.
//!
//! While a block is dragged, its bounds are compared against every stationary
//! block in eight directions. Edge directions fire when a single pair of
//! edges is within `snap_distance` (`|Δ| < snap_distance`). Corner directions
//! draw a diagonal between facing corners and fire when EITHER the
//! horizontal or the vertical one-sided gap lies in `(0, snap_distance)`.
//!
//! Coordinates are y-up: `top` compares `max_y`, `bottom` compares `min_y`.

use crate::block::BlockId;
use blockboard_core::{Bounds, LayoutError, Point};
use blockboard_settings::EditorConfig;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Default alignment tolerance in canvas units.
pub const DEFAULT_SNAP_DISTANCE: f64 = 1.5;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum SnapDirection {
    Left,
    Right,
    Top,
    Bottom,
    BottomLeft,
    TopLeft,
    BottomRight,
    TopRight,
}

impl SnapDirection {
    /// All directions in evaluation order.
    pub const ALL: [SnapDirection; 8] = [
        SnapDirection::Left,
        SnapDirection::Right,
        SnapDirection::Top,
        SnapDirection::Bottom,
        SnapDirection::BottomLeft,
        SnapDirection::TopLeft,
        SnapDirection::BottomRight,
        SnapDirection::TopRight,
    ];

    pub fn tag(self) -> &'static str {
        match self {
            SnapDirection::Left => "left",
            SnapDirection::Right => "right",
            SnapDirection::Top => "top",
            SnapDirection::Bottom => "bottom",
            SnapDirection::BottomLeft => "bottomLeft",
            SnapDirection::TopLeft => "topLeft",
            SnapDirection::BottomRight => "bottomRight",
            SnapDirection::TopRight => "topRight",
        }
    }

    pub fn is_edge(self) -> bool {
        matches!(
            self,
            SnapDirection::Left | SnapDirection::Right | SnapDirection::Top | SnapDirection::Bottom
        )
    }

    pub fn is_corner(self) -> bool {
        !self.is_edge()
    }

    /// Decides whether this direction's guide shows for the pair, and where.
    ///
    /// Returns the guide's `(start, end)` endpoints, or `None` to hide it.
    pub fn evaluate(
        self,
        dragged: &Bounds,
        target: &Bounds,
        snap_distance: f64,
    ) -> Option<(Point, Point)> {
        let d = dragged;
        let t = target;
        let near = |delta: f64| delta.abs() < snap_distance;
        // One-sided gap: the boxes are apart on this axis and closer than the tolerance.
        let gap = |delta: f64| delta > 0.0 && delta < snap_distance;

        let gx_left = d.min_x - t.max_x;
        let gx_right = t.min_x - d.max_x;
        let gy_above = d.min_y - t.max_y;
        let gy_below = t.min_y - d.max_y;

        let y_span = || (t.min_y.min(d.min_y), t.max_y.max(d.max_y));
        let x_span = || (t.min_x.min(d.min_x), t.max_x.max(d.max_x));

        match self {
            SnapDirection::Left => near(d.min_x - t.min_x).then(|| {
                let (y0, y1) = y_span();
                (Point::new(t.min_x, y0), Point::new(t.min_x, y1))
            }),
            SnapDirection::Right => near(d.max_x - t.max_x).then(|| {
                let (y0, y1) = y_span();
                (Point::new(t.max_x, y0), Point::new(t.max_x, y1))
            }),
            SnapDirection::Top => near(d.max_y - t.max_y).then(|| {
                let (x0, x1) = x_span();
                (Point::new(x0, t.max_y), Point::new(x1, t.max_y))
            }),
            SnapDirection::Bottom => near(d.min_y - t.min_y).then(|| {
                let (x0, x1) = x_span();
                (Point::new(x0, t.min_y), Point::new(x1, t.min_y))
            }),
            SnapDirection::BottomLeft => (gap(gx_left) || gap(gy_above))
                .then(|| (t.top_right(), d.bottom_left())),
            SnapDirection::TopLeft => (gap(gx_left) || gap(gy_below))
                .then(|| (t.bottom_right(), d.top_left())),
            SnapDirection::BottomRight => (gap(gx_right) || gap(gy_above))
                .then(|| (d.bottom_right(), t.top_left())),
            SnapDirection::TopRight => (gap(gx_right) || gap(gy_below))
                .then(|| (d.top_right(), t.bottom_left())),
        }
    }
}

impl fmt::Display for SnapDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for SnapDirection {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SnapDirection::ALL
            .into_iter()
            .find(|d| d.tag() == s)
            .ok_or_else(|| LayoutError::UnknownDirection(s.to_string()))
    }
}

/// Identity of a guide: one line per direction per target block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GuideKey {
    pub direction: SnapDirection,
    pub target: BlockId,
}

impl GuideKey {
    pub fn new(direction: SnapDirection, target: BlockId) -> Self {
        Self { direction, target }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapGuide {
    pub direction: SnapDirection,
    pub target: BlockId,
    pub start: Point,
    pub end: Point,
}

impl SnapGuide {
    pub fn key(&self) -> GuideKey {
        GuideKey::new(self.direction, self.target)
    }
}

/// Evaluates every direction against every stationary block.
///
/// Guides come back in input order, then direction order. A later result for
/// the same `(direction, target)` key replaces the earlier one in place.
pub fn compute_guides(
    dragged: &Bounds,
    stationary: &[(BlockId, Bounds)],
    snap_distance: f64,
) -> Vec<SnapGuide> {
    let mut guides: Vec<SnapGuide> = Vec::new();
    let mut slots: HashMap<GuideKey, usize> = HashMap::new();

    for (target, bounds) in stationary {
        for direction in SnapDirection::ALL {
            let Some((start, end)) = direction.evaluate(dragged, bounds, snap_distance) else {
                continue;
            };
            let guide = SnapGuide {
                direction,
                target: *target,
                start,
                end,
            };
            match slots.get(&guide.key()) {
                Some(&index) => guides[index] = guide,
                None => {
                    slots.insert(guide.key(), guides.len());
                    guides.push(guide);
                }
            }
        }
    }

    guides
}

/// Snap detection with a configured tolerance.
#[derive(Debug, Clone, PartialEq)]
pub struct SnapDetector {
    snap_distance: f64,
    enabled: bool,
}

impl Default for SnapDetector {
    fn default() -> Self {
        Self::new(DEFAULT_SNAP_DISTANCE)
    }
}

impl SnapDetector {
    pub fn new(snap_distance: f64) -> Self {
        Self {
            snap_distance,
            enabled: true,
        }
    }

    pub fn from_config(config: &EditorConfig) -> Self {
        Self {
            snap_distance: config.snapping.snap_distance,
            enabled: config.snapping.enabled,
        }
    }

    pub fn snap_distance(&self) -> f64 {
        self.snap_distance
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Guides for one drag tick; empty when snapping is disabled.
    pub fn compute_guides(
        &self,
        dragged: &Bounds,
        stationary: &[(BlockId, Bounds)],
    ) -> Vec<SnapGuide> {
        if !self.enabled {
            return Vec::new();
        }
        let guides = compute_guides(dragged, stationary, self.snap_distance);
        for guide in &guides {
            tracing::debug!(
                "Snap guide {} against block {}: {} -> {}",
                guide.direction,
                guide.target,
                guide.start,
                guide.end
            );
        }
        guides
    }
}
