//! Block model: the rectangles users place and drag on the canvas.

use blockboard_core::{Bounds, Point};
use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

/// Stable block identifier, never reused within a session.
pub type BlockId = u64;

/// Presentational orientation toggled by double-click.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Orientation {
    #[default]
    Normal,
    Vertical,
}

impl Orientation {
    pub fn toggled(self) -> Self {
        match self {
            Orientation::Normal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Normal,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub id: BlockId,
    pub width: f64,
    pub height: f64,
    pub center: Point,
    pub orientation: Orientation,
    /// Rotation in radians. Visual only; never affects [`Block::bounds`].
    pub rotation: f64,
    /// Uniform scale factor applied to `width` and `height`.
    pub scale: f64,
    pub selected: bool,
    pub dragging: bool,
}

impl Block {
    pub fn new(id: BlockId, center: Point, width: f64, height: f64) -> Self {
        Self {
            id,
            width,
            height,
            center,
            orientation: Orientation::Normal,
            rotation: 0.0,
            scale: 1.0,
            selected: false,
            dragging: false,
        }
    }

    /// Current axis-aligned extent from position and scale.
    ///
    /// Rotation and orientation are ignored: snapping and placement always
    /// work on the unrotated box.
    pub fn bounds(&self) -> Bounds {
        Bounds::from_center(self.center, self.width * self.scale, self.height * self.scale)
    }

    /// Moves the block so its bounds are centered where `target` is centered.
    ///
    /// The block keeps its own size; only the position follows the drag.
    pub fn move_to(&mut self, target: &Bounds) {
        let (cx, cy) = target.center();
        self.center = Point::new(cx, cy);
    }

    /// Flips orientation and snaps rotation to match it.
    pub fn toggle_orientation(&mut self) -> Orientation {
        self.orientation = self.orientation.toggled();
        self.rotation = match self.orientation {
            Orientation::Normal => 0.0,
            Orientation::Vertical => FRAC_PI_2,
        };
        self.orientation
    }

    /// Rotates by an eighth of a turn (π/4).
    pub fn rotate_step(&mut self) {
        self.rotation += FRAC_PI_4;
    }

    /// Hit test against the unrotated box, edges included.
    pub fn contains_point(&self, p: Point) -> bool {
        self.bounds().contains_point(p.x, p.y)
    }
}
