//! Placement planner for newly added blocks.
//!
//! Candidate slots are scanned in row-major order starting at the canvas's
//! top-left corner. Each step moves right by `width + padding`; once the next
//! slot would cross the right edge the scan wraps to the left edge one row
//! (`height + padding`) lower. The first slot that overlaps no existing block
//! wins, so the result depends only on the inputs.

use blockboard_core::{Bounds, LayoutError, Point, Result};
use blockboard_settings::{EditorConfig, PlacementPolicy};

/// Row limit for [`PlacementPolicy::Unbounded`] scans.
pub const MAX_UNBOUNDED_ROWS: usize = 10_000;

/// A chosen slot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Top-left corner of the slot.
    pub anchor: Point,
    /// Full extent of the slot.
    pub bounds: Bounds,
}

impl Placement {
    /// Block center for this slot.
    pub fn center(&self) -> Point {
        let (cx, cy) = self.bounds.center();
        Point::new(cx, cy)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlacementPlanner {
    canvas_width: f64,
    canvas_height: f64,
    padding: f64,
    policy: PlacementPolicy,
}

impl PlacementPlanner {
    /// Creates a bounded planner for a canvas centered on the origin.
    ///
    /// # Errors
    ///
    /// [`LayoutError::InvalidConfig`] unless both canvas sides are finite and
    /// positive and `padding` is finite and non-negative.
    pub fn new(canvas_width: f64, canvas_height: f64, padding: f64) -> Result<Self> {
        for (key, value) in [("canvas.width", canvas_width), ("canvas.height", canvas_height)] {
            if !(value.is_finite() && value > 0.0) {
                return Err(LayoutError::InvalidConfig(format!("{key} = {value}")));
            }
        }
        if !(padding.is_finite() && padding >= 0.0) {
            return Err(LayoutError::InvalidConfig(format!(
                "placement.padding = {padding}"
            )));
        }

        Ok(Self {
            canvas_width,
            canvas_height,
            padding,
            policy: PlacementPolicy::Bounded,
        })
    }

    pub fn from_config(config: &EditorConfig) -> Result<Self> {
        Ok(Self::new(
            config.canvas.width,
            config.canvas.height,
            config.placement.padding,
        )?
        .with_policy(config.placement.policy))
    }

    pub fn with_policy(mut self, policy: PlacementPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> PlacementPolicy {
        self.policy
    }

    pub fn padding(&self) -> f64 {
        self.padding
    }

    /// Canvas extent in canvas-centered coordinates.
    pub fn canvas_bounds(&self) -> Bounds {
        Bounds::from_center(Point::default(), self.canvas_width, self.canvas_height)
    }

    /// Finds the first free `width` x `height` slot.
    ///
    /// Touching an existing block is allowed; overlapping it is not.
    ///
    /// # Errors
    ///
    /// * [`LayoutError::InvalidDimensions`] for non-finite or non-positive sizes
    /// * [`LayoutError::LayoutExhausted`] when the scan leaves the canvas
    ///   (bounded) or hits [`MAX_UNBOUNDED_ROWS`] (unbounded)
    ///
    /// The scan visits at most one candidate per column per row, so it
    /// always terminates.
    pub fn place(&self, width: f64, height: f64, existing: &[Bounds]) -> Result<Placement> {
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(LayoutError::InvalidDimensions { width, height });
        }

        let canvas = self.canvas_bounds();
        let exhausted = LayoutError::LayoutExhausted { width, height };

        if self.policy == PlacementPolicy::Bounded
            && (width > canvas.width() || height > canvas.height())
        {
            return Err(exhausted);
        }

        let step_x = width + self.padding;
        let step_y = height + self.padding;
        let columns = (canvas.width() / step_x).floor() as usize + 1;
        let row_cap = match self.policy {
            PlacementPolicy::Bounded => (canvas.height() / step_y).floor() as usize + 1,
            PlacementPolicy::Unbounded => MAX_UNBOUNDED_ROWS,
        };
        let max_steps = columns.saturating_mul(row_cap.saturating_add(1));

        let mut x = canvas.min_x;
        let mut y = canvas.max_y;
        let mut rows = 0usize;
        let mut steps = 0usize;

        loop {
            steps += 1;
            if steps > max_steps {
                tracing::warn!(
                    "Placement scan for {}x{} block gave up after {} candidates",
                    width,
                    height,
                    max_steps
                );
                return Err(exhausted);
            }

            let candidate = Bounds::from_top_left(Point::new(x, y), width, height);
            if !existing.iter().any(|b| b.intersects(&candidate)) {
                tracing::debug!(
                    "Placed {}x{} block at ({}, {}) after {} row wraps",
                    width,
                    height,
                    x,
                    y,
                    rows
                );
                return Ok(Placement {
                    anchor: Point::new(x, y),
                    bounds: candidate,
                });
            }

            x += step_x;
            if x + width > canvas.max_x {
                x = canvas.min_x;
                y -= step_y;
                rows += 1;

                let out_of_room = match self.policy {
                    PlacementPolicy::Bounded => y - height < canvas.min_y,
                    PlacementPolicy::Unbounded => rows >= MAX_UNBOUNDED_ROWS,
                };
                if out_of_room {
                    tracing::warn!(
                        "No free slot for {}x{} block after {} rows",
                        width,
                        height,
                        rows
                    );
                    return Err(exhausted);
                }
            }
        }
    }
}
