//! Reusable pool of guide lines.
//!
//! Every line the renderer creates stays alive for the whole session. A
//! handle is either on the free list or bound to exactly one active guide;
//! [`GuidePool::acquire`] and [`GuidePool::release`] are the only places that
//! move it between the two.
//!
//! ```text
//!            acquire()
//!   free  ─────────────▶  in use ──▶ (direction, target)
//!         ◀─────────────
//!       release() / release_all()
//! ```

use crate::block::BlockId;
use crate::guide_renderer::{GuideRenderer, LineId};
use crate::snap::{GuideKey, SnapDirection, SnapGuide};
use blockboard_core::{LayoutError, Point, Result};
use std::collections::HashMap;

/// Index of a pooled line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GuideLineHandle(usize);

impl GuideLineHandle {
    pub fn index(&self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SlotState {
    Free,
    InUse,
}

#[derive(Debug, Clone)]
struct Slot {
    line: LineId,
    state: SlotState,
    segment: Option<(Point, Point)>,
}

#[derive(Debug, Clone)]
pub struct GuidePool<R: GuideRenderer> {
    renderer: R,
    slots: Vec<Slot>,
    free: Vec<GuideLineHandle>,
    active: HashMap<GuideKey, GuideLineHandle>,
    in_use: usize,
    high_water_mark: usize,
}

impl<R: GuideRenderer> GuidePool<R> {
    pub fn new(renderer: R) -> Self {
        Self {
            renderer,
            slots: Vec::new(),
            free: Vec::new(),
            active: HashMap::new(),
            in_use: 0,
            high_water_mark: 0,
        }
    }

    /// Takes a free line, or creates one when the free list is empty.
    ///
    /// The returned handle is always visible.
    pub fn acquire(&mut self) -> GuideLineHandle {
        let handle = match self.free.pop() {
            Some(handle) => {
                tracing::debug!("Reusing guide line {}", handle.0);
                handle
            }
            None => {
                let line = self.renderer.create_line();
                let handle = GuideLineHandle(self.slots.len());
                self.slots.push(Slot {
                    line,
                    state: SlotState::Free,
                    segment: None,
                });
                tracing::debug!("Created guide line {} (renderer line {})", handle.0, line);
                handle
            }
        };

        let slot = &mut self.slots[handle.0];
        slot.state = SlotState::InUse;
        self.renderer.set_visible(slot.line, true);

        self.in_use += 1;
        self.high_water_mark = self.high_water_mark.max(self.in_use);
        handle
    }

    /// Hides a line and puts it back on the free list.
    ///
    /// Releasing a line that is already free does nothing.
    ///
    /// # Errors
    ///
    /// [`LayoutError::StaleHandle`] if the handle did not come from this pool.
    pub fn release(&mut self, handle: GuideLineHandle) -> Result<()> {
        let slot = self
            .slots
            .get_mut(handle.0)
            .ok_or(LayoutError::StaleHandle(handle.0))?;

        if slot.state == SlotState::Free {
            tracing::warn!("Guide line {} released twice; ignoring", handle.0);
            return Ok(());
        }

        slot.state = SlotState::Free;
        slot.segment = None;
        self.renderer.set_visible(slot.line, false);
        self.free.push(handle);
        self.in_use -= 1;
        self.active.retain(|_, bound| *bound != handle);
        Ok(())
    }

    /// Hides and frees every line in use.
    pub fn release_all(&mut self) {
        for index in 0..self.slots.len() {
            let slot = &mut self.slots[index];
            if slot.state == SlotState::InUse {
                slot.state = SlotState::Free;
                slot.segment = None;
                self.renderer.set_visible(slot.line, false);
                self.free.push(GuideLineHandle(index));
            }
        }
        self.in_use = 0;
        self.active.clear();
    }

    /// Shows the guide for `(direction, target)` between two points.
    ///
    /// A guide that is already showing keeps its line and only moves.
    pub fn show_guide(
        &mut self,
        direction: SnapDirection,
        target: BlockId,
        start: Point,
        end: Point,
    ) -> GuideLineHandle {
        let key = GuideKey::new(direction, target);
        let handle = match self.active.get(&key).copied() {
            Some(handle) => handle,
            None => {
                let handle = self.acquire();
                self.active.insert(key, handle);
                handle
            }
        };

        let slot = &mut self.slots[handle.0];
        slot.segment = Some((start, end));
        self.renderer.set_endpoints(slot.line, start, end);
        handle
    }

    /// Hides the guide for `(direction, target)`. Returns `false` if none was showing.
    pub fn hide_guide(&mut self, direction: SnapDirection, target: BlockId) -> bool {
        match self.active.remove(&GuideKey::new(direction, target)) {
            // Active handles always come from this pool, so release cannot fail.
            Some(handle) => self.release(handle).is_ok(),
            None => false,
        }
    }

    /// Hides every guide pointing at `target`. Returns how many were hidden.
    pub fn hide_guides_for(&mut self, target: BlockId) -> usize {
        SnapDirection::ALL
            .into_iter()
            .filter(|&direction| self.hide_guide(direction, target))
            .count()
    }

    pub fn hide_all_guides(&mut self) {
        self.release_all();
    }

    /// Replaces whatever is showing with exactly `guides`.
    pub fn sync(&mut self, guides: &[SnapGuide]) {
        self.release_all();
        for guide in guides {
            self.show_guide(guide.direction, guide.target, guide.start, guide.end);
        }
    }

    /// Number of lines ever created.
    pub fn live_count(&self) -> usize {
        self.slots.len()
    }

    pub fn free_count(&self) -> usize {
        self.free.len()
    }

    pub fn visible_count(&self) -> usize {
        self.in_use
    }

    /// Most lines ever visible at the same time.
    pub fn high_water_mark(&self) -> usize {
        self.high_water_mark
    }

    pub fn is_visible(&self, handle: GuideLineHandle) -> bool {
        self.slots
            .get(handle.0)
            .is_some_and(|slot| slot.state == SlotState::InUse)
    }

    pub fn segment(&self, handle: GuideLineHandle) -> Option<(Point, Point)> {
        self.slots.get(handle.0).and_then(|slot| slot.segment)
    }

    pub fn handle_for(&self, direction: SnapDirection, target: BlockId) -> Option<GuideLineHandle> {
        self.active.get(&GuideKey::new(direction, target)).copied()
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }
}
