//! Editor context: the single owner of blocks, selection and guide lines.
//!
//! Every inbound event (add, drag, delete, transform) is a method on
//! [`Editor`]. Each call runs to completion before returning, so by the time
//! `on_drag_move` returns the guide pool already reflects the new position.

use crate::block::{Block, BlockId, Orientation};
use crate::block_store::BlockStore;
use crate::guide_pool::GuidePool;
use crate::guide_renderer::GuideRenderer;
use crate::placement::PlacementPlanner;
use crate::selection_manager::SelectionManager;
use crate::snap::{SnapDetector, SnapGuide};
use blockboard_core::{Bounds, LayoutError, Point, Result};
use blockboard_settings::EditorConfig;

/// State of the drag in progress.
#[derive(Debug, Clone, PartialEq)]
pub struct DragSession {
    pub block: BlockId,
    /// Drag-move ticks seen so far
    pub ticks: u64,
    /// Stationary blocks the dragged block currently overlaps
    pub overlapping: Vec<BlockId>,
}

impl DragSession {
    fn new(block: BlockId) -> Self {
        Self {
            block,
            ticks: 0,
            overlapping: Vec::new(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Editor<R: GuideRenderer> {
    config: EditorConfig,
    store: BlockStore,
    selection: SelectionManager,
    planner: PlacementPlanner,
    detector: SnapDetector,
    guides: GuidePool<R>,
    drag: Option<DragSession>,
    current_guides: Vec<SnapGuide>,
}

impl<R: GuideRenderer> Editor<R> {
    /// Creates an empty editor drawing guides through `renderer`.
    ///
    /// # Errors
    ///
    /// [`LayoutError::InvalidConfig`] if `config` fails validation.
    pub fn new(config: EditorConfig, renderer: R) -> Result<Self> {
        config
            .validate()
            .map_err(|e| LayoutError::InvalidConfig(e.to_string()))?;

        Ok(Self {
            planner: PlacementPlanner::from_config(&config)?,
            detector: SnapDetector::from_config(&config),
            config,
            store: BlockStore::new(),
            selection: SelectionManager::new(),
            guides: GuidePool::new(renderer),
            drag: None,
            current_guides: Vec::new(),
        })
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    // ---------------------------------------------------------------------
    // Blocks
    // ---------------------------------------------------------------------

    /// Places a new `width` x `height` block in the first free slot.
    ///
    /// On error the store is unchanged.
    pub fn on_add_rectangle(&mut self, width: f64, height: f64) -> Result<BlockId> {
        let existing = self.store.all_bounds();
        let placement = self.planner.place(width, height, &existing)?;

        let id = self.store.generate_id();
        self.store.insert(Block::new(id, placement.center(), width, height));
        tracing::info!(
            "Added block {} ({}x{}) at {}",
            id,
            width,
            height,
            placement.anchor
        );
        Ok(id)
    }

    /// Adds a block with the configured default size.
    pub fn add_default_rectangle(&mut self) -> Result<BlockId> {
        let width = self.config.placement.default_block_width;
        let height = self.config.placement.default_block_height;
        self.on_add_rectangle(width, height)
    }

    /// Deletes the given blocks; unknown ids are skipped.
    ///
    /// Returns the ids that were actually removed.
    pub fn delete(&mut self, ids: &[BlockId]) -> Vec<BlockId> {
        let mut removed = Vec::new();
        for &id in ids {
            if self.store.remove(id).is_none() {
                tracing::debug!("Delete skipped unknown block {}", id);
                continue;
            }
            self.selection.forget(&self.store, id);
            self.forget_guides_for(id);
            removed.push(id);
        }

        let dragged_removed = self
            .drag
            .as_ref()
            .is_some_and(|d| removed.contains(&d.block));
        if dragged_removed {
            self.end_drag_session();
        }

        if !removed.is_empty() {
            tracing::info!("Deleted {} block(s): {:?}", removed.len(), removed);
        }
        removed
    }

    /// Deletes every selected block.
    pub fn on_delete_selected(&mut self) -> Vec<BlockId> {
        let ids = self.selection.selected_ids(&self.store);
        let removed = self.delete(&ids);
        self.selection.deselect_all(&mut self.store);
        removed
    }

    pub fn block(&self, id: BlockId) -> Option<&Block> {
        self.store.get(id)
    }

    /// Blocks in draw order.
    pub fn blocks(&self) -> impl Iterator<Item = &Block> {
        self.store.iter()
    }

    pub fn block_count(&self) -> usize {
        self.store.len()
    }

    /// Topmost block under `point`, if any.
    pub fn block_at(&self, point: Point) -> Option<BlockId> {
        self.store
            .iter()
            .rev()
            .find(|b| b.contains_point(point))
            .map(|b| b.id)
    }

    // ---------------------------------------------------------------------
    // Dragging
    // ---------------------------------------------------------------------

    pub fn on_drag_start(&mut self, id: BlockId) -> Result<()> {
        if !self.store.contains(id) {
            return Err(LayoutError::UnknownBlock(id));
        }
        if self.drag.as_ref().is_some_and(|d| d.block != id) {
            self.end_drag_session();
        }
        if let Some(block) = self.store.get_mut(id) {
            block.dragging = true;
        }
        self.drag = Some(DragSession::new(id));
        tracing::debug!("Drag started on block {}", id);
        Ok(())
    }

    /// Moves block `id` to `new_bounds` and rebuilds the snap guides.
    ///
    /// Guides are recomputed from scratch against every other block; the
    /// returned slice is exactly what the guide pool is now showing. A move
    /// without a preceding `on_drag_start` starts the drag implicitly.
    pub fn on_drag_move(&mut self, id: BlockId, new_bounds: Bounds) -> Result<&[SnapGuide]> {
        if !self.store.contains(id) {
            return Err(LayoutError::UnknownBlock(id));
        }
        if self.drag.as_ref().map(|d| d.block) != Some(id) {
            self.on_drag_start(id)?;
        }

        let dragged = match self.store.get_mut(id) {
            Some(block) => {
                block.move_to(&new_bounds);
                block.bounds()
            }
            None => return Err(LayoutError::UnknownBlock(id)),
        };

        let stationary = self.store.bounds_except(id);
        let guides = self.detector.compute_guides(&dragged, &stationary);
        self.guides.sync(&guides);
        self.current_guides = guides;

        let overlapping: Vec<BlockId> = stationary
            .iter()
            .filter(|(_, b)| b.intersects(&dragged))
            .map(|(other, _)| *other)
            .collect();
        if let Some(drag) = self.drag.as_mut() {
            drag.ticks += 1;
            drag.overlapping = overlapping;
        }

        Ok(&self.current_guides)
    }

    /// Ends the drag and hides every guide, whatever the drop position.
    pub fn on_drag_end(&mut self, id: BlockId) {
        match &self.drag {
            Some(drag) if drag.block != id => {
                tracing::warn!(
                    "Drag end for block {} while block {} is dragged",
                    id,
                    drag.block
                );
            }
            None => tracing::debug!("Drag end for block {} without a drag", id),
            _ => {}
        }
        if let Some(block) = self.store.get_mut(id) {
            block.dragging = false;
        }
        self.end_drag_session();
    }

    pub fn drag_session(&self) -> Option<&DragSession> {
        self.drag.as_ref()
    }

    /// Stationary blocks overlapped by the dragged block at the last tick.
    pub fn overlapping(&self) -> &[BlockId] {
        self.drag
            .as_ref()
            .map(|d| d.overlapping.as_slice())
            .unwrap_or(&[])
    }

    /// Guides showing after the last drag tick.
    pub fn active_guides(&self) -> &[SnapGuide] {
        &self.current_guides
    }

    pub fn guide_pool(&self) -> &GuidePool<R> {
        &self.guides
    }

    pub fn renderer(&self) -> &R {
        self.guides.renderer()
    }

    pub fn set_snapping_enabled(&mut self, enabled: bool) {
        self.detector.set_enabled(enabled);
        if !enabled {
            self.current_guides.clear();
            self.guides.hide_all_guides();
        }
    }

    fn end_drag_session(&mut self) {
        if let Some(drag) = self.drag.take() {
            if let Some(block) = self.store.get_mut(drag.block) {
                block.dragging = false;
            }
            tracing::debug!(
                "Drag on block {} ended after {} ticks",
                drag.block,
                drag.ticks
            );
        }
        self.current_guides.clear();
        self.guides.hide_all_guides();
    }

    fn forget_guides_for(&mut self, id: BlockId) {
        self.current_guides.retain(|g| g.target != id);
        self.guides.hide_guides_for(id);
    }

    // ---------------------------------------------------------------------
    // Selection and transforms
    // ---------------------------------------------------------------------

    /// Flips a block's selection membership; returns whether it is now selected.
    pub fn toggle_selection(&mut self, id: BlockId) -> Result<bool> {
        self.selection
            .toggle(&mut self.store, id)
            .ok_or(LayoutError::UnknownBlock(id))
    }

    /// Selects every block overlapping `area`.
    pub fn select_in_rect(&mut self, area: &Bounds, multi: bool) {
        self.selection.select_in_rect(&mut self.store, area, multi);
    }

    pub fn select_all(&mut self) {
        self.selection.select_all(&mut self.store);
    }

    pub fn clear_selection(&mut self) {
        self.selection.deselect_all(&mut self.store);
    }

    pub fn selected_ids(&self) -> Vec<BlockId> {
        self.selection.selected_ids(&self.store)
    }

    pub fn primary_selection(&self) -> Option<BlockId> {
        self.selection.selected_id()
    }

    /// Toggles a block between normal and vertical orientation.
    pub fn toggle_orientation(&mut self, id: BlockId) -> Result<Orientation> {
        let block = self
            .store
            .get_mut(id)
            .ok_or(LayoutError::UnknownBlock(id))?;
        Ok(block.toggle_orientation())
    }

    /// Rotates each selected block by π/4. Returns how many were rotated.
    pub fn rotate_selected(&mut self) -> usize {
        let mut count = 0;
        for block in self.store.iter_mut().filter(|b| b.selected) {
            block.rotate_step();
            count += 1;
        }
        count
    }

    /// Sets the absolute scale of each selected block.
    ///
    /// # Errors
    ///
    /// [`LayoutError::InvalidScale`] unless `factor` is finite and positive;
    /// no block is touched in that case.
    pub fn scale_selected(&mut self, factor: f64) -> Result<usize> {
        if !(factor.is_finite() && factor > 0.0) {
            return Err(LayoutError::InvalidScale(factor));
        }
        let mut count = 0;
        for block in self.store.iter_mut().filter(|b| b.selected) {
            block.scale = factor;
            count += 1;
        }
        Ok(count)
    }
}
