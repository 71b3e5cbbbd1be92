use crate::block::BlockId;
use crate::block_store::BlockStore;
use blockboard_core::Bounds;

/// Manages block selection state and selection operations.
///
/// `SelectionManager` is responsible for:
/// - Tracking which block is the "primary" selection
/// - Toggling individual blocks in and out of the selection (Alt+click)
/// - Rectangle-based selection (drag-select)
/// - Keeping the primary selection valid as blocks are deleted
///
/// # Selection Model
///
/// - **Primary Selection**: One block is designated as the "primary" selection (stored in `selected_id`)
/// - **Multiple Selection**: Any number of blocks can have their `selected` flag set to `true`
///
/// The manager does not own blocks; it flips `selected` flags on the `BlockStore`
/// it is handed.
#[derive(Debug, Clone, Default)]
pub struct SelectionManager {
    /// The ID of the primary selected block, if any
    selected_id: Option<BlockId>,
}

impl SelectionManager {
    /// Creates a new `SelectionManager` with no selection.
    ///
    /// # Examples
    ///
    /// ```
    /// use blockboard_designer::selection_manager::SelectionManager;
    ///
    /// let manager = SelectionManager::new();
    /// assert_eq!(manager.selected_id(), None);
    /// ```
    pub fn new() -> Self {
        Self { selected_id: None }
    }

    /// Returns the ID of the primary selected block.
    pub fn selected_id(&self) -> Option<BlockId> {
        self.selected_id
    }

    /// Deselects all blocks and clears the primary selection.
    pub fn deselect_all(&mut self, store: &mut BlockStore) {
        for block in store.iter_mut() {
            block.selected = false;
        }
        self.selected_id = None;
    }

    /// Selects every block; the topmost becomes primary.
    pub fn select_all(&mut self, store: &mut BlockStore) {
        for block in store.iter_mut() {
            block.selected = true;
        }
        self.selected_id = store.iter().last().map(|b| b.id);
    }

    /// Flips one block's membership in the selection without touching others.
    ///
    /// # Returns
    ///
    /// `Some(true)` if the block is now selected, `Some(false)` if it was
    /// deselected, `None` if no such block exists.
    pub fn toggle(&mut self, store: &mut BlockStore, id: BlockId) -> Option<bool> {
        let block = store.get_mut(id)?;
        block.selected = !block.selected;
        let now_selected = block.selected;

        if now_selected {
            self.selected_id = Some(id);
        } else if self.selected_id == Some(id) {
            // Fall back to any other selected block
            self.selected_id = store.iter().find(|b| b.selected).map(|b| b.id);
        }
        Some(now_selected)
    }

    /// Selects all blocks whose bounds overlap `area`.
    ///
    /// If `multi` is `false` the previous selection is replaced.
    pub fn select_in_rect(&mut self, store: &mut BlockStore, area: &Bounds, multi: bool) {
        if !multi {
            self.deselect_all(store);
        }

        for block in store.iter_mut() {
            if block.bounds().intersects(area) {
                block.selected = true;
                if self.selected_id.is_none() {
                    self.selected_id = Some(block.id);
                }
            }
        }
    }

    /// Ids of all selected blocks in draw order.
    pub fn selected_ids(&self, store: &BlockStore) -> Vec<BlockId> {
        store.iter().filter(|b| b.selected).map(|b| b.id).collect()
    }

    /// Returns the number of currently selected blocks.
    pub fn selected_count(&self, store: &BlockStore) -> usize {
        store.iter().filter(|b| b.selected).count()
    }

    /// Forgets `id` if it was the primary selection (e.g. after a delete).
    pub fn forget(&mut self, store: &BlockStore, id: BlockId) {
        if self.selected_id == Some(id) {
            self.selected_id = store.iter().find(|b| b.selected && b.id != id).map(|b| b.id);
        }
    }
}
