//! Storage for the blocks on the canvas, kept in draw order.

use crate::block::{Block, BlockId};
use blockboard_core::Bounds;

#[derive(Debug, Clone)]
pub struct BlockStore {
    blocks: Vec<Block>,
    next_id: BlockId,
}

impl Default for BlockStore {
    fn default() -> Self {
        Self::new()
    }
}

impl BlockStore {
    pub fn new() -> Self {
        Self {
            blocks: Vec::new(),
            next_id: 1,
        }
    }

    /// Allocates the next id. Ids are monotonic and never handed out twice.
    pub fn generate_id(&mut self) -> BlockId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Appends a block on top of the draw order.
    pub fn insert(&mut self, block: Block) {
        if block.id >= self.next_id {
            self.next_id = block.id + 1;
        }
        self.blocks.retain(|b| b.id != block.id);
        self.blocks.push(block);
    }

    pub fn remove(&mut self, id: BlockId) -> Option<Block> {
        let index = self.blocks.iter().position(|b| b.id == id)?;
        Some(self.blocks.remove(index))
    }

    pub fn get(&self, id: BlockId) -> Option<&Block> {
        self.blocks.iter().find(|b| b.id == id)
    }

    pub fn get_mut(&mut self, id: BlockId) -> Option<&mut Block> {
        self.blocks.iter_mut().find(|b| b.id == id)
    }

    pub fn contains(&self, id: BlockId) -> bool {
        self.get(id).is_some()
    }

    /// Iterates blocks bottom-to-top.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Block> {
        self.blocks.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Block> {
        self.blocks.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Freshly computed bounds of every block.
    pub fn all_bounds(&self) -> Vec<Bounds> {
        self.blocks.iter().map(Block::bounds).collect()
    }

    /// Freshly computed bounds of every block except `exclude`, tagged with ids.
    pub fn bounds_except(&self, exclude: BlockId) -> Vec<(BlockId, Bounds)> {
        self.blocks
            .iter()
            .filter(|b| b.id != exclude)
            .map(|b| (b.id, b.bounds()))
            .collect()
    }
}
