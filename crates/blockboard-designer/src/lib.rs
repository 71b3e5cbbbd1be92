//! # Blockboard Designer
//!
//! The spatial layout and snapping engine behind the block editor.
//!
//! ## Core Components
//!
//! - **Placement**: Row-major scan for a free, non-overlapping slot
//! - **Snapping**: Edge and corner alignment guides between a dragged block
//!   and every stationary block
//! - **Guide Pool**: Recycled guide lines, shown and hidden without churn
//! - **Selection**: Toggle, marquee and bulk removal
//! - **Editor**: The context object that owns all of the above
//!
//! ## Architecture
//!
//! ```text
//! Editor (event entry points)
//!   ├── BlockStore (blocks in draw order)
//!   ├── SelectionManager
//!   ├── PlacementPlanner (add)
//!   ├── SnapDetector (drag move)
//!   └── GuidePool ──▶ GuideRenderer (external scene)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use blockboard_designer::{Bounds, Editor, EditorConfig, RecordingRenderer};
//!
//! let mut editor = Editor::new(EditorConfig::default(), RecordingRenderer::new()).unwrap();
//! let a = editor.on_add_rectangle(100.0, 50.0).unwrap();
//! let b = editor.on_add_rectangle(100.0, 50.0).unwrap();
//!
//! // Drag `b` so its left edge lines up with `a`.
//! let guides = editor
//!     .on_drag_move(b, Bounds::new(-400.0, 100.0, -300.0, 150.0))
//!     .unwrap();
//! assert!(!guides.is_empty());
//!
//! editor.on_drag_end(b);
//! assert_eq!(editor.guide_pool().visible_count(), 0);
//! # let _ = a;
//! ```

pub mod block;
pub mod block_store;
pub mod editor;
pub mod guide_pool;
pub mod guide_renderer;
pub mod placement;
pub mod selection_manager;
pub mod snap;

pub use block::{Block, BlockId, Orientation};
pub use block_store::BlockStore;
pub use editor::{DragSession, Editor};
pub use guide_pool::{GuideLineHandle, GuidePool};
pub use guide_renderer::{GuideRenderer, LineId, RecordingRenderer, RenderCall, RenderedLine};
pub use placement::{Placement, PlacementPlanner, MAX_UNBOUNDED_ROWS};
pub use selection_manager::SelectionManager;
pub use snap::{compute_guides, GuideKey, SnapDetector, SnapDirection, SnapGuide, DEFAULT_SNAP_DISTANCE};

pub use blockboard_core::{Bounds, LayoutError, Point, Result};
pub use blockboard_settings::{EditorConfig, PlacementPolicy};
