//! # Blockboard
//!
//! The core of a 2D block layout editor:
//! - Automatic placement of new blocks in the first free slot on the canvas
//! - Edge and corner snap guides while a block is dragged
//! - A pooled set of guide lines that are reused rather than recreated
//!
//! ## Architecture
//!
//! Blockboard is organized as a workspace with multiple crates:
//!
//! 1. **blockboard-core** - Geometry (`Point`, `Bounds`) and the `LayoutError` type
//! 2. **blockboard-settings** - `EditorConfig` with JSON/TOML file support
//! 3. **blockboard-designer** - Blocks, placement, snapping, guide pool, editor context
//! 4. **blockboard** - Binary that loads the config and drives a scripted session

use anyhow::Context;
use std::path::Path;

pub use blockboard_designer as designer;
pub use blockboard_settings as settings;

pub use blockboard_core::{Bounds, LayoutError, Point};
pub use blockboard_designer::{
    Block, BlockId, Editor, GuidePool, GuideRenderer, PlacementPlanner, RecordingRenderer,
    SnapDetector, SnapDirection, SnapGuide,
};
pub use blockboard_settings::{default_config_path, EditorConfig, PlacementPolicy};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(true)
        .with_level(true)
        .with_thread_ids(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .context("failed to install tracing subscriber")?;

    Ok(())
}

/// Loads the editor config.
///
/// An explicit `path` must exist. Without one, the per-user config file is
/// used when present and defaults otherwise.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<EditorConfig> {
    match path {
        Some(path) => EditorConfig::load_from_file(path)
            .with_context(|| format!("failed to load config from {}", path.display())),
        None => match default_config_path() {
            Ok(path) => EditorConfig::load_or_default(&path)
                .with_context(|| format!("failed to load config from {}", path.display())),
            Err(err) => {
                tracing::warn!("{}; using default config", err);
                Ok(EditorConfig::default())
            }
        },
    }
}

/// What a scripted session did.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSummary {
    pub blocks: usize,
    /// Most guides visible on any single drag tick
    pub peak_guides: usize,
    /// Guide lines the renderer had to create
    pub lines_created: usize,
}

/// Adds `count` default blocks, drags the last one under the first, and drops it.
///
/// The drag approaches in one-unit steps so guides appear, move and vanish
/// the way they would under a pointer.
pub fn run_session(config: EditorConfig, count: usize) -> anyhow::Result<SessionSummary> {
    let mut editor = Editor::new(config, RecordingRenderer::new())?;

    let mut ids = Vec::with_capacity(count);
    for _ in 0..count {
        match editor.add_default_rectangle() {
            Ok(id) => ids.push(id),
            Err(err) if err.is_placement_error() => {
                tracing::warn!("Stopped adding blocks: {}", err);
                break;
            }
            Err(err) => return Err(err.into()),
        }
    }

    let mut peak_guides = 0;
    if let (Some(&first), Some(&last)) = (ids.first(), ids.last()) {
        if first != last {
            let anchor = editor
                .block(first)
                .map(|b| b.bounds())
                .context("first block vanished")?;
            let (w, h) = (anchor.width(), anchor.height());

            editor.on_drag_start(last)?;
            for step in (0..=3).rev() {
                let x = anchor.min_x + f64::from(step);
                let y = anchor.min_y - 2.0 * h;
                let guides = editor.on_drag_move(last, Bounds::new(x, y, x + w, y + h))?;
                for guide in guides {
                    tracing::info!(
                        "{} guide against block {}: {} -> {}",
                        guide.direction,
                        guide.target,
                        guide.start,
                        guide.end
                    );
                }
                peak_guides = peak_guides.max(guides.len());
            }
            editor.on_drag_end(last);
        }
    }

    Ok(SessionSummary {
        blocks: editor.block_count(),
        peak_guides,
        lines_created: editor.renderer().created_count(),
    })
}
