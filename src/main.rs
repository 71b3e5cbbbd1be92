use blockboard::{init_logging, load_config, run_session, BUILD_DATE, VERSION};
use std::path::PathBuf;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    init_logging()?;
    tracing::info!("Blockboard {} (built {})", VERSION, BUILD_DATE);

    let config_path = std::env::args_os().nth(1).map(PathBuf::from);
    let config = load_config(config_path.as_deref())?;

    let summary = run_session(config, 5)?;
    tracing::info!(
        "Session finished: {} blocks, at most {} guides, {} guide lines created",
        summary.blocks,
        summary.peak_guides,
        summary.lines_created
    );

    Ok(())
}
