//=========================================================================
// tilewalk — Binary Entry Point
//
// Usage: tilewalk [ASSET_DIR]
//
// ASSET_DIR holds tiles.png, runner.png and textbox_combined.png
// (default: `assets`). Logging is controlled with RUST_LOG.
//
//=========================================================================

use std::process::ExitCode;

use log::{error, info};
use tilewalk::EngineBuilder;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let asset_root = std::env::args().nth(1).unwrap_or_else(|| "assets".to_owned());
    info!("Loading assets from '{}'", asset_root);

    match EngineBuilder::new().with_asset_root(asset_root).build().run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}
