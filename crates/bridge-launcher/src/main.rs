//! Matrix-WeChat bridge container entrypoint.
//!
//! Runs unconditionally on container start, with no inputs other than the
//! fixed filesystem paths baked into the image (see [`bridge_launcher::paths`]):
//!
//! 1. If `/data/config.yaml` is missing, install the bundled default config,
//!    print edit-and-restart instructions, and exit `0` — a deliberate halt
//!    awaiting operator action, not an error.
//! 2. If it is present, replace this process with
//!    `/usr/bin/matrix-wechat --config /data/config.yaml`.
//!
//! Any failure along the way (unreadable template, unwritable volume,
//! missing bridge binary) aborts with a non-zero status; there is no retry
//! logic.  Fixing the environment and restarting the container is the only
//! recovery path.

use tracing::info;
use tracing_subscriber::EnvFilter;

use bridge_launcher::{ensure_config, exec, Bootstrap, LauncherPaths};

fn main() -> anyhow::Result<()> {
    // Log level comes from RUST_LOG, defaulting to `info` so the three
    // first-run diagnostic lines always reach the container log.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("bridge-launcher v{} starting", env!("CARGO_PKG_VERSION"));

    let paths = LauncherPaths::from_env();

    match ensure_config(&paths)? {
        // Setup incomplete: exit cleanly so the orchestrator does not
        // restart-loop the container while the operator edits the config.
        Bootstrap::DefaultInstalled => Ok(()),

        // hand_off only returns if the process replacement itself failed;
        // on success the bridge binary has taken over this process and the
        // launcher's exit status is never observed.
        Bootstrap::ConfigPresent => Err(exec::hand_off(&paths).into()),
    }
}
