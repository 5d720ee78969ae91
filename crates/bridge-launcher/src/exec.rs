//! Process-image hand-off to the bridge binary.
//!
//! The launcher does not spawn the bridge as a child and babysit it: it
//! replaces its own process image with `execvp` semantics.  The bridge
//! inherits the launcher's PID, its standard streams, and its signal
//! disposition, so from the orchestrator's point of view the container has
//! exactly one process for its whole life and `SIGTERM` reaches the bridge
//! directly — no PID-1 signal forwarding, no zombie reaping.
//!
//! On targets without `exec` the closest equivalent applies: spawn the
//! bridge with inherited streams, wait for it, and exit with its exact
//! status, so the container-visible behavior is unchanged.

use std::process::Command;

use tracing::info;

use crate::error::LaunchError;
use crate::paths::LauncherPaths;

/// Builds the exact invocation the bridge is started with.
///
/// Kept separate from [`hand_off`] so tests can assert the argument vector
/// without replacing their own process image.
pub fn bridge_command(paths: &LauncherPaths) -> Command {
    let mut cmd = Command::new(&paths.bridge_bin);
    cmd.arg("--config").arg(&paths.config);
    cmd
}

/// Replaces the launcher with the bridge binary.
///
/// On success this function never returns — the launcher's code is gone
/// from the process.  A return value therefore always means the hand-off
/// itself failed (bridge binary missing from the image, or not executable),
/// and the caller must abort with a non-zero status.
#[cfg(unix)]
pub fn hand_off(paths: &LauncherPaths) -> LaunchError {
    use std::os::unix::process::CommandExt;

    info!("starting bridge: {}", paths.bridge_bin.display());

    // exec() only returns on failure; on success the bridge now owns this
    // process.
    let source = bridge_command(paths).exec();
    LaunchError::Exec {
        path: paths.bridge_bin.clone(),
        source,
    }
}

/// Spawns the bridge and exits with its exact status (non-Unix fallback for
/// true process replacement).
#[cfg(not(unix))]
pub fn hand_off(paths: &LauncherPaths) -> LaunchError {
    info!("starting bridge: {}", paths.bridge_bin.display());

    match bridge_command(paths).status() {
        // The bridge's exit status becomes the launcher's own, verbatim.
        Ok(status) => std::process::exit(status.code().unwrap_or(1)),
        Err(source) => LaunchError::Exec {
            path: paths.bridge_bin.clone(),
            source,
        },
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
