//! bridge-launcher library crate.
//!
//! This crate implements the container entrypoint for the Matrix-WeChat
//! bridge.  Its entire job is a single linear decision made once per
//! container start:
//!
//! ```text
//! container start
//!       │
//!       ▼
//! does /data/config.yaml exist?
//!       │
//!   no ─┼─ yes
//!   │        │
//!   ▼        ▼
//! copy     exec /usr/bin/matrix-wechat --config /data/config.yaml
//! template   (process image replaced; the launcher ceases to exist)
//! to /data
//! print instructions
//! exit 0  (operator edits the config and restarts the container)
//! ```
//!
//! # Module layout
//!
//! - [`paths`] — the three fixed filesystem locations and their
//!   environment-variable relocation seam.
//! - [`bootstrap`] — the existence check and first-run template copy.
//! - [`exec`] — the hand-off to the bridge binary (process replacement).
//! - [`error`] — the typed failure taxonomy shared by the above.
//!
//! # Why a separate launcher process?
//!
//! The bridge expects its configuration on a persistent volume, but a fresh
//! volume is empty.  Starting the bridge against a missing config would just
//! crash-loop the container.  Instead the launcher installs a commented
//! default config on first run and halts cleanly, so the operator gets a
//! meaningful file to edit and an explicit instruction, and the orchestrator
//! does not treat the stop as a failure.

/// Fixed filesystem locations (runtime config, template, bridge binary).
pub mod paths;

/// First-run config provisioning.
pub mod bootstrap;

/// Process-image hand-off to the bridge binary.
pub mod exec;

/// Typed launcher failures.
pub mod error;

// Re-export the handful of types callers (the binary and the integration
// tests) actually need, so they can write `bridge_launcher::LauncherPaths`.
pub use bootstrap::{ensure_config, Bootstrap};
pub use error::LaunchError;
pub use paths::LauncherPaths;
