//! Typed launcher failures.
//!
//! The taxonomy is deliberately small: every failure here is terminal at the
//! container level.  There is no retry and no fallback — the operator fixes
//! the environment (permissions, mount, image) and restarts the container.
//! Note what is *not* here: a missing runtime config is a normal first-run
//! condition handled by [`crate::bootstrap::ensure_config`], not an error.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A terminal launcher failure, surfaced to the orchestrator as a non-zero
/// exit status.
#[derive(Debug, Error)]
pub enum LaunchError {
    /// The bundled template could not be read.  The deployment image is
    /// broken or the template path override points nowhere.
    #[error("cannot read config template at {path}: {source}")]
    TemplateRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The default config could not be written to the persistent volume
    /// (unwritable mount, missing permissions, disk full).
    #[error("cannot install default config at {path}: {source}")]
    ConfigInstall {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The bridge binary could not replace the launcher's process image
    /// (missing from the image or not executable).
    #[error("cannot hand off to bridge binary {path}: {source}")]
    Exec {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

// ── Tests ─────────────────────────────────────────────────────────────────────
