//! Fixed filesystem locations used by the launcher.
//!
//! The launcher deliberately takes no command-line flags: the three paths it
//! cares about are properties of the deployment image, baked in at build
//! time, not per-invocation options.  Each path can still be relocated
//! through an environment variable — image variants that install the bridge
//! elsewhere set these in their Dockerfile, and the black-box tests use them
//! to point the launcher at a scratch directory.  A production container
//! runs with all three unset.
//!
//! | Artifact        | Default                                  | Override                |
//! |-----------------|------------------------------------------|-------------------------|
//! | Runtime config  | `/data/config.yaml`                      | `WECHAT_BRIDGE_CONFIG`  |
//! | Template config | `/opt/matrix-wechat/example-config.yaml` | `WECHAT_BRIDGE_TEMPLATE`|
//! | Bridge binary   | `/usr/bin/matrix-wechat`                 | `WECHAT_BRIDGE_BIN`     |

use std::env;
use std::path::PathBuf;

/// Default location of the operator-facing config on the persistent volume.
pub const DEFAULT_CONFIG_PATH: &str = "/data/config.yaml";

/// Default location of the bundled template inside the deployment image.
pub const DEFAULT_TEMPLATE_PATH: &str = "/opt/matrix-wechat/example-config.yaml";

/// Default location of the bridge binary inside the deployment image.
pub const DEFAULT_BRIDGE_BIN: &str = "/usr/bin/matrix-wechat";

/// Environment variable overriding [`DEFAULT_CONFIG_PATH`].
pub const CONFIG_ENV: &str = "WECHAT_BRIDGE_CONFIG";

/// Environment variable overriding [`DEFAULT_TEMPLATE_PATH`].
pub const TEMPLATE_ENV: &str = "WECHAT_BRIDGE_TEMPLATE";

/// Environment variable overriding [`DEFAULT_BRIDGE_BIN`].
pub const BRIDGE_BIN_ENV: &str = "WECHAT_BRIDGE_BIN";

/// The three filesystem locations the launcher operates on.
///
/// This is a plain data struct with no I/O of its own; construct it once at
/// startup (via [`LauncherPaths::from_env`] in the binary, or literally in
/// tests) and pass it by reference to the bootstrap and hand-off steps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LauncherPaths {
    /// The operator-facing config file on the persistent volume.
    pub config: PathBuf,
    /// The read-only default config shipped with the image.
    pub template: PathBuf,
    /// The bridge binary the launcher hands control to.
    pub bridge_bin: PathBuf,
}

impl Default for LauncherPaths {
    /// Returns the fixed production paths, ignoring the environment.
    fn default() -> Self {
        Self {
            config: PathBuf::from(DEFAULT_CONFIG_PATH),
            template: PathBuf::from(DEFAULT_TEMPLATE_PATH),
            bridge_bin: PathBuf::from(DEFAULT_BRIDGE_BIN),
        }
    }
}

impl LauncherPaths {
    /// Resolves the launcher paths, applying any environment overrides on
    /// top of the baked-in defaults.
    pub fn from_env() -> Self {
        Self {
            config: env_path(CONFIG_ENV, DEFAULT_CONFIG_PATH),
            template: env_path(TEMPLATE_ENV, DEFAULT_TEMPLATE_PATH),
            bridge_bin: env_path(BRIDGE_BIN_ENV, DEFAULT_BRIDGE_BIN),
        }
    }
}

/// Reads `var` from the environment, falling back to `default` when the
/// variable is unset.  An empty value counts as unset so that
/// `WECHAT_BRIDGE_CONFIG= bridge-launcher` behaves like the plain binary.
fn env_path(var: &str, default: &str) -> PathBuf {
    match env::var_os(var) {
        Some(v) if !v.is_empty() => PathBuf::from(v),
        _ => PathBuf::from(default),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
