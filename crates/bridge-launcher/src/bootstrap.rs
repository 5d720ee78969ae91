//! First-run config provisioning.
//!
//! [`ensure_config`] is the "check → copy" half of the launcher.  On every
//! container start it answers one question: is there a config on the
//! persistent volume?  If yes, it does nothing and reports
//! [`Bootstrap::ConfigPresent`].  If no, it installs the bundled template
//! byte-for-byte, tells the operator what happened and what to do next, and
//! reports [`Bootstrap::DefaultInstalled`] — the binary then exits with
//! status zero, because "setup incomplete, awaiting operator" is not a
//! failure and must not crash-loop the container.
//!
//! The copy is opaque: the template is read and written as raw bytes, never
//! parsed.  Validating the config is the bridge's job, and a just-installed
//! default is explicitly *not* guaranteed valid for this deployment — it is
//! a starting point the operator has to review.

use std::fs;

use tracing::{info, warn};

use crate::error::LaunchError;
use crate::paths::LauncherPaths;

/// Outcome of the provisioning step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bootstrap {
    /// The runtime config already exists; proceed to the hand-off.
    ConfigPresent,
    /// A default config was just installed; halt and await operator edits.
    DefaultInstalled,
}

/// Guarantees a config file exists at the runtime path.
///
/// If the file is already there it is left untouched, whatever its content —
/// the launcher never rewrites an operator's config.  Otherwise the bundled
/// template is copied over byte-for-byte and three diagnostic lines are
/// emitted so the container log explains the clean early exit.
///
/// # Errors
///
/// - [`LaunchError::TemplateRead`] if the bundled template cannot be read
///   (broken deployment image).
/// - [`LaunchError::ConfigInstall`] if the runtime path cannot be written
///   (unwritable mount, missing permissions, disk full).
///
/// Any error is terminal: no step is retried and no partial state is
/// cleaned up beyond what the failed syscall left behind.
pub fn ensure_config(paths: &LauncherPaths) -> Result<Bootstrap, LaunchError> {
    if paths.config.exists() {
        return Ok(Bootstrap::ConfigPresent);
    }

    info!("no runtime config found at {}", paths.config.display());

    let template = fs::read(&paths.template).map_err(|source| LaunchError::TemplateRead {
        path: paths.template.clone(),
        source,
    })?;

    // The /data mount normally exists already; this covers relocated
    // layouts where the config lives in a fresh subdirectory.
    if let Some(dir) = paths.config.parent() {
        fs::create_dir_all(dir).map_err(|source| LaunchError::ConfigInstall {
            path: dir.to_path_buf(),
            source,
        })?;
    }

    fs::write(&paths.config, template).map_err(|source| LaunchError::ConfigInstall {
        path: paths.config.clone(),
        source,
    })?;

    info!("installed default config from bundled template");
    warn!(
        "edit {} and restart the container to start the bridge",
        paths.config.display()
    );

    Ok(Bootstrap::DefaultInstalled)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use tempfile::TempDir;

    /// Builds a scratch deployment: a template file with `content`, a data
    /// directory, and a `LauncherPaths` pointing into the scratch dir.
    fn scratch(content: &[u8]) -> (TempDir, LauncherPaths) {
        let dir = TempDir::new().expect("tempdir");
        let template = dir.path().join("example-config.yaml");
        fs::write(&template, content).expect("write template");

        let paths = LauncherPaths {
            config: dir.path().join("data").join("config.yaml"),
            template,
            bridge_bin: dir.path().join("matrix-wechat"),
        };
        (dir, paths)
    }

    fn read(path: &Path) -> Vec<u8> {
        fs::read(path).expect("read")
    }

    #[test]
    fn test_first_run_installs_byte_identical_copy() {
        // Arrange
        let template_bytes = b"homeserver:\n  address: https://example.com\n";
        let (_dir, paths) = scratch(template_bytes);

        // Act
        let outcome = ensure_config(&paths).expect("bootstrap");

        // Assert
        assert_eq!(outcome, Bootstrap::DefaultInstalled);
        assert_eq!(read(&paths.config), template_bytes);
    }

    #[test]
    fn test_existing_config_is_left_untouched() {
        // Arrange — an operator-customized config already on the volume.
        let (_dir, paths) = scratch(b"template contents");
        fs::create_dir_all(paths.config.parent().unwrap()).unwrap();
        fs::write(&paths.config, b"operator edits, not the template").unwrap();

        // Act
        let outcome = ensure_config(&paths).expect("bootstrap");

        // Assert
        assert_eq!(outcome, Bootstrap::ConfigPresent);
        assert_eq!(read(&paths.config), b"operator edits, not the template");
    }

    #[test]
    fn test_second_run_takes_the_present_branch() {
        // Arrange
        let (_dir, paths) = scratch(b"v1 template");

        // Act — first run copies, then the template changes (image upgrade),
        // then a second run happens.
        assert_eq!(ensure_config(&paths).unwrap(), Bootstrap::DefaultInstalled);
        fs::write(&paths.template, b"v2 template").unwrap();
        let second = ensure_config(&paths).unwrap();

        // Assert — the installed file is never overwritten.
        assert_eq!(second, Bootstrap::ConfigPresent);
        assert_eq!(read(&paths.config), b"v1 template");
    }

    #[test]
    fn test_template_is_never_modified() {
        // Arrange
        let template_bytes = b"immutable template";
        let (_dir, paths) = scratch(template_bytes);

        // Act — both branches.
        ensure_config(&paths).unwrap();
        ensure_config(&paths).unwrap();

        // Assert
        assert_eq!(read(&paths.template), template_bytes);
    }

    #[test]
    fn test_missing_template_fails_with_template_read() {
        // Arrange
        let (_dir, mut paths) = scratch(b"x");
        paths.template = paths.template.with_file_name("nonexistent.yaml");

        // Act
        let err = ensure_config(&paths).unwrap_err();

        // Assert
        assert!(matches!(err, LaunchError::TemplateRead { .. }));
        // Nothing was installed.
        assert!(!paths.config.exists());
    }

    #[test]
    fn test_unwritable_target_fails_with_config_install() {
        // Arrange — the config's parent "directory" is actually a file, so
        // create_dir_all fails the way an unwritable mount would.
        let (dir, mut paths) = scratch(b"x");
        let blocker = dir.path().join("data");
        fs::write(&blocker, b"not a directory").unwrap();
        paths.config = blocker.join("config.yaml");

        // Act
        let err = ensure_config(&paths).unwrap_err();

        // Assert
        assert!(matches!(err, LaunchError::ConfigInstall { .. }));
    }
}
