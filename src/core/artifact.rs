//! Artifact staging for the CI action runner.

use crate::output;
use crate::paths::Layout;
use crate::utils::fs;

/// Stage the built SDK and frontend dist into the action-runner artifact
/// directory, replacing any previous staging.
pub fn stage(layout: &Layout) -> bool {
    let sdk_root = layout.sdk_root();
    let dist_root = layout.frontend_dist();

    if !sdk_root.exists() || !dist_root.exists() {
        output::error(
            "Looks like there doesn't appear to be a build to prepare artifacts for. \
             Are you sure you have built yet?",
        );
        return false;
    }

    let artifact_root = layout.artifact_root();
    if artifact_root.exists() {
        output::warn("Deleting old artifact root...");
        if let Err(err) = fs::remove_tree(&artifact_root, "remove artifact root") {
            output::error(&format!("Failed to delete old artifacts: {}", err));
            return false;
        }
    }

    let staging = [
        (sdk_root, layout.artifact_sdk()),
        (dist_root, layout.artifact_frontend()),
    ];
    for (from, to) in staging {
        crate::log_status!("artifact", "Staging {} -> {}", from.display(), to.display());
        if let Err(err) = fs::copy_tree(&from, &to, "stage artifact") {
            output::error(&format!("Failed to stage {}: {}", from.display(), err));
            return false;
        }
    }

    output::info("Artifacts prepared successfully!");
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs as stdfs;

    fn built_checkout() -> (tempfile::TempDir, Layout) {
        let dir = tempfile::tempdir().unwrap();
        let layout = Layout::from_root(dir.path());
        stdfs::create_dir_all(layout.sdk_root()).unwrap();
        stdfs::create_dir_all(layout.frontend_dist()).unwrap();
        stdfs::write(layout.sdk_root().join("webmelon.js"), "js").unwrap();
        stdfs::write(layout.frontend_dist().join("index.html"), "html").unwrap();
        (dir, layout)
    }

    #[test]
    fn fails_without_a_build() {
        let dir = tempfile::tempdir().unwrap();
        let layout = Layout::from_root(dir.path());
        assert!(!stage(&layout));
        assert!(!layout.artifact_root().exists());
    }

    #[test]
    fn stages_sdk_and_dist_trees() {
        let (_dir, layout) = built_checkout();
        assert!(stage(&layout));
        assert!(layout.artifact_sdk().join("webmelon.js").exists());
        assert!(layout.artifact_frontend().join("index.html").exists());
    }

    #[test]
    fn replaces_previous_staging() {
        let (_dir, layout) = built_checkout();
        stdfs::create_dir_all(layout.artifact_root()).unwrap();
        stdfs::write(layout.artifact_root().join("stale.txt"), "old").unwrap();

        assert!(stage(&layout));
        assert!(!layout.artifact_root().join("stale.txt").exists());
        assert!(layout.artifact_sdk().join("webmelon.js").exists());
    }
}
