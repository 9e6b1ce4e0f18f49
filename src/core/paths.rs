//! Checkout layout for the DS Anywhere repository.
//!
//! All build commands expect to run from the repository root; every path is
//! derived from that root.

use std::env;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Well-known directories of a DS Anywhere checkout, rooted at the directory
/// the tool was invoked from.
#[derive(Debug, Clone)]
pub struct Layout {
    root: PathBuf,
}

impl Layout {
    pub fn from_root(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Layout rooted at the current working directory.
    pub fn discover() -> Result<Self> {
        let cwd = env::current_dir()
            .map_err(|e| Error::internal_io(e.to_string(), Some("resolve cwd".to_string())))?;
        Ok(Self::from_root(cwd))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Emulator core checkout (Emscripten cross-compile target).
    pub fn emulator_root(&self) -> PathBuf {
        self.root.join("wasmelonDS")
    }

    /// CMake build directory inside the emulator checkout.
    pub fn build_root(&self) -> PathBuf {
        self.emulator_root().join("build")
    }

    pub fn frontend_root(&self) -> PathBuf {
        self.root.join("frontend")
    }

    pub fn frontend_src(&self) -> PathBuf {
        self.frontend_root().join("src")
    }

    pub fn frontend_static(&self) -> PathBuf {
        self.frontend_root().join("public").join("static")
    }

    pub fn frontend_dist(&self) -> PathBuf {
        self.frontend_root().join("dist")
    }

    /// Hand-written JS/TS glue layer published alongside the wasm binary.
    pub fn sdk_root(&self) -> PathBuf {
        self.root.join("webmelon-sdk")
    }

    pub fn artifact_root(&self) -> PathBuf {
        self.root.join("action-runner").join("artifacts")
    }

    pub fn artifact_sdk(&self) -> PathBuf {
        self.artifact_root().join("webmelon-sdk")
    }

    pub fn artifact_frontend(&self) -> PathBuf {
        self.artifact_root().join("frontend")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_hang_off_the_root() {
        let layout = Layout::from_root("/repo");
        assert_eq!(layout.emulator_root(), PathBuf::from("/repo/wasmelonDS"));
        assert_eq!(layout.build_root(), PathBuf::from("/repo/wasmelonDS/build"));
        assert_eq!(
            layout.frontend_static(),
            PathBuf::from("/repo/frontend/public/static")
        );
        assert_eq!(layout.sdk_root(), PathBuf::from("/repo/webmelon-sdk"));
        assert_eq!(
            layout.artifact_frontend(),
            PathBuf::from("/repo/action-runner/artifacts/frontend")
        );
    }

    #[test]
    fn discover_uses_cwd() {
        let layout = Layout::discover().unwrap();
        assert_eq!(layout.root(), std::env::current_dir().unwrap());
    }
}
