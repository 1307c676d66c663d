//! Per-server application context.
//!
//! Owned by the composition root of each binary and shared read-only
//! across request handlers. Holds the parsed template set and the
//! filesystem locations the handlers touch.

use crate::templates::Templates;
use std::path::PathBuf;

/// Read-only state shared by all handlers of one server.
pub struct AppContext {
    /// Templates parsed at startup.
    pub templates: Templates,
    /// Directory uploaded files are written into.
    pub upload_dir: PathBuf,
    /// Directory static assets are served from.
    pub assets_dir: PathBuf,
}

impl AppContext {
    pub fn new(templates: Templates) -> Self {
        Self {
            templates,
            upload_dir: PathBuf::from("files"),
            assets_dir: PathBuf::from("assets"),
        }
    }

    #[must_use]
    pub fn with_upload_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.upload_dir = dir.into();
        self
    }

    #[must_use]
    pub fn with_assets_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.assets_dir = dir.into();
        self
    }
}
