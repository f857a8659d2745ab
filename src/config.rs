//! Configuration for forms and for the controller.

use std::path::PathBuf;

use crate::geometry::Size;

// ---------------------------------------------------------------------------
// FormConfig
// ---------------------------------------------------------------------------

/// Initial window settings for a form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormConfig {
    pub title: String,
    pub size: Size,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            title: "new_view".to_owned(),
            size: Size::new(300, 400),
        }
    }
}

impl FormConfig {
    /// Create a new default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the title (builder).
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the window size (builder).
    pub fn with_size(mut self, width: i32, height: i32) -> Self {
        self.size = Size::new(width, height);
        self
    }
}

// ---------------------------------------------------------------------------
// AppConfig
// ---------------------------------------------------------------------------

/// Settings for the application controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// SQLite database file. `None` keeps everything in memory.
    pub database_path: Option<PathBuf>,
    /// Title of the login window.
    pub login_title: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_path: None,
            login_title: "Login".to_owned(),
        }
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Persist to a database file (builder).
    pub fn with_database_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.database_path = Some(path.into());
        self
    }

    /// Set the login window title (builder).
    pub fn with_login_title(mut self, title: impl Into<String>) -> Self {
        self.login_title = title.into();
        self
    }
}
