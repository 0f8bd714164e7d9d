use std::path::PathBuf;

/// Filesystem layout for the application data
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Directory holding the database and log files
    pub data_dir: PathBuf,

    /// Database file name, split between debug and release builds
    pub db_filename: String,
}

impl StorageConfig {
    /// Data directory under the platform user-data location
    /// (~/.local/share/greensteps/ on Linux)
    pub fn from_platform_dirs() -> Self {
        let base = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
        Self::with_data_dir(base.join("greensteps"))
    }

    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            db_filename: default_db_filename().to_string(),
        }
    }

    pub fn db_path(&self) -> PathBuf {
        self.data_dir.join(&self.db_filename)
    }

    pub fn log_dir(&self) -> PathBuf {
        self.data_dir.join("logs")
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self::from_platform_dirs()
    }
}

fn default_db_filename() -> &'static str {
    if cfg!(debug_assertions) {
        "greensteps-dev.db"
    } else {
        "greensteps.db"
    }
}
