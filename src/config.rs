use std::path::PathBuf;

/// Sentinel file location, relative to the hook's working directory
pub const SENTINEL_PATH: &str = ".claude/continue.md";
pub const SYSTEM_MESSAGE: &str = "To stop: delete continue.md";

/// Resolved hook configuration, built by the caller and passed in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HookConfig {
    /// Directory the sentinel path resolves against (the hook's cwd)
    pub base_dir: PathBuf,
    pub sentinel: PathBuf,
    pub system_message: String,
}

impl Default for HookConfig {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from("."),
            sentinel: PathBuf::from(SENTINEL_PATH),
            system_message: SYSTEM_MESSAGE.to_string(),
        }
    }
}

impl HookConfig {
    /// Fixed sentinel and message, rooted at `base_dir`
    pub fn with_base_dir(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            ..Self::default()
        }
    }

    pub fn sentinel_path(&self) -> PathBuf {
        self.base_dir.join(&self.sentinel)
    }
}
