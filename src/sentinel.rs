use std::fs;
use std::io;
use std::path::Path;

/// What the stop hook found at the sentinel path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SentinelState {
    /// Nothing at the path (a dangling symlink counts as absent)
    Absent,
    /// Something exists but could not be read
    Unreadable(io::ErrorKind),
    /// Raw file contents, not yet decoded
    Present(Vec<u8>),
}

/// Look at the sentinel file. Never writes or removes it.
pub fn probe(path: &Path) -> SentinelState {
    if !path.exists() {
        return SentinelState::Absent;
    }

    match fs::read(path) {
        Ok(bytes) => SentinelState::Present(bytes),
        Err(e) => SentinelState::Unreadable(e.kind()),
    }
}
