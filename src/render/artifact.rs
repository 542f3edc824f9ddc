//! Artifact naming and persistence.
//!
//! Files are named `<kind>_<token>[_<index>].<ext>`. Tokens come from a
//! process-wide monotonic microsecond clock; an index is appended only if a
//! file with the same name already exists (e.g. left by another process).

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::warn;

use crate::types::Result;

static LAST_TOKEN: AtomicU64 = AtomicU64::new(0);

/// Microsecond timestamp, strictly increasing within this process
pub fn next_token() -> u64 {
    let now = chrono::Utc::now().timestamp_micros().max(0) as u64;
    let mut last = LAST_TOKEN.load(Ordering::Relaxed);
    loop {
        let candidate = now.max(last + 1);
        match LAST_TOKEN.compare_exchange_weak(last, candidate, Ordering::Relaxed, Ordering::Relaxed)
        {
            Ok(_) => return candidate,
            Err(actual) => last = actual,
        }
    }
}

/// Writes artifact files under one directory
#[derive(Debug, Clone)]
pub struct ArtifactWriter {
    dir: PathBuf,
}

/// Paths of a persisted text + raster pair, directory-qualified
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    pub text_path: String,
    pub raster_path: String,
}

impl ArtifactWriter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Write both files or neither
    pub fn write_pair(
        &self,
        token: u64,
        text_kind: &str,
        text: &[u8],
        raster_kind: &str,
        raster: &[u8],
    ) -> Result<ArtifactPaths> {
        fs::create_dir_all(&self.dir)?;

        let text_file = self.create_unique(text_kind, token, "txt", text)?;
        let raster_file = match self.create_unique(raster_kind, token, "png", raster) {
            Ok(path) => path,
            Err(e) => {
                if let Err(cleanup) = fs::remove_file(&text_file) {
                    warn!(
                        "Failed to remove orphaned artifact {}: {}",
                        text_file.display(),
                        cleanup
                    );
                }
                return Err(e);
            }
        };

        Ok(ArtifactPaths {
            text_path: self.relative(&text_file),
            raster_path: self.relative(&raster_file),
        })
    }

    /// Create a new file that did not exist before, appending `_<index>` on collision
    fn create_unique(&self, kind: &str, token: u64, ext: &str, bytes: &[u8]) -> Result<PathBuf> {
        let mut index = 0u32;
        loop {
            let name = if index == 0 {
                format!("{}_{}.{}", kind, token, ext)
            } else {
                format!("{}_{}_{}.{}", kind, token, index, ext)
            };
            let path = self.dir.join(&name);

            match OpenOptions::new().write(true).create_new(true).open(&path) {
                Ok(mut file) => {
                    if let Err(e) = file.write_all(bytes).and_then(|_| file.sync_all()) {
                        drop(file);
                        let _ = fs::remove_file(&path);
                        return Err(e.into());
                    }
                    return Ok(path);
                }
                Err(e) if e.kind() == ErrorKind::AlreadyExists => index += 1,
                Err(e) => return Err(e.into()),
            }
        }
    }

    /// `<dir-name>/<file>`
    fn relative(&self, file: &Path) -> String {
        let file_name = file
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        match self.dir.file_name() {
            Some(dir_name) => format!("{}/{}", dir_name.to_string_lossy(), file_name),
            None => file_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_strictly_increase() {
        let tokens: Vec<u64> = (0..1000).map(|_| next_token()).collect();
        assert!(tokens.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_tokens_unique_across_threads() {
        let handles: Vec<_> = (0..4)
            .map(|_| std::thread::spawn(|| (0..250).map(|_| next_token()).collect::<Vec<_>>()))
            .collect();
        let mut all: Vec<u64> = handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect();
        let total = all.len();
        all.sort_unstable();
        all.dedup();
        assert_eq!(all.len(), total);
    }

    #[test]
    fn test_write_pair_relative_paths() {
        let root = tempfile::tempdir().unwrap();
        let writer = ArtifactWriter::new(root.path().join("uploads"));

        let paths = writer
            .write_pair(42, "ascii_art", b"/\\_/\\", "ai_generated", b"png")
            .unwrap();

        assert_eq!(paths.text_path, "uploads/ascii_art_42.txt");
        assert_eq!(paths.raster_path, "uploads/ai_generated_42.png");
        let text = fs::read(root.path().join("uploads/ascii_art_42.txt")).unwrap();
        assert_eq!(text, b"/\\_/\\");
    }

    #[test]
    fn test_collision_appends_index() {
        let root = tempfile::tempdir().unwrap();
        let writer = ArtifactWriter::new(root.path());
        fs::write(root.path().join("ascii_art_7.txt"), "taken").unwrap();
        fs::write(root.path().join("ascii_art_7_1.txt"), "taken").unwrap();

        let paths = writer
            .write_pair(7, "ascii_art", b"new", "ai_generated", b"png")
            .unwrap();
        assert!(paths.text_path.ends_with("ascii_art_7_2.txt"));
        assert!(paths.raster_path.ends_with("ai_generated_7.png"));
        assert_eq!(
            fs::read_to_string(root.path().join("ascii_art_7.txt")).unwrap(),
            "taken"
        );
    }

    #[test]
    fn test_second_write_failure_removes_first() {
        let root = tempfile::tempdir().unwrap();
        let writer = ArtifactWriter::new(root.path());
        // raster kind points into a directory that does not exist
        let result = writer.write_pair(9, "ascii_art", b"art", "missing/ai_generated", b"png");

        assert!(result.is_err());
        assert!(fs::read_dir(root.path()).unwrap().next().is_none());
    }
}
