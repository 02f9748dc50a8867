//! Content fingerprinting for the incremental-build gate.
//!
//! A run's fingerprint digests, in a fixed order, everything that can
//! affect its outputs: input-file bytes, the tool's own implementation
//! bytes, the active option strings, and the bytes of every loaded plugin
//! module. Two runs with equal fingerprints may skip regeneration.

use std::io::{self, Read};
use std::path::Path;

/// Name of the persisted fingerprint file under the output directory.
pub const HASH_FILE_NAME: &str = "hash";

/// An incremental digest accumulator.
///
/// Pure function of the bytes fed to it; feeding order matters.
pub struct Fingerprint {
    hasher: blake3::Hasher,
}

impl Fingerprint {
    pub fn new() -> Self {
        Self {
            hasher: blake3::Hasher::new(),
        }
    }

    /// Fold raw bytes into the digest.
    pub fn add_bytes(&mut self, bytes: &[u8]) {
        self.hasher.update(bytes);
    }

    /// Fold a string value (an option, a flag value) into the digest.
    pub fn add_str(&mut self, value: &str) {
        self.hasher.update(value.as_bytes());
    }

    /// Fold a file's content into the digest, streaming to stay flat on memory.
    pub fn add_file(&mut self, path: &Path) -> io::Result<()> {
        let mut file = std::fs::File::open(path)?;
        let mut buf = [0u8; 65536];
        loop {
            let n = file.read(&mut buf)?;
            if n == 0 {
                break;
            }
            self.hasher.update(&buf[..n]);
        }
        Ok(())
    }

    /// The hex digest of everything fed so far.
    pub fn hex(&self) -> String {
        self.hasher.finalize().to_hex().to_string()
    }
}

impl Default for Fingerprint {
    fn default() -> Self {
        Self::new()
    }
}

/// The digest persisted by the last successful run, if readable.
///
/// A missing or unreadable file is a soft condition: it means "no cached
/// value", never an error.
pub fn cached_digest(output_dir: &Path) -> Option<String> {
    std::fs::read_to_string(output_dir.join(HASH_FILE_NAME)).ok()
}

/// Whether regeneration may be skipped for this digest.
pub fn should_skip(digest: &str, output_dir: &Path, force: bool) -> bool {
    !force && cached_digest(output_dir).as_deref() == Some(digest)
}

/// Persist the digest for the next run. Called only after a fully
/// successful run.
pub fn persist_digest(digest: &str, output_dir: &Path) -> io::Result<()> {
    std::fs::write(output_dir.join(HASH_FILE_NAME), digest)
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_digest_is_deterministic() {
        let mut a = Fingerprint::new();
        a.add_str("one");
        a.add_str("two");
        let mut b = Fingerprint::new();
        b.add_str("one");
        b.add_str("two");
        assert_eq!(a.hex(), b.hex());
    }

    #[test]
    fn test_order_matters() {
        let mut a = Fingerprint::new();
        a.add_str("one");
        a.add_str("two");
        let mut b = Fingerprint::new();
        b.add_str("two");
        b.add_str("one");
        assert_ne!(a.hex(), b.hex());
    }

    #[test]
    fn test_any_extra_input_changes_digest() {
        let mut a = Fingerprint::new();
        a.add_str("base");
        let before = a.hex();
        a.add_str("--generate=header");
        assert_ne!(before, a.hex());
    }

    #[test]
    fn test_add_file_matches_bytes() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("input.idl");
        std::fs::write(&path, "struct Point;\n").unwrap();

        let mut from_file = Fingerprint::new();
        from_file.add_file(&path).unwrap();
        let mut from_bytes = Fingerprint::new();
        from_bytes.add_bytes(b"struct Point;\n");
        assert_eq!(from_file.hex(), from_bytes.hex());
    }

    #[test]
    fn test_add_file_missing_is_an_error() {
        let mut fp = Fingerprint::new();
        assert!(fp.add_file(Path::new("/nonexistent/input.idl")).is_err());
    }

    #[test]
    fn test_persist_and_skip() {
        let temp = TempDir::new().unwrap();
        assert!(cached_digest(temp.path()).is_none());
        assert!(!should_skip("abc", temp.path(), false));

        persist_digest("abc", temp.path()).unwrap();
        assert_eq!(cached_digest(temp.path()).as_deref(), Some("abc"));
        assert!(should_skip("abc", temp.path(), false));
        assert!(!should_skip("other", temp.path(), false));
    }

    #[test]
    fn test_force_never_skips() {
        let temp = TempDir::new().unwrap();
        persist_digest("abc", temp.path()).unwrap();
        assert!(!should_skip("abc", temp.path(), true));
    }
}
