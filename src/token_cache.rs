// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Persistent storage for the session bearer token.
//!
//! Holds a single value under the `token` key. No expiry is tracked here;
//! an expired token is only discovered when the backend answers 401.
//! Empty strings are never reported as a token.

use dashmap::DashMap;
use serde_json::{Map, Value};
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tempfile::NamedTempFile;

/// Key under which the bearer token is stored.
pub const TOKEN_KEY: &str = "token";

/// Storage for the current bearer token.
pub trait TokenCache: Send + Sync {
    /// Current token, or `None` when logged out.
    fn get(&self) -> Option<String>;

    fn set(&self, token: &str) -> Result<(), CacheError>;

    /// Remove the token. Succeeds when there is nothing to remove.
    fn clear(&self) -> Result<(), CacheError>;
}

/// Token cache errors
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

// ─────────────────────────────────────────────────────────────────────────────
// FileTokenCache
// ─────────────────────────────────────────────────────────────────────────────

/// Durable token cache backed by a small JSON document on disk.
///
/// The document is a flat key/value object so other client state can share
/// the file without clobbering the token. The file is readable by its owner
/// only and is replaced atomically on every write.
///
/// The token is read from disk once and then served from memory; this
/// cache is assumed to be the only writer while the process runs.
pub struct FileTokenCache {
    path: PathBuf,
    // `None` until the file has been read. Also serializes
    // read-modify-write cycles within this process.
    token: Mutex<Option<Option<String>>>,
}

impl FileTokenCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            token: Mutex::new(None),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_err(&self, source: std::io::Error) -> CacheError {
        CacheError::Io {
            path: self.path.clone(),
            source,
        }
    }

    /// Read the whole document. Missing or corrupt files read as empty.
    fn load(&self) -> Map<String, Value> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) if e.kind() == ErrorKind::NotFound => return Map::new(),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Token cache unreadable");
                return Map::new();
            }
        };

        match serde_json::from_str::<Value>(&contents) {
            Ok(Value::Object(map)) => map,
            Ok(_) | Err(_) => {
                tracing::warn!(path = %self.path.display(), "Token cache is corrupt, ignoring");
                Map::new()
            }
        }
    }

    /// Write the document to a temporary file next to the target, then
    /// rename it into place.
    fn store(&self, map: &Map<String, Value>) -> Result<(), CacheError> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir).map_err(|e| self.io_err(e))?;

        let json = serde_json::to_string_pretty(map)?;
        let mut tmp = NamedTempFile::new_in(dir).map_err(|e| self.io_err(e))?;
        restrict_to_owner(tmp.as_file()).map_err(|e| self.io_err(e))?;
        tmp.write_all(json.as_bytes())
            .and_then(|()| tmp.as_file().sync_all())
            .map_err(|e| self.io_err(e))?;
        tmp.persist(&self.path).map_err(|e| self.io_err(e.error))?;
        Ok(())
    }
}

#[cfg(unix)]
fn restrict_to_owner(file: &fs::File) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    file.set_permissions(fs::Permissions::from_mode(0o600))
}

#[cfg(not(unix))]
fn restrict_to_owner(_file: &fs::File) -> std::io::Result<()> {
    Ok(())
}

fn non_empty(token: &str) -> Option<String> {
    (!token.is_empty()).then(|| token.to_string())
}

impl TokenCache for FileTokenCache {
    fn get(&self) -> Option<String> {
        let mut cached = self.token.lock().unwrap_or_else(|e| e.into_inner());
        cached
            .get_or_insert_with(|| match self.load().get(TOKEN_KEY) {
                Some(Value::String(token)) => non_empty(token),
                _ => None,
            })
            .clone()
    }

    fn set(&self, token: &str) -> Result<(), CacheError> {
        let mut cached = self.token.lock().unwrap_or_else(|e| e.into_inner());
        let mut map = self.load();
        map.insert(TOKEN_KEY.to_string(), Value::String(token.to_string()));
        self.store(&map)?;
        *cached = Some(non_empty(token));
        Ok(())
    }

    fn clear(&self) -> Result<(), CacheError> {
        let mut cached = self.token.lock().unwrap_or_else(|e| e.into_inner());
        if self.path.exists() {
            let mut map = self.load();
            if map.remove(TOKEN_KEY).is_some() {
                self.store(&map)?;
            }
        }
        *cached = Some(None);
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// MemoryTokenCache
// ─────────────────────────────────────────────────────────────────────────────

/// Process-local token cache. Forgets everything on exit.
#[derive(Default)]
pub struct MemoryTokenCache {
    entries: DashMap<&'static str, String>,
}

impl MemoryTokenCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cache pre-seeded with a token, as if restored from a previous run.
    pub fn with_token(token: &str) -> Self {
        let cache = Self::new();
        cache.entries.insert(TOKEN_KEY, token.to_string());
        cache
    }
}

impl TokenCache for MemoryTokenCache {
    fn get(&self) -> Option<String> {
        self.entries.get(TOKEN_KEY).and_then(|t| non_empty(t.value()))
    }

    fn set(&self, token: &str) -> Result<(), CacheError> {
        self.entries.insert(TOKEN_KEY, token.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), CacheError> {
        self.entries.remove(TOKEN_KEY);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_cache_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("session.json");

        FileTokenCache::new(&path).set("abc.def.ghi").unwrap();

        let reopened = FileTokenCache::new(&path);
        assert_eq!(reopened.get().as_deref(), Some("abc.def.ghi"));
    }

    #[test]
    fn test_file_cache_clear_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let cache = FileTokenCache::new(dir.path().join("session.json"));

        cache.clear().unwrap();
        cache.set("t").unwrap();
        cache.clear().unwrap();
        cache.clear().unwrap();

        assert!(cache.get().is_none());
    }

    #[test]
    fn test_file_cache_keeps_other_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, r#"{"theme":"dark","token":"old"}"#).unwrap();

        let cache = FileTokenCache::new(&path);
        cache.clear().unwrap();

        let doc: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(doc["theme"], "dark");
        assert!(doc.get("token").is_none());
    }

    #[test]
    fn test_corrupt_file_reads_as_absent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, "{not json").unwrap();

        let cache = FileTokenCache::new(&path);
        assert!(cache.get().is_none());

        cache.set("fresh").unwrap();
        assert_eq!(cache.get().as_deref(), Some("fresh"));
    }

    #[cfg(unix)]
    #[test]
    fn test_file_cache_is_private_to_owner() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        let cache = FileTokenCache::new(&path);

        cache.set("secret.jwt.token").unwrap();
        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o077, 0, "mode was {:o}", mode & 0o777);

        // Rewrites of an existing, looser file tighten it too.
        fs::set_permissions(&path, fs::Permissions::from_mode(0o644)).unwrap();
        cache.clear().unwrap();
        cache.set("next.jwt.token").unwrap();
        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o077, 0, "mode was {:o}", mode & 0o777);
    }

    #[test]
    fn test_file_cache_write_leaves_no_temp_files() {
        let dir = tempfile::tempdir().unwrap();
        let cache = FileTokenCache::new(dir.path().join("session.json"));

        cache.set("a").unwrap();
        cache.set("b").unwrap();
        cache.clear().unwrap();

        let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_file_cache_serves_token_from_memory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, r#"{"token":"on.disk.token"}"#).unwrap();

        let cache = FileTokenCache::new(&path);
        assert_eq!(cache.get().as_deref(), Some("on.disk.token"));

        fs::remove_file(&path).unwrap();
        assert_eq!(cache.get().as_deref(), Some("on.disk.token"));

        cache.clear().unwrap();
        assert!(cache.get().is_none());
    }

    #[test]
    fn test_empty_token_reads_as_absent() {
        let dir = tempfile::tempdir().unwrap();
        let file = FileTokenCache::new(dir.path().join("session.json"));
        file.set("").unwrap();
        assert!(file.get().is_none());

        let memory = MemoryTokenCache::new();
        memory.set("").unwrap();
        assert!(memory.get().is_none());
    }

    #[test]
    fn test_memory_cache() {
        let cache = MemoryTokenCache::with_token("seed");
        assert_eq!(cache.get().as_deref(), Some("seed"));

        cache.set("next").unwrap();
        assert_eq!(cache.get().as_deref(), Some("next"));

        cache.clear().unwrap();
        assert!(cache.get().is_none());
    }
}
