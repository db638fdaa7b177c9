//! Per-user key-value settings store.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde_json::{Map, Value};

/// String key-value store scoped to the current user and machine.
pub trait KeyValueStore {
    /// Value stored under `key`, or `None` when the key is absent.
    fn get_string(&self, key: &str) -> anyhow::Result<Option<String>>;

    fn set_string(&self, key: &str, value: &str) -> anyhow::Result<()>;

    /// Human readable description of where values live.
    fn location(&self) -> String;
}

/// Keeps every key as a string member of one JSON object on disk.
#[derive(Debug, Clone)]
pub struct JsonFileKeyValueStore {
    path: PathBuf,
}

impl JsonFileKeyValueStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl KeyValueStore for JsonFileKeyValueStore {
    fn get_string(&self, key: &str) -> anyhow::Result<Option<String>> {
        let map = load_json_map(&self.path)?;
        match map.get(key) {
            None => Ok(None),
            Some(Value::String(value)) => Ok(Some(value.clone())),
            Some(_) => anyhow::bail!(
                "Expected '{}' to be a string in {}",
                key,
                self.path.display()
            ),
        }
    }

    fn set_string(&self, key: &str, value: &str) -> anyhow::Result<()> {
        let mut map = load_json_map(&self.path)?;
        map.insert(key.to_string(), Value::String(value.to_string()));
        write_json_map(&self.path, &map)
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

/// Volatile store, used by tests and hosts without persistent settings.
#[derive(Debug, Default)]
pub struct MemoryKeyValueStore {
    values: RefCell<HashMap<String, String>>,
    writes: Cell<usize>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `set_string` calls so far.
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get_string(&self, key: &str) -> anyhow::Result<Option<String>> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn set_string(&self, key: &str, value: &str) -> anyhow::Result<()> {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }

    fn location(&self) -> String {
        "<memory>".to_string()
    }
}

fn load_json_map(path: &Path) -> anyhow::Result<Map<String, Value>> {
    if !path.exists() {
        return Ok(Map::new());
    }
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read user settings store: {}", path.display()))?;
    if content.trim().is_empty() {
        return Ok(Map::new());
    }
    match serde_json::from_str::<Value>(&content)
        .with_context(|| format!("Failed to parse user settings store: {}", path.display()))?
    {
        Value::Object(map) => Ok(map),
        _ => anyhow::bail!(
            "User settings store must hold a JSON object of keys: {}",
            path.display()
        ),
    }
}

fn write_json_map(path: &Path, map: &Map<String, Value>) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| {
            format!("Failed to create user settings directory: {}", parent.display())
        })?;
    }
    let content =
        serde_json::to_string_pretty(map).context("Failed to serialize user settings store")?;
    std::fs::write(path, content)
        .with_context(|| format!("Failed to write user settings store: {}", path.display()))?;
    Ok(())
}
