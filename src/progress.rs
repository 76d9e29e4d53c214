//! Completed-section tracking.
//!
//! The set is stored as a JSON array of section keys under a single key.
//! Reads happen once at load; every new mark is written straight through.
//! Missing or unreadable data is treated as an empty set.

use std::collections::{BTreeSet, HashMap};
use std::path::PathBuf;

use crate::catalog::Unit;
use crate::error::ProgressError;

pub const COMPLETED_SECTIONS_KEY: &str = "completedSections";

/// Key-value persistence behind the completion store.
pub trait ProgressBackend {
    fn read(&self, key: &str) -> Result<Option<String>, ProgressError>;
    fn write(&mut self, key: &str, value: &str) -> Result<(), ProgressError>;
}

impl<B: ProgressBackend + ?Sized> ProgressBackend for Box<B> {
    fn read(&self, key: &str) -> Result<Option<String>, ProgressError> {
        (**self).read(key)
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), ProgressError> {
        (**self).write(key, value)
    }
}

#[derive(Debug, Default, Clone)]
pub struct MemoryBackend {
    values: HashMap<String, String>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(key: &str, value: &str) -> Self {
        let mut backend = Self::default();
        backend.values.insert(key.to_string(), value.to_string());
        backend
    }

    pub fn value(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

impl ProgressBackend for MemoryBackend {
    fn read(&self, key: &str) -> Result<Option<String>, ProgressError> {
        Ok(self.values.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), ProgressError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// One `<key>.json` file per key inside `dir`.
#[derive(Debug, Clone)]
pub struct FileBackend {
    dir: PathBuf,
}

impl FileBackend {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl ProgressBackend for FileBackend {
    fn read(&self, key: &str) -> Result<Option<String>, ProgressError> {
        match std::fs::read_to_string(self.path(key)) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), ProgressError> {
        std::fs::create_dir_all(&self.dir)?;
        std::fs::write(self.path(key), value)?;
        Ok(())
    }
}

pub struct CompletionStore<B: ProgressBackend> {
    backend: B,
    completed: BTreeSet<String>,
}

impl<B: ProgressBackend> CompletionStore<B> {
    pub fn load(backend: B) -> Self {
        let completed = match backend.read(COMPLETED_SECTIONS_KEY) {
            Ok(Some(text)) => serde_json::from_str::<Vec<String>>(&text)
                .map(|keys| keys.into_iter().collect())
                .unwrap_or_else(|e| {
                    log::warn!("discarding malformed progress data: {e}");
                    BTreeSet::new()
                }),
            Ok(None) => BTreeSet::new(),
            Err(e) => {
                log::warn!("could not read progress, starting empty: {e}");
                BTreeSet::new()
            }
        };
        log::debug!("{} completed sections loaded", completed.len());
        Self { backend, completed }
    }

    pub fn save(&mut self) -> Result<(), ProgressError> {
        let keys: Vec<&String> = self.completed.iter().collect();
        let json = serde_json::to_string(&keys)?;
        self.backend.write(COMPLETED_SECTIONS_KEY, &json)
    }

    /// Marks a section; returns whether it was new. New marks are saved
    /// immediately.
    pub fn mark(&mut self, key: &str) -> Result<bool, ProgressError> {
        if !self.completed.insert(key.to_string()) {
            return Ok(false);
        }
        self.save()?;
        Ok(true)
    }

    pub fn is_marked(&self, key: &str) -> bool {
        self.completed.contains(key)
    }

    pub fn completed(&self) -> impl Iterator<Item = &str> {
        self.completed.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.completed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.completed.is_empty()
    }

    /// Percentage of the unit's sections that are marked.
    pub fn unit_progress(&self, unit: &Unit) -> u32 {
        let total = unit.sections.len() as u32;
        if total == 0 {
            return 0;
        }
        let done = unit
            .sections
            .iter()
            .filter(|s| self.is_marked(&unit.section_key(s)))
            .count() as u32;
        (200 * done + total) / (2 * total)
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{UNITS, unit};

    #[test]
    fn marking_writes_through_as_a_json_array() {
        let mut store = CompletionStore::load(MemoryBackend::new());
        assert!(store.mark("unit1-www").expect("mark"));
        assert!(!store.mark("unit1-www").expect("mark again"));
        assert!(store.mark("unit2-html-forms").expect("mark"));

        let raw = store.backend().value(COMPLETED_SECTIONS_KEY).expect("written");
        let keys: Vec<String> = serde_json::from_str(raw).expect("json array");
        assert_eq!(keys, vec!["unit1-www", "unit2-html-forms"]);
        assert!(store.is_marked("unit2-html-forms"));
        assert!(!store.is_marked("unit3-css-intro"));
    }

    #[test]
    fn load_reads_what_was_saved() {
        let backend = MemoryBackend::with_value(COMPLETED_SECTIONS_KEY, r#"["unit3-css-intro"]"#);
        let store = CompletionStore::load(backend);
        assert!(store.is_marked("unit3-css-intro"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn malformed_or_missing_data_is_an_empty_set() {
        for raw in ["not json", r#"{"a": 1}"#, "[1, 2]"] {
            let store = CompletionStore::load(MemoryBackend::with_value(COMPLETED_SECTIONS_KEY, raw));
            assert!(store.is_empty(), "{raw}");
        }
        assert!(CompletionStore::load(MemoryBackend::new()).is_empty());
    }

    #[test]
    fn unit_progress_counts_only_that_unit() {
        let mut store = CompletionStore::load(MemoryBackend::new());
        let unit1 = unit("unit1").expect("unit1");
        for section in &unit1.sections[..3] {
            store.mark(&unit1.section_key(section)).expect("mark");
        }
        store.mark("unit3-css-intro").expect("mark");

        // 3 of 8
        assert_eq!(store.unit_progress(unit1), 38);
        assert_eq!(store.unit_progress(&UNITS[1]), 0);
        assert_eq!(store.unit_progress(&UNITS[2]), 17);
    }

    #[test]
    fn file_backend_round_trips_and_tolerates_a_missing_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let nested = dir.path().join("progress");

        let mut store = CompletionStore::load(FileBackend::new(&nested));
        assert!(store.is_empty());
        store.mark("unit1-hosting").expect("mark");

        let reloaded = CompletionStore::load(FileBackend::new(&nested));
        assert!(reloaded.is_marked("unit1-hosting"));
        assert!(nested.join("completedSections.json").exists());
    }
}
