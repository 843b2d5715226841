mod error;


pub use error::{NameError, Result};

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::debug;

use crate::model::SourceHandle;

#[derive(Debug, Default)]
struct Bimap {
    source_to_name: HashMap<SourceHandle, String>,
    name_to_source: HashMap<String, SourceHandle>,
}

impl Bimap {
    /// `name`, then `0_name`, `1_name`, ... until nothing live uses it.
    fn unique_name(&self, name: &str) -> String {
        let mut candidate = name.to_string();
        let mut counter = 0usize;
        while self.name_to_source.contains_key(&candidate) {
            candidate = format!("{counter}_{name}");
            counter += 1;
        }
        candidate
    }
}

/// Assigns every registered source a display name no other live source has.
///
/// All methods lock the same mutex, so both directions of the map change
/// together even when sources come and go from several threads.
#[derive(Debug, Default)]
pub struct NameRegistry {
    inner: Mutex<Bimap>,
}

impl NameRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn maps(&self) -> MutexGuard<'_, Bimap> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn add(&self, source: &SourceHandle) -> Result<String> {
        let mut maps = self.maps();
        if maps.source_to_name.contains_key(source) {
            return Err(NameError::DuplicateSource(source.name().to_string()));
        }
        let name = maps.unique_name(source.name());
        maps.source_to_name.insert(source.clone(), name.clone());
        maps.name_to_source.insert(name.clone(), source.clone());
        debug!(intrinsic = source.name(), unique = %name, "registered source name");
        Ok(name)
    }

    pub fn remove(&self, source: &SourceHandle) -> Option<String> {
        let mut maps = self.maps();
        let name = maps.source_to_name.remove(source)?;
        maps.name_to_source.remove(&name);
        Some(name)
    }

    pub fn contains(&self, source: &SourceHandle) -> bool {
        self.maps().source_to_name.contains_key(source)
    }

    pub fn name_of(&self, source: &SourceHandle) -> Option<String> {
        self.maps().source_to_name.get(source).cloned()
    }

    pub fn source_of(&self, name: &str) -> Option<SourceHandle> {
        self.maps().name_to_source.get(name).cloned()
    }

    pub fn len(&self) -> usize {
        self.maps().source_to_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Falls back to the intrinsic name for unregistered sources.
    pub fn display_name(&self, source: &SourceHandle) -> String {
        self.name_of(source)
            .unwrap_or_else(|| source.name().to_string())
    }
}
