use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use rotom_api::TypeData;

/// Process-wide memo of `/type/{name}` lookups, keyed by lowercase name.
///
/// Unbounded by construction but bounded in practice: the key universe is
/// the 18 known type names. No eviction, no expiry.
pub(crate) struct TypeCache {
    inner: RwLock<HashMap<String, Arc<TypeData>>>,
}

impl TypeCache {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(HashMap::new()),
        }
    }

    pub fn get(&self, name: &str) -> Option<Arc<TypeData>> {
        self.inner
            .read()
            .unwrap()
            .get(&name.to_lowercase())
            .cloned()
    }

    pub fn insert(&self, name: &str, data: TypeData) -> Arc<TypeData> {
        let entry = Arc::new(data);
        self.inner
            .write()
            .unwrap()
            .insert(name.to_lowercase(), Arc::clone(&entry));
        entry
    }
}
