use rustc_hash::FxHashMap;

use crate::error::RegistryError;
use crate::table::{Arity, ComputeFn, FunctionId, FunctionMeta, FUNCTION_TABLE};

/// A registered, immutable catalog entry.
#[derive(Clone, Copy)]
pub struct FunctionEntry {
    pub id: FunctionId,
    pub name: &'static str,
    pub arity: Arity,
    pub compute: ComputeFn,
}

impl std::fmt::Debug for FunctionEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FunctionEntry")
            .field("name", &self.name)
            .field("arity", &self.arity)
            .finish()
    }
}

/// Name → entry mapping, populated once at startup.
#[derive(Debug, Default)]
pub struct Registry {
    entries: Vec<FunctionEntry>,
    by_name: FxHashMap<&'static str, usize>,
}

impl Registry {
    /// A registry holding the full catalog.
    pub fn bootstrap() -> Result<Self, RegistryError> {
        let mut registry = Self::default();
        for meta in FUNCTION_TABLE {
            registry.define(meta)?;
        }
        Ok(registry)
    }

    pub fn define(&mut self, meta: &FunctionMeta) -> Result<(), RegistryError> {
        if self.by_name.contains_key(meta.name) {
            return Err(RegistryError::DuplicateName(meta.name));
        }
        self.by_name.insert(meta.name, self.entries.len());
        self.entries.push(FunctionEntry {
            id: meta.id,
            name: meta.name,
            arity: meta.arity,
            compute: meta.compute,
        });
        Ok(())
    }

    /// Exact, case-sensitive lookup.
    pub fn resolve(&self, name: &str) -> Option<&FunctionEntry> {
        self.by_name.get(name).map(|&idx| &self.entries[idx])
    }

    pub fn get(&self, id: FunctionId) -> Option<&FunctionEntry> {
        self.resolve(id.name())
    }

    /// Entries in registration order.
    pub fn entries(&self) -> &[FunctionEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
