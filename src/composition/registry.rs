use std::collections::BTreeMap;

use crate::composition::model::{Composition, CompositionDecl};
use crate::foundation::error::{FramecastError, FramecastResult};

/// Compositions known to a host, keyed by id.
#[derive(Clone, Debug, Default)]
pub struct Registry {
    compositions: BTreeMap<String, Composition>,
}

impl Registry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a validated composition; ids must be unique.
    pub fn register(&mut self, comp: Composition) -> FramecastResult<()> {
        comp.validate()?;
        if self.compositions.contains_key(&comp.id) {
            return Err(FramecastError::validation(format!(
                "duplicate composition id '{}'",
                comp.id
            )));
        }
        tracing::debug!(id = %comp.id, scenes = comp.scenes.len(), "registered composition");
        self.compositions.insert(comp.id.clone(), comp);
        Ok(())
    }

    /// Composition registered under `id`.
    pub fn get(&self, id: &str) -> Option<&Composition> {
        self.compositions.get(id)
    }

    /// Number of registered compositions.
    pub fn len(&self) -> usize {
        self.compositions.len()
    }

    /// `true` when nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.compositions.is_empty()
    }

    /// Declarations in id order.
    pub fn decls(&self) -> FramecastResult<Vec<CompositionDecl>> {
        self.compositions.values().map(Composition::decl).collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composition/registry.rs"]
mod tests;
