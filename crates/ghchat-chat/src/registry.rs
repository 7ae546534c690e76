/// Ordered registry of model identifiers with one optional selection.
///
/// Add has set semantics on the identifier string. Removing the
/// selected identifier falls back to the first remaining entry, or
/// clears the selection when the registry empties. The registry type
/// itself allows emptying; keeping at least one model around is a
/// presentation policy enforced by the REPL.
#[derive(Debug, Clone, Default)]
pub struct ModelRegistry {
    models: Vec<String>,
    selected: Option<String>,
}

impl ModelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry seeded with identifiers; the first entry starts selected.
    pub fn with_models<I, S>(models: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut registry = Self::new();
        for model in models {
            registry.add(&model.into());
        }
        registry.selected = registry.models.first().cloned();
        registry
    }

    /// Add an identifier. No-op on empty input or an identifier that is
    /// already present; returns whether the registry changed. The
    /// selection is never touched by an add.
    pub fn add(&mut self, id: &str) -> bool {
        let id = id.trim();
        if id.is_empty() || self.contains(id) {
            return false;
        }
        self.models.push(id.to_string());
        true
    }

    /// Remove an identifier; returns whether anything was removed.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.models.len();
        self.models.retain(|m| m != id);
        if self.models.len() == before {
            return false;
        }
        if self.selected.as_deref() == Some(id) {
            self.selected = self.models.first().cloned();
        }
        true
    }

    /// Select a present identifier; returns whether the selection changed.
    pub fn select(&mut self, id: &str) -> bool {
        if self.contains(id) {
            self.selected = Some(id.to_string());
            true
        } else {
            false
        }
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn models(&self) -> &[String] {
        &self.models
    }

    pub fn contains(&self, id: &str) -> bool {
        self.models.iter().any(|m| m == id)
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}
