use crate::{tag::Tag, tags};
use std::{collections::HashMap, iter, sync::Arc};

/// Tag names and aliases (lower-cased) to tags
#[derive(Debug, Clone, Default)]
pub struct TagRegistry {
    tags: HashMap<String, Arc<dyn Tag>>,
}

impl TagRegistry {
    /// A registry without any tags, every tag is passed through as text
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_builtin_tags() -> Self {
        let mut registry = Self::empty();
        for tag in tags::builtin() {
            registry.register_shared(tag);
        }
        registry
    }

    /// Registers the tag under its name and every alias, replacing whatever was there
    pub fn register(&mut self, tag: impl Tag + 'static) {
        self.register_shared(Arc::new(tag));
    }

    pub fn register_shared(&mut self, tag: Arc<dyn Tag>) {
        let names: Vec<String> = iter::once(tag.name())
            .chain(tag.aliases().iter().copied())
            .map(|name| name.trim().to_lowercase())
            .collect();

        for name in names {
            self.tags.insert(name, Arc::clone(&tag));
        }
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn Tag>> {
        self.tags.get(&name.trim().to_lowercase()).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.tags.contains_key(&name.trim().to_lowercase())
    }

    /// Every registered name and alias, in no particular order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tags.keys().map(String::as_str)
    }
}
