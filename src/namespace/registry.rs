//! Registry mapping namespace URIs to handlers.

use std::collections::HashMap;

use super::{fold_uri, NamespaceHandler};

/// Immutable-after-construction table of namespace handlers.
///
/// Lookups try the exact URI first, then a lowercased, trimmed form. Each
/// handler is reachable through its canonical URI and every alias it
/// publishes. The first handler registered for a URI keeps it.
pub struct NamespaceRegistry {
    handlers: Vec<Box<dyn NamespaceHandler>>,
    by_uri: HashMap<&'static str, usize>,
    by_folded_uri: HashMap<String, usize>,
    by_prefix: HashMap<&'static str, usize>,
}

impl NamespaceRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
            by_uri: HashMap::new(),
            by_folded_uri: HashMap::new(),
            by_prefix: HashMap::new(),
        }
    }

    /// Register a handler under its canonical URI, aliases and prefix.
    pub fn register(&mut self, handler: impl NamespaceHandler + 'static) {
        let index = self.handlers.len();
        let uris = std::iter::once(handler.namespace()).chain(handler.aliases().iter().copied());
        for uri in uris {
            if let Some(&existing) = self.by_uri.get(uri) {
                tracing::warn!(
                    uri,
                    kept = self.handlers[existing].prefix(),
                    ignored = handler.prefix(),
                    "Namespace URI registered twice"
                );
                continue;
            }
            self.by_uri.insert(uri, index);
            self.by_folded_uri.entry(fold_uri(uri)).or_insert(index);
        }
        self.by_prefix.entry(handler.prefix()).or_insert(index);
        self.handlers.push(Box::new(handler));
    }

    /// Find the handler for a namespace URI.
    #[must_use]
    pub fn resolve(&self, uri: &str) -> Option<&dyn NamespaceHandler> {
        let index = match self.by_uri.get(uri) {
            Some(&index) => index,
            None => *self.by_folded_uri.get(&fold_uri(uri))?,
        };
        Some(self.handlers[index].as_ref())
    }

    /// Find the handler whose conventional prefix is `prefix`.
    #[must_use]
    pub fn resolve_prefix(&self, prefix: &str) -> Option<&dyn NamespaceHandler> {
        self.by_prefix
            .get(prefix)
            .map(|&index| self.handlers[index].as_ref())
    }

    /// Canonical URIs of all registered handlers, in registration order.
    pub fn namespaces(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.handlers.iter().map(|h| h.namespace())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl Default for NamespaceRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for NamespaceRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.namespaces()).finish()
    }
}
