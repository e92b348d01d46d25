//! Store key layout
//!
//! Every key the engine touches lives under one namespace:
//! - `{ns}:d` — payload map (composite key -> payload)
//! - `{ns}:t` — title map (composite key -> title)
//! - `{ns}:s:{prefix}` — one bucket per prefix string
//! - `{ns}:c:{phrase_sig}:{boost_sig}` — intersection cache entries

/// Key builder over a configured namespace
#[derive(Debug, Clone)]
pub struct KeySpace {
    namespace: String,
    data: String,
    title: String,
}

impl KeySpace {
    /// Create a key space for a namespace prefix
    pub fn new(namespace: &str) -> Self {
        Self {
            data: format!("{namespace}:d"),
            title: format!("{namespace}:t"),
            namespace: namespace.to_string(),
        }
    }

    /// The payload map key
    pub fn data(&self) -> &str {
        &self.data
    }

    /// The title map key
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The bucket key for a prefix string
    pub fn bucket(&self, prefix: &str) -> String {
        format!("{}:s:{}", self.namespace, prefix)
    }

    /// The cache key for a query signature
    pub fn cache(&self, phrase_sig: &str, boost_sig: &str) -> String {
        format!("{}:c:{}:{}", self.namespace, phrase_sig, boost_sig)
    }

    /// The prefix under which every key of this namespace lives
    pub fn enumeration_prefix(&self) -> String {
        format!("{}:", self.namespace)
    }
}
