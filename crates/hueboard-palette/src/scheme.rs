//! Named categorical schemes and the registry lookup seam.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Namespace shared by every dashboard when none is given.
pub const SHARED_NAMESPACE: &str = "";

/// An ordered, named palette of categorical colors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "native", derive(uniffi::Record))]
pub struct CategoricalScheme {
    pub id: String,
    /// Human-readable name for scheme pickers; fall back to `id` when absent.
    #[serde(default)]
    pub label: Option<String>,
    pub colors: Vec<String>,
}

impl CategoricalScheme {
    pub fn new(id: impl Into<String>, colors: Vec<String>) -> Self {
        Self {
            id: id.into(),
            label: None,
            colors,
        }
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Parse a scheme from its JSON form.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Resolves a scheme id within a namespace to its palette.
///
/// An unresolved id is an expected condition (scheme not registered yet,
/// a typo, a race during app startup), so the seam answers with `Option`
/// rather than an error.
pub trait SchemeRegistry: Send + Sync {
    fn lookup_scheme(&self, namespace: &str, scheme_id: &str) -> Option<CategoricalScheme>;
}

/// Map-backed registry, scoped by namespace with fallback to
/// [`SHARED_NAMESPACE`]. Registration is an upsert and chains.
#[derive(Debug, Clone, Default)]
pub struct MemorySchemeRegistry {
    schemes: BTreeMap<String, BTreeMap<String, CategoricalScheme>>,
}

impl MemorySchemeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `scheme` in the shared namespace.
    pub fn register(&mut self, scheme: CategoricalScheme) -> &mut Self {
        self.register_in(SHARED_NAMESPACE, scheme)
    }

    /// Register `scheme` for one namespace only, shadowing any shared
    /// scheme with the same id for lookups under that namespace.
    pub fn register_in(&mut self, namespace: &str, scheme: CategoricalScheme) -> &mut Self {
        self.schemes
            .entry(namespace.to_string())
            .or_default()
            .insert(scheme.id.clone(), scheme);
        self
    }
}

impl SchemeRegistry for MemorySchemeRegistry {
    fn lookup_scheme(&self, namespace: &str, scheme_id: &str) -> Option<CategoricalScheme> {
        self.schemes
            .get(namespace)
            .and_then(|scoped| scoped.get(scheme_id))
            .or_else(|| self.schemes.get(SHARED_NAMESPACE)?.get(scheme_id))
            .cloned()
    }
}
