pub mod builtin;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{DigestError, DigestResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    pub name: String,
    pub url: String,
}

impl Source {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

/// A named group of sources, kept in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub sources: Vec<Source>,
}

impl Category {
    pub fn new(name: impl Into<String>, sources: Vec<Source>) -> Self {
        Self {
            name: name.into(),
            sources,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceCatalog {
    /// Category used when none is requested; the first category if unset.
    #[serde(default)]
    pub default_category: Option<String>,
    pub categories: Vec<Category>,
}

impl SourceCatalog {
    pub fn new(categories: Vec<Category>) -> Self {
        Self {
            default_category: None,
            categories,
        }
    }

    pub fn with_default_category(mut self, name: impl Into<String>) -> Self {
        self.default_category = Some(name.into());
        self
    }

    /// Parse a catalog from its JSON form.
    pub fn from_json(content: &str) -> DigestResult<Self> {
        let catalog: SourceCatalog = serde_json::from_str(content)
            .map_err(|e| DigestError::CatalogParse(e.to_string()))?;
        catalog.validated()
    }

    /// Load a catalog file; `.opml`/`.xml` files are read as OPML, anything
    /// else as JSON.
    pub fn load(path: &Path) -> DigestResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let is_opml = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("opml") || e.eq_ignore_ascii_case("xml"));

        if is_opml {
            crate::services::CatalogService::import_opml(&content)
        } else {
            Self::from_json(&content)
        }
    }

    pub(crate) fn validated(self) -> DigestResult<Self> {
        if self.categories.is_empty() {
            return Err(DigestError::CatalogParse(
                "catalog defines no categories".to_string(),
            ));
        }
        if let Some(name) = &self.default_category {
            self.category(name)?;
        }
        Ok(self)
    }

    pub fn category(&self, name: &str) -> DigestResult<&Category> {
        self.categories
            .iter()
            .find(|c| c.name == name)
            .ok_or_else(|| DigestError::CategoryNotFound(name.to_string()))
    }

    /// Resolve the requested category, falling back to the catalog default.
    pub fn select(&self, requested: Option<&str>) -> DigestResult<&Category> {
        match requested.or(self.default_category.as_deref()) {
            Some(name) => self.category(name),
            None => self
                .categories
                .first()
                .ok_or_else(|| DigestError::CategoryNotFound("<none>".to_string())),
        }
    }

    pub fn category_names(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|c| c.name.as_str())
    }
}

impl Default for SourceCatalog {
    fn default() -> Self {
        builtin::catalog()
    }
}
