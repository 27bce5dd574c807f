use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

/// Wildcard key that selects every question.
pub const ALL_KEY: &str = "all";

/// Display label used for the [`CategoryFilter::All`] entry.
pub const ALL_LABEL: &str = "All questions";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CategoryError {
    #[error("category key cannot be empty")]
    EmptyKey,

    #[error("category key `all` is reserved")]
    ReservedKey,
}

/// Validated category key (trimmed, non-empty, never the `all` wildcard).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CategoryKey(String);

impl CategoryKey {
    /// Create a validated category key.
    ///
    /// # Errors
    ///
    /// Returns `CategoryError::EmptyKey` if the key is blank, or
    /// `CategoryError::ReservedKey` if it equals the `all` wildcard.
    pub fn new(value: impl Into<String>) -> Result<Self, CategoryError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(CategoryError::EmptyKey);
        }
        if trimmed.eq_ignore_ascii_case(ALL_KEY) {
            return Err(CategoryError::ReservedKey);
        }
        Ok(Self(trimmed.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CategoryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for CategoryKey {
    type Error = CategoryError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CategoryKey> for String {
    fn from(key: CategoryKey) -> Self {
        key.0
    }
}

/// Which slice of the store a session draws from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(CategoryKey),
}

impl CategoryFilter {
    /// Parse a menu value; `all` selects the wildcard.
    ///
    /// # Errors
    ///
    /// Returns `CategoryError::EmptyKey` for blank input.
    pub fn parse(value: &str) -> Result<Self, CategoryError> {
        if value.trim().eq_ignore_ascii_case(ALL_KEY) {
            return Ok(Self::All);
        }
        CategoryKey::new(value).map(Self::Only)
    }

    #[must_use]
    pub fn matches(&self, key: &CategoryKey) -> bool {
        match self {
            Self::All => true,
            Self::Only(only) => only == key,
        }
    }

    /// Value used in menus and on the command line.
    #[must_use]
    pub fn as_key(&self) -> &str {
        match self {
            Self::All => ALL_KEY,
            Self::Only(key) => key.as_str(),
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_key())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("label for category `{key}` cannot be empty")]
    EmptyLabel { key: CategoryKey },

    #[error("category `{key}` is listed twice")]
    DuplicateKey { key: CategoryKey },
}

/// Display labels for category keys, iterated in ascending key order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryCatalog {
    labels: BTreeMap<CategoryKey, String>,
}

impl CategoryCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a label for `key`.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::EmptyLabel` for a blank label and
    /// `CatalogError::DuplicateKey` if the key is already registered.
    pub fn insert(
        &mut self,
        key: CategoryKey,
        label: impl Into<String>,
    ) -> Result<(), CatalogError> {
        let label = label.into();
        let label = label.trim();
        if label.is_empty() {
            return Err(CatalogError::EmptyLabel { key });
        }
        if self.labels.contains_key(&key) {
            return Err(CatalogError::DuplicateKey { key });
        }
        self.labels.insert(key, label.to_string());
        Ok(())
    }

    #[must_use]
    pub fn label(&self, key: &CategoryKey) -> Option<&str> {
        self.labels.get(key).map(String::as_str)
    }

    /// Label for a filter, falling back to the raw key for uncatalogued categories.
    #[must_use]
    pub fn label_for(&self, filter: &CategoryFilter) -> String {
        match filter {
            CategoryFilter::All => ALL_LABEL.to_string(),
            CategoryFilter::Only(key) => self
                .label(key)
                .map_or_else(|| key.to_string(), str::to_string),
        }
    }

    #[must_use]
    pub fn contains(&self, key: &CategoryKey) -> bool {
        self.labels.contains_key(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&CategoryKey, &str)> {
        self.labels.iter().map(|(key, label)| (key, label.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &CategoryKey> {
        self.labels.keys()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
