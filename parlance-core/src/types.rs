//! Domain types for the response registry.
//!
//! Locale and intent are opaque partition keys: the registry enforces no
//! format on them (the empty string is legal) and attaches no language
//! semantics to the locale.

use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Newtypes
// ---------------------------------------------------------------------------

/// A strongly-typed locale key, e.g. `"en"` or `"es-AR"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Locale(pub String);

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for Locale {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for Locale {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

/// A strongly-typed intent label, e.g. `"greet"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Intent(pub String);

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for Intent {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for Intent {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
