//! The reference side of a reconciliation: schema or example file.

use crate::envfile::EnvFile;
use crate::schema::Schema;

/// Capability shared by anything that can supply the reference key set.
///
/// Fix and sync run one algorithm parameterized by this capability instead
/// of branching on "is this a schema or an example" throughout.
pub trait ReferenceSource {
    /// Reference keys, in declaration (schema) or appearance (example) order.
    fn ordered_keys(&self) -> Vec<&str>;

    /// Whether the reference declares a key.
    fn has_key(&self, key: &str) -> bool;

    /// The fill value the reference supplies for a missing key, if any.
    fn fill_value(&self, key: &str) -> Option<&str>;
}

impl ReferenceSource for Schema {
    fn ordered_keys(&self) -> Vec<&str> {
        self.keys().collect()
    }

    fn has_key(&self, key: &str) -> bool {
        self.contains(key)
    }

    fn fill_value(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(|rule| rule.default.as_deref())
    }
}

impl ReferenceSource for EnvFile {
    fn ordered_keys(&self) -> Vec<&str> {
        self.keys().collect()
    }

    fn has_key(&self, key: &str) -> bool {
        self.contains(key)
    }

    // An empty example value supplies no fill.
    fn fill_value(&self, key: &str) -> Option<&str> {
        self.value(key).filter(|value| !value.is_empty())
    }
}

/// Which kind of reference a command resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReferenceKind {
    Schema,
    Example,
}

/// The resolved reference: a schema when one exists, else an example file.
#[derive(Debug, Clone)]
pub enum Reference {
    Schema(Schema),
    Example(EnvFile),
}

impl Reference {
    /// Which kind of reference this is.
    pub fn kind(&self) -> ReferenceKind {
        match self {
            Reference::Schema(_) => ReferenceKind::Schema,
            Reference::Example(_) => ReferenceKind::Example,
        }
    }

    /// The schema, when this reference is one.
    pub fn schema(&self) -> Option<&Schema> {
        match self {
            Reference::Schema(schema) => Some(schema),
            Reference::Example(_) => None,
        }
    }
}

impl ReferenceSource for Reference {
    fn ordered_keys(&self) -> Vec<&str> {
        match self {
            Reference::Schema(schema) => schema.ordered_keys(),
            Reference::Example(example) => example.ordered_keys(),
        }
    }

    fn has_key(&self, key: &str) -> bool {
        match self {
            Reference::Schema(schema) => schema.has_key(key),
            Reference::Example(example) => example.has_key(key),
        }
    }

    fn fill_value(&self, key: &str) -> Option<&str> {
        match self {
            Reference::Schema(schema) => schema.fill_value(key),
            Reference::Example(example) => example.fill_value(key),
        }
    }
}
