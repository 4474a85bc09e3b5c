//! Department - An organizational grouping
//!
//! Department is a Value Object - two departments with the same
//! id and name are the same department, regardless of which
//! instance an Employee happens to hold.

/// Organizational unit that employees belong to
///
/// Equality, hashing and ordering all go through `(id, name)`,
/// so a Department can key a `HashMap` or a `BTreeMap` directly.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Department {
    id: i64,
    name: String,
}

impl Department {
    /// Create a new Department
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl core::fmt::Display for Department {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} (#{})", self.name, self.id)
    }
}
