//! Field-level validation outcomes for candidate beer records.
//!
//! A write operation validates its candidate before any collaborator call.
//! The outcome is a set of violations; an empty set means the candidate is
//! acceptable. Callers depend on receiving the complete list in one round
//! trip, so violations accumulate instead of short-circuiting per field.

use serde::Serialize;
use serde_json::json;
use utoipa::ToSchema;

use super::Error;

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Violation {
    /// Wire name of the offending field.
    #[schema(example = "beerName")]
    pub field: &'static str,
    /// Human-readable constraint description.
    #[schema(example = "is required")]
    pub message: String,
}

/// Ordered collection of validation failures.
///
/// # Examples
/// ```
/// use brewery_backend::domain::Violations;
///
/// let mut violations = Violations::new();
/// assert!(violations.is_empty());
/// violations.push("upc", "is required");
/// assert_eq!(violations.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Violations(Vec<Violation>);

impl Violations {
    /// Create an empty violation set.
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Record a violation against a field.
    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.push(Violation {
            field,
            message: message.into(),
        });
    }

    /// True when the candidate passed every check.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of recorded violations.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate over the recorded violations.
    pub fn iter(&self) -> impl Iterator<Item = &Violation> {
        self.0.iter()
    }

    /// Convert a non-empty set into an invalid-input error carrying the
    /// full violation list as structured details.
    pub fn into_error(self) -> Error {
        Error::invalid_request("beer failed validation")
            .with_details(json!({ "violations": self.0 }))
    }
}

impl IntoIterator for Violations {
    type Item = Violation;
    type IntoIter = std::vec::IntoIter<Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
