//! Ordering for the result table.
//!
//! Sorting is stable: candidates that compare equal on the chosen column
//! keep their filtered order, which keeps pagination deterministic.

use data_loader::Candidate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Sortable result-table columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    Name,
    Experience,
    Compensation,
    City,
    LastActive,
    Status,
}

impl SortField {
    /// Map a column identifier from the UI to a field.
    ///
    /// Unknown identifiers give `None`, which sorts nothing.
    pub fn parse(field: &str) -> Option<Self> {
        match field {
            "name" => Some(SortField::Name),
            "experience" => Some(SortField::Experience),
            "compensation" | "salary" | "ctc" => Some(SortField::Compensation),
            "city" => Some(SortField::City),
            "lastActive" | "last_active" => Some(SortField::LastActive),
            "status" => Some(SortField::Status),
            _ => None,
        }
    }

    /// Ascending comparison on this field
    pub fn compare(&self, a: &Candidate, b: &Candidate) -> Ordering {
        match self {
            SortField::Name => a.name.cmp(&b.name),
            SortField::Experience => a
                .experience_years
                .partial_cmp(&b.experience_years)
                .unwrap_or(Ordering::Equal),
            SortField::Compensation => a
                .current_ctc
                .partial_cmp(&b.current_ctc)
                .unwrap_or(Ordering::Equal),
            SortField::City => a.city.cmp(&b.city),
            SortField::LastActive => a.last_active.cmp(&b.last_active),
            SortField::Status => a.status.label().cmp(b.status.label()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    /// `"desc"` / `"descending"` sort descending, anything else ascending
    pub fn parse(direction: &str) -> Self {
        match direction.to_ascii_lowercase().as_str() {
            "desc" | "descending" => SortDirection::Descending,
            _ => SortDirection::Ascending,
        }
    }

    fn apply(&self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

/// Column plus direction. A missing field leaves the order untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SortOrder {
    pub field: Option<SortField>,
    pub direction: SortDirection,
}

impl SortOrder {
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        Self {
            field: Some(field),
            direction,
        }
    }

    /// Build an order from raw UI identifiers.
    pub fn from_identifiers(field: &str, direction: &str) -> Self {
        Self {
            field: SortField::parse(field),
            direction: SortDirection::parse(direction),
        }
    }

    pub fn compare(&self, a: &Candidate, b: &Candidate) -> Ordering {
        match self.field {
            Some(field) => self.direction.apply(field.compare(a, b)),
            None => Ordering::Equal,
        }
    }

    /// Stable in-place sort.
    pub fn sort(&self, candidates: &mut [&Candidate]) {
        if self.field.is_none() {
            return;
        }
        candidates.sort_by(|a, b| self.compare(a, b));
    }
}
