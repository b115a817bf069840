//! Multi-select filters.
//!
//! Each dropdown on the resume search page selects a set of acceptable
//! values. An empty set restricts nothing. For single-valued fields the
//! candidate's value must be in the set; for list fields (skills, past
//! companies) at least one element must be.

use crate::traits::Filter;
use data_loader::Candidate;
use std::collections::BTreeSet;

/// How a filter reads the candidate field it tests.
#[derive(Clone, Copy)]
pub enum FieldValues {
    /// Field holds one value
    Single(fn(&Candidate) -> &str),
    /// Field holds a list; any element may match
    AnyOf(fn(&Candidate) -> &[String]),
}

/// Whether a single-valued field passes a selection. Empty admits all.
pub fn admits_value(selected: &BTreeSet<String>, value: &str) -> bool {
    selected.is_empty() || selected.contains(value)
}

/// Whether a list field shares at least one element with a selection.
/// Empty admits all.
pub fn admits_any(selected: &BTreeSet<String>, values: &[String]) -> bool {
    selected.is_empty() || values.iter().any(|value| selected.contains(value))
}

/// Keeps candidates whose field value is one of the selected options.
pub struct MembershipFilter {
    name: &'static str,
    selected: BTreeSet<String>,
    field: FieldValues,
}

fn current_city(c: &Candidate) -> &str {
    &c.city
}

fn preferred_city(c: &Candidate) -> &str {
    &c.preferred_city
}

fn skills(c: &Candidate) -> &[String] {
    &c.skills
}

fn notice_period(c: &Candidate) -> &str {
    &c.notice_period
}

fn highest_qualification(c: &Candidate) -> &str {
    &c.highest_qualification
}

fn current_company(c: &Candidate) -> &str {
    &c.current_company
}

fn past_companies(c: &Candidate) -> &[String] {
    &c.past_companies
}

fn gender(c: &Candidate) -> &str {
    &c.gender
}

impl MembershipFilter {
    pub fn new(name: &'static str, selected: BTreeSet<String>, field: FieldValues) -> Self {
        Self {
            name,
            selected,
            field,
        }
    }

    pub fn current_city(selected: BTreeSet<String>) -> Self {
        Self::new("CurrentCityFilter", selected, FieldValues::Single(current_city))
    }

    pub fn preferred_city(selected: BTreeSet<String>) -> Self {
        Self::new("PreferredCityFilter", selected, FieldValues::Single(preferred_city))
    }

    /// Non-empty intersection: one shared skill is enough.
    pub fn skills(selected: BTreeSet<String>) -> Self {
        Self::new("SkillsFilter", selected, FieldValues::AnyOf(skills))
    }

    pub fn notice_period(selected: BTreeSet<String>) -> Self {
        Self::new("NoticePeriodFilter", selected, FieldValues::Single(notice_period))
    }

    pub fn education(selected: BTreeSet<String>) -> Self {
        Self::new(
            "EducationFilter",
            selected,
            FieldValues::Single(highest_qualification),
        )
    }

    pub fn current_company(selected: BTreeSet<String>) -> Self {
        Self::new(
            "CurrentCompanyFilter",
            selected,
            FieldValues::Single(current_company),
        )
    }

    pub fn past_companies(selected: BTreeSet<String>) -> Self {
        Self::new(
            "PastCompaniesFilter",
            selected,
            FieldValues::AnyOf(past_companies),
        )
    }

    pub fn gender(selected: BTreeSet<String>) -> Self {
        Self::new("GenderFilter", selected, FieldValues::Single(gender))
    }
}

impl Filter for MembershipFilter {
    fn name(&self) -> &str {
        self.name
    }

    fn is_active(&self) -> bool {
        !self.selected.is_empty()
    }

    fn matches(&self, candidate: &Candidate) -> bool {
        match self.field {
            FieldValues::Single(value) => admits_value(&self.selected, value(candidate)),
            FieldValues::AnyOf(values) => admits_any(&self.selected, values(candidate)),
        }
    }
}
