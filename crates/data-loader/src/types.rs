//! Core domain types for the candidate collection.
//!
//! This module defines the records the search pipeline reads:
//! - `Candidate`: one applicant row as the hosted backend returns it
//! - `CandidateStatus`: the lifecycle label shown on the resume search table
//! - `User` / `Role`: the signed-in account driving a session
//! - `CandidateStore`: the in-memory snapshot, kept in load order

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;
use std::fmt;

// =============================================================================
// Identifiers
// =============================================================================

/// Opaque candidate identifier.
///
/// Rows created by the signup flow carry numeric ids while rows imported
/// from spreadsheets carry string keys, so both shapes are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CandidateId {
    Number(i64),
    Text(String),
}

impl fmt::Display for CandidateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CandidateId::Number(n) => write!(f, "{n}"),
            CandidateId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for CandidateId {
    fn from(value: i64) -> Self {
        CandidateId::Number(value)
    }
}

impl From<i32> for CandidateId {
    fn from(value: i32) -> Self {
        CandidateId::Number(i64::from(value))
    }
}

impl From<&str> for CandidateId {
    fn from(value: &str) -> Self {
        match value.parse::<i64>() {
            Ok(n) => CandidateId::Number(n),
            Err(_) => CandidateId::Text(value.to_string()),
        }
    }
}

// =============================================================================
// Candidate
// =============================================================================

/// Lifecycle status of a candidate profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CandidateStatus {
    #[default]
    Active,
    Inactive,
    Placed,
    OnHold,
}

impl CandidateStatus {
    /// Label used for display and for status ordering.
    pub fn label(&self) -> &'static str {
        match self {
            CandidateStatus::Active => "active",
            CandidateStatus::Inactive => "inactive",
            CandidateStatus::Placed => "placed",
            CandidateStatus::OnHold => "on_hold",
        }
    }
}

impl fmt::Display for CandidateStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Treat an explicit `null` like a missing key.
///
/// Backend rows carry `null` in nullable text and numeric columns.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// One applicant record.
///
/// Field names follow the backend's camelCase row shape. Fields that are
/// absent or `null` in a row load as empty values (zero for numbers); the
/// search pipeline never mutates a record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub id: CandidateId,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub designation: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub current_company: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub past_companies: Vec<String>,
    /// Current city
    #[serde(default, deserialize_with = "null_as_default")]
    pub city: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub preferred_city: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub skills: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub degree: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub highest_qualification: String,
    /// Year the highest qualification was completed
    #[serde(default)]
    pub year_of_passing: Option<u16>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub experience_years: f32,
    /// Current compensation, lakhs per annum
    #[serde(default, deserialize_with = "null_as_default")]
    pub current_ctc: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub notice_period: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub gender: String,
    #[serde(default)]
    pub last_active: Option<DateTime<Utc>>,
    #[serde(default)]
    pub registered_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: CandidateStatus,
}

impl Candidate {
    /// Create a candidate with only an id and a name; every other field
    /// is empty. Mostly useful for fixtures.
    pub fn new(id: impl Into<CandidateId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            designation: String::new(),
            current_company: String::new(),
            past_companies: Vec::new(),
            city: String::new(),
            preferred_city: String::new(),
            skills: Vec::new(),
            degree: String::new(),
            highest_qualification: String::new(),
            year_of_passing: None,
            experience_years: 0.0,
            current_ctc: 0.0,
            notice_period: String::new(),
            gender: String::new(),
            last_active: None,
            registered_at: None,
            status: CandidateStatus::Active,
        }
    }
}

// =============================================================================
// Accounts
// =============================================================================

/// Portal role of a signed-in account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Applicant,
    Admin,
    Client,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Role::Applicant => "applicant",
            Role::Admin => "admin",
            Role::Client => "client",
        };
        f.write_str(label)
    }
}

/// A signed-in portal account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub role: Role,
}

// =============================================================================
// CandidateStore - the in-memory snapshot
// =============================================================================

/// Snapshot of the candidate collection.
///
/// Candidates keep the order they were loaded in; that order is the
/// tie-breaker for every stable sort downstream. `by_id` maps an id to
/// its position for profile lookups.
#[derive(Debug, Default, Clone)]
pub struct CandidateStore {
    pub(crate) candidates: Vec<Candidate>,
    pub(crate) by_id: HashMap<CandidateId, usize>,
}

impl CandidateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// All candidates, in load order
    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn get(&self, id: &CandidateId) -> Option<&Candidate> {
        self.by_id.get(id).map(|&idx| &self.candidates[idx])
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Insert a candidate, replacing any earlier record with the same id
    /// in place so its position is kept.
    pub fn insert(&mut self, candidate: Candidate) {
        match self.by_id.get(&candidate.id) {
            Some(&idx) => self.candidates[idx] = candidate,
            None => {
                self.by_id.insert(candidate.id.clone(), self.candidates.len());
                self.candidates.push(candidate);
            }
        }
    }
}

impl FromIterator<Candidate> for CandidateStore {
    fn from_iter<I: IntoIterator<Item = Candidate>>(iter: I) -> Self {
        let mut store = CandidateStore::new();
        for candidate in iter {
            store.insert(candidate);
        }
        store
    }
}
