//! The filter criteria set behind the resume search sidebar.
//!
//! A `FilterCriteria` starts with everything unrestricted, is edited one
//! widget at a time and can be reset. It turns into a `FilterPipeline`
//! with one filter per criterion; criteria left unset become inactive
//! filters and cost nothing.

use crate::filter_pipeline::FilterPipeline;
use crate::filters::{
    DayWindowFilter, MembershipFilter, RangeCriterion, RangeFilter, admits, admits_any,
    admits_value, within_days,
};
use chrono::{DateTime, Utc};
use data_loader::Candidate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Every filter the sidebar can set.
///
/// Multi-select sets are OR within the set; separate criteria are ANDed.
/// A range or day window of `None` and an empty set restrict nothing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FilterCriteria {
    pub experience: Option<RangeCriterion<f32>>,
    pub salary: Option<RangeCriterion<f64>>,
    pub year_of_passing: Option<RangeCriterion<u16>>,
    pub current_cities: BTreeSet<String>,
    pub preferred_cities: BTreeSet<String>,
    pub skills: BTreeSet<String>,
    pub notice_periods: BTreeSet<String>,
    pub education_levels: BTreeSet<String>,
    pub current_companies: BTreeSet<String>,
    pub past_companies: BTreeSet<String>,
    pub genders: BTreeSet<String>,
    pub registered_within_days: Option<u32>,
    pub active_within_days: Option<u32>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    /// Put every criterion back to unrestricted
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Number of criteria currently restricting the result
    pub fn active_count(&self) -> usize {
        let set_options = [
            self.experience.is_some(),
            self.salary.is_some(),
            self.year_of_passing.is_some(),
            self.registered_within_days.is_some(),
            self.active_within_days.is_some(),
        ];
        let sets = [
            &self.current_cities,
            &self.preferred_cities,
            &self.skills,
            &self.notice_periods,
            &self.education_levels,
            &self.current_companies,
            &self.past_companies,
            &self.genders,
        ];

        set_options.iter().filter(|&&set| set).count()
            + sets.iter().filter(|set| !set.is_empty()).count()
    }

    pub fn is_unrestricted(&self) -> bool {
        self.active_count() == 0
    }

    /// Build the filter pipeline for these criteria.
    ///
    /// `now` is the evaluation instant for the day-window criteria; the
    /// same instant is used for every candidate in the pass. Build it once
    /// per pass; `matches` is the allocation-free per-candidate check.
    pub fn to_pipeline(&self, now: DateTime<Utc>) -> FilterPipeline {
        self.extend_pipeline(FilterPipeline::new(), now)
    }

    /// Append one filter per criterion to an existing pipeline.
    pub fn extend_pipeline(&self, pipeline: FilterPipeline, now: DateTime<Utc>) -> FilterPipeline {
        pipeline
            .add_filter(RangeFilter::experience(self.experience))
            .add_filter(RangeFilter::salary(self.salary))
            .add_filter(MembershipFilter::current_city(self.current_cities.clone()))
            .add_filter(MembershipFilter::preferred_city(self.preferred_cities.clone()))
            .add_filter(MembershipFilter::skills(self.skills.clone()))
            .add_filter(MembershipFilter::notice_period(self.notice_periods.clone()))
            .add_filter(MembershipFilter::education(self.education_levels.clone()))
            .add_filter(MembershipFilter::current_company(self.current_companies.clone()))
            .add_filter(MembershipFilter::gender(self.genders.clone()))
            .add_filter(RangeFilter::year_of_passing(self.year_of_passing))
            .add_filter(DayWindowFilter::registered_within(
                self.registered_within_days,
                now,
            ))
            .add_filter(DayWindowFilter::active_within(self.active_within_days, now))
            .add_filter(MembershipFilter::past_companies(self.past_companies.clone()))
    }

    /// Test a single candidate against every criterion, in pipeline order.
    pub fn matches(&self, c: &Candidate, now: DateTime<Utc>) -> bool {
        admits(self.experience, Some(c.experience_years))
            && admits(self.salary, Some(c.current_ctc))
            && admits_value(&self.current_cities, &c.city)
            && admits_value(&self.preferred_cities, &c.preferred_city)
            && admits_any(&self.skills, &c.skills)
            && admits_value(&self.notice_periods, &c.notice_period)
            && admits_value(&self.education_levels, &c.highest_qualification)
            && admits_value(&self.current_companies, &c.current_company)
            && admits_value(&self.genders, &c.gender)
            && admits(self.year_of_passing, c.year_of_passing)
            && within_days(self.registered_within_days, c.registered_at, now)
            && within_days(self.active_within_days, c.last_active, now)
            && admits_any(&self.past_companies, &c.past_companies)
    }
}
