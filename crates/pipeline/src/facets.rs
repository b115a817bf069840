//! Option lists for the filter sidebar.
//!
//! Every multi-select dropdown offers the distinct values present in the
//! current candidate snapshot, and the sliders show the observed bounds.

use data_loader::Candidate;
use serde::Serialize;
use std::collections::BTreeSet;

/// Distinct values per filter widget, each sorted ascending.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FacetOptions {
    pub cities: Vec<String>,
    pub preferred_cities: Vec<String>,
    pub skills: Vec<String>,
    pub notice_periods: Vec<String>,
    pub education_levels: Vec<String>,
    pub companies: Vec<String>,
    pub past_companies: Vec<String>,
    pub genders: Vec<String>,
    /// `(min, max)` experience in years
    pub experience_bounds: Option<(f32, f32)>,
    /// `(min, max)` compensation in lakhs per annum
    pub compensation_bounds: Option<(f64, f64)>,
    /// `(min, max)` year of passing
    pub passing_year_bounds: Option<(u16, u16)>,
}

#[derive(Default)]
struct FacetSets<'a> {
    cities: BTreeSet<&'a str>,
    preferred_cities: BTreeSet<&'a str>,
    skills: BTreeSet<&'a str>,
    notice_periods: BTreeSet<&'a str>,
    education_levels: BTreeSet<&'a str>,
    companies: BTreeSet<&'a str>,
    past_companies: BTreeSet<&'a str>,
    genders: BTreeSet<&'a str>,
}

fn insert<'a>(set: &mut BTreeSet<&'a str>, value: &'a str) {
    let value = value.trim();
    if !value.is_empty() {
        set.insert(value);
    }
}

fn into_sorted(set: BTreeSet<&str>) -> Vec<String> {
    set.into_iter().map(str::to_string).collect()
}

fn widen<T: PartialOrd + Copy>(bounds: Option<(T, T)>, value: T) -> Option<(T, T)> {
    Some(match bounds {
        None => (value, value),
        Some((lo, hi)) => (
            if value < lo { value } else { lo },
            if value > hi { value } else { hi },
        ),
    })
}

impl FacetOptions {
    /// Gather facet options from a candidate collection.
    ///
    /// Values are trimmed and blank values are dropped.
    pub fn collect(candidates: &[Candidate]) -> Self {
        let mut sets = FacetSets::default();
        let mut options = FacetOptions::default();

        for c in candidates {
            insert(&mut sets.cities, &c.city);
            insert(&mut sets.preferred_cities, &c.preferred_city);
            insert(&mut sets.notice_periods, &c.notice_period);
            insert(&mut sets.education_levels, &c.highest_qualification);
            insert(&mut sets.companies, &c.current_company);
            insert(&mut sets.genders, &c.gender);
            for skill in &c.skills {
                insert(&mut sets.skills, skill);
            }
            for company in &c.past_companies {
                insert(&mut sets.past_companies, company);
            }

            options.experience_bounds = widen(options.experience_bounds, c.experience_years);
            options.compensation_bounds = widen(options.compensation_bounds, c.current_ctc);
            if let Some(year) = c.year_of_passing {
                options.passing_year_bounds = widen(options.passing_year_bounds, year);
            }
        }

        options.cities = into_sorted(sets.cities);
        options.preferred_cities = into_sorted(sets.preferred_cities);
        options.skills = into_sorted(sets.skills);
        options.notice_periods = into_sorted(sets.notice_periods);
        options.education_levels = into_sorted(sets.education_levels);
        options.companies = into_sorted(sets.companies);
        options.past_companies = into_sorted(sets.past_companies);
        options.genders = into_sorted(sets.genders);
        options
    }
}
