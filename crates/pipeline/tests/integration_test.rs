//! Integration tests for the pipeline.
//!
//! These tests run search, filters, sort and pagination together the way
//! the resume search page does.

use chrono::{DateTime, Duration, TimeZone, Utc};
use data_loader::{Candidate, CandidateStore};
use pipeline::filters::RangeCriterion;
use pipeline::{FilterCriteria, SearchRequest, SortDirection, SortField, SortOrder};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 15, 9, 30, 0).unwrap()
}

fn candidate(id: i64, name: &str, skills: &[&str], experience: f32, city: &str) -> Candidate {
    let mut c = Candidate::new(id, name);
    c.skills = skills.iter().map(|s| s.to_string()).collect();
    c.experience_years = experience;
    c.city = city.to_string();
    c
}

fn create_test_store() -> CandidateStore {
    let mut priya = candidate(1, "Priya Sharma", &["Java", "AWS"], 4.0, "Pune");
    priya.designation = "Senior Developer".to_string();
    priya.registered_at = Some(now() - Duration::days(6));
    priya.last_active = Some(now() - Duration::hours(5));

    let mut rahul = candidate(2, "Rahul Kumar", &["React"], 2.0, "Mumbai");
    rahul.designation = "Frontend Developer".to_string();
    rahul.registered_at = Some(now() - Duration::days(8));
    rahul.last_active = Some(now() - Duration::days(2));

    let mut sneha = candidate(3, "Sneha Iyer", &["Java", "Spring Boot", "Python"], 6.0, "Pune");
    sneha.designation = "Developer".to_string();
    sneha.registered_at = Some(now() - Duration::days(7));
    sneha.last_active = Some(now() - Duration::days(40));

    let mut arjun = candidate(4, "Arjun Mehta", &["Angular", "SQL"], 4.0, "Bangalore");
    arjun.designation = "Developer".to_string();
    arjun.registered_at = None;

    CandidateStore::from_candidates(vec![priya, rahul, sneha, arjun]).unwrap()
}

fn names(page: &pipeline::Page<&Candidate>) -> Vec<String> {
    page.items.iter().map(|c| c.name.clone()).collect()
}

#[test]
fn test_priya_found_by_java_in_pune() {
    let store = CandidateStore::from_candidates(vec![
        candidate(1, "Priya Sharma", &["Java", "AWS"], 4.0, "Pune"),
        candidate(2, "Rahul Kumar", &["React"], 2.0, "Mumbai"),
    ])
    .unwrap();

    let mut criteria = FilterCriteria::new();
    criteria.experience = Some(RangeCriterion::new(0.0, 20.0));
    criteria.current_cities.insert("Pune".to_string());

    let page = SearchRequest::new("\"Java\"")
        .with_criteria(criteria)
        .execute(store.candidates(), now());

    assert_eq!(names(&page), vec!["Priya Sharma"]);
}

#[test]
fn test_search_match_failing_filter_is_dropped() {
    let store = create_test_store();
    let mut criteria = FilterCriteria::new();
    criteria.current_cities.insert("Mumbai".to_string());

    // Priya and Sneha match "java" but live in Pune
    let page = SearchRequest::new("java")
        .with_criteria(criteria)
        .execute(store.candidates(), now());

    assert!(page.items.is_empty());
    assert_eq!(page.total_pages, 0);
}

#[test]
fn test_boolean_operators_over_store() {
    let store = create_test_store();
    let run = |query: &str| names(&SearchRequest::new(query).execute(store.candidates(), now()));

    assert_eq!(run(r#""Java" AND "Spring Boot""#), vec!["Sneha Iyer"]);
    assert_eq!(run(r#""React" OR "Angular""#), vec!["Rahul Kumar", "Arjun Mehta"]);
    assert_eq!(
        run(r#""Developer" NOT "Python""#),
        vec!["Priya Sharma", "Rahul Kumar", "Arjun Mehta"]
    );
    assert_eq!(run("PUNE"), run("pune"));
}

#[test]
fn test_registered_within_week() {
    let store = create_test_store();
    let mut criteria = FilterCriteria::new();
    criteria.registered_within_days = Some(7);

    let page = SearchRequest::default()
        .with_criteria(criteria)
        .execute(store.candidates(), now());

    // Priya at 6 days, Sneha at exactly 7; Rahul at 8 and Arjun unknown are out
    assert_eq!(names(&page), vec!["Priya Sharma", "Sneha Iyer"]);
}

#[test]
fn test_active_within_and_skills() {
    let store = create_test_store();
    let mut criteria = FilterCriteria::new();
    criteria.active_within_days = Some(30);
    criteria.skills = ["SQL", "React", "Java"].iter().map(|s| s.to_string()).collect();

    let page = SearchRequest::default()
        .with_criteria(criteria)
        .execute(store.candidates(), now());

    assert_eq!(names(&page), vec!["Priya Sharma", "Rahul Kumar"]);
}

#[test]
fn test_stable_sort_then_page() {
    let store = create_test_store();
    let page = SearchRequest::default()
        .with_sort(SortOrder::new(SortField::Experience, SortDirection::Ascending))
        .with_page(1, 3)
        .execute(store.candidates(), now());

    // Priya and Arjun tie on 4 years and keep store order
    assert_eq!(names(&page), vec!["Rahul Kumar", "Priya Sharma", "Arjun Mehta"]);
    assert_eq!(page.total_pages, 2);

    let second = SearchRequest::default()
        .with_sort(SortOrder::new(SortField::Experience, SortDirection::Ascending))
        .with_page(2, 3)
        .execute(store.candidates(), now());
    assert_eq!(names(&second), vec!["Sneha Iyer"]);
}

#[test]
fn test_fifty_three_candidates_in_pages_of_twenty_five() {
    let pool: Vec<Candidate> = (0..53)
        .map(|i| candidate(i, &format!("Dev {i}"), &["Rust"], 3.0, "Pune"))
        .collect();
    let store = CandidateStore::from_candidates(pool).unwrap();

    let page = |n| {
        SearchRequest::new("rust")
            .with_page(n, 25)
            .execute(store.candidates(), now())
    };

    assert_eq!(page(1).items.len(), 25);
    assert_eq!(page(3).items.len(), 3);
    assert!(page(4).items.is_empty());
    assert_eq!(page(1).total_pages, 3);
}

#[test]
fn test_repeated_runs_are_identical() {
    let store = create_test_store();
    let request = SearchRequest::new("developer")
        .with_sort(SortOrder::from_identifiers("name", "desc"));

    let first = names(&request.execute(store.candidates(), now()));
    let second = names(&request.execute(store.candidates(), now()));
    assert_eq!(first, second);
}
