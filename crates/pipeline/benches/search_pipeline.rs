//! Benchmarks for a full resume search pass
//!
//! Run with: cargo bench --package pipeline
//!
//! Uses a synthetic pool so no export file is needed.

use chrono::{Duration, Utc};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use data_loader::Candidate;
use pipeline::{FilterCriteria, RangeCriterion, SearchRequest, SortOrder};

const CITIES: [&str; 5] = ["Pune", "Mumbai", "Bangalore", "Chennai", "Hyderabad"];
const SKILLS: [&str; 6] = ["Java", "Python", "React", "SQL", "AWS", "Go"];

fn synthetic_pool(size: usize) -> Vec<Candidate> {
    let now = Utc::now();
    (0..size)
        .map(|i| {
            let mut c = Candidate::new(i as i64, format!("Candidate {i}"));
            c.designation = if i % 3 == 0 { "Developer" } else { "Analyst" }.to_string();
            c.city = CITIES[i % CITIES.len()].to_string();
            c.skills = vec![
                SKILLS[i % SKILLS.len()].to_string(),
                SKILLS[(i / 7) % SKILLS.len()].to_string(),
            ];
            c.experience_years = (i % 25) as f32;
            c.current_ctc = (i % 60) as f64;
            c.last_active = Some(now - Duration::days((i % 90) as i64));
            c
        })
        .collect()
}

fn bench_search_only(c: &mut Criterion) {
    let pool = synthetic_pool(20_000);
    let request = SearchRequest::new("\"Java\" AND \"SQL\"");

    c.bench_function("search_query_20k", |b| {
        b.iter(|| {
            let page = request.execute(black_box(&pool), Utc::now());
            black_box(page.total_items)
        })
    });
}

fn bench_full_pipeline(c: &mut Criterion) {
    let pool = synthetic_pool(20_000);
    let mut criteria = FilterCriteria::new();
    criteria.experience = Some(RangeCriterion::new(2.0, 12.0));
    criteria.current_cities = ["Pune".to_string(), "Mumbai".to_string()].into();
    criteria.active_within_days = Some(30);
    let request = SearchRequest::new("developer NOT python")
        .with_criteria(criteria)
        .with_sort(SortOrder::from_identifiers("experience", "desc"));

    c.bench_function("search_filter_sort_page_20k", |b| {
        b.iter(|| {
            let page = request.execute(black_box(&pool), Utc::now());
            black_box(page.items.len())
        })
    });
}

criterion_group!(benches, bench_search_only, bench_full_pipeline);
criterion_main!(benches);
