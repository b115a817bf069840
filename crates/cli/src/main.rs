use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use data_loader::{Candidate, CandidateId, CandidateStore, InMemoryGateway, Role, User};
use pipeline::{FilterCriteria, RangeCriterion, SearchRequest, SortOrder};
use rand::Rng;
use rand::seq::IndexedRandom;
use server::{SearchConfig, SearchOrchestrator, SearchResults, Session};
use std::collections::BTreeSet;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Semaphore;
use tracing::info;

/// talent-search - Resume search over a candidate export
#[derive(Parser)]
#[command(name = "talent-search")]
#[command(about = "Boolean resume search with filters, sorting and paging", long_about = None)]
struct Cli {
    /// Candidate export (.json or .jsonl); overrides TALENT_SEARCH_DATA_FILE
    #[arg(short, long)]
    data_file: Option<PathBuf>,

    /// Role to sign in as
    #[arg(long, value_enum, default_value_t = RoleArg::Admin)]
    role: RoleArg,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum RoleArg {
    Admin,
    Client,
    Applicant,
}

impl From<RoleArg> for Role {
    fn from(role: RoleArg) -> Self {
        match role {
            RoleArg::Admin => Role::Admin,
            RoleArg::Client => Role::Client,
            RoleArg::Applicant => Role::Applicant,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Search candidates with a Boolean query and sidebar filters
    Search {
        #[command(flatten)]
        args: SearchArgs,
    },

    /// Show one candidate's full profile
    Candidate {
        /// Candidate ID
        id: String,
    },

    /// List the option values for every multi-select filter
    Facets,

    /// Run benchmark to test performance
    Benchmark {
        /// Number of searches to run
        #[arg(long, default_value = "100")]
        requests: usize,

        /// Number of searches in flight at once
        #[arg(long, default_value = "10")]
        concurrent: usize,
    },
}

#[derive(clap::Args)]
struct SearchArgs {
    /// Query such as '"Java" AND "Spring Boot"'; empty matches everyone
    #[arg(default_value = "")]
    query: String,

    /// Minimum years of experience
    #[arg(long)]
    min_exp: Option<f32>,
    /// Maximum years of experience
    #[arg(long)]
    max_exp: Option<f32>,

    /// Minimum current CTC (lakhs per annum)
    #[arg(long)]
    min_ctc: Option<f64>,
    /// Maximum current CTC (lakhs per annum)
    #[arg(long)]
    max_ctc: Option<f64>,

    /// Earliest year of passing
    #[arg(long)]
    min_year: Option<u16>,
    /// Latest year of passing
    #[arg(long)]
    max_year: Option<u16>,

    /// Current city (repeatable)
    #[arg(long = "city")]
    cities: Vec<String>,
    /// Preferred city (repeatable)
    #[arg(long = "preferred-city")]
    preferred_cities: Vec<String>,
    /// Skill; any one match is enough (repeatable)
    #[arg(long = "skill")]
    skills: Vec<String>,
    /// Notice period (repeatable)
    #[arg(long = "notice-period")]
    notice_periods: Vec<String>,
    /// Highest qualification or degree (repeatable)
    #[arg(long = "education")]
    education_levels: Vec<String>,
    /// Current company (repeatable)
    #[arg(long = "company")]
    companies: Vec<String>,
    /// Past company (repeatable)
    #[arg(long = "past-company")]
    past_companies: Vec<String>,
    /// Gender (repeatable)
    #[arg(long = "gender")]
    genders: Vec<String>,

    /// Registered no more than N days ago
    #[arg(long)]
    registered_within: Option<u32>,
    /// Active no more than N days ago
    #[arg(long)]
    active_within: Option<u32>,

    /// Sort column: name, experience, compensation, city, lastActive, status
    #[arg(long)]
    sort: Option<String>,
    /// Sort descending
    #[arg(long)]
    desc: bool,

    /// 1-based page number
    #[arg(long, default_value = "1")]
    page: usize,
    /// Rows per page (defaults to TALENT_SEARCH_PAGE_SIZE)
    #[arg(long)]
    page_size: Option<usize>,

    /// Print the result page as JSON
    #[arg(long)]
    json: bool,
}

impl SearchArgs {
    fn to_request(&self) -> SearchRequest {
        let mut criteria = FilterCriteria::new();
        // Only ranges the user touched are enforced; a missing end takes the
        // slider bound
        criteria.experience =
            RangeCriterion::from_ends(self.min_exp, self.max_exp, RangeCriterion::EXPERIENCE);
        criteria.salary =
            RangeCriterion::from_ends(self.min_ctc, self.max_ctc, RangeCriterion::SALARY);
        criteria.year_of_passing = RangeCriterion::from_ends(
            self.min_year,
            self.max_year,
            RangeCriterion::YEAR_OF_PASSING,
        );
        criteria.current_cities = to_set(&self.cities);
        criteria.preferred_cities = to_set(&self.preferred_cities);
        criteria.skills = to_set(&self.skills);
        criteria.notice_periods = to_set(&self.notice_periods);
        criteria.education_levels = to_set(&self.education_levels);
        criteria.current_companies = to_set(&self.companies);
        criteria.past_companies = to_set(&self.past_companies);
        criteria.genders = to_set(&self.genders);
        criteria.registered_within_days = self.registered_within;
        criteria.active_within_days = self.active_within;

        let direction = if self.desc { "desc" } else { "asc" };
        let sort = self
            .sort
            .as_deref()
            .map(|field| SortOrder::from_identifiers(field, direction))
            .unwrap_or_default();

        // 0 asks the orchestrator for its configured default
        SearchRequest::new(self.query.clone())
            .with_criteria(criteria)
            .with_sort(sort)
            .with_page(self.page, self.page_size.unwrap_or(0))
    }
}

fn to_set(values: &[String]) -> BTreeSet<String> {
    values.iter().cloned().collect()
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let mut config = SearchConfig::from_env();
    if let Some(path) = cli.data_file {
        config.data_file = path;
    }
    info!(?config, "Using search config");

    println!("Loading candidates from {}...", config.data_file.display());
    let start = Instant::now();
    let store = Arc::new(
        CandidateStore::load_from_file(&config.data_file)
            .context("Failed to load candidate export")?,
    );
    println!(
        "{} Loaded {} candidates in {:?}",
        "✓".green(),
        store.len(),
        start.elapsed()
    );

    let gateway = InMemoryGateway::new(store).with_user(User {
        id: "cli".to_string(),
        email: "cli@localhost".to_string(),
        role: cli.role.into(),
    });
    let orchestrator = SearchOrchestrator::new(Arc::new(gateway), config);
    let session = orchestrator.current_session();

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Search { args } => handle_search(&orchestrator, &session, args).await?,
        Commands::Candidate { id } => handle_candidate(&orchestrator, &session, &id).await?,
        Commands::Facets => handle_facets(&orchestrator, &session).await?,
        Commands::Benchmark {
            requests,
            concurrent,
        } => handle_benchmark(orchestrator, session, requests, concurrent).await?,
    }

    Ok(())
}

/// Handle the 'search' command
async fn handle_search(
    orchestrator: &SearchOrchestrator,
    session: &Session,
    args: SearchArgs,
) -> Result<()> {
    let request = args.to_request();
    let results = orchestrator
        .search(session, request)
        .await
        .context("Search failed")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&results.page)?);
    } else {
        print_results(&results, &args.query);
    }
    Ok(())
}

/// Handle the 'candidate' command
async fn handle_candidate(
    orchestrator: &SearchOrchestrator,
    session: &Session,
    id: &str,
) -> Result<()> {
    let candidate = orchestrator
        .candidate_profile(session, &CandidateId::from(id))
        .await?;

    println!("{}", format!("{} (#{})", candidate.name, candidate.id).bold().blue());
    print_field("Designation", &candidate.designation);
    print_field("Company", &candidate.current_company);
    print_field("Past companies", &candidate.past_companies.join(", "));
    print_field("City", &candidate.city);
    print_field("Preferred city", &candidate.preferred_city);
    print_field("Skills", &candidate.skills.join(", "));
    print_field("Degree", &candidate.degree);
    print_field("Qualification", &candidate.highest_qualification);
    if let Some(year) = candidate.year_of_passing {
        print_field("Year of passing", &year.to_string());
    }
    print_field("Experience", &format!("{:.1} years", candidate.experience_years));
    print_field("Current CTC", &format!("{:.2} LPA", candidate.current_ctc));
    print_field("Notice period", &candidate.notice_period);
    print_field("Gender", &candidate.gender);
    print_field("Status", candidate.status.label());
    if let Some(ts) = candidate.last_active {
        print_field("Last active", &ts.format("%Y-%m-%d %H:%M").to_string());
    }
    if let Some(ts) = candidate.registered_at {
        print_field("Registered", &ts.format("%Y-%m-%d").to_string());
    }
    Ok(())
}

/// Handle the 'facets' command
async fn handle_facets(orchestrator: &SearchOrchestrator, session: &Session) -> Result<()> {
    let facets = orchestrator.facets(session).await?;

    let lists = [
        ("Cities", &facets.cities),
        ("Preferred cities", &facets.preferred_cities),
        ("Skills", &facets.skills),
        ("Notice periods", &facets.notice_periods),
        ("Education", &facets.education_levels),
        ("Companies", &facets.companies),
        ("Past companies", &facets.past_companies),
        ("Genders", &facets.genders),
    ];
    for (label, values) in lists {
        println!("{} ({})", label.bold().blue(), values.len());
        for value in values {
            println!("  - {value}");
        }
    }

    if let Some((lo, hi)) = facets.experience_bounds {
        println!("{} {lo:.1} - {hi:.1} years", "Experience:".bold());
    }
    if let Some((lo, hi)) = facets.compensation_bounds {
        println!("{} {lo:.2} - {hi:.2} LPA", "Current CTC:".bold());
    }
    if let Some((lo, hi)) = facets.passing_year_bounds {
        println!("{} {lo} - {hi}", "Year of passing:".bold());
    }
    Ok(())
}

/// Handle the 'benchmark' command
async fn handle_benchmark(
    orchestrator: SearchOrchestrator,
    session: Session,
    requests: usize,
    concurrent: usize,
) -> Result<()> {
    if requests == 0 {
        bail!("--requests must be at least 1");
    }

    // Random queries built from skills and cities that actually occur
    let facets = orchestrator.facets(&session).await?;
    let mut rng = rand::rng();
    let search_requests: Vec<SearchRequest> = (0..requests)
        .map(|_| random_request(&mut rng, &facets.skills, &facets.cities))
        .collect();

    let limiter = Arc::new(Semaphore::new(concurrent.max(1)));
    let session = Arc::new(session);
    let wall_clock = Instant::now();

    // Use tokio::spawn to make concurrent requests
    let mut handles = vec![];
    for request in search_requests {
        let orchestrator = orchestrator.clone();
        let session = session.clone();
        let limiter = limiter.clone();
        let handle = tokio::spawn(async move {
            let _permit = limiter.acquire_owned().await?;
            let start = Instant::now();
            orchestrator.search(&session, request).await?;
            Ok::<_, anyhow::Error>(start.elapsed())
        });
        handles.push(handle);
    }

    let mut timings: Vec<Duration> = Vec::with_capacity(requests);
    for handle in handles {
        timings.push(handle.await??);
    }
    let total_time = wall_clock.elapsed();

    let latency_sum: Duration = timings.iter().sum();
    let avg_latency = latency_sum / timings.len() as u32;
    timings.sort();
    let p50 = timings[timings.len() / 2];
    let p95 = timings[(timings.len() as f32 * 0.95) as usize];
    let p99 = timings[(timings.len() as f32 * 0.99) as usize];
    let throughput = requests as f32 / total_time.as_secs_f32();

    println!("{}", "Benchmark results:".bold().blue());
    println!("Total time: {:?}", total_time);
    println!("Average latency: {:?}", avg_latency);
    println!("P50 latency: {:?}", p50);
    println!("P95 latency: {:?}", p95);
    println!("P99 latency: {:?}", p99);
    println!("Throughput: {:.2} searches/second", throughput);

    Ok(())
}

fn random_request(rng: &mut impl Rng, skills: &[String], cities: &[String]) -> SearchRequest {
    let query = match (skills.choose(rng), skills.choose(rng)) {
        (Some(a), Some(b)) if rng.random_bool(0.5) => format!("\"{a}\" OR \"{b}\""),
        (Some(a), _) => a.clone(),
        _ => String::new(),
    };

    let mut criteria = FilterCriteria::new();
    if rng.random_bool(0.3) {
        if let Some(city) = cities.choose(rng) {
            criteria.current_cities.insert(city.clone());
        }
    }
    if rng.random_bool(0.3) {
        criteria.experience = Some(RangeCriterion::new(0.0, rng.random_range(2.0..15.0)));
    }

    SearchRequest::new(query)
        .with_criteria(criteria)
        .with_sort(SortOrder::from_identifiers("experience", "desc"))
}

/// Helper function to format and print a result page
fn print_results(results: &SearchResults, query: &str) {
    let page = &results.page;
    let heading = if query.trim().is_empty() {
        "All candidates".to_string()
    } else {
        format!("Results for '{query}'")
    };
    println!(
        "{} {}",
        heading.bold().blue(),
        format!(
            "({} of {} matched, page {}/{})",
            page.total_items,
            results.scanned,
            page.page,
            page.total_pages
        )
        .dimmed()
    );
    if !results.active_filters.is_empty() {
        println!("Filters: {}", results.active_filters.join(", ").cyan());
    }

    if page.items.is_empty() {
        println!("{}", "No candidates on this page".yellow());
        return;
    }

    let offset = (page.page - 1) * page.page_size;
    for (i, candidate) in page.items.iter().enumerate() {
        print_row(offset + i + 1, candidate);
    }

    if page.has_next() {
        println!("{}", format!("More results: --page {}", page.page + 1).dimmed());
    }
}

fn print_row(rank: usize, c: &Candidate) {
    println!(
        "{}. {} - {} @ {} [{}] {:.1}y, {:.2} LPA, {}",
        rank.to_string().green(),
        c.name.bold(),
        c.designation,
        c.current_company,
        c.city,
        c.experience_years,
        c.current_ctc,
        c.status.label()
    );
    if !c.skills.is_empty() {
        println!("   Skills: {}", c.skills.join(", "));
    }
}

fn print_field(label: &str, value: &str) {
    if !value.is_empty() {
        println!("{}{}: {}", "• ".green(), label, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn search_args(args: &[&str]) -> SearchArgs {
        let mut argv = vec!["talent-search", "search"];
        argv.extend_from_slice(args);
        match Cli::try_parse_from(argv).unwrap().command {
            Commands::Search { args } => args,
            _ => panic!("expected the search subcommand"),
        }
    }

    #[test]
    fn test_untouched_ranges_stay_unset() {
        let request = search_args(&["java"]).to_request();
        assert_eq!(request.query, "java");
        assert!(request.criteria.is_unrestricted());
        assert_eq!(request.page_size, 0);
    }

    #[test]
    fn test_max_exp_at_slider_bound_is_enforced() {
        let request = search_args(&["--max-exp", "30"]).to_request();
        assert_eq!(
            request.criteria.experience,
            Some(RangeCriterion::new(0.0, 30.0))
        );

        let mut senior = Candidate::new(1, "Senior");
        senior.experience_years = 31.0;
        assert!(!request.criteria.matches(&senior, chrono::Utc::now()));
    }

    #[test]
    fn test_filter_flags() {
        let request = search_args(&[
            "--city", "Pune", "--city", "Mumbai", "--skill", "Java", "--min-year", "2015",
            "--sort", "experience", "--desc", "--page", "2", "--page-size", "10",
        ])
        .to_request();

        assert_eq!(request.criteria.current_cities.len(), 2);
        assert_eq!(
            request.criteria.year_of_passing,
            Some(RangeCriterion::new(2015, 2030))
        );
        assert_eq!(request.sort, SortOrder::from_identifiers("experience", "desc"));
        assert_eq!((request.page, request.page_size), (2, 10));
    }
}
