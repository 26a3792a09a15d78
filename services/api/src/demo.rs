use crate::infra::{load_catalog, parse_date, InMemorySessionStore};
use chrono::{Local, NaiveDate};
use clap::Args;
use job_agent::cv::{
    CvAnalysis, CvAnalysisReport, CvDocument, CvService, MockCvAnalyzer, UploadPolicy,
    UploadSession, DEFAULT_ANALYSIS_DELAY,
};
use job_agent::error::AppError;
use job_agent::listings::{FilterCriteria, JobCatalog, JobId, JobListing, ListingSearch, SortKey};
use job_agent::session::{SessionIssuer, SessionProvider, User};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

#[derive(Args, Debug, Default)]
pub(crate) struct SourceArgs {
    /// Read listings from this CSV export instead of the built-in fixture
    #[arg(long)]
    pub(crate) csv: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct JobsListArgs {
    #[command(flatten)]
    pub(crate) source: SourceArgs,
    /// Case-insensitive match against title, company, and skills
    #[arg(long)]
    pub(crate) search: Option<String>,
    /// Substring the location must contain (case-sensitive)
    #[arg(long)]
    pub(crate) location: Option<String>,
    /// Exact job type, e.g. "Full-time"
    #[arg(long = "type")]
    pub(crate) job_type: Option<String>,
    /// Exact experience band, e.g. "3-5 years"
    #[arg(long)]
    pub(crate) experience: Option<String>,
    /// match_score, posted_date, or salary
    #[arg(long, default_value = "match_score")]
    pub(crate) sort: SortKey,
    /// Reference date for relative posting dates (defaults to today)
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
}

#[derive(Args, Debug)]
pub(crate) struct JobsShowArgs {
    #[command(flatten)]
    pub(crate) source: SourceArgs,
    /// Listing id
    pub(crate) id: String,
}

#[derive(Args, Debug)]
pub(crate) struct CvAnalyzeArgs {
    /// CV file (PDF, DOC, DOCX, or TXT)
    pub(crate) path: PathBuf,
    /// Simulated provider latency in milliseconds
    #[arg(long, default_value_t = DEFAULT_ANALYSIS_DELAY.as_millis() as u64)]
    pub(crate) delay_ms: u64,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    #[command(flatten)]
    pub(crate) source: SourceArgs,
    /// Reference date for relative posting dates (defaults to today)
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Analyse this CV instead of the bundled sample text
    #[arg(long)]
    pub(crate) cv: Option<PathBuf>,
    /// Simulated provider latency in milliseconds
    #[arg(long, default_value_t = 0)]
    pub(crate) delay_ms: u64,
}

pub(crate) fn run_jobs_list(args: JobsListArgs) -> Result<(), AppError> {
    let JobsListArgs {
        source,
        search,
        location,
        job_type,
        experience,
        sort,
        today,
    } = args;

    let catalog = load_catalog(source.csv.as_deref())?;
    let today = today.unwrap_or_else(|| Local::now().date_naive());

    let mut criteria = FilterCriteria::new(today).sort_by(sort);
    if let Some(term) = search {
        criteria = criteria.search(term);
    }
    if let Some(location) = location {
        criteria = criteria.location(location);
    }
    if let Some(job_type) = job_type {
        criteria = criteria.job_type(job_type);
    }
    if let Some(experience) = experience {
        criteria = criteria.experience(experience);
    }

    render_search(&catalog.search(&criteria));
    Ok(())
}

pub(crate) fn run_jobs_facets(args: SourceArgs) -> Result<(), AppError> {
    let catalog = load_catalog(args.csv.as_deref())?;
    let facets = catalog.facets();
    println!("Locations: {}", facets.locations.join(", "));
    println!("Job types: {}", facets.job_types.join(", "));
    println!("Experience levels: {}", facets.experience_levels.join(", "));
    Ok(())
}

pub(crate) fn run_jobs_show(args: JobsShowArgs) -> Result<(), AppError> {
    let catalog = load_catalog(args.source.csv.as_deref())?;
    let id = JobId::new(args.id);
    let listing = catalog.get(&id).ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("job '{id}' not found"),
        )
    })?;

    render_listing(listing);
    println!("  Skills: {}", listing.skills.join(", "));
    println!("  Remote: {}", if listing.is_remote { "yes" } else { "no" });
    println!("  {}", listing.description);
    Ok(())
}

pub(crate) async fn run_cv_analyze(args: CvAnalyzeArgs) -> Result<(), AppError> {
    let document = read_cv(&args.path)?;
    let service = CvService::new(
        Arc::new(MockCvAnalyzer::new(Duration::from_millis(args.delay_ms))),
        UploadPolicy::default(),
    );

    println!("{}", service.policy().describe());
    println!("Analyzing {} ({})...", document.file_name, document.size_label());
    let report = service.analyze(document).await?;
    render_report(&report);
    Ok(())
}

pub(crate) async fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        source,
        today,
        cv,
        delay_ms,
    } = args;
    let today = today.unwrap_or_else(|| Local::now().date_naive());

    println!("AI Job Agent demo");

    let sessions = InMemorySessionStore::new(chrono::Duration::minutes(30));
    let token = sessions.sign_in(User {
        name: "Demo User".to_string(),
        email: "demo@example.com".to_string(),
    })?;
    let session = sessions.session(Some(&token))?;
    if let Some(welcome) = session.welcome() {
        println!("\n{}", welcome.greeting);
        println!("{}", welcome.prompt);
        for action in &welcome.actions {
            match action.href {
                Some(href) => println!("  - {} ({}) -> {}", action.title, action.description, href),
                None => println!("  - {} ({})", action.title, action.description),
            }
        }
    }

    let catalog = load_catalog(source.csv.as_deref())?;
    demo_searches(&catalog, today);

    println!("\nCV upload");
    let service = CvService::new(
        Arc::new(MockCvAnalyzer::new(Duration::from_millis(delay_ms))),
        UploadPolicy::default(),
    );
    let mut upload = UploadSession::new(*service.policy());
    let document = match cv {
        Some(path) => read_cv(&path)?,
        None => sample_cv(),
    };
    match upload.select(document) {
        Ok(kind) => println!("- Selected {} document", kind.label()),
        Err(err) => {
            println!("  Upload rejected: {}", err);
            return Ok(());
        }
    }

    let document = match upload.begin_analysis() {
        Ok(document) => document,
        Err(err) => {
            println!("  Analysis unavailable: {}", err);
            return Ok(());
        }
    };
    println!("- Analyzing {} ({})...", document.file_name, document.size_label());
    let outcome = match service.start(document) {
        Ok(task) => task.outcome().await,
        Err(err) => Err(err),
    };
    if let Err(err) = upload.finish(outcome) {
        println!("  Analysis state error: {}", err);
        return Ok(());
    }
    match upload.analysis() {
        Some(analysis) => render_analysis(analysis),
        None => println!("  Analysis did not complete ({})", upload.stage().label()),
    }

    sessions.logout(&token)?;
    println!("\nSigned out.");
    Ok(())
}

fn demo_searches(catalog: &JobCatalog, today: NaiveDate) {
    println!("\nRecommended jobs (as of {today})");
    for (heading, criteria) in demo_queries(today) {
        if let Some(heading) = heading {
            println!("\n{heading}");
        }
        render_search(&catalog.search(&criteria));
    }
}

fn demo_queries(today: NaiveDate) -> Vec<(Option<&'static str>, FilterCriteria)> {
    vec![
        (None, FilterCriteria::new(today)),
        (
            Some("Search \"react\", highest salary first"),
            FilterCriteria::new(today)
                .search("react")
                .sort_by(SortKey::Salary),
        ),
        (
            Some("Full-time roles needing 3-5 years, oldest posting first"),
            FilterCriteria::new(today)
                .job_type("Full-time")
                .experience("3-5 years")
                .sort_by(SortKey::PostedDate),
        ),
    ]
}

fn read_cv(path: &Path) -> Result<CvDocument, AppError> {
    let bytes = std::fs::read(path)?;
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    let content_type = mime_guess::from_path(path)
        .first()
        .map(|mime| mime.essence_str().to_string());
    Ok(CvDocument::new(file_name, content_type, bytes))
}

fn sample_cv() -> CvDocument {
    CvDocument::new(
        "demo-cv.txt",
        Some("text/plain".to_string()),
        b"Frontend engineer with five years of React, TypeScript, and Node.js.".to_vec(),
    )
}

fn render_search(search: &ListingSearch) {
    println!(
        "{} job{} | sorted by {}",
        search.total,
        if search.total == 1 { "" } else { "s" },
        search.sort_label
    );
    if let Some(empty) = &search.empty_state {
        println!("  {}. {}", empty.title, empty.hint);
        return;
    }
    for listing in &search.jobs {
        render_listing(listing);
    }
}

fn render_listing(listing: &JobListing) {
    println!(
        "- [{}] {}% {} @ {} | {} | {} | {} | {} | {}",
        listing.id,
        listing.match_score,
        listing.title,
        listing.company,
        listing.location,
        listing.job_type,
        listing.experience,
        listing.salary,
        listing.posted_date
    );
}

fn render_report(report: &CvAnalysisReport) {
    println!(
        "{} ({}, {}) analysed by {} backend",
        report.file_name,
        report.kind.label(),
        report.size_label,
        report.backend
    );
    render_analysis(&report.analysis);
}

fn render_analysis(analysis: &CvAnalysis) {
    println!("  Match score: {}%", analysis.match_score);
    println!("  Experience: {}", analysis.experience_level);
    println!("  Skills: {}", analysis.skills.join(", "));
    println!("  Industries: {}", analysis.industries.join(", "));
    println!("  Suggested roles: {}", analysis.suggested_roles.join(", "));
}
