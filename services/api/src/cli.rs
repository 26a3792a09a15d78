use crate::demo::{
    run_cv_analyze, run_demo, run_jobs_facets, run_jobs_list, run_jobs_show, CvAnalyzeArgs,
    DemoArgs, JobsListArgs, JobsShowArgs, SourceArgs,
};
use crate::server;
use clap::{Args, Parser, Subcommand};
use job_agent::error::AppError;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "AI Job Agent",
    about = "Serve or explore the AI Job Agent listing engine and CV analysis from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Browse the job catalog
    Jobs {
        #[command(subcommand)]
        command: JobsCommand,
    },
    /// Upload a CV for analysis
    Cv {
        #[command(subcommand)]
        command: CvCommand,
    },
    /// Walk through sign-in, job search, and CV analysis end to end
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum JobsCommand {
    /// Filter and sort the catalog
    List(JobsListArgs),
    /// Show the distinct filter values present in the catalog
    Facets(SourceArgs),
    /// Show a single listing by id
    Show(JobsShowArgs),
}

#[derive(Subcommand, Debug)]
enum CvCommand {
    /// Validate a CV file and run it through the analysis provider
    Analyze(CvAnalyzeArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Serve listings from this CSV export instead of the configured source
    #[arg(long)]
    pub(crate) csv: Option<PathBuf>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Jobs {
            command: JobsCommand::List(args),
        } => run_jobs_list(args),
        Command::Jobs {
            command: JobsCommand::Facets(args),
        } => run_jobs_facets(args),
        Command::Jobs {
            command: JobsCommand::Show(args),
        } => run_jobs_show(args),
        Command::Cv {
            command: CvCommand::Analyze(args),
        } => run_cv_analyze(args).await,
        Command::Demo(args) => run_demo(args).await,
    }
}
