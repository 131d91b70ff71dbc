//! Exam scheduler CLI.
//!
//! Reads an enrollment file and prints a conflict-free exam period assignment.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use exam_scheduler::{
    ExamSchedule, SchedulerConfig, load_enrollments, render_adjacency_matrix, render_text,
    to_dot, write_csv, write_json,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
    Csv,
    Dot,
}

#[derive(Parser)]
#[command(name = "exam-scheduler")]
#[command(about = "Assign exam periods so no student has two exams at once")]
struct Cli {
    /// Enrollment file, one `student_id:course1,course2,...` per line
    enrollments: PathBuf,

    /// Scheduler configuration (JSON)
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, short, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Print the course adjacency matrix before the schedule (text format only)
    #[arg(long)]
    matrix: bool,

    /// Records per shard when building the conflict graph in parallel
    #[arg(long)]
    shard_size: Option<usize>,

    /// Enable verbose output
    #[arg(long, short)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let mut config = match &cli.config {
        Some(path) => SchedulerConfig::load_from_json(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => SchedulerConfig::default(),
    };
    if let Some(shard_size) = cli.shard_size {
        config.shard_size = shard_size;
        config.validate()?;
    }

    let records = load_enrollments(&cli.enrollments)
        .with_context(|| format!("reading enrollments {}", cli.enrollments.display()))?;
    info!(students = records.len(), "enrollments loaded");

    let schedule = ExamSchedule::from_records(&records, &config);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match cli.format {
        OutputFormat::Text => {
            if cli.matrix {
                writeln!(out, "{}", render_adjacency_matrix(schedule.graph()))?;
            }
            write!(out, "{}", render_text(&schedule))?;
        }
        OutputFormat::Json => {
            write_json(&schedule, &mut out)?;
            writeln!(out)?;
        }
        OutputFormat::Csv => write_csv(&schedule, &mut out)?,
        OutputFormat::Dot => write!(out, "{}", to_dot(&schedule, &config))?,
    }
    out.flush()?;
    Ok(())
}
