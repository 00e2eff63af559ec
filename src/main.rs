use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use timetabler::audit::audit_schedule;
use timetabler::engine::{generate_schedule, SolveOptions};
use timetabler::io::{load_input_from_dir, validate_input};
use timetabler::model::{Schedule, StudentId, TeacherId};
use timetabler::report::{
    print_summary, render_json_summary, student_view, teacher_view, write_reports, OutputFormat,
};

#[derive(Parser)]
#[command(name = "timetabler")]
#[command(about = "Weekly school timetable generator")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a schedule from input data
    Schedule {
        /// Directory with students/teachers/courses/rooms JSON and an
        /// optional constraints.txt
        #[arg(short, long)]
        data: PathBuf,

        /// Output directory for report files
        #[arg(short, long, default_value = "./output")]
        output: PathBuf,

        /// Output format(s): json, markdown, text, or all
        #[arg(short, long, default_value = "all")]
        format: String,

        /// Skip the ILP and enroll with the greedy pass only
        #[arg(long)]
        no_ilp: bool,

        /// Rebalancing pass budget
        #[arg(long, default_value_t = 500)]
        iterations: u32,

        /// Suppress progress output, print a JSON summary only
        #[arg(short, long)]
        quiet: bool,
    },

    /// Audit an existing schedule against its input data
    Validate {
        /// Path to schedule.json
        #[arg(short, long)]
        schedule: PathBuf,

        /// Directory containing the input data
        #[arg(short, long)]
        data: PathBuf,

        /// Show soft metrics and statistics
        #[arg(short, long)]
        verbose: bool,
    },

    /// Render views from an existing schedule
    Report {
        /// Path to schedule.json
        #[arg(short, long)]
        schedule: PathBuf,

        /// Directory containing the input data
        #[arg(short, long)]
        data: PathBuf,

        /// Render one student's week
        #[arg(long)]
        student: Option<String>,

        /// Render one teacher's assignments
        #[arg(long)]
        teacher: Option<String>,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Schedule {
            data,
            output,
            format,
            no_ilp,
            iterations,
            quiet,
        } => run_schedule(&data, &output, &format, no_ilp, iterations, quiet),
        Commands::Validate {
            schedule,
            data,
            verbose,
        } => run_validate(&schedule, &data, verbose),
        Commands::Report {
            schedule,
            data,
            student,
            teacher,
        } => run_report(&schedule, &data, student, teacher),
    }
}

fn run_schedule(
    data: &PathBuf,
    output: &PathBuf,
    format: &str,
    no_ilp: bool,
    iterations: u32,
    quiet: bool,
) -> Result<()> {
    let input = load_input_from_dir(data).context("failed to load input data")?;
    let report = validate_input(&input)?;

    if !quiet {
        for warning in &report.warnings {
            println!("{} {}", "Warning:".yellow(), warning);
        }
        println!(
            "Loaded {} students, {} teachers, {} courses, {} rooms",
            input.students.len(),
            input.teachers.len(),
            input.courses.len(),
            input.rooms.len()
        );
    }

    let bar = if quiet {
        ProgressBar::hidden()
    } else {
        let bar = ProgressBar::new(100);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}% {msg}")
                .unwrap()
                .progress_chars("#>-"),
        );
        bar
    };

    let options = SolveOptions {
        max_optimization_iterations: iterations,
        use_ilp: !no_ilp,
        on_progress: None,
    }
    .with_progress(|event| {
        bar.set_position(event.percent as u64);
        bar.set_message(event.operation.clone());
    });

    let schedule = generate_schedule(&input, options)?;
    bar.finish_and_clear();

    let audit = audit_schedule(&schedule, &input);

    let formats = OutputFormat::parse_list(format);
    write_reports(&schedule, &input, &audit, output, &formats)?;

    if quiet {
        println!("{}", render_json_summary(&schedule)?);
    } else {
        print_summary(&schedule, &audit);
        println!("Reports written to: {}", output.display().to_string().green());
    }

    Ok(())
}

fn run_validate(schedule_path: &PathBuf, data: &PathBuf, verbose: bool) -> Result<()> {
    let input = load_input_from_dir(data)?;
    let schedule = load_schedule(schedule_path)?;

    let audit = audit_schedule(&schedule, &input);

    if audit.is_clean {
        println!("{}", "✓ Schedule satisfies all hard constraints".green().bold());
    } else {
        println!("{}", "✗ Schedule has violations".red().bold());
        for violation in &audit.violations {
            println!("  - {}: {}", violation.tag.to_string().red(), violation.message);
        }
    }

    if verbose {
        println!("\n{}", "Soft metrics:".bold());
        for metric in &audit.soft_metrics {
            println!("  {}: {:.1}% ({})", metric.name, metric.percent(), metric.details);
        }
        println!("\n{}", "Statistics:".bold());
        println!("  Sections:    {}", audit.stats.total_sections);
        println!("  Assignments: {}", audit.stats.total_assignments);
        println!(
            "  Unassigned:  {} required, {} electives",
            audit.stats.unassigned_required, audit.stats.unassigned_electives
        );
    }

    println!("\nScore: {:.1}/100", audit.score);
    Ok(())
}

fn run_report(
    schedule_path: &PathBuf,
    data: &PathBuf,
    student: Option<String>,
    teacher: Option<String>,
) -> Result<()> {
    let input = load_input_from_dir(data)?;
    let schedule = load_schedule(schedule_path)?;

    if let Some(student_id) = student {
        match student_view(&schedule, &input, &StudentId::new(student_id)) {
            Some(view) => println!("{view}"),
            None => println!("Student not found"),
        }
    } else if let Some(teacher_id) = teacher {
        match teacher_view(&schedule, &input, &TeacherId::new(teacher_id)) {
            Some(view) => println!("{view}"),
            None => println!("Teacher not found"),
        }
    } else {
        let audit = audit_schedule(&schedule, &input);
        print_summary(&schedule, &audit);
    }

    Ok(())
}

fn load_schedule(path: &PathBuf) -> Result<Schedule> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))
}
