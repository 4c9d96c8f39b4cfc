//! Rollbook Binary
//!
//! Loads the register, runs the search and filter demonstration, and writes
//! the filtered records back out. With no arguments it reads
//! `students.txt` and writes `filtered_students.txt`.

use clap::{Parser, ValueEnum};
use rollbook::report::{render_search, render_table};
use rollbook::{Config, Date, RetentionPolicy, Session, Source};
use tracing_subscriber::{fmt, EnvFilter};

/// Rollbook
#[derive(Parser, Debug)]
#[command(name = "rollbook")]
#[command(about = "Sorted student register with grade and age filters")]
#[command(version)]
struct Args {
    /// File to load records from
    #[arg(short, long, default_value = "students.txt")]
    input: String,

    /// File to write the filtered records to
    #[arg(short, long, default_value = "filtered_students.txt")]
    output: String,

    /// Surname to search for
    #[arg(short, long, default_value = "Sydor")]
    search: String,

    /// Filter to apply; repeat to chain (default: any-high-grade)
    #[arg(short, long, value_enum)]
    filter: Vec<FilterKind>,

    /// Age threshold for the younger-than filter
    #[arg(long, default_value = "18")]
    max_age: i32,

    /// Date ages are computed on, as YYYY-MM-DD (default: today)
    #[arg(short, long)]
    reference_date: Option<String>,

    /// Do not write the output file
    #[arg(long)]
    no_save: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FilterKind {
    /// Keep students with at least one grade 4 or 5
    AnyHighGrade,
    /// Keep students whose grades are all 4 or higher
    AllHighGrades,
    /// Keep students younger than --max-age
    YoungerThan,
}

impl FilterKind {
    fn policy(self, reference: Date, max_age: i32) -> RetentionPolicy {
        match self {
            FilterKind::AnyHighGrade => RetentionPolicy::high_grade(),
            FilterKind::AllHighGrades => RetentionPolicy::all_high_grades(),
            FilterKind::YoungerThan => RetentionPolicy::younger_than(reference, max_age),
        }
    }
}

fn main() {
    // Logs go to stderr so the report on stdout stays clean
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,rollbook=info"));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config = match build_config(&args) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{}", e);
            std::process::exit(2);
        }
    };

    println!("=== Student Management System ===\n");

    let mut session = match Session::open(config) {
        Ok(session) => session,
        Err(e) => {
            tracing::error!("Failed to open session: {}", e);
            std::process::exit(1);
        }
    };

    if let Source::Seed = session.source() {
        println!("Using hardcoded student data...");
    }

    println!(
        "\n{}",
        render_table(session.store(), Some("All Students (sorted by surname):"))
    );

    let surname = session.config().search_surname.clone();
    println!("--- Searching for '{}' ---", surname);
    println!("{}", render_search(session.search(&surname)));

    session.apply_configured(|policy, removed, store| {
        println!("\n--- Filtering students ---");
        println!("{}...", policy);
        tracing::debug!(removed, "filter applied");

        println!(
            "\n{}",
            render_table(store, Some(policy.survivors_heading().as_str()))
        );
    });

    println!(
        "Average age on {}: {:.2}",
        session.reference_date(),
        session.average_age()
    );

    if session.config().save_output {
        match session.save() {
            Ok(written) => println!("Wrote {} students", written),
            Err(e) => tracing::error!("{}", e),
        }
    }

    session.close();
    println!("\nProgram completed successfully.");
}

/// Build the session config from the command line
fn build_config(args: &Args) -> rollbook::Result<Config> {
    let mut builder = Config::builder()
        .input_path(&args.input)
        .output_path(&args.output)
        .search_surname(&args.search)
        .save_output(!args.no_save);

    // Resolved once so filters and the average age agree on the date
    let reference = match &args.reference_date {
        Some(text) => Date::parse_iso(text)?,
        None => Date::today(),
    };
    builder = builder.reference_date(reference);

    if !args.filter.is_empty() {
        let filters = args
            .filter
            .iter()
            .map(|kind| kind.policy(reference, args.max_age))
            .collect();
        builder = builder.filters(filters);
    }

    Ok(builder.build())
}
