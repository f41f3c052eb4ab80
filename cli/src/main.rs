use std::io::IsTerminal;
use std::path::PathBuf;

use biolint_lib::{ElectionConfig, LintOptions, LintReport, lint_election};
use clap::Parser;
use owo_colors::OwoColorize;
use tracing_subscriber::{filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Width of the `=` separator framing the failure summary.
const SEPARATOR_LEN: usize = 68;

#[derive(Parser, Debug)]
#[command(
    name = "biolint",
    version,
    about = "Validates election candidate bio files before publishing"
)]
struct Cli {
    /// Election directory containing candidate bios and election.yaml
    #[arg(value_name = "ELECTION_PATH")]
    election_path: PathBuf,

    /// Maximum word count (0 = no limit)
    #[arg(long, value_name = "COUNT", default_value_t = 0)]
    max_words: usize,

    /// Recommended word count (shown in the failure summary)
    #[arg(long, value_name = "COUNT", default_value_t = 0)]
    recommended_words: usize,

    /// Comma-separated list of required section headers
    #[arg(long, value_name = "SECTIONS")]
    required_sections: Option<String>,

    /// Output the report as JSON
    #[arg(long)]
    json: bool,

    /// Disable colors (plain text output)
    #[arg(long)]
    plain: bool,

    /// Increase verbosity (-v INFO, -vv DEBUG, -vvv TRACE)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Initialize the tracing subscriber based on verbosity level; silent by
/// default so diagnostics never mix into the report.
fn init_tracing(verbose: u8) {
    if verbose == 0 {
        return;
    }

    let base_filter = match std::env::var("RUST_LOG") {
        Ok(filter) => filter,
        Err(_) => match verbose {
            1 => "info".to_string(),
            2 => "debug".to_string(),
            _ => "trace".to_string(),
        },
    };

    let filter = EnvFilter::try_new(&base_filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

/// Splits the comma-separated `--required-sections` value, trimming each
/// entry and dropping empties.
fn parse_sections(raw: Option<&str>) -> Vec<String> {
    raw.map(|value| {
        value
            .split(',')
            .map(str::trim)
            .filter(|section| !section.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}

fn render_report(report: &LintReport, recommended_words: usize, use_colors: bool) {
    if report.is_clean() {
        let summary = format!(
            "All {} candidate bio(s) validated successfully.",
            report.checked
        );
        if use_colors {
            println!("{}", summary.green());
        } else {
            println!("{summary}");
        }
        return;
    }

    for error in &report.errors {
        let path = error.file.display().to_string();
        if use_colors {
            println!("{}: {}", path.bold(), error.message);
        } else {
            println!("{path}: {}", error.message);
        }
    }

    let separator = "=".repeat(SEPARATOR_LEN);
    println!("\n{separator}");
    let count = format!("{} invalid candidate bio(s) detected.", report.errors.len());
    if use_colors {
        println!("{}", count.red().bold());
    } else {
        println!("{count}");
    }
    if recommended_words > 0 {
        println!("Bios should be limited to around {recommended_words} words, excluding headers.");
    }
    println!("Bios must follow the nomination template and filename format.");
    println!("{separator}");
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = ElectionConfig::load(&cli.election_path).unwrap_or_else(|err| {
        eprintln!("Warning: Could not load election.yaml: {err}");
        ElectionConfig::default()
    });

    let options = LintOptions {
        max_words: cli.max_words,
        required_sections: parse_sections(cli.required_sections.as_deref()),
    };

    let report = match lint_election(&cli.election_path, &config, &options) {
        Ok(report) => report,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };
    tracing::debug!(
        "checked {} file(s), {} error(s)",
        report.checked,
        report.errors.len()
    );

    if cli.json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                eprintln!("Failed to serialize report: {err}");
                std::process::exit(1);
            }
        }
    } else {
        let use_colors =
            !cli.plain && std::env::var("NO_COLOR").is_err() && std::io::stdout().is_terminal();
        render_report(&report, cli.recommended_words, use_colors);
    }

    if !report.is_clean() {
        std::process::exit(1);
    }
}
