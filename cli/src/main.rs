//! mdreport CLI - Markdown run report tool

mod demo;
mod template;

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;

use mdreport::{JsonFormat, ReportStats, Section};

use demo::DemoRun;
use template::HeaderTemplate;

#[derive(Parser)]
#[command(name = "mdreport")]
#[command(version)]
#[command(about = "Render hierarchical Markdown run reports", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a JSON report description to Markdown
    #[command(alias = "md")]
    Render {
        /// Report description (JSON)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Header template prepended to the report
        #[arg(long, value_name = "FILE", env = "MDREPORT_HEADER")]
        header: Option<PathBuf>,

        /// Template values (e.g., "model=large")
        #[arg(long = "set", value_name = "KEY=VALUE")]
        values: Vec<String>,
    },

    /// Print the normalized report as JSON
    Json {
        /// Report description (JSON)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Show report statistics
    Info {
        /// Report description (JSON)
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Run a simulated job and render its live report
    Demo {
        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Report title
        #[arg(long, default_value = "Demo Run")]
        title: String,

        /// Step budget of the simulated run
        #[arg(long, default_value = "6")]
        budget: u32,

        /// Maximum number of steps to execute
        #[arg(long, default_value = "100")]
        steps: u32,
    },

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Render {
            input,
            output,
            header,
            values,
        }) => cmd_render(&input, output.as_deref(), header.as_deref(), &values),
        Some(Commands::Json {
            input,
            output,
            compact,
        }) => cmd_json(&input, output.as_deref(), compact),
        Some(Commands::Info { input }) => cmd_info(&input),
        Some(Commands::Demo {
            output,
            title,
            budget,
            steps,
        }) => cmd_demo(output.as_deref(), &title, budget, steps),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            println!("{}", "Usage: mdreport <COMMAND>".yellow());
            println!("       mdreport --help for more information");
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn load_report(input: &Path) -> Result<Section, Box<dyn std::error::Error>> {
    let json = fs::read_to_string(input)
        .map_err(|e| format!("Cannot read {}: {}", input.display(), e))?;
    let report = mdreport::from_json(&json)?;
    log::debug!(
        "Loaded report {:?} with {} subsections",
        report.title(),
        report.subsection_count()
    );
    Ok(report)
}

/// Prepend the rendered header template, if any, to the report.
fn compose_document(
    report: &Section,
    header: Option<&str>,
    values: &[String],
) -> Result<String, Box<dyn std::error::Error>> {
    let markdown = mdreport::to_markdown(report);
    let Some(source) = header else {
        return Ok(markdown);
    };

    let mut template = HeaderTemplate::new(source);
    template.set("title", report.title());
    template.set("date", chrono::Local::now().format("%Y-%m-%d").to_string());
    for assignment in values {
        template.set_assignment(assignment)?;
    }
    Ok(format!("{}{}", template.render(), markdown))
}

fn write_output(output: Option<&Path>, content: &str) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(path) = output {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", content);
    }
    Ok(())
}

fn cmd_render(
    input: &Path,
    output: Option<&Path>,
    header: Option<&Path>,
    values: &[String],
) -> Result<(), Box<dyn std::error::Error>> {
    let report = load_report(input)?;
    let header = header.map(fs::read_to_string).transpose()?;
    let document = compose_document(&report, header.as_deref(), values)?;
    write_output(output, &document)
}

fn cmd_json(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let report = load_report(input)?;

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    let json = mdreport::to_json(&report, format)?;
    write_output(output, &json)
}

fn cmd_info(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let report = load_report(input)?;
    let stats = ReportStats::collect(&report);

    println!("{}", "Report Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Title".bold(), report.title());
    println!("{}: {}", "Sections".bold(), stats.section_count);
    println!("{}: {}", "Deepest level".bold(), stats.max_level);

    println!();
    println!("{}", "Content Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "Text lines".bold(), stats.element_count);
    println!(
        "{}: {} ({} rows)",
        "Tables".bold(),
        stats.table_count,
        stats.table_row_count
    );
    println!(
        "{}: {} ({} nodes)",
        "Outlines".bold(),
        stats.tree_count,
        stats.tree_node_count
    );
    println!("{}: {}", "Words".bold(), stats.word_count);
    println!("{}: {}", "Characters".bold(), stats.char_count);

    Ok(())
}

fn cmd_demo(
    output: Option<&Path>,
    title: &str,
    budget: u32,
    steps: u32,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut run = DemoRun::new(title, budget)?;
    let executed = run.run(steps)?;
    log::info!("Demo run finished after {} steps", executed);

    write_output(output, &mdreport::to_markdown(run.report()))
}

fn cmd_version() {
    println!("{} {}", "mdreport".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Hierarchical Markdown report tool");
    println!();
    println!("License: MIT");
}
