//! writedocx CLI - format generated articles into documents

use std::collections::HashSet;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use writedocx::parser::{Lines, ParseOptions};
use writedocx::{
    Config, ErrorMode, Exporter, FormatJob, FormatStats, Formatter, JsonFormat, Role,
};

type CliResult<T = ()> = Result<T, Box<dyn std::error::Error>>;

#[derive(Parser)]
#[command(name = "writedocx")]
#[command(version)]
#[command(about = "Format generated articles into DOCX, JSON, and text", long_about = None)]
struct Cli {
    /// Input text file ("-" for stdin)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output directory
    #[arg(value_name = "OUTPUT_DIR")]
    output: Option<PathBuf>,

    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Args)]
struct GlobalArgs {
    /// Default output directory for written documents
    #[arg(long, global = true, env = "WRITEDOCX_OUTPUT_DIR", value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// URL prefix for download links
    #[arg(long, global = true, env = "WRITEDOCX_DOWNLOAD_PREFIX", value_name = "PREFIX")]
    download_prefix: Option<String>,

    /// Reject content that is blank after cleaning
    #[arg(long, global = true, env = "WRITEDOCX_STRICT")]
    strict: bool,

    /// Render batches on a single thread
    #[arg(long, global = true)]
    sequential: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Render text to a document (DOCX unless the name says otherwise)
    Render {
        /// Input text file ("-" for stdin)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output directory
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,

        /// Output file name (.docx, .json or .txt)
        #[arg(short, long, value_name = "NAME")]
        name: Option<String>,
    },

    /// Render text and print its download link
    Export {
        /// Input text file ("-" for stdin)
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Print the document model as JSON
    Json {
        /// Input text file ("-" for stdin)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Print the cleaned text, one block per line
    Text {
        /// Input text file ("-" for stdin)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Show the role of every line and statistics
    Inspect {
        /// Input text file ("-" for stdin)
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Render many files to DOCX
    Batch {
        /// Input text files
        #[arg(value_name = "FILES", required = true)]
        inputs: Vec<PathBuf>,

        /// Output directory
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,
    },

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let global = cli.global;

    let result = match cli.command {
        Some(Commands::Render {
            input,
            output,
            name,
        }) => cmd_render(&global, &input, output.as_deref(), name.as_deref()),
        Some(Commands::Export { input }) => cmd_export(&global, &input),
        Some(Commands::Json {
            input,
            output,
            compact,
        }) => cmd_json(&global, &input, output.as_deref(), compact),
        Some(Commands::Text { input, output }) => cmd_text(&global, &input, output.as_deref()),
        Some(Commands::Inspect { input }) => cmd_inspect(&global, &input),
        Some(Commands::Batch { inputs, output }) => cmd_batch(&global, &inputs, output.as_deref()),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: render if input is provided
            if let Some(input) = cli.input {
                cmd_render(&global, &input, cli.output.as_deref(), None)
            } else {
                println!("{}", "Usage: writedocx <FILE> [OUTPUT_DIR]".yellow());
                println!("       writedocx --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

/// Build the process configuration from flags and environment.
fn build_config(global: &GlobalArgs, output: Option<&Path>) -> CliResult<Config> {
    let mut config = Config::new()
        .with_error_mode(if global.strict {
            ErrorMode::Strict
        } else {
            ErrorMode::Lenient
        })
        .with_parallel(!global.sequential);

    if let Some(dir) = output.or(global.output_dir.as_deref()) {
        config = config.with_output_dir(dir);
    }
    if let Some(ref prefix) = global.download_prefix {
        config = config.with_download_prefix(prefix.as_str());
    }

    Ok(config.validate()?)
}

fn read_input(input: &Path) -> io::Result<String> {
    if input == Path::new("-") {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text)?;
        Ok(text)
    } else {
        fs::read_to_string(input)
    }
}

/// Document name derived from the input file ("article.docx" for stdin).
fn default_name(input: &Path) -> String {
    match input.file_stem() {
        Some(stem) if input != Path::new("-") => format!("{}.docx", stem.to_string_lossy()),
        _ => "article.docx".to_string(),
    }
}

/// Document names for a batch, suffixed `_2`, `_3`, ... where inputs share a
/// file stem (`a/x.txt` and `b/x.txt`).
fn batch_names(inputs: &[PathBuf]) -> Vec<String> {
    let mut taken = HashSet::new();
    inputs
        .iter()
        .map(|input| {
            let name = default_name(input);
            if taken.insert(name.clone()) {
                return name;
            }
            let stem = name.trim_end_matches(".docx");
            (2..)
                .map(|n| format!("{}_{}.docx", stem, n))
                .find(|candidate| taken.insert(candidate.clone()))
                .unwrap_or(name)
        })
        .collect()
}

fn write_or_print(output: Option<&Path>, content: &str) -> CliResult {
    if let Some(path) = output {
        fs::write(path, content)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", content);
    }
    Ok(())
}

fn cmd_render(
    global: &GlobalArgs,
    input: &Path,
    output: Option<&Path>,
    name: Option<&str>,
) -> CliResult {
    let config = build_config(global, output)?;
    let content = read_input(input)?;
    let name = name.map(str::to_string).unwrap_or_else(|| default_name(input));

    let result = Formatter::from_config(&config).render_with_stats(&content, &name)?;

    println!("{} {}", "Saved to".green(), result.path.display());
    print_stats(&result.stats);
    Ok(())
}

fn cmd_export(global: &GlobalArgs, input: &Path) -> CliResult {
    let config = build_config(global, None)?;
    let content = read_input(input)?;

    let export = Exporter::from_config(&config).export_content(&content)?;

    println!("{}: {}", "File".bold(), export.path.display());
    println!("{}: {}", "Download".bold(), export.download_url);
    Ok(())
}

fn cmd_json(
    global: &GlobalArgs,
    input: &Path,
    output: Option<&Path>,
    compact: bool,
) -> CliResult {
    let config = build_config(global, None)?;
    let content = read_input(input)?;
    let doc = Formatter::from_config(&config).format(&content)?;

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    let json = writedocx::render::to_json(&doc, format)?;
    write_or_print(output, &json)
}

fn cmd_text(global: &GlobalArgs, input: &Path, output: Option<&Path>) -> CliResult {
    let config = build_config(global, None)?;
    let content = read_input(input)?;
    let doc = Formatter::from_config(&config).format(&content)?;

    let text = writedocx::render::to_text(&doc, false);
    write_or_print(output, &text)
}

fn cmd_inspect(global: &GlobalArgs, input: &Path) -> CliResult {
    let config = build_config(global, None)?;
    let content = read_input(input)?;

    println!("{}", "Line Roles".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    let options = ParseOptions::new()
        .with_error_mode(config.error_mode())
        .with_blank_lines(true);
    for line in Lines::new(&content, options) {
        let label = format!("{:<10}", line.role.as_str());
        let label = match line.role {
            Role::Title => label.as_str().green().bold(),
            Role::Subheading => label.as_str().cyan(),
            Role::Paragraph => label.as_str().normal(),
            Role::Blank => label.as_str().dimmed(),
        };
        println!("{:>4} {} {}", line.line_number, label, line.text);
    }

    let (doc, stats) = Formatter::from_config(&config).format_with_stats(&content)?;

    println!();
    println!("{}", "Document".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    if let Some(ref title) = doc.metadata.title {
        println!("{}: {}", "Title".bold(), title);
    }
    print_stats(&stats);
    Ok(())
}

fn cmd_batch(global: &GlobalArgs, inputs: &[PathBuf], output: Option<&Path>) -> CliResult {
    let config = build_config(global, output)?;
    let formatter = Formatter::from_config(&config);

    let pb = ProgressBar::new(inputs.len() as u64 + 1);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("#>-"),
    );

    pb.set_message("Reading inputs...");
    let mut jobs = Vec::with_capacity(inputs.len());
    for (input, name) in inputs.iter().zip(batch_names(inputs)) {
        let content = read_input(input)?;
        jobs.push(FormatJob::new(content, name));
        pb.inc(1);
    }

    pb.set_message("Rendering...");
    let results = formatter.render_batch(&jobs);
    pb.inc(1);
    pb.finish_with_message("Done!");

    println!("\n{}", "Output files:".green().bold());
    let mut failed = 0;
    for (i, (input, result)) in inputs.iter().zip(&results).enumerate() {
        let branch = if i + 1 == inputs.len() { "└─" } else { "├─" };
        match result {
            Ok(path) => println!("  {} {}", branch.dimmed(), path.display()),
            Err(e) => {
                failed += 1;
                println!("  {} {} {}", branch.dimmed(), input.display(), e.to_string().red());
            }
        }
    }

    if failed > 0 {
        return Err(format!("{} of {} files failed", failed, inputs.len()).into());
    }
    Ok(())
}

fn print_stats(stats: &FormatStats) {
    println!("{}: {}", "Lines".bold(), stats.line_count);
    println!("{}: {}", "Blank lines".bold(), stats.blank_count);
    println!("{}: {}", "Subheadings".bold(), stats.subheading_count);
    println!("{}: {}", "Paragraphs".bold(), stats.paragraph_count);
    println!("{}: {}", "Characters".bold(), stats.char_count);
}

fn cmd_version() {
    println!("{} {}", "writedocx".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Article to DOCX formatting tool");
    println!();
    println!("License: MIT");
}
