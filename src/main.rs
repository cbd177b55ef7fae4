use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use log::{debug, warn};

use mermaid_fmt::{
    diagnose, fix_common_issues, validate_mermaid_syntax, DiagramSpec, Direction, Error,
    FormatOptions, Result,
};

const DEMO_FLOWCHART: &str = r#"
flowchart TD
    A["SAP Order Processing Pipeline
"]
    B["SFTP Batch Upload Job
"]
    A --> B
"#;

#[derive(Parser, Debug)]
#[command(name = "mermaid-fmt")]
#[command(version)]
#[command(about = "Format, fix and lint Mermaid diagram source", long_about = None)]
struct Args {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Strip code fences, collapse multi-line labels and rewrite List~T~ generics
    Fix {
        /// Input file (default: stdin)
        input: Option<PathBuf>,
    },

    /// Report known rendering-breaking patterns; exits 1 when any are found
    Validate {
        /// Input file (default: stdin)
        input: Option<PathBuf>,
    },

    /// Build diagram text from a JSON description
    Generate {
        /// Input file (default: stdin)
        input: Option<PathBuf>,

        /// Flowchart direction
        #[arg(short, long, default_value = "TD")]
        direction: Direction,

        /// Spaces per indentation level
        #[arg(short, long, default_value_t = 4)]
        indent: usize,
    },

    /// Print a before/after example
    Demo,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    match run(args.command) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands) -> Result<ExitCode> {
    match command {
        Commands::Fix { input } => {
            let text = read_input(input)?;
            println!("{}", fix_common_issues(&text));
        }
        Commands::Validate { input } => {
            let text = read_input(input)?;
            let findings = diagnose(&text);
            if findings.is_empty() {
                println!("No syntax errors found");
            } else {
                for finding in &findings {
                    warn!("{:?}", finding);
                    println!("{}", finding);
                }
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::Generate {
            input,
            direction,
            indent,
        } => {
            let text = read_input(input)?;
            let spec = DiagramSpec::from_json(&text)?;
            let options = FormatOptions { direction, indent };
            println!("{}", spec.render(&options));
        }
        Commands::Demo => {
            let fixed = fix_common_issues(DEMO_FLOWCHART);
            println!("Original flowchart:");
            println!("{}", DEMO_FLOWCHART.trim());
            println!();
            println!("Fixed flowchart:");
            println!("{}", fixed);
            println!();

            let errors = validate_mermaid_syntax(DEMO_FLOWCHART);
            if errors.is_empty() {
                println!("No syntax errors found");
            } else {
                println!("Errors found: {:?}", errors);
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Read from the given file, or stdin when no path (or `-`) is given
fn read_input(path: Option<PathBuf>) -> Result<String> {
    let text = match path {
        Some(path) if path.as_os_str() != "-" => {
            debug!("reading {}", path.display());
            fs::read_to_string(&path)?
        }
        _ => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    if text.trim().is_empty() {
        return Err(Error::EmptyInput);
    }
    Ok(text)
}
