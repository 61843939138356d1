//! # doselabel CLI
//!
//! Command-line interface for composing and printing medication labels.
//!
//! ## Usage
//!
//! ```bash
//! # Write a default configuration to edit
//! doselabel init --out label.json
//!
//! # Preview every sheet as HTML
//! doselabel preview --config label.json --all --out preview.html
//!
//! # Print through CUPS
//! doselabel print --config label.json --command lp --arg -d --arg label_printer
//!
//! # Run the editor server
//! doselabel serve --listen 0.0.0.0:8080 --state label-state.json --out print.html
//! ```

use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use doselabel::{
    LabelError,
    clinic::ClinicProfile,
    config::{FieldUpdate, LabelConfiguration},
    printer::PrintOutcome,
    server::{ServerConfig, serve},
    session::Session,
    transport::PrintTarget,
};

/// doselabel - Bangla medication label composer
#[derive(Parser, Debug)]
#[command(name = "doselabel")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Write the default label configuration as JSON
    Init {
        /// Output file (stdout when omitted)
        #[arg(long, value_name = "FILE")]
        out: Option<PathBuf>,
    },

    /// Render the preview page as HTML
    Preview {
        /// Label configuration (JSON)
        #[arg(long, value_name = "FILE")]
        config: PathBuf,

        /// Output file (stdout when omitted)
        #[arg(long, value_name = "FILE")]
        out: Option<PathBuf>,

        /// Show every sheet, not just the active one
        #[arg(long)]
        all: bool,

        /// Clinic profile for the footer (JSON)
        #[arg(long, value_name = "FILE")]
        clinic: Option<PathBuf>,
    },

    /// Print the sheets selected by the configuration
    Print {
        /// Label configuration (JSON)
        #[arg(long, value_name = "FILE")]
        config: PathBuf,

        #[command(flatten)]
        target: TargetArgs,

        /// Clinic profile for the footer (JSON)
        #[arg(long, value_name = "FILE")]
        clinic: Option<PathBuf>,
    },

    /// Start the HTTP server
    Serve {
        /// Address to listen on
        #[arg(long, default_value = "127.0.0.1:8080")]
        listen: String,

        /// Cache the edited label in this file
        #[arg(long, value_name = "FILE")]
        state: Option<PathBuf>,

        #[command(flatten)]
        target: TargetArgs,

        /// Clinic profile for the footer (JSON)
        #[arg(long, value_name = "FILE")]
        clinic: Option<PathBuf>,
    },
}

/// Where print jobs go.
#[derive(Args, Debug)]
struct TargetArgs {
    /// Write the print document to this HTML file
    #[arg(long, value_name = "FILE", conflicts_with = "command")]
    out: Option<PathBuf>,

    /// Run this program with the print document's path as last argument
    #[arg(long, value_name = "PROGRAM")]
    command: Option<String>,

    /// Argument for --command (repeatable)
    #[arg(long = "arg", value_name = "ARG", allow_hyphen_values = true, requires = "command")]
    args: Vec<String>,
}

impl TargetArgs {
    fn into_target(self) -> PrintTarget {
        match (self.command, self.out) {
            (Some(program), _) => PrintTarget::Command {
                program,
                args: self.args,
            },
            (None, Some(path)) => PrintTarget::File { path },
            (None, None) => PrintTarget::default(),
        }
    }
}

fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("doselabel=info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), LabelError> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Init { out } => {
            let json = serde_json::to_string_pretty(&LabelConfiguration::default())?;
            write_output(out.as_deref(), &json)?;
            if let Some(path) = out {
                println!("Wrote default configuration to {}", path.display());
            }
        }

        Commands::Preview {
            config,
            out,
            all,
            clinic,
        } => {
            let mut session = Session::new(load_config(&config)?).with_clinic(load_clinic(clinic)?);
            if all {
                session.apply(FieldUpdate::ShowAllPreviews(true));
            }
            write_output(out.as_deref(), &session.preview_document().to_html())?;
        }

        Commands::Print {
            config,
            target,
            clinic,
        } => {
            let session = Session::new(load_config(&config)?).with_clinic(load_clinic(clinic)?);
            let target = target.into_target();
            let mut facility = target.facility();

            match session.print(&mut facility)? {
                PrintOutcome::Printed { sheets } => {
                    println!("Printed {} sheet(s) to {}", sheets, target)
                }
                PrintOutcome::Cancelled => println!("Print cancelled"),
                PrintOutcome::Skipped => println!("Nothing to print"),
            }
        }

        Commands::Serve {
            listen,
            state,
            target,
            clinic,
        } => {
            let config = ServerConfig {
                listen_addr: listen,
                state_path: state,
                print_target: target.into_target(),
                clinic: load_clinic(clinic)?,
            };
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(serve(config))?;
        }
    }

    Ok(())
}

/// Read a label configuration file.
fn load_config(path: &Path) -> Result<LabelConfiguration, LabelError> {
    let contents = std::fs::read_to_string(path)?;
    serde_json::from_str(&contents)
        .map_err(|e| LabelError::Config(format!("{}: {}", path.display(), e)))
}

fn load_clinic(path: Option<PathBuf>) -> Result<ClinicProfile, LabelError> {
    match path {
        Some(path) => ClinicProfile::from_file(path),
        None => Ok(ClinicProfile::default()),
    }
}

fn write_output(out: Option<&Path>, contents: &str) -> Result<(), LabelError> {
    match out {
        Some(path) => std::fs::write(path, contents)?,
        None => println!("{}", contents),
    }
    Ok(())
}
