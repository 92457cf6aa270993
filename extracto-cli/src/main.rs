use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use extracto_export::{ExportFormat, Workbook, write_csv_dir, write_json, write_xlsx};
use extracto_ingest::{Extraction, extract_pages};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;

mod config;
mod input;
mod logging;
mod preview;

use preview::{PreviewLimits, print_preview};

#[derive(Parser, Debug)]
#[command(
    name = "extracto",
    version,
    about = "Extract bank-statement transactions and total them by concept and description"
)]
struct Cli {
    /// Config file (default: $EXTRACTO_HOME/config.toml, else ~/.extracto/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log filter, e.g. warn, info, debug (overrides the config file)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print parsed transactions and both summaries
    Preview {
        /// Statement text dumps (pages split by form feeds) or PDFs
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// Rows shown per table (default from config: 50)
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Write the Transacciones / Resumen Concepto / Resumen Descripción workbook
    Export {
        /// Statement text dumps (pages split by form feeds) or PDFs
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// Output file for xlsx/json ("-" for json on stdout), directory for csv
        #[arg(long)]
        out: Option<PathBuf>,

        /// xlsx, csv or json
        #[arg(long)]
        format: Option<ExportFormat>,
    },

    /// Manage the config file
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write a default config file if none exists
    Init,

    /// Print the effective config
    Show,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let cfg = config::load_config(cli.config.as_deref())?;

    let level = cli.log_level.as_deref().unwrap_or(&cfg.logging.level);
    logging::setup_logging(level)?;

    match cli.command {
        Command::Preview { inputs, limit } => {
            let ex = extract(&inputs)?;
            let limits = PreviewLimits {
                transactions: limit.unwrap_or(cfg.preview.transactions_limit),
                descriptions: limit.unwrap_or(cfg.preview.descriptions_limit),
            };

            let stdout = io::stdout();
            let mut out = stdout.lock();
            print_preview(&mut out, &ex, limits)?;
        }

        Command::Export { inputs, out, format } => {
            let ex = extract(&inputs)?;
            let format = format.unwrap_or(cfg.export.format);
            let out = out.unwrap_or_else(|| cfg.export.output.clone());
            export(&ex, format, &out)?;
        }

        Command::Config { command } => match command {
            ConfigCommand::Init => {
                config::init_config(cli.config.as_deref())?;
            }
            ConfigCommand::Show => {
                print!("{}", toml::to_string_pretty(&cfg).context("serialize config")?);
            }
        },
    }

    Ok(())
}

fn extract(inputs: &[PathBuf]) -> Result<Extraction> {
    let pages = input::read_pages(inputs)?;
    let ex = extract_pages(&pages);
    if ex.is_empty() {
        info!("no transaction lines found in {} page(s)", ex.pages_seen);
    }
    Ok(ex)
}

fn export(ex: &Extraction, format: ExportFormat, out: &Path) -> Result<()> {
    let workbook = Workbook::new(&ex.records, &ex.summary());
    let to_stdout = out == Path::new("-");

    match format {
        ExportFormat::Csv => {
            if to_stdout {
                bail!("csv export writes one file per sheet; pass a directory with --out");
            }
            let paths = write_csv_dir(&workbook, out)
                .with_context(|| format!("exporting to {}", out.display()))?;
            println!("Exported {} transactions", ex.records.len());
            for p in paths {
                println!("- {}", p.display());
            }
        }
        ExportFormat::Xlsx => {
            if to_stdout {
                bail!("xlsx export needs a file; pass a path with --out");
            }
            let path = format.output_path(out);
            write_xlsx(&workbook, &path).with_context(|| format!("exporting to {}", path.display()))?;
            println!("Exported {} transactions to {}", ex.records.len(), path.display());
        }
        ExportFormat::Json => {
            if to_stdout {
                write_json(&workbook, io::stdout().lock())?;
            } else {
                let path = format.output_path(out);
                let file = File::create(&path)
                    .with_context(|| format!("create {}", path.display()))?;
                let mut w = BufWriter::new(file);
                write_json(&workbook, &mut w)?;
                w.flush().with_context(|| format!("write {}", path.display()))?;
                println!("Exported {} transactions to {}", ex.records.len(), path.display());
            }
        }
    }

    Ok(())
}
