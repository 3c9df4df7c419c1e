use std::io::Write;
use std::path::Path;

use anyhow::{bail, Context, Result};
use clap::Parser;

use mdgrid::cli::{CliArgs, Command};
use mdgrid::export::{self, ExportFormat};
use mdgrid::import;
use mdgrid::markdown;
use mdgrid::style::StyleStore;
use mdgrid::table::Table;

fn main() -> Result<()> {
    mdgrid::tracing::init();

    let args = CliArgs::parse();
    tracing::debug!("Running {:?}", args.command);

    match args.command {
        Command::Fmt { file, output } => {
            let content = read(&file)?;
            let table = markdown::parse(&content)
                .with_context(|| format!("{} is not a Markdown table", file.display()))?;
            emit(&markdown::serialize(&table), output.as_deref())
        }

        Command::Check { file } => {
            let content = read(&file)?;
            match markdown::parse(&content) {
                Ok(table) => {
                    println!(
                        "{}: ok ({} rows, {} columns)",
                        file.display(),
                        table.row_count(),
                        table.column_count()
                    );
                    Ok(())
                }
                Err(e) => bail!("{}: {}", file.display(), e),
            }
        }

        Command::Convert { file, to, output } => {
            let table = load(&file)?;
            emit(&render(to, &table), output.as_deref())
        }

        Command::Transpose { file, output } => {
            let table = load(&file)?;
            emit(&markdown::serialize(&table.transpose()), output.as_deref())
        }

        Command::Sort {
            file,
            column,
            desc,
            output,
        } => {
            let table = load(&file)?;
            if column >= table.column_count() {
                bail!(
                    "column {} is out of range (table has {} columns)",
                    column,
                    table.column_count()
                );
            }
            let sorted = table.sort_by_column(column, Command::sort_order(desc));
            emit(&markdown::serialize(&sorted), output.as_deref())
        }
    }
}

fn read(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn load(path: &Path) -> Result<Table> {
    import::import_file(path).with_context(|| format!("Failed to import {}", path.display()))
}

fn render(format: ExportFormat, table: &Table) -> String {
    export::export(format, table, &StyleStore::default())
}

/// Write to `output`, or stdout when absent
fn emit(text: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            let mut text = text.to_string();
            if !text.ends_with('\n') {
                text.push('\n');
            }
            std::fs::write(path, text)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!("Wrote {}", path.display());
            Ok(())
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(text.as_bytes())?;
            if !text.ends_with('\n') {
                stdout.write_all(b"\n")?;
            }
            Ok(())
        }
    }
}
