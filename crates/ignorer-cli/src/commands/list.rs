//! Implementation of the `ignorer list` command.

use std::io::{self, Write as _};

use ignorer_core::{application::CatalogService, error::Context as _};

use crate::{
    cli::{ListArgs, ListFormat, global::GlobalArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

pub fn execute(
    args: ListArgs,
    _global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let store = super::build_store(&config)?;
    let service = CatalogService::new(Box::new(store));

    match args.format {
        ListFormat::Table => {
            output.header("Available .gitignore templates:")?;
            output.print("")?;

            for (category, templates) in service.grouped()? {
                output.print(category.heading())?;
                for t in &templates {
                    if t.aliases.is_empty() {
                        output.print(&format!("  - {}", t.name))?;
                    } else {
                        output.print(&format!(
                            "  - {} (aliases: {})",
                            t.name,
                            t.aliases.join(", ")
                        ))?;
                    }
                }
                output.print("")?;
            }

            output.print("Usage: ignorer <template> [template ...]")?;
            output.print("Example: ignorer go docker macos")?;
        }

        ListFormat::List => {
            let mut stdout = io::stdout().lock();
            for t in service.list()? {
                writeln!(stdout, "{}", t.name)?;
            }
        }

        ListFormat::Json => {
            // Serialise as a JSON array to stdout (bypasses OutputManager
            // because JSON output must be parseable even in non-TTY pipes).
            let json = serde_json::to_string_pretty(&service.list()?)
                .context("serialising template list")?;
            writeln!(io::stdout().lock(), "{json}")?;
        }

        ListFormat::Csv => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "name,category,description,aliases")?;
            for t in service.list()? {
                writeln!(
                    stdout,
                    "{},{},\"{}\",{}",
                    t.name,
                    t.category,
                    csv_quote(&t.description),
                    t.aliases.join(";")
                )?;
            }
        }
    }

    Ok(())
}

/// Escape a field for the CSV output: embedded quotes are doubled (the value
/// is always wrapped in quotes at the call site, which also covers commas and
/// newlines from user template manifests).
fn csv_quote(field: &str) -> String {
    field.replace('"', "\"\"")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csv_quote_doubles_embedded_quotes() {
        assert_eq!(
            csv_quote("Unity \"Personal\" projects"),
            "Unity \"\"Personal\"\" projects"
        );
        assert_eq!(csv_quote("plain"), "plain");
    }
}
