//! Implementation of the default `ignorer <template>...` invocation.
//!
//! Responsibility: translate CLI arguments into a template name list, call
//! the core generate service, and display results. No business logic lives
//! here.

use tracing::{debug, instrument};

use ignorer_adapters::{InMemoryStore, LocalFilesystem};
use ignorer_core::{application::GenerateService, domain::GenerateOptions};

use crate::{
    cli::{GenerateArgs, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the generate invocation.
///
/// Dispatch sequence:
/// 1. Resolve the template name list (CLI args, interactive picker,
///    config defaults)
/// 2. Early-exit if `--dry-run` (render to stdout, write nothing)
/// 3. Generate via `GenerateService`
/// 4. Report what happened
#[instrument(skip_all, fields(templates = ?args.templates))]
pub fn execute(
    args: GenerateArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let store = super::build_store(&config)?;

    // 1. Resolve names
    let mut names = if args.interactive {
        select_interactively(&store)?
    } else {
        args.templates.clone()
    };
    for extra in &config.defaults.templates {
        if !names.iter().any(|n| n.eq_ignore_ascii_case(extra)) {
            names.push(extra.clone());
        }
    }
    if names.is_empty() {
        return Err(CliError::InvalidInput {
            message: "no templates requested (run 'ignorer list' to see what's available)".into(),
        });
    }

    debug!(?names, output = %args.output.display(), "generation requested");

    let service = GenerateService::new(Box::new(store), Box::new(LocalFilesystem::new()));

    // 2. Dry run: render but do not write. The content goes straight to
    //    stdout so it stays pipeable even with --quiet.
    if args.dry_run {
        let document = service.render(&names)?;
        output.info(&format!(
            "Dry run: would write .gitignore to {}",
            args.output.display()
        ))?;
        use std::io::Write as _;
        write!(std::io::stdout().lock(), "{}", document.render())?;
        return Ok(());
    }

    // 3. Generate
    let outcome = service.generate(
        &names,
        &args.output,
        GenerateOptions {
            append: args.append,
        },
    )?;

    // 4. Report
    if outcome.overwrote {
        output.warning(&format!("Replaced existing {}", outcome.path.display()))?;
    }
    let verb = if outcome.appended {
        "Updated"
    } else {
        "Generated"
    };
    output.success(&format!(
        "{verb} .gitignore with templates: {}",
        outcome.names.join(", ")
    ))?;

    if !global.quiet {
        output.print(&format!("  {}", outcome.path.display()))?;
    }

    Ok(())
}

// ── Interactive selection ─────────────────────────────────────────────────────

#[cfg(feature = "interactive")]
fn select_interactively(store: &InMemoryStore) -> CliResult<Vec<String>> {
    use dialoguer::MultiSelect;
    use ignorer_core::application::TemplateStore;

    let templates = store.list()?;
    let labels: Vec<String> = templates
        .iter()
        .map(|t| format!("{} ({})", t.name(), t.category()))
        .collect();

    let picked = MultiSelect::new()
        .with_prompt("Select templates (space to toggle, enter to confirm)")
        .items(&labels)
        .interact()
        .map_err(|_| CliError::Cancelled)?;

    if picked.is_empty() {
        return Err(CliError::InvalidInput {
            message: "no templates selected".into(),
        });
    }

    Ok(picked
        .into_iter()
        .map(|i| templates[i].name().to_string())
        .collect())
}

#[cfg(not(feature = "interactive"))]
fn select_interactively(_store: &InMemoryStore) -> CliResult<Vec<String>> {
    Err(CliError::FeatureNotAvailable {
        feature: "interactive",
    })
}
