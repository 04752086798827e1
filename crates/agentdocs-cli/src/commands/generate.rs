//! Default command: write the documentation set.
//!
//! Standard mode writes under `<DIR>/universal-ai-docs/`; direct mode writes
//! straight into `<DIR>`. Existing files are overwritten.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{info, instrument};

use crate::{
    cli::GenerateArgs,
    commands::{finish_report, scaffold_service},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// Where the files go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Destination {
    pub root: PathBuf,
    pub direct: bool,
}

/// Resolve the target root from flags, then config, then the current directory.
pub fn resolve_destination(args: &GenerateArgs, config: &AppConfig) -> Destination {
    let base = args
        .dir
        .clone()
        .or_else(|| config.generate.output_dir.clone())
        .unwrap_or_else(|| PathBuf::from("."));
    let direct = args.direct || config.generate.direct;

    let root = if direct {
        base
    } else {
        base.join(&config.generate.subdirectory)
    };
    Destination { root, direct }
}

#[derive(Serialize)]
struct PlanEntry<'a> {
    template: &'a str,
    path: &'a Path,
    bytes: usize,
    executable: bool,
}

#[instrument(skip_all)]
pub fn execute(args: GenerateArgs, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    let dest = resolve_destination(&args, config);
    let service = scaffold_service()?;

    if args.dry_run {
        let plan = service.preview(&dest.root)?;
        if output.is_json() {
            let entries: Vec<_> = plan
                .files()
                .map(|f| PlanEntry {
                    template: &f.template,
                    path: &f.path,
                    bytes: f.size(),
                    executable: f.permissions.executable_flag(),
                })
                .collect();
            output.json(&entries)?;
        } else {
            output.info(&format!(
                "Dry run: would write {} files under {}",
                plan.file_count(),
                plan.root().display()
            ))?;
            for file in plan.files() {
                output.detail(&format!("{} ({} bytes)", file.path.display(), file.size()))?;
            }
        }
        return Ok(());
    }

    if !output.is_json() {
        output.header(&format!(
            "Creating AI documentation in {}",
            dest.root.display()
        ))?;
    }
    info!(root = %dest.root.display(), direct = dest.direct, "Generation started");

    let report = service.scaffold(&dest.root)?;
    finish_report(&report, output)?;

    if !output.is_json() {
        print_next_steps(&dest, output)?;
    }
    Ok(())
}

fn print_next_steps(dest: &Destination, output: &OutputManager) -> CliResult<()> {
    output.print("")?;
    output.success("Documentation set created")?;
    output.print("")?;
    output.print("Next steps:")?;
    if dest.direct {
        output.print("  1. Replace the [PLACEHOLDER] values in README.md and docs/")?;
        output.print("  2. Share docs/PROJECT_CONTEXT_PRIMING.md at the start of AI sessions")?;
        output.print("  3. Point your assistant at cursor/rules/implementation_patterns.mdc")?;
    } else {
        output.print(&format!("  1. cd {}", dest.root.display()))?;
        output.print("  2. Read USAGE_GUIDE.md")?;
        output.print("  3. Run ./scripts/setup_new_project.sh to create a personalised copy")?;
    }
    Ok(())
}
