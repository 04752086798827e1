//! Implementation of the `agentdocs new` command.
//!
//! Responsibility: collect the project answers (flags first, prompts for the
//! rest), call the core project initializer, and display results. No
//! business logic lives here.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use tracing::{debug, info, instrument};

use agentdocs_core::{
    application::ProjectInitializer,
    domain::{ProjectAnswers, PromptKey},
};

use crate::{
    cli::NewArgs,
    commands::{check_report, finish_report, scaffold_service},
    config::AppConfig,
    error::{CliResult, IntoCli},
    output::OutputManager,
};

/// Execute the `agentdocs new` command.
///
/// Dispatch sequence:
/// 1. Take answers given as flags
/// 2. Prompt for the rest unless `--no-input`
/// 3. Run the project initializer (validates the name before any I/O)
/// 4. Print per-file results and next steps
#[instrument(skip_all)]
pub fn execute(args: NewArgs, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    let mut answers = answers_from_flags(&args);
    debug!(given = answers_given(&answers), "Answers from flags");

    if !args.no_input {
        let mut prompter = prompter();
        if !output.is_json() {
            output.header("Project setup")?;
            output.print("Press Enter to leave an answer blank.")?;
        }
        prompt_missing(&mut answers, prompter.as_mut())?;
    }

    let project_name = answers
        .get(PromptKey::ProjectName)
        .unwrap_or_default()
        .to_string();
    let output_base = args
        .output
        .clone()
        .or_else(|| config.project.output_dir.clone())
        .unwrap_or_else(|| PathBuf::from("."));

    let initializer = ProjectInitializer::new(scaffold_service()?);
    let result = initializer.initialize_project(&project_name, &answers, &output_base)?;
    info!(dir = %result.project_dir.display(), "Project initialized");

    if output.is_json() {
        output.json(&result)?;
        return check_report(&result.report);
    }

    finish_report(&result.report, output)?;

    output.print("")?;
    output.success(&format!(
        "Project documentation created in {}",
        result.project_dir.display()
    ))?;
    output.print("")?;
    output.print("Next steps:")?;
    output.print(&format!("  1. cd {}", result.project_dir.display()))?;
    output.print("  2. Review the generated documents and fill in anything left blank")?;
    output.print("  3. Share docs/PROJECT_CONTEXT_PRIMING.md with your AI assistant")?;
    Ok(())
}

// ── Answers ───────────────────────────────────────────────────────────────────

fn answers_from_flags(args: &NewArgs) -> ProjectAnswers {
    let given = [
        (PromptKey::ProjectName, &args.name),
        (PromptKey::ProjectDescription, &args.description),
        (PromptKey::TargetAudience, &args.audience),
        (PromptKey::MainGoal, &args.goal),
        (PromptKey::FrontendTech, &args.frontend),
        (PromptKey::BackendTech, &args.backend),
        (PromptKey::DatabaseTech, &args.database),
        (PromptKey::ArchitecturePattern, &args.architecture),
        (PromptKey::DomainFocus, &args.domain),
        (PromptKey::Timeline, &args.timeline),
    ];

    given
        .into_iter()
        .filter_map(|(key, value)| value.as_ref().map(|v| (key.as_str(), v.clone())))
        .collect()
}

fn answers_given(answers: &ProjectAnswers) -> usize {
    PromptKey::PROMPTED
        .into_iter()
        .filter(|k| answers.contains(*k))
        .count()
}

/// Ask, in order, for every prompted key that has no answer yet.
fn prompt_missing(answers: &mut ProjectAnswers, prompter: &mut dyn Prompter) -> CliResult<()> {
    for key in PromptKey::PROMPTED {
        if answers.contains(key) {
            continue;
        }
        let answer = prompter.ask(key.question())?;
        answers.insert(key.as_str(), answer.trim());
    }
    Ok(())
}

// ── Prompting ─────────────────────────────────────────────────────────────────

/// Source of answers to free-text questions.
pub trait Prompter {
    fn ask(&mut self, question: &str) -> CliResult<String>;
}

/// Line-oriented prompter over any reader. Questions go to stderr so stdout
/// stays clean for JSON. End of input answers blank.
pub struct LinePrompter<R> {
    reader: R,
}

impl<R: BufRead> LinePrompter<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> Prompter for LinePrompter<R> {
    fn ask(&mut self, question: &str) -> CliResult<String> {
        let mut stderr = io::stderr();
        write!(stderr, "{question}: ").with_cli_context(|| "failed to write prompt")?;
        stderr.flush().with_cli_context(|| "failed to flush prompt")?;

        let mut line = String::new();
        self.reader
            .read_line(&mut line)
            .with_cli_context(|| format!("failed to read answer to '{question}'"))?;
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

/// Terminal prompter with line editing.
#[cfg(feature = "interactive")]
pub struct DialoguerPrompter;

#[cfg(feature = "interactive")]
impl Prompter for DialoguerPrompter {
    fn ask(&mut self, question: &str) -> CliResult<String> {
        dialoguer::Input::<String>::new()
            .with_prompt(question)
            .allow_empty(true)
            .interact_text()
            .map_err(|e| crate::error::CliError::IoError {
                message: format!("failed to read answer to '{question}'"),
                source: io::Error::other(e),
            })
    }
}

/// Pick the prompter: dialoguer on a terminal when built with `interactive`,
/// plain line reads otherwise.
fn prompter() -> Box<dyn Prompter> {
    #[cfg(feature = "interactive")]
    if io::IsTerminal::is_terminal(&io::stdin()) {
        return Box::new(DialoguerPrompter);
    }
    Box::new(LinePrompter::new(io::stdin().lock()))
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn flags_become_answers() {
        let args = NewArgs {
            name: Some("Atlas".into()),
            backend: Some("Rust".into()),
            ..Default::default()
        };
        let answers = answers_from_flags(&args);
        assert_eq!(answers.get(PromptKey::ProjectName), Some("Atlas"));
        assert_eq!(answers.get(PromptKey::BackendTech), Some("Rust"));
        assert!(!answers.contains(PromptKey::FrontendTech));
    }

    #[test]
    fn prompts_only_for_missing_answers_in_order() {
        let mut answers = ProjectAnswers::new()
            .with(PromptKey::ProjectName, "Atlas")
            .with(PromptKey::MainGoal, "Ship");
        // Eight remaining prompted keys; supply three, then end of input.
        let mut prompter = LinePrompter::new(Cursor::new("A CLI\ndevelopers\nReact\n"));

        prompt_missing(&mut answers, &mut prompter).unwrap();

        assert_eq!(answers.get(PromptKey::ProjectName), Some("Atlas"));
        assert_eq!(answers.get(PromptKey::ProjectDescription), Some("A CLI"));
        assert_eq!(answers.get(PromptKey::TargetAudience), Some("developers"));
        assert_eq!(answers.get(PromptKey::MainGoal), Some("Ship"));
        assert_eq!(answers.get(PromptKey::FrontendTech), Some("React"));
        assert_eq!(answers.get(PromptKey::Timeline), Some(""));
        assert_eq!(answers_given(&answers), PromptKey::PROMPTED.len());
    }

    #[test]
    fn line_prompter_strips_line_endings() {
        let mut prompter = LinePrompter::new(Cursor::new("  My Project \r\n"));
        assert_eq!(prompter.ask("Project Name").unwrap(), "  My Project ");
    }
}
