//! Implementation of the `agentdocs list` command.

use agentdocs_adapters::InMemoryStore;
use agentdocs_core::application::{TemplateInfo, TemplateService};

use crate::{
    cli::{ListArgs, ListFormat},
    error::CliResult,
    output::OutputManager,
};

pub fn execute(args: ListArgs, output: &OutputManager) -> CliResult<()> {
    let service = TemplateService::new(Box::new(InMemoryStore::with_builtin()?));
    let templates = service.info()?;

    // --format json or --output-format json
    let format = if output.is_json() {
        ListFormat::Json
    } else {
        args.format
    };

    match format {
        ListFormat::Table => {
            output.header("Built-in templates:")?;
            let width = templates.iter().map(|t| t.path.len()).max().unwrap_or(0);
            for t in &templates {
                output.print(&format!(
                    "  {:<width$}  {:<12}  {}{}",
                    t.path,
                    t.mode.to_string(),
                    t.description,
                    if t.executable { " (executable)" } else { "" },
                ))?;
            }
        }
        ListFormat::Json => output.json(&templates)?,
        ListFormat::List => {
            for t in &templates {
                output.print(&t.name)?;
            }
        }
        ListFormat::Csv => {
            for line in csv_lines(&templates) {
                output.print(&line)?;
            }
        }
    }

    Ok(())
}

fn csv_lines(templates: &[TemplateInfo]) -> Vec<String> {
    let mut lines = vec!["name,path,mode,executable,bytes".to_string()];
    lines.extend(templates.iter().map(|t| {
        format!(
            "{},{},{},{},{}",
            t.name, t.path, t.mode, t.executable, t.size
        )
    }));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use agentdocs_core::domain::RenderMode;

    #[test]
    fn csv_has_header_and_one_row_per_template() {
        let rows = csv_lines(&[TemplateInfo {
            name: "readme".into(),
            path: "README.md".into(),
            mode: RenderMode::Customizable,
            executable: false,
            description: "Project front page".into(),
            size: 42,
        }]);
        assert_eq!(
            rows,
            [
                "name,path,mode,executable,bytes",
                "readme,README.md,customizable,false,42",
            ]
        );
    }
}
