use super::CheckCommand;
use crate::{Analysis, CliError, Invoke, Outcome, analyze, render::Renderer};
use diagnostics::{DiagnosticFlags, Diagnostics};

impl Invoke for CheckCommand {
    fn invoke(self) -> Result<Outcome, CliError> {
        self.options.apply_color_choice();

        let diagnostics = Diagnostics::new(DiagnosticFlags::default());
        let analysis = analyze(&self.options, &diagnostics)?;
        let (output, outcome) = self.render(&analysis)?;

        print!("{output}");
        Ok(outcome)
    }
}

impl CheckCommand {
    /// Problems are misaligned records that aren't ignored.
    fn render(&self, analysis: &Analysis) -> Result<(String, Outcome), CliError> {
        let Analysis { abi, report, .. } = analysis;
        let renderer = Renderer::new(abi, self.options.detailed);
        let mut output = String::new();

        let has_problems = match &self.options.record_name {
            Some(name) => {
                let (_, record) = report
                    .find_record(name)
                    .ok_or_else(|| CliError::RecordNotFound(name.clone()))?;

                if self.options.json {
                    output = serde_json::to_string_pretty(record)? + "\n";
                } else {
                    renderer.check_record(&mut output, record)?;
                }

                record.has_problems()
            }
            None => {
                if self.options.json {
                    output = serde_json::to_string_pretty(report)? + "\n";
                } else {
                    renderer.check(&mut output, report)?;
                }

                report.has_problems()
            }
        };

        let outcome = if has_problems {
            Outcome::ProblemsFound
        } else {
            Outcome::Success
        };

        Ok((output, outcome))
    }
}
