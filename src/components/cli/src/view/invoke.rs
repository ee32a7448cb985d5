use super::ViewCommand;
use crate::{Analysis, CliError, Invoke, Outcome, analyze, render::Renderer};
use diagnostics::{DiagnosticFlags, Diagnostics};

impl Invoke for ViewCommand {
    fn invoke(self) -> Result<Outcome, CliError> {
        self.options.apply_color_choice();

        // Records that can't be sized already say so in their header
        let diagnostics = Diagnostics::new(DiagnosticFlags {
            warn_unchecked_records: false,
            ..Default::default()
        });

        let analysis = analyze(&self.options, &diagnostics)?;
        print!("{}", self.render(&analysis)?);
        Ok(Outcome::Success)
    }
}

impl ViewCommand {
    fn render(&self, analysis: &Analysis) -> Result<String, CliError> {
        let Analysis { abi, report, .. } = analysis;
        let renderer = Renderer::new(abi, self.options.detailed);
        let mut output = String::new();

        match &self.options.record_name {
            Some(name) => {
                let (_, record) = report
                    .find_record(name)
                    .ok_or_else(|| CliError::RecordNotFound(name.clone()))?;

                if self.options.json {
                    output = serde_json::to_string_pretty(record)? + "\n";
                } else {
                    renderer.view_record(&mut output, record)?;
                }
            }
            None if self.options.json => output = serde_json::to_string_pretty(report)? + "\n",
            None => renderer.view(&mut output, report)?,
        }

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RunOptions;
    use std::fs;

    fn view(input: &str, options: RunOptions) -> Result<String, CliError> {
        colored::control::set_override(false);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("input.json");
        fs::write(&path, input).unwrap();

        let command = ViewCommand {
            options: RunOptions {
                inputs: vec![path],
                ..options
            },
        };

        let diagnostics = Diagnostics::new(DiagnosticFlags {
            print_without_collecting: false,
            warn_unchecked_records: false,
        });

        command.render(&analyze(&command.options, &diagnostics)?)
    }

    const INPUT: &str = r#"{"packages":[
        {"path":"b/pkg","records":[{"name":"Node","file":"node.go","line":4,"fields":[
            {"name":"next","type":"*Node","shape":{"kind":"pointer"}},
            {"name":"name","type":"string","shape":{"kind":"words","count":2}},
            {"name":"flag","type":"bool","shape":{"kind":"scalar","size":1}}
        ]}]},
        {"path":"a/pkg","records":[]}
    ]}"#;

    #[test]
    fn sizes_follow_selected_platform() {
        let output = view(
            INPUT,
            RunOptions {
                arch: Some("amd64".into()),
                ..Default::default()
            },
        )
        .unwrap();

        assert!(output.contains("// node.go:4 | Size: 32 (Optimal: 32)"));
        assert!(!output.contains("a/pkg"));

        let output = view(
            INPUT,
            RunOptions {
                arch: Some("386".into()),
                ..Default::default()
            },
        )
        .unwrap();

        assert!(output.contains("// node.go:4 | Size: 16 (Optimal: 16)"));
    }

    #[test]
    fn detailed_single_record() {
        let output = view(
            INPUT,
            RunOptions {
                arch: Some("amd64".into()),
                record_name: Some("Node".into()),
                detailed: true,
                ..Default::default()
            },
        )
        .unwrap();

        assert_eq!(
            output,
            concat!(
                "// node.go:4 | Size: 32 (Optimal: 32)\n",
                "// Padding: 7 bytes\n",
                "struct Node {\n",
                "    next *Node  ■■■■■■■■\n",
                "    name string ■■■■■■■■\n",
                "                ■■■■■■■■\n",
                "    flag bool   ■□□□□□□□\n",
                "}\n",
            )
        );
    }

    #[test]
    fn empty_input() {
        let output = view(
            r#"{"packages":[{"path":"empty"}]}"#,
            RunOptions {
                arch: Some("amd64".into()),
                ..Default::default()
            },
        )
        .unwrap();

        assert_eq!(output, "Given input doesn't have any records\n");
    }
}
