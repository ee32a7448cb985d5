mod resolve;

use diagnostics::{Diagnostics, WarningDiagnostic};
use optimize_fields::optimize_record;
use rayon::prelude::*;
use record_decl::{PackageDecl, RecordDecl};
use report::{Package, Record, Report};
pub use resolve::resolve_fields;
use target_layout::{AbiContext, SizeProvider};

/// Turns declarations into a report, one record at a time.
#[derive(Debug)]
pub struct ReportBuilder<'a, P: SizeProvider> {
    pub provider: &'a P,
    pub abi: AbiContext,
    pub diagnostics: &'a Diagnostics,
}

impl<'a, P> ReportBuilder<'a, P>
where
    P: SizeProvider + Sync,
    P::Type: Sync,
{
    pub fn new(provider: &'a P, abi: AbiContext, diagnostics: &'a Diagnostics) -> Self {
        Self {
            provider,
            abi,
            diagnostics,
        }
    }

    /// Packages are sorted by path, records keep their declaration order.
    ///
    /// Warnings about unchecked records are pushed once every package is built,
    /// in the order the records appear in the report.
    pub fn build_report(&self, packages: &[PackageDecl<P::Type>]) -> Report {
        let mut built: Vec<(Package, Vec<WarningDiagnostic>)> = packages
            .par_iter()
            .map(|package| self.build_package(package))
            .collect();

        built.sort_by(|a, b| a.0.path.cmp(&b.0.path));

        let (packages, warnings): (Vec<_>, Vec<_>) = built.into_iter().unzip();

        for warning in warnings.into_iter().flatten() {
            self.diagnostics.push(warning);
        }

        let report = Report::new(packages);

        if report.is_empty() {
            tracing::info!("no records found in input");
        }

        report
    }

    pub fn build_package(
        &self,
        package: &PackageDecl<P::Type>,
    ) -> (Package, Vec<WarningDiagnostic>) {
        let built: Vec<(Record, Option<WarningDiagnostic>)> = package
            .records
            .par_iter()
            .map(|record| self.build_record(record))
            .collect();

        let (records, warnings): (Vec<_>, Vec<_>) = built.into_iter().unzip();

        (
            Package::new(package.path.clone(), records),
            warnings.into_iter().flatten().collect(),
        )
    }

    /// Never fails, a record whose layout can't be determined is reported as unchecked
    /// along with a warning, unless warnings are turned off or the record is ignored.
    pub fn build_record(
        &self,
        decl: &RecordDecl<P::Type>,
    ) -> (Record, Option<WarningDiagnostic>) {
        let (fields, resolve_error) = resolve_fields(&decl.fields, self.provider);

        let error = match optimize_record(&fields, &self.abi) {
            Ok(optimized) => {
                tracing::debug!(
                    "{}: size {}, optimal size {}",
                    decl.name,
                    optimized.original_size,
                    optimized.optimal_size
                );

                let record = Record::checked(
                    decl.name.clone(),
                    decl.position.clone(),
                    fields,
                    optimized.original_size,
                    optimized.fields,
                    optimized.optimal_size,
                    decl.ignore,
                );

                return (record, None);
            }
            Err(error) => resolve_error.unwrap_or(error),
        };

        tracing::debug!("{}: layout is indeterminate: {}", decl.name, error);

        let warning = (self.diagnostics.flags().warn_unchecked_records && !decl.ignore).then(|| {
            WarningDiagnostic::new(
                format!("Layout of '{}' is not checkable, {}", decl.name, error),
                decl.position.clone(),
            )
        });

        let record = Record::unchecked(
            decl.name.clone(),
            decl.position.clone(),
            fields,
            decl.ignore,
        );

        (record, warning)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use data_units::ByteUnits;
    use diagnostics::DiagnosticFlags;
    use indoc::indoc;
    use record_decl::InputDocument;
    use report::RecordStatus;
    use target::{Target, TargetArch};
    use target_layout::{StdSizes, TargetLayout, TypeShape};

    fn collecting() -> Diagnostics {
        Diagnostics::new(DiagnosticFlags {
            print_without_collecting: false,
            ..Default::default()
        })
    }

    fn build(document: &str, arch: TargetArch) -> (Report, Vec<String>) {
        let document: InputDocument<TypeShape> = serde_json::from_str(document).unwrap();
        let target = Target::new(arch);
        let provider = StdSizes::for_target(&target);
        let diagnostics = collecting();

        let builder = ReportBuilder::new(&provider, target.abi_context(), &diagnostics);
        let report = builder.build_report(&document.packages);

        (report, diagnostics.messages())
    }

    const MIXED: &str = indoc! {r#"
        {
          "packages": [
            {
              "path": "example/zeta",
              "records": [
                {
                  "name": "Padded",
                  "file": "padded.go",
                  "line": 3,
                  "fields": [
                    { "name": "a", "type": "bool", "shape": { "kind": "scalar", "size": 1 } },
                    { "name": "b", "type": "int64", "shape": { "kind": "scalar", "size": 8 } },
                    { "name": "c", "type": "bool", "shape": { "kind": "scalar", "size": 1 } }
                  ]
                },
                {
                  "name": "Packed",
                  "file": "packed.go",
                  "line": 9,
                  "fields": [
                    { "name": "a", "type": "int64", "shape": { "kind": "scalar", "size": 8 } },
                    { "name": "b", "type": "int32", "shape": { "kind": "scalar", "size": 4 } },
                    { "name": "c", "type": "int32", "shape": { "kind": "scalar", "size": 4 } }
                  ]
                }
              ]
            },
            {
              "path": "example/alpha",
              "records": [
                { "name": "Empty", "file": "empty.go", "line": 1, "fields": [] },
                {
                  "name": "Box",
                  "file": "box.go",
                  "line": 5,
                  "fields": [
                    { "name": "len", "type": "int", "shape": { "kind": "scalar", "size": 8 } },
                    { "name": "value", "type": "T", "shape": { "kind": "param", "name": "T" } }
                  ]
                }
              ]
            },
            { "path": "example/none", "records": [] }
          ]
        }
    "#};

    #[test]
    fn packages_are_sorted_and_records_keep_order() {
        let (report, _) = build(MIXED, TargetArch::X86_64);

        let paths: Vec<_> = report.packages.iter().map(|p| p.path.as_str()).collect();
        assert_eq!(paths, ["example/alpha", "example/none", "example/zeta"]);

        let names: Vec<_> = report.packages[2]
            .records
            .iter()
            .map(|r| r.name.as_str())
            .collect();
        assert_eq!(names, ["Padded", "Packed"]);
        assert_eq!(report.non_empty_packages().count(), 2);
    }

    #[test]
    fn padded_record_gets_optimized_order() {
        let (report, _) = build(MIXED, TargetArch::X86_64);
        let (_, record) = report.find_record("Padded").unwrap();

        assert_eq!(record.size, Some(ByteUnits::of(24)));
        assert_eq!(record.optimal_size, Some(ByteUnits::of(16)));
        assert_eq!(record.status(), RecordStatus::Misaligned);

        let order: Vec<_> = record
            .optimized_fields
            .as_ref()
            .unwrap()
            .iter()
            .map(|f| f.name.as_str())
            .collect();
        assert_eq!(order, ["b", "a", "c"]);
        assert!(report.has_problems());
    }

    #[test]
    fn optimal_and_empty_records_have_no_suggestion() {
        let (report, _) = build(MIXED, TargetArch::X86_64);

        let (_, packed) = report.find_record("Packed").unwrap();
        assert_eq!(packed.size, Some(ByteUnits::of(16)));
        assert_eq!(packed.optimal_size, Some(ByteUnits::of(16)));
        assert!(packed.optimized_fields.is_none());

        let (_, empty) = report.find_record("Empty").unwrap();
        assert_eq!(empty.size, Some(ByteUnits::ZERO));
        assert_eq!(empty.optimal_size, Some(ByteUnits::ZERO));
        assert!(empty.optimized_fields.is_none());
    }

    #[test]
    fn indeterminate_record_is_unchecked_and_rest_still_reported() {
        let (report, messages) = build(MIXED, TargetArch::X86_64);
        let (package, record) = report.find_record("Box").unwrap();

        assert_eq!(record.status(), RecordStatus::Unchecked);
        assert_eq!(record.fields.len(), 2);
        assert_eq!(record.fields[0].size(), Some(ByteUnits::of(8)));
        assert_eq!(record.fields[1].size(), None);
        assert_eq!(package.records.len(), 2);

        assert_eq!(messages.len(), 1);
        assert!(messages[0].contains("box.go:5"));
        assert!(messages[0].contains("type parameter `T`"));
    }

    #[test]
    fn ignored_record_is_never_a_problem() {
        let (report, messages) = build(
            indoc! {r#"
                {
                  "packages": [{
                    "path": "p",
                    "records": [{
                      "name": "Skipped",
                      "file": "s.go",
                      "line": 2,
                      "ignore": true,
                      "fields": [
                        { "name": "a", "type": "byte", "shape": { "kind": "scalar", "size": 1 } },
                        { "name": "b", "type": "*int", "shape": { "kind": "pointer" } },
                        { "name": "c", "type": "byte", "shape": { "kind": "scalar", "size": 1 } }
                      ]
                    }]
                  }]
                }
            "#},
            TargetArch::X86_64,
        );

        let (_, record) = report.find_record("Skipped").unwrap();
        assert_eq!(record.status(), RecordStatus::Ignored);
        assert!(record.optimized_fields.is_some());
        assert!(!report.has_problems());
        assert!(messages.is_empty());
    }

    #[test]
    fn platform_changes_sizes() {
        let (report, _) = build(MIXED, TargetArch::X86);
        let (_, record) = report.find_record("Padded").unwrap();

        // int64 is only 4-aligned on 386
        assert_eq!(record.size, Some(ByteUnits::of(16)));
        assert_eq!(record.optimal_size, Some(ByteUnits::of(12)));
    }

    #[test]
    fn empty_input_is_an_empty_report() {
        let (report, _) = build(r#"{ "packages": [] }"#, TargetArch::X86_64);
        assert!(report.is_empty());
        assert!(!report.has_problems());
    }

    #[test]
    fn warnings_follow_report_order() {
        let record = |name: &str, line: u32| {
            format!(
                r#"{{ "name": "{name}", "file": "g.go", "line": {line}, "fields": [
                    {{ "name": "v", "type": "T", "shape": {{ "kind": "param", "name": "T" }} }}
                ] }}"#
            )
        };

        let package = |path: &str, first: u32| {
            let records = (first..first + 8)
                .map(|line| record(&format!("{path}{line}"), line))
                .collect::<Vec<_>>()
                .join(",");

            format!(r#"{{ "path": "{path}", "records": [{records}] }}"#)
        };

        let document = format!(
            r#"{{ "packages": [{}, {}, {}] }}"#,
            package("c", 1),
            package("a", 1),
            package("b", 1)
        );

        let (report, messages) = build(&document, TargetArch::X86_64);

        let expected: Vec<String> = report
            .unchecked_records()
            .map(|(_, record)| format!("'{}'", record.name))
            .collect();

        assert_eq!(expected.len(), 24);
        assert_eq!(messages.len(), 24);
        assert!(expected[0].contains("a1"));

        for (message, name) in messages.iter().zip(&expected) {
            assert!(message.contains(name.as_str()), "{message} should mention {name}");
        }
    }

    #[test]
    fn overflowing_record_is_unchecked() {
        let (report, messages) = build(
            indoc! {r#"
                {
                  "packages": [{
                    "path": "p",
                    "records": [
                      {
                        "name": "Huge",
                        "file": "huge.go",
                        "line": 1,
                        "fields": [
                          { "name": "a", "type": "bool", "shape": { "kind": "scalar", "size": 1 } },
                          {
                            "name": "b",
                            "type": "[1<<62]int64",
                            "shape": { "kind": "array", "len": 4611686018427387904, "elem": { "kind": "scalar", "size": 8 } }
                          }
                        ]
                      },
                      {
                        "name": "Wide",
                        "file": "huge.go",
                        "line": 5,
                        "fields": [
                          { "name": "a", "type": "bool", "shape": { "kind": "scalar", "size": 1 } },
                          { "name": "b", "type": "[]T", "shape": { "kind": "scalar", "size": 18446744073709551615 } }
                        ]
                      },
                      {
                        "name": "Fine",
                        "file": "huge.go",
                        "line": 9,
                        "fields": [
                          { "name": "a", "type": "int64", "shape": { "kind": "scalar", "size": 8 } }
                        ]
                      }
                    ]
                  }]
                }
            "#},
            TargetArch::X86_64,
        );

        let (_, huge) = report.find_record("Huge").unwrap();
        assert_eq!(huge.status(), RecordStatus::Unchecked);
        assert_eq!(huge.size, None);
        assert_eq!(huge.fields[1].size(), None);

        let (_, wide) = report.find_record("Wide").unwrap();
        assert_eq!(wide.status(), RecordStatus::Unchecked);
        assert_eq!(wide.fields[1].size(), Some(ByteUnits::of(u64::MAX)));

        let (_, fine) = report.find_record("Fine").unwrap();
        assert_eq!(fine.size, Some(ByteUnits::of(8)));

        assert_eq!(messages.len(), 2);
        assert!(messages.iter().all(|message| message.contains("64-bit address space")));
    }
}
