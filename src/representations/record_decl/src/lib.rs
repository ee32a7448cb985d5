mod error;
mod load;

pub use error::InputError;
use indexmap::{IndexMap, map::Entry};
pub use load::load_documents;
use report::Position;
use serde::{Deserialize, Serialize};
use target_layout::TypeShape;

/// A field exactly as declared, before any sizing happened.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDecl<T> {
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(default)]
    pub tag: String,
    #[serde(default)]
    pub comment: String,
    #[serde(rename = "shape")]
    pub ty: T,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordDecl<T> {
    pub name: String,
    #[serde(flatten)]
    pub position: Position,
    pub fields: Vec<FieldDecl<T>>,

    /// Set when the declaration carries a marker asking to skip it
    #[serde(default)]
    pub ignore: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageDecl<T> {
    pub path: String,
    #[serde(default = "Vec::new")]
    pub records: Vec<RecordDecl<T>>,
}

/// Everything the parsing side found, in the order it found it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputDocument<T = TypeShape> {
    #[serde(default = "Vec::new")]
    pub packages: Vec<PackageDecl<T>>,
}

impl<T> InputDocument<T> {
    pub fn record_count(&self) -> usize {
        self.packages
            .iter()
            .map(|package| package.records.len())
            .sum()
    }
}

impl<T> Default for InputDocument<T> {
    fn default() -> Self {
        Self {
            packages: Vec::new(),
        }
    }
}

/// Packages split across several documents are merged by path,
/// in the order their paths were first seen.
impl<T> FromIterator<InputDocument<T>> for InputDocument<T> {
    fn from_iter<I: IntoIterator<Item = InputDocument<T>>>(iter: I) -> Self {
        let mut packages: IndexMap<String, PackageDecl<T>> = IndexMap::new();

        for package in iter.into_iter().flat_map(|document| document.packages) {
            match packages.entry(package.path.clone()) {
                Entry::Occupied(mut existing) => existing.get_mut().records.extend(package.records),
                Entry::Vacant(vacant) => {
                    vacant.insert(package);
                }
            }
        }

        Self {
            packages: packages.into_values().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    #[test]
    fn parses_declarations() {
        let document: InputDocument = serde_json::from_str(indoc! {r#"
            {
              "packages": [
                {
                  "path": "example/model",
                  "records": [
                    {
                      "name": "User",
                      "file": "user.go",
                      "line": 12,
                      "fields": [
                        { "name": "active", "type": "bool", "shape": { "kind": "scalar", "size": 1 } },
                        { "name": "id", "type": "int64", "tag": "json:\"id\"", "shape": { "kind": "scalar", "size": 8 } }
                      ]
                    }
                  ]
                }
              ]
            }
        "#})
        .unwrap();

        let record = &document.packages[0].records[0];
        assert_eq!(record.name, "User");
        assert_eq!(record.position, Position::new("user.go", 12));
        assert!(!record.ignore);
        assert_eq!(record.fields[1].tag, "json:\"id\"");
        assert_eq!(record.fields[1].ty, TypeShape::scalar(8));
        assert_eq!(record.fields[0].comment, "");
        assert_eq!(document.record_count(), 1);
    }

    #[test]
    fn documents_concatenate_in_order() {
        let first = InputDocument {
            packages: vec![PackageDecl::<TypeShape> {
                path: "a".into(),
                records: vec![],
            }],
        };

        let second = InputDocument {
            packages: vec![PackageDecl {
                path: "b".into(),
                records: vec![],
            }],
        };

        let merged: InputDocument = [first, second].into_iter().collect();
        let paths: Vec<_> = merged.packages.iter().map(|p| p.path.as_str()).collect();

        assert_eq!(paths, ["a", "b"]);
        assert_eq!(merged.record_count(), 0);
    }

    #[test]
    fn split_packages_are_merged() {
        let record = |name: &str| RecordDecl::<TypeShape> {
            name: name.into(),
            position: Position::new("file.go", 1),
            fields: vec![],
            ignore: false,
        };

        let package = |path: &str, records| PackageDecl { path: path.into(), records };

        let merged: InputDocument = [
            InputDocument {
                packages: vec![package("b", vec![record("First")]), package("a", vec![])],
            },
            InputDocument {
                packages: vec![package("b", vec![record("Second")])],
            },
        ]
        .into_iter()
        .collect();

        let paths: Vec<_> = merged.packages.iter().map(|p| p.path.as_str()).collect();
        let names: Vec<_> = merged.packages[0]
            .records
            .iter()
            .map(|r| r.name.as_str())
            .collect();

        assert_eq!(paths, ["b", "a"]);
        assert_eq!(names, ["First", "Second"]);
    }
}
