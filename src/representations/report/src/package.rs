use crate::Record;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Package {
    pub path: String,
    #[serde(rename = "structs")]
    pub records: Vec<Record>,
}

impl Package {
    pub fn new(path: impl Into<String>, records: Vec<Record>) -> Self {
        Self {
            path: path.into(),
            records,
        }
    }

    /// Empty purely by absence of records, ignored ones included.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn has_problems(&self) -> bool {
        self.records.iter().any(Record::has_problems)
    }

    pub fn problem_records(&self) -> impl Iterator<Item = &Record> {
        self.records.iter().filter(|record| record.has_problems())
    }
}
