mod field;
mod package;
mod position;
mod record;

pub use field::Field;
pub use package::Package;
pub use position::Position;
pub use record::{Record, RecordStatus};
use serde::{Deserialize, Serialize};

/// Alignment findings for every analyzed package.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub packages: Vec<Package>,
}

impl Report {
    pub fn new(packages: Vec<Package>) -> Self {
        Self { packages }
    }

    /// A report is empty when none of its packages have any records.
    pub fn is_empty(&self) -> bool {
        self.packages.iter().all(Package::is_empty)
    }

    pub fn has_problems(&self) -> bool {
        self.packages.iter().any(Package::has_problems)
    }

    pub fn non_empty_packages(&self) -> impl Iterator<Item = &Package> {
        self.packages.iter().filter(|package| !package.is_empty())
    }

    pub fn records(&self) -> impl Iterator<Item = (&Package, &Record)> {
        self.packages
            .iter()
            .flat_map(|package| package.records.iter().map(move |record| (package, record)))
    }

    /// First record with the given name, along with the package it belongs to.
    pub fn find_record(&self, name: &str) -> Option<(&Package, &Record)> {
        self.records().find(|(_, record)| record.name == name)
    }

    pub fn unchecked_records(&self) -> impl Iterator<Item = (&Package, &Record)> {
        self.records()
            .filter(|(_, record)| record.status().is_unchecked())
    }
}
