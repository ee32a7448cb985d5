use crate::{Field, Position};
use data_units::ByteUnits;
use derive_more::IsVariant;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub name: String,
    pub position: Position,
    pub fields: Vec<Field>,

    /// Present only when reordering saves space
    #[serde(rename = "aligned_fields")]
    pub optimized_fields: Option<Vec<Field>>,

    /// Both sizes are `None` when the layout could not be determined
    pub size: Option<ByteUnits>,
    pub optimal_size: Option<ByteUnits>,

    #[serde(default)]
    pub ignore: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, IsVariant)]
pub enum RecordStatus {
    Optimal,
    Misaligned,
    Unchecked,
    Ignored,
}

impl Record {
    pub fn checked(
        name: impl Into<String>,
        position: Position,
        fields: Vec<Field>,
        size: ByteUnits,
        optimized_fields: Vec<Field>,
        optimal_size: ByteUnits,
        ignore: bool,
    ) -> Self {
        let optimized_fields = (optimal_size != size).then_some(optimized_fields);

        Self {
            name: name.into(),
            position,
            fields,
            optimized_fields,
            size: Some(size),
            optimal_size: Some(optimal_size),
            ignore,
        }
    }

    pub fn unchecked(
        name: impl Into<String>,
        position: Position,
        fields: Vec<Field>,
        ignore: bool,
    ) -> Self {
        Self {
            name: name.into(),
            position,
            fields,
            optimized_fields: None,
            size: None,
            optimal_size: None,
            ignore,
        }
    }

    pub fn status(&self) -> RecordStatus {
        if self.ignore {
            return RecordStatus::Ignored;
        }

        match (self.size, self.optimal_size) {
            (Some(size), Some(optimal_size)) if size != optimal_size => RecordStatus::Misaligned,
            (Some(_), Some(_)) => RecordStatus::Optimal,
            _ => RecordStatus::Unchecked,
        }
    }

    /// Whether this record should be reported by a check.
    pub fn has_problems(&self) -> bool {
        self.status().is_misaligned()
    }

    /// The optimal field order, which is the declared one when nothing better exists.
    pub fn optimal_fields(&self) -> &[Field] {
        self.optimized_fields.as_deref().unwrap_or(&self.fields)
    }
}

impl Display for RecordStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordStatus::Optimal => write!(f, "well aligned"),
            RecordStatus::Misaligned => write!(f, "misaligned"),
            RecordStatus::Unchecked => write!(f, "not checkable"),
            RecordStatus::Ignored => write!(f, "ignored"),
        }
    }
}

#[test]
fn test_optimized_fields_only_when_smaller() {
    let fields = vec![Field::new("a", "int64")];

    let record = Record::checked(
        "Same",
        Position::default(),
        fields.clone(),
        ByteUnits::of(8),
        fields.clone(),
        ByteUnits::of(8),
        false,
    );

    assert!(record.optimized_fields.is_none());
    assert_eq!(record.status(), RecordStatus::Optimal);
    assert_eq!(record.optimal_fields(), &fields[..]);
}

#[test]
fn test_status_precedence() {
    let mut record = Record::checked(
        "Padded",
        Position::default(),
        vec![],
        ByteUnits::of(24),
        vec![],
        ByteUnits::of(16),
        false,
    );

    assert_eq!(record.status(), RecordStatus::Misaligned);

    record.ignore = true;
    assert_eq!(record.status(), RecordStatus::Ignored);
    assert!(!record.has_problems());

    let unchecked = Record::unchecked("Generic", Position::default(), vec![], false);
    assert_eq!(unchecked.status(), RecordStatus::Unchecked);
    assert!(!unchecked.has_problems());
}
