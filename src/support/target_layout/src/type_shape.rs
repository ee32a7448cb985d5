use serde::{Deserialize, Serialize};

/// Structural description of a field's type, just enough to size it.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TypeShape {
    /// Integers, floats, booleans and the like
    Scalar { size: u64 },
    /// A pair of floats, aligned like one of its halves
    Complex { size: u64 },
    Pointer,
    /// Multi-word values such as strings, slices and interfaces
    Words { count: u64 },
    Array { len: u64, elem: Box<TypeShape> },
    Record { fields: Vec<TypeShape> },
    /// Unresolved generic type parameter
    Param { name: String },
}

impl TypeShape {
    pub fn scalar(size: u64) -> Self {
        Self::Scalar { size }
    }

    pub fn array(len: u64, elem: TypeShape) -> Self {
        Self::Array {
            len,
            elem: Box::new(elem),
        }
    }

    pub fn record(fields: impl IntoIterator<Item = TypeShape>) -> Self {
        Self::Record {
            fields: fields.into_iter().collect(),
        }
    }
}
