use data_units::ByteUnits;
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeLayout {
    #[serde(rename = "size")]
    pub width: ByteUnits,
    #[serde(rename = "align")]
    pub alignment: ByteUnits,
}

impl TypeLayout {
    pub const fn new(width: ByteUnits, alignment: ByteUnits) -> Self {
        Self { width, alignment }
    }

    pub const fn basic(size: ByteUnits) -> Self {
        Self {
            width: size,
            alignment: size,
        }
    }

    pub fn is_zero_sized(&self) -> bool {
        self.width.is_zero()
    }
}
