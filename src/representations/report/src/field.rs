use data_units::ByteUnits;
use serde::{Deserialize, Serialize};
use target_layout::{LayoutField, TypeLayout};

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(default)]
    pub tag: String,
    #[serde(default)]
    pub comment: String,

    /// Missing when the sizing provider could not resolve the field's type
    #[serde(flatten)]
    pub layout: Option<TypeLayout>,
}

impl Field {
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            tag: String::new(),
            comment: String::new(),
            layout: None,
        }
    }

    pub fn with_layout(self, layout: TypeLayout) -> Self {
        Self {
            layout: Some(layout),
            ..self
        }
    }

    pub fn size(&self) -> Option<ByteUnits> {
        self.layout.map(|layout| layout.width)
    }
}

impl LayoutField for Field {
    fn name(&self) -> &str {
        &self.name
    }

    fn type_layout(&self) -> Option<TypeLayout> {
        self.layout
    }
}
