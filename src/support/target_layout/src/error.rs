use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum IndeterminateLayout {
    #[error("type parameter `{0}` has no fixed layout")]
    TypeParameter(String),
    #[error("field `{0}` has no resolved layout")]
    UnresolvedField(String),
    #[error("size exceeds the 64-bit address space")]
    Overflow,
}
