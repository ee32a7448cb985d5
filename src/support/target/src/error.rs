use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum TargetError {
    #[error("Unknown platform `{0}`")]
    UnknownPlatform(String),
    #[error("Host architecture `{0}` is not supported, specify a platform explicitly")]
    UnsupportedHost(String),
}
