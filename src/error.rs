use thiserror::Error;

use crate::kind::IdKind;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Unknown identifier kind: {0}")]
    UnknownKind(String),

    #[error("No display mask for {0}")]
    NoMask(IdKind),
}

pub type Result<T> = std::result::Result<T, Error>;
