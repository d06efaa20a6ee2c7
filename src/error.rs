use thiserror::Error;

use crate::value::ValueKind;

pub type Result<T> = std::result::Result<T, SymbolError>;

#[derive(Error, Debug, PartialEq)]
pub enum SymbolError {
    #[error("found {names:?} names but {values:?} values")]
    CountMismatch { names: usize, values: usize },
    #[error("the name at position {index:?} is empty")]
    EmptyName { index: usize },
    #[error("expected a value of kind `{expected}`, found `{found}`")]
    KindMismatch {
        expected: ValueKind,
        found: ValueKind,
    },
}
