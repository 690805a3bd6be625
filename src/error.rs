use thiserror::Error;
use crate::shape::Shape;
use crate::prob::Category;

pub type Result<T> = std::result::Result<T, Error>;

/// Coarse classification of the failures raised by this crate. Several
/// [`Error`] variants share a kind (e.g. a bad output buffer and an ambiguous
/// multivariate orientation are both shape mismatches).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    ShapeMismatch,
    Domain,
    Unsupported
}

/// Errors are deterministic computational failures: none of the derivations
/// or broadcast operations recover from them, they are propagated unchanged
/// to the caller.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {

    #[error("Shape mismatch: expected {expected}, found {found}")]
    Shape { expected : Shape, found : Shape },

    #[error("Shapes {left} and {right} cannot be broadcast to a common shape")]
    Broadcast { left : Shape, right : Shape },

    #[error("Cannot orient {rows}x{cols} buffer against dimensionality {dim}")]
    Orientation { rows : usize, cols : usize, dim : usize },

    #[error("Argument {value} outside domain of {op}")]
    Domain { op : &'static str, value : f64 },

    #[error("Operation {op} not supported for {category} distributions")]
    Unsupported { op : &'static str, category : Category }

}

impl Error {

    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Shape { .. } | Error::Broadcast { .. } | Error::Orientation { .. } => {
                ErrorKind::ShapeMismatch
            },
            Error::Domain { .. } => ErrorKind::Domain,
            Error::Unsupported { .. } => ErrorKind::Unsupported
        }
    }

    pub(crate) fn domain(op : &'static str, value : f64) -> Self {
        Error::Domain { op, value }
    }

    pub(crate) fn unsupported(op : &'static str, category : Category) -> Self {
        Error::Unsupported { op, category }
    }

}
