use std::fmt::{self, Debug, Display};
use crate::error::{Error, Result};

mod univariate;

pub use univariate::*;

mod multivariate;

pub use multivariate::*;

/// Closed set of sample shapes a distribution can yield. The broadcast and
/// sampling routines select their behavior by category: continuous variates
/// fill real-valued containers, discrete variates fill integral containers,
/// multivariate variates fill one matrix axis per draw and matrix-variate
/// distributions yield one matrix per draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Continuous,
    Discrete,
    Multivariate,
    MatrixVariate
}

impl Display for Category {

    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Continuous => write!(f, "continuous univariate"),
            Category::Discrete => write!(f, "discrete univariate"),
            Category::Multivariate => write!(f, "multivariate"),
            Category::MatrixVariate => write!(f, "matrix-variate")
        }
    }

}

/// Trait shared by all distributions handled by this crate. Implementors are
/// never mutated by any of the derived operations, which all take &self; the
/// parameter state is fixed at construction and owned by the caller.
///
/// Sampling goes through the rand_distr::Distribution implementation that each
/// category trait requires, taking an explicit random number generator. No
/// generator is shared by this crate, so the derived operations can be called
/// from independent threads as long as the implementor's own draw procedure does
/// not rely on unsynchronized interior state, and no two threads write into the
/// same output buffer.
pub trait Distribution
    where Self : Debug
{

    fn category(&self) -> Category;

    /// Length of the natural vector shape of multivariate distributions (number
    /// of rows x columns for matrix-variate distributions). Used to validate the
    /// orientation of 2-D sample buffers. Univariate distributions do not define it.
    fn dimensionality(&self) -> Result<usize> {
        Err(Error::unsupported("dimensionality", self.category()))
    }

}
