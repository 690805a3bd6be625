use nalgebra::*;
use std::f64::consts::LN_2;
use crate::error::{Error, Result};
use super::*;

/// Vector-valued distribution of fixed dimensionality. Implementors must report the
/// sample length at Distribution::dimensionality, against which 2-D sample buffers
/// are oriented; each draw (the rand_distr::Distribution implementation) must
/// yield a vector of that length.
pub trait Multivariate
    where Self : Distribution + rand_distr::Distribution<DVector<f64>>
{

    fn pdf(&self, x : DVectorSlice<'_, f64>) -> Result<f64>;

    fn mean(&self) -> Result<DVector<f64>>;

    /// Marginal variances (the diagonal of the covariance matrix).
    fn var(&self) -> Result<DVector<f64>>;

    fn entropy(&self) -> Result<f64>;

    fn in_support(&self, x : DVectorSlice<'_, f64>) -> bool;

    fn cov(&self) -> Result<DMatrix<f64>> {
        Err(Error::unsupported("cov", self.category()))
    }

    fn logpdf(&self, x : DVectorSlice<'_, f64>) -> Result<f64> {
        Ok(self.pdf(x)?.ln())
    }

    fn std(&self) -> Result<DVector<f64>> {
        Ok(self.var()?.map(|v| v.sqrt() ))
    }

    fn entropy_bits(&self) -> Result<f64> {
        Ok(self.entropy()? / LN_2)
    }

}

/// Matrix-valued distribution (e.g. Wishart or matrix-normal), which yields a
/// matrix of fixed size, reported by size(), at each draw.
pub trait MatrixVariate
    where Self : Distribution + rand_distr::Distribution<DMatrix<f64>>
{

    /// Number of rows and columns of each realization.
    fn size(&self) -> (usize, usize);

    fn pdf(&self, x : &DMatrix<f64>) -> Result<f64>;

    fn mean(&self) -> Result<DMatrix<f64>>;

    /// Elementwise variances.
    fn var(&self) -> Result<DMatrix<f64>>;

    fn entropy(&self) -> Result<f64>;

    fn in_support(&self, x : &DMatrix<f64>) -> bool;

    fn logpdf(&self, x : &DMatrix<f64>) -> Result<f64> {
        Ok(self.pdf(x)?.ln())
    }

    fn entropy_bits(&self) -> Result<f64> {
        Ok(self.entropy()? / LN_2)
    }

}
