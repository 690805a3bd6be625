use nalgebra::*;
use crate::error::{Error, Result};
use crate::prob::MatrixVariate;
use crate::shape::Shape;

pub(crate) fn check_size<D>(d : &D, x : &DMatrix<f64>) -> Result<()>
where
    D : MatrixVariate + ?Sized
{
    let (rows, cols) = d.size();
    if x.shape() != (rows, cols) {
        return Err(Error::Shape { expected : Shape::Matrix(rows, cols), found : Shape::of(x) });
    }
    Ok(())
}

/// Density of each matrix in xs, which must all have the distribution size.
pub fn pdf_each<D>(d : &D, xs : &[DMatrix<f64>]) -> Result<DVector<f64>>
where
    D : MatrixVariate + ?Sized
{
    let mut out = DVector::zeros(xs.len());
    for (i, x) in xs.iter().enumerate() {
        check_size(d, x)?;
        out[i] = d.pdf(x)?;
    }
    Ok(out)
}

pub fn logpdf_each<D>(d : &D, xs : &[DMatrix<f64>]) -> Result<DVector<f64>>
where
    D : MatrixVariate + ?Sized
{
    let mut out = DVector::zeros(xs.len());
    for (i, x) in xs.iter().enumerate() {
        check_size(d, x)?;
        out[i] = d.logpdf(x)?;
    }
    Ok(out)
}

pub fn loglikelihood<D>(d : &D, xs : &[DMatrix<f64>]) -> Result<f64>
where
    D : MatrixVariate + ?Sized
{
    Ok(logpdf_each(d, xs)?.sum())
}
