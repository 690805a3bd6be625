use nalgebra::*;
use crate::error::Result;
use crate::prob::Multivariate;
use crate::shape::{orientation, Orientation};

// Evaluates f over every sample held by x, where the axis of x with as many
// entries as the distribution dimensionality holds the sample components.
fn each_sample<D, F>(d : &D, x : &DMatrix<f64>, mut f : F) -> Result<DVector<f64>>
where
    D : Multivariate + ?Sized,
    F : FnMut(DVectorSlice<'_, f64>) -> Result<f64>
{
    let dim = d.dimensionality()?;
    match orientation(x.nrows(), x.ncols(), dim)? {
        Orientation::Columns => {
            let mut out = DVector::zeros(x.ncols());
            for (j, col) in x.column_iter().enumerate() {
                out[j] = f(col)?;
            }
            Ok(out)
        },
        Orientation::Rows => {
            let mut out = DVector::zeros(x.nrows());
            for (i, row) in x.row_iter().enumerate() {
                let s = row.transpose();
                out[i] = f(s.column(0))?;
            }
            Ok(out)
        }
    }
}

/// Density of each sample in x, which holds one sample per column (if x has as many
/// rows as the distribution dimensionality) or one sample per row (if x has as many
/// columns). Square buffers matching the dimensionality on both axes are rejected.
pub fn pdf_each<D>(d : &D, x : &DMatrix<f64>) -> Result<DVector<f64>>
where
    D : Multivariate + ?Sized
{
    each_sample(d, x, |s| d.pdf(s) )
}

pub fn logpdf_each<D>(d : &D, x : &DMatrix<f64>) -> Result<DVector<f64>>
where
    D : Multivariate + ?Sized
{
    each_sample(d, x, |s| d.logpdf(s) )
}

/// Joint log-density of the samples in x, assumed independent.
pub fn loglikelihood<D>(d : &D, x : &DMatrix<f64>) -> Result<f64>
where
    D : Multivariate + ?Sized
{
    Ok(logpdf_each(d, x)?.sum())
}
