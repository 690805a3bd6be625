use nalgebra::*;
use nalgebra::allocator::Allocator;
use num_traits::ToPrimitive;
use serde::{Serialize, Deserialize};
use crate::error::{Error, Result};
use crate::prob::*;
use crate::shape::Shape;

/// Density evaluation over 2-D buffers of vector-valued samples.
pub mod multivariate;

/// Density evaluation over sequences of matrix-valued samples.
pub mod matrix;

/// Scalar operations of univariate distributions which can be lifted to act
/// elementwise over containers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScalarOp {
    Pdf,
    LogPdf,
    Cdf,
    LogCdf,
    Ccdf,
    LogCcdf,
    Quantile,
    CQuantile,
    InvLogCdf,
    InvLogCcdf
}

impl ScalarOp {

    pub const ALL : [ScalarOp; 10] = [
        ScalarOp::Pdf,
        ScalarOp::LogPdf,
        ScalarOp::Cdf,
        ScalarOp::LogCdf,
        ScalarOp::Ccdf,
        ScalarOp::LogCcdf,
        ScalarOp::Quantile,
        ScalarOp::CQuantile,
        ScalarOp::InvLogCdf,
        ScalarOp::InvLogCcdf
    ];

    /// Evaluates this operation at a single point. Dispatches to the distribution
    /// trait method, so any override of a derived operation is honored.
    pub fn apply<D>(&self, d : &D, x : f64) -> Result<f64>
    where
        D : Univariate + ?Sized
    {
        match self {
            ScalarOp::Pdf => d.pdf(x),
            ScalarOp::LogPdf => d.logpdf(x),
            ScalarOp::Cdf => d.cdf(x),
            ScalarOp::LogCdf => d.logcdf(x),
            ScalarOp::Ccdf => d.ccdf(x),
            ScalarOp::LogCcdf => d.logccdf(x),
            ScalarOp::Quantile => d.quantile(x),
            ScalarOp::CQuantile => d.cquantile(x),
            ScalarOp::InvLogCdf => d.invlogcdf(x),
            ScalarOp::InvLogCcdf => d.invlogccdf(x)
        }
    }

}

fn real<T>(e : &T) -> f64
where
    T : ToPrimitive
{
    e.to_f64().unwrap_or(f64::NAN)
}

/// Applies f to every element of x, yielding a real-valued matrix of the same shape,
/// such that out[i] = f(x[i]) for every linear index i. The input may hold any
/// primitive numeric type, so integral samples of discrete distributions can be
/// passed directly. The first failing evaluation aborts the operation.
pub fn lift<T, R, C, S, F>(x : &Matrix<T, R, C, S>, f : F) -> Result<OMatrix<f64, R, C>>
where
    T : Scalar + ToPrimitive,
    R : Dim,
    C : Dim,
    S : RawStorage<T, R, C>,
    F : FnMut(f64) -> Result<f64>,
    DefaultAllocator : Allocator<f64, R, C>
{
    let (nrows, ncols) = x.data.shape();
    let mut out = OMatrix::<f64, R, C>::zeros_generic(nrows, ncols);
    lift_into(x, &mut out, f)?;
    Ok(out)
}

/// Applies f to every element of x, writing the results into the caller-supplied
/// buffer out, which must have exactly the same number of rows and columns as x.
/// The buffer is never resized.
pub fn lift_into<T, R, C, S, R2, C2, S2, F>(
    x : &Matrix<T, R, C, S>,
    out : &mut Matrix<f64, R2, C2, S2>,
    mut f : F
) -> Result<()>
where
    T : Scalar + ToPrimitive,
    R : Dim,
    C : Dim,
    S : RawStorage<T, R, C>,
    R2 : Dim,
    C2 : Dim,
    S2 : RawStorageMut<f64, R2, C2>,
    F : FnMut(f64) -> Result<f64>
{
    if out.shape() != x.shape() {
        return Err(Error::Shape { expected : Shape::of(x), found : Shape::of(out) });
    }
    log::trace!("Lifting scalar operation over {} elements", x.len());
    for (o, e) in out.iter_mut().zip(x.iter()) {
        *o = f(real(e))?;
    }
    Ok(())
}

/// Evaluates the named operation of d elementwise over x.
pub fn broadcast<D, T, R, C, S>(d : &D, op : ScalarOp, x : &Matrix<T, R, C, S>) -> Result<OMatrix<f64, R, C>>
where
    D : Univariate + ?Sized,
    T : Scalar + ToPrimitive,
    R : Dim,
    C : Dim,
    S : RawStorage<T, R, C>,
    DefaultAllocator : Allocator<f64, R, C>
{
    lift(x, |v| op.apply(d, v) )
}

/// Evaluates the named operation of d elementwise over x, writing into out.
pub fn broadcast_into<D, T, R, C, S, R2, C2, S2>(
    d : &D,
    op : ScalarOp,
    x : &Matrix<T, R, C, S>,
    out : &mut Matrix<f64, R2, C2, S2>
) -> Result<()>
where
    D : Univariate + ?Sized,
    T : Scalar + ToPrimitive,
    R : Dim,
    C : Dim,
    S : RawStorage<T, R, C>,
    R2 : Dim,
    C2 : Dim,
    S2 : RawStorageMut<f64, R2, C2>
{
    lift_into(x, out, |v| op.apply(d, v) )
}

/// Support membership of every element of x.
pub fn support_each<D, T, R, C, S>(d : &D, x : &Matrix<T, R, C, S>) -> OMatrix<bool, R, C>
where
    D : Univariate + ?Sized,
    T : Scalar + ToPrimitive,
    R : Dim,
    C : Dim,
    S : RawStorage<T, R, C>,
    DefaultAllocator : Allocator<bool, R, C>
{
    x.map(|e| d.in_support(real(&e)) )
}

/// Sum of the log-densities of all elements of x, taken as independent
/// realizations of d.
pub fn loglikelihood<D, T, R, C, S>(d : &D, x : &Matrix<T, R, C, S>) -> Result<f64>
where
    D : Univariate + ?Sized,
    T : Scalar + ToPrimitive,
    R : Dim,
    C : Dim,
    S : RawStorage<T, R, C>
{
    x.iter().try_fold(0.0, |lp, e| Ok(lp + d.logpdf(real(e))?) )
}

/// Probability mass of every element of x. Accepts the same containers as broadcast.
pub fn pmf_each<D, T, R, C, S>(d : &D, x : &Matrix<T, R, C, S>) -> Result<OMatrix<f64, R, C>>
where
    D : Discrete + ?Sized,
    T : Scalar + ToPrimitive,
    R : Dim,
    C : Dim,
    S : RawStorage<T, R, C>,
    DefaultAllocator : Allocator<f64, R, C>
{
    lift(x, |v| d.pmf(v) )
}

pub fn logpmf_each<D, T, R, C, S>(d : &D, x : &Matrix<T, R, C, S>) -> Result<OMatrix<f64, R, C>>
where
    D : Discrete + ?Sized,
    T : Scalar + ToPrimitive,
    R : Dim,
    C : Dim,
    S : RawStorage<T, R, C>,
    DefaultAllocator : Allocator<f64, R, C>
{
    lift(x, |v| d.logpmf(v) )
}

pub fn pmf_into<D, T, R, C, S, R2, C2, S2>(
    d : &D,
    x : &Matrix<T, R, C, S>,
    out : &mut Matrix<f64, R2, C2, S2>
) -> Result<()>
where
    D : Discrete + ?Sized,
    T : Scalar + ToPrimitive,
    R : Dim,
    C : Dim,
    S : RawStorage<T, R, C>,
    R2 : Dim,
    C2 : Dim,
    S2 : RawStorageMut<f64, R2, C2>
{
    lift_into(x, out, |v| d.pmf(v) )
}

pub fn logpmf_into<D, T, R, C, S, R2, C2, S2>(
    d : &D,
    x : &Matrix<T, R, C, S>,
    out : &mut Matrix<f64, R2, C2, S2>
) -> Result<()>
where
    D : Discrete + ?Sized,
    T : Scalar + ToPrimitive,
    R : Dim,
    C : Dim,
    S : RawStorage<T, R, C>,
    R2 : Dim,
    C2 : Dim,
    S2 : RawStorageMut<f64, R2, C2>
{
    lift_into(x, out, |v| d.logpmf(v) )
}
