use nalgebra::*;
use crate::prob::*;
use crate::error::Result;
use crate::shape::{promote, Broadcast};

/// Univariate distributions usable as the response family of iteratively
/// re-weighted model fitting. Besides the primitives of Univariate, a family
/// defines a two-argument log-density, which evaluates an observation against a
/// distribution placed at an arbitrary location (the fitted value of a linear
/// predictor), and the rule used to seed the fitted values before the first
/// iteration.
///
/// The two-argument log-density is a different operation from logpdf(x): logpdf
/// evaluates x against the current parameter state of the distribution, while
/// log_density_at(loc, obs) overrides the location. Families normalize it against
/// the saturated fit, so that it attains its maximum (zero) when loc == obs; the
/// deviance helpers below rely on this to yield proper unit deviances.
pub trait Family
    where Self : Univariate
{

    fn log_density_at(&self, loc : f64, obs : f64) -> Result<f64>;

    /// Start value of the fitted location for a single observation and its
    /// prior weight.
    fn start_value(&self, obs : f64, weight : f64) -> Result<f64>;

}

// Evaluates f(a, b, c) over the promoted shape of the three operands, in
// column-major order.
fn zip3<A, B, C, F>(a : &A, b : &B, c : &C, mut f : F) -> Result<DMatrix<f64>>
where
    A : Broadcast + ?Sized,
    B : Broadcast + ?Sized,
    C : Broadcast + ?Sized,
    F : FnMut(f64, f64, f64) -> Result<f64>
{
    let (nrows, ncols) = promote(&[a.shape(), b.shape(), c.shape()])?.dims();
    let mut out = DMatrix::zeros(nrows, ncols);
    for j in 0..ncols {
        for i in 0..nrows {
            out[(i, j)] = f(a.at(i, j), b.at(i, j), c.at(i, j))?;
        }
    }
    Ok(out)
}

/// Deviance of the fitted values against the observed response:
/// -2 sum_i w_i log_density_at(fitted_i, observed_i), with the sum taken over the
/// promoted shape of the three operands (scalars are repeated).
pub fn deviance<D, F, O, W>(d : &D, fitted : &F, observed : &O, weight : &W) -> Result<f64>
where
    D : Family + ?Sized,
    F : Broadcast + ?Sized,
    O : Broadcast + ?Sized,
    W : Broadcast + ?Sized
{
    let terms = zip3(fitted, observed, weight, |mu, y, w| Ok(w * d.log_density_at(mu, y)?) )?;
    Ok(-2.0 * terms.sum())
}

/// Weighted log-likelihood of the observed response at the fitted values.
pub fn loglik_obs<D, O, F, W>(d : &D, observed : &O, fitted : &F, weight : &W) -> Result<f64>
where
    D : Family + ?Sized,
    O : Broadcast + ?Sized,
    F : Broadcast + ?Sized,
    W : Broadcast + ?Sized
{
    let terms = zip3(fitted, observed, weight, |mu, y, w| Ok(w * d.log_density_at(mu, y)?) )?;
    Ok(terms.sum())
}

/// Deviance residual of a single observation: -2 w log_density_at(observed, fitted).
pub fn devresid<D>(d : &D, observed : f64, fitted : f64, weight : f64) -> Result<f64>
where
    D : Family + ?Sized
{
    Ok(-2.0 * weight * d.log_density_at(observed, fitted)?)
}

/// Deviance residuals over the promoted shape of the operands. Entry i of the result
/// refers to the same observation as entry i of the (promoted) inputs.
pub fn devresid_each<D, O, F, W>(d : &D, observed : &O, fitted : &F, weight : &W) -> Result<DMatrix<f64>>
where
    D : Family + ?Sized,
    O : Broadcast + ?Sized,
    F : Broadcast + ?Sized,
    W : Broadcast + ?Sized
{
    zip3(observed, fitted, weight, |y, mu, w| devresid(d, y, mu, w) )
}

/// Start values for every observation, over the promoted shape of observed and weight.
pub fn start_values<D, O, W>(d : &D, observed : &O, weight : &W) -> Result<DMatrix<f64>>
where
    D : Family + ?Sized,
    O : Broadcast + ?Sized,
    W : Broadcast + ?Sized
{
    zip3(observed, weight, &1.0_f64, |y, w, _| d.start_value(y, w) )
}

/// Pearson residuals (y - mu) sqrt(w) / sqrt(var_at(mu)). Requires the family to
/// define the variance at a location.
pub fn pearson_each<D, O, F, W>(d : &D, observed : &O, fitted : &F, weight : &W) -> Result<DMatrix<f64>>
where
    D : Family + ?Sized,
    O : Broadcast + ?Sized,
    F : Broadcast + ?Sized,
    W : Broadcast + ?Sized
{
    zip3(observed, fitted, weight, |y, mu, w| Ok((y - mu) * w.sqrt() / d.var_at(mu)?.sqrt()) )
}
