#![allow(dead_code)]

use nalgebra::*;
use rand::Rng;
use rand_distr::StandardNormal;
use special::Gamma;
use std::f64::consts::PI;
use derivs::prob::*;
use derivs::fit::Family;
use derivs::{Error, Result};
use derivs::shape::Shape;

/// Logistic distribution, with closed forms for the density, cumulative and quantile
/// functions. Overrides logpdf; every other derived operation uses the fallbacks.
#[derive(Debug, Clone)]
pub struct Logistic {
    pub loc : f64,
    pub scale : f64
}

impl Logistic {

    pub fn new(loc : f64, scale : f64) -> anyhow::Result<Self> {
        if !(scale > 0.0) {
            return Err(anyhow::Error::msg("Logistic scale must be positive"));
        }
        Ok(Self { loc, scale })
    }

    fn z(&self, x : f64) -> f64 {
        (x - self.loc) / self.scale
    }

}

impl Distribution for Logistic {

    fn category(&self) -> Category {
        Category::Continuous
    }

}

impl Univariate for Logistic {

    fn pdf(&self, x : f64) -> Result<f64> {
        let e = (-self.z(x)).exp();
        Ok(e / (self.scale * (1.0 + e).powi(2)))
    }

    fn logpdf(&self, x : f64) -> Result<f64> {
        let z = self.z(x);
        Ok(-z - 2.0 * (-z).exp().ln_1p() - self.scale.ln())
    }

    fn cdf(&self, x : f64) -> Result<f64> {
        Ok(1.0 / (1.0 + (-self.z(x)).exp()))
    }

    fn quantile(&self, p : f64) -> Result<f64> {
        if !(0.0..=1.0).contains(&p) {
            return Err(Error::Domain { op : "quantile", value : p });
        }
        Ok(self.loc + self.scale * (p / (1.0 - p)).ln())
    }

    fn mean(&self) -> Result<f64> {
        Ok(self.loc)
    }

    fn var(&self) -> Result<f64> {
        Ok(self.scale.powi(2) * PI.powi(2) / 3.0)
    }

    fn entropy(&self) -> Result<f64> {
        Ok(self.scale.ln() + 2.0)
    }

    fn in_support(&self, x : f64) -> bool {
        !x.is_nan()
    }

    fn kurtosis(&self) -> Result<f64> {
        Ok(1.2)
    }

    fn skewness(&self) -> Result<f64> {
        Ok(0.0)
    }

    fn var_at(&self, _mu : f64) -> Result<f64> {
        self.var()
    }

}

impl Family for Logistic {

    // Log-density relative to the mode, symmetric in (loc, obs).
    fn log_density_at(&self, loc : f64, obs : f64) -> Result<f64> {
        let z = (obs - loc) / self.scale;
        Ok(-z - 2.0 * ((-z).exp() + 1.0).ln() + 2.0 * (2.0f64).ln())
    }

    fn start_value(&self, obs : f64, _weight : f64) -> Result<f64> {
        Ok(obs)
    }

}

impl rand_distr::Distribution<f64> for Logistic {

    fn sample<R : Rng + ?Sized>(&self, rng : &mut R) -> f64 {
        let u : f64 = rng.gen_range(f64::EPSILON..1.0);
        self.loc + self.scale * (u / (1.0 - u)).ln()
    }

}

impl Continuous for Logistic { }

/// Poisson distribution over the non-negative integers.
#[derive(Debug, Clone)]
pub struct Poisson {
    pub lambda : f64,
    sampler : rand_distr::Poisson<f64>
}

impl Poisson {

    pub fn new(lambda : f64) -> anyhow::Result<Self> {
        let sampler = rand_distr::Poisson::new(lambda)
            .map_err(|e| anyhow::Error::msg(format!("Invalid Poisson rate: {}", e)))?;
        Ok(Self { lambda, sampler })
    }

    fn is_count(x : f64) -> bool {
        x >= 0.0 && x.fract() == 0.0 && x.is_finite()
    }

    // Upper bound of the counts with non-negligible mass.
    fn upper(&self) -> u64 {
        (self.lambda + 50.0 * self.lambda.sqrt() + 50.0) as u64
    }

}

impl Distribution for Poisson {

    fn category(&self) -> Category {
        Category::Discrete
    }

}

impl Univariate for Poisson {

    fn pdf(&self, x : f64) -> Result<f64> {
        if !Self::is_count(x) {
            return Ok(0.0);
        }
        Ok((x * self.lambda.ln() - self.lambda - Gamma::ln_gamma(x + 1.0).0).exp())
    }

    fn cdf(&self, x : f64) -> Result<f64> {
        if x < 0.0 {
            return Ok(0.0);
        }
        let mut c = 0.0;
        for k in 0..=(x.floor() as u64).min(self.upper()) {
            c += self.pdf(k as f64)?;
        }
        Ok(c.min(1.0))
    }

    fn quantile(&self, p : f64) -> Result<f64> {
        if !(0.0..=1.0).contains(&p) {
            return Err(Error::Domain { op : "quantile", value : p });
        }
        let mut c = 0.0;
        for k in 0..=self.upper() {
            c += self.pdf(k as f64)?;
            if c >= p {
                return Ok(k as f64);
            }
        }
        Ok(f64::INFINITY)
    }

    fn mean(&self) -> Result<f64> {
        Ok(self.lambda)
    }

    fn var(&self) -> Result<f64> {
        Ok(self.lambda)
    }

    fn entropy(&self) -> Result<f64> {
        let mut h = 0.0;
        for k in 0..=self.upper() {
            let p = self.pdf(k as f64)?;
            if p > 0.0 {
                h -= p * p.ln();
            }
        }
        Ok(h)
    }

    fn in_support(&self, x : f64) -> bool {
        Self::is_count(x)
    }

    fn kurtosis(&self) -> Result<f64> {
        Ok(1.0 / self.lambda)
    }

    fn var_at(&self, mu : f64) -> Result<f64> {
        Ok(mu)
    }

}

impl Family for Poisson {

    fn log_density_at(&self, loc : f64, obs : f64) -> Result<f64> {
        if !(loc > 0.0) {
            return Err(Error::Domain { op : "log_density_at", value : loc });
        }
        let ylogy = if obs > 0.0 { obs * (obs / loc).ln() } else { 0.0 };
        Ok(-(ylogy - (obs - loc)))
    }

    fn start_value(&self, obs : f64, _weight : f64) -> Result<f64> {
        Ok(obs + 0.1)
    }

}

impl rand_distr::Distribution<i64> for Poisson {

    fn sample<R : Rng + ?Sized>(&self, rng : &mut R) -> i64 {
        let s : f64 = rand_distr::Distribution::<f64>::sample(&self.sampler, rng);
        s as i64
    }

}

impl Discrete for Poisson { }

/// Multivariate normal with independent components.
#[derive(Debug, Clone)]
pub struct DiagNormal {
    pub mu : DVector<f64>,
    pub sigma2 : DVector<f64>
}

impl DiagNormal {

    pub fn new(mu : DVector<f64>, sigma2 : DVector<f64>) -> anyhow::Result<Self> {
        if mu.nrows() != sigma2.nrows() {
            return Err(anyhow::Error::msg("Mismatch between mean and variance vector sizes"));
        }
        if sigma2.iter().any(|s| !(*s > 0.0) ) {
            return Err(anyhow::Error::msg("Variances must be positive"));
        }
        Ok(Self { mu, sigma2 })
    }

    pub fn standard(n : usize) -> Self {
        Self { mu : DVector::zeros(n), sigma2 : DVector::from_element(n, 1.0) }
    }

}

impl Distribution for DiagNormal {

    fn category(&self) -> Category {
        Category::Multivariate
    }

    fn dimensionality(&self) -> Result<usize> {
        Ok(self.mu.nrows())
    }

}

impl Multivariate for DiagNormal {

    fn pdf(&self, x : DVectorSlice<'_, f64>) -> Result<f64> {
        Ok(self.logpdf(x)?.exp())
    }

    fn logpdf(&self, x : DVectorSlice<'_, f64>) -> Result<f64> {
        if x.nrows() != self.mu.nrows() {
            return Err(Error::Shape { expected : Shape::Vector(self.mu.nrows()), found : Shape::of(&x) });
        }
        let mut lp = 0.0;
        for ((x, m), s) in x.iter().zip(self.mu.iter()).zip(self.sigma2.iter()) {
            lp += -0.5 * (2.0 * PI * s).ln() - (x - m).powi(2) / (2.0 * s);
        }
        Ok(lp)
    }

    fn mean(&self) -> Result<DVector<f64>> {
        Ok(self.mu.clone())
    }

    fn var(&self) -> Result<DVector<f64>> {
        Ok(self.sigma2.clone())
    }

    fn entropy(&self) -> Result<f64> {
        Ok(self.sigma2.iter().map(|s| 0.5 * (2.0 * PI * std::f64::consts::E * s).ln() ).sum())
    }

    fn in_support(&self, x : DVectorSlice<'_, f64>) -> bool {
        x.nrows() == self.mu.nrows() && x.iter().all(|x| x.is_finite() )
    }

}

impl rand_distr::Distribution<DVector<f64>> for DiagNormal {

    fn sample<R : Rng + ?Sized>(&self, rng : &mut R) -> DVector<f64> {
        let mut s = DVector::zeros(self.mu.nrows());
        for i in 0..s.nrows() {
            let z : f64 = rng.sample(StandardNormal);
            s[i] = self.mu[i] + self.sigma2[i].sqrt() * z;
        }
        s
    }

}

/// Matrix of independent standard normal entries.
#[derive(Debug, Clone)]
pub struct StdMatrixNormal {
    pub rows : usize,
    pub cols : usize
}

impl Distribution for StdMatrixNormal {

    fn category(&self) -> Category {
        Category::MatrixVariate
    }

    fn dimensionality(&self) -> Result<usize> {
        Ok(self.rows * self.cols)
    }

}

impl MatrixVariate for StdMatrixNormal {

    fn size(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    fn pdf(&self, x : &DMatrix<f64>) -> Result<f64> {
        let lp : f64 = x.iter().map(|x| -0.5 * (2.0 * PI).ln() - x.powi(2) / 2.0 ).sum();
        Ok(lp.exp())
    }

    fn mean(&self) -> Result<DMatrix<f64>> {
        Ok(DMatrix::zeros(self.rows, self.cols))
    }

    fn var(&self) -> Result<DMatrix<f64>> {
        Ok(DMatrix::from_element(self.rows, self.cols, 1.0))
    }

    fn entropy(&self) -> Result<f64> {
        Ok((self.rows * self.cols) as f64 * 0.5 * (2.0 * PI * std::f64::consts::E).ln())
    }

    fn in_support(&self, x : &DMatrix<f64>) -> bool {
        x.shape() == (self.rows, self.cols)
    }

}

impl rand_distr::Distribution<DMatrix<f64>> for StdMatrixNormal {

    fn sample<R : Rng + ?Sized>(&self, rng : &mut R) -> DMatrix<f64> {
        let mut m = DMatrix::zeros(self.rows, self.cols);
        for v in m.iter_mut() {
            *v = rng.sample(StandardNormal);
        }
        m
    }

}
