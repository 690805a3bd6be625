use std::f64::consts::LN_2;
use crate::error::{Error, Result};
use super::*;

/// Scalar-valued distribution. The required methods are the primitives a concrete
/// distribution must supply; every provided method is a fallback derivation built
/// from those primitives. Implementors override a provided method whenever a closed
/// form or a numerically better expression is available, and the override is always
/// the one resolved by callers and by the broadcast routines.
///
/// All derivations fail with exactly the error the primitive they call raises; no
/// argument is clamped to the primitive domain before being passed on.
pub trait Univariate
    where Self : Distribution
{

    /// Density (continuous) or probability mass (discrete) at x.
    fn pdf(&self, x : f64) -> Result<f64>;

    /// Probability of a realization smaller or equal to x.
    fn cdf(&self, x : f64) -> Result<f64>;

    /// Smallest x such that cdf(x) >= p. Must fail with a domain error when p is
    /// outside [0, 1].
    fn quantile(&self, p : f64) -> Result<f64>;

    fn mean(&self) -> Result<f64>;

    fn var(&self) -> Result<f64>;

    /// Entropy in nats.
    fn entropy(&self) -> Result<f64>;

    fn in_support(&self, x : f64) -> bool;

    /// Excess kurtosis (zero for the normal distribution).
    fn kurtosis(&self) -> Result<f64> {
        Err(Error::unsupported("kurtosis", self.category()))
    }

    fn skewness(&self) -> Result<f64> {
        Err(Error::unsupported("skewness", self.category()))
    }

    /// Variance of an observation when the distribution location is set at mu,
    /// as used by residuals standardized against a fitted value.
    fn var_at(&self, _mu : f64) -> Result<f64> {
        Err(Error::unsupported("var_at", self.category()))
    }

    /// Complementary cumulative probability (survival function).
    fn ccdf(&self, x : f64) -> Result<f64> {
        Ok(1.0 - self.cdf(x)?)
    }

    /// Quantile of the complementary cumulative probability.
    fn cquantile(&self, p : f64) -> Result<f64> {
        self.quantile(1.0 - p)
    }

    fn logpdf(&self, x : f64) -> Result<f64> {
        Ok(self.pdf(x)?.ln())
    }

    fn logcdf(&self, x : f64) -> Result<f64> {
        Ok(self.cdf(x)?.ln())
    }

    fn logccdf(&self, x : f64) -> Result<f64> {
        Ok(self.ccdf(x)?.ln())
    }

    /// Inverse of logcdf.
    fn invlogcdf(&self, lp : f64) -> Result<f64> {
        self.quantile(lp.exp())
    }

    /// Inverse of logccdf. The complement 1 - exp(lp) is taken as -expm1(lp),
    /// which keeps its precision as lp approaches zero.
    fn invlogccdf(&self, lp : f64) -> Result<f64> {
        self.quantile(-lp.exp_m1())
    }

    fn std(&self) -> Result<f64> {
        Ok(self.var()?.sqrt())
    }

    fn median(&self) -> Result<f64> {
        self.quantile(0.5)
    }

    fn excess_kurtosis(&self) -> Result<f64> {
        self.kurtosis()
    }

    /// Kurtosis without the normal correction (three for the normal distribution).
    fn proper_kurtosis(&self) -> Result<f64> {
        Ok(self.excess_kurtosis()? + 3.0)
    }

    /// Proper kurtosis if proper is set; excess kurtosis otherwise.
    fn kurtosis_with(&self, proper : bool) -> Result<f64> {
        if proper {
            self.proper_kurtosis()
        } else {
            self.excess_kurtosis()
        }
    }

    /// Entropy in bits.
    fn entropy_bits(&self) -> Result<f64> {
        Ok(self.entropy()? / LN_2)
    }

    /// Entropy for the logarithm at base b.
    fn entropy_base(&self, b : f64) -> Result<f64> {
        if !(b > 0.0) || b == 1.0 || b.is_infinite() {
            return Err(Error::domain("entropy_base", b));
        }
        Ok(self.entropy()? / b.ln())
    }

    /// Log-probability of the interval (y, x].
    fn logdiffcdf(&self, x : f64, y : f64) -> Result<f64> {
        if x < y {
            return Err(Error::domain("logdiffcdf", x));
        }
        let (cx, cy) = (self.cdf(x)?, self.cdf(y)?);
        Ok((cx - cy).ln())
    }

}

/// Univariate distribution over the real line, where each draw is a real.
pub trait Continuous
    where Self : Univariate + rand_distr::Distribution<f64>
{ }

/// Univariate distribution over the integers. Draws are integral, and the density
/// primitive is the probability mass, so pmf/logpmf are plain aliases for pdf/logpdf.
pub trait Discrete
    where Self : Univariate + rand_distr::Distribution<i64>
{

    fn pmf(&self, x : f64) -> Result<f64> {
        self.pdf(x)
    }

    fn logpmf(&self, x : f64) -> Result<f64> {
        self.logpdf(x)
    }

}
