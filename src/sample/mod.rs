use nalgebra::*;
use rand::Rng;
use crate::error::{Error, Result};
use crate::prob::*;
use crate::shape::{orientation, Orientation, Shape};
use crate::lift::matrix::check_size;

/* Every position of the containers filled here receives an independent draw, taken
in the storage (column-major) order of the container. Given a deterministic draw
procedure and a seeded generator, the filled values are fully reproducible. */

/// Fills every entry of out with an independent draw of d.
pub fn continuous_into<D, R, C, S, G>(d : &D, out : &mut Matrix<f64, R, C, S>, rng : &mut G)
where
    D : Continuous + ?Sized,
    R : Dim,
    C : Dim,
    S : RawStorageMut<f64, R, C>,
    G : Rng + ?Sized
{
    for o in out.iter_mut() {
        *o = rand_distr::Distribution::<f64>::sample(d, &mut *rng);
    }
}

/// Allocates a real-valued nrows x ncols matrix filled with independent draws of d.
pub fn continuous<D, G>(d : &D, nrows : usize, ncols : usize, rng : &mut G) -> DMatrix<f64>
where
    D : Continuous + ?Sized,
    G : Rng + ?Sized
{
    let mut out = DMatrix::zeros(nrows, ncols);
    continuous_into(d, &mut out, rng);
    out
}

/// Fills every entry of the integral matrix out with an independent draw of d.
pub fn discrete_into<D, R, C, S, G>(d : &D, out : &mut Matrix<i64, R, C, S>, rng : &mut G)
where
    D : Discrete + ?Sized,
    R : Dim,
    C : Dim,
    S : RawStorageMut<i64, R, C>,
    G : Rng + ?Sized
{
    for o in out.iter_mut() {
        *o = rand_distr::Distribution::<i64>::sample(d, &mut *rng);
    }
}

/// Allocates an integral nrows x ncols matrix filled with independent draws of d.
pub fn discrete<D, G>(d : &D, nrows : usize, ncols : usize, rng : &mut G) -> DMatrix<i64>
where
    D : Discrete + ?Sized,
    G : Rng + ?Sized
{
    let mut out = DMatrix::zeros(nrows, ncols);
    discrete_into(d, &mut out, rng);
    out
}

fn draw_vector<D, G>(d : &D, dim : usize, rng : &mut G) -> Result<DVector<f64>>
where
    D : Multivariate + ?Sized,
    G : Rng + ?Sized
{
    let s = rand_distr::Distribution::<DVector<f64>>::sample(d, rng);
    if s.nrows() != dim {
        return Err(Error::Shape { expected : Shape::Vector(dim), found : Shape::of(&s) });
    }
    Ok(s)
}

/// Fills out with independent draws of d. The axis of out with as many entries as
/// the distribution dimensionality receives the draw components: if out has dim rows
/// each column receives one draw; if out has dim columns each row receives one draw.
/// Buffers matching the dimensionality on both axes (or on neither) are rejected.
/// All draws are taken before out is written, so out is left untouched whenever
/// the call fails.
pub fn multivariate_into<D, G>(d : &D, out : &mut DMatrix<f64>, rng : &mut G) -> Result<()>
where
    D : Multivariate + ?Sized,
    G : Rng + ?Sized
{
    let dim = d.dimensionality()?;
    match orientation(out.nrows(), out.ncols(), dim)? {
        Orientation::Columns => {
            let draws = multivariate(d, out.ncols(), rng)?;
            out.copy_from(&draws);
        },
        Orientation::Rows => {
            let draws = multivariate(d, out.nrows(), rng)?;
            out.copy_from(&draws.transpose());
        }
    }
    Ok(())
}

/// Allocates a dim x n matrix holding n independent draws of d over its columns.
pub fn multivariate<D, G>(d : &D, n : usize, rng : &mut G) -> Result<DMatrix<f64>>
where
    D : Multivariate + ?Sized,
    G : Rng + ?Sized
{
    let dim = d.dimensionality()?;
    let mut out = DMatrix::zeros(dim, n);
    for j in 0..n {
        let s = draw_vector(d, dim, &mut *rng)?;
        out.set_column(j, &s);
    }
    Ok(out)
}

fn draw_matrix<D, G>(d : &D, rng : &mut G) -> Result<DMatrix<f64>>
where
    D : MatrixVariate + ?Sized,
    G : Rng + ?Sized
{
    let s = rand_distr::Distribution::<DMatrix<f64>>::sample(d, rng);
    check_size(d, &s)?;
    Ok(s)
}

/// Sequence of n independent matrix draws of d.
pub fn matrix<D, G>(d : &D, n : usize, rng : &mut G) -> Result<Vec<DMatrix<f64>>>
where
    D : MatrixVariate + ?Sized,
    G : Rng + ?Sized
{
    (0..n).map(|_| draw_matrix(d, &mut *rng) ).collect()
}

/// Overwrites each matrix of out with an independent draw of d. All matrices must
/// already have the distribution size. The draws are taken before any matrix is
/// written, so out is left untouched whenever the call fails.
pub fn matrix_into<D, G>(d : &D, out : &mut [DMatrix<f64>], rng : &mut G) -> Result<()>
where
    D : MatrixVariate + ?Sized,
    G : Rng + ?Sized
{
    for m in out.iter() {
        check_size(d, m)?;
    }
    let draws = matrix(d, out.len(), rng)?;
    for (m, s) in out.iter_mut().zip(draws.iter()) {
        m.copy_from(s);
    }
    Ok(())
}
