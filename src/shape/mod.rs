use nalgebra::*;
use serde::{Serialize, Deserialize};
use std::fmt::{self, Display};
use crate::error::{Error, Result};

/// Shape of a container taking part in a broadcast operation. Scalars behave as
/// a 1x1 grid and vectors as a single column, so every shape can be projected
/// onto a (rows, columns) pair. Elements are addressed by their column-major
/// linear index, which is the storage order of nalgebra matrices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Shape {
    Scalar,
    Vector(usize),
    Matrix(usize, usize)
}

impl Shape {

    /// Shape of an arbitrary nalgebra matrix. Matrices with a statically-sized
    /// single column (DVector, Vector3, column slices) are reported as vectors.
    pub fn of<T, R, C, S>(m : &Matrix<T, R, C, S>) -> Self
    where
        R : Dim,
        C : Dim,
        S : RawStorage<T, R, C>
    {
        match C::try_to_usize() {
            Some(1) => Shape::Vector(m.nrows()),
            _ => Shape::Matrix(m.nrows(), m.ncols())
        }
    }

    pub fn dims(&self) -> (usize, usize) {
        match *self {
            Shape::Scalar => (1, 1),
            Shape::Vector(n) => (n, 1),
            Shape::Matrix(r, c) => (r, c)
        }
    }

    pub fn len(&self) -> usize {
        let (r, c) = self.dims();
        r * c
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Resolves the common shape of self and other. Each axis must either agree
    /// or have length one in one of the operands, in which case that operand
    /// is repeated along the axis.
    pub fn promote(&self, other : &Shape) -> Result<Shape> {
        let (r1, c1) = self.dims();
        let (r2, c2) = other.dims();
        let fail = || Error::Broadcast { left : *self, right : *other };
        let rows = promote_axis(r1, r2).ok_or_else(fail)?;
        let cols = promote_axis(c1, c2).ok_or_else(fail)?;
        let shape = match (self, other) {
            (Shape::Matrix(..), _) | (_, Shape::Matrix(..)) => Shape::Matrix(rows, cols),
            (Shape::Vector(_), _) | (_, Shape::Vector(_)) => Shape::Vector(rows),
            _ => Shape::Scalar
        };
        Ok(shape)
    }

    /// Linear index into a container of this shape that corresponds to position
    /// (row, col) of a promoted shape. Singleton axes always map to zero.
    pub fn project(&self, row : usize, col : usize) -> usize {
        let (nr, nc) = self.dims();
        let r = if nr == 1 { 0 } else { row };
        let c = if nc == 1 { 0 } else { col };
        r + c * nr
    }

}

fn promote_axis(a : usize, b : usize) -> Option<usize> {
    if a == b {
        Some(a)
    } else if a == 1 {
        Some(b)
    } else if b == 1 {
        Some(a)
    } else {
        None
    }
}

impl Display for Shape {

    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Scalar => write!(f, "scalar"),
            Shape::Vector(n) => write!(f, "vector({})", n),
            Shape::Matrix(r, c) => write!(f, "{}x{}", r, c)
        }
    }

}

/// Common shape of all informed shapes, or an error naming the first pair
/// that cannot be promoted.
pub fn promote(shapes : &[Shape]) -> Result<Shape> {
    let mut out = Shape::Scalar;
    for s in shapes {
        out = out.promote(s)?;
    }
    log::debug!("Promoted shapes {:?} to {}", shapes, out);
    Ok(out)
}

/// Real-valued containers that can take part in a broadcast operation together
/// with containers of other shapes. Elements are read by the column-major
/// linear index of the container itself; use at(.) to read the element that
/// maps to a position of a promoted shape.
pub trait Broadcast {

    fn shape(&self) -> Shape;

    fn value(&self, ix : usize) -> f64;

    fn at(&self, row : usize, col : usize) -> f64 {
        self.value(self.shape().project(row, col))
    }

}

impl Broadcast for f64 {

    fn shape(&self) -> Shape {
        Shape::Scalar
    }

    fn value(&self, _ix : usize) -> f64 {
        *self
    }

}

impl Broadcast for [f64] {

    fn shape(&self) -> Shape {
        Shape::Vector(self.len())
    }

    fn value(&self, ix : usize) -> f64 {
        self[ix]
    }

}

impl Broadcast for Vec<f64> {

    fn shape(&self) -> Shape {
        Shape::Vector(self.len())
    }

    fn value(&self, ix : usize) -> f64 {
        self[ix]
    }

}

impl<R, C, S> Broadcast for Matrix<f64, R, C, S>
where
    R : Dim,
    C : Dim,
    S : RawStorage<f64, R, C>
{

    fn shape(&self) -> Shape {
        Shape::of(self)
    }

    fn value(&self, ix : usize) -> f64 {
        self[ix]
    }

}

/// Arrangement of vector-valued samples over a 2-D buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {

    /// Each column holds one sample (the buffer has as many rows as the
    /// distribution dimensionality).
    Columns,

    /// Each row holds one sample (the buffer has as many columns as the
    /// distribution dimensionality).
    Rows
}

/// Decides which axis of a rows x cols buffer carries the vector components of a
/// distribution with the informed dimensionality. Fails when neither axis matches,
/// or when both do, since the layout cannot be told apart in that case.
pub fn orientation(rows : usize, cols : usize, dim : usize) -> Result<Orientation> {
    let orient = match (rows == dim, cols == dim) {
        (true, false) => Orientation::Columns,
        (false, true) => Orientation::Rows,
        _ => return Err(Error::Orientation { rows, cols, dim })
    };
    log::debug!("Buffer {}x{} oriented over {:?} for dimensionality {}", rows, cols, orient, dim);
    Ok(orient)
}
