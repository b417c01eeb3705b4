//! A wrapper around [`nalgebra::Matrix`] interpreting it as a polynomial.

use nalgebra::allocator::Allocator;
use nalgebra::dimension::{Const, Dim, DimDiff, DimName, DimSub, U1, U4};
use nalgebra::storage::{RawStorage, Storage, StorageMut};
use nalgebra::{DefaultAllocator, Field, Matrix, OMatrix, OVector, Owned, Scalar};
use std::fmt;

/// A scalar cubic stored on the stack: `[d, c, b, a]` for `a x^3 + b x^2 + c x + d`.
pub type CubicPolynomial = Polynomial<f64, U1, U4, Owned<f64, U1, U4>>;

/// Wrapper around [`nalgebra::Matrix`] interpreting it as a polynomial:
/// $p: \R \to \R^r $ where $r$ is the number of rows i.e. the generic `R` parameter
///
/// Rows are the polynomials for each coordinate
/// and columns are the different powers' coefficents, lowest power first.
#[derive(Clone, Copy)]
pub struct Polynomial<T, R, C, S>(pub Matrix<T, R, C, S>);

/* Eval, Derive */
impl<T: Scalar, R: DimName, C: Dim, S: Storage<T, R, C>> Polynomial<T, R, C, S> {
    /// Evaluate `self` at position `x` and store the result into `out`.
    ///
    /// Uses horner's scheme.
    pub fn evaluate_to<S2>(&self, x: T, out: &mut Matrix<T, R, U1, S2>)
    where
        T: Field,
        S2: StorageMut<T, R, U1>,
    {
        out.fill(T::zero());
        let ncols = self.0.ncols();
        for i in (1..ncols).rev() {
            *out += self.0.column(i);
            *out *= x.clone();
        }
        *out += self.0.column(0);
    }

    /// Evaluate `self` at position `x`.
    pub fn evaluate(&self, x: T) -> OVector<T, R>
    where
        T: Field,
        DefaultAllocator: Allocator<T, R>,
    {
        let mut out = OVector::from_element(T::zero());
        self.evaluate_to(x, &mut out);
        out
    }

    /// Calculate `self`'s derivative and store the result into `out`.
    pub fn derive_to<S2>(&self, out: &mut Matrix<T, R, DimDiff<C, U1>, S2>)
    where
        T: Field,
        C: DimSub<U1>,
        S2: StorageMut<T, R, DimDiff<C, U1>>,
    {
        let mut exponent = T::one();
        for i in 1..self.0.ncols() {
            out.set_column(i - 1, &self.0.column(i));
            *&mut out.column_mut(i - 1) *= exponent.clone();
            exponent += T::one();
        }
    }

    /// Calculate `self`'s derivative.
    pub fn derive(&self) -> Polynomial<T, R, DimDiff<C, U1>, Owned<T, R, DimDiff<C, U1>>>
    where
        T: Field,
        C: DimSub<U1>,
        DefaultAllocator: Allocator<T, R, DimDiff<C, U1>>,
    {
        let (rows, cols) = self.0.shape_generic();
        let mut out = OMatrix::zeros_generic(rows, cols.sub(Const::<1>));
        self.derive_to(&mut out);
        Polynomial(out)
    }
}

/* Scalar polynomials */
impl<T: Scalar + Field, C: Dim, S: Storage<T, U1, C>> Polynomial<T, U1, C, S> {
    /// Evaluate a single row polynomial and unwrap the result.
    pub fn value(&self, x: T) -> T {
        self.evaluate(x)[0].clone()
    }

    /// The coefficient of `x^power`, zero for powers beyond the degree.
    pub fn coefficient(&self, power: usize) -> T {
        if power < self.0.ncols() {
            self.0[(0, power)].clone()
        } else {
            T::zero()
        }
    }
}

/* Common traits */
impl<T: Scalar, R: Dim, R2: Dim, C: Dim, C2: Dim, S, S2> PartialEq<Polynomial<T, R2, C2, S2>>
    for Polynomial<T, R, C, S>
where
    S: RawStorage<T, R, C>,
    S2: RawStorage<T, R2, C2>,
{
    #[inline]
    fn eq(&self, rhs: &Polynomial<T, R2, C2, S2>) -> bool {
        self.0 == rhs.0
    }
}
impl<T, R, C, S: fmt::Debug> fmt::Debug for Polynomial<T, R, C, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        self.0.data.fmt(formatter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::{RowVector3, RowVector4, Vector2};

    #[test]
    fn horner() {
        // 1 + 2x + 3x^2 + 4x^3
        let p = Polynomial(RowVector4::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(p.value(0.0), 1.0);
        assert_eq!(p.value(1.0), 10.0);
        assert_eq!(p.value(2.0), 1.0 + 4.0 + 12.0 + 32.0);
    }

    #[test]
    fn derivative() {
        assert_eq!(
            Polynomial(RowVector4::new(1.0, 2.0, 3.0, 4.0)).derive(),
            Polynomial(RowVector3::new(2.0, 6.0, 12.0))
        );
    }

    #[test]
    fn vector_valued() {
        let p = Polynomial(nalgebra::Matrix2::new(0.0, 1.0, 5.0, -1.0));
        assert_eq!(p.evaluate(2.0), Vector2::new(2.0, 3.0));
    }

    #[test]
    fn coefficients() {
        let p: CubicPolynomial = Polynomial(RowVector4::new(4.0, 3.0, 2.0, 1.0));
        assert_eq!(p.coefficient(0), 4.0);
        assert_eq!(p.coefficient(3), 1.0);
        assert_eq!(p.coefficient(7), 0.0);
    }
}
