use std::ops::{
    Sub,
    Mul,
    Neg,
};
use std::fmt;

/// An integer vector between two lattice points.
/// Each component of a plain difference is in {-2, ..., 2}, but the type is also
/// used for the scaled residuals of the exact check, so it stores `i64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DiffVector<const D: usize> {
    components: [i64; D],
}
impl<const D: usize> DiffVector<D> {
    /// Create a new vector.
    pub fn new(components: [i64; D]) -> Self {
        DiffVector{components}
    }

    /// Create a new zero vector.
    pub fn zero() -> Self {
        DiffVector{components: [0; D]}
    }

    /// Get the components of the vector.
    pub fn components(&self) -> &[i64; D] {
        &self.components
    }

    /// Get the dot product of two vectors.
    pub fn dot(&self, other: &DiffVector<D>) -> i64 {
        self.components.iter().zip(other.components.iter()).map(|(a, b)| a * b).sum()
    }

    /// Get the magnitude squared of the vector.
    pub fn norm_sq(&self) -> i64 {
        self.dot(self)
    }

    /// Check if every component is zero.
    pub fn is_zero(&self) -> bool {
        self.components.iter().all(|&c| c == 0)
    }

    /// Get the rejection of `self` from `other`, scaled by `other.norm_sq()`.
    /// `(o.o) s - (o.s) o` stays integral and is zero exactly when `self` is parallel to `other`.
    pub fn scaled_rejection(&self, other: &DiffVector<D>) -> DiffVector<D> {
        *self * other.norm_sq() - *other * other.dot(self)
    }

    /// Convert to a floating point vector.
    pub fn to_float(&self) -> FloatVector<D> {
        let mut components = [0.0; D];
        for (out, c) in components.iter_mut().zip(self.components.iter()) {
            *out = *c as f64;
        }
        FloatVector::new(components)
    }
}
impl<const D: usize> Sub for DiffVector<D> {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        let mut components = self.components;
        for (c, o) in components.iter_mut().zip(other.components.iter()) {
            *c -= o;
        }
        DiffVector{components}
    }
}
impl<const D: usize> Mul<i64> for DiffVector<D> {
    type Output = Self;

    fn mul(self, scale: i64) -> Self {
        DiffVector{components: self.components.map(|c| c * scale)}
    }
}
impl<const D: usize> Neg for DiffVector<D> {
    type Output = Self;

    fn neg(self) -> Self {
        DiffVector{components: self.components.map(|c| -c)}
    }
}
impl<const D: usize> fmt::Display for DiffVector<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})", self.components.iter().map(|c| c.to_string()).collect::<Vec<_>>().join(", "))
    }
}

/// A floating point vector, used by the tolerance-based check.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatVector<const D: usize> {
    components: [f64; D],
}
impl<const D: usize> FloatVector<D> {
    /// Create a new vector.
    pub fn new(components: [f64; D]) -> Self {
        FloatVector{components}
    }

    /// Get the dot product of two vectors.
    pub fn dot(&self, other: &FloatVector<D>) -> f64 {
        self.components.iter().zip(other.components.iter()).map(|(a, b)| a * b).sum()
    }

    /// Get the magnitude squared of the vector.
    pub fn norm_sq(&self) -> f64 {
        self.dot(self)
    }

    /// Get the vector projection of `self` onto `other`.
    /// `other` must be non-zero.
    pub fn proj_onto(&self, other: &FloatVector<D>) -> FloatVector<D> {
        *other * (self.dot(other) / other.norm_sq())
    }

    /// Get the vector rejection of `self` from `other`.
    pub fn rej_onto(&self, other: &FloatVector<D>) -> FloatVector<D> {
        *self - self.proj_onto(other)
    }

    /// Check if every component is within `tolerance` of zero.
    pub fn is_zero_within(&self, tolerance: f64) -> bool {
        self.components.iter().all(|c| c.abs() <= tolerance)
    }
}
impl<const D: usize> Sub for FloatVector<D> {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        let mut components = self.components;
        for (c, o) in components.iter_mut().zip(other.components.iter()) {
            *c -= o;
        }
        FloatVector{components}
    }
}
impl<const D: usize> Mul<f64> for FloatVector<D> {
    type Output = Self;

    fn mul(self, scale: f64) -> Self {
        FloatVector{components: self.components.map(|c| c * scale)}
    }
}
