// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Tensor Values** - *Shaped Operands with Declared Precision*
//!
//! Every distribution kernel consumes and produces [`Tensor`]s: an N-dimensional
//! shape plus a contiguous 64-byte aligned buffer whose element kind declares the
//! value's [`Precision`]. A tensor whose shape holds exactly one element is a
//! scalar and broadcasts against any other shape.
//!
//! Complex buffers are representable so that callers can forward whatever they
//! hold; every kernel rejects them with `KernelError::ComplexInput`.

use std::borrow::Cow;
use std::fmt;

use minarrow::Vec64;
use num_complex::Complex;
use num_traits::{Float, NumCast};

use crate::errors::KernelError;

/// Floating-point width of a tensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Precision {
    /// Standard precision, `f64`.
    Double,
    /// Reduced precision, `f32`.
    Single,
}

impl Precision {
    /// Result precision of a call over `inputs`.
    ///
    /// Reduced precision only when at least one input exists and no input is
    /// standard precision. An empty input list yields `Double`.
    pub fn promote<I>(inputs: I) -> Precision
    where
        I: IntoIterator<Item = Precision>,
    {
        inputs
            .into_iter()
            .fold(None, |acc, p| match (acc, p) {
                (Some(Precision::Double), _) | (_, Precision::Double) => Some(Precision::Double),
                _ => Some(Precision::Single),
            })
            .unwrap_or(Precision::Double)
    }

    /// Machine epsilon of this precision, widened to `f64`.
    #[inline]
    pub fn epsilon(self) -> f64 {
        match self {
            Precision::Double => f64::EPSILON,
            Precision::Single => f32::EPSILON as f64,
        }
    }

    /// Rounds an `f64` value to the nearest value representable at this precision.
    #[inline(always)]
    pub fn narrow(self, v: f64) -> f64 {
        match self {
            Precision::Double => v,
            Precision::Single => v as f32 as f64,
        }
    }
}

/// Ordered list of dimension sizes.
///
/// The empty list is the rank-0 scalar shape. Any shape with exactly one element
/// behaves as a scalar during broadcasting.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Shape {
    dims: Vec<usize>,
}

impl Shape {
    /// Rank-0 scalar shape.
    pub fn scalar() -> Self {
        Shape { dims: Vec::new() }
    }

    pub fn new<D: Into<Vec<usize>>>(dims: D) -> Self {
        Shape { dims: dims.into() }
    }

    /// `n x n` shape.
    pub fn square(n: usize) -> Self {
        Shape { dims: vec![n, n] }
    }

    pub fn dims(&self) -> &[usize] {
        &self.dims
    }

    pub fn rank(&self) -> usize {
        self.dims.len()
    }

    /// Total number of elements; `1` for the rank-0 shape.
    pub fn numel(&self) -> usize {
        self.dims.iter().product()
    }

    #[inline]
    pub fn is_scalar(&self) -> bool {
        self.numel() == 1
    }

    /// True for rank-1 shapes and `1 x n` matrices.
    pub fn is_row_vector(&self) -> bool {
        match self.dims.as_slice() {
            [_] => true,
            [1, _] => true,
            _ => false,
        }
    }
}

impl From<Vec<usize>> for Shape {
    fn from(dims: Vec<usize>) -> Self {
        Shape { dims }
    }
}

impl From<&[usize]> for Shape {
    fn from(dims: &[usize]) -> Self {
        Shape {
            dims: dims.to_vec(),
        }
    }
}

impl<const N: usize> From<[usize; N]> for Shape {
    fn from(dims: [usize; N]) -> Self {
        Shape {
            dims: dims.to_vec(),
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.dims.is_empty() {
            return write!(f, "scalar");
        }
        let parts: Vec<String> = self.dims.iter().map(|d| d.to_string()).collect();
        write!(f, "{}", parts.join("x"))
    }
}

/// Real element types a tensor can be built from.
pub trait Real: Float + NumCast + Copy + 'static {
    /// Precision carried by tensors of this element type.
    const PRECISION: Precision;

    #[doc(hidden)]
    fn wrap(data: Vec64<Self>) -> TensorData;
}

impl Real for f64 {
    const PRECISION: Precision = Precision::Double;

    fn wrap(data: Vec64<Self>) -> TensorData {
        TensorData::F64(data)
    }
}

impl Real for f32 {
    const PRECISION: Precision = Precision::Single;

    fn wrap(data: Vec64<Self>) -> TensorData {
        TensorData::F32(data)
    }
}

/// Element buffer of a tensor.
#[derive(Debug, Clone)]
pub enum TensorData {
    F64(Vec64<f64>),
    F32(Vec64<f32>),
    Complex(Vec64<Complex<f64>>),
}

impl PartialEq for TensorData {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (TensorData::F64(a), TensorData::F64(b)) => a.as_slice() == b.as_slice(),
            (TensorData::F32(a), TensorData::F32(b)) => a.as_slice() == b.as_slice(),
            (TensorData::Complex(a), TensorData::Complex(b)) => a.as_slice() == b.as_slice(),
            _ => false,
        }
    }
}

impl TensorData {
    fn len(&self) -> usize {
        match self {
            TensorData::F64(v) => v.len(),
            TensorData::F32(v) => v.len(),
            TensorData::Complex(v) => v.len(),
        }
    }
}

/// Shaped numeric value passed to and returned from every kernel.
#[derive(Debug, Clone, PartialEq)]
pub struct Tensor {
    shape: Shape,
    data: TensorData,
}

impl Tensor {
    /// Rank-0 scalar.
    pub fn scalar<T: Real>(value: T) -> Self {
        let mut data = Vec64::with_capacity(1);
        data.push(value);
        Tensor {
            shape: Shape::scalar(),
            data: T::wrap(data),
        }
    }

    /// Builds a tensor from a flat buffer; `data.len()` must equal the shape's element count.
    pub fn from_slice<T: Real>(shape: impl Into<Shape>, data: &[T]) -> Result<Self, KernelError> {
        let shape = shape.into();
        if shape.numel() != data.len() {
            return Err(KernelError::LengthMismatch(format!(
                "Tensor::from_slice => shape {} needs {} element(s), got {}",
                shape,
                shape.numel(),
                data.len()
            )));
        }
        Ok(Tensor {
            shape,
            data: T::wrap(Vec64::from_slice(data)),
        })
    }

    /// `1 x n` row vector.
    pub fn row<T: Real>(data: &[T]) -> Self {
        Tensor {
            shape: Shape::new(vec![1, data.len()]),
            data: T::wrap(Vec64::from_slice(data)),
        }
    }

    /// Complex-valued tensor. Kernels reject these with `KernelError::ComplexInput`.
    pub fn complex(shape: impl Into<Shape>, data: &[Complex<f64>]) -> Result<Self, KernelError> {
        let shape = shape.into();
        if shape.numel() != data.len() {
            return Err(KernelError::LengthMismatch(format!(
                "Tensor::complex => shape {} needs {} element(s), got {}",
                shape,
                shape.numel(),
                data.len()
            )));
        }
        Ok(Tensor {
            shape,
            data: TensorData::Complex(Vec64::from_slice(data)),
        })
    }

    /// Wraps kernel output computed in `f64`, narrowing to `f32` for `Single`.
    pub(crate) fn from_f64(shape: Shape, values: Vec64<f64>, precision: Precision) -> Self {
        debug_assert_eq!(shape.numel(), values.len());
        let data = match precision {
            Precision::Double => TensorData::F64(values),
            Precision::Single => {
                let mut narrowed = Vec64::with_capacity(values.len());
                for &v in values.iter() {
                    narrowed.push(v as f32);
                }
                TensorData::F32(narrowed)
            }
        };
        Tensor { shape, data }
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn dims(&self) -> &[usize] {
        self.shape.dims()
    }

    pub fn data(&self) -> &TensorData {
        &self.data
    }

    /// Declared precision. Complex buffers report `Double`.
    pub fn precision(&self) -> Precision {
        match self.data {
            TensorData::F32(_) => Precision::Single,
            TensorData::F64(_) | TensorData::Complex(_) => Precision::Double,
        }
    }

    pub fn is_complex(&self) -> bool {
        matches!(self.data, TensorData::Complex(_))
    }

    pub fn is_scalar(&self) -> bool {
        self.shape.is_scalar()
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.len() == 0
    }

    /// Element `i` widened to `f64`. Complex elements yield their real part.
    #[inline]
    pub fn get(&self, i: usize) -> f64 {
        match &self.data {
            TensorData::F64(v) => v[i],
            TensorData::F32(v) => v[i] as f64,
            TensorData::Complex(v) => v[i].re,
        }
    }

    /// Real view of the buffer widened to `f64`; `None` for complex buffers.
    pub(crate) fn real_values(&self) -> Option<Cow<'_, [f64]>> {
        match &self.data {
            TensorData::F64(v) => Some(Cow::Borrowed(v.as_slice())),
            TensorData::F32(v) => Some(Cow::Owned(v.iter().map(|&x| x as f64).collect())),
            TensorData::Complex(_) => None,
        }
    }

    /// Copies the elements out as `T`, going through `f64`.
    pub fn to_vec<T: Real>(&self) -> Vec<T> {
        (0..self.len())
            .map(|i| <T as NumCast>::from(self.get(i)).unwrap_or_else(T::nan))
            .collect()
    }

    /// Elements widened to `f64`.
    pub fn to_f64_vec(&self) -> Vec<f64> {
        (0..self.len()).map(|i| self.get(i)).collect()
    }
}

impl From<f64> for Tensor {
    fn from(v: f64) -> Self {
        Tensor::scalar(v)
    }
}

impl From<f32> for Tensor {
    fn from(v: f32) -> Self {
        Tensor::scalar(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn promote_is_reduced_only_without_standard_inputs() {
        use Precision::*;
        assert_eq!(Precision::promote([Single, Single]), Single);
        assert_eq!(Precision::promote([Single, Double, Single]), Double);
        assert_eq!(Precision::promote([Double]), Double);
        assert_eq!(Precision::promote(Vec::<Precision>::new()), Double);
    }

    #[test]
    fn shape_scalar_and_row_rules() {
        assert!(Shape::scalar().is_scalar());
        assert_eq!(Shape::scalar().numel(), 1);
        assert!(Shape::new([1, 1, 1]).is_scalar());
        assert!(Shape::new([1, 4]).is_row_vector());
        assert!(Shape::new([4]).is_row_vector());
        assert!(!Shape::new([4, 1]).is_row_vector());
        assert_eq!(Shape::new([2, 0, 3]).numel(), 0);
        assert_eq!(Shape::new([2, 3]).to_string(), "2x3");
    }

    #[test]
    fn from_slice_checks_length() {
        assert!(Tensor::from_slice([2, 2], &[1.0_f64, 2.0, 3.0]).is_err());
        let t = Tensor::from_slice([2, 2], &[1.0_f32, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(t.precision(), Precision::Single);
        assert_eq!(t.get(3), 4.0);
    }

    #[test]
    fn from_f64_narrows_single() {
        let mut v = Vec64::with_capacity(1);
        v.push(0.1_f64);
        let t = Tensor::from_f64(Shape::scalar(), v, Precision::Single);
        assert!(matches!(t.data(), TensorData::F32(_)));
        assert_eq!(t.get(0), 0.1_f32 as f64);
    }

    #[test]
    fn complex_reports_itself() {
        let t = Tensor::complex([1], &[Complex::new(1.0, 0.5)]).unwrap();
        assert!(t.is_complex());
        assert!(t.real_values().is_none());
    }
}
