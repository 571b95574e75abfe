// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Error Types** - *Distribution Kernel Error Handling*
//!
//! Error types for distribution kernel calls with structured error reporting.
//!
//! ## Error Categories
//! - **Argument Errors**: Wrong number of call arguments
//! - **Shape Errors**: Non-scalar operands that cannot be unified, or that conflict
//!   with an explicit size request
//! - **Dimension Errors**: Malformed size specifications for random generators
//! - **Type Errors**: Complex-valued operands
//!
//! All of the above abort a call before any numeric evaluation, so no partial
//! output is ever produced. Numeric domain violations (non-positive scale,
//! out-of-support variates) are *not* errors; they are encoded as `NaN`, `±inf`
//! or `0` in the output.
//!
//! Quantile kernels that fail to reach their residual tolerance attach a
//! [`ConvergenceWarning`] to an otherwise successful result instead.

use core::fmt;
use std::error::Error;

/// Error type for all distribution kernel calls.
///
/// Each variant includes a contextual message string providing specific details
/// about the error condition.
#[derive(Debug, Clone, PartialEq)]
pub enum KernelError {
    /// Wrong number of arguments for the requested function.
    ArgumentCount(String),

    /// Non-scalar operands whose shapes differ, or whose shape differs from the
    /// requested output size.
    ShapeMismatch(String),

    /// Size specification containing negative, non-integer, non-finite or
    /// non-row-vector values.
    InvalidDimensions(String),

    /// An operand holds complex values.
    ComplexInput(String),

    /// Buffer length does not match the declared shape.
    LengthMismatch(String),

    /// Invalid arguments provided to a constructor or kernel function.
    InvalidArguments(String),
}

impl fmt::Display for KernelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KernelError::ArgumentCount(msg) => write!(f, "Invalid call: {}", msg),
            KernelError::ShapeMismatch(msg) => write!(f, "Shape mismatch: {}", msg),
            KernelError::InvalidDimensions(msg) => write!(f, "Invalid dimensions: {}", msg),
            KernelError::ComplexInput(msg) => write!(f, "Complex input: {}", msg),
            KernelError::LengthMismatch(msg) => write!(f, "Length mismatch: {}", msg),
            KernelError::InvalidArguments(msg) => write!(f, "Invalid arguments: {}", msg),
        }
    }
}

impl Error for KernelError {}

/// Non-fatal report attached to a quantile result whose root-finding residual
/// exceeded tolerance for at least one element.
///
/// The warning is global to the call. All elements, including the offending
/// ones, still carry their best estimate.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvergenceWarning {
    /// Function that produced the result, e.g. `"gamma_inv"`.
    pub function: &'static str,
    /// Number of elements whose relative residual exceeded `tolerance`.
    pub unconverged: usize,
    /// Largest relative residual `|F(x) - p| / p` observed.
    pub max_residual: f64,
    /// Tolerance in force for the call.
    pub tolerance: f64,
}

impl fmt::Display for ConvergenceWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: calculation failed to converge for {} element(s) (max relative residual {:e}, tolerance {:e})",
            self.function, self.unconverged, self.max_residual, self.tolerance
        )
    }
}

/// Creates a formatted error message for a shape conflict between two operands.
///
/// # Arguments
/// * `fname` - Function name where the mismatch occurred
/// * `lhs` - Dimensions of the reference operand (or requested size)
/// * `rhs` - Dimensions of the conflicting operand
pub fn log_shape_mismatch(fname: &str, lhs: &[usize], rhs: &[usize]) -> String {
    format!("{} => non-scalar arguments must match in size: {:?} vs {:?}", fname, lhs, rhs)
}

/// Creates a formatted error message for a call with the wrong number of arguments.
pub fn log_arity(fname: &str, expected: &str, got: usize) -> String {
    format!("{} => expected {} argument(s), got {}", fname, expected, got)
}
