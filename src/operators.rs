// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! Contains the distribution and operation enums used for matching and routing
//! calls through the kernel registry.

use core::fmt;
use std::str::FromStr;

use crate::errors::KernelError;

/// Distributions in the kernel catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Distribution {
    /// Beta(a, b) on [0, 1].
    Beta,
    /// Gamma(shape, scale) on [0, ∞).
    Gamma,
    /// Nakagami(m, w) on [0, ∞).
    Nakagami,
    /// Birnbaum–Saunders(location, scale, shape) on (location, ∞).
    BirnbaumSaunders,
    /// Standard normal N(0, 1).
    StdNormal,
}

/// Operations every distribution exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Probability density function.
    Pdf,
    /// Cumulative distribution function.
    Cdf,
    /// Inverse CDF (quantile function).
    Inv,
    /// Random variate generator.
    Rnd,
}

impl Distribution {
    pub const ALL: [Distribution; 5] = [
        Distribution::Beta,
        Distribution::Gamma,
        Distribution::Nakagami,
        Distribution::BirnbaumSaunders,
        Distribution::StdNormal,
    ];

    /// Number of distribution parameters, excluding the variate.
    pub fn param_count(self) -> usize {
        match self {
            Distribution::Beta => 2,
            Distribution::Gamma => 2,
            Distribution::Nakagami => 2,
            Distribution::BirnbaumSaunders => 3,
            Distribution::StdNormal => 0,
        }
    }

    /// Conventional short prefix, e.g. `gam` in `gaminv`.
    pub fn prefix(self) -> &'static str {
        match self {
            Distribution::Beta => "beta",
            Distribution::Gamma => "gam",
            Distribution::Nakagami => "naka",
            Distribution::BirnbaumSaunders => "bbs",
            Distribution::StdNormal => "stdnormal_",
        }
    }
}

impl Operation {
    pub const ALL: [Operation; 4] = [
        Operation::Pdf,
        Operation::Cdf,
        Operation::Inv,
        Operation::Rnd,
    ];

    pub fn suffix(self) -> &'static str {
        match self {
            Operation::Pdf => "pdf",
            Operation::Cdf => "cdf",
            Operation::Inv => "inv",
            Operation::Rnd => "rnd",
        }
    }
}

/// A routable function: one operation of one distribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DistFn {
    pub distribution: Distribution,
    pub operation: Operation,
}

impl DistFn {
    pub fn new(distribution: Distribution, operation: Operation) -> Self {
        DistFn {
            distribution,
            operation,
        }
    }

    /// Minimum number of call arguments.
    ///
    /// Density, CDF and quantile calls take the variate plus every parameter.
    /// Generators take the parameters, then any number of size arguments.
    pub fn min_args(self) -> usize {
        match self.operation {
            Operation::Rnd => self.distribution.param_count(),
            _ => self.distribution.param_count() + 1,
        }
    }

    /// Maximum number of call arguments; `None` when unbounded.
    pub fn max_args(self) -> Option<usize> {
        match self.operation {
            Operation::Rnd => None,
            _ => Some(self.distribution.param_count() + 1),
        }
    }
}

impl fmt::Display for DistFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.distribution.prefix(), self.operation.suffix())
    }
}

impl FromStr for DistFn {
    type Err = KernelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        for d in Distribution::ALL {
            let Some(rest) = s.strip_prefix(d.prefix()) else {
                continue;
            };
            for op in Operation::ALL {
                if rest == op.suffix() {
                    return Ok(DistFn::new(d, op));
                }
            }
        }
        Err(KernelError::InvalidArguments(format!(
            "unknown distribution function '{}'",
            s
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for d in Distribution::ALL {
            for op in Operation::ALL {
                let f = DistFn::new(d, op);
                let parsed: DistFn = f.to_string().parse().unwrap();
                assert_eq!(parsed, f);
            }
        }
        assert_eq!(
            "gaminv".parse::<DistFn>().unwrap(),
            DistFn::new(Distribution::Gamma, Operation::Inv)
        );
        assert_eq!(
            "stdnormal_rnd".parse::<DistFn>().unwrap(),
            DistFn::new(Distribution::StdNormal, Operation::Rnd)
        );
        assert!("normpdf".parse::<DistFn>().is_err());
    }

    #[test]
    fn arity_table() {
        let bbs = DistFn::new(Distribution::BirnbaumSaunders, Operation::Pdf);
        assert_eq!(bbs.min_args(), 4);
        assert_eq!(bbs.max_args(), Some(4));
        let rnd = DistFn::new(Distribution::StdNormal, Operation::Rnd);
        assert_eq!(rnd.min_args(), 0);
        assert_eq!(rnd.max_args(), None);
    }
}
