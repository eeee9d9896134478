//! Exact rational values backed by `BigRational`.
//!
//! Every operation either produces the exact rational result or fails with an
//! [`ArithmeticError`]; nothing is ever approximated.

use crate::error::ArithmeticError;
use crate::operator::Operator;
use crate::value::Value;
use num_bigint::BigInt;
use num_integer::{Integer, Roots};
use num_rational::BigRational;
use num_traits::{One, Signed, ToPrimitive, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Maximum absolute numerator and maximum denominator of an exponent.
pub const MAX_ABS_POW: u32 = 1000;

/// Largest operand accepted by `!`.
pub const MAX_FACTORIAL: u32 = 1000;

/// Upper bound on the estimated bit size of `base ^ p` before it is computed.
pub const MAX_POW_BITS: u64 = 1 << 16;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rational(BigRational);

impl Rational {
    pub fn new(numer: i64, denom: i64) -> Result<Self, ArithmeticError> {
        if denom == 0 {
            return Err(ArithmeticError::DivisionByZero);
        }
        Ok(Rational(BigRational::new(numer.into(), denom.into())))
    }

    pub fn numer(&self) -> &BigInt {
        self.0.numer()
    }

    pub fn denom(&self) -> &BigInt {
        self.0.denom()
    }

    pub fn as_big_rational(&self) -> &BigRational {
        &self.0
    }

    fn sqrt(&self) -> Result<Self, ArithmeticError> {
        if self.is_negative() {
            return Err(ArithmeticError::NegativeRoot(self.to_string()));
        }
        exact_root(&self.0, 2)
            .map(Rational)
            .ok_or_else(|| ArithmeticError::IrrationalResult(format!("sqrt {}", self)))
    }

    fn factorial(&self) -> Result<Self, ArithmeticError> {
        if !self.is_integer() || self.is_negative() {
            return Err(ArithmeticError::InvalidFactorial(self.to_string()));
        }
        let n = self
            .numer()
            .to_u32()
            .filter(|n| *n <= MAX_FACTORIAL)
            .ok_or_else(|| ArithmeticError::OperandTooLarge(self.to_string()))?;

        let product = (2..=n).fold(BigInt::one(), |acc, k| acc * k);
        Ok(Rational(BigRational::from_integer(product)))
    }

    /// `self ^ (p/q)`, computed as the exact `q`-th root of `self ^ p`.
    fn pow(&self, exponent: &Self) -> Result<Self, ArithmeticError> {
        let too_large = || ArithmeticError::OperandTooLarge(exponent.to_string());
        let p = exponent.numer().to_i64().ok_or_else(too_large)?;
        let q = exponent.denom().to_u32().ok_or_else(too_large)?;
        if p.unsigned_abs() > u64::from(MAX_ABS_POW) || q > MAX_ABS_POW {
            return Err(too_large());
        }

        if self.is_zero() {
            return match p.cmp(&0) {
                Ordering::Greater => Ok(self.clone()),
                Ordering::Less => Err(ArithmeticError::DivisionByZero),
                Ordering::Equal => Err(ArithmeticError::Indeterminate(format!(
                    "{} ^ {}",
                    self, exponent
                ))),
            };
        }

        // Size of numerator plus denominator grows linearly with |p|
        let base_bits = self.numer().bits() + self.denom().bits();
        if base_bits.saturating_mul(p.unsigned_abs()) > MAX_POW_BITS {
            return Err(ArithmeticError::OperandTooLarge(format!(
                "{} ^ {}",
                self, exponent
            )));
        }

        // |p| <= MAX_ABS_POW, so the cast is lossless
        let mut result = pow_exact(&self.0, p.unsigned_abs() as u32);
        if p < 0 {
            result = result.recip();
        }
        if q > 1 {
            if result.is_negative() && q.is_even() {
                return Err(ArithmeticError::NegativeRoot(result.to_string()));
            }
            result = exact_root(&result, q).ok_or_else(|| {
                ArithmeticError::IrrationalResult(format!("{} ^ {}", self, exponent))
            })?;
        }
        Ok(Rational(result))
    }
}

/// Square-and-multiply power with a non-negative integer exponent.
fn pow_exact(base: &BigRational, exp: u32) -> BigRational {
    let mut result = BigRational::one();
    let mut b = base.clone();
    let mut e = exp;

    while e > 0 {
        if (e & 1) == 1 {
            result *= &b;
        }
        e >>= 1;
        if e > 0 {
            b = &b * &b;
        }
    }
    result
}

/// Exact `n`-th root of a rational, if there is one.
/// Negative radicands are only meaningful for odd `n`; callers check that.
fn exact_root(q: &BigRational, n: u32) -> Option<BigRational> {
    let numer = exact_int_root(q.numer(), n)?;
    let denom = exact_int_root(q.denom(), n)?;
    Some(BigRational::new(numer, denom))
}

fn exact_int_root(x: &BigInt, n: u32) -> Option<BigInt> {
    let magnitude = x.abs();
    let root = magnitude.nth_root(n);
    if num_traits::pow(root.clone(), n as usize) != magnitude {
        return None;
    }
    Some(if x.is_negative() { -root } else { root })
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

impl Value for Rational {
    fn from_literal(text: &str) -> Result<Self, ArithmeticError> {
        let invalid = || ArithmeticError::InvalidLiteral(text.to_string());

        let (numer, denom) = match text.split_once('/') {
            Some((n, d)) => (n, Some(d)),
            None => (text, None),
        };
        let digits = numer.strip_prefix('-').unwrap_or(numer);
        if !is_digits(digits) || denom.is_some_and(|d| !is_digits(d)) {
            return Err(invalid());
        }

        let numer: BigInt = numer.parse().map_err(|_| invalid())?;
        let denom: BigInt = match denom {
            Some(d) => d.parse().map_err(|_| invalid())?,
            None => BigInt::one(),
        };
        if denom.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }
        Ok(Rational(BigRational::new(numer, denom)))
    }

    fn from_integer(n: i64) -> Self {
        Rational(BigRational::from_integer(n.into()))
    }

    fn apply_unary(&self, op: Operator) -> Result<Self, ArithmeticError> {
        match op {
            Operator::Neg => Ok(Rational(-self.0.clone())),
            Operator::Sqrt => self.sqrt(),
            Operator::Factorial => self.factorial(),
            _ => Err(ArithmeticError::ArityMismatch(op)),
        }
    }

    fn apply_binary(&self, op: Operator, rhs: &Self) -> Result<Self, ArithmeticError> {
        match op {
            Operator::Add => Ok(Rational(&self.0 + &rhs.0)),
            Operator::Sub => Ok(Rational(&self.0 - &rhs.0)),
            Operator::Mul => Ok(Rational(&self.0 * &rhs.0)),
            Operator::Div => {
                if rhs.is_zero() {
                    return Err(ArithmeticError::DivisionByZero);
                }
                Ok(Rational(&self.0 / &rhs.0))
            }
            Operator::Pow => self.pow(rhs),
            _ => Err(ArithmeticError::ArityMismatch(op)),
        }
    }

    fn is_integer(&self) -> bool {
        self.0.is_integer()
    }

    fn is_negative(&self) -> bool {
        self.0.is_negative()
    }

    fn is_even(&self) -> bool {
        self.is_integer() && self.numer().is_even()
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    fn is_one(&self) -> bool {
        self.0.is_one()
    }

    fn is_minus_one(&self) -> bool {
        self.0 == -BigRational::one()
    }
}

impl FromStr for Rational {
    type Err = ArithmeticError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rational::from_literal(s)
    }
}

impl From<i64> for Rational {
    fn from(n: i64) -> Self {
        Rational::from_integer(n)
    }
}

impl From<BigRational> for Rational {
    fn from(q: BigRational) -> Self {
        Rational(q)
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
