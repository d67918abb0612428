//! Hash functions mapping a key to its primary slot.
//!
//! This module provides the three hash methods a table can be configured
//! with, both as free functions and behind the [`HashFunction`] trait:
//!
//! - [`division_method`] - `k mod m`
//! - [`multiplication_method`] - `floor(m * frac(k * A))`
//! - [`polynomial_method`] - `sum(s[i] * 31^i) mod m`
//!
//! String keys are turned into integers for the first two methods with a
//! rolling hash ([`string_to_integer`]) evaluated in wrapping 32-bit signed
//! arithmetic. Character codes are UTF-16 code units.
//!
//! # Example
//!
//! ```
//! use hashviz_core::{HashMethod, Key};
//! use hashviz_hash_table::hash_functions::compute_index;
//!
//! assert_eq!(compute_index(&Key::Int(10), HashMethod::Division, 7).unwrap(), 3);
//! assert_eq!(compute_index(&Key::from("abc"), HashMethod::Polynomial, 7).unwrap(), 1);
//! ```

use std::borrow::Cow;

use hashviz_core::{HashMethod, Key};

use crate::error::{HashTableError, Result};

/// Fractional part of the golden ratio, the multiplier of the
/// multiplication method.
pub const GOLDEN_RATIO_FRACTION: f64 = 0.6180339887;

/// Base of the rolling and polynomial string hashes.
pub const STRING_HASH_BASE: u32 = 31;

/// Converts a string to an integer with `acc = acc * 31 + code`.
///
/// The accumulator is a 32-bit signed integer that wraps on overflow, so
/// long strings may hash to negative values.
///
/// ```
/// use hashviz_hash_table::hash_functions::string_to_integer;
///
/// assert_eq!(string_to_integer("ab"), 97 * 31 + 98);
/// assert!(string_to_integer("Charlie") < 0);
/// ```
pub fn string_to_integer(text: &str) -> i32 {
    text.encode_utf16().fold(0i32, |acc, unit| {
        acc.wrapping_mul(STRING_HASH_BASE as i32)
            .wrapping_add(i32::from(unit))
    })
}

fn numeric_value(key: &Key) -> i64 {
    match key {
        Key::Int(value) => i64::from(*value),
        Key::Str(text) => i64::from(string_to_integer(text)),
    }
}

fn check_capacity(capacity: usize) -> Result<()> {
    if capacity == 0 {
        return Err(HashTableError::InvalidCapacity { capacity });
    }
    Ok(())
}

/// Division method: `k mod m`.
///
/// Uses Rust's truncating remainder, so a negative numeric value yields a
/// negative (or zero) result. The result is returned as-is; callers that
/// index with it must check the range.
///
/// # Errors
///
/// Returns [`HashTableError::InvalidCapacity`] if `capacity` is zero.
pub fn division_method(key: &Key, capacity: usize) -> Result<i64> {
    check_capacity(capacity)?;
    Ok(numeric_value(key) % capacity as i64)
}

/// Multiplication method: `floor(m * frac(k * A))` with
/// `frac(x) = x - floor(x)`.
///
/// The result always lies in `[0, capacity)`, including for negative keys.
///
/// # Errors
///
/// Returns [`HashTableError::InvalidCapacity`] if `capacity` is zero.
pub fn multiplication_method(key: &Key, capacity: usize) -> Result<usize> {
    check_capacity(capacity)?;
    let product = numeric_value(key) as f64 * GOLDEN_RATIO_FRACTION;
    let fraction = product - product.floor();
    let index = (capacity as f64 * fraction).floor() as usize;
    // fraction < 1, but guard against rounding up to `capacity`
    Ok(index.min(capacity - 1))
}

/// Polynomial method: `sum(code(s[i]) * 31^i) mod m`.
///
/// The first character has weight `31^0`. Every term is reduced modulo
/// `capacity` as it is added, so the result is the exact residue of the
/// full integer sum for strings of any length.
///
/// # Errors
///
/// Returns [`HashTableError::InvalidCapacity`] if `capacity` is zero.
pub fn polynomial_method(text: &str, capacity: usize) -> Result<usize> {
    check_capacity(capacity)?;
    let modulus = capacity as u128;
    let base = u128::from(STRING_HASH_BASE) % modulus;

    let mut sum = 0u128;
    let mut weight = 1 % modulus;
    for unit in text.encode_utf16() {
        sum = (sum + u128::from(unit) % modulus * weight) % modulus;
        weight = weight * base % modulus;
    }
    Ok(sum as usize)
}

/// Returns the text the polynomial method hashes for a key.
///
/// Numeric keys are stringified in decimal.
pub fn polynomial_text(key: &Key) -> Cow<'_, str> {
    match key {
        Key::Int(value) => Cow::Owned(value.to_string()),
        Key::Str(text) => Cow::Borrowed(text.as_str()),
    }
}

/// Computes the primary index of a key with the given method.
///
/// # Errors
///
/// Returns [`HashTableError::InvalidCapacity`] if `capacity` is zero.
pub fn compute_index(key: &Key, method: HashMethod, capacity: usize) -> Result<i64> {
    match method {
        HashMethod::Division => division_method(key, capacity),
        HashMethod::Multiplication => multiplication_method(key, capacity).map(|i| i as i64),
        HashMethod::Polynomial => {
            polynomial_method(&polynomial_text(key), capacity).map(|i| i as i64)
        }
    }
}

/// A hash function selectable by [`HashMethod`].
///
/// # Example
///
/// ```
/// use hashviz_core::{HashMethod, Key};
/// use hashviz_hash_table::hash_functions::{HashFunction, HashFunctionFactory};
///
/// let hasher = HashFunctionFactory::create(HashMethod::Multiplication);
/// let index = hasher.hash(&Key::Int(1023), 10).unwrap();
/// assert!((0..10).contains(&index));
/// ```
pub trait HashFunction: Send + Sync {
    /// Maps a key to a primary index for a table of `capacity` slots.
    fn hash(&self, key: &Key, capacity: usize) -> Result<i64>;

    /// Returns the method this function implements.
    fn method(&self) -> HashMethod;

    /// Returns the name of this hash function.
    fn name(&self) -> &str {
        self.method().name()
    }
}

/// The division method.
#[derive(Debug, Clone, Copy, Default)]
pub struct DivisionHash;

impl HashFunction for DivisionHash {
    fn hash(&self, key: &Key, capacity: usize) -> Result<i64> {
        division_method(key, capacity)
    }

    fn method(&self) -> HashMethod {
        HashMethod::Division
    }
}

/// The multiplication method.
#[derive(Debug, Clone, Copy, Default)]
pub struct MultiplicationHash;

impl HashFunction for MultiplicationHash {
    fn hash(&self, key: &Key, capacity: usize) -> Result<i64> {
        multiplication_method(key, capacity).map(|i| i as i64)
    }

    fn method(&self) -> HashMethod {
        HashMethod::Multiplication
    }
}

/// The polynomial string method. Numeric keys are stringified first.
#[derive(Debug, Clone, Copy, Default)]
pub struct PolynomialHash;

impl HashFunction for PolynomialHash {
    fn hash(&self, key: &Key, capacity: usize) -> Result<i64> {
        polynomial_method(&polynomial_text(key), capacity).map(|i| i as i64)
    }

    fn method(&self) -> HashMethod {
        HashMethod::Polynomial
    }
}

/// Factory for creating hash functions from a [`HashMethod`].
pub struct HashFunctionFactory;

impl HashFunctionFactory {
    /// Creates the hash function for the given method.
    pub fn create(method: HashMethod) -> Box<dyn HashFunction> {
        match method {
            HashMethod::Division => Box::new(DivisionHash),
            HashMethod::Multiplication => Box::new(MultiplicationHash),
            HashMethod::Polynomial => Box::new(PolynomialHash),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_to_integer() {
        assert_eq!(string_to_integer(""), 0);
        assert_eq!(string_to_integer("a"), 97);
        assert_eq!(string_to_integer("abc"), 96354);
        assert_eq!(string_to_integer("Romeo"), 79143514);
    }

    #[test]
    fn test_string_to_integer_wraps() {
        // 31-based rolling hash overflows i32 on the 7th character here
        assert_eq!(string_to_integer("Charlie"), -1891246254);
    }

    #[test]
    fn test_division_numeric() {
        for capacity in 1..=20usize {
            for k in [0, 1, 7, 14, 100, 1023] {
                assert_eq!(
                    division_method(&Key::Int(k), capacity).unwrap(),
                    i64::from(k) % capacity as i64
                );
            }
        }
    }

    #[test]
    fn test_division_negative_key_is_not_normalized() {
        assert_eq!(division_method(&Key::Int(-5), 3).unwrap(), -2);
        assert_eq!(division_method(&Key::Int(-5), 7).unwrap(), -5);
        assert_eq!(division_method(&Key::Int(-7), 7).unwrap(), 0);
    }

    #[test]
    fn test_division_string() {
        assert_eq!(division_method(&Key::from("abc"), 7).unwrap(), 6);
        assert_eq!(division_method(&Key::from("Romeo"), 7).unwrap(), 2);
        assert_eq!(division_method(&Key::from("Charlie"), 7).unwrap(), -2);
    }

    #[test]
    fn test_multiplication_values() {
        assert_eq!(multiplication_method(&Key::Int(0), 7).unwrap(), 0);
        assert_eq!(multiplication_method(&Key::Int(1), 7).unwrap(), 4);
        assert_eq!(multiplication_method(&Key::Int(10), 7).unwrap(), 1);
        assert_eq!(multiplication_method(&Key::Int(24), 10).unwrap(), 8);
        assert_eq!(multiplication_method(&Key::from("Charlie"), 7).unwrap(), 0);
    }

    #[test]
    fn test_multiplication_range() {
        let keys = [i32::MIN, -1_000_000, -5, -1, 0, 1, 2, 1023, 123_456_789, i32::MAX];
        for capacity in 1..=64usize {
            for &k in &keys {
                let index = multiplication_method(&Key::Int(k), capacity).unwrap();
                assert!(index < capacity, "k={} m={} -> {}", k, capacity, index);
            }
        }
        assert_eq!(multiplication_method(&Key::Int(-5), 7).unwrap(), 6);
    }

    #[test]
    fn test_polynomial_weighting() {
        assert_eq!(polynomial_method("a", 7).unwrap(), 6);
        assert_eq!(polynomial_method("ab", 7).unwrap(), 6);
        assert_eq!(polynomial_method("abc", 7).unwrap(), 1);
        assert_eq!(polynomial_method("abc", 10).unwrap(), 4);
    }

    #[test]
    fn test_polynomial_long_strings_are_exact() {
        assert_eq!(polynomial_method("The quick brown fox jumps over", 7).unwrap(), 0);
        assert_eq!(polynomial_method(&"x".repeat(50), 13).unwrap(), 5);
        assert_eq!(polynomial_method(&"z".repeat(50), 20).unwrap(), 0);
    }

    #[test]
    fn test_polynomial_numeric_key_is_stringified() {
        assert_eq!(polynomial_text(&Key::Int(10)), "10");
        assert_eq!(compute_index(&Key::Int(10), HashMethod::Polynomial, 7).unwrap(), 4);
    }

    #[test]
    fn test_zero_capacity_rejected() {
        assert!(matches!(
            division_method(&Key::Int(1), 0),
            Err(HashTableError::InvalidCapacity { capacity: 0 })
        ));
        assert!(multiplication_method(&Key::Int(1), 0).is_err());
        assert!(polynomial_method("a", 0).is_err());
    }

    #[test]
    fn test_deterministic() {
        for method in HashMethod::ALL {
            let first = compute_index(&Key::from("Delta"), method, 13).unwrap();
            let second = compute_index(&Key::from("Delta"), method, 13).unwrap();
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_factory_matches_free_functions() {
        let keys = [Key::Int(17), Key::from("November")];
        for method in HashMethod::ALL {
            let hasher = HashFunctionFactory::create(method);
            assert_eq!(hasher.method(), method);
            assert_eq!(hasher.name(), method.name());
            for key in &keys {
                assert_eq!(
                    hasher.hash(key, 7).unwrap(),
                    compute_index(key, method, 7).unwrap()
                );
            }
        }
    }
}
