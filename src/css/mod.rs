//! CSS text generation.
//!
//! Rule accumulation and serialization, plus the length helpers used to turn
//! CSS values into pixels.

pub mod rules;
pub mod units;

pub use rules::{Declarations, RuleAccumulator, RuleKey};
