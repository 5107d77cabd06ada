//! Category values: the discrete attribute being measured
//!
//! A category is whatever a councilor record contributes to a diversity
//! measurement: a gender code, a party name, an age in years. Text and numbers
//! share one key type so a single frequency table can count either.

use crate::{Error, Result};
use ordered_float::OrderedFloat;
use serde::{Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;

/// An opaque, hashable category key
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CategoryValue {
    /// Whole-number value such as an age in years
    Integer(i64),
    /// Real-valued measurement
    Float(OrderedFloat<f64>),
    /// Textual value such as a party name or gender code
    Text(String),
}

impl CategoryValue {
    /// Whether the value supports division and flooring
    pub fn is_numeric(&self) -> bool {
        !matches!(self, Self::Text(_))
    }

    /// Numeric view of the value, `None` for text
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Integer(v) => Some(*v as f64),
            Self::Float(v) => Some(v.into_inner()),
            Self::Text(_) => None,
        }
    }

    /// Integer view of the value, `None` for text and non-integral floats
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(v) => Some(*v),
            Self::Float(v) if v.fract() == 0.0 && v.is_finite() => Some(v.into_inner() as i64),
            _ => None,
        }
    }

    /// Textual view of the value, `None` for numbers
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Map a numeric value onto the lower bound of its stair interval
    ///
    /// The interval is `[floor(v / stair) * stair, .. + stair)`. Integers stay
    /// integers and floor toward negative infinity. Returns `Ok(None)` for
    /// text.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidParameter`] when the lower bound of an integer's stair
    /// falls below `i64::MIN`.
    pub fn staircase(&self, stair: i64) -> Result<Option<Self>> {
        debug_assert!(stair > 0);
        match self {
            Self::Integer(v) => v
                .div_euclid(stair)
                .checked_mul(stair)
                .map(|label| Some(Self::Integer(label)))
                .ok_or_else(|| {
                    Error::InvalidParameter(format!(
                        "stair of width {stair} containing {v} is out of range"
                    ))
                }),
            Self::Float(v) => {
                let width = stair as f64;
                Ok(Some(Self::Float(OrderedFloat((v.into_inner() / width).floor() * width))))
            }
            Self::Text(_) => Ok(None),
        }
    }
}

/// Exact ordering of an integer against a float, NaN sorting last
fn cmp_integer_float(a: i64, b: f64) -> Ordering {
    // 2^63, the first float above every i64
    const UPPER: f64 = 9_223_372_036_854_775_808.0;
    if b.is_nan() || b >= UPPER {
        return Ordering::Less;
    }
    if b < -UPPER {
        return Ordering::Greater;
    }
    // b is now in [-2^63, 2^63), so its integral part fits an i64 exactly
    let whole = b.trunc();
    a.cmp(&(whole as i64))
        .then_with(|| 0.0_f64.partial_cmp(&(b - whole)).unwrap_or(Ordering::Equal))
}

impl PartialOrd for CategoryValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// Numbers compare by exact value and sort before text; an integer sorts
// before an equal float so the order stays total.
impl Ord for CategoryValue {
    fn cmp(&self, other: &Self) -> Ordering {
        use CategoryValue::*;
        match (self, other) {
            (Integer(a), Integer(b)) => a.cmp(b),
            (Float(a), Float(b)) => a.cmp(b),
            (Integer(a), Float(b)) => cmp_integer_float(*a, b.into_inner()).then(Ordering::Less),
            (Float(a), Integer(b)) => cmp_integer_float(*b, a.into_inner())
                .reverse()
                .then(Ordering::Greater),
            (Text(a), Text(b)) => a.cmp(b),
            (Text(_), _) => Ordering::Greater,
            (_, Text(_)) => Ordering::Less,
        }
    }
}

impl fmt::Display for CategoryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl Serialize for CategoryValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Self::Integer(v) => serializer.serialize_i64(*v),
            Self::Float(v) => serializer.serialize_f64(v.into_inner()),
            Self::Text(s) => serializer.serialize_str(s),
        }
    }
}

/// Anything that can be measured as a category
pub trait Categorical {
    /// Convert to the category key used for counting
    fn to_category(&self) -> CategoryValue;
}

impl Categorical for CategoryValue {
    fn to_category(&self) -> CategoryValue {
        self.clone()
    }
}

impl Categorical for str {
    fn to_category(&self) -> CategoryValue {
        CategoryValue::Text(self.to_owned())
    }
}

impl Categorical for String {
    fn to_category(&self) -> CategoryValue {
        CategoryValue::Text(self.clone())
    }
}

impl<T: Categorical + ?Sized> Categorical for &T {
    fn to_category(&self) -> CategoryValue {
        (**self).to_category()
    }
}

macro_rules! impl_categorical_int {
    ($($t:ty),*) => {
        $(
            impl Categorical for $t {
                fn to_category(&self) -> CategoryValue {
                    CategoryValue::Integer(i64::from(*self))
                }
            }

            impl From<$t> for CategoryValue {
                fn from(v: $t) -> Self {
                    CategoryValue::Integer(i64::from(v))
                }
            }
        )*
    };
}

impl_categorical_int!(i8, i16, i32, i64, u8, u16, u32);

// Wide unsigned values fall back to a float key past i64::MAX.
macro_rules! impl_categorical_wide {
    ($($t:ty),*) => {
        $(
            impl Categorical for $t {
                fn to_category(&self) -> CategoryValue {
                    i64::try_from(*self)
                        .map(CategoryValue::Integer)
                        .unwrap_or_else(|_| CategoryValue::Float(OrderedFloat(*self as f64)))
                }
            }

            impl From<$t> for CategoryValue {
                fn from(v: $t) -> Self {
                    v.to_category()
                }
            }
        )*
    };
}

impl_categorical_wide!(u64, usize, isize);

impl Categorical for f64 {
    fn to_category(&self) -> CategoryValue {
        CategoryValue::Float(OrderedFloat(*self))
    }
}

impl Categorical for f32 {
    fn to_category(&self) -> CategoryValue {
        CategoryValue::Float(OrderedFloat(f64::from(*self)))
    }
}

impl From<f64> for CategoryValue {
    fn from(v: f64) -> Self {
        CategoryValue::Float(OrderedFloat(v))
    }
}

impl From<&str> for CategoryValue {
    fn from(s: &str) -> Self {
        CategoryValue::Text(s.to_owned())
    }
}

impl From<String> for CategoryValue {
    fn from(s: String) -> Self {
        CategoryValue::Text(s)
    }
}
