// crates/lineage-core/src/coerce.rs
//
// Integer coercion for the port fields of a provenance record.
//
// Ports arrive from wherever the surrounding daemon found them: typed
// integers, strings lifted out of a config file, or raw JSON values from a
// request. All of them funnel through `CoerceInt` before they land in a
// `ProvenanceRecord`.

use serde_json::Value;

use crate::error::LineageError;

/// A value that can be interpreted as an `i64` port/identifier.
pub trait CoerceInt {
    /// Interpret `self` as an integer. `field` names the record field being
    /// built and is carried into the error on failure.
    fn coerce_int(&self, field: &'static str) -> Result<i64, LineageError>;
}

macro_rules! impl_coerce_for_ints {
    ($($ty:ty),* $(,)?) => {
        $(
            impl CoerceInt for $ty {
                fn coerce_int(&self, field: &'static str) -> Result<i64, LineageError> {
                    i64::try_from(*self).map_err(|_| LineageError::coercion(field, self))
                }
            }
        )*
    };
}

impl_coerce_for_ints!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl CoerceInt for bool {
    fn coerce_int(&self, _field: &'static str) -> Result<i64, LineageError> {
        Ok(i64::from(*self))
    }
}

impl CoerceInt for str {
    fn coerce_int(&self, field: &'static str) -> Result<i64, LineageError> {
        self.trim()
            .parse::<i64>()
            .map_err(|_| LineageError::coercion(field, format!("{:?}", self)))
    }
}

impl CoerceInt for String {
    fn coerce_int(&self, field: &'static str) -> Result<i64, LineageError> {
        self.as_str().coerce_int(field)
    }
}

impl CoerceInt for f64 {
    /// Finite floats truncate toward zero.
    fn coerce_int(&self, field: &'static str) -> Result<i64, LineageError> {
        // i64::MAX as f64 rounds up to 2^63, hence the strict upper bound.
        if self.is_finite() && *self >= i64::MIN as f64 && *self < i64::MAX as f64 {
            Ok(self.trunc() as i64)
        } else {
            Err(LineageError::coercion(field, self))
        }
    }
}

impl CoerceInt for Value {
    fn coerce_int(&self, field: &'static str) -> Result<i64, LineageError> {
        match self {
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Ok(i)
                } else if let Some(u) = n.as_u64() {
                    u.coerce_int(field)
                } else {
                    n.as_f64()
                        .ok_or_else(|| LineageError::coercion(field, n))?
                        .coerce_int(field)
                }
            }
            Value::Bool(b) => b.coerce_int(field),
            Value::String(s) => s.coerce_int(field),
            other => Err(LineageError::coercion(field, other)),
        }
    }
}

impl<T: CoerceInt + ?Sized> CoerceInt for &T {
    fn coerce_int(&self, field: &'static str) -> Result<i64, LineageError> {
        (**self).coerce_int(field)
    }
}
