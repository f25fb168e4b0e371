use alloc::string::String;

use crate::property::{FromValue, Property, PropertyMut, PropertyRef};
use crate::{PropertyError, Value};

macro_rules! impl_opaque {
    ($ty:ty) => {
        impl Property for $ty {
            #[inline]
            fn property_ref(&self) -> PropertyRef<'_> {
                PropertyRef::Opaque(self)
            }

            #[inline]
            fn property_mut(&mut self) -> PropertyMut<'_> {
                PropertyMut::Opaque(self)
            }

            #[inline]
            fn to_value(&self) -> Value {
                Value::from(self.clone())
            }

            #[inline]
            fn assign(&mut self, value: Value) -> Result<(), PropertyError> {
                *self = <$ty as FromValue>::from_value(value)?;
                Ok(())
            }
        }
    };
}

macro_rules! impl_int {
    ($($ty:ty),*) => {
        $(
            impl_opaque!($ty);

            impl FromValue for $ty {
                fn from_value(value: Value) -> Result<Self, PropertyError> {
                    match value {
                        Value::Int(i) => <$ty>::try_from(i)
                            .map_err(|_| PropertyError::mismatch::<$ty>(Value::Int(i))),
                        other => Err(PropertyError::mismatch::<$ty>(other)),
                    }
                }
            }
        )*
    };
}

impl_int!(i8, i16, i32, i64, u8, u16, u32);

// Wider unsigned types saturate at `i64::MAX` on the way out.
macro_rules! impl_wide_int {
    ($($ty:ty),*) => {
        $(
            impl Property for $ty {
                #[inline]
                fn property_ref(&self) -> PropertyRef<'_> {
                    PropertyRef::Opaque(self)
                }

                #[inline]
                fn property_mut(&mut self) -> PropertyMut<'_> {
                    PropertyMut::Opaque(self)
                }

                #[inline]
                fn to_value(&self) -> Value {
                    Value::Int(i64::try_from(*self).unwrap_or(i64::MAX))
                }

                #[inline]
                fn assign(&mut self, value: Value) -> Result<(), PropertyError> {
                    *self = <$ty as FromValue>::from_value(value)?;
                    Ok(())
                }
            }

            impl FromValue for $ty {
                fn from_value(value: Value) -> Result<Self, PropertyError> {
                    match value {
                        Value::Int(i) => <$ty>::try_from(i)
                            .map_err(|_| PropertyError::mismatch::<$ty>(Value::Int(i))),
                        other => Err(PropertyError::mismatch::<$ty>(other)),
                    }
                }
            }
        )*
    };
}

impl_wide_int!(u64, usize, isize);

impl_opaque!(bool);
impl_opaque!(f32);
impl_opaque!(f64);
impl_opaque!(String);

impl FromValue for bool {
    fn from_value(value: Value) -> Result<Self, PropertyError> {
        match value {
            Value::Bool(b) => Ok(b),
            other => Err(PropertyError::mismatch::<bool>(other)),
        }
    }
}

impl FromValue for f64 {
    fn from_value(value: Value) -> Result<Self, PropertyError> {
        match value {
            Value::Float(f) => Ok(f),
            other => Err(PropertyError::mismatch::<f64>(other)),
        }
    }
}

impl FromValue for f32 {
    fn from_value(value: Value) -> Result<Self, PropertyError> {
        match value {
            Value::Float(f) => Ok(f as f32),
            other => Err(PropertyError::mismatch::<f32>(other)),
        }
    }
}

impl FromValue for String {
    fn from_value(value: Value) -> Result<Self, PropertyError> {
        match value {
            Value::String(s) => Ok(s),
            other => Err(PropertyError::mismatch::<String>(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use crate::{FromValue, Property, PropertyError, PropertyKind, Value};

    #[test]
    fn primitives_are_opaque() {
        assert_eq!(true.property_kind(), PropertyKind::Opaque);
        assert_eq!(1.5_f64.property_kind(), PropertyKind::Opaque);
        assert_eq!(String::from("a").property_kind(), PropertyKind::Opaque);
    }

    #[test]
    fn strict_conversion() {
        assert_eq!(i32::from_value(Value::Int(-3)).unwrap(), -3);
        assert_eq!(f64::from_value(Value::Float(0.5)).unwrap(), 0.5);
        assert!(f64::from_value(Value::Int(1)).is_err());
        assert!(bool::from_value(Value::Int(1)).is_err());

        let err = i8::from_value(Value::Int(1000)).unwrap_err();
        assert!(matches!(
            err,
            PropertyError::Mismatch { expected: "i8", found: Value::Int(1000) }
        ));
    }

    #[test]
    fn assign_keeps_old_value_on_mismatch() {
        let mut s = String::from("old");
        assert!(s.assign(Value::Bool(true)).is_err());
        assert_eq!(s, "old");

        s.assign(Value::from("new")).unwrap();
        assert_eq!(s, "new");
    }

    #[test]
    fn wide_ints_saturate() {
        assert_eq!(u64::MAX.to_value(), Value::Int(i64::MAX));
        assert_eq!(7_usize.to_value(), Value::Int(7));
        assert!(u64::from_value(Value::Int(-1)).is_err());
    }
}
