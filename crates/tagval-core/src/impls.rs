//! # Standard Library Reflect Implementations
//!
//! Maps common std types onto the validator's kinds:
//!
//! - **Text**: `String`, `str`, `Cow<str>`.
//! - **Integer**: every primitive integer. Widths up to 32 bits (and `i64`)
//!   widen losslessly; `u64`, `usize`, `i128`, `u128` and `isize` saturate
//!   into the `i64` range. A `u64` above `i64::MAX` therefore compares as
//!   `i64::MAX`.
//! - **Sequence**: `Vec<T>`, `VecDeque<T>`, `[T; N]`.
//! - **Pointer**: `Option<T>` is the nullable indirection. References,
//!   `Box`, `Rc` and `Arc` can never be null, so they reflect as their
//!   pointee and report its static shape: `Vec<&str>` is a sequence of text
//!   exactly like `Vec<String>`.
//! - **Other**: `bool`, `char`, floats, `()`, maps.

use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap, VecDeque};
use std::rc::Rc;
use std::sync::Arc;

use crate::value::{Kind, Reflect, Sequence, Value};

// ---------------------------------------------------------------------------
// Text
// ---------------------------------------------------------------------------

impl Reflect for String {
    fn reflect(&self) -> Value<'_> {
        Value::Text(self)
    }

    fn shape() -> Kind {
        Kind::Text
    }
}

impl Reflect for str {
    fn reflect(&self) -> Value<'_> {
        Value::Text(self)
    }
}

impl Reflect for Cow<'_, str> {
    fn reflect(&self) -> Value<'_> {
        Value::Text(self)
    }

    fn shape() -> Kind {
        Kind::Text
    }
}

// ---------------------------------------------------------------------------
// Integers
// ---------------------------------------------------------------------------

macro_rules! reflect_widening_integer {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Reflect for $ty {
                fn reflect(&self) -> Value<'_> {
                    Value::Integer(i64::from(*self))
                }

                fn shape() -> Kind {
                    Kind::Integer
                }
            }
        )*
    };
}

macro_rules! reflect_saturating_unsigned {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Reflect for $ty {
                fn reflect(&self) -> Value<'_> {
                    Value::Integer(i64::try_from(*self).unwrap_or(i64::MAX))
                }

                fn shape() -> Kind {
                    Kind::Integer
                }
            }
        )*
    };
}

macro_rules! reflect_saturating_signed {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Reflect for $ty {
                fn reflect(&self) -> Value<'_> {
                    let saturated = if *self < 0 { i64::MIN } else { i64::MAX };
                    Value::Integer(i64::try_from(*self).unwrap_or(saturated))
                }

                fn shape() -> Kind {
                    Kind::Integer
                }
            }
        )*
    };
}

reflect_widening_integer!(i8, i16, i32, i64, u8, u16, u32);
reflect_saturating_unsigned!(u64, u128, usize);
reflect_saturating_signed!(i128, isize);

// ---------------------------------------------------------------------------
// Scalars outside the rule language
// ---------------------------------------------------------------------------

macro_rules! reflect_other {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Reflect for $ty {
                fn reflect(&self) -> Value<'_> {
                    Value::Other(std::any::type_name::<$ty>())
                }
            }
        )*
    };
}

reflect_other!(bool, char, f32, f64, ());

impl<K, V> Reflect for HashMap<K, V> {
    fn reflect(&self) -> Value<'_> {
        Value::Other(std::any::type_name::<Self>())
    }
}

impl<K, V> Reflect for BTreeMap<K, V> {
    fn reflect(&self) -> Value<'_> {
        Value::Other(std::any::type_name::<Self>())
    }
}

// ---------------------------------------------------------------------------
// Sequences
// ---------------------------------------------------------------------------

impl<T: Reflect> Sequence for Vec<T> {
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn element_kind(&self) -> Kind {
        T::shape()
    }

    fn element(&self, index: usize) -> Option<&dyn Reflect> {
        self.get(index).map(|e| e as &dyn Reflect)
    }
}

impl<T: Reflect> Reflect for Vec<T> {
    fn reflect(&self) -> Value<'_> {
        Value::Sequence(self)
    }

    fn shape() -> Kind {
        Kind::Sequence
    }
}

impl<T: Reflect> Sequence for VecDeque<T> {
    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    fn element_kind(&self) -> Kind {
        T::shape()
    }

    fn element(&self, index: usize) -> Option<&dyn Reflect> {
        self.get(index).map(|e| e as &dyn Reflect)
    }
}

impl<T: Reflect> Reflect for VecDeque<T> {
    fn reflect(&self) -> Value<'_> {
        Value::Sequence(self)
    }

    fn shape() -> Kind {
        Kind::Sequence
    }
}

impl<T: Reflect, const N: usize> Sequence for [T; N] {
    fn len(&self) -> usize {
        N
    }

    fn element_kind(&self) -> Kind {
        T::shape()
    }

    fn element(&self, index: usize) -> Option<&dyn Reflect> {
        self.get(index).map(|e| e as &dyn Reflect)
    }
}

impl<T: Reflect, const N: usize> Reflect for [T; N] {
    fn reflect(&self) -> Value<'_> {
        Value::Sequence(self)
    }

    fn shape() -> Kind {
        Kind::Sequence
    }
}

// ---------------------------------------------------------------------------
// Pointers
// ---------------------------------------------------------------------------

impl<T: Reflect> Reflect for Option<T> {
    fn reflect(&self) -> Value<'_> {
        Value::Pointer(self.as_ref().map(|v| v as &dyn Reflect))
    }

    fn shape() -> Kind {
        Kind::Pointer
    }
}

macro_rules! reflect_transparent_pointer {
    ($($ptr:ident),* $(,)?) => {
        $(
            impl<T: Reflect> Reflect for $ptr<T> {
                fn reflect(&self) -> Value<'_> {
                    (**self).reflect()
                }

                fn shape() -> Kind {
                    T::shape()
                }
            }

            impl Reflect for $ptr<str> {
                fn reflect(&self) -> Value<'_> {
                    Value::Text(self)
                }

                fn shape() -> Kind {
                    Kind::Text
                }
            }
        )*
    };
}

reflect_transparent_pointer!(Box, Rc, Arc);

impl<T: Reflect> Reflect for &T {
    fn reflect(&self) -> Value<'_> {
        (**self).reflect()
    }

    fn shape() -> Kind {
        T::shape()
    }
}

impl Reflect for &str {
    fn reflect(&self) -> Value<'_> {
        Value::Text(self)
    }

    fn shape() -> Kind {
        Kind::Text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn text_types_reflect_as_text() {
        assert_eq!("héllo".to_string().reflect().as_text(), Some("héllo"));
        assert_eq!(Cow::Borrowed("abc").reflect().as_text(), Some("abc"));
        let boxed: Box<str> = "boxed".into();
        assert_eq!(boxed.reflect().as_text(), Some("boxed"));
    }

    #[test]
    fn large_unsigned_saturates() {
        assert_eq!(u64::MAX.reflect().as_integer(), Some(i64::MAX));
        assert_eq!(usize::MAX.reflect().as_integer(), Some(i64::MAX));
        assert_eq!(i128::MIN.reflect().as_integer(), Some(i64::MIN));
    }

    #[test]
    fn scalars_outside_rule_language_are_other() {
        assert_eq!(true.reflect().kind(), Kind::Other);
        assert_eq!(1.5f64.reflect().kind(), Kind::Other);
        assert_eq!(HashMap::<String, i64>::new().reflect().kind(), Kind::Other);
    }

    #[test]
    fn empty_sequence_still_knows_element_kind() {
        let items: Vec<Option<i64>> = Vec::new();
        let seq = items.reflect().as_sequence().expect("sequence");
        assert_eq!(seq.len(), 0);
        assert!(seq.is_empty());
        assert_eq!(seq.element_kind(), Kind::Pointer);
    }

    #[test]
    fn array_exposes_elements() {
        let items = ["a".to_string(), "b".to_string()];
        let seq = items.reflect().as_sequence().expect("sequence");
        assert_eq!(seq.len(), 2);
        assert_eq!(seq.element_kind(), Kind::Text);
        assert_eq!(seq.element(1).map(|e| e.reflect().as_text()), Some(Some("b")));
        assert!(seq.element(2).is_none());
    }

    #[test]
    fn option_is_nullable_pointer() {
        let none: Option<String> = None;
        assert!(none.reflect().is_null());
        let some = Some("x".to_string());
        assert_eq!(some.reflect().resolve().as_text(), Some("x"));
    }

    #[test]
    fn smart_pointers_are_transparent_and_take_pointee_shape() {
        let rc = Rc::new(5i32);
        assert_eq!(rc.reflect().as_integer(), Some(5));
        assert_eq!(<Rc<i32> as Reflect>::shape(), Kind::Integer);
        assert_eq!(<&i32 as Reflect>::shape(), Kind::Integer);
        assert_eq!(<Box<String> as Reflect>::shape(), Kind::Text);
        assert_eq!(<Box<Option<i64>> as Reflect>::shape(), Kind::Pointer);
        assert_eq!(<Arc<Vec<i64>> as Reflect>::shape(), Kind::Sequence);
    }

    #[test]
    fn str_pointers_are_text() {
        assert_eq!(<&str as Reflect>::shape(), Kind::Text);
        assert_eq!(<Box<str> as Reflect>::shape(), Kind::Text);
        assert_eq!(<Rc<str> as Reflect>::shape(), Kind::Text);
        assert_eq!(<Arc<str> as Reflect>::shape(), Kind::Text);
        let arc: Arc<str> = Arc::from("shared");
        assert_eq!(arc.reflect().as_text(), Some("shared"));
    }

    #[test]
    fn sequences_of_str_pointers_have_text_elements() {
        let borrowed: Vec<&str> = vec!["a", "b"];
        let seq = borrowed.reflect().as_sequence().expect("sequence");
        assert_eq!(seq.element_kind(), Kind::Text);
        assert_eq!(seq.element(0).map(|e| e.reflect().as_text()), Some(Some("a")));

        let boxed: [Box<str>; 0] = [];
        assert_eq!(boxed.reflect().as_sequence().map(|s| s.element_kind()), Some(Kind::Text));
    }

    proptest! {
        #[test]
        fn widening_integers_keep_their_value(v in any::<i32>()) {
            prop_assert_eq!(v.reflect().as_integer(), Some(i64::from(v)));
        }

        #[test]
        fn u64_within_range_is_exact(v in 0u64..=(i64::MAX as u64)) {
            prop_assert_eq!(v.reflect().as_integer(), Some(v as i64));
        }
    }
}
