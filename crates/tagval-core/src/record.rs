//! # Records: Field Descriptors and the `record!` Macro
//!
//! A record exposes its fields as an ordered list of [`Field`] descriptors.
//! Each descriptor carries the field name, the raw annotation string, two
//! accessibility capabilities and a borrowed handle to the field's value.
//!
//! ## Accessibility
//!
//! A field is accessible iff it is exported OR embedded. The validator
//! refuses to apply a rule to an inaccessible field: annotating one is
//! always reported, never silently ignored.
//!
//! ## Declaring records
//!
//! ```
//! tagval_core::record! {
//!     #[derive(Debug)]
//!     pub struct Account {
//!         pub login: String => "len:8",
//!         pub role: String => "in:admin, staff",
//!         pub age: i64 => "min:18",
//!         pub nickname: Option<String>,
//!         pub notes: String => "-",
//!     }
//! }
//! ```
//!
//! A field counts as exported when its visibility is exactly `pub`. Records
//! with generics or embedded members implement [`Record`] by hand.

use crate::value::Reflect;

/// Annotation that explicitly disables validation for a field.
pub const SKIP_MARKER: &str = "-";

/// A composite value with named, ordered fields.
pub trait Record {
    /// Name of the record type, used in diagnostics.
    fn type_name(&self) -> &'static str;

    /// Field descriptors in declaration order.
    fn fields(&self) -> Vec<Field<'_>>;
}

/// Descriptor of one record field.
#[derive(Clone, Copy)]
pub struct Field<'a> {
    name: &'static str,
    annotation: &'a str,
    exported: bool,
    embedded: bool,
    value: &'a dyn Reflect,
}

impl<'a> Field<'a> {
    /// Describe a field with no annotation that is neither exported nor embedded.
    pub fn new(name: &'static str, value: &'a dyn Reflect) -> Self {
        Self {
            name,
            annotation: "",
            exported: false,
            embedded: false,
            value,
        }
    }

    /// Attach the raw `rule:param` annotation.
    pub fn annotated(mut self, annotation: &'a str) -> Self {
        self.annotation = annotation;
        self
    }

    /// Mark the field as externally visible.
    pub fn exported(mut self, exported: bool) -> Self {
        self.exported = exported;
        self
    }

    /// Mark the field as an embedded member of its record.
    pub fn embedded(mut self, embedded: bool) -> Self {
        self.embedded = embedded;
        self
    }

    /// Field name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Raw annotation string; empty when the field carries none.
    pub fn annotation(&self) -> &'a str {
        self.annotation
    }

    /// Whether the validator may look at this field.
    pub fn is_accessible(&self) -> bool {
        self.exported || self.embedded
    }

    /// Whether the annotation asks for no validation at all.
    pub fn is_unannotated(&self) -> bool {
        self.annotation.is_empty() || self.annotation == SKIP_MARKER
    }

    /// Whether the field is explicitly excluded with `-`.
    pub fn is_skipped(&self) -> bool {
        self.annotation == SKIP_MARKER
    }

    /// Borrowed handle to the field's current value.
    pub fn value(&self) -> &'a dyn Reflect {
        self.value
    }
}

impl std::fmt::Debug for Field<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("annotation", &self.annotation)
            .field("exported", &self.exported)
            .field("embedded", &self.embedded)
            .field("value", &self.value.reflect())
            .finish()
    }
}

/// Whether a stringified visibility qualifier makes a field exported.
///
/// Only a bare `pub` counts; restricted forms such as `pub(crate)` do not.
pub fn is_public(visibility: &str) -> bool {
    visibility == "pub"
}

/// Declare a struct and derive its [`Record`] and [`Reflect`] impls.
///
/// Each field may end with `=> "rule:param"` to attach an annotation.
#[macro_export]
macro_rules! record {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$fmeta:meta])*
                $fvis:vis $field:ident : $fty:ty $(=> $tag:literal)?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            $(
                $(#[$fmeta])*
                $fvis $field: $fty,
            )*
        }

        impl $crate::Record for $name {
            fn type_name(&self) -> &'static str {
                ::std::stringify!($name)
            }

            fn fields(&self) -> ::std::vec::Vec<$crate::Field<'_>> {
                ::std::vec![
                    $(
                        $crate::Field::new(::std::stringify!($field), &self.$field)
                            .annotated($crate::__annotation!($($tag)?))
                            .exported($crate::is_public(::std::stringify!($fvis))),
                    )*
                ]
            }
        }

        impl $crate::Reflect for $name {
            fn reflect(&self) -> $crate::Value<'_> {
                $crate::Value::Record(self)
            }

            fn shape() -> $crate::Kind {
                $crate::Kind::Record
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __annotation {
    () => {
        ""
    };
    ($tag:literal) => {
        $tag
    };
}

/// Reflect impl shared by hand-written records.
///
/// `impl_reflect_for_record!(MyType);` wires a manual [`Record`] impl into
/// [`Reflect`] with the right static shape.
#[macro_export]
macro_rules! impl_reflect_for_record {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::Reflect for $ty {
                fn reflect(&self) -> $crate::Value<'_> {
                    $crate::Value::Record(self)
                }

                fn shape() -> $crate::Kind {
                    $crate::Kind::Record
                }
            }
        )*
    };
}
