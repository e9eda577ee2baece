//! # Value Model: Capability-Based Views of Runtime Data
//!
//! The validation engine never inspects concrete Rust types. Every value it
//! touches is first turned into a [`Value`], a borrowed view that exposes only
//! what the rules and the traversal need:
//!
//! | Kind | Capabilities |
//! |------|--------------|
//! | `Text` | string content, counted in Unicode scalar values |
//! | `Integer` | a single `i64` comparison domain |
//! | `Sequence` | length, element access, static element kind |
//! | `Record` | ordered field descriptors |
//! | `Pointer` | optional indirection to another value |
//! | `Other` | type name only |
//!
//! Types opt in by implementing [`Reflect`]. Implementations for the common
//! standard library types live in [`crate::impls`]; records are usually
//! generated with the [`record!`](crate::record!) macro.

use std::fmt;

use crate::record::Record;

/// The shape of a value, as seen by the validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// UTF-8 text.
    Text,
    /// Signed integer (all integer widths collapse to `i64`).
    Integer,
    /// Indexable collection (fixed or variable length).
    Sequence,
    /// Composite value with named, ordered fields.
    Record,
    /// Nullable indirection to another value.
    Pointer,
    /// Anything the rule language has no opinion on.
    Other,
}

impl Kind {
    /// Whether the traversal may recurse into values of this kind.
    ///
    /// A sequence is only walked when its element kind is traversable; a
    /// sequence of scalars is a leaf.
    pub fn is_traversable(self) -> bool {
        matches!(self, Self::Record | Self::Pointer | Self::Sequence)
    }

    /// Lowercase name used in error messages.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Integer => "integer",
            Self::Sequence => "sequence",
            Self::Record => "record",
            Self::Pointer => "pointer",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A borrowed view of one runtime datum.
#[derive(Clone, Copy)]
pub enum Value<'a> {
    /// Text content.
    Text(&'a str),
    /// Integer content, widened or saturated into `i64`.
    Integer(i64),
    /// A collection of reflectable elements.
    Sequence(&'a dyn Sequence),
    /// A record with field descriptors.
    Record(&'a dyn Record),
    /// A nullable indirection; `None` is the null pointer.
    Pointer(Option<&'a dyn Reflect>),
    /// A value outside the rule language, carrying its type name.
    Other(&'static str),
}

impl<'a> Value<'a> {
    /// Returns the kind of this value.
    pub fn kind(&self) -> Kind {
        match self {
            Self::Text(_) => Kind::Text,
            Self::Integer(_) => Kind::Integer,
            Self::Sequence(_) => Kind::Sequence,
            Self::Record(_) => Kind::Record,
            Self::Pointer(_) => Kind::Pointer,
            Self::Other(_) => Kind::Other,
        }
    }

    /// Follow non-null pointers until a non-pointer or a null pointer is reached.
    ///
    /// A null pointer is returned as-is; it is not replaced by a zero value.
    pub fn resolve(self) -> Value<'a> {
        let mut current = self;
        while let Value::Pointer(Some(inner)) = current {
            current = inner.reflect();
        }
        current
    }

    /// Returns true for `Pointer(None)`.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Pointer(None))
    }

    /// Text content, if this is a text value.
    pub fn as_text(&self) -> Option<&'a str> {
        match *self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Integer content, if this is an integer value.
    pub fn as_integer(&self) -> Option<i64> {
        match *self {
            Self::Integer(i) => Some(i),
            _ => None,
        }
    }

    /// Sequence view, if this is a sequence value.
    pub fn as_sequence(&self) -> Option<&'a dyn Sequence> {
        match *self {
            Self::Sequence(s) => Some(s),
            _ => None,
        }
    }

    /// Record view, if this is a record value.
    pub fn as_record(&self) -> Option<&'a dyn Record> {
        match *self {
            Self::Record(r) => Some(r),
            _ => None,
        }
    }
}

impl fmt::Debug for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.debug_tuple("Text").field(s).finish(),
            Self::Integer(i) => f.debug_tuple("Integer").field(i).finish(),
            Self::Sequence(s) => f
                .debug_struct("Sequence")
                .field("len", &s.len())
                .field("element_kind", &s.element_kind())
                .finish(),
            Self::Record(r) => f.debug_tuple("Record").field(&r.type_name()).finish(),
            Self::Pointer(None) => f.write_str("Pointer(null)"),
            Self::Pointer(Some(inner)) => f.debug_tuple("Pointer").field(&inner.reflect()).finish(),
            Self::Other(name) => f.debug_tuple("Other").field(name).finish(),
        }
    }
}

/// Types the validator can look into.
pub trait Reflect {
    /// Produce the borrowed view of this value.
    fn reflect(&self) -> Value<'_>;

    /// The kind every value of this type reflects as, known without an instance.
    ///
    /// Sequences use this to decide whether their elements are traversable,
    /// which must work for empty sequences too. Types that reflect as records
    /// or pointers must override it.
    fn shape() -> Kind
    where
        Self: Sized,
    {
        Kind::Other
    }
}

/// An indexable collection of reflectable elements.
pub trait Sequence {
    /// Number of elements.
    fn len(&self) -> usize;

    /// Returns true if the sequence has no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Static kind of the element type.
    fn element_kind(&self) -> Kind;

    /// Element at `index`, or `None` past the end.
    fn element(&self, index: usize) -> Option<&dyn Reflect>;
}
