//! Parameter identity and value model.
//!
//! A [`FormattingParameter`] carries two independent equality notions:
//!
//! 1. **Identity equality** against other parameters, comparing only the
//!    [`ParameterId`] generated at construction. Two distinct parameters
//!    with the same textual value are unequal.
//! 2. **Value equality** against raw strings, comparing the stored text
//!    exactly (case-sensitive, no normalization).
//!
//! Both are expressed through separate `PartialEq` impls rather than a
//! dispatching "equals anything" entry point. `Hash` follows identity;
//! string-keyed containers in [`crate::bag`] hash their key strings, never
//! parameter values, so the two hash domains never mix.

use std::fmt;
use std::hash::{Hash, Hasher};

use ulid::Ulid;

mod kinds;

#[cfg(test)]
mod tests;

/// Process-unique identifier for a formatting parameter.
///
/// A 128-bit ULID, generated once when the parameter is constructed and
/// never reassigned. Uniqueness holds within the process and practically
/// across processes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParameterId(Ulid);

impl ParameterId {
    fn fresh() -> Self {
        Self(Ulid::new())
    }
}

impl fmt::Display for ParameterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A source for a parameter's canonical textual form.
///
/// Implemented by any type whose semantic content can be rendered to the
/// string a [`FormattingParameter`] stores. The rendering runs exactly
/// once, when the parameter is constructed; the source is always fully
/// built before that point, so `to_value_string` never observes
/// half-initialized state.
///
/// Impls for common option value types (switches, widths, literal text)
/// live in this module; formatter-specific kinds define their own.
pub trait ParameterValue {
    /// Render the canonical string form of this value.
    fn to_value_string(&self) -> String;
}

impl<T: ParameterValue + ?Sized> ParameterValue for &T {
    fn to_value_string(&self) -> String {
        (**self).to_value_string()
    }
}

/// A formatting option's value with a stable identity.
///
/// Constructed from a [`ParameterValue`] source, a verbatim string, or
/// another parameter (which copies the text under a fresh identity).
/// The stored value is fixed for the parameter's lifetime.
///
/// `Clone` preserves the identity: a clone *is* the same parameter, which
/// is what lets bag copies keep entry identity intact. Use
/// [`from_parameter`](Self::from_parameter) for a distinct-identity copy.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FormattingParameter {
    id: ParameterId,
    value: String,
}

impl FormattingParameter {
    /// Create a parameter whose value is derived from `source`.
    ///
    /// `to_value_string` is invoked exactly once, here.
    pub fn new<S: ParameterValue + ?Sized>(source: &S) -> Self {
        Self::from_value(source.to_value_string())
    }

    /// Create a parameter holding `value` verbatim.
    ///
    /// The content is not validated or normalized.
    pub fn from_value(value: impl Into<String>) -> Self {
        Self {
            id: ParameterId::fresh(),
            value: value.into(),
        }
    }

    /// Copy `other`'s value under a freshly generated identity.
    ///
    /// The result is value-equal to `other` but never identity-equal to it.
    pub fn from_parameter(other: &FormattingParameter) -> Self {
        Self::from_value(other.value.clone())
    }

    /// The parameter's process-unique identity.
    #[inline]
    pub fn id(&self) -> ParameterId {
        self.id
    }

    /// The parameter's textual value.
    #[inline]
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Converting a parameter to text yields exactly its value.
impl fmt::Display for FormattingParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

/// Identity equality: parameters compare by id, not by text.
impl PartialEq for FormattingParameter {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for FormattingParameter {}

/// Hashes the id only, consistent with identity equality.
impl Hash for FormattingParameter {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Value equality: a parameter equals a string iff its value matches exactly.
impl PartialEq<str> for FormattingParameter {
    fn eq(&self, other: &str) -> bool {
        self.value == other
    }
}

impl PartialEq<&str> for FormattingParameter {
    fn eq(&self, other: &&str) -> bool {
        self.value == *other
    }
}

impl PartialEq<String> for FormattingParameter {
    fn eq(&self, other: &String) -> bool {
        self.value == *other
    }
}

impl PartialEq<FormattingParameter> for str {
    fn eq(&self, other: &FormattingParameter) -> bool {
        *self == *other.value
    }
}

impl PartialEq<FormattingParameter> for &str {
    fn eq(&self, other: &FormattingParameter) -> bool {
        **self == *other.value
    }
}

impl PartialEq<FormattingParameter> for String {
    fn eq(&self, other: &FormattingParameter) -> bool {
        *self == other.value
    }
}
