//! Keyed parameter collections.
//!
//! Two capability-scoped facades over one insertion-ordered map:
//!
//! - [`ReadOnlyFormattingParameters`] exposes only queries and is never
//!   mutated after construction.
//! - [`FormattingParameters`] owns the same store and adds mutation; it
//!   derefs to the read-only view, so a `&FormattingParameters` narrows
//!   to `&ReadOnlyFormattingParameters` at any consumer boundary.
//!
//! Keys are unique; inserting a duplicate during construction fails
//! rather than overwriting. Lookup is order-independent, iteration
//! follows insertion order.

use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;

use crate::error::ParameterError;
use crate::parameter::FormattingParameter;

mod mutable;

pub use mutable::FormattingParameters;


/// Insertion-ordered backing store shared by both facades.
pub(crate) type ParameterMap = IndexMap<String, FormattingParameter, FxBuildHasher>;

/// Immutable view over named formatting parameters.
///
/// Populated entirely at construction, from any pair source or by copying
/// another bag. Copies preserve entry identity: the parameters in a
/// cloned view are identity-equal to the originals.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReadOnlyFormattingParameters {
    pub(crate) entries: ParameterMap,
}

impl ReadOnlyFormattingParameters {
    /// Create an empty view.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a view by draining `pairs`, rejecting duplicate keys.
    ///
    /// Accepts any pair source: a fixed array, a vector, a map, or a bare
    /// iterator. Every element is consumed.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError::DuplicateKey`] on the first repeated key,
    /// in which case no view is constructed.
    pub fn from_pairs<I, K>(pairs: I) -> Result<Self, ParameterError>
    where
        I: IntoIterator<Item = (K, FormattingParameter)>,
        K: Into<String>,
    {
        let pairs = pairs.into_iter();
        let mut entries =
            ParameterMap::with_capacity_and_hasher(pairs.size_hint().0, FxBuildHasher);
        for (key, parameter) in pairs {
            let key = key.into();
            if entries.contains_key(&key) {
                return Err(ParameterError::DuplicateKey { key });
            }
            entries.insert(key, parameter);
        }
        Ok(Self { entries })
    }

    /// Number of parameters in the view.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the view holds no parameters.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check if `key` is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Look up the parameter for `key`.
    pub fn get(&self, key: &str) -> Option<&FormattingParameter> {
        self.entries.get(key)
    }

    /// Look up the parameter for `key`, failing if absent.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError::KeyNotFound`] if `key` is not present.
    pub fn try_get(&self, key: &str) -> Result<&FormattingParameter, ParameterError> {
        self.entries.get(key).ok_or_else(|| ParameterError::KeyNotFound {
            key: key.to_owned(),
        })
    }

    /// Iterate over keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Iterate over parameters in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &FormattingParameter> {
        self.entries.values()
    }

    /// Iterate over `(key, parameter)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FormattingParameter)> {
        self.entries.iter().map(|(key, parameter)| (key.as_str(), parameter))
    }

    /// Copy this view into a mutable bag.
    pub fn to_mutable(&self) -> FormattingParameters {
        FormattingParameters::from(self.clone())
    }
}

impl std::ops::Index<&str> for ReadOnlyFormattingParameters {
    type Output = FormattingParameter;

    /// # Panics
    ///
    /// Panics if `key` is not present. Use [`ReadOnlyFormattingParameters::get`]
    /// or [`ReadOnlyFormattingParameters::try_get`] for fallible lookup.
    fn index(&self, key: &str) -> &Self::Output {
        self.try_get(key).unwrap_or_else(|e| panic!("{}", e))
    }
}

impl<'a> IntoIterator for &'a ReadOnlyFormattingParameters {
    type Item = (&'a String, &'a FormattingParameter);
    type IntoIter = indexmap::map::Iter<'a, String, FormattingParameter>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl IntoIterator for ReadOnlyFormattingParameters {
    type Item = (String, FormattingParameter);
    type IntoIter = indexmap::map::IntoIter<String, FormattingParameter>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
