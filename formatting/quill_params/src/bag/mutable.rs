//! Mutable parameter bag facade.

use std::ops::Deref;

use crate::error::ParameterError;
use crate::parameter::FormattingParameter;

use super::ReadOnlyFormattingParameters;

/// Mutable bag of named formatting parameters.
///
/// The mutable facade over the same owned store as
/// [`ReadOnlyFormattingParameters`]: every query of the read-only view is
/// reachable through deref, and [`as_read_only`](Self::as_read_only)
/// narrows a borrow for handoff to a consumer.
///
/// Not designed for concurrent access; a bag mutated from several threads
/// needs external synchronization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FormattingParameters {
    inner: ReadOnlyFormattingParameters,
}

impl FormattingParameters {
    /// Create an empty bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a bag by draining `pairs`, rejecting duplicate keys.
    ///
    /// Same contract as [`ReadOnlyFormattingParameters::from_pairs`].
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError::DuplicateKey`] on the first repeated key,
    /// in which case no bag is constructed.
    pub fn from_pairs<I, K>(pairs: I) -> Result<Self, ParameterError>
    where
        I: IntoIterator<Item = (K, FormattingParameter)>,
        K: Into<String>,
    {
        Ok(Self {
            inner: ReadOnlyFormattingParameters::from_pairs(pairs)?,
        })
    }

    /// Add a parameter under a key that must not already be present.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError::DuplicateKey`] if `key` is already
    /// present; the bag is unchanged.
    pub fn add(
        &mut self,
        key: impl Into<String>,
        parameter: FormattingParameter,
    ) -> Result<(), ParameterError> {
        let key = key.into();
        if self.inner.entries.contains_key(&key) {
            return Err(ParameterError::DuplicateKey { key });
        }
        tracing::trace!(key = %key, "parameter added");
        self.inner.entries.insert(key, parameter);
        Ok(())
    }

    /// Insert or overwrite the parameter for `key`.
    ///
    /// Unlike [`add`](Self::add), an existing key is overwritten in place:
    /// it keeps its position in iteration order and the count is
    /// unchanged. Returns the previous parameter, if any.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        parameter: FormattingParameter,
    ) -> Option<FormattingParameter> {
        let key = key.into();
        tracing::trace!(key = %key, "parameter set");
        self.inner.entries.insert(key, parameter)
    }

    /// Remove the parameter for `key`, preserving the order of the rest.
    ///
    /// Returns the removed parameter, or `None` if `key` was absent.
    pub fn remove(&mut self, key: &str) -> Option<FormattingParameter> {
        let removed = self.inner.entries.shift_remove(key);
        if removed.is_some() {
            tracing::trace!(key, "parameter removed");
        }
        removed
    }

    /// Remove every parameter.
    pub fn clear(&mut self) {
        tracing::trace!(count = self.inner.entries.len(), "parameters cleared");
        self.inner.entries.clear();
    }

    /// Check if `key` maps to a parameter identity-equal to `parameter`.
    ///
    /// Identity, not text: a different parameter holding the same value
    /// does not match.
    pub fn contains_pair(&self, key: &str, parameter: &FormattingParameter) -> bool {
        self.inner.entries.get(key).is_some_and(|held| held == parameter)
    }

    /// Copy every `(key, parameter)` pair into `dest`, starting at `start`.
    ///
    /// Pairs are written in insertion order. On failure the destination is
    /// untouched.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError::StartOutOfBounds`] if `start` exceeds
    /// `dest.len()`, or [`ParameterError::InsufficientCapacity`] if fewer
    /// than `self.len()` slots remain from `start`.
    pub fn copy_to(
        &self,
        dest: &mut [(String, FormattingParameter)],
        start: usize,
    ) -> Result<(), ParameterError> {
        if start > dest.len() {
            return Err(ParameterError::StartOutOfBounds {
                start,
                len: dest.len(),
            });
        }
        let available = dest.len() - start;
        let needed = self.inner.len();
        if available < needed {
            return Err(ParameterError::InsufficientCapacity { available, needed });
        }
        for (slot, (key, parameter)) in dest[start..].iter_mut().zip(&self.inner.entries) {
            *slot = (key.clone(), parameter.clone());
        }
        Ok(())
    }

    /// Narrow to the read-only view for handoff to a consumer.
    #[inline]
    pub fn as_read_only(&self) -> &ReadOnlyFormattingParameters {
        &self.inner
    }

    /// Freeze into the read-only view, keeping the same store.
    pub fn into_read_only(self) -> ReadOnlyFormattingParameters {
        self.inner
    }
}

impl Deref for FormattingParameters {
    type Target = ReadOnlyFormattingParameters;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

/// Upgrade a read-only view to a mutable bag, taking over its store.
impl From<ReadOnlyFormattingParameters> for FormattingParameters {
    fn from(view: ReadOnlyFormattingParameters) -> Self {
        Self { inner: view }
    }
}

/// Upgrade by copying; the source view is untouched.
impl From<&ReadOnlyFormattingParameters> for FormattingParameters {
    fn from(view: &ReadOnlyFormattingParameters) -> Self {
        Self {
            inner: view.clone(),
        }
    }
}

impl std::ops::Index<&str> for FormattingParameters {
    type Output = FormattingParameter;

    /// # Panics
    ///
    /// Panics if `key` is not present, like the read-only indexer.
    fn index(&self, key: &str) -> &Self::Output {
        &self.inner[key]
    }
}

impl<'a> IntoIterator for &'a FormattingParameters {
    type Item = (&'a String, &'a FormattingParameter);
    type IntoIter = indexmap::map::Iter<'a, String, FormattingParameter>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.entries.iter()
    }
}

impl IntoIterator for FormattingParameters {
    type Item = (String, FormattingParameter);
    type IntoIter = indexmap::map::IntoIter<String, FormattingParameter>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.entries.into_iter()
    }
}
