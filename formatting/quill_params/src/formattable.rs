//! Formatting capability contract.

use crate::bag::ReadOnlyFormattingParameters;

/// A contract for an object whose code can be formatted according to a
/// set of parameters.
///
/// The keys a formatter reads are its own; the bag only guarantees the
/// container mechanics. Formatting happens as a side effect on the
/// implementer, and what it produces (in-place text, tree mutation) is
/// formatter-defined.
///
/// A `&FormattingParameters` coerces to the read-only view, so callers
/// can hand a mutable bag straight to [`format`](Formattable::format).
pub trait Formattable {
    /// Format the object's related code according to `parameters`.
    fn format(&mut self, parameters: &ReadOnlyFormattingParameters);
}
