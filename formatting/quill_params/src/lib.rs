//! Quill Formatting Parameters
//!
//! Parameter-bag model used to carry named, typed formatting options
//! between a caller and an object that knows how to format itself.
//!
//! # Architecture
//!
//! - [`parameter`]: parameter identity and value model
//! - [`bag`]: read-only and mutable keyed collections over one store
//! - [`formattable`]: the consumer-side formatting contract
//! - [`error`]: failure conditions surfaced by bag operations
//!
//! A caller builds a [`FormattingParameters`] bag (from literal pairs, an
//! existing map, or another bag) and hands it, typically narrowed to the
//! read-only view, to a [`Formattable`] implementer, which reads values
//! by formatter-specific keys.
//!
//! # Example
//!
//! ```
//! use quill_params::{FormattingParameter, FormattingParameters, ParameterError};
//!
//! let mut bag = FormattingParameters::new();
//! bag.add("indent_size", FormattingParameter::new(&4usize))?;
//! bag.add("max_width", FormattingParameter::new(&100usize))?;
//!
//! assert_eq!(bag.len(), 2);
//! assert!(bag["indent_size"] == "4");
//! # Ok::<(), ParameterError>(())
//! ```

pub mod bag;
pub mod error;
pub mod formattable;
pub mod parameter;

pub use bag::{FormattingParameters, ReadOnlyFormattingParameters};
pub use error::ParameterError;
pub use formattable::Formattable;
pub use parameter::{FormattingParameter, ParameterId, ParameterValue};
