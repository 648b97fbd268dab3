//! [`ParameterValue`] impls for common option value types.
//!
//! Formatter options are overwhelmingly switches, widths, and literal
//! text. These impls let such values become parameters without bespoke
//! wrapper types:
//!
//! ```
//! use quill_params::FormattingParameter;
//!
//! let indent = FormattingParameter::new(&4usize);
//! assert!(indent == "4");
//! ```

use super::ParameterValue;

macro_rules! impl_parameter_value_via_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ParameterValue for $ty {
                fn to_value_string(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

impl_parameter_value_via_display!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize,
);

impl ParameterValue for str {
    fn to_value_string(&self) -> String {
        self.to_owned()
    }
}

impl ParameterValue for String {
    fn to_value_string(&self) -> String {
        self.clone()
    }
}
