//! Conversion errors

/// Failures when building a value type from untyped data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    /// (WrongLength) The slice does not hold exactly the number of components the type needs
    #[error("(WrongLength) expected {expected} components, found {found}")]
    WrongLength { expected: usize, found: usize },
}

/// Copies `values` into a fixed-size array, or reports how many components were found.
pub(crate) fn exact_components<const N: usize>(
    values: &[crate::float_types::Real],
) -> Result<[crate::float_types::Real; N], ConversionError> {
    values
        .try_into()
        .map_err(|_| ConversionError::WrongLength {
            expected: N,
            found: values.len(),
        })
}
