//! Result type alias for casemap

use super::errors::CaseMapError;

/// Result type alias for casemap operations
///
/// # Examples
///
/// ```
/// use casemap::domain::result::Result;
/// use casemap::domain::errors::CaseMapError;
///
/// fn failing_function() -> Result<()> {
///     Err(CaseMapError::Validation("Invalid input".to_string()))
/// }
///
/// assert!(failing_function().is_err());
/// ```
pub type Result<T> = std::result::Result<T, CaseMapError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_with_question_mark() -> Result<()> {
        fn inner() -> Result<u32> {
            Ok(42)
        }

        let value = inner()?;
        assert_eq!(value, 42);
        Ok(())
    }
}
