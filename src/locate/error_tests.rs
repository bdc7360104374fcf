//! Unit tests for locate error types

#[cfg(test)]
mod tests {
    use crate::locate::error::LocateError;

    #[test]
    fn test_unknown_tag_type_names_key() {
        let error = LocateError::UnknownTagType("badkey".to_string());
        assert_eq!(error.to_string(), "unsupported tag type \"badkey\"");
    }

    #[test]
    fn test_odd_argument_count_display() {
        let error = LocateError::OddArgumentCount(3);
        assert!(error.to_string().contains("3 argument(s)"));
    }

    #[test]
    fn test_error_debug() {
        let error = LocateError::OddArgumentCount(1);
        let debug = format!("{error:?}");
        assert!(debug.contains("OddArgumentCount"));
    }

    #[test]
    fn test_errors_compare_by_value() {
        assert_eq!(
            LocateError::UnknownTagType("x".into()),
            LocateError::UnknownTagType("x".into())
        );
        assert_ne!(
            LocateError::UnknownTagType("x".into()),
            LocateError::OddArgumentCount(1)
        );
    }
}
