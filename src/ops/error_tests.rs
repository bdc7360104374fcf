//! Unit tests for operation error types

#[cfg(test)]
mod tests {
    use crate::locate::LocateError;
    use crate::ops::error::QueryError;
    use crate::traverse::TraverseError;

    #[test]
    fn test_locate_error_passes_through() {
        let error: QueryError = LocateError::UnknownTagType("badkey".into()).into();
        assert_eq!(error.to_string(), "unsupported tag type \"badkey\"");
        assert!(matches!(error, QueryError::Locate(LocateError::UnknownTagType(_))));
    }

    #[test]
    fn test_directory_not_found_passes_through() {
        let error: QueryError = TraverseError::DirectoryNotFound("pop".into()).into();
        assert_eq!(error.to_string(), "directory not found: pop");
    }

    #[test]
    fn test_cancelled_display() {
        let error: QueryError = TraverseError::Cancelled.into();
        assert_eq!(error.to_string(), "traversal cancelled");
    }
}
