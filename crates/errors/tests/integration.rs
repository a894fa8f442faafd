//! Integration tests for error types

#[cfg(test)]
mod tests {
    use sumcheck_errors::*;

    #[test]
    fn test_error_conversion() {
        let manifest_err = ManifestError::InvalidPattern {
            pattern: "[".into(),
            message: "unclosed character class".into(),
        };
        let err: Error = manifest_err.into();
        assert!(matches!(err, Error::Manifest(_)));
        assert_eq!(err.user_code(), Some("manifest.invalid_pattern"));
    }

    #[test]
    fn test_error_display() {
        let err = StorageError::PathNotFound {
            path: "/data/file.bin".into(),
        };
        assert_eq!(err.to_string(), "path not found: /data/file.bin");
    }

    #[test]
    fn test_error_clone() {
        let err = ConfigError::InvalidValue {
            field: "SUMCHECK_COLOR".into(),
            value: "purple".into(),
        };
        let cloned = err.clone();
        assert_eq!(err.to_string(), cloned.to_string());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "test");
        let storage_err =
            StorageError::from_io_with_path(&io_err, std::path::Path::new("/data/secret"));
        assert!(matches!(storage_err, StorageError::PermissionDenied { .. }));
        assert!(storage_err.user_hint().is_some());
    }
}
