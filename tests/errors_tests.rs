//! Error type tests

use shortly::errors::ShortlyError;

#[cfg(test)]
mod error_creation_tests {
    use super::*;

    #[test]
    fn test_file_operation_error() {
        let error = ShortlyError::file_operation("read failed");

        assert!(matches!(error, ShortlyError::FileOperation(_)));
        assert_eq!(error.code(), "E001");
        assert!(error.to_string().contains("File Operation Error"));
        assert!(error.to_string().contains("read failed"));
    }

    #[test]
    fn test_stash_corrupt_error() {
        let error = ShortlyError::stash_corrupt("bad JSON at byte 3");

        assert!(matches!(error, ShortlyError::StashCorrupt(_)));
        assert_eq!(error.code(), "E002");
        assert!(error.to_string().contains("Corrupt Stash"));
    }

    #[test]
    fn test_validation_error() {
        let error = ShortlyError::validation("Enter a valid URL");

        assert!(matches!(error, ShortlyError::Validation(_)));
        assert_eq!(error.code(), "E004");
        assert_eq!(error.message(), "Enter a valid URL");
    }

    #[test]
    fn test_space_exhausted_error() {
        let error = ShortlyError::space_exhausted("no free identifier after 256 attempts");

        assert!(matches!(error, ShortlyError::SpaceExhausted(_)));
        assert_eq!(error.code(), "E006");
        assert!(error.to_string().contains("Identifier Space Exhausted"));
    }

    #[test]
    fn test_every_variant_has_a_distinct_code() {
        let errors = [
            ShortlyError::file_operation(""),
            ShortlyError::stash_corrupt(""),
            ShortlyError::serialization(""),
            ShortlyError::validation(""),
            ShortlyError::not_found(""),
            ShortlyError::space_exhausted(""),
            ShortlyError::clipboard(""),
            ShortlyError::notify(""),
            ShortlyError::lock(""),
            ShortlyError::http(""),
        ];

        let mut codes: Vec<&str> = errors.iter().map(|e| e.code()).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
    }
}

#[cfg(test)]
mod error_conversion_tests {
    use super::*;

    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let error: ShortlyError = io_error.into();

        assert!(matches!(error, ShortlyError::FileOperation(_)));
        assert!(error.to_string().contains("file missing"));
    }

    #[test]
    fn test_serde_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("{invalid json").unwrap_err();
        let error: ShortlyError = json_error.into();

        assert!(matches!(error, ShortlyError::Serialization(_)));
    }
}

#[cfg(test)]
mod error_format_tests {
    use super::*;

    #[test]
    fn test_format_simple_is_type_and_message() {
        let error = ShortlyError::not_found("abc123");
        assert_eq!(error.format_simple(), "Resource Not Found: abc123");
    }

    #[test]
    fn test_format_colored_carries_code_and_message() {
        let error = ShortlyError::http("QR fetch failed");
        let formatted = error.format_colored();

        assert!(formatted.contains("E010"));
        assert!(formatted.contains("QR fetch failed"));
    }
}
