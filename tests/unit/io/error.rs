//! Tests for error types including source chaining and message formatting

#[cfg(test)]
mod tests {
    use moji::MosaicError;
    use moji::io::error::{file_system_error, invalid_parameter, spatial_query_error};
    use std::error::Error;
    use std::path::PathBuf;

    fn decode_error() -> image::ImageError {
        image::ImageError::IoError(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            "bad header",
        ))
    }

    // Tests error source chaining works correctly
    // Verified by breaking source chain
    #[test]
    fn test_error_source_chain() {
        let error = file_system_error(
            "/tmp/out.gif",
            "write animation",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );

        assert!(error.source().is_some());
        assert!(spatial_query_error(&"nan").source().is_none());
    }

    // Tests file system errors name the path and operation
    // Verified by omitting the operation from the message
    #[test]
    fn test_file_system_error_message() {
        let error = file_system_error(
            "/tmp/out.gif",
            "write animation",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );

        let message = error.to_string();
        assert!(message.contains("/tmp/out.gif"));
        assert!(message.contains("write animation"));
        assert!(message.contains("denied"));
    }

    // Tests InvalidParameter error contains all fields
    // Verified by omitting value from message
    #[test]
    fn test_invalid_parameter_error() {
        let error = invalid_parameter("scale", &-1.5, &"must be a positive number");

        let message = error.to_string();
        assert!(message.contains("scale"));
        assert!(message.contains("-1.5"));
        assert!(message.contains("must be a positive number"));
    }

    // Tests image errors carry their path and source
    // Verified by excluding source error from message
    #[test]
    fn test_image_errors_with_source() {
        let load = MosaicError::ImageLoad {
            path: PathBuf::from("photo.png"),
            source: decode_error(),
        };
        let export = MosaicError::ImageExport {
            path: PathBuf::from("out.gif"),
            source: decode_error(),
        };

        assert!(load.to_string().contains("photo.png"));
        assert!(load.to_string().contains("bad header"));
        assert!(export.to_string().contains("out.gif"));
        assert!(export.source().is_some());
    }

    // Tests an empty catalog names the scanned directory
    // Verified by dropping the path from the message
    #[test]
    fn test_empty_catalog_message() {
        let error = MosaicError::EmptyCatalog {
            path: PathBuf::from("emojis"),
        };

        assert!(error.to_string().contains("emojis"));
        assert!(error.source().is_none());
    }

    // Tests tile decode failures name the skipped file and keep their cause
    // Verified by reporting the tile path as a source image
    #[test]
    fn test_tile_decode_message() {
        let error = MosaicError::TileDecode {
            path: PathBuf::from("broken.png"),
            source: decode_error(),
        };

        assert!(error.to_string().starts_with("Skipping tile 'broken.png'"));
        assert!(error.source().is_some());
    }
}
