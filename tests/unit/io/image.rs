//! Tests for image decoding and directory listing

#[cfg(test)]
mod tests {
    use ::image::{ImageFormat, Rgba, RgbaImage};
    use moji::MosaicError;
    use moji::io::image::{decode_image, list_directory, load_image};
    use std::io::Cursor;
    use tempfile::TempDir;

    fn png_bytes(image: &RgbaImage) -> Vec<u8> {
        let mut bytes = Vec::new();
        image
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .expect("Failed to encode PNG");
        bytes
    }

    // Tests encoded PNG bytes decode to the same pixels
    // Verified by converting to RGB before returning
    #[test]
    fn test_decode_png() {
        let mut image = RgbaImage::from_pixel(3, 2, Rgba([10, 20, 30, 255]));
        image.put_pixel(2, 1, Rgba([0, 0, 0, 0]));

        let decoded = decode_image(&png_bytes(&image)).expect("Failed to decode PNG");

        assert_eq!(decoded, image);
    }

    // Tests unsupported bytes fail to decode
    // Verified by returning an empty image on failure
    #[test]
    fn test_decode_invalid_bytes() {
        assert!(decode_image(b"not an image").is_err());
    }

    // Tests missing files report a file system error
    // Verified by reporting every failure as a decode error
    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().expect("Failed to create temp directory");

        let result = load_image(dir.path().join("missing.png"));

        assert!(matches!(result, Err(MosaicError::FileSystem { .. })));
    }

    // Tests undecodable files report an image load error with their path
    // Verified by dropping the path from the error
    #[test]
    fn test_load_undecodable_file() {
        let dir = TempDir::new().expect("Failed to create temp directory");
        let path = dir.path().join("broken.png");
        std::fs::write(&path, b"garbage").expect("Failed to write test file");

        let result = load_image(&path);

        assert!(
            matches!(&result, Err(MosaicError::ImageLoad { path: reported, .. }) if *reported == path),
            "expected an image load error for {}: {result:?}",
            path.display()
        );
    }

    // Tests directory entries come back sorted by file name
    // Verified by removing the sort
    #[test]
    fn test_list_directory_sorted() {
        let dir = TempDir::new().expect("Failed to create temp directory");
        for name in ["c.png", "a.png", "b.png"] {
            std::fs::write(dir.path().join(name), b"").expect("Failed to write test file");
        }

        let names: Vec<String> = list_directory(dir.path())
            .expect("Failed to list directory")
            .iter()
            .map(|entry| entry.file_name().to_string_lossy().into_owned())
            .collect();

        assert_eq!(names, ["a.png", "b.png", "c.png"]);
    }

    // Tests listing a missing directory fails
    // Verified by returning an empty listing on failure
    #[test]
    fn test_list_missing_directory() {
        let dir = TempDir::new().expect("Failed to create temp directory");

        let result = list_directory(dir.path().join("absent"));

        assert!(matches!(result, Err(MosaicError::FileSystem { .. })));
    }
}
