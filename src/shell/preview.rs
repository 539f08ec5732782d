//! Image selection
//!
//! Checks a chosen file: its extension names an image format and its leading
//! bytes carry that format's signature. Independent of the credential store.

use crate::error::PreviewError;
use std::fmt;
use std::fs::{self, File};
use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// Formats recognised by their signature
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Jpeg,
    Gif,
    Bmp,
}

/// Bytes read from the start of a file; the BMP file header is the longest
const HEADER_LEN: usize = 14;

/// Smallest BMP pixel data offset: file header plus the 12 byte core DIB header
const BMP_MIN_PIXEL_OFFSET: u32 = 26;

impl ImageFormat {
    /// Maps a file extension, case-insensitively
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "png" => Some(ImageFormat::Png),
            "jpg" | "jpeg" => Some(ImageFormat::Jpeg),
            "gif" => Some(ImageFormat::Gif),
            "bmp" => Some(ImageFormat::Bmp),
            _ => None,
        }
    }

    /// Identifies a format from the first bytes of a file
    pub fn sniff(header: &[u8]) -> Option<Self> {
        if header.starts_with(&[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]) {
            Some(ImageFormat::Png)
        } else if header.starts_with(&[0xFF, 0xD8, 0xFF]) {
            Some(ImageFormat::Jpeg)
        } else if header.starts_with(b"GIF87a") || header.starts_with(b"GIF89a") {
            Some(ImageFormat::Gif)
        } else if is_bmp_header(header) {
            Some(ImageFormat::Bmp)
        } else {
            None
        }
    }
}

/// `BM`, file size, two zero reserved words, pixel data offset (little endian)
fn is_bmp_header(header: &[u8]) -> bool {
    let Some(header) = header.get(..HEADER_LEN) else {
        return false;
    };
    let le_u32 = |at: usize| {
        u32::from_le_bytes([header[at], header[at + 1], header[at + 2], header[at + 3]])
    };

    let file_size = le_u32(2);
    let reserved = le_u32(6);
    let pixel_offset = le_u32(10);

    header.starts_with(b"BM")
        && reserved == 0
        && pixel_offset >= BMP_MIN_PIXEL_OFFSET
        && file_size >= pixel_offset
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ImageFormat::Png => "PNG",
            ImageFormat::Jpeg => "JPEG",
            ImageFormat::Gif => "GIF",
            ImageFormat::Bmp => "BMP",
        };
        f.write_str(name)
    }
}

/// The image currently shown in the preview area
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSelection {
    pub path: PathBuf,
    pub file_name: String,
    pub size_bytes: u64,
    pub format: ImageFormat,
}

/// Validates `path` as an image and describes it for the preview.
pub fn select_image(path: &Path) -> Result<ImageSelection, PreviewError> {
    let metadata = fs::metadata(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => PreviewError::NotFound(path.to_path_buf()),
        _ => PreviewError::Unreadable {
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    if !metadata.is_file() {
        return Err(PreviewError::NotAFile(path.to_path_buf()));
    }

    let unsupported = || PreviewError::UnsupportedFormat(path.to_path_buf());
    let expected = path
        .extension()
        .and_then(|ext| ext.to_str())
        .and_then(ImageFormat::from_extension)
        .ok_or_else(unsupported)?;

    let unreadable = |source| PreviewError::Unreadable {
        path: path.to_path_buf(),
        source,
    };
    let mut header = Vec::with_capacity(HEADER_LEN);
    File::open(path)
        .map_err(unreadable)?
        .take(HEADER_LEN as u64)
        .read_to_end(&mut header)
        .map_err(unreadable)?;

    let format = ImageFormat::sniff(&header)
        .filter(|found| *found == expected)
        .ok_or_else(unsupported)?;

    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    Ok(ImageSelection {
        path: path.to_path_buf(),
        file_name,
        size_bytes: metadata.len(),
        format,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    // 58 byte file, pixel data at 54
    const BMP_HEADER: &[u8] = b"BM\x3a\x00\x00\x00\x00\x00\x00\x00\x36\x00\x00\x00";

    #[test]
    fn test_sniff_formats() {
        assert_eq!(
            ImageFormat::sniff(b"\x89PNG\r\n\x1a\n...."),
            Some(ImageFormat::Png)
        );
        assert_eq!(ImageFormat::sniff(b"\xff\xd8\xff\xe0"), Some(ImageFormat::Jpeg));
        assert_eq!(ImageFormat::sniff(b"GIF89a"), Some(ImageFormat::Gif));
        assert_eq!(ImageFormat::sniff(BMP_HEADER), Some(ImageFormat::Bmp));
        assert_eq!(ImageFormat::sniff(b"BM\x00\x00"), None);
        assert_eq!(ImageFormat::sniff(b"BMW is a car"), None);
        assert_eq!(ImageFormat::sniff(b"BMW is a car, a fast one"), None);
        assert_eq!(ImageFormat::sniff(b"hello"), None);
        assert_eq!(ImageFormat::sniff(b""), None);
    }

    #[test]
    fn test_select_png() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("logo.png");
        fs::write(&path, b"\x89PNG\r\n\x1a\n0123456789").unwrap();

        let selection = select_image(&path).unwrap();
        assert_eq!(selection.file_name, "logo.png");
        assert_eq!(selection.size_bytes, 18);
        assert_eq!(selection.format, ImageFormat::Png);
    }

    #[test]
    fn test_select_rejects_bad_paths() {
        let dir = tempdir().unwrap();
        assert!(matches!(
            select_image(&dir.path().join("missing.png")),
            Err(PreviewError::NotFound(_))
        ));
        assert!(matches!(
            select_image(dir.path()),
            Err(PreviewError::NotAFile(_))
        ));

        let text = dir.path().join("notes.png");
        fs::write(&text, "just text").unwrap();
        assert!(matches!(
            select_image(&text),
            Err(PreviewError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_extension_must_match_signature() {
        let dir = tempdir().unwrap();

        let png_as_txt = dir.path().join("notes.txt");
        fs::write(&png_as_txt, b"\x89PNG\r\n\x1a\n0123456789").unwrap();
        assert!(matches!(
            select_image(&png_as_txt),
            Err(PreviewError::UnsupportedFormat(_))
        ));

        let png_as_gif = dir.path().join("logo.gif");
        fs::write(&png_as_gif, b"\x89PNG\r\n\x1a\n0123456789").unwrap();
        assert!(matches!(
            select_image(&png_as_gif),
            Err(PreviewError::UnsupportedFormat(_))
        ));

        let text_as_bmp = dir.path().join("readme.bmp");
        fs::write(&text_as_bmp, "BMW is a car").unwrap();
        assert!(matches!(
            select_image(&text_as_bmp),
            Err(PreviewError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_select_bmp_with_upper_case_extension() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("photo.BMP");
        let mut bytes = BMP_HEADER.to_vec();
        bytes.resize(58, 0);
        fs::write(&path, &bytes).unwrap();

        let selection = select_image(&path).unwrap();
        assert_eq!(selection.format, ImageFormat::Bmp);
        assert_eq!(selection.size_bytes, 58);
    }

    #[test]
    fn test_from_extension() {
        assert_eq!(ImageFormat::from_extension("JPG"), Some(ImageFormat::Jpeg));
        assert_eq!(ImageFormat::from_extension("jpeg"), Some(ImageFormat::Jpeg));
        assert_eq!(ImageFormat::from_extension("txt"), None);
    }
}
