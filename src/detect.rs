//! Image format detection from file signatures.

use crate::error::{Error, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Raster formats whose dimensions can be read from the file header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    /// Portable Network Graphics
    Png,
    /// JPEG / JFIF
    Jpeg,
    /// GIF87a / GIF89a
    Gif,
    /// Windows bitmap
    Bmp,
    /// WebP (RIFF container)
    WebP,
    /// TIFF, either byte order
    Tiff,
}

impl ImageFormat {
    /// The matching `image` crate format.
    pub fn to_image_format(self) -> image::ImageFormat {
        match self {
            ImageFormat::Png => image::ImageFormat::Png,
            ImageFormat::Jpeg => image::ImageFormat::Jpeg,
            ImageFormat::Gif => image::ImageFormat::Gif,
            ImageFormat::Bmp => image::ImageFormat::Bmp,
            ImageFormat::WebP => image::ImageFormat::WebP,
            ImageFormat::Tiff => image::ImageFormat::Tiff,
        }
    }

    /// MIME type of the format.
    pub fn mime_type(&self) -> &'static str {
        self.to_image_format().to_mime_type()
    }

    /// Conventional file extension.
    pub fn extension(&self) -> &'static str {
        self.to_image_format()
            .extensions_str()
            .first()
            .copied()
            .unwrap_or_default()
    }
}

impl TryFrom<image::ImageFormat> for ImageFormat {
    type Error = Error;

    fn try_from(format: image::ImageFormat) -> Result<Self> {
        match format {
            image::ImageFormat::Png => Ok(ImageFormat::Png),
            image::ImageFormat::Jpeg => Ok(ImageFormat::Jpeg),
            image::ImageFormat::Gif => Ok(ImageFormat::Gif),
            image::ImageFormat::Bmp => Ok(ImageFormat::Bmp),
            image::ImageFormat::WebP => Ok(ImageFormat::WebP),
            image::ImageFormat::Tiff => Ok(ImageFormat::Tiff),
            other => Err(Error::UnsupportedFormat(format!(
                "{} images are not supported",
                other.to_mime_type()
            ))),
        }
    }
}

impl std::fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ImageFormat::Png => "PNG",
            ImageFormat::Jpeg => "JPEG",
            ImageFormat::Gif => "GIF",
            ImageFormat::Bmp => "BMP",
            ImageFormat::WebP => "WebP",
            ImageFormat::Tiff => "TIFF",
        };
        f.write_str(name)
    }
}

/// Header prefix handed to the signature sniffer.
const HEADER_LEN: u64 = 32;

/// Detect the image format of a file from its first bytes.
///
/// # Arguments
/// * `path` - Path to the image file
///
/// # Returns
/// * `Ok(ImageFormat)` if the header matches a supported signature
/// * `Err(Error::ResourceNotFound)` if the file does not exist
/// * `Err(Error::UnsupportedFormat)` otherwise
///
/// # Example
/// ```no_run
/// use slidefit::detect::detect_format_from_path;
///
/// let format = detect_format_from_path("assets/title_background.png").unwrap();
/// println!("Format: {}", format);
/// ```
pub fn detect_format_from_path<P: AsRef<Path>>(path: P) -> Result<ImageFormat> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| Error::from_io(e, path))?;
    let mut header = Vec::with_capacity(HEADER_LEN as usize);
    BufReader::new(file).take(HEADER_LEN).read_to_end(&mut header)?;
    detect_format_from_bytes(&header)
}

/// Detect the image format from the leading bytes of the data.
///
/// Only the signature is inspected; the rest of the data is not validated.
pub fn detect_format_from_bytes(data: &[u8]) -> Result<ImageFormat> {
    let format = image::guess_format(data)?;
    ImageFormat::try_from(format)
}

/// Check if bytes start with a supported image signature.
pub fn is_image_bytes(data: &[u8]) -> bool {
    detect_format_from_bytes(data).is_ok()
}
