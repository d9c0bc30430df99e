//! Window icon loading.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use peek_common::PeekError;
use winit::window::Icon;

/// Decode a PNG into tightly packed RGBA8 pixels.
pub fn decode_png_rgba(path: &Path) -> Result<(Vec<u8>, u32, u32), PeekError> {
    let file = File::open(path)?;
    let mut decoder = png::Decoder::new(BufReader::new(file));
    decoder.set_transformations(png::Transformations::normalize_to_color8());
    let mut reader = decoder
        .read_info()
        .map_err(|e| PeekError::Other(format!("icon {}: {e}", path.display())))?;

    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader
        .next_frame(&mut buf)
        .map_err(|e| PeekError::Other(format!("icon {}: {e}", path.display())))?;
    let pixels = &buf[..info.buffer_size()];

    let rgba = match info.color_type {
        png::ColorType::Rgba => pixels.to_vec(),
        png::ColorType::Rgb => pixels
            .chunks_exact(3)
            .flat_map(|p| [p[0], p[1], p[2], 255])
            .collect(),
        png::ColorType::GrayscaleAlpha => pixels
            .chunks_exact(2)
            .flat_map(|p| [p[0], p[0], p[0], p[1]])
            .collect(),
        png::ColorType::Grayscale => pixels.iter().flat_map(|&g| [g, g, g, 255]).collect(),
        png::ColorType::Indexed => {
            return Err(PeekError::Other(format!(
                "icon {}: palette was not expanded",
                path.display()
            )))
        }
    };
    Ok((rgba, info.width, info.height))
}

/// Load the window icon, logging and skipping it on failure.
pub fn load_icon(path: &Path) -> Option<Icon> {
    let result = decode_png_rgba(path).and_then(|(rgba, w, h)| {
        Icon::from_rgba(rgba, w, h).map_err(|e| PeekError::Window(e.to_string()))
    });
    match result {
        Ok(icon) => Some(icon),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "window icon not loaded");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_png(path: &Path, color: png::ColorType, width: u32, height: u32, data: &[u8]) {
        let file = File::create(path).unwrap();
        let mut encoder = png::Encoder::new(std::io::BufWriter::new(file), width, height);
        encoder.set_color(color);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header().unwrap();
        writer.write_image_data(data).unwrap();
    }

    #[test]
    fn decodes_rgba() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("icon.png");
        let data = [255, 0, 0, 255, 0, 255, 0, 128];
        write_png(&path, png::ColorType::Rgba, 2, 1, &data);

        let (rgba, w, h) = decode_png_rgba(&path).unwrap();
        assert_eq!((w, h), (2, 1));
        assert_eq!(rgba, data);
    }

    #[test]
    fn expands_rgb_to_opaque_rgba() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("icon.png");
        write_png(&path, png::ColorType::Rgb, 1, 2, &[1, 2, 3, 4, 5, 6]);

        let (rgba, _, _) = decode_png_rgba(&path).unwrap();
        assert_eq!(rgba, vec![1, 2, 3, 255, 4, 5, 6, 255]);
    }

    #[test]
    fn expands_grayscale() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("icon.png");
        write_png(&path, png::ColorType::Grayscale, 2, 1, &[10, 20]);

        let (rgba, _, _) = decode_png_rgba(&path).unwrap();
        assert_eq!(rgba, vec![10, 10, 10, 255, 20, 20, 20, 255]);
    }

    #[test]
    fn bad_files_are_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("icon.png");
        std::fs::write(&path, b"not a png").unwrap();
        assert!(decode_png_rgba(&path).is_err());
        assert!(load_icon(&path).is_none());
        assert!(decode_png_rgba(&dir.path().join("missing.png")).is_err());
    }
}
