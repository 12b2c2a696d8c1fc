use eframe::egui;
use image::{ImageError, ImageFormat};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::{PaintError, PaintResult};
use crate::image::RasterImage;

/// Extensions offered when opening a picture. Saving always writes PNG.
pub const OPEN_EXTENSIONS: [&str; 6] = ["png", "jpg", "jpeg", "gif", "bmp", "webp"];

/// Append `.png` unless the file name already ends with it (any case).
pub fn with_png_extension(path: &Path) -> PathBuf {
    let has_png = path
        .file_name()
        .map(|name| name.to_string_lossy().to_lowercase().ends_with(".png"))
        .unwrap_or(false);
    if has_png {
        path.to_path_buf()
    } else {
        let mut name = path.as_os_str().to_owned();
        name.push(".png");
        PathBuf::from(name)
    }
}

/// Encode `image` as PNG. Returns the path actually written.
pub fn save_png(image: &RasterImage, path: &Path) -> PaintResult<PathBuf> {
    let path = with_png_extension(path);
    match image.pixels().save_with_format(&path, ImageFormat::Png) {
        Ok(()) => {
            log::info!("Saved {}x{} image to {}", image.width(), image.height(), path.display());
            Ok(path)
        }
        Err(ImageError::IoError(source)) => Err(PaintError::Io { path, source }),
        Err(source) => Err(PaintError::Encode { path, source }),
    }
}

/// Read and decode an image file
pub fn load_image(path: &Path) -> PaintResult<RasterImage> {
    let bytes = std::fs::read(path).map_err(|source| PaintError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let image = decode_image(&bytes).map_err(|source| PaintError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!("Opened {} ({}x{})", path.display(), image.width(), image.height());
    Ok(image)
}

/// Decode in-memory image bytes into an opaque RGB raster
pub fn decode_image(bytes: &[u8]) -> Result<RasterImage, ImageError> {
    let decoded = image::load_from_memory(bytes)?;
    log::debug!("Successfully decoded image: {}x{}", decoded.width(), decoded.height());
    Ok(RasterImage::new(decoded.to_rgb8()))
}

/// An image file dropped onto the window
#[derive(Debug, Clone)]
pub enum DroppedImage {
    Path(PathBuf),
    /// Contents delivered in memory, as on platforms without file paths
    Bytes { name: String, bytes: Arc<[u8]> },
}

impl DroppedImage {
    pub fn load(&self) -> PaintResult<RasterImage> {
        match self {
            DroppedImage::Path(path) => load_image(path),
            DroppedImage::Bytes { name, bytes } => {
                decode_image(bytes).map_err(|source| PaintError::Decode {
                    path: PathBuf::from(name),
                    source,
                })
            }
        }
    }
}

/// Picks up files dragged onto the window.
#[derive(Default)]
pub struct FileHandler;

impl FileHandler {
    pub fn new() -> Self {
        Self
    }

    /// The first supported image among files dropped this frame, if any
    pub fn take_dropped_image(&mut self, ctx: &egui::Context) -> Option<DroppedImage> {
        let dropped_files = ctx.input(|i| i.raw.dropped_files.clone());

        let mut found = None;
        for file in dropped_files {
            let file_name = file_name(&file);
            if found.is_some() {
                log::warn!("Only one image can be opened at a time, ignoring {}", file_name);
                continue;
            }
            if !is_image_file(&file) {
                log::warn!("Dropped file is not a supported type: {}", file_name);
                continue;
            }
            found = if let Some(bytes) = file.bytes {
                Some(DroppedImage::Bytes { name: file_name, bytes })
            } else if let Some(path) = file.path {
                Some(DroppedImage::Path(path))
            } else {
                log::warn!("Dropped file has no accessible data: {}", file_name);
                None
            };
        }
        found
    }

    /// Preview files being dragged over the application
    pub fn preview_files_being_dropped(&self, ctx: &egui::Context) {
        use egui::{Align2, Color32, FontId, Id, LayerId, Order};

        if ctx.input(|i| i.raw.hovered_files.is_empty()) {
            return;
        }

        let text = ctx.input(|i| {
            let mut text = "Dropping files:\n".to_owned();
            for file in &i.raw.hovered_files {
                if let Some(path) = &file.path {
                    text += &format!("\n{}", path.display());
                } else if !file.mime.is_empty() {
                    text += &format!("\n{}", file.mime);
                } else {
                    text += "\n(Path not available)";
                }
            }
            text
        });

        let painter = ctx.layer_painter(LayerId::new(Order::Foreground, Id::new("file_drop_target")));
        let screen_rect = ctx.screen_rect();
        painter.rect_filled(screen_rect, 0.0, Color32::from_black_alpha(192));
        painter.text(
            screen_rect.center(),
            Align2::CENTER_CENTER,
            text,
            FontId::proportional(20.0),
            Color32::WHITE,
        );
    }
}

fn file_name(file: &egui::DroppedFile) -> String {
    if let Some(path) = &file.path {
        path.display().to_string()
    } else if !file.name.is_empty() {
        file.name.clone()
    } else {
        "unknown".to_owned()
    }
}

/// Check if a file is an image based on MIME type or extension
fn is_image_file(file: &egui::DroppedFile) -> bool {
    if !file.mime.is_empty() {
        file.mime.starts_with("image/")
    } else if let Some(path) = &file.path {
        has_image_extension(path)
    } else {
        has_image_extension(Path::new(&file.name))
    }
}

/// Whether the extension names one of the formats `open` can decode
pub fn has_image_extension(path: &Path) -> bool {
    path.extension().is_some_and(|ext| {
        let ext = ext.to_string_lossy().to_lowercase();
        OPEN_EXTENSIONS.contains(&ext.as_str())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_png_extension_appended() {
        assert_eq!(with_png_extension(Path::new("/tmp/drawing")), PathBuf::from("/tmp/drawing.png"));
        assert_eq!(with_png_extension(Path::new("/tmp/a.jpg")), PathBuf::from("/tmp/a.jpg.png"));
    }

    #[test]
    fn test_png_extension_kept() {
        assert_eq!(with_png_extension(Path::new("/tmp/a.png")), PathBuf::from("/tmp/a.png"));
        assert_eq!(with_png_extension(Path::new("/tmp/A.PNG")), PathBuf::from("/tmp/A.PNG"));
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(decode_image(b"definitely not a png").is_err());
    }

    #[test]
    fn test_is_image_file() {
        let mut file = egui::DroppedFile {
            path: Some(PathBuf::from("/tmp/picture.PNG")),
            ..Default::default()
        };
        assert!(is_image_file(&file));

        file.path = Some(PathBuf::from("/tmp/notes.txt"));
        assert!(!is_image_file(&file));

        file.mime = "image/png".to_owned();
        assert!(is_image_file(&file));

        file.mime = "image/jpeg".to_owned();
        assert!(is_image_file(&file));

        file.mime = "text/plain".to_owned();
        assert!(!is_image_file(&file));
    }

    #[test]
    fn test_open_extensions() {
        for name in ["a.png", "b.JPG", "c.jpeg", "d.gif", "e.bmp", "f.webp"] {
            assert!(has_image_extension(Path::new(name)), "{name}");
        }
        assert!(!has_image_extension(Path::new("notes.txt")));
        assert!(!has_image_extension(Path::new("no_extension")));
    }
}
