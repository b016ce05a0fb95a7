use std::fs;
use std::io::Cursor;
use std::path::Path;
use raylib::prelude::*;
use exif::{Reader, Tag, Value, In};
use tracing::{debug, warn};

use crate::config::DisplayGeometry;
use crate::constants::*;
use crate::error::{PresentError, PresentResult};

/// A decoded photo, already scaled into the display budget and uploaded.
pub struct Photo {
    pub texture: Texture2D,
}

impl Photo {
    pub fn size(&self) -> (i32, i32) {
        (self.texture.width(), self.texture.height())
    }
}

// --- Thumbnail law: largest k <= 1 with w*k <= max_w and h*k <= max_h ---
pub fn fit_within(width: i32, height: i32, max_width: i32, max_height: i32) -> (i32, i32) {
    if width <= 0 || height <= 0 {
        return (0, 0);
    }
    let (max_width, max_height) = (max_width.max(1), max_height.max(1));
    if width <= max_width && height <= max_height {
        return (width, height);
    }

    // Integer cross-multiplication keeps the bound axis exact
    let (w, h) = (width as i64, height as i64);
    let (mw, mh) = (max_width as i64, max_height as i64);
    if w * mh >= h * mw {
        (max_width, ((h * mw / w) as i32).max(1))
    } else {
        (((w * mh / h) as i32).max(1), max_height)
    }
}

// Window minus the caption margins
pub fn photo_budget(geometry: &DisplayGeometry) -> (i32, i32) {
    let s = geometry.scale();
    (
        (geometry.width as f32 - PHOTO_MARGIN_X * s).round() as i32,
        (geometry.height as f32 - PHOTO_MARGIN_Y * s).round() as i32,
    )
}

/// Top-left corner for a photo of `size`: centered, then lifted towards the top.
pub fn photo_origin(geometry: &DisplayGeometry, size: (i32, i32)) -> (i32, i32) {
    let lift = (PHOTO_LIFT * geometry.scale()).round() as i32;
    (
        (geometry.width - size.0) / 2,
        (geometry.height - size.1) / 2 - lift,
    )
}

// --- Decode and thumbnail on the CPU side; Ok(None) when the file is absent ---
pub fn resolve_image(image_path: &Path, budget: (i32, i32)) -> PresentResult<Option<Image>> {
    if !image_path.is_file() {
        return Ok(None);
    }

    let mut image = load_image_with_exif_rotation(image_path)?;

    let (width, height) = fit_within(image.width(), image.height(), budget.0, budget.1);
    if (width, height) != (image.width(), image.height()) {
        debug!(
            "Thumbnailing {:?} from {}x{} to {}x{}",
            image_path, image.width(), image.height(), width, height
        );
        image.resize(width, height);
    }

    Ok(Some(image))
}

pub fn load_photo(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    image_path: &Path,
    geometry: &DisplayGeometry,
) -> PresentResult<Option<Photo>> {
    let Some(image) = resolve_image(image_path, photo_budget(geometry))? else {
        return Ok(None);
    };

    let texture = rl
        .load_texture_from_image(thread, &image)
        .map_err(|e| PresentError::decode(image_path, format!("failed to create texture: {}", e)))?;

    Ok(Some(Photo { texture }))
}

// --- Load Image, Apply EXIF Rotation ---
fn load_image_with_exif_rotation(image_path: &Path) -> PresentResult<Image> {
    let file_bytes = fs::read(image_path)?;

    let mut orientation = 1; // Default: no rotation

    // EXIF is only read reliably from JPEG
    let extension = image_path.extension().and_then(|s| s.to_str()).unwrap_or("").to_lowercase();
    if extension == "jpg" || extension == "jpeg" {
        match Reader::new().read_from_container(&mut Cursor::new(&file_bytes)) {
            Ok(exif) => {
                if let Some(field) = exif.get_field(Tag::Orientation, In::PRIMARY) {
                    if let Value::Short(values) = &field.value {
                        if let Some(value) = values.first() {
                            orientation = *value;
                        }
                    }
                }
            }
            Err(e) => {
                warn!("Could not read EXIF data for {:?}: {}", image_path, e);
            }
        }
    }

    // Extension hint is needed when loading from memory
    let mut image = Image::load_image_from_mem(&(".".to_string() + &extension), &file_bytes)
        .map_err(|e| PresentError::decode(image_path, e))?;

    apply_orientation(&mut image, orientation);
    if orientation != 1 {
        debug!("Applied EXIF orientation {} to {:?}", orientation, image_path);
    }

    Ok(image)
}

// 1 = normal, 3 = 180 deg, 6 = 90 deg CW, 8 = 90 deg CCW. Flips are ignored.
fn apply_orientation(image: &mut Image, orientation: u16) {
    match orientation {
        3 => {
            image.rotate_cw();
            image.rotate_cw();
        }
        6 => image.rotate_cw(),
        8 => image.rotate_ccw(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    // Uncompressed 24-bit BMP, bottom-up rows padded to 4 bytes
    fn write_bmp(path: &Path, width: u32, height: u32) {
        let row = (width * 3).div_ceil(4) * 4;
        let pixels = row * height;
        let mut bytes = Vec::new();
        bytes.extend_from_slice(b"BM");
        bytes.extend_from_slice(&(54 + pixels).to_le_bytes());
        bytes.extend_from_slice(&0u32.to_le_bytes());
        bytes.extend_from_slice(&54u32.to_le_bytes());
        bytes.extend_from_slice(&40u32.to_le_bytes());
        bytes.extend_from_slice(&(width as i32).to_le_bytes());
        bytes.extend_from_slice(&(height as i32).to_le_bytes());
        bytes.extend_from_slice(&1u16.to_le_bytes());
        bytes.extend_from_slice(&24u16.to_le_bytes());
        bytes.extend_from_slice(&0u32.to_le_bytes());
        bytes.extend_from_slice(&pixels.to_le_bytes());
        bytes.extend_from_slice(&2835i32.to_le_bytes());
        bytes.extend_from_slice(&2835i32.to_le_bytes());
        bytes.extend_from_slice(&0u32.to_le_bytes());
        bytes.extend_from_slice(&0u32.to_le_bytes());
        bytes.resize(54 + pixels as usize, 0x80);
        fs::write(path, bytes).expect("failed to write bmp");
    }

    #[test]
    fn fit_never_upscales() {
        assert_eq!(fit_within(200, 100, 980, 1620), (200, 100));
        assert_eq!(fit_within(980, 1620, 980, 1620), (980, 1620));
    }

    #[test]
    fn fit_shrinks_along_tighter_axis() {
        // Width bound
        assert_eq!(fit_within(4000, 3000, 980, 1620), (980, 735));
        // Height bound
        assert_eq!(fit_within(1000, 4000, 980, 1620), (405, 1620));
    }

    #[test]
    fn fit_stays_inside_box_and_keeps_aspect() {
        let cases = [(3024, 4032), (1920, 1080), (1234, 567), (7, 5000), (5000, 7)];
        for (w, h) in cases {
            let (fw, fh) = fit_within(w, h, 980, 1620);
            assert!(fw <= 980 && fh <= 1620, "{}x{} -> {}x{}", w, h, fw, fh);
            assert!(fw >= 1 && fh >= 1);
            let k = (980.0 / w as f64).min(1620.0 / h as f64).min(1.0);
            assert!((fw as f64 - w as f64 * k).abs() < 1.0);
            assert!((fh as f64 - h as f64 * k).abs() < 1.0);
        }
    }

    #[test]
    fn budget_matches_reference_margins() {
        assert_eq!(photo_budget(&DisplayGeometry::default()), (980, 1620));
        assert_eq!(
            photo_budget(&DisplayGeometry { width: 540, height: 960 }),
            (490, 810)
        );
    }

    #[test]
    fn origin_centers_and_lifts() {
        let geometry = DisplayGeometry::default();
        assert_eq!(photo_origin(&geometry, (980, 735)), (50, 492));
        assert_eq!(photo_origin(&geometry, (1080, 1920)), (0, -100));
    }

    #[test]
    fn missing_file_resolves_to_none() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let resolved = resolve_image(&temp_dir.path().join("a.jpg"), (980, 1620))
            .expect("missing file is not an error");
        assert!(resolved.is_none());
    }

    #[test]
    fn corrupt_file_is_a_decode_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("broken.jpg");
        fs::write(&path, b"definitely not a jpeg").expect("failed to write file");

        let err = resolve_image(&path, (980, 1620)).err().expect("decode should fail");
        assert!(matches!(err, PresentError::Decode { .. }), "got {}", err);
    }

    #[test]
    fn quarter_turn_orientations_swap_dimensions() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("wide.bmp");
        write_bmp(&path, 8, 4);

        for (orientation, expected) in [(1, (8, 4)), (3, (8, 4)), (6, (4, 8)), (8, (4, 8)), (2, (8, 4))] {
            let mut image = resolve_image(&path, (980, 1620))
                .expect("bmp should decode")
                .expect("file exists");
            apply_orientation(&mut image, orientation);
            assert_eq!((image.width(), image.height()), expected, "orientation {}", orientation);
        }
    }

    #[test]
    fn large_image_is_thumbnailed_into_budget() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("wide.bmp");
        write_bmp(&path, 40, 20);

        let image = resolve_image(&path, (10, 100))
            .expect("bmp should decode")
            .expect("file exists");
        assert_eq!((image.width(), image.height()), (10, 5));
    }

    #[test]
    fn small_image_keeps_its_size() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("small.bmp");
        write_bmp(&path, 6, 3);

        let image = resolve_image(&path, (980, 1620))
            .expect("bmp should decode")
            .expect("file exists");
        assert_eq!((image.width(), image.height()), (6, 3));
    }
}
