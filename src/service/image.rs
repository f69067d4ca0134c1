use image::{DynamicImage, GrayImage, ImageFormat, Luma};
use log::info;
use crate::config::config::validate_input;
use crate::error::{ConversionError, Result};
use crate::models::bitmap::TemporaryBitmap;
use crate::models::image::{BinarizeInput, BinarizeOutput};
use crate::service::traits::i_service::ImageServiceTrait;
use crate::utils::file::temp_bitmap_path;

/// 灰階後依門檻二值化：低於門檻為黑（0），其餘為白（255）
pub fn threshold_image(img: &DynamicImage, threshold: u8) -> GrayImage {
    let mut gray = img.to_luma8();
    for pixel in gray.pixels_mut() {
        *pixel = Luma([if pixel[0] < threshold { 0 } else { 255 }]);
    }
    gray
}

pub struct ImageService;

impl ImageService {
    pub fn new() -> Self {
        ImageService
    }
}

impl Default for ImageService {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageServiceTrait for ImageService {
    fn binarize(&self, input: BinarizeInput) -> Result<BinarizeOutput> {
        let input_path = validate_input(&input.input_path)?;

        info!("載入圖片並轉換為黑白圖：{}", input_path.display());
        let img = image::open(input_path).map_err(|source| ConversionError::ImageLoad {
            path: input_path.to_path_buf(),
            source,
        })?;
        let bw = threshold_image(&img, input.threshold);

        // 先建立守衛，寫到一半失敗的檔案也會被清掉
        let bitmap = TemporaryBitmap::new(temp_bitmap_path(input_path)?);
        bw.save_with_format(bitmap.path(), ImageFormat::Bmp)
            .map_err(|source| ConversionError::ImageWrite {
                path: bitmap.path().to_path_buf(),
                source,
            })?;
        info!("黑白圖已寫入：{}（{}x{}）", bitmap.path().display(), bw.width(), bw.height());

        Ok(BinarizeOutput {
            width: bw.width(),
            height: bw.height(),
            bitmap,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use crate::config::config::THRESHOLD;
    use crate::utils::utils::generate_uniqueness_token;

    fn gradient() -> DynamicImage {
        DynamicImage::ImageLuma8(GrayImage::from_fn(256, 1, |x, _| Luma([x as u8])))
    }

    #[test]
    fn pixels_below_threshold_turn_black() {
        let bw = threshold_image(&gradient(), THRESHOLD);
        for x in 0..256u32 {
            let expected = if x < 128 { 0 } else { 255 };
            assert_eq!(bw.get_pixel(x, 0)[0], expected, "pixel {}", x);
        }
    }

    #[test]
    fn thresholding_is_idempotent() {
        let once = threshold_image(&gradient(), THRESHOLD);
        let twice = threshold_image(&DynamicImage::ImageLuma8(once.clone()), THRESHOLD);
        assert_eq!(once, twice);
        assert_eq!(threshold_image(&gradient(), THRESHOLD), once);
    }

    #[test]
    fn color_input_is_converted_to_gray_first() {
        let rgb = image::RgbImage::from_fn(2, 1, |x, _| {
            if x == 0 { image::Rgb([10, 20, 30]) } else { image::Rgb([250, 240, 230]) }
        });
        let bw = threshold_image(&DynamicImage::ImageRgb8(rgb), THRESHOLD);
        assert_eq!(bw.get_pixel(0, 0)[0], 0);
        assert_eq!(bw.get_pixel(1, 0)[0], 255);
    }

    #[test]
    fn binarize_writes_bitmap_and_cleans_up_on_drop() {
        let dir = std::env::temp_dir().join(format!("png_to_dxf_image_{}", generate_uniqueness_token()));
        fs::create_dir_all(&dir).unwrap();
        let input = dir.join("shape.png");
        gradient().save(&input).unwrap();

        let output = ImageService::new()
            .binarize(BinarizeInput { input_path: input.clone(), threshold: THRESHOLD })
            .unwrap();
        let bitmap_path: PathBuf = output.bitmap.path().to_path_buf();
        assert_eq!((output.width, output.height), (256, 1));
        assert!(bitmap_path.exists());
        assert_eq!(bitmap_path.parent(), Some(dir.as_path()));

        let written = image::open(&bitmap_path).unwrap().to_luma8();
        assert!(written.pixels().all(|p| p[0] == 0 || p[0] == 255));

        drop(output);
        assert!(!bitmap_path.exists());
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn undecodable_png_is_a_load_error() {
        let dir = std::env::temp_dir().join(format!("png_to_dxf_broken_{}", generate_uniqueness_token()));
        fs::create_dir_all(&dir).unwrap();
        let input = dir.join("broken.png");
        fs::write(&input, b"not an image").unwrap();

        let err = ImageService::new()
            .binarize(BinarizeInput { input_path: input, threshold: THRESHOLD })
            .unwrap_err();
        assert!(matches!(err, ConversionError::ImageLoad { .. }));
        assert_eq!(fs::read_dir(&dir).unwrap().count(), 1);
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn wrong_extension_is_rejected_before_decoding() {
        let dir = std::env::temp_dir().join(format!("png_to_dxf_ext_{}", generate_uniqueness_token()));
        fs::create_dir_all(&dir).unwrap();
        let input = dir.join("photo.jpg");
        fs::write(&input, b"whatever").unwrap();

        let err = ImageService::new()
            .binarize(BinarizeInput { input_path: input, threshold: THRESHOLD })
            .unwrap_err();
        assert!(matches!(err, ConversionError::InputFormat(_)));
        fs::remove_dir_all(&dir).unwrap();
    }

    #[cfg(unix)]
    #[test]
    fn unwritable_directory_is_a_write_error_without_leftovers() {
        use std::os::unix::fs::PermissionsExt;

        let dir = std::env::temp_dir().join(format!("png_to_dxf_readonly_{}", generate_uniqueness_token()));
        fs::create_dir_all(&dir).unwrap();
        let input = dir.join("shape.png");
        gradient().save(&input).unwrap();
        fs::set_permissions(&dir, fs::Permissions::from_mode(0o555)).unwrap();

        // root 不受目錄權限限制，此時無法製造寫入失敗
        let check = dir.join("writable_check");
        if fs::write(&check, b"").is_ok() {
            fs::remove_file(&check).unwrap();
            fs::set_permissions(&dir, fs::Permissions::from_mode(0o755)).unwrap();
            fs::remove_dir_all(&dir).unwrap();
            return;
        }

        let result = ImageService::new().binarize(BinarizeInput { input_path: input, threshold: THRESHOLD });

        fs::set_permissions(&dir, fs::Permissions::from_mode(0o755)).unwrap();
        let err = result.unwrap_err();
        assert!(matches!(err, ConversionError::ImageWrite { .. }));
        let leftovers: Vec<PathBuf> = fs::read_dir(&dir)
            .unwrap()
            .map(|entry| entry.unwrap().path())
            .filter(|path| path.extension().map(|ext| ext == "bmp").unwrap_or(false))
            .collect();
        assert!(leftovers.is_empty());
        fs::remove_dir_all(&dir).unwrap();
    }
}
