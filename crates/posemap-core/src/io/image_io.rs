use std::path::Path;

use image::{GrayImage, ImageFormat, Luma};
use ndarray::{Array3, ArrayView2};

use crate::consts::COLOR_CHANNEL_COUNT;
use crate::error::{PosemapError, Result};

/// Load an image as an RGB tensor of shape `(3, height, width)`, values in [0.0, 1.0].
pub fn load_rgb_tensor(path: &Path) -> Result<Array3<f32>> {
    let img = image::open(path).map_err(|source| PosemapError::ImageLoad {
        path: path.to_path_buf(),
        source,
    })?;
    let rgb = img.to_rgb8();
    let (w, h) = rgb.dimensions();
    let mut data = Array3::<f32>::zeros((COLOR_CHANNEL_COUNT, h as usize, w as usize));

    for (col, row, pixel) in rgb.enumerate_pixels() {
        for (c, &v) in pixel.0.iter().enumerate() {
            data[[c, row as usize, col as usize]] = v as f32 / 255.0;
        }
    }

    Ok(data)
}

/// Save a single-channel map as 8-bit grayscale PNG, clamping to [0.0, 1.0].
pub fn save_map_png(map: ArrayView2<f32>, path: &Path) -> Result<()> {
    let (h, w) = map.dim();

    let mut img = GrayImage::new(w as u32, h as u32);
    for ((row, col), &v) in map.indexed_iter() {
        let val = (v.clamp(0.0, 1.0) * 255.0) as u8;
        img.put_pixel(col as u32, row as u32, Luma([val]));
    }

    img.save_with_format(path, ImageFormat::Png)?;
    Ok(())
}
