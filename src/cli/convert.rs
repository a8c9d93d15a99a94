//! Converting a single file or image
use std::{
    ffi::OsString,
    path::{Path, PathBuf},
};

use bitgrid::{Layout, PixelGrid};
use color_eyre::eyre::{self, eyre, WrapErr};
use image::{ImageFormat, ImageReader};
use log::{debug, info};

/// Which way to convert
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Direction {
    /// File to image
    Encode,
    /// Image to file
    Decode,
}

impl Direction {
    /// Convert the file at `input` into `out_dir`, returning the written path
    pub fn convert(self, input: &Path, out_dir: &Path, layout: Layout) -> eyre::Result<PathBuf> {
        match self {
            Self::Encode => encode_file(input, out_dir, layout),
            Self::Decode => decode_image(input, out_dir, layout),
        }
    }
}

/// The path of the file written for `input`
///
/// The last extension of the input is dropped. Images get a `.png` suffix,
/// decoded files have none.
pub fn output_path(direction: Direction, input: &Path, out_dir: &Path) -> eyre::Result<PathBuf> {
    let stem = input
        .file_stem()
        .ok_or_else(|| eyre!("No file name in `{}`", input.display()))?;
    let mut name = OsString::from(stem);
    if direction == Direction::Encode {
        name.push(".png");
    }
    Ok(out_dir.join(name))
}

/// Store the contents of `input` as a PNG image in `out_dir`
pub fn encode_file(input: &Path, out_dir: &Path, layout: Layout) -> eyre::Result<PathBuf> {
    let data = std::fs::read(input)
        .wrap_err_with(|| format!("Failed to read file `{}`", input.display()))?;
    let grid = layout
        .encode(&data)
        .wrap_err_with(|| format!("Failed to encode `{}`", input.display()))?;
    debug!("{:?}", grid);

    let out_path = output_path(Direction::Encode, input, out_dir)?;
    grid.to_image()
        .save_with_format(&out_path, ImageFormat::Png)
        .wrap_err_with(|| format!("Failed to save image `{}`", out_path.display()))?;
    info!("Saved image to '{}'", out_path.display());
    Ok(out_path)
}

/// Read the image at `input` and store the decoded bytes in `out_dir`
pub fn decode_image(input: &Path, out_dir: &Path, layout: Layout) -> eyre::Result<PathBuf> {
    let image = ImageReader::open(input)
        .and_then(|reader| reader.with_guessed_format())
        .wrap_err_with(|| format!("Failed to open image `{}`", input.display()))?
        .decode()
        .wrap_err_with(|| format!("Failed to read image `{}`", input.display()))?
        .into_luma8();
    let grid = PixelGrid::from_image(&image)
        .wrap_err_with(|| format!("Unsupported image `{}`", input.display()))?;
    let data = layout
        .decode(&grid)
        .wrap_err_with(|| format!("Failed to decode `{}`", input.display()))?;

    let out_path = output_path(Direction::Decode, input, out_dir)?;
    std::fs::write(&out_path, &data)
        .wrap_err_with(|| format!("Failed to write file `{}`", out_path.display()))?;
    info!("Saved file to '{}'", out_path.display());
    Ok(out_path)
}
