//! Slicing a source image into per-cell pieces and dumping them as PNG

use std::path::{Path, PathBuf};

use image::{DynamicImage, RgbaImage, imageops};
use ndarray::Array2;
use tracing::debug;

use crate::io::configuration::PIECE_FILE_EXTENSION;
use crate::io::error::{PuzzleError, Result, invalid_parameter};
use crate::spatial::grid::{CellIndex, GridDimensions};

/// Row-major grid of piece images
///
/// Slice `[row][column]` is the picture of the piece whose correct cell is
/// `(row, column)`.
#[derive(Debug, Clone)]
pub struct SlicedImage {
    pieces: Array2<RgbaImage>,
}

impl SlicedImage {
    /// Grid shape (rows, columns)
    pub fn shape(&self) -> (usize, usize) {
        self.pieces.dim()
    }

    /// Image of the piece belonging in `cell`
    pub fn piece(&self, cell: CellIndex) -> Option<&RgbaImage> {
        self.pieces.get([cell.row, cell.column])
    }

    /// Every piece image with its cell, row-major
    pub fn iter(&self) -> impl Iterator<Item = (CellIndex, &RgbaImage)> + '_ {
        self.pieces
            .indexed_iter()
            .map(|((row, column), piece)| (CellIndex::new(row, column), piece))
    }
}

/// Load a source image from disk
///
/// # Errors
///
/// Returns an error if the file cannot be opened or decoded
pub fn load_image(path: &Path) -> Result<DynamicImage> {
    image::open(path).map_err(|e| PuzzleError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })
}

// Integer boundary of slice `index` out of `count` along an axis of `extent` pixels.
// Consecutive slices share boundaries, so every pixel lands in exactly one slice.
fn slice_boundary(extent: u32, index: usize, count: usize) -> u32 {
    let boundary = u64::from(extent) * index as u64 / count as u64;
    u32::try_from(boundary).unwrap_or(extent)
}

/// Cut an image into `rows x columns` pieces of (near) equal size
///
/// Piece `(r, c)` covers columns `c*W/C .. (c+1)*W/C` and rows
/// `r*H/R .. (r+1)*H/R` of the source, using integer division.
///
/// # Errors
///
/// Returns an error if the image is narrower than the column count or
/// shorter than the row count, which would produce empty pieces
pub fn slice_image(image: &DynamicImage, dimensions: GridDimensions) -> Result<SlicedImage> {
    let source = image.to_rgba8();
    let (width, height) = source.dimensions();

    if (width as usize) < dimensions.columns() || (height as usize) < dimensions.rows() {
        return Err(invalid_parameter(
            "image",
            &format!("{width}x{height}"),
            &format!("too small to cut into a {dimensions} grid"),
        ));
    }

    let pieces = Array2::from_shape_fn(dimensions.shape(), |(row, column)| {
        let x0 = slice_boundary(width, column, dimensions.columns());
        let x1 = slice_boundary(width, column + 1, dimensions.columns());
        let y0 = slice_boundary(height, row, dimensions.rows());
        let y1 = slice_boundary(height, row + 1, dimensions.rows());
        imageops::crop_imm(&source, x0, y0, x1 - x0, y1 - y0).to_image()
    });

    debug!(
        width,
        height,
        grid = %dimensions,
        "image sliced"
    );
    Ok(SlicedImage { pieces })
}

/// File name of a piece dump: `<stem>_<row>_<column>.png`
pub fn piece_file_name(stem: &str, cell: CellIndex) -> String {
    format!(
        "{stem}_{}_{}.{PIECE_FILE_EXTENSION}",
        cell.row, cell.column
    )
}

/// Write every piece as a PNG file into `output_dir`
///
/// Returns the written paths in row-major order.
///
/// # Errors
///
/// Returns an error if:
/// - The output directory cannot be created
/// - A piece cannot be encoded or written
pub fn export_pieces(sliced: &SlicedImage, output_dir: &Path, stem: &str) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(output_dir).map_err(|e| PuzzleError::FileSystem {
        path: output_dir.to_path_buf(),
        operation: "create directory",
        source: e,
    })?;

    let mut written = Vec::with_capacity(sliced.pieces.len());
    for (cell, piece) in sliced.iter() {
        let path = output_dir.join(piece_file_name(stem, cell));
        piece.save(&path).map_err(|e| PuzzleError::ImageExport {
            path: path.clone(),
            source: e,
        })?;
        written.push(path);
    }

    debug!(count = written.len(), dir = %output_dir.display(), "pieces exported");
    Ok(written)
}
