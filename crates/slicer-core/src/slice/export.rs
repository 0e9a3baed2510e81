//! Crop, encode and write loop for slice export.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use log::{debug, info};

use super::{crop_rows, SliceBounds};
use crate::decode::LoadedImage;
use crate::encode::encode_png;
use crate::error::{SlicerError, SlicerResult};

/// One written slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SliceRecord {
    /// 1-based position, top to bottom.
    pub index: usize,
    pub top: u32,
    pub bottom: u32,
    pub height: u32,
    /// File the slice was written to.
    pub path: PathBuf,
}

/// Outcome of a completed export, used for the summary message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReport {
    pub destination: PathBuf,
    pub slices: Vec<SliceRecord>,
}

impl ExportReport {
    pub fn len(&self) -> usize {
        self.slices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }

    /// Human-readable summary listing every slice's range and height.
    pub fn summary(&self) -> String {
        let mut text = format!(
            "Slicing complete!\n{} slice(s) written\nSaved to: {}\n\nSlices:",
            self.slices.len(),
            self.destination.display()
        );
        for record in &self.slices {
            let bounds = SliceBounds::new(record.top, record.bottom);
            let _ = write!(text, "\n{}", slice_row(record.index, bounds));
        }
        text
    }
}

/// One summary line for a slice: `Slice {index}: y={top}-{bottom}, height={h}px`.
pub fn slice_row(index: usize, bounds: SliceBounds) -> String {
    format!(
        "Slice {}: y={}-{}, height={}px",
        index,
        bounds.top,
        bounds.bottom,
        bounds.height()
    )
}

/// File name for the slice at a 1-based index: `{base}_slice_{index:02}.png`.
pub fn slice_file_name(base_name: &str, index: usize) -> String {
    format!("{base_name}_slice_{index:02}.png")
}

/// Crop every boundary pair out of `image` and write it as PNG.
///
/// Pairs are processed in the order given, which is top to bottom when they
/// come from `compute_boundaries`. Zero-height pairs are skipped and do not
/// consume an index. The first failure aborts the loop; files written before
/// it are left in place.
///
/// # Errors
///
/// Returns `SlicerError::IoFailure` naming the slice path that could not be
/// encoded or written.
pub fn slice_and_export(
    image: &LoadedImage,
    boundaries: &[SliceBounds],
    destination: &Path,
    base_name: &str,
) -> SlicerResult<ExportReport> {
    let mut slices = Vec::with_capacity(boundaries.len());

    for bounds in boundaries.iter().filter(|b| b.height() > 0) {
        let index = slices.len() + 1;
        let path = destination.join(slice_file_name(base_name, index));

        let band = crop_rows(&image.pixels, *bounds);
        debug!(
            "Slice {}: crop box (0, {}, {}, {}), result {}x{}",
            index,
            bounds.top,
            image.width,
            bounds.bottom,
            band.width(),
            band.height()
        );

        let bytes = encode_png(&band).map_err(|e| SlicerError::io_failure(&path, e))?;
        std::fs::write(&path, bytes).map_err(|e| SlicerError::io_failure(&path, e))?;

        slices.push(SliceRecord {
            index,
            top: bounds.top,
            bottom: bounds.bottom,
            height: bounds.height(),
            path,
        });
    }

    info!(
        "Exported {} slice(s) of {}x{} image to {}",
        slices.len(),
        image.width,
        image.height,
        destination.display()
    );

    Ok(ExportReport {
        destination: destination.to_path_buf(),
        slices,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slice::compute_boundaries;
    use image::{DynamicImage, Rgb, RgbImage};

    fn tall_image(width: u32, height: u32) -> LoadedImage {
        let img = RgbImage::from_fn(width, height, |x, y| {
            Rgb([(x % 256) as u8, (y % 256) as u8, 42])
        });
        LoadedImage::new(DynamicImage::ImageRgb8(img))
    }

    #[test]
    fn test_slice_file_name() {
        assert_eq!(slice_file_name("page", 1), "page_slice_01.png");
        assert_eq!(slice_file_name("page", 12), "page_slice_12.png");
        assert_eq!(slice_file_name("page", 123), "page_slice_123.png");
    }

    #[test]
    fn test_slice_row() {
        assert_eq!(
            slice_row(2, SliceBounds::new(300, 1000)),
            "Slice 2: y=300-1000, height=700px"
        );
    }

    #[test]
    fn test_export_writes_each_slice() {
        let dir = tempfile::tempdir().unwrap();
        let image = tall_image(20, 100);
        let boundaries = compute_boundaries([30, 70], image.height);

        let report = slice_and_export(&image, &boundaries, dir.path(), "shot").unwrap();

        assert_eq!(report.len(), 3);
        let heights: Vec<u32> = report.slices.iter().map(|s| s.height).collect();
        assert_eq!(heights, vec![30, 40, 30]);

        for (i, record) in report.slices.iter().enumerate() {
            assert_eq!(record.index, i + 1);
            assert_eq!(
                record.path,
                dir.path().join(format!("shot_slice_{:02}.png", i + 1))
            );
            let written = image::open(&record.path).unwrap();
            assert_eq!(written.width(), 20);
            assert_eq!(written.height(), record.height);
        }
    }

    #[test]
    fn test_export_slice_content_matches_rows() {
        let dir = tempfile::tempdir().unwrap();
        let image = tall_image(4, 50);
        let boundaries = compute_boundaries([10], image.height);

        let report = slice_and_export(&image, &boundaries, dir.path(), "rows").unwrap();
        let second = image::open(&report.slices[1].path).unwrap().to_rgb8();

        // First row of the second slice is row 10 of the source
        assert_eq!(second.get_pixel(0, 0), &Rgb([0, 10, 42]));
        assert_eq!(second.get_pixel(3, 39), &Rgb([3, 49, 42]));
    }

    #[test]
    fn test_export_skips_degenerate_pairs() {
        let dir = tempfile::tempdir().unwrap();
        let image = tall_image(4, 10);
        let boundaries = vec![
            SliceBounds::new(0, 5),
            SliceBounds::new(5, 5),
            SliceBounds::new(5, 10),
        ];

        let report = slice_and_export(&image, &boundaries, dir.path(), "x").unwrap();
        assert_eq!(report.len(), 2);
        assert_eq!(report.slices[1].index, 2);
        assert!(!dir.path().join("x_slice_03.png").exists());
    }

    #[test]
    fn test_export_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("does-not-exist");
        let image = tall_image(4, 10);
        let boundaries = compute_boundaries([], image.height);

        let err = slice_and_export(&image, &boundaries, &missing, "x").unwrap_err();
        match err {
            SlicerError::IoFailure { path, .. } => {
                assert_eq!(path, missing.join("x_slice_01.png"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_export_keeps_earlier_files_on_failure() {
        let dir = tempfile::tempdir().unwrap();
        // A directory where the second slice should go makes its write fail
        std::fs::create_dir(dir.path().join("x_slice_02.png")).unwrap();
        let image = tall_image(4, 10);
        let boundaries = compute_boundaries([3, 6], image.height);

        let result = slice_and_export(&image, &boundaries, dir.path(), "x");
        assert!(matches!(result, Err(SlicerError::IoFailure { .. })));
        assert!(dir.path().join("x_slice_01.png").is_file());
        assert!(!dir.path().join("x_slice_03.png").exists());
    }

    #[test]
    fn test_summary_lists_every_slice() {
        let report = ExportReport {
            destination: PathBuf::from("/out"),
            slices: vec![
                SliceRecord {
                    index: 1,
                    top: 0,
                    bottom: 300,
                    height: 300,
                    path: PathBuf::from("/out/a_slice_01.png"),
                },
                SliceRecord {
                    index: 2,
                    top: 300,
                    bottom: 1000,
                    height: 700,
                    path: PathBuf::from("/out/a_slice_02.png"),
                },
            ],
        };

        let summary = report.summary();
        assert!(summary.starts_with("Slicing complete!\n2 slice(s) written\nSaved to: /out"));
        assert!(summary.contains("Slice 1: y=0-300, height=300px"));
        assert!(summary.ends_with("Slice 2: y=300-1000, height=700px"));
    }
}
