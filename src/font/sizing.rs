//! Pixel size selection for the icon font.

use crate::config::ICON_FONT_REFERENCE_SIZE;

/// Whether computed sizes are snapped to smooth sizes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SizingPolicy {
    /// Use the computed size as is.
    Exact,
    /// Round down to the nearest size in the list (sorted ascending).
    Smooth(Vec<u32>),
}

impl SizingPolicy {
    pub fn apply(&self, pixel_size: u32) -> u32 {
        match self {
            SizingPolicy::Exact => pixel_size,
            SizingPolicy::Smooth(sizes) => smooth_pixel_size(pixel_size, sizes),
        }
    }
}

/// Largest glyph size fitting a `width` x `height` box, given the widest glyph
/// advance measured at the reference size.
///
/// The binding dimension decides the formula: a narrow box scales the width by
/// the measured ratio, a wide box divides the height by it.
pub fn fit_pixel_size(width: u32, height: u32, max_width: u32) -> u32 {
    let reference = u64::from(ICON_FONT_REFERENCE_SIZE);
    let max_width = u64::from(max_width.max(1));
    let size = if width < height {
        u64::from(width) * max_width / reference
    } else {
        u64::from(height) * reference / max_width
    };
    u32::try_from(size).unwrap_or(u32::MAX)
}

/// Snap down to the closest smooth size; sizes below the smallest one are kept.
pub fn smooth_pixel_size(pixel_size: u32, smooth_sizes: &[u32]) -> u32 {
    let upper = smooth_sizes.partition_point(|&s| s <= pixel_size);
    if upper == 0 {
        return pixel_size;
    }
    smooth_sizes[upper - 1]
}
