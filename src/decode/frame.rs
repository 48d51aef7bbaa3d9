// Greyscale frame buffer and the per-frame metrics the video feature
// extractor averages: brightness, frame difference, Laplacian variance,
// and banded edge density.

/// A single decoded frame reduced to 8-bit greyscale.
#[derive(Debug, Clone)]
pub struct GrayFrame {
    pub width: usize,
    pub height: usize,
    pub data: Vec<u8>,
}

impl GrayFrame {
    /// Build a greyscale frame from packed RGB24 pixel data using Rec.601
    /// luma weights. Trailing bytes beyond width*height*3 are ignored;
    /// missing pixels come out black.
    pub fn from_rgb24(width: usize, height: usize, rgb: &[u8]) -> Self {
        let n = width * height;
        let mut data = vec![0u8; n];
        for (i, px) in rgb.chunks_exact(3).take(n).enumerate() {
            let luma =
                (299 * px[0] as u32 + 587 * px[1] as u32 + 114 * px[2] as u32) / 1000;
            data[i] = luma as u8;
        }
        Self { width, height, data }
    }

    #[cfg(test)]
    pub fn from_gray(width: usize, height: usize, data: Vec<u8>) -> Self {
        assert_eq!(data.len(), width * height);
        Self { width, height, data }
    }

    /// Mean pixel value (average brightness, 0-255 scale).
    pub fn mean(&self) -> f64 {
        if self.data.is_empty() {
            return 0.0;
        }
        let sum: u64 = self.data.iter().map(|&p| p as u64).sum();
        sum as f64 / self.data.len() as f64
    }

    /// Mean absolute pixel-wise difference against another frame.
    /// Compares the overlapping prefix when dimensions disagree.
    pub fn mean_abs_diff(&self, other: &GrayFrame) -> f64 {
        let n = self.data.len().min(other.data.len());
        if n == 0 {
            return 0.0;
        }
        let sum: u64 = self.data[..n]
            .iter()
            .zip(&other.data[..n])
            .map(|(&a, &b)| (a as i64 - b as i64).unsigned_abs())
            .sum();
        sum as f64 / n as f64
    }

    /// Variance of the discrete 3x3 Laplacian response; a standard
    /// focus/detail proxy (larger = sharper).
    pub fn laplacian_variance(&self) -> f64 {
        if self.width == 0 || self.height == 0 {
            return 0.0;
        }
        let (w, h) = (self.width, self.height);
        let at = |x: usize, y: usize| self.data[y * w + x] as f64;

        let mut sum = 0.0;
        let mut sum_sq = 0.0;
        for y in 0..h {
            let up = mirror(y as isize - 1, h);
            let down = mirror(y as isize + 1, h);
            for x in 0..w {
                let left = mirror(x as isize - 1, w);
                let right = mirror(x as isize + 1, w);
                let v = at(left, y) + at(right, y) + at(x, up) + at(x, down)
                    - 4.0 * at(x, y);
                sum += v;
                sum_sq += v * v;
            }
        }
        let n = (w * h) as f64;
        let mean = sum / n;
        sum_sq / n - mean * mean
    }

    /// Binary edge density of the band starting at `band_start` of the
    /// frame height: Sobel gradient magnitude with a low/high double
    /// threshold (weak edges survive next to strong ones), averaged as
    /// edge intensity normalized to [0,1].
    pub fn band_edge_density(&self, band_start: f64, low: f64, high: f64) -> f64 {
        let start_row = (band_start * self.height as f64) as usize;
        if start_row >= self.height || self.width == 0 {
            return 0.0;
        }
        let w = self.width;
        let h = self.height - start_row;
        let band = &self.data[start_row * w..];
        let at = |x: usize, y: usize| band[y * w + x] as f64;

        // Sobel L1 magnitude
        let mut mag = vec![0.0f64; w * h];
        for y in 0..h {
            let up = mirror(y as isize - 1, h);
            let down = mirror(y as isize + 1, h);
            for x in 0..w {
                let left = mirror(x as isize - 1, w);
                let right = mirror(x as isize + 1, w);
                let gx = at(right, up) + 2.0 * at(right, y) + at(right, down)
                    - at(left, up) - 2.0 * at(left, y) - at(left, down);
                let gy = at(left, down) + 2.0 * at(x, down) + at(right, down)
                    - at(left, up) - 2.0 * at(x, up) - at(right, up);
                mag[y * w + x] = gx.abs() + gy.abs();
            }
        }

        // Double threshold: strong edges always count, weak edges count
        // when an 8-neighbor is strong
        let strong = |x: isize, y: isize| -> bool {
            if x < 0 || y < 0 || x >= w as isize || y >= h as isize {
                return false;
            }
            mag[y as usize * w + x as usize] >= high
        };

        let mut edge_sum = 0u64;
        for y in 0..h as isize {
            for x in 0..w as isize {
                let m = mag[y as usize * w + x as usize];
                let is_edge = if m >= high {
                    true
                } else if m >= low {
                    let mut found = false;
                    'scan: for dy in -1..=1 {
                        for dx in -1..=1 {
                            if (dx != 0 || dy != 0) && strong(x + dx, y + dy) {
                                found = true;
                                break 'scan;
                            }
                        }
                    }
                    found
                } else {
                    false
                };
                if is_edge {
                    edge_sum += 255;
                }
            }
        }

        (edge_sum as f64 / (w * h) as f64) / 255.0
    }
}

/// Reflect an index back into [0, n) without repeating the border pixel.
fn mirror(i: isize, n: usize) -> usize {
    if n <= 1 {
        return 0;
    }
    let n = n as isize;
    let mut i = i;
    if i < 0 {
        i = -i;
    }
    if i >= n {
        i = 2 * n - 2 - i;
    }
    i as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat(width: usize, height: usize, value: u8) -> GrayFrame {
        GrayFrame::from_gray(width, height, vec![value; width * height])
    }

    #[test]
    fn test_from_rgb24_luma() {
        // Pure red, green, blue pixels with Rec.601 weights
        let rgb = [255, 0, 0, 0, 255, 0, 0, 0, 255];
        let frame = GrayFrame::from_rgb24(3, 1, &rgb);
        assert_eq!(frame.data[0], 76); // 0.299 * 255
        assert_eq!(frame.data[1], 149); // 0.587 * 255
        assert_eq!(frame.data[2], 29); // 0.114 * 255
    }

    #[test]
    fn test_from_rgb24_short_buffer() {
        let rgb = [10, 10, 10];
        let frame = GrayFrame::from_rgb24(2, 2, &rgb);
        assert_eq!(frame.data.len(), 4);
        assert_eq!(frame.data[0], 10);
        assert_eq!(frame.data[1], 0);
    }

    #[test]
    fn test_mean_flat() {
        assert!((flat(8, 8, 100).mean() - 100.0).abs() < 1e-9);
        assert_eq!(GrayFrame::from_rgb24(0, 0, &[]).mean(), 0.0);
    }

    #[test]
    fn test_mean_abs_diff() {
        let a = flat(4, 4, 10);
        let b = flat(4, 4, 30);
        assert!((a.mean_abs_diff(&b) - 20.0).abs() < 1e-9);
        assert_eq!(a.mean_abs_diff(&a), 0.0);
    }

    #[test]
    fn test_laplacian_variance_flat_is_zero() {
        assert!(flat(16, 16, 128).laplacian_variance() < 1e-9);
    }

    #[test]
    fn test_laplacian_variance_checkerboard_is_high() {
        let mut data = vec![0u8; 16 * 16];
        for y in 0..16 {
            for x in 0..16 {
                if (x + y) % 2 == 0 {
                    data[y * 16 + x] = 255;
                }
            }
        }
        let frame = GrayFrame::from_gray(16, 16, data);
        assert!(frame.laplacian_variance() > 1000.0);
    }

    #[test]
    fn test_band_edge_density_flat_is_zero() {
        let frame = flat(32, 32, 60);
        assert_eq!(frame.band_edge_density(0.80, 80.0, 160.0), 0.0);
    }

    #[test]
    fn test_band_edge_density_detects_bottom_band_edges() {
        // Vertical stripes only in the bottom quarter of the frame
        let (w, h) = (32, 32);
        let mut data = vec![0u8; w * h];
        for y in 26..h {
            for x in 0..w {
                if (x / 2) % 2 == 0 {
                    data[y * w + x] = 255;
                }
            }
        }
        let frame = GrayFrame::from_gray(w, h, data);
        let density = frame.band_edge_density(0.80, 80.0, 160.0);
        assert!(density > 0.1, "expected edges in band, got {}", density);
        assert!(density <= 1.0);
    }

    #[test]
    fn test_band_edge_density_ignores_top_content() {
        // Stripes only in the top half must not register in the bottom band
        let (w, h) = (32, 32);
        let mut data = vec![0u8; w * h];
        for y in 0..8 {
            for x in 0..w {
                if x % 2 == 0 {
                    data[y * w + x] = 255;
                }
            }
        }
        let frame = GrayFrame::from_gray(w, h, data);
        assert_eq!(frame.band_edge_density(0.80, 80.0, 160.0), 0.0);
    }

    #[test]
    fn test_mirror_reflects_without_border_repeat() {
        assert_eq!(mirror(-1, 5), 1);
        assert_eq!(mirror(5, 5), 3);
        assert_eq!(mirror(2, 5), 2);
        assert_eq!(mirror(-1, 1), 0);
    }
}
