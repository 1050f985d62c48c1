#![allow(dead_code)]

/// Expands a greyscale generator into an opaque RGBA buffer.
pub fn rgba_from_fn(width: usize, height: usize, f: impl Fn(usize, usize) -> u8) -> Vec<u8> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    let mut img = Vec::with_capacity(width * height * 4);
    for y in 0..height {
        for x in 0..width {
            let v = f(x, y);
            img.extend_from_slice(&[v, v, v, 255]);
        }
    }
    img
}

/// Dark left half, bright right half; the step sits between `split - 1` and `split`.
pub fn vertical_step_rgba(width: usize, height: usize, split: usize) -> Vec<u8> {
    rgba_from_fn(width, height, |x, _| if x < split { 0 } else { 255 })
}

/// Bright disk on a dark background.
pub fn disk_rgba(width: usize, height: usize, cx: f32, cy: f32, radius: f32) -> Vec<u8> {
    rgba_from_fn(width, height, |x, y| {
        let dx = x as f32 - cx;
        let dy = y as f32 - cy;
        if dx * dx + dy * dy <= radius * radius {
            220
        } else {
            32
        }
    })
}

/// High-contrast checkerboard with square cells.
pub fn checkerboard_rgba(width: usize, height: usize, cell: usize) -> Vec<u8> {
    assert!(cell > 0, "cell size must be positive");
    rgba_from_fn(width, height, |x, y| {
        if ((x / cell) + (y / cell)) & 1 == 0 {
            32
        } else {
            220
        }
    })
}
