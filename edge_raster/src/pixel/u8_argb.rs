use std::slice;

///
/// An ARGB pixel as a set of u8 values, stored in the order alpha, red, green, blue
///
/// The alpha value is not pre-multiplied into the colour components. Blending is always a straight per-channel
/// linear interpolation, so every channel (including alpha) is treated the same way.
///
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(C)]
pub struct U8ArgbPixel([u8; 4]);

impl U8ArgbPixel {
    pub const WHITE: U8ArgbPixel        = U8ArgbPixel([255, 255, 255, 255]);
    pub const BLACK: U8ArgbPixel        = U8ArgbPixel([255, 0, 0, 0]);
    pub const TRANSPARENT: U8ArgbPixel  = U8ArgbPixel([0, 0, 0, 0]);

    ///
    /// Creates a new pixel from the component bytes (in the order alpha, red, green, blue)
    ///
    #[inline]
    pub const fn from_components(components: [u8; 4]) -> Self {
        U8ArgbPixel(components)
    }

    ///
    /// Creates an opaque pixel from its red, green and blue components
    ///
    #[inline]
    pub const fn opaque(red: u8, green: u8, blue: u8) -> Self {
        U8ArgbPixel([255, red, green, blue])
    }

    ///
    /// Retrieves the ARGB values from this pixel
    ///
    #[inline]
    pub fn get_components(&self) -> [u8; 4] {
        self.0
    }

    #[inline] pub fn alpha(&self) -> u8 { self.0[0] }
    #[inline] pub fn red(&self) -> u8   { self.0[1] }
    #[inline] pub fn green(&self) -> u8 { self.0[2] }
    #[inline] pub fn blue(&self) -> u8  { self.0[3] }

    ///
    /// Interpolates each channel between this pixel (`t = 0`) and another pixel (`t = 1`)
    ///
    /// The result is `a + (b - a) * t` truncated to a byte. No clamping is performed on `t`: callers supply a value in
    /// the range `0..=1`, which keeps every channel between the two input values.
    ///
    #[inline]
    pub fn lerp(self, other: U8ArgbPixel, t: f32) -> U8ArgbPixel {
        let U8ArgbPixel(a) = self;
        let U8ArgbPixel(b) = other;

        let mut result = [0u8; 4];
        for idx in 0..4 {
            let from    = a[idx] as f32;
            let to      = b[idx] as f32;

            result[idx] = (from + (to - from) * t) as u8;
        }

        U8ArgbPixel(result)
    }

    ///
    /// The components of this pixel re-ordered as red, green, blue, alpha (as used by most image formats)
    ///
    #[inline]
    pub fn to_rgba_components(&self) -> [u8; 4] {
        let [a, r, g, b] = self.0;
        [r, g, b, a]
    }
}

impl Default for U8ArgbPixel {
    #[inline]
    fn default() -> Self {
        U8ArgbPixel::TRANSPARENT
    }
}

pub trait ToArgbU8Slice {
    /// Returns the pixels as a single slice of u8 values
    fn to_argb_u8_slice(&self) -> &[u8];

    /// Returns the pixels as a mutable single slice of u8 values
    fn to_argb_u8_slice_mut(&mut self) -> &mut [u8];
}

pub trait ToArgbPixels {
    /// Converts a slice of `u8` values to a slice of U8ArgbPixels
    ///
    /// If the slice is not a multiple of 4, then no pixels are generated at the end
    fn to_argb_slice(&self) -> &[U8ArgbPixel];

    /// Converts a slice of `u8` values to a mutable slice of U8ArgbPixels
    fn to_argb_slice_mut(&mut self) -> &mut [U8ArgbPixel];
}

impl ToArgbU8Slice for [U8ArgbPixel] {
    #[inline]
    fn to_argb_u8_slice(&self) -> &[u8] {
        // U8ArgbPixel is repr(C) around [u8; 4], so it has the same layout and alignment as 4 bytes
        unsafe {
            let len     = self.len();
            let data    = self.as_ptr() as *const u8;

            slice::from_raw_parts(data, len*4)
        }
    }

    #[inline]
    fn to_argb_u8_slice_mut(&mut self) -> &mut [u8] {
        unsafe {
            let len     = self.len();
            let data    = self.as_mut_ptr() as *mut u8;

            slice::from_raw_parts_mut(data, len*4)
        }
    }
}

impl ToArgbPixels for [u8] {
    #[inline]
    fn to_argb_slice(&self) -> &[U8ArgbPixel] {
        unsafe {
            let len     = self.len();
            let data    = self.as_ptr() as *const U8ArgbPixel;

            slice::from_raw_parts(data, len/4)
        }
    }

    #[inline]
    fn to_argb_slice_mut(&mut self) -> &mut [U8ArgbPixel] {
        unsafe {
            let len     = self.len();
            let data    = self.as_mut_ptr() as *mut U8ArgbPixel;

            slice::from_raw_parts_mut(data, len/4)
        }
    }
}
