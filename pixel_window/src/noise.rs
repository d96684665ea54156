use flo_edge_raster::pixel::*;

///
/// SquirrelNoise5: a hash of a position and a seed that is cheap enough to use instead of a stored random table
///
/// The same position and seed always produce the same value.
///
pub fn noise(position: i32, seed: u32) -> u32 {
    const BIT_NOISE_1: u32 = 0xd2a80a3f;
    const BIT_NOISE_2: u32 = 0xa884f197;
    const BIT_NOISE_3: u32 = 0x6c736f4b;
    const BIT_NOISE_4: u32 = 0xb79f3abb;
    const BIT_NOISE_5: u32 = 0x1b56c4f5;

    let mut bits = position as u32;

    bits = bits.wrapping_mul(BIT_NOISE_1);
    bits = bits.wrapping_add(seed);
    bits ^= bits >> 9;
    bits = bits.wrapping_add(BIT_NOISE_2);
    bits ^= bits >> 11;
    bits = bits.wrapping_mul(BIT_NOISE_3);
    bits ^= bits >> 13;
    bits = bits.wrapping_add(BIT_NOISE_4);
    bits ^= bits >> 15;
    bits = bits.wrapping_mul(BIT_NOISE_5);
    bits ^= bits >> 17;

    bits
}

///
/// An opaque colour picked by noise, with each channel taken from a neighbouring position
///
pub fn color_noise(position: i32, seed: u32) -> U8ArgbPixel {
    let channel = |offset: i32| (noise(position.wrapping_mul(3).wrapping_add(offset), seed) % 255) as u8;

    U8ArgbPixel::opaque(channel(0), channel(1), channel(2))
}
