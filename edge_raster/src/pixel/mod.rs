mod u8_argb;

pub use u8_argb::*;
