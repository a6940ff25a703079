
/// Widen a `width`-bit two's-complement field to 16 bits, preserving its sign.
pub fn sign_extend(val: u16, width: u32) -> u16 {
    debug_assert!((1..=16).contains(&width));
    if width < 16 {
        debug_assert_eq!(val >> width, 0);
        if (val >> (width - 1)) & 0x1 != 0 {
            return val | (0xFFFF << width);
        }
    }
    val
}

/// Does `val` round-trip through a `width`-bit field?
pub fn fits_signed(val: u16, width: u32) -> bool {
    let mask = if width < 16 { (1u16 << width) - 1 } else { 0xFFFF };
    sign_extend(val & mask, width) == val
}
