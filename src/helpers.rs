/// If the condition is not met, return an error message. Borrowed from the `anyhow` crate.
macro_rules! ensure {
    ($cond:expr, $msg:literal $(,)?) => {
        if !$cond {
            return Err($msg);
        }
    };
}

pub(crate) use ensure; // make available throughout crate


/// # Algorithm 2: `toInt(X, n)` on page 14.
/// Convert a byte string to an integer (big endian). The caller never supplies
/// more than 8 bytes.
pub(crate) fn to_int(x: &[u8]) -> u64 {
    debug_assert!(x.len() <= 8);
    x.iter().fold(0, |total, &byte| (total << 8) | u64::from(byte))
}


/// # Algorithm 3: `toByte(x, n)` on page 15.
/// Convert an integer to a byte string of length `X` (big endian, truncating).
pub(crate) fn to_byte<const X: usize>(x: u64) -> [u8; X] {
    let mut s = [0u8; X];
    let mut total = x;
    for i in (0..X).rev() {
        s[i] = (total & 0xFF) as u8;
        total >>= 8;
    }
    s
}


/// # Algorithm 4: `base_2b(X, b, out_len)` on page 15.
/// Reinterpret the byte string `x` as `out.len()` unsigned `b`-bit integers,
/// most significant bits first. `x` must supply at least `ceil(out.len()*b/8)` bytes.
pub(crate) fn base_2b(x: &[u8], b: u32, out: &mut [u32]) {
    debug_assert!((b >= 1) & (b <= 16));
    debug_assert!(x.len() * 8 >= out.len() * b as usize);
    let mut in_index = 0;
    let mut bits = 0u32;
    let mut total = 0u64;

    // 1: in ← 0 ... 9: end for
    for baseb in out.iter_mut() {
        while bits < b {
            total = (total << 8) | u64::from(x[in_index]);
            in_index += 1;
            bits += 8;
        }
        bits -= b;
        *baseb = ((total >> bits) & ((1 << b) - 1)) as u32;
    }
}


/// Constant-time equality of two equal-length byte strings; branch-free fold.
pub(crate) fn ct_eq(lhs: &[u8], rhs: &[u8]) -> bool {
    debug_assert_eq!(lhs.len(), rhs.len());
    lhs.iter().zip(rhs.iter()).fold(0u8, |acc, (a, b)| acc | (a ^ b)) == 0
}
