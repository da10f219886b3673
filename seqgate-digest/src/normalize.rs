/// A lookup table that folds a sequence byte onto its canonical form:
/// lowercase letters become uppercase and `U`/`u` become `T`.
/// Every other byte maps to itself, so the table is safe to apply to arbitrary input.
pub const NORMALIZE_ARRAY: [u8; 256] = {
    let mut arr = [0u8; 256];
    let mut i = 0;
    while i < 256 {
        arr[i] = (i as u8).to_ascii_uppercase();
        i += 1;
    }
    // RNA and DNA spell the same molecule
    arr[b'U' as usize] = b'T';
    arr[b'u' as usize] = b'T';
    arr
};

#[inline]
pub fn normalize_byte(byte: u8) -> u8 {
    NORMALIZE_ARRAY[byte as usize]
}

/// Normalize `seq` into a freshly allocated buffer.
pub fn normalize(seq: &[u8]) -> Vec<u8> {
    seq.iter().map(|&b| normalize_byte(b)).collect()
}

/// Normalize `seq` into `out`, which must be at least as long as `seq`.
pub fn normalize_into(seq: &[u8], out: &mut [u8]) {
    for (dst, &src) in out.iter_mut().zip(seq) {
        *dst = normalize_byte(src);
    }
}
