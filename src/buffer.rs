//! Helpers shared by the trivial and the accelerated codecs.

/// Bytes packed into one limb of the accelerated codecs.
pub const LIMB_BYTES: usize = 4;

/// Base-58 digits handled together by the accelerated codecs.
pub const BLOCK_DIGITS: usize = 5;

/// 58^5, the largest power of 58 that fits a `u32` limb.
pub const BLOCK: u64 = 58 * 58 * 58 * 58 * 58;

/// Powers of 58 up to `BLOCK`, indexed by exponent.
pub const POWERS: [u64; BLOCK_DIGITS + 1] = [1, 58, 58 * 58, 58 * 58 * 58, 58 * 58 * 58 * 58, BLOCK];

pub fn leading_zeros(input: &[u8], zero: u8) -> usize {
    input.iter().take_while(|&&value| value == zero).count()
}

/// Upper bound on the encoded length of `len` bytes (138/100 is just over log_58(256)).
pub const fn max_encoded_len(len: usize) -> usize {
    len * 138 / 100 + 1
}

/// Upper bound on the decoded length of `len` characters. Every leading zero
/// character yields a whole byte, so the bound is the input length itself.
pub const fn max_decoded_len(len: usize) -> usize {
    len
}

/// Packs big-endian bytes into big-endian `u32` limbs. The first limb holds
/// the `len % 4` most significant bytes when the length is not a multiple of 4.
pub fn pack_limbs(input: &[u8]) -> Vec<u32> {
    let head = input.len() % LIMB_BYTES;
    let mut limbs = Vec::with_capacity(input.len().div_ceil(LIMB_BYTES));
    if head > 0 {
        limbs.push(input[..head].iter().fold(0u32, |limb, &byte| (limb << 8) | u32::from(byte)));
    }
    for chunk in input[head..].chunks_exact(LIMB_BYTES) {
        limbs.push(u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]));
    }
    limbs
}

/// Big-endian bytes of little-endian `u32` limbs, without the most significant zero bytes.
fn significant_bytes(limbs: &[u32]) -> impl Iterator<Item = u8> + '_ {
    limbs.iter().rev().flat_map(|limb| limb.to_be_bytes()).skip_while(|&byte| byte == 0)
}

/// Appends the significant bytes of `limbs` to `output`.
pub fn unpack_limbs(limbs: &[u32], output: &mut Vec<u8>) {
    output.extend(significant_bytes(limbs));
}

/// Writes the significant bytes of `limbs` at the start of `output` and
/// returns their count, or `None` without writing if `output` is too short.
pub fn unpack_limbs_into(limbs: &[u32], output: &mut [u8]) -> Option<usize> {
    let len = significant_bytes(limbs).count();
    let output = output.get_mut(..len)?;
    for (value, byte) in output.iter_mut().zip(significant_bytes(limbs)) {
        *value = byte;
    }
    Some(len)
}
