use core::convert::TryFrom;

use crate::compress::compress_block;
use crate::consts::{BLOCK_SIZE, LENGTH_OFFSET, S0};

/// Pads the unprocessed `tail` of a message and compresses the final
/// block(s), returning the finished state.
///
/// `tail` holds the bytes after the last complete block and must be shorter
/// than a block. `bit_len` is the length of the whole unpadded message in
/// bits, already reduced modulo 2^64.
pub(crate) fn finalize(state: [u32; 4], tail: &[u8], bit_len: u64) -> [u32; 4] {
    debug_assert!(tail.len() < BLOCK_SIZE);

    let mut state = state;
    let mut block = [0u8; BLOCK_SIZE];
    block[..tail.len()].copy_from_slice(tail);
    block[tail.len()] = 0x80;

    // no room left for the length, it goes into an extra block
    if tail.len() >= LENGTH_OFFSET {
        state = compress_block(state, &block);
        block = [0u8; BLOCK_SIZE];
    }

    block[LENGTH_OFFSET..].copy_from_slice(&bit_len.to_le_bytes());
    compress_block(state, &block)
}

/// Serializes the state words little-endian in `A, B, C, D` order.
pub(crate) fn to_bytes(state: [u32; 4]) -> [u8; 16] {
    let mut out = [0u8; 16];
    for (chunk, v) in out.chunks_exact_mut(4).zip(state.iter()) {
        chunk.copy_from_slice(&v.to_le_bytes());
    }
    out
}

/// Computes the raw 16-byte MD5 digest of `data`.
///
/// Complete blocks are compressed straight out of `data`; only the final
/// partial block is copied for padding.
pub fn digest_bytes(data: &[u8]) -> [u8; 16] {
    let blocks = data.chunks_exact(BLOCK_SIZE);
    let tail = blocks.remainder();
    let state = blocks
        .filter_map(|chunk| <&[u8; BLOCK_SIZE]>::try_from(chunk).ok())
        .fold(S0, compress_block);

    let bit_len = (data.len() as u64).wrapping_mul(8);
    to_bytes(finalize(state, tail, bit_len))
}
