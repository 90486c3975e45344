use crate::consts::{BLOCK_SIZE, INDEX, RC, SHIFT};

#[inline(always)]
fn f(x: u32, y: u32, z: u32) -> u32 {
    (x & y) | (!x & z)
}

#[inline(always)]
fn g(x: u32, y: u32, z: u32) -> u32 {
    (x & z) | (y & !z)
}

#[inline(always)]
fn h(x: u32, y: u32, z: u32) -> u32 {
    x ^ y ^ z
}

#[inline(always)]
fn i(x: u32, y: u32, z: u32) -> u32 {
    y ^ (x | !z)
}

/// MD5 compression function.
///
/// Consumes the running state by value and returns the state after
/// processing `block`. The block is read as sixteen little-endian words.
#[inline]
pub fn compress_block(state: [u32; 4], block: &[u8; BLOCK_SIZE]) -> [u32; 4] {
    let mut x = [0u32; 16];
    for (word, chunk) in x.iter_mut().zip(block.chunks_exact(4)) {
        *word = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }

    let [mut a, mut b, mut c, mut d] = state;
    for r in 0..64 {
        let mix = match r >> 4 {
            0 => f(b, c, d),
            1 => g(b, c, d),
            2 => h(b, c, d),
            _ => i(b, c, d),
        };
        let t = a
            .wrapping_add(mix)
            .wrapping_add(RC[r])
            .wrapping_add(x[INDEX[r]])
            .rotate_left(SHIFT[r])
            .wrapping_add(b);
        a = d;
        d = c;
        c = b;
        b = t;
    }

    [
        state[0].wrapping_add(a),
        state[1].wrapping_add(b),
        state[2].wrapping_add(c),
        state[3].wrapping_add(d),
    ]
}

/// Folds [`compress_block`] over `blocks` in order.
#[inline]
pub fn compress(state: &mut [u32; 4], blocks: &[[u8; BLOCK_SIZE]]) {
    for block in blocks {
        *state = compress_block(*state, block);
    }
}
