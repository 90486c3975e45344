//! An implementation of the [MD5][1] message digest (RFC 1321), with
//! whole-buffer and streaming entry points.
//!
//! MD5 is broken as a cryptographic hash. Use it for checksums and content
//! identification only.
//!
//! # Usage
//!
//! Whole-buffer hashing returns the lowercase hex digest:
//!
//! ```rust
//! assert_eq!(md5::digest(b"hello world"), "5eb63bbbe01eeed093cb22bb8f5acdc3");
//! ```
//!
//! Any [`std::io::Read`] source can be hashed in bounded chunks:
//!
//! ```rust
//! use std::io::Cursor;
//!
//! let hex = md5::digest_stream(Cursor::new(b"hello world")).unwrap();
//! assert_eq!(hex, "5eb63bbbe01eeed093cb22bb8f5acdc3");
//! ```
//!
//! The [`Md5`] hasher implements the [`Digest`] trait:
//!
//! ```rust
//! use md5::{Md5, Digest};
//! use hex_literal::hex;
//!
//! // create a Md5 hasher instance
//! let mut hasher = Md5::new();
//!
//! // process input message
//! hasher.update(b"hello world");
//!
//! // acquire hash digest in the form of GenericArray,
//! // which in this case is equivalent to [u8; 16]
//! let result = hasher.finalize();
//! assert_eq!(result[..], hex!("5eb63bbbe01eeed093cb22bb8f5acdc3"));
//! ```
//!
//! [1]: https://en.wikipedia.org/wiki/MD5

#![no_std]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![deny(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

#[cfg(any(feature = "std", test))]
extern crate std;

pub use digest::{self, Digest};

use core::fmt;
use digest::{
    block_buffer::Eager,
    core_api::{
        AlgorithmName, Block, BlockSizeUser, Buffer, BufferKindUser, CoreWrapper, FixedOutputCore,
        OutputSizeUser, Reset, UpdateCore,
    },
    typenum::{Unsigned, U16, U64},
    HashMarker, Output,
};

mod compress;
pub mod consts;
mod framing;
#[cfg(feature = "std")]
mod stream;

pub use crate::compress::{compress, compress_block};
pub use crate::framing::digest_bytes;
#[cfg(feature = "std")]
pub use crate::stream::{
    digest_file, digest_stream, digest_stream_bytes, Error, StreamHasher, DEFAULT_CHUNK_SIZE,
};

use crate::consts::BLOCK_SIZE;

/// Computes the MD5 digest of `data` as 32 lowercase hex characters.
#[cfg(feature = "std")]
pub fn digest(data: &[u8]) -> std::string::String {
    hex::encode(digest_bytes(data))
}

/// Core MD5 hasher state.
#[derive(Clone)]
pub struct Md5Core {
    block_len: u64,
    state: [u32; 4],
}

impl HashMarker for Md5Core {}

impl BlockSizeUser for Md5Core {
    type BlockSize = U64;
}

impl BufferKindUser for Md5Core {
    type BufferKind = Eager;
}

impl OutputSizeUser for Md5Core {
    type OutputSize = U16;
}

impl UpdateCore for Md5Core {
    #[inline]
    fn update_blocks(&mut self, blocks: &[Block<Self>]) {
        self.block_len = self.block_len.wrapping_add(blocks.len() as u64);
        compress(&mut self.state, convert(blocks))
    }
}

impl FixedOutputCore for Md5Core {
    #[inline]
    fn finalize_fixed_core(&mut self, buffer: &mut Buffer<Self>, out: &mut Output<Self>) {
        let bit_len = self
            .block_len
            .wrapping_mul(Self::BlockSize::U64)
            .wrapping_add(buffer.get_pos() as u64)
            .wrapping_mul(8);
        let state = framing::finalize(self.state, buffer.get_data(), bit_len);
        out.copy_from_slice(&framing::to_bytes(state));
    }
}

impl Default for Md5Core {
    #[inline]
    fn default() -> Self {
        Self {
            block_len: 0,
            state: consts::S0,
        }
    }
}

impl Reset for Md5Core {
    #[inline]
    fn reset(&mut self) {
        *self = Default::default();
    }
}

impl AlgorithmName for Md5Core {
    fn write_alg_name(f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Md5")
    }
}

opaque_debug::implement!(Md5Core);

/// MD5 hasher state.
pub type Md5 = CoreWrapper<Md5Core>;

#[inline(always)]
fn convert(blocks: &[Block<Md5Core>]) -> &[[u8; BLOCK_SIZE]] {
    // SAFETY: GenericArray<u8, U64> and [u8; 64] have
    // exactly the same memory layout
    #[allow(unsafe_code)]
    unsafe {
        &*(blocks as *const _ as *const [[u8; BLOCK_SIZE]])
    }
}
