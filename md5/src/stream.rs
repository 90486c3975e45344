//! Streaming entry points over [`std::io::Read`] sources.

use std::{
    fs::File,
    io::{self, Read},
    path::Path,
    string::String,
    vec,
};

use digest::Digest;
use log::{debug, trace};

use crate::Md5;

/// Default number of bytes requested from the source per read.
pub const DEFAULT_CHUNK_SIZE: usize = 8192;

/// Error returned by the streaming entry points.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Reading the source failed. No digest is produced.
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
    /// A zero-byte read buffer was requested.
    #[error("chunk size must be at least one byte")]
    ZeroChunkSize,
}

/// Hashes byte sources in bounded-size reads.
///
/// The chunk size only affects how much is read at once; every chunk size
/// yields the same digest.
#[derive(Clone, Copy, Debug)]
pub struct StreamHasher {
    chunk_size: usize,
}

impl Default for StreamHasher {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

impl StreamHasher {
    /// Creates a hasher reading [`DEFAULT_CHUNK_SIZE`] bytes at a time.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a hasher reading at most `chunk_size` bytes at a time.
    pub fn with_chunk_size(chunk_size: usize) -> Result<Self, Error> {
        if chunk_size == 0 {
            return Err(Error::ZeroChunkSize);
        }
        Ok(Self { chunk_size })
    }

    /// Number of bytes requested per read.
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Reads `source` to the end and returns its raw digest.
    ///
    /// Interrupted reads are retried; any other read error aborts the
    /// computation.
    pub fn digest<R: Read>(&self, mut source: R) -> Result<[u8; 16], Error> {
        let mut hasher = Md5::new();
        let mut buf = vec![0u8; self.chunk_size];
        let mut total = 0u64;

        loop {
            let n = match source.read(&mut buf) {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    debug!("read failed after {} bytes: {}", total, e);
                    return Err(e.into());
                }
            };
            trace!("read {} bytes", n);
            total = total.wrapping_add(n as u64);
            hasher.update(&buf[..n]);
        }

        debug!("hashed {} bytes in chunks of {}", total, self.chunk_size);
        let mut out = [0u8; 16];
        out.copy_from_slice(&hasher.finalize());
        Ok(out)
    }

    /// Like [`StreamHasher::digest`], rendered as lowercase hex.
    pub fn digest_hex<R: Read>(&self, source: R) -> Result<String, Error> {
        self.digest(source).map(hex::encode)
    }
}

/// Computes the raw digest of `source` using [`DEFAULT_CHUNK_SIZE`] reads.
pub fn digest_stream_bytes<R: Read>(source: R) -> Result<[u8; 16], Error> {
    StreamHasher::default().digest(source)
}

/// Computes the hex digest of `source` using [`DEFAULT_CHUNK_SIZE`] reads.
pub fn digest_stream<R: Read>(source: R) -> Result<String, Error> {
    StreamHasher::default().digest_hex(source)
}

/// Opens the file at `path` and computes the hex digest of its contents.
pub fn digest_file<P: AsRef<Path>>(path: P) -> Result<String, Error> {
    let file = File::open(path.as_ref())?;
    debug!("hashing {}", path.as_ref().display());
    digest_stream(file)
}
