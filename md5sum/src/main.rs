//! Prints the MD5 digest of a file, or of `hello world` when run without
//! arguments.
//!
//! `RUST_LOG` sets the log filter and `MD5SUM_CHUNK_SIZE` overrides the
//! number of bytes read from the file at a time.

use std::{env, ffi::OsString, path::Path, process};

use log::{error, info};
use md5::StreamHasher;

const SELF_TEST_INPUT: &str = "hello world";
const CHUNK_SIZE_VAR: &str = "MD5SUM_CHUNK_SIZE";

fn stream_hasher() -> Result<StreamHasher, String> {
    let value = match env::var(CHUNK_SIZE_VAR) {
        Ok(v) => v,
        Err(env::VarError::NotPresent) => return Ok(StreamHasher::new()),
        Err(e) => return Err(format!("{}: {}", CHUNK_SIZE_VAR, e)),
    };
    let size = value
        .trim()
        .parse::<usize>()
        .map_err(|e| format!("{}={:?}: {}", CHUNK_SIZE_VAR, value, e))?;
    StreamHasher::with_chunk_size(size).map_err(|e| format!("{}={}: {}", CHUNK_SIZE_VAR, size, e))
}

fn self_test() -> i32 {
    let hex = md5::digest(SELF_TEST_INPUT.as_bytes());
    println!("MD5 of '{}': {}", SELF_TEST_INPUT, hex);
    0
}

fn hash_file(path: &Path, hasher: StreamHasher) -> i32 {
    println!("Calculating MD5 of file: {}", path.display());
    info!("reading {} in chunks of {} bytes", path.display(), hasher.chunk_size());

    let result = std::fs::File::open(path)
        .map_err(md5::Error::from)
        .and_then(|file| hasher.digest_hex(file));
    match result {
        Ok(hex) => {
            println!("MD5: {}", hex);
            0
        }
        Err(e) => {
            error!("failed to hash {}: {}", path.display(), e);
            eprintln!("Error processing file: {}", e);
            1
        }
    }
}

fn main() {
    env_logger::init();

    let args: Vec<OsString> = env::args_os().skip(1).collect();
    let code = match args.as_slice() {
        [] => self_test(),
        [path] => match stream_hasher() {
            Ok(hasher) => hash_file(Path::new(path), hasher),
            Err(msg) => {
                eprintln!("md5sum: {}", msg);
                2
            }
        },
        _ => {
            eprintln!("usage: md5sum [FILE]");
            2
        }
    };
    process::exit(code);
}
