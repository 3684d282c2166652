//! Feeding readers and files into a [`Sha256`] engine.

use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

use tracing::debug;

use crate::config::ScanConfig;
use crate::error::{Error, Result};
use crate::hash::Sha256;
use crate::primitives::Digest;

/// Resets `engine` and absorbs everything `reader` yields, `chunk` bytes at
/// a time. Returns the number of bytes read.
///
/// Interrupted reads are retried; any other read error is returned and
/// leaves the engine holding a partial message.
pub fn digest_reader<R: Read>(
    engine: &mut Sha256,
    mut reader: R,
    chunk: usize,
) -> std::io::Result<u64> {
    engine.reset();

    let mut buf = vec![0u8; chunk.max(1)];
    let mut total = 0u64;

    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };

        engine.update(&buf[..n]);
        total += n as u64;
    }

    Ok(total)
}

/// Hashes the file at `path`, returning its digest and size in bytes.
pub fn digest_file(engine: &mut Sha256, path: &Path, config: &ScanConfig) -> Result<(Digest, u64)> {
    let file = File::open(path).map_err(|e| Error::io(path, e))?;
    let size = digest_reader(engine, file, config.read_chunk()).map_err(|e| Error::io(path, e))?;

    let digest = engine.finalize();
    debug!(path = %path.display(), size, %digest, "hashed file");

    Ok((digest, size))
}
