//! Batch hashing on the rayon thread pool.
//!
//! Each message is an independent digest call with its own state, so a
//! batch splits across threads with no coordination. Results come back in
//! input order.

use std::path::Path;

use rayon::prelude::*;
use tracing::debug;

use crate::digest::Digest;
use crate::error::ChronoHashError;
use crate::hasher::{ChronoHash, Mode};

/// Digests every message in `messages` in parallel.
///
/// # Returns
/// One digest per input, `result[i]` for `messages[i]`.
///
/// # Examples
///
/// ```
/// use chronohash::parallel::digest_batch;
/// use chronohash::Mode;
///
/// let messages = [b"alpha".to_vec(), b"beta".to_vec(), b"gamma".to_vec()];
/// let digests = digest_batch(&messages, Mode::Normal);
/// assert_eq!(digests.len(), 3);
/// assert_eq!(digests[1], chronohash::digest(b"beta"));
/// ```
pub fn digest_batch<T>(messages: &[T], mode: Mode) -> Vec<Digest>
where
    T: AsRef<[u8]> + Sync,
{
    let hasher = ChronoHash::new(mode);
    debug!(target: "chronohash::parallel", count = messages.len(), %mode, "digest batch");
    messages
        .par_iter()
        .map(|message| hasher.digest(message.as_ref()))
        .collect()
}

/// Reads and digests every file in `paths` in parallel.
///
/// A file that cannot be read yields an error in its slot; the rest of the
/// batch is unaffected.
///
/// # Examples
///
/// ```no_run
/// use chronohash::parallel::digest_files;
/// use chronohash::Mode;
///
/// let paths = ["a.bin", "b.bin"];
/// for (path, result) in paths.iter().zip(digest_files(&paths, Mode::Fast)) {
///     match result {
///         Ok(digest) => println!("{}  {}", digest, path),
///         Err(e) => eprintln!("{}: {}", path, e),
///     }
/// }
/// ```
pub fn digest_files<P>(paths: &[P], mode: Mode) -> Vec<Result<Digest, ChronoHashError>>
where
    P: AsRef<Path> + Sync,
{
    let hasher = ChronoHash::new(mode);
    paths
        .par_iter()
        .map(|path| hasher.digest_file(path))
        .collect()
}
