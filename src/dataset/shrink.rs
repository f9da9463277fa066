//! Down-samples a dataset file into a smaller fixture.

use std::fs;
use std::io;
use std::path::Path;

use rand::seq::index;
use rand::Rng;
use tracing::warn;

/// Write `lines` lines of `src`, chosen uniformly without replacement,
/// to `dest`. Selected lines keep their source order. A missing source
/// reports a diagnostic and writes nothing.
pub fn shrink_dataset<R: Rng>(
    src: &Path,
    lines: usize,
    dest: &Path,
    rng: &mut R,
) -> io::Result<()> {
    let raw = match fs::read(src) {
        Ok(raw) => raw,
        Err(err) => {
            warn!(path = %src.display(), error = %err, "dataset unreadable");
            println!("Error: invalid dataset path");
            return Ok(());
        }
    };

    let all: Vec<&[u8]> = raw.split_inclusive(|byte| *byte == b'\n').collect();
    let amount = lines.min(all.len());

    let mut picked = index::sample(rng, all.len(), amount).into_vec();
    picked.sort_unstable();

    let mut sampled = Vec::new();
    for i in picked {
        sampled.extend_from_slice(all[i]);
    }

    fs::write(dest, sampled)
}
