//! tar.gz packaging of a finished output directory.
//!
//! Entries are appended in sorted file-name order with fixed metadata so the
//! archive bytes depend only on the file contents, matching the determinism
//! guarantee of the synthesis stage.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use flate2::write::GzEncoder;
use flate2::Compression;

/// Packs every regular file directly under `dir` into a gzip-compressed
/// tarball written to `writer`. Subdirectories are ignored; batch output is
/// flat by construction.
pub fn pack_dir<W: Write>(dir: &Path, writer: W) -> io::Result<W> {
    let mut entries: Vec<_> = std::fs::read_dir(dir)?
        .collect::<Result<Vec<_>, _>>()?
        .into_iter()
        .filter(|e| e.path().is_file())
        .collect();
    entries.sort_by_key(|e| e.file_name());

    let encoder = GzEncoder::new(writer, Compression::default());
    let mut builder = tar::Builder::new(encoder);
    for entry in entries {
        let path = entry.path();
        let mut file = File::open(&path)?;
        let metadata = file.metadata()?;

        // Fixed header fields keep the archive independent of mtimes and
        // host uid/gid.
        let mut header = tar::Header::new_gnu();
        header.set_size(metadata.len());
        header.set_mode(0o644);
        header.set_mtime(0);
        header.set_uid(0);
        header.set_gid(0);
        header.set_cksum();

        builder.append_data(&mut header, entry.file_name(), &mut file)?;
    }

    let encoder = builder.into_inner()?;
    encoder.finish()
}

/// Packs a directory into an in-memory tar.gz byte vector.
pub fn pack_dir_to_vec(dir: &Path) -> io::Result<Vec<u8>> {
    pack_dir(dir, Vec::new())
}
