//! ZIP packing and unpacking for directory transfers
//!
//! Archives are built and consumed entirely in memory. Entry names inside
//! an archive are relative, `/`-separated paths; unpacking rejects any
//! entry whose name would escape the destination directory.

use std::fs::File;
use std::io::{Cursor, Write};
use std::path::Path;

use walkdir::WalkDir;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

use crate::error::GatewayError;

/// Pack a local directory tree into a ZIP archive
///
/// Entry names are relative to `dir`. Empty directories are kept as
/// explicit directory entries so the tree round-trips exactly.
pub fn pack(dir: &Path) -> Result<Vec<u8>, GatewayError> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options =
        SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    for entry in WalkDir::new(dir).min_depth(1).sort_by_file_name() {
        let entry = entry.map_err(|e| GatewayError::Pack(e.to_string()))?;
        let relative = entry
            .path()
            .strip_prefix(dir)
            .map_err(|e| GatewayError::Pack(e.to_string()))?;
        let name = relative
            .to_str()
            .ok_or_else(|| GatewayError::Pack(format!("non-UTF-8 path: {relative:?}")))?
            .replace('\\', "/");

        if entry.file_type().is_dir() {
            writer
                .add_directory(format!("{name}/"), options)
                .map_err(|e| GatewayError::Pack(e.to_string()))?;
        } else {
            writer
                .start_file(&name, options)
                .map_err(|e| GatewayError::Pack(e.to_string()))?;
            let mut file = File::open(entry.path())?;
            std::io::copy(&mut file, &mut writer)?;
        }
    }

    let cursor = writer
        .finish()
        .map_err(|e| GatewayError::Pack(e.to_string()))?;
    Ok(cursor.into_inner())
}

/// Unpack a ZIP archive into a local directory
///
/// Malformed archives and entries that traverse outside `dest` are
/// rejected as corrupt.
pub fn unpack(bytes: &[u8], dest: &Path) -> Result<(), GatewayError> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))
        .map_err(|e| GatewayError::CorruptArchive(e.to_string()))?;

    for index in 0..archive.len() {
        let mut entry = archive
            .by_index(index)
            .map_err(|e| GatewayError::CorruptArchive(e.to_string()))?;
        let Some(relative) = entry.enclosed_name() else {
            return Err(GatewayError::CorruptArchive(format!(
                "entry escapes the archive root: {}",
                entry.name()
            )));
        };
        let target = dest.join(relative);

        if entry.is_dir() {
            std::fs::create_dir_all(&target)?;
        } else {
            if let Some(parent) = target.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let mut file = File::create(&target)?;
            std::io::copy(&mut entry, &mut file)?;
            file.flush()?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build_tree(root: &Path) {
        std::fs::create_dir(root.join("sub")).unwrap();
        std::fs::create_dir(root.join("empty")).unwrap();
        std::fs::write(root.join("readme.txt"), b"top level").unwrap();
        std::fs::write(root.join("sub/nested.bin"), [0u8, 159, 146, 150]).unwrap();
    }

    #[test]
    fn test_pack_unpack_round_trip() {
        let source = tempfile::tempdir().unwrap();
        build_tree(source.path());

        let bytes = pack(source.path()).unwrap();
        let dest = tempfile::tempdir().unwrap();
        unpack(&bytes, dest.path()).unwrap();

        assert_eq!(
            std::fs::read(dest.path().join("readme.txt")).unwrap(),
            b"top level"
        );
        assert_eq!(
            std::fs::read(dest.path().join("sub/nested.bin")).unwrap(),
            [0u8, 159, 146, 150]
        );
        assert!(dest.path().join("empty").is_dir());
    }

    #[test]
    fn test_pack_empty_directory() {
        let source = tempfile::tempdir().unwrap();
        let bytes = pack(source.path()).unwrap();

        let dest = tempfile::tempdir().unwrap();
        unpack(&bytes, dest.path()).unwrap();
        assert_eq!(std::fs::read_dir(dest.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_unpack_rejects_garbage() {
        let dest = tempfile::tempdir().unwrap();
        let result = unpack(b"this is not a zip archive", dest.path());
        assert!(matches!(result, Err(GatewayError::CorruptArchive(_))));
    }

    #[test]
    fn test_unpack_rejects_traversal_entries() {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        let options = SimpleFileOptions::default();
        writer.start_file("../evil.txt", options).unwrap();
        writer.write_all(b"escape attempt").unwrap();
        let bytes = writer.finish().unwrap().into_inner();

        let dest = tempfile::tempdir().unwrap();
        let result = unpack(&bytes, dest.path());
        assert!(matches!(result, Err(GatewayError::CorruptArchive(_))));
        assert!(!dest.path().parent().unwrap().join("evil.txt").exists());
    }
}
