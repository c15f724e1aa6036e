//! Document Encoding
//!
//! Input and output documents are plain JSON, or zstd-compressed JSON when
//! the path ends in `.zst` (`agents.json.zst`, `output.json.zst`).

use std::fs::{self, File};
use std::io::{self, Read, Write};
use std::path::Path;

/// Whether `path` names a zstd-compressed document
pub fn is_compressed(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "zst")
}

/// Read a document's text, decompressing `.zst` files
pub fn read_document(path: &Path) -> io::Result<String> {
    if !is_compressed(path) {
        return fs::read_to_string(path);
    }
    let mut decoder = zstd::stream::read::Decoder::new(File::open(path)?)?;
    let mut content = String::new();
    decoder.read_to_string(&mut content)?;
    Ok(content)
}

/// Write a document, compressing it for `.zst` paths
pub fn write_document(path: &Path, content: &[u8]) -> io::Result<()> {
    if !is_compressed(path) {
        return fs::write(path, content);
    }
    let mut encoder = zstd::stream::write::Encoder::new(File::create(path)?, zstd::DEFAULT_COMPRESSION_LEVEL)?;
    encoder.write_all(content)?;
    encoder.finish()?.sync_all()
}
