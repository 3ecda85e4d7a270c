use std::{
    fs::File,
    io::{BufReader, BufWriter, Read, Write},
    path::{Path, PathBuf},
};

use rkyv::util::AlignedVec;

/// Reads a whole file into a buffer aligned for zero-copy access.
pub(crate) fn read_bytes(path: &Path) -> Result<AlignedVec, std::io::Error> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut buffer = Vec::new();
    reader.read_to_end(&mut buffer)?;

    let mut aligned = AlignedVec::with_capacity(buffer.len());
    aligned.extend_from_slice(&buffer);
    Ok(aligned)
}

pub(crate) fn write_bytes(bytes: &[u8], path: &Path) -> Result<(), std::io::Error> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    writer.write_all(bytes)?;
    writer.flush()?;
    Ok(())
}

pub(crate) fn binary_file_path(directory: &Path, filename: &str) -> PathBuf {
    directory.join(filename)
}
