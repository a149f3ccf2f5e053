use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::buffer::Buffer;

#[derive(Debug, Error)]
pub enum FileError {
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl FileError {
    fn io(path: &Path, source: io::Error) -> Self {
        FileError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Reads `path` into a buffer, one buffer line per file line.
///
/// Trailing `\r`/`\n` bytes are stripped from every line. A missing file is
/// not an error and yields an empty buffer.
pub fn load(path: &Path) -> Result<Buffer, FileError> {
    let content = match std::fs::read(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log::info!("{} does not exist yet, starting empty", path.display());
            return Ok(Buffer::new());
        }
        Err(e) => return Err(FileError::io(path, e)),
    };

    let buffer = Buffer::from_lines(split_lines(&content));
    log::info!(
        "loaded {} ({} lines, {} bytes)",
        path.display(),
        buffer.line_count(),
        content.len()
    );
    Ok(buffer)
}

fn split_lines(content: &[u8]) -> Vec<Vec<u8>> {
    let mut pieces: Vec<&[u8]> = content.split(|&b| b == b'\n').collect();
    // A terminating newline does not start another line.
    if pieces.last().is_some_and(|last| last.is_empty()) {
        pieces.pop();
    }
    pieces
        .into_iter()
        .map(|line| {
            let end = line
                .iter()
                .rposition(|&b| b != b'\r' && b != b'\n')
                .map_or(0, |i| i + 1);
            line[..end].to_vec()
        })
        .collect()
}

/// Writes every line followed by `\n`, returning the number of bytes written.
pub fn save(lines: &[Vec<u8>], path: &Path) -> Result<usize, FileError> {
    let file = File::create(path).map_err(|e| FileError::io(path, e))?;
    let mut out = BufWriter::new(file);
    let mut written = 0;

    for line in lines {
        out.write_all(line).map_err(|e| FileError::io(path, e))?;
        out.write_all(b"\n").map_err(|e| FileError::io(path, e))?;
        written += line.len() + 1;
    }
    out.flush().map_err(|e| FileError::io(path, e))?;

    log::info!("wrote {} bytes to {}", written, path.display());
    Ok(written)
}
