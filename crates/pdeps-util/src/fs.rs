use std::fs::File;
use std::io::{BufRead, BufReader, Split};
use std::path::{Path, PathBuf};

use crate::errors::{PdepsError, PdepsResult};

/// Lines of an input file, decoded lossily.
///
/// Bytes that are not valid UTF-8 (free text in a `notes` column, say) are
/// replaced rather than failing the read. A trailing `\r` is dropped.
pub struct InputLines {
    path: PathBuf,
    inner: Split<BufReader<File>>,
}

impl Iterator for InputLines {
    type Item = Result<String, PdepsError>;

    fn next(&mut self) -> Option<Self::Item> {
        let bytes = match self.inner.next()? {
            Ok(bytes) => bytes,
            Err(source) => {
                return Some(Err(PdepsError::Read {
                    path: self.path.clone(),
                    source,
                }))
            }
        };
        let bytes = bytes.strip_suffix(b"\r").unwrap_or(&bytes[..]);
        Some(Ok(String::from_utf8_lossy(bytes).into_owned()))
    }
}

/// Open `path` for line-by-line reading.
///
/// The file handle lives inside the returned iterator and is closed when the
/// iterator is dropped, including when the caller stops early.
pub fn open_lines(path: &Path) -> PdepsResult<InputLines> {
    let file = File::open(path).map_err(|source| PdepsError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!("Opened {}", path.display());
    Ok(InputLines {
        path: path.to_path_buf(),
        inner: BufReader::new(file).split(b'\n'),
    })
}
