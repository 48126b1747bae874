use std::fs::File;
use std::io::{self, BufReader, Read, Write};
use std::path::{Path, PathBuf};

use log::{debug, warn};
use thiserror::Error;

/// Reasons the size of a ROM image could not be determined.
#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("ERROR: {} Not found! Does it exist?", .path.display())]
    NotFound { path: PathBuf },

    #[error("ERROR: Could not get size of {}! Does it exist?", .path.display())]
    Size {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// A ROM image on disk whose size has been probed.
#[derive(Debug)]
pub struct Rom {
    path: PathBuf,
    /// Size in bytes, or 0 if the probe failed.
    size: u64,
}

impl Rom {
    /// Read the size of the file at `path` from its metadata.
    pub fn probe_size(path: &Path) -> Result<u64, ProbeError> {
        let metadata = std::fs::metadata(path).map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => ProbeError::NotFound {
                path: path.to_path_buf(),
            },
            _ => ProbeError::Size {
                path: path.to_path_buf(),
                source,
            },
        })?;

        Ok(metadata.len())
    }

    /// Probe the ROM at `path` and report the result on stdout.
    pub fn open(path: &Path) -> io::Result<Self> {
        Self::open_with_console(path, &mut io::stdout().lock())
    }

    /// Probe the ROM at `path` and report the result on `console`.
    ///
    /// A failed probe is reported and then treated as an empty image, so the
    /// conversion still runs and produces an empty header.
    pub fn open_with_console<W: Write>(path: &Path, console: &mut W) -> io::Result<Self> {
        let size = match Self::probe_size(path) {
            Ok(size) => size,
            Err(err) => {
                writeln!(console, "{}", err)?;
                warn!("Falling back to an empty ROM: {:?}", err);
                0
            }
        };
        writeln!(console, "Opening {} size {}", path.display(), size)?;

        Ok(Self {
            path: path.to_path_buf(),
            size,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    /// Byte source for the conversion.
    ///
    /// An empty image never touches the filesystem, which keeps a missing
    /// input from failing the run.
    pub fn reader(&self) -> io::Result<Box<dyn Read>> {
        if self.size == 0 {
            return Ok(Box::new(io::empty()));
        }

        debug!("Reading ROM from {}", self.path.display());
        let file = File::open(&self.path)?;
        Ok(Box::new(BufReader::new(file)))
    }
}
