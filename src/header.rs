use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::Path;

use log::{debug, info, warn};

use crate::rom::Rom;

/// Number of ROM bytes rendered on each header line.
pub const ROW_LEN: usize = 16;

/// Outcome of a conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// Lines written to the header.
    pub rows: u64,
    /// Trailing bytes that did not fill a whole row and were left out.
    pub dropped: u64,
}

impl Summary {
    fn for_size(rom_size: u64) -> Self {
        Self {
            rows: rom_size / ROW_LEN as u64,
            dropped: rom_size % ROW_LEN as u64,
        }
    }
}

/// Reinterpret a signed byte as its unsigned bit pattern.
pub fn reinterpret(byte: i8) -> u8 {
    byte as u8
}

/// Render a byte as `0x` followed by lowercase hex digits, without padding.
pub fn token(byte: u8) -> String {
    format!("{:#x}", byte)
}

/// Write the header for a `rom_size` byte image read from `rom` into `out`.
///
/// Only whole rows are emitted. A comma follows every byte except the one at
/// absolute index `rom_size - 1`, so the last token of the header only loses
/// its comma when `rom_size` is a multiple of [`ROW_LEN`].
pub fn write_header<R, W>(rom: &mut R, out: &mut W, rom_size: u64) -> io::Result<Summary>
where
    R: Read + ?Sized,
    W: Write + ?Sized,
{
    let summary = Summary::for_size(rom_size);
    let last = rom_size.checked_sub(1);
    let mut row = [0u8; ROW_LEN];

    for i in 0..summary.rows {
        rom.read_exact(&mut row)?;

        for (j, &raw) in row.iter().enumerate() {
            out.write_all(token(reinterpret(raw as i8)).as_bytes())?;

            let index = i * ROW_LEN as u64 + j as u64;
            if Some(index) != last {
                out.write_all(b",")?;
            }
        }

        out.write_all(b"\n")?;
    }

    Ok(summary)
}

/// Convert `rom` into a header file at `out_path`, truncating any previous
/// contents.
///
/// Both files are closed before this returns, whether or not the conversion
/// succeeded.
pub fn convert(rom: &Rom, out_path: &Path) -> io::Result<Summary> {
    debug!(
        "Converting {} into {}",
        rom.path().display(),
        out_path.display()
    );

    let mut reader = rom.reader()?;
    let mut writer = BufWriter::new(File::create(out_path)?);

    let summary = write_header(&mut reader, &mut writer, rom.size())?;
    writer.flush()?;

    if summary.dropped > 0 {
        warn!(
            "Dropped {} trailing bytes of {} that do not fill a {} byte row",
            summary.dropped,
            rom.path().display(),
            ROW_LEN
        );
    }
    info!("Wrote {} rows to {}", summary.rows, out_path.display());

    Ok(summary)
}
