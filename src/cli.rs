use clap::Parser;

/// Default location of the ROM image to convert.
pub const DEFAULT_ROM_PATH: &str = "./rom.gb";
/// Default location of the generated header.
pub const DEFAULT_HEADER_PATH: &str = "./rom.h";

/// Dump a ROM image as a comma separated hex array, 16 bytes per line.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the ROM image to read.
    #[arg(default_value = DEFAULT_ROM_PATH)]
    pub rom: std::path::PathBuf,

    /// Path of the header file to write. Truncated if it already exists.
    #[arg(default_value = DEFAULT_HEADER_PATH)]
    pub header: std::path::PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_fixed_paths() {
        let args = Args::try_parse_from(["rom-header"]).unwrap();

        assert_eq!(args.rom, std::path::PathBuf::from(DEFAULT_ROM_PATH));
        assert_eq!(args.header, std::path::PathBuf::from(DEFAULT_HEADER_PATH));
    }

    #[test]
    fn overrides_paths() {
        let args = Args::try_parse_from(["rom-header", "game.gb", "out/game.h"]).unwrap();

        assert_eq!(args.rom, std::path::PathBuf::from("game.gb"));
        assert_eq!(args.header, std::path::PathBuf::from("out/game.h"));
    }

    #[test]
    fn rejects_format_options() {
        assert!(Args::try_parse_from(["rom-header", "--width", "8"]).is_err());
    }
}
