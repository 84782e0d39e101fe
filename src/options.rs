use serde_derive::{Deserialize, Serialize};
use std::fs::File;
use std::io::{self, BufReader, BufWriter};
use std::path::Path;

/// The default processor speed in hertz (instructions executed per second).
const DEFAULT_PROCESSOR_SPEED_HERTZ: u64 = 720;
/// The default program start address within memory.
const DEFAULT_PROGRAM_ADDRESS: u16 = 0x200;
/// The default font start address within memory.
const DEFAULT_FONT_ADDRESS: u16 = 0x000;

/// How the sprite draw instruction treats pixels that fall past the right or bottom edge of
/// the display.  The starting coordinate is always wrapped onto the display first.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpriteEdge {
    /// Pixels beyond the edge are discarded
    Clip,
    /// Pixels beyond the edge reappear on the opposite side
    Wrap,
}

/// Behavioural choices on instructions whose semantics differ between historic interpreters.
///
/// [Quirks::default()] gives the modern behaviour expected by most programs written today;
/// [Quirks::cosmac_vip()] reproduces the original COSMAC VIP interpreter.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quirks {
    /// FX55 / FX65 leave the index register pointing one past the last byte transferred
    pub load_store_increments_index: bool,
    /// 8XY1 / 8XY2 / 8XY3 reset VF to zero
    pub logic_resets_flag: bool,
    /// 8XY6 / 8XYE shift Vy and store the result in Vx, rather than shifting Vx in place
    pub shift_uses_vy: bool,
    /// BNNN is read as BXNN and jumps to XNN + Vx, rather than NNN + V0
    pub jump_uses_vx: bool,
    /// Sprite behaviour at the display edges
    pub sprite_edge: SpriteEdge,
}

impl Default for Quirks {
    /// Modern behaviour: no quirks enabled, sprites clipped at the display edges.
    fn default() -> Self {
        Quirks {
            load_store_increments_index: false,
            logic_resets_flag: false,
            shift_uses_vy: false,
            jump_uses_vx: false,
            sprite_edge: SpriteEdge::Clip,
        }
    }
}

impl Quirks {
    /// The legacy profile matching the original COSMAC VIP CHIP-8 interpreter.
    pub fn cosmac_vip() -> Self {
        Quirks {
            load_store_increments_index: true,
            logic_resets_flag: true,
            shift_uses_vy: true,
            jump_uses_vx: false,
            sprite_edge: SpriteEdge::Clip,
        }
    }
}

/// A struct to allow specification of start-up parameters.
///
/// An instance is passed to
/// [Processor::initialise_and_load()](crate::processor::Processor::initialise_and_load) when
/// instantiating [Processor](crate::Processor).  Options can be persisted to and restored from
/// JSON files so hosts can keep per-program settings.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Options {
    /// The number of fetch->decode->execute cycles the host intends to run per second; used to
    /// size [Processor::run_frame()](crate::Processor::run_frame).
    pub processor_speed_hertz: u64,
    /// The location in memory at which the program is loaded (and the program counter set).
    pub program_start_address: u16,
    /// The location in memory at which the built-in font is loaded.
    pub font_start_address: u16,
    /// Instruction behaviour choices.
    pub quirks: Quirks,
    /// Seed for the random number instruction; `None` seeds from system entropy.
    pub rng_seed: Option<u64>,
}

impl Default for Options {
    /// Constructor that returns an [Options] instance using typical default settings.
    fn default() -> Self {
        Options {
            processor_speed_hertz: DEFAULT_PROCESSOR_SPEED_HERTZ,
            program_start_address: DEFAULT_PROGRAM_ADDRESS,
            font_start_address: DEFAULT_FONT_ADDRESS,
            quirks: Quirks::default(),
            rng_seed: None,
        }
    }
}

impl Options {
    /// Constructor that returns default settings with the specified quirks profile.
    ///
    /// # Arguments
    ///
    /// * `quirks` - the instruction behaviour profile to use
    pub fn with_quirks(quirks: Quirks) -> Self {
        Options {
            quirks,
            ..Options::default()
        }
    }

    /// Reads an [Options] instance from the JSON file at the specified path.
    ///
    /// # Arguments
    ///
    /// * `path` - the location of the JSON file
    pub fn load_from_file(path: &Path) -> io::Result<Self> {
        let reader = BufReader::new(File::open(path)?);
        let options: Options = serde_json::from_reader(reader)?;
        Ok(options)
    }

    /// Writes this [Options] instance as JSON to the file at the specified path.
    ///
    /// # Arguments
    ///
    /// * `path` - the location of the JSON file, created or truncated as required
    pub fn save_to_file(&self, path: &Path) -> io::Result<()> {
        let writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::fs;

    #[test]
    fn test_default_options() {
        let options: Options = Options::default();
        assert_eq!(options.program_start_address, 0x200);
        assert_eq!(options.font_start_address, 0x000);
        assert_eq!(options.quirks, Quirks::default());
        assert!(options.rng_seed.is_none());
    }

    #[test]
    fn test_cosmac_vip_profile() {
        let quirks: Quirks = Quirks::cosmac_vip();
        assert!(quirks.load_store_increments_index && quirks.logic_resets_flag);
        assert!(quirks.shift_uses_vy && !quirks.jump_uses_vx);
        assert_eq!(quirks.sprite_edge, SpriteEdge::Clip);
    }

    #[test]
    fn test_json_round_trip() {
        let mut options: Options = Options::with_quirks(Quirks::cosmac_vip());
        options.quirks.sprite_edge = SpriteEdge::Wrap;
        options.rng_seed = Some(42);
        let json: String = serde_json::to_string(&options).unwrap();
        let restored: Options = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, options);
    }

    #[test]
    fn test_save_and_load_file() {
        let path = env::temp_dir().join(format!("chip8vm-options-{}.json", std::process::id()));
        let mut options: Options = Options::default();
        options.processor_speed_hertz = 1200;
        options.save_to_file(&path).unwrap();
        let loaded: Options = Options::load_from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(loaded, options);
    }

    #[test]
    fn test_load_malformed_file_error() {
        let path = env::temp_dir().join(format!("chip8vm-bad-{}.json", std::process::id()));
        fs::write(&path, "{ not json").unwrap();
        let result = Options::load_from_file(&path);
        fs::remove_file(&path).unwrap();
        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::InvalidData);
    }
}
