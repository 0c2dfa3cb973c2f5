use std::path::{Path, PathBuf};

/// Frame sizes embedded in the icon, smallest first.
pub const ICON_SIZES: [u32; 6] = [16, 32, 48, 64, 128, 256];

/// Source SVG, relative to the working directory.
pub const INPUT_PATH: &str = "GlobalAudio/icon.svg";

/// Destination icon, relative to the working directory.
pub const OUTPUT_PATH: &str = "GlobalAudio/app.ico";

/// The input/output pair for one conversion.
///
/// The binary only ever runs [`IconJob::default`]; other paths are for tests.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IconJob {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl IconJob {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
        }
    }

    pub fn input(&self) -> &Path {
        &self.input
    }

    pub fn output(&self) -> &Path {
        &self.output
    }
}

impl Default for IconJob {
    fn default() -> Self {
        Self::new(INPUT_PATH, OUTPUT_PATH)
    }
}
