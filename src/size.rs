use indicatif::{BinaryBytes, DecimalBytes};

/// Unit system used to display storage sizes
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SizeUnit {
    /// Powers of 1000 (kB, MB, GB)
    #[default]
    Si,
    /// Powers of 1024 (KiB, MiB, GiB)
    Iec,
}

impl SizeUnit {
    /// Pick the unit from the `--size-iec` flag.
    pub fn from_iec_flag(iec: bool) -> SizeUnit {
        if iec {
            SizeUnit::Iec
        } else {
            SizeUnit::Si
        }
    }

    /// Format a byte count for display.
    pub fn format(self, bytes: u64) -> String {
        match self {
            SizeUnit::Si => DecimalBytes(bytes).to_string(),
            SizeUnit::Iec => BinaryBytes(bytes).to_string(),
        }
    }
}
