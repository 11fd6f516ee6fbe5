pub mod crack;
pub mod sum;

use clap::ValueEnum;

/// How a checksum is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Signed 32-bit decimal, as the module returns it.
    Signed,
    /// The same bits read as an unsigned 32-bit decimal.
    Unsigned,
    /// `0x`-prefixed, eight hex digits.
    Hex,
}

impl Format {
    pub fn render(self, value: i32) -> String {
        match self {
            Format::Signed => value.to_string(),
            Format::Unsigned => (value as u32).to_string(),
            Format::Hex => format!("{:#010x}", value as u32),
        }
    }
}

/// Parse a checksum given as signed decimal, unsigned decimal, or `0x` hex.
///
/// Values in `i32::MAX + 1 ..= u32::MAX` are taken as the unsigned view of
/// the same bits, so `2495677951` and `-1799289345` name the same checksum.
pub fn parse_checksum(s: &str) -> Result<i32, String> {
    if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        return u32::from_str_radix(hex, 16)
            .map(|v| v as i32)
            .map_err(|e| format!("invalid hex checksum {s:?}: {e}"));
    }

    let wide: i64 = s
        .parse()
        .map_err(|e| format!("invalid checksum {s:?}: {e}"))?;
    if let Ok(v) = i32::try_from(wide) {
        Ok(v)
    } else if let Ok(v) = u32::try_from(wide) {
        Ok(v as i32)
    } else {
        Err(format!("checksum {s} does not fit in 32 bits"))
    }
}
