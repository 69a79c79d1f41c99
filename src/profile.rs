//! Decoder for day-profile fields (`PJOURF+1`, `PPOINTE`).
//!
//! The payload is up to eleven whitespace-separated eight-character blocks.
//! Each block is `HHMMSSSS`: a start time followed by a 16-bit action code
//! in hexadecimal. The literal `NONUTILE` marks the first unused slot and
//! ends the schedule.

use thiserror::Error;

/// Maximum number of blocks in a day profile.
pub const MAX_BLOCKS: usize = 11;

/// An error decoding one day-profile block.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProfileError {
    #[error("malformed day-profile block")]
    BadBlock,
}

/// One schedule entry of a day profile.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Entry {
    pub hour: u8,
    pub minute: u8,
    /// The switching actions, one bit per output.
    pub action: u16,
}

/// Iterate over the entries of a day-profile payload, stopping before the
/// first `NONUTILE`.
pub fn entries(data: &str) -> impl Iterator<Item = Result<Entry, ProfileError>> + '_ {
    data.split_ascii_whitespace()
        .take(MAX_BLOCKS)
        .take_while(|block| !block.starts_with('N'))
        .map(parse_block)
}

fn parse_block(block: &str) -> Result<Entry, ProfileError> {
    if block.len() != 8 || !block.is_ascii() {
        return Err(ProfileError::BadBlock);
    }
    let hour = block[0..2].parse().map_err(|_| ProfileError::BadBlock)?;
    let minute = block[2..4].parse().map_err(|_| ProfileError::BadBlock)?;
    let action = u16::from_str_radix(&block[4..8], 16).map_err(|_| ProfileError::BadBlock)?;
    Ok(Entry {
        hour,
        minute,
        action,
    })
}
