//! Wire-encoded timestamps ("horodates") carried by certain labels.
//!
//! Version 02 transmits `SAAMMJJhhmmss`: a season byte (`E`/`e` summer,
//! `H`/`h` winter, space when the meter does not know) followed by six
//! two-digit groups. The PME-PMI variant transmits `JJ/MM/AA HH:MM:SS`.
//! Version 01 has no horodate at all.

use core::fmt;

use zerocopy::FromBytes;

use crate::etiquette::Dialect;

/// Byte layout of a version 02 horodate.
#[derive(FromBytes)]
#[repr(C)]
struct StandardStamp {
    saison: u8,
    annee: [u8; 2],
    mois: [u8; 2],
    jour: [u8; 2],
    heure: [u8; 2],
    minute: [u8; 2],
    seconde: [u8; 2],
}

impl StandardStamp {
    fn of(text: &str) -> Option<Self> {
        let bytes: [u8; 13] = text.as_bytes().try_into().ok()?;
        Some(zerocopy::transmute!(bytes))
    }

    fn valid(&self) -> bool {
        matches!(self.saison, b' ' | b'E' | b'e' | b'H' | b'h')
            && [
                self.annee,
                self.mois,
                self.jour,
                self.heure,
                self.minute,
                self.seconde,
            ]
            .iter()
            .all(|p| p.iter().all(u8::is_ascii_digit))
    }

    /// UTC offset implied by the season byte. Not RFC 3339 when empty, but
    /// still valid ISO 8601.
    fn offset(&self) -> &'static str {
        match self.saison {
            b'E' | b'e' => "+02:00",
            b'H' | b'h' => "+01:00",
            _ => "",
        }
    }
}

/// Byte layout of a PME-PMI horodate.
#[derive(FromBytes)]
#[repr(C)]
struct PmeStamp {
    jour: [u8; 2],
    sl1: u8,
    mois: [u8; 2],
    sl2: u8,
    annee: [u8; 2],
    sp: u8,
    heure: [u8; 2],
    co1: u8,
    minute: [u8; 2],
    co2: u8,
    seconde: [u8; 2],
}

impl PmeStamp {
    fn of(text: &str) -> Option<Self> {
        let bytes: [u8; 17] = text.as_bytes().try_into().ok()?;
        Some(zerocopy::transmute!(bytes))
    }

    fn valid(&self) -> bool {
        self.sl1 == b'/'
            && self.sl2 == b'/'
            && self.sp == b' '
            && self.co1 == b':'
            && self.co2 == b':'
            && [
                self.jour,
                self.mois,
                self.annee,
                self.heure,
                self.minute,
                self.seconde,
            ]
            .iter()
            .all(|p| p.iter().all(u8::is_ascii_digit))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Style {
    Standard,
    Pme,
}

/// A validated horodate, borrowed from the dataset that carried it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Horodate<'a> {
    text: &'a str,
    style: Style,
}

impl<'a> Horodate<'a> {
    /// Whether `bytes` match the dialect's horodate pattern.
    pub fn matches(dialect: Dialect, bytes: &[u8]) -> bool {
        let Ok(text) = core::str::from_utf8(bytes) else {
            return false;
        };
        match dialect {
            Dialect::V01 => false,
            Dialect::V02 => StandardStamp::of(text).is_some_and(|s| s.valid()),
            Dialect::V01Pme => PmeStamp::of(text).is_some_and(|s| s.valid()),
        }
    }

    /// Wrap a validated horodate; `None` when the pattern does not match.
    pub fn new(dialect: Dialect, text: &'a str) -> Option<Self> {
        if !Self::matches(dialect, text.as_bytes()) {
            return None;
        }
        let style = match dialect {
            Dialect::V02 => Style::Standard,
            Dialect::V01Pme => Style::Pme,
            Dialect::V01 => return None,
        };
        Some(Self { text, style })
    }

    /// The horodate exactly as transmitted.
    pub fn as_str(&self) -> &'a str {
        self.text
    }

    /// The season byte of a version 02 horodate.
    pub fn season(&self) -> Option<char> {
        match self.style {
            Style::Standard => self.text.chars().next(),
            Style::Pme => None,
        }
    }

    /// Render as ISO 8601. Version 02 horodates carry a UTC offset derived
    /// from the season byte; PME-PMI horodates have no DST hint and render
    /// without an offset.
    pub fn iso8601(&self) -> Iso8601<'a> {
        Iso8601(*self)
    }
}

/// Displays a [`Horodate`] in ISO 8601 form.
pub struct Iso8601<'a>(Horodate<'a>);

impl fmt::Display for Iso8601<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn pair(p: &[u8; 2]) -> Result<&str, fmt::Error> {
            core::str::from_utf8(p).map_err(|_| fmt::Error)
        }

        match self.0.style {
            Style::Standard => {
                let s = StandardStamp::of(self.0.text).ok_or(fmt::Error)?;
                write!(
                    f,
                    "20{}-{}-{}T{}:{}:{}{}",
                    pair(&s.annee)?,
                    pair(&s.mois)?,
                    pair(&s.jour)?,
                    pair(&s.heure)?,
                    pair(&s.minute)?,
                    pair(&s.seconde)?,
                    s.offset(),
                )
            }
            Style::Pme => {
                let s = PmeStamp::of(self.0.text).ok_or(fmt::Error)?;
                write!(
                    f,
                    "20{}-{}-{}T{}:{}:{}",
                    pair(&s.annee)?,
                    pair(&s.mois)?,
                    pair(&s.jour)?,
                    pair(&s.heure)?,
                    pair(&s.minute)?,
                    pair(&s.seconde)?,
                )
            }
        }
    }
}
