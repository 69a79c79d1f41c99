//! The label filter and its configuration preloader.
//!
//! A filter file opens with the literal line `#ticfilter`, followed by any
//! number of whitespace-separated labels of the active dialect. Each listed
//! label enables the bit at its tag index; a sink consulting the filter then
//! publishes exactly the listed labels.

use thiserror::Error;

use crate::etiquette::Dialect;

/// The mandatory first line of a filter file.
pub const MAGIC_LINE: &str = "#ticfilter";

/// An error loading a filter configuration. Unlike stream errors these are
/// fatal: a decoder must not start with a filter it could not load.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FilterError {
    #[error("filter configuration must start with a `{MAGIC_LINE}` line")]
    BadMagic,
    #[error("unknown label in filter configuration")]
    UnknownLabel,
}

/// A tag-indexed bitmap gating which fields reach the sink.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Filter {
    bits: [u8; 16],
}

impl Filter {
    /// Load a filter from the text of a configuration file.
    pub fn parse(dialect: Dialect, text: &str) -> Result<Self, FilterError> {
        let mut lines = text.lines();
        if lines.next().map(str::trim) != Some(MAGIC_LINE) {
            return Err(FilterError::BadMagic);
        }

        let mut filter = Self::default();
        for label in lines.flat_map(str::split_ascii_whitespace) {
            match dialect.lookup(label.as_bytes()) {
                Some(etiq) => filter.insert(etiq.tag),
                None => {
                    log::error!("unknown label \"{label}\" in filter configuration");
                    return Err(FilterError::UnknownLabel);
                }
            }
        }
        Ok(filter)
    }

    /// Whether the field with this tag passes the filter.
    pub fn contains(&self, tag: u8) -> bool {
        self.bits
            .get(usize::from(tag >> 3))
            .is_some_and(|byte| byte & (1 << (tag & 7)) != 0)
    }

    fn insert(&mut self, tag: u8) {
        if let Some(byte) = self.bits.get_mut(usize::from(tag >> 3)) {
            *byte |= 1 << (tag & 7);
        }
    }
}
