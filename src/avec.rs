//! Drivers for common decoding patterns.
//!
//! The functions in this module pull bytes from a reader or a slice, run
//! them through the [`crate::sans`] scanner and publish decoded fields to
//! the [`FromFrames`] trait. Applications that obtain bytes some other way
//! (an interrupt handler, an async channel) can feed a [`Driver`] directly,
//! one byte at a time.

#[cfg(feature = "json")]
pub mod json;
#[cfg(feature = "std")]
pub mod reader;
pub mod slice;

#[cfg(feature = "std")]
pub use reader::decode as decode_reader;
pub use slice::decode as decode_slice;

use crate::etiquette::{DataType, Dialect};
use crate::field::Field;
use crate::sans::scan::{ScanError, Scanner, Token};

/// Receive decoded fields and frame boundaries.
///
/// Fields borrow the decoder's internal buffer and are only valid for the
/// duration of the callback; copy out whatever must be kept.
#[allow(unused_variables)]
pub trait FromFrames {
    /// Called once per valid dataset, in wire order, as soon as its checksum
    /// clears — even when the surrounding frame later turns out invalid.
    fn print_field(&mut self, field: &Field<'_>);

    /// Called exactly once per frame, valid or not. Implementations
    /// typically emit a frame delimiter here.
    fn frame_sep(&mut self) {}

    /// Called whenever a frame error condition occurs: a dataset error, a
    /// failed checksum, or an interrupted frame. May be called several times
    /// within one frame; implementations should treat it as idempotent until
    /// the next `frame_sep`.
    fn frame_err(&mut self) {}
}

/// The grammar driver: consumes scanner tokens, assembles fields, invokes
/// the sink.
pub struct Driver {
    scanner: Scanner,
    in_frame: bool,
}

impl Driver {
    pub fn new(dialect: Dialect) -> Self {
        Self {
            scanner: Scanner::new(dialect),
            in_frame: false,
        }
    }

    pub fn dialect(&self) -> Dialect {
        self.scanner.dialect()
    }

    /// Feed one byte, publishing whatever completes to the sink.
    pub fn push(&mut self, byte: u8, o: &mut impl FromFrames) {
        let dialect = self.scanner.dialect();

        match self.scanner.push(byte) {
            Err(e) => {
                if self.in_frame {
                    o.frame_err();
                    if e == ScanError::Truncated {
                        o.frame_sep();
                        self.in_frame = false;
                    }
                }
            }
            Ok(None) | Ok(Some(Token::DatasetStart | Token::Label(_))) => {}
            Ok(Some(Token::FrameStart)) => {
                if self.in_frame {
                    // A frame restarted without terminating: close the old
                    // one as erroneous before opening the new one.
                    o.frame_err();
                    o.frame_sep();
                }
                self.in_frame = true;
            }
            Ok(Some(Token::FrameEnd)) => {
                if self.in_frame {
                    o.frame_sep();
                    self.in_frame = false;
                }
            }
            Ok(Some(Token::FrameAbort)) => {
                if self.in_frame {
                    o.frame_err();
                    o.frame_sep();
                    self.in_frame = false;
                }
            }
            Ok(Some(Token::DatasetBadCrc)) => {
                if self.in_frame {
                    o.frame_err();
                }
            }
            Ok(Some(Token::Dataset(dataset))) => match Field::assemble(dialect, dataset) {
                Ok(field) => {
                    if field.unittype().data_type() != DataType::Ignored {
                        o.print_field(&field);
                    }
                }
                Err(e) => {
                    log::warn!("dataset {} dropped: {e}", dataset.etiq.label);
                    o.frame_err();
                }
            },
        }
    }
}
