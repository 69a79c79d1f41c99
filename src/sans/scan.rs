//! The scanner state machine.

use thiserror::Error;
use tinyvec::ArrayVec;

use crate::etiquette::{Dialect, Etiquette};
use crate::horodate::Horodate;

use super::check;

/// Start of frame.
pub const STX: u8 = 0x02;
/// End of frame.
pub const ETX: u8 = 0x03;
/// Frame interruption (V01 and V01PME only).
pub const EOT: u8 = 0x04;
/// Start of dataset.
pub const LF: u8 = 0x0A;
/// End of dataset; the preceding byte is the checksum.
pub const CR: u8 = 0x0D;

/// Size of the dataset buffer: longest legal dataset plus slack.
pub const LEXER_BUFFER: usize = 128;

/// An error advancing the scanner over one byte.
///
/// None of these abort the stream: the scanner has already repositioned
/// itself for resynchronisation (next LF for dataset errors, next STX after
/// a truncated frame) when the error is returned.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScanError {
    /// The bytes before the first separator match no label of the dialect.
    #[error("unrecognised label")]
    UnknownLabel,
    /// A byte outside any token context.
    #[error("illegal byte 0x{0:02x}")]
    IllegalByte(u8),
    /// The dataset does not fit the lexer buffer.
    #[error("dataset exceeds the lexer buffer")]
    Overflow,
    /// A dataset missing its separators or terminated early.
    #[error("ill-formed dataset")]
    Malformed,
    /// ETX or EOT arrived in the middle of a dataset; the frame is over.
    #[error("frame terminator inside a dataset")]
    Truncated,
}

/// A dataset whose checksum cleared, borrowed from the scanner buffer.
///
/// The borrow is released as soon as the scanner advances again; consume or
/// copy the spans before pushing the next byte.
#[derive(Debug, Clone, Copy)]
pub struct Dataset<'a> {
    pub etiq: &'static Etiquette,
    /// Horodate span, recognised lexically; absent when the bytes do not
    /// match the dialect's pattern.
    pub horodate: Option<&'a [u8]>,
    /// Data span; empty when the dataset carries none.
    pub data: &'a [u8],
}

/// A protocol token produced by the scanner.
#[derive(Debug, Clone, Copy)]
pub enum Token<'a> {
    /// STX seen; a frame opens.
    FrameStart,
    /// ETX seen; the frame closes normally.
    FrameEnd,
    /// EOT seen; the frame is interrupted (V01/V01PME).
    FrameAbort,
    /// LF seen; a dataset opens and the checksum accumulator is zeroed.
    DatasetStart,
    /// The label matched the dialect table at the first separator.
    Label(&'static Etiquette),
    /// CR closed a dataset and its checksum cleared.
    Dataset(Dataset<'a>),
    /// CR closed a dataset but the checksum did not match.
    DatasetBadCrc,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum State {
    /// Before STX; every byte is discarded.
    Outside,
    /// Inside a frame, between datasets.
    Idle,
    /// After LF, accumulating the label.
    Label,
    /// After the first separator, accumulating until CR.
    Data,
    /// After a dataset error, discarding until the next boundary.
    Skip,
}

/// The scanner: byte stream in, protocol tokens out.
///
/// Reentrant across instances; one per serial port.
pub struct Scanner {
    dialect: Dialect,
    state: State,
    buf: ArrayVec<[u8; LEXER_BUFFER]>,
    /// Offset of the first separator, delimiting the label.
    label_end: usize,
    etiq: Option<&'static Etiquette>,
    sum: u8,
}

impl Scanner {
    pub fn new(dialect: Dialect) -> Self {
        Self {
            dialect,
            state: State::Outside,
            buf: ArrayVec::default(),
            label_end: 0,
            etiq: None,
            sum: 0,
        }
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// Advance the scanner by one byte.
    ///
    /// Returns at most one token. Errors are per-dataset diagnostics, not
    /// stream failures; keep pushing bytes after one.
    pub fn push(&mut self, byte: u8) -> Result<Option<Token<'_>>, ScanError> {
        let sep = self.dialect.separator();

        match self.state {
            State::Outside => match byte {
                STX => Ok(Some(self.enter_frame())),
                _ => Ok(None),
            },

            State::Idle => match byte {
                LF => Ok(Some(self.begin_dataset())),
                ETX => {
                    self.state = State::Outside;
                    Ok(Some(Token::FrameEnd))
                }
                EOT if self.dialect.interruptible() => {
                    self.state = State::Outside;
                    Ok(Some(Token::FrameAbort))
                }
                STX => Ok(Some(self.enter_frame())),
                b => {
                    log::warn!("illegal byte 0x{b:02x} between datasets");
                    self.state = State::Skip;
                    Err(ScanError::IllegalByte(b))
                }
            },

            State::Label => match byte {
                b if b == sep => {
                    let etiq = self.dialect.lookup(&self.buf);
                    match etiq {
                        Some(e) => {
                            self.etiq = Some(e);
                            self.label_end = self.buf.len();
                            self.buffer(byte)?;
                            self.state = State::Data;
                            Ok(Some(Token::Label(e)))
                        }
                        None => {
                            log::warn!("unrecognised label \"{}\"", self.buf.escape_ascii());
                            self.state = State::Skip;
                            Err(ScanError::UnknownLabel)
                        }
                    }
                }
                other => self.push_content(other),
            },

            State::Data => match byte {
                CR => self.close_dataset(),
                other => self.push_content(other),
            },

            State::Skip => match byte {
                LF => Ok(Some(self.begin_dataset())),
                ETX => {
                    self.state = State::Outside;
                    Ok(Some(Token::FrameEnd))
                }
                EOT if self.dialect.interruptible() => {
                    self.state = State::Outside;
                    Ok(Some(Token::FrameAbort))
                }
                STX => Ok(Some(self.enter_frame())),
                _ => Ok(None),
            },
        }
    }

    /// Handle a non-separator byte inside a dataset, in either the label or
    /// the data position.
    fn push_content(&mut self, byte: u8) -> Result<Option<Token<'_>>, ScanError> {
        let sep = self.dialect.separator();
        match byte {
            STX => Ok(Some(self.enter_frame())),
            ETX => {
                self.state = State::Outside;
                Err(ScanError::Truncated)
            }
            EOT if self.dialect.interruptible() => {
                self.state = State::Outside;
                Err(ScanError::Truncated)
            }
            LF => {
                // A dataset restarted without CR; resynchronise on this LF.
                self.reset_dataset();
                self.state = State::Label;
                Err(ScanError::Malformed)
            }
            CR => {
                // Label state only: CR before any separator.
                self.reset_dataset();
                self.state = State::Idle;
                Err(ScanError::Malformed)
            }
            b if b == sep || (0x20..=0x7E).contains(&b) => {
                self.buffer(b)?;
                Ok(None)
            }
            b => {
                log::warn!("illegal byte 0x{b:02x} inside a dataset");
                self.state = State::Skip;
                Err(ScanError::IllegalByte(b))
            }
        }
    }

    fn enter_frame(&mut self) -> Token<'static> {
        self.reset_dataset();
        self.state = State::Idle;
        Token::FrameStart
    }

    fn begin_dataset(&mut self) -> Token<'static> {
        self.reset_dataset();
        self.state = State::Label;
        Token::DatasetStart
    }

    fn reset_dataset(&mut self) {
        self.buf.clear();
        self.label_end = 0;
        self.etiq = None;
        self.sum = 0;
    }

    fn buffer(&mut self, byte: u8) -> Result<(), ScanError> {
        if self.buf.len() == self.buf.capacity() {
            log::warn!("dataset exceeds {LEXER_BUFFER} bytes, dropped");
            self.state = State::Skip;
            return Err(ScanError::Overflow);
        }
        self.sum = self.sum.wrapping_add(byte);
        self.buf.push(byte);
        Ok(())
    }

    /// CR arrived: the last buffered byte is the checksum. Fold, compare and
    /// split the dataset body into its spans.
    fn close_dataset(&mut self) -> Result<Option<Token<'_>>, ScanError> {
        self.state = State::Idle;

        let sep = self.dialect.separator();
        let n = self.buf.len();

        // Body layout: label, separator, middle, separator, checksum byte.
        if n < self.label_end + 3 || self.buf[n - 2] != sep {
            return Err(ScanError::Malformed);
        }
        let etiq = match self.etiq {
            Some(e) => e,
            None => return Err(ScanError::Malformed),
        };

        let found = self.buf[n - 1];
        // The accumulator covered the checksum byte itself; back it out, and
        // in V01/V01PME back out the trailing separator too.
        let mut sum = self.sum.wrapping_sub(found);
        if self.dialect.separator_compensated() {
            sum = sum.wrapping_sub(sep);
        }

        let computed = check::fold(sum);
        if computed != found {
            log::warn!(
                "checksum mismatch for {}: computed 0x{computed:02x}, found 0x{found:02x}",
                etiq.label
            );
            return Ok(Some(Token::DatasetBadCrc));
        }

        let middle = &self.buf[self.label_end + 1..n - 2];
        let (horodate, data) = split_horodate(self.dialect, sep, middle);

        Ok(Some(Token::Dataset(Dataset {
            etiq,
            horodate,
            data,
        })))
    }
}

/// Split the bytes between the label and the checksum into an optional
/// horodate span and the data span. Recognition is lexical: a leading span
/// matching the dialect's horodate pattern, either filling the middle or
/// followed by a separator, is a horodate.
fn split_horodate(dialect: Dialect, sep: u8, middle: &[u8]) -> (Option<&[u8]>, &[u8]) {
    if let Some(len) = dialect.horodate_length() {
        if middle.len() >= len && Horodate::matches(dialect, &middle[..len]) {
            if middle.len() == len {
                return (Some(middle), &[]);
            }
            if middle[len] == sep {
                return (Some(&middle[..len]), &middle[len + 1..]);
            }
        }
    }
    (None, middle)
}
