//! Byte-driven scanner for implementing decoders.
//!
//! This module is intended for applications that need fine control over
//! decoder internals, such as feeding bytes from an interrupt handler on an
//! embedded target. See [`crate::avec`] for drivers covering common decoding
//! patterns.
//!
//! # Architecture
//!
//! The [`scan::Scanner`] is a small state machine advanced one byte at a
//! time. It recognises the framing control bytes (STX, ETX, EOT, LF, CR) and
//! the dialect separator, matches labels against the active dialect's static
//! table, and accumulates the per-dataset checksum as content bytes arrive.
//! When a carriage return closes a dataset whose checksum holds, the whole
//! dataset body is delivered as a single [`scan::Token::Dataset`] borrowing
//! the scanner's internal buffer; the borrow ends before the next byte is
//! pushed.
//!
//! Memory use is constant: one fixed buffer of [`scan::LEXER_BUFFER`] bytes,
//! sized for the longest legal dataset plus slack. Anything longer is a
//! lexical error.
//!
//! Some responsibilities are deliberately left to callers:
//!
//! - Reading bytes from the serial line, including any blocking or
//!   buffering policy.
//!
//! - Enforcing the legal shape of each dataset for its label (horodate
//!   presence, data presence). The scanner's classification is purely
//!   lexical; see [`crate::field::Field`].
//!
//! - Tracking frame validity across dataset errors. The scanner reports
//!   each anomaly once and resynchronises on its own.

pub mod check;
pub mod scan;

pub use scan::Scanner;
