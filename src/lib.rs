#![no_std]

//! A streaming decoder for the ENEDIS *Télé-Information Client* (TIC) meter
//! protocol.
//!
//! French electrical meters emit an endless sequence of frames on a 7E1
//! serial line; each frame groups datasets of the form `label`, optional
//! timestamp ("horodate"), optional data and a one-byte checksum. Three
//! protocol dialects are supported: version 01 "historique" (legacy meters
//! and Linky in compatibility mode), version 02 "standard" (Linky in native
//! mode) and the PME-PMI variant of version 01 used by commercial meters.
//!
//! Most users should begin with the drivers in the [`avec`] module, which
//! pull bytes from a reader or a slice and publish decoded fields to the
//! [`avec::FromFrames`] trait. Applications needing finer control over
//! internals (such as those running on embedded systems, feeding the decoder
//! one byte at a time from a UART interrupt) can drive the [`sans`] scanner
//! directly.
//!
//! Decoding is byte-driven and allocation-free: the scanner holds a single
//! fixed-size dataset buffer, and decoded fields borrow from it only for the
//! duration of the sink callback. One frame of a thousand datasets costs no
//! more memory than a frame of one.
//!
//! ## Cargo features
//!
//! The following crate feature flags are available:
//!
//! - `std`: enable the reader-based decoder (default).
//! - `serde`: enable `serde::Serialize` on decoded-value types.
//! - `json`: enable the JSON frame sink (default; implies `std` and `serde`).
//! - `cli`: build the `teleinfo2json` command-line tool (default).

pub mod avec;
pub mod etiquette;
pub mod field;
pub mod filter;
pub mod horodate;
pub mod profile;
pub mod sans;
pub mod stge;

pub use etiquette::Dialect;
