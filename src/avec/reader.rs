//! Reader-based decoder implementation.
//!
//! _Requires Cargo feature `std`._

extern crate std;

use std::io::{self, Read};

use crate::etiquette::Dialect;

use super::{Driver, FromFrames};

/// Decode frames from a reader until end of input, publishing to a sink.
///
/// This method is also re-exported as `teleinfo::avec::decode_reader`.
///
/// Only I/O errors from the supplied reader are failures; stream anomalies
/// are dropped and reported through the sink's `frame_err`. End of input
/// terminates cleanly at the next byte boundary, discarding any frame left
/// open.
pub fn decode(dialect: Dialect, r: &mut impl Read, o: &mut impl FromFrames) -> io::Result<()> {
    let mut driver = Driver::new(dialect);
    let mut chunk = [0u8; 256];

    loop {
        let n = match r.read(&mut chunk) {
            Ok(0) => return Ok(()),
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        for &byte in &chunk[..n] {
            driver.push(byte, o);
        }
    }
}
