//! Slice-based decoder implementation.

use crate::etiquette::Dialect;

use super::{Driver, FromFrames};

/// Decode frames from a slice of captured bytes, publishing to a sink.
///
/// This method is also re-exported as `teleinfo::avec::decode_slice`.
///
/// Stream anomalies are not failures: bad datasets are dropped and reported
/// through the sink's `frame_err`, exactly as for live input.
pub fn decode(dialect: Dialect, r: &[u8], o: &mut impl FromFrames) {
    let mut driver = Driver::new(dialect);
    for &byte in r {
        driver.push(byte, o);
    }
}
