#![allow(dead_code)]

use either::Either;

use teleinfo::avec::FromFrames;
use teleinfo::etiquette::Unit;
use teleinfo::field::Field;

pub const STX: u8 = 0x02;
pub const ETX: u8 = 0x03;
pub const EOT: u8 = 0x04;
pub const LF: u8 = 0x0A;
pub const CR: u8 = 0x0D;
pub const HT: u8 = 0x09;
pub const SP: u8 = 0x20;

/// Fold covered bytes into the transmitted checksum byte.
pub fn fold(covered: &[u8]) -> u8 {
    (covered.iter().fold(0u8, |acc, b| acc.wrapping_add(*b)) & 0x3F) + 0x20
}

/// Assemble a V02 dataset; the checksum covers the whole body, trailing
/// separator included.
pub fn dataset_ht(label: &str, horodate: Option<&str>, data: &str) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(label.as_bytes());
    body.push(HT);
    if let Some(hd) = horodate {
        body.extend_from_slice(hd.as_bytes());
        body.push(HT);
    }
    body.extend_from_slice(data.as_bytes());
    body.push(HT);

    let ck = fold(&body);
    let mut dataset = vec![LF];
    dataset.extend_from_slice(&body);
    dataset.push(ck);
    dataset.push(CR);
    dataset
}

/// Assemble a V01/V01PME dataset; the checksum excludes the trailing
/// separator.
pub fn dataset_sp(label: &str, horodate: Option<&str>, data: &str) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(label.as_bytes());
    body.push(SP);
    if let Some(hd) = horodate {
        body.extend_from_slice(hd.as_bytes());
        body.push(SP);
    }
    body.extend_from_slice(data.as_bytes());
    body.push(SP);

    let ck = fold(&body[..body.len() - 1]);
    let mut dataset = vec![LF];
    dataset.extend_from_slice(&body);
    dataset.push(ck);
    dataset.push(CR);
    dataset
}

/// Flip the low bit of the checksum byte; the result stays a legal checksum
/// value but no longer matches.
pub fn corrupt(mut dataset: Vec<u8>) -> Vec<u8> {
    let i = dataset.len() - 2;
    dataset[i] ^= 0x01;
    dataset
}

pub fn frame(datasets: &[Vec<u8>]) -> Vec<u8> {
    frame_ending(datasets, ETX)
}

pub fn frame_ending(datasets: &[Vec<u8>], terminator: u8) -> Vec<u8> {
    let mut bytes = vec![STX];
    for dataset in datasets {
        bytes.extend_from_slice(dataset);
    }
    bytes.push(terminator);
    bytes
}

/// An owned copy of one published field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recorded {
    pub label: String,
    pub text: Option<String>,
    pub value: Option<i64>,
    pub horodate: Option<String>,
    pub unit: Unit,
}

/// A sink recording everything it receives.
#[derive(Default)]
pub struct Recorder {
    pub fields: Vec<Recorded>,
    /// One entry per frame: `true` when the frame saw no error.
    pub frames: Vec<bool>,
    ferr: bool,
}

impl FromFrames for Recorder {
    fn print_field(&mut self, field: &Field<'_>) {
        let (text, value) = match field.payload() {
            Some(Either::Left(s)) => (Some(s.to_string()), None),
            Some(Either::Right(i)) => (None, Some(i)),
            None => (None, None),
        };
        self.fields.push(Recorded {
            label: field.label().to_string(),
            text,
            value,
            horodate: field.horodate().map(|h| h.as_str().to_string()),
            unit: field.unittype().unit(),
        });
    }

    fn frame_sep(&mut self) {
        self.frames.push(!self.ferr);
        self.ferr = false;
    }

    fn frame_err(&mut self) {
        self.ferr = true;
    }
}
