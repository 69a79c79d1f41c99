//! The decoded representation of a dataset.

use either::Either::{self, Left, Right};
use thiserror::Error;

use crate::etiquette::{DataType, Dialect, Etiquette, Shape, Unit, UnitType};
use crate::horodate::Horodate;
use crate::sans::scan::Dataset;

/// An error assembling a field from a scanned dataset.
///
/// These are grammar errors: the dataset was well-formed and its checksum
/// cleared, but its shape does not fit the label.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FieldError {
    #[error("horodate not allowed for this label")]
    UnexpectedHorodate,
    #[error("missing horodate")]
    MissingHorodate,
    #[error("missing data")]
    MissingData,
    #[error("data not allowed after this horodate")]
    UnexpectedData,
    #[error("ill-formed horodate")]
    BadHorodate,
    #[error("payload is not valid UTF-8")]
    NotUtf8,
}

/// A decoded dataset, borrowed from the scanner buffer.
///
/// Valid until the sink callback returns; copy out whatever must outlive it.
#[derive(Debug, Clone, Copy)]
pub struct Field<'a> {
    etiq: &'static Etiquette,
    unittype: UnitType,
    payload: Option<Either<&'a str, i64>>,
    horodate: Option<Horodate<'a>>,
}

impl<'a> Field<'a> {
    /// Assemble a field from a dataset that passed its checksum, enforcing
    /// the label's legal shape and parsing the payload.
    pub fn assemble(dialect: Dialect, dataset: Dataset<'a>) -> Result<Self, FieldError> {
        let Dataset {
            etiq,
            horodate,
            data,
        } = dataset;

        match etiq.shape {
            Shape::Donnee => {
                if horodate.is_some() {
                    return Err(FieldError::UnexpectedHorodate);
                }
                if data.is_empty() {
                    return Err(FieldError::MissingData);
                }
            }
            Shape::HorodateDonnee => {
                if horodate.is_none() {
                    return Err(FieldError::MissingHorodate);
                }
                if data.is_empty() {
                    return Err(FieldError::MissingData);
                }
            }
            Shape::HorodateSeule => {
                if horodate.is_none() {
                    return Err(FieldError::MissingHorodate);
                }
                if !data.is_empty() {
                    return Err(FieldError::UnexpectedData);
                }
            }
        }

        let data = core::str::from_utf8(data).map_err(|_| FieldError::NotUtf8)?;
        let horodate = match horodate {
            Some(bytes) => {
                let text = core::str::from_utf8(bytes).map_err(|_| FieldError::NotUtf8)?;
                Some(Horodate::new(dialect, text).ok_or(FieldError::BadHorodate)?)
            }
            None => None,
        };

        let mut unittype = etiq.unittype;
        let payload = match unittype.data_type() {
            DataType::Ignored => {
                // Parsed for the checksum, published to no one.
                return Ok(Self {
                    etiq,
                    unittype,
                    payload: None,
                    horodate: None,
                });
            }
            DataType::String | DataType::Profile => Some(Left(data)),
            DataType::Hex => Some(Right(parse_prefix(data, 16).0)),
            DataType::Integer => {
                let (value, rem) = parse_prefix(data, 10);
                if dialect == Dialect::V01Pme
                    && unittype.unit() == Unit::Sans
                    && !data.is_empty()
                    && !rem.is_empty()
                {
                    // Unitless integer with a suffix: the payload names its
                    // own unit, either kVA or kW.
                    match rem.as_bytes()[rem.len() - 1] {
                        b'A' => unittype = unittype.with_unit(Unit::KVA),
                        b'W' => unittype = unittype.with_unit(Unit::KW),
                        _ => (),
                    }
                }
                Some(Right(value))
            }
        };

        Ok(Self {
            etiq,
            unittype,
            payload,
            horodate,
        })
    }

    pub fn etiquette(&self) -> &'static Etiquette {
        self.etiq
    }

    /// The field's unit and type. May differ from the table's when a V01PME
    /// payload suffix reclassified the unit.
    pub fn unittype(&self) -> UnitType {
        self.unittype
    }

    pub fn tag(&self) -> u8 {
        self.etiq.tag
    }

    pub fn label(&self) -> &'static str {
        self.etiq.label
    }

    /// The payload: text for string and profile types, a signed integer
    /// otherwise. `None` for ignored fields.
    pub fn payload(&self) -> Option<Either<&'a str, i64>> {
        self.payload
    }

    pub fn horodate(&self) -> Option<&Horodate<'a>> {
        self.horodate.as_ref()
    }
}

/// Parse the longest integer prefix of `s` in the given radix, returning the
/// value and the unconsumed remainder. Yields 0 and the whole input when no
/// digits are present; saturates on overflow.
fn parse_prefix(s: &str, radix: u32) -> (i64, &str) {
    let bytes = s.as_bytes();
    let mut i = 0;

    while i < bytes.len() && bytes[i] == b' ' {
        i += 1;
    }
    let start = i;
    let negative = matches!(bytes.get(i), Some(&b'-'));
    if matches!(bytes.get(i), Some(&(b'-' | b'+'))) {
        i += 1;
    }
    let digits = i;
    while i < bytes.len() && (bytes[i] as char).is_digit(radix) {
        i += 1;
    }
    if i == digits {
        return (0, s);
    }

    let value = i64::from_str_radix(&s[start..i], radix).unwrap_or(if negative {
        i64::MIN
    } else {
        i64::MAX
    });
    (value, &s[i..])
}
