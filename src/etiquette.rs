//! Protocol dialects and their static label tables.
//!
//! Every dataset on the wire opens with an "etiquette", a short ASCII label
//! naming the quantity it carries. Each dialect publishes a closed set of
//! labels; the scanner only accepts labels present in the active dialect's
//! table, by exact match.

pub mod v01;
pub mod v01pme;
pub mod v02;

/// Physical unit of a dataset value.
///
/// Fits in the low nibble of a [`UnitType`] octet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Unit {
    /// Dimensionless.
    Sans = 0x00,
    VAh,
    KWh,
    Wh,
    KVArh,
    VArh,
    A,
    V,
    KVA,
    VA,
    KW,
    W,
    Min,
    DaL,
}

impl Unit {
    /// The display symbol used on meter listings, empty when dimensionless.
    pub const fn symbol(self) -> &'static str {
        match self {
            Unit::Sans => "",
            Unit::VAh => "VAh",
            Unit::KWh => "kWh",
            Unit::Wh => "Wh",
            Unit::KVArh => "kVArh",
            Unit::VArh => "VArh",
            Unit::A => "A",
            Unit::V => "V",
            Unit::KVA => "kVA",
            Unit::VA => "VA",
            Unit::KW => "kW",
            Unit::W => "W",
            Unit::Min => "mn",
            Unit::DaL => "daL",
        }
    }
}

/// Payload form of a dataset value.
///
/// Fits in the high nibble of a [`UnitType`] octet. Everything is an integer
/// unless stated otherwise.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum DataType {
    /// Decimal integer.
    Integer = 0x00,
    /// Free-form text, ownership of the payload passes to the field.
    String = 0x10,
    /// Hexadecimal integer (the status register).
    Hex = 0x20,
    /// Day-profile blob, see [`crate::profile`].
    Profile = 0x30,
    /// Present on the wire but never published; the payload still counts
    /// toward the checksum.
    Ignored = 0x40,
}

/// Combined [`Unit`] and [`DataType`], packed in one octet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnitType(u8);

impl UnitType {
    pub const fn new(unit: Unit, data_type: DataType) -> Self {
        Self(unit as u8 | data_type as u8)
    }

    pub const fn unit(self) -> Unit {
        match self.0 & 0x0F {
            0x00 => Unit::Sans,
            0x01 => Unit::VAh,
            0x02 => Unit::KWh,
            0x03 => Unit::Wh,
            0x04 => Unit::KVArh,
            0x05 => Unit::VArh,
            0x06 => Unit::A,
            0x07 => Unit::V,
            0x08 => Unit::KVA,
            0x09 => Unit::VA,
            0x0A => Unit::KW,
            0x0B => Unit::W,
            0x0C => Unit::Min,
            _ => Unit::DaL,
        }
    }

    pub const fn data_type(self) -> DataType {
        match self.0 & 0xF0 {
            0x00 => DataType::Integer,
            0x10 => DataType::String,
            0x20 => DataType::Hex,
            0x30 => DataType::Profile,
            _ => DataType::Ignored,
        }
    }

    /// The raw packed octet.
    pub const fn raw(self) -> u8 {
        self.0
    }

    pub(crate) const fn with_unit(self, unit: Unit) -> Self {
        Self(self.0 & 0xF0 | unit as u8)
    }
}

/// Legal shape of a dataset for a given label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shape {
    /// `label SEP data SEP checksum` — no horodate.
    Donnee,
    /// `label SEP horodate SEP data SEP checksum`.
    HorodateDonnee,
    /// `label SEP horodate SEP [SEP] checksum` — data absent or empty.
    HorodateSeule,
}

/// One row of a dialect table.
#[derive(Clone, Copy, Debug)]
pub struct Etiquette {
    /// Dense dialect-local id, equal to the row's table index. Also the
    /// field's index in a [`crate::filter::Filter`] bitmap.
    pub tag: u8,
    pub unittype: UnitType,
    pub shape: Shape,
    /// The label as transmitted on the wire.
    pub label: &'static str,
    /// Human-readable description, as published by the grid operator.
    pub desc: &'static str,
}

pub(crate) const fn etiq(
    tag: u8,
    label: &'static str,
    unit: Unit,
    data_type: DataType,
    shape: Shape,
    desc: &'static str,
) -> Etiquette {
    Etiquette {
        tag,
        unittype: UnitType::new(unit, data_type),
        shape,
        label,
        desc,
    }
}

/// A TIC protocol dialect. Fixed for the lifetime of a decoder.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dialect {
    /// Version 01 "historique", 1200 baud.
    V01,
    /// Version 02 "standard" (Linky native mode), 9600 baud.
    V02,
    /// PME-PMI variant of version 01, up to 19200 baud.
    V01Pme,
}

impl Dialect {
    /// The byte separating the tokens of a dataset.
    pub const fn separator(self) -> u8 {
        match self {
            Dialect::V02 => 0x09,              // HT
            Dialect::V01 | Dialect::V01Pme => 0x20, // SP
        }
    }

    /// Whether the dialect can interrupt a frame with EOT.
    pub const fn interruptible(self) -> bool {
        matches!(self, Dialect::V01 | Dialect::V01Pme)
    }

    /// Whether the separator preceding the checksum byte is summed on the
    /// wire but excluded from the published checksum (one 0x20 is subtracted
    /// before folding).
    pub const fn separator_compensated(self) -> bool {
        matches!(self, Dialect::V01 | Dialect::V01Pme)
    }

    /// Byte length of the dialect's horodate, if it carries one.
    pub const fn horodate_length(self) -> Option<usize> {
        match self {
            Dialect::V01 => None,
            Dialect::V02 => Some(13),    // SAAMMJJhhmmss
            Dialect::V01Pme => Some(17), // JJ/MM/AA HH:MM:SS
        }
    }

    /// The dialect's static label table, indexed by tag.
    pub const fn etiquettes(self) -> &'static [Etiquette] {
        match self {
            Dialect::V01 => v01::ETIQUETTES,
            Dialect::V02 => v02::ETIQUETTES,
            Dialect::V01Pme => v01pme::ETIQUETTES,
        }
    }

    /// Look a label up by exact match.
    pub fn lookup(self, label: &[u8]) -> Option<&'static Etiquette> {
        self.etiquettes()
            .iter()
            .find(|e| e.label.as_bytes() == label)
    }
}
