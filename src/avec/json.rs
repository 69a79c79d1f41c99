//! JSON frame sink.
//!
//! _Requires Cargo feature `json`._
//!
//! Emits exactly one root JSON value per frame, terminated by a newline.
//! In list mode the root is an array of field objects carrying their label;
//! in dictionary mode it is an object keyed by label, closed by a
//! `"_tvalide"` entry reporting 1 for a frame without errors and 0
//! otherwise. Datasets dropped by the filters are omitted; the root value
//! may be empty but is still emitted.

extern crate std;

use std::io::{self, Write};
use std::string::{String, ToString};
use std::vec::Vec;

use either::Either::{Left, Right};
use serde_json::{json, Map, Value};

use crate::etiquette::{DataType, Unit};
use crate::field::Field;
use crate::filter::Filter;
use crate::profile;
use crate::stge::StatusRegister;

use super::FromFrames;

/// Output options, all off by default.
#[derive(Debug, Default)]
pub struct Options {
    /// Emit frames as label-keyed dictionaries instead of lists, adding the
    /// `_tvalide` validity entry.
    pub dict: bool,
    /// Pretty-print, one line per field.
    pub per_field_lines: bool,
    /// Add the long description and unit to each field.
    pub descriptions: bool,
    /// Re-emit horodates as ISO 8601 instead of echoing them verbatim.
    pub long_dates: bool,
    /// Decode the status register into its bit-range summary.
    pub decode_status: bool,
    /// Decode day-profile fields into schedule arrays.
    pub format_profiles: bool,
    /// Omit numeric fields whose value is zero.
    pub mask_zeroes: bool,
    /// Emit one frame out of `skip_frames + 1`.
    pub skip_frames: u32,
    /// Tag every emitted field with an `"id"` entry.
    pub id: Option<String>,
    /// Label filter; fields whose tag is not enabled are omitted.
    pub filter: Option<Filter>,
}

enum FrameBuf {
    List(Vec<Value>),
    Dict(Map<String, Value>),
}

impl FrameBuf {
    fn empty(dict: bool) -> Self {
        if dict {
            FrameBuf::Dict(Map::new())
        } else {
            FrameBuf::List(Vec::new())
        }
    }
}

/// A [`FromFrames`] sink writing JSON frames to a writer.
pub struct Json<W: Write> {
    out: W,
    opts: Options,
    frame: FrameBuf,
    ferr: bool,
    countdown: u32,
    error: Option<io::Error>,
}

impl<W: Write> Json<W> {
    pub fn new(out: W, opts: Options) -> Self {
        let frame = FrameBuf::empty(opts.dict);
        Self {
            out,
            opts,
            frame,
            ferr: false,
            countdown: 0,
            error: None,
        }
    }

    /// Flush and hand the writer back, surfacing any write error that
    /// occurred while sinking frames.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(e) = self.error {
            return Err(e);
        }
        self.out.flush()?;
        Ok(self.out)
    }

    fn render_data(&self, field: &Field<'_>) -> Value {
        match field.payload() {
            Some(Left(text)) => {
                if field.unittype().data_type() == DataType::Profile && self.opts.format_profiles {
                    day_profile_value(text)
                } else {
                    Value::String(text.to_string())
                }
            }
            Some(Right(value)) => {
                // The status register is the only dimensionless hex field.
                let stge = field.unittype().data_type() == DataType::Hex
                    && field.unittype().unit() == Unit::Sans;
                if stge && self.opts.decode_status {
                    serde_json::to_value(StatusRegister::from(value as u32).summary())
                        .unwrap_or(Value::Null)
                } else {
                    Value::Number(value.into())
                }
            }
            None => Value::Null,
        }
    }
}

impl<W: Write> FromFrames for Json<W> {
    fn print_field(&mut self, field: &Field<'_>) {
        if self.countdown != 0 {
            return;
        }
        if let Some(filter) = &self.opts.filter {
            if !filter.contains(field.tag()) {
                return;
            }
        }
        if self.opts.mask_zeroes && field.payload() == Some(Right(0)) {
            return;
        }

        let mut entry = Map::new();
        if !self.opts.dict {
            entry.insert("label".into(), json!(field.label()));
        }
        entry.insert("data".into(), self.render_data(field));
        if let Some(horodate) = field.horodate() {
            let text = if self.opts.long_dates {
                horodate.iso8601().to_string()
            } else {
                horodate.as_str().to_string()
            };
            entry.insert("horodate".into(), Value::String(text));
        }
        if self.opts.descriptions {
            entry.insert("desc".into(), json!(field.etiquette().desc));
            entry.insert("unit".into(), json!(field.unittype().unit().symbol()));
        }
        if let Some(id) = &self.opts.id {
            entry.insert("id".into(), json!(id));
        }

        match &mut self.frame {
            FrameBuf::List(fields) => fields.push(Value::Object(entry)),
            FrameBuf::Dict(frame) => {
                frame.insert(field.label().into(), Value::Object(entry));
            }
        }
    }

    fn frame_sep(&mut self) {
        let emit = self.countdown == 0;
        if emit {
            self.countdown = self.opts.skip_frames;
        } else {
            self.countdown -= 1;
        }

        let frame = core::mem::replace(&mut self.frame, FrameBuf::empty(self.opts.dict));
        let valid = !self.ferr;
        self.ferr = false;

        if !emit || self.error.is_some() {
            return;
        }

        let root = match frame {
            FrameBuf::List(fields) => Value::Array(fields),
            FrameBuf::Dict(mut frame) => {
                frame.insert("_tvalide".into(), json!(valid as u8));
                Value::Object(frame)
            }
        };

        let written = if self.opts.per_field_lines {
            serde_json::to_writer_pretty(&mut self.out, &root)
        } else {
            serde_json::to_writer(&mut self.out, &root)
        };
        if let Err(e) = written
            .map_err(io::Error::from)
            .and_then(|()| self.out.write_all(b"\n"))
        {
            log::error!("writing frame: {e}");
            self.error = Some(e);
        }
    }

    fn frame_err(&mut self) {
        self.ferr = true;
    }
}

/// Render a day-profile payload as a schedule array, falling back to the
/// verbatim string when a block does not parse.
fn day_profile_value(text: &str) -> Value {
    let entries: Result<Vec<_>, _> = profile::entries(text)
        .map(|entry| {
            entry.map(|e| {
                json!({
                    "start_time": std::format!("{:02}:{:02}", e.hour, e.minute),
                    "action": e.action,
                })
            })
        })
        .collect();

    match entries {
        Ok(entries) => Value::Array(entries),
        Err(e) => {
            log::warn!("day profile left verbatim: {e}");
            Value::String(text.to_string())
        }
    }
}
