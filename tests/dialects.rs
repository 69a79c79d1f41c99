//! Table invariants and generative coverage of every label.

mod util;

use teleinfo::avec::decode_slice;
use teleinfo::etiquette::{DataType, Etiquette, Shape};
use teleinfo::Dialect;

use util::*;

const DIALECTS: [Dialect; 3] = [Dialect::V01, Dialect::V02, Dialect::V01Pme];

#[test]
fn tags_are_dense_and_labels_unique() {
    for dialect in DIALECTS {
        let table = dialect.etiquettes();
        assert!(table.len() <= 128, "{dialect:?} filter bitmap too small");
        for (i, etiq) in table.iter().enumerate() {
            assert_eq!(etiq.tag as usize, i, "{dialect:?} {} tag", etiq.label);
            assert!(
                table[..i].iter().all(|e| e.label != etiq.label),
                "{dialect:?} duplicate label {}",
                etiq.label
            );
        }
    }
}

#[test]
fn every_label_is_recognised_by_exact_match() {
    for dialect in DIALECTS {
        for etiq in dialect.etiquettes() {
            let found = dialect
                .lookup(etiq.label.as_bytes())
                .unwrap_or_else(|| panic!("{dialect:?} lookup failed for {}", etiq.label));
            assert_eq!(found.tag, etiq.tag);
        }
        assert!(dialect.lookup(b"NOTALABEL").is_none());
    }
}

#[test]
fn v01_never_declares_horodates() {
    assert!(Dialect::V01
        .etiquettes()
        .iter()
        .all(|e| e.shape == Shape::Donnee));
}

fn sample_data(etiq: &Etiquette) -> &'static str {
    match etiq.unittype.data_type() {
        DataType::Integer => "01234",
        DataType::Hex => "003A4001",
        DataType::String => "TEXTE",
        DataType::Profile => "00004003 NONUTILE",
        DataType::Ignored => "0.82",
    }
}

fn sample_dataset(dialect: Dialect, etiq: &Etiquette) -> Vec<u8> {
    let horodate = match dialect {
        Dialect::V01 => None,
        Dialect::V02 => Some("E230601120000"),
        Dialect::V01Pme => Some("01/06/23 12:00:00"),
    };
    let (hd, data) = match etiq.shape {
        Shape::Donnee => (None, sample_data(etiq)),
        Shape::HorodateDonnee => (horodate, sample_data(etiq)),
        Shape::HorodateSeule => (horodate, ""),
    };
    match dialect {
        Dialect::V02 => dataset_ht(etiq.label, hd, data),
        Dialect::V01 | Dialect::V01Pme => dataset_sp(etiq.label, hd, data),
    }
}

/// Every label of every dialect round-trips through an assembled dataset.
#[test]
fn every_label_decodes() {
    for dialect in DIALECTS {
        for etiq in dialect.etiquettes() {
            let bytes = frame(&[sample_dataset(dialect, etiq)]);
            let mut r = Recorder::default();
            decode_slice(dialect, &bytes, &mut r);

            assert_eq!(r.frames, vec![true], "{dialect:?} {}", etiq.label);
            if etiq.unittype.data_type() == DataType::Ignored {
                assert!(r.fields.is_empty(), "{dialect:?} {} published", etiq.label);
            } else {
                assert_eq!(r.fields.len(), 1, "{dialect:?} {}", etiq.label);
                assert_eq!(r.fields[0].label, etiq.label);
            }
        }
    }
}

/// A flipped checksum byte drops the dataset for every label of every
/// dialect.
#[test]
fn every_label_rejects_bad_checksum() {
    for dialect in DIALECTS {
        for etiq in dialect.etiquettes() {
            let bytes = frame(&[corrupt(sample_dataset(dialect, etiq))]);
            let mut r = Recorder::default();
            decode_slice(dialect, &bytes, &mut r);

            assert_eq!(r.frames, vec![false], "{dialect:?} {}", etiq.label);
            assert!(r.fields.is_empty(), "{dialect:?} {}", etiq.label);
        }
    }
}

/// A horodate where the label forbids one is a dataset error, not a field.
#[test]
fn unexpected_horodate_is_rejected() {
    let bytes = frame(&[dataset_ht("EAST", Some("E230601120000"), "0050000")]);
    let mut r = Recorder::default();
    decode_slice(Dialect::V02, &bytes, &mut r);

    assert!(r.fields.is_empty());
    assert_eq!(r.frames, vec![false]);
}

/// A missing horodate where the label requires one is a dataset error.
#[test]
fn missing_horodate_is_rejected() {
    let bytes = frame(&[dataset_ht("SMAXSN", None, "05230")]);
    let mut r = Recorder::default();
    decode_slice(Dialect::V02, &bytes, &mut r);

    assert!(r.fields.is_empty());
    assert_eq!(r.frames, vec![false]);
}
