//! Value decoders: status register, day profiles, horodates, filters.

use teleinfo::etiquette::Dialect;
use teleinfo::filter::{Filter, FilterError};
use teleinfo::horodate::Horodate;
use teleinfo::profile::{self, Entry, ProfileError};
use teleinfo::stge::StatusRegister;

#[test]
fn status_register_all_zeroes() {
    let s = StatusRegister::from(0x0000_0000).summary();

    assert_eq!(s.contact_sec, "fermé");
    assert_eq!(s.organe_coupure, Some("fermé"));
    assert_eq!(s.cache_bornes, "fermé");
    assert_eq!(s.surtension, "pas de surtension");
    assert_eq!(s.depassement, "pas de dépassement");
    assert_eq!(s.fonctionnement, "consommateur");
    assert_eq!(s.sens_energie, "énergie active positive");
    assert_eq!(s.tarif_fourniture.0, 1);
    assert_eq!(s.tarif_distributeur.0, 1);
    assert_eq!(s.horloge, "horloge correcte");
    assert_eq!(s.sortie_tic, "mode historique");
    assert_eq!(s.euridis, Some("désactivée"));
    assert_eq!(s.statut_cpl, Some("New/Unlock"));
    assert_eq!(s.synchro_cpl, "compteur non synchronisé");
    assert_eq!(s.couleur_jour, "Pas d'annonce");
    assert_eq!(s.couleur_demain, "Pas d'annonce");
    assert_eq!(s.preavis_pointe, "pas en cours");
    assert_eq!(s.pointe_mobile, "pas en cours");
}

/// The unassigned table slots must surface as absent values, never as an
/// out-of-range access.
#[test]
fn status_register_all_ones() {
    let s = StatusRegister::from(0xFFFF_FFFF).summary();

    assert_eq!(s.contact_sec, "ouvert");
    assert_eq!(s.organe_coupure, None);
    assert_eq!(s.cache_bornes, "ouvert");
    assert_eq!(s.surtension, "surtension");
    assert_eq!(s.depassement, "dépassement en cours");
    assert_eq!(s.fonctionnement, "producteur");
    assert_eq!(s.sens_energie, "énergie active négative");
    assert_eq!(s.tarif_fourniture.0, 16);
    assert_eq!(s.tarif_distributeur.0, 8);
    assert_eq!(s.horloge, "horloge en mode dégradée");
    assert_eq!(s.sortie_tic, "mode standard");
    assert_eq!(s.euridis, Some("activée avec sécurité"));
    assert_eq!(s.statut_cpl, None);
    assert_eq!(s.synchro_cpl, "compteur synchronisé");
    assert_eq!(s.couleur_jour, "Rouge");
    assert_eq!(s.couleur_demain, "Rouge");
    assert_eq!(s.preavis_pointe, "PM3 en cours");
    assert_eq!(s.pointe_mobile, "PM3 en cours");
}

#[test]
fn status_register_bit_ranges() {
    let s = StatusRegister::from(1 << 1).summary();
    assert_eq!(s.organe_coupure, Some("ouvert sur surpuissance"));

    let s = StatusRegister::from(3 << 1).summary();
    assert_eq!(s.organe_coupure, Some("ouvert sur délestage"));

    let s = StatusRegister::from(0b01 << 24 | 0b11 << 26).summary();
    assert_eq!(s.couleur_jour, "Bleu");
    assert_eq!(s.couleur_demain, "Rouge");

    let s = StatusRegister::from(0b10 << 28 | 0b01 << 30).summary();
    assert_eq!(s.preavis_pointe, "PM2 en cours");
    assert_eq!(s.pointe_mobile, "PM1 en cours");

    assert_eq!(
        StatusRegister::from(5 << 10).summary().tarif_fourniture.0,
        6
    );
}

/// The distributor index range shares its top bit with the clock flag.
#[test]
fn status_register_distributor_index_aliases_clock_bit() {
    let s = StatusRegister::from(0b101 << 14).summary();
    assert_eq!(s.tarif_distributeur.0, 6);
    assert_eq!(s.horloge, "horloge en mode dégradée");
}

#[test]
fn tariff_index_wording() {
    let s = StatusRegister::from(2 << 10).summary();
    assert_eq!(
        s.tarif_fourniture.to_string(),
        "énergie ventilée sur Index 3"
    );
}

#[test]
fn day_profile_schedule() {
    let payload = "00004003 06004004 22004003 NONUTILE NONUTILE NONUTILE \
                   NONUTILE NONUTILE NONUTILE NONUTILE NONUTILE";
    let entries: Vec<_> = profile::entries(payload).collect::<Result<_, _>>().unwrap();

    assert_eq!(
        entries,
        vec![
            Entry { hour: 0, minute: 0, action: 16387 },
            Entry { hour: 6, minute: 0, action: 16388 },
            Entry { hour: 22, minute: 0, action: 16387 },
        ]
    );
}

#[test]
fn day_profile_caps_at_eleven_blocks() {
    let payload = "00004003 ".repeat(14);
    assert_eq!(profile::entries(&payload).count(), profile::MAX_BLOCKS);
}

#[test]
fn day_profile_rejects_malformed_blocks() {
    assert_eq!(
        profile::entries("0000400").next(),
        Some(Err(ProfileError::BadBlock))
    );
    assert_eq!(
        profile::entries("0000400G").next(),
        Some(Err(ProfileError::BadBlock))
    );
    assert_eq!(profile::entries("NONUTILE").next(), None);
    assert_eq!(profile::entries("").next(), None);
}

#[test]
fn standard_horodate_to_iso8601() {
    let hd = Horodate::new(Dialect::V02, "E210715143012").unwrap();
    assert_eq!(hd.iso8601().to_string(), "2021-07-15T14:30:12+02:00");
    assert_eq!(hd.season(), Some('E'));

    let hd = Horodate::new(Dialect::V02, "h231224060000").unwrap();
    assert_eq!(hd.iso8601().to_string(), "2023-12-24T06:00:00+01:00");

    let hd = Horodate::new(Dialect::V02, " 231224060000").unwrap();
    assert_eq!(hd.iso8601().to_string(), "2023-12-24T06:00:00");
}

#[test]
fn pme_horodate_to_iso8601() {
    let hd = Horodate::new(Dialect::V01Pme, "15/07/21 14:30:12").unwrap();
    assert_eq!(hd.iso8601().to_string(), "2021-07-15T14:30:12");
    assert_eq!(hd.season(), None);
}

#[test]
fn horodate_pattern_rejections() {
    assert!(Horodate::new(Dialect::V02, "X210715143012").is_none());
    assert!(Horodate::new(Dialect::V02, "E2107151430").is_none());
    assert!(Horodate::new(Dialect::V02, "E21071514301Z").is_none());
    assert!(Horodate::new(Dialect::V01Pme, "15-07-21 14:30:12").is_none());
    assert!(Horodate::new(Dialect::V01Pme, "15/07/21T14:30:12").is_none());
    assert!(Horodate::new(Dialect::V01, "E210715143012").is_none());
}

#[test]
fn filter_enables_exactly_the_listed_tags() {
    let filter = Filter::parse(Dialect::V01, "#ticfilter\nPAPP IINST\nBASE\n").unwrap();

    let enabled: Vec<_> = Dialect::V01
        .etiquettes()
        .iter()
        .filter(|e| filter.contains(e.tag))
        .map(|e| e.label)
        .collect();
    assert_eq!(enabled, vec!["BASE", "IINST", "PAPP"]);
}

#[test]
fn filter_requires_magic_line() {
    assert_eq!(
        Filter::parse(Dialect::V01, "PAPP\n"),
        Err(FilterError::BadMagic)
    );
    assert_eq!(Filter::parse(Dialect::V01, ""), Err(FilterError::BadMagic));
    // Windows line endings are tolerated.
    assert!(Filter::parse(Dialect::V01, "#ticfilter\r\nPAPP\r\n").is_ok());
}

#[test]
fn filter_rejects_unknown_labels() {
    assert_eq!(
        Filter::parse(Dialect::V01, "#ticfilter\nNOTALABEL\n"),
        Err(FilterError::UnknownLabel)
    );
    // Labels from another dialect are unknown too.
    assert_eq!(
        Filter::parse(Dialect::V01, "#ticfilter\nEAST\n"),
        Err(FilterError::UnknownLabel)
    );
}

#[test]
fn empty_filter_blocks_everything() {
    let filter = Filter::parse(Dialect::V02, "#ticfilter\n").unwrap();
    assert!(Dialect::V02.etiquettes().iter().all(|e| !filter.contains(e.tag)));
}
