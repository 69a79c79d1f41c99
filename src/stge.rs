//! Decoder for the STGE status register.
//!
//! Linky standard-mode meters publish a 32-bit status register as an
//! eight-digit hexadecimal field. Its bit ranges encode the breaker state,
//! tariff indices, clock health, PLC status and the Tempo/mobile-peak
//! calendar announcements. [`StatusRegister::summary`] renders the register
//! as the operator's published wording, one entry per bit range.

use core::fmt;

use tartan_bitfield::bitfield;

bitfield! {
    /// Raw view of the status register's bit ranges.
    pub struct StatusRegister(u32) {
        [0] pub contact_sec,
        [1..4] pub organe_coupure: u8,
        [4] pub cache_bornes,
        [6] pub surtension,
        [7] pub depassement,
        [8] pub producteur,
        [9] pub energie_negative,
        [10..14] pub index_fournisseur: u8,
        [14..17] pub index_distributeur: u8,
        [16] pub horloge_degradee,
        [17] pub sortie_standard,
        [19..21] pub euridis: u8,
        [21..23] pub statut_cpl: u8,
        [23] pub synchro_cpl,
        [24..26] pub couleur_jour: u8,
        [26..28] pub couleur_demain: u8,
        [28..30] pub preavis_pointe: u8,
        [30..32] pub pointe_mobile: u8,
    }
}

const OUVERT_FERME: [&str; 2] = ["fermé", "ouvert"];

/// Cut-off device states; two slots of the 3-bit range are unassigned.
const COUPURE: [Option<&str>; 8] = [
    Some("fermé"),
    Some("ouvert sur surpuissance"),
    Some("ouvert sur surtension"),
    Some("ouvert sur délestage"),
    Some("ouvert sur ordre CPL ou Euridis"),
    Some("ouvert sur une surchauffe avec une valeur de courant supérieure au courant de commutation maximal"),
    Some("ouvert sur une surchauffe avec une valeur de courant inférieure au courant de commutation maximal"),
    None,
];

const EURIDIS: [Option<&str>; 4] = [
    Some("désactivée"),
    Some("activée sans sécurité"),
    None,
    Some("activée avec sécurité"),
];

const CPL: [Option<&str>; 4] = [Some("New/Unlock"), Some("New/Lock"), Some("Registered"), None];

const TEMPO: [&str; 4] = ["Pas d'annonce", "Bleu", "Blanc", "Rouge"];

const POINTE: [&str; 4] = [
    "pas en cours",
    "PM1 en cours",
    "PM2 en cours",
    "PM3 en cours",
];

/// A tariff index as ventilated by the meter, 1-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TariffIndex(pub u8);

impl fmt::Display for TariffIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "énergie ventilée sur Index {}", self.0)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for TariffIndex {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// The status register rendered as the operator's published wording.
///
/// Unassigned slots of the cut-off, Euridis and PLC tables surface as
/// `None` (JSON `null`) rather than indexing out of their tables.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Summary {
    #[cfg_attr(feature = "serde", serde(rename = "Contact sec"))]
    pub contact_sec: &'static str,
    #[cfg_attr(feature = "serde", serde(rename = "Organe de coupure"))]
    pub organe_coupure: Option<&'static str>,
    #[cfg_attr(feature = "serde", serde(rename = "État du cache-bornes distributeur"))]
    pub cache_bornes: &'static str,
    #[cfg_attr(feature = "serde", serde(rename = "Surtension sur une des phases"))]
    pub surtension: &'static str,
    #[cfg_attr(feature = "serde", serde(rename = "Dépassement de la puissance de référence"))]
    pub depassement: &'static str,
    #[cfg_attr(feature = "serde", serde(rename = "Fonctionnement producteur/consommateur"))]
    pub fonctionnement: &'static str,
    #[cfg_attr(feature = "serde", serde(rename = "Sens de l'énergie active"))]
    pub sens_energie: &'static str,
    #[cfg_attr(feature = "serde", serde(rename = "Tarif en cours sur le contrat fourniture"))]
    pub tarif_fourniture: TariffIndex,
    #[cfg_attr(feature = "serde", serde(rename = "Tarif en cours sur le contrat distributeur"))]
    pub tarif_distributeur: TariffIndex,
    #[cfg_attr(feature = "serde", serde(rename = "Mode dégradé de l'horloge"))]
    pub horloge: &'static str,
    #[cfg_attr(feature = "serde", serde(rename = "État de la sortie télé-information"))]
    pub sortie_tic: &'static str,
    #[cfg_attr(feature = "serde", serde(rename = "État de la sortie communication Euridis"))]
    pub euridis: Option<&'static str>,
    #[cfg_attr(feature = "serde", serde(rename = "Statut du CPL"))]
    pub statut_cpl: Option<&'static str>,
    #[cfg_attr(feature = "serde", serde(rename = "Synchronisation CPL"))]
    pub synchro_cpl: &'static str,
    #[cfg_attr(
        feature = "serde",
        serde(rename = "Couleur du jour pour le contrat historique tempo")
    )]
    pub couleur_jour: &'static str,
    #[cfg_attr(
        feature = "serde",
        serde(rename = "Couleur du lendemain pour le contrat historique tempo")
    )]
    pub couleur_demain: &'static str,
    #[cfg_attr(feature = "serde", serde(rename = "Préavis pointes mobiles"))]
    pub preavis_pointe: &'static str,
    #[cfg_attr(feature = "serde", serde(rename = "Pointe mobile"))]
    pub pointe_mobile: &'static str,
}

impl StatusRegister {
    /// Render every bit range as its published wording.
    pub fn summary(self) -> Summary {
        Summary {
            contact_sec: OUVERT_FERME[self.contact_sec() as usize],
            organe_coupure: COUPURE[self.organe_coupure() as usize],
            cache_bornes: OUVERT_FERME[self.cache_bornes() as usize],
            surtension: if self.surtension() {
                "surtension"
            } else {
                "pas de surtension"
            },
            depassement: if self.depassement() {
                "dépassement en cours"
            } else {
                "pas de dépassement"
            },
            fonctionnement: if self.producteur() {
                "producteur"
            } else {
                "consommateur"
            },
            sens_energie: if self.energie_negative() {
                "énergie active négative"
            } else {
                "énergie active positive"
            },
            tarif_fourniture: TariffIndex(self.index_fournisseur() + 1),
            tarif_distributeur: TariffIndex(self.index_distributeur() + 1),
            horloge: if self.horloge_degradee() {
                "horloge en mode dégradée"
            } else {
                "horloge correcte"
            },
            sortie_tic: if self.sortie_standard() {
                "mode standard"
            } else {
                "mode historique"
            },
            euridis: EURIDIS[self.euridis() as usize],
            statut_cpl: CPL[self.statut_cpl() as usize],
            synchro_cpl: if self.synchro_cpl() {
                "compteur synchronisé"
            } else {
                "compteur non synchronisé"
            },
            couleur_jour: TEMPO[self.couleur_jour() as usize],
            couleur_demain: TEMPO[self.couleur_demain() as usize],
            preavis_pointe: POINTE[self.preavis_pointe() as usize],
            pointe_mobile: POINTE[self.pointe_mobile() as usize],
        }
    }
}
