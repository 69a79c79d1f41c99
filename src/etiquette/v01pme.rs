//! PME-PMI label table (version 01 variant for commercial meters).
//!
//! Energies are metered in kWh/kVArh/VAh and powers in kW; the subscribed
//! and attained powers (`PS`, `PAx_s`, `PAx_i`) are transmitted without a
//! table unit but with a trailing `kW`/`kVA` suffix in the payload, which
//! reclassifies the field unit at decode time. The tariff-dynamic and
//! tangent-phi labels are present on the wire but parsed and dropped.

use super::{etiq, DataType::*, Etiquette, Shape::*, Unit::*};

pub const ETIQUETTES: &[Etiquette] = &[
    etiq(0, "ADS", Sans, String, Donnee, "Identifiant du compteur"),
    etiq(1, "MESURES1", Sans, String, Donnee, "Nom du traitement des mesures"),
    etiq(2, "DATE", Sans, String, HorodateSeule, "Date et heure courante"),
    etiq(3, "EA_s", KWh, Integer, Donnee, "Energie active soutirée"),
    etiq(4, "ER+_s", KVArh, Integer, Donnee, "Energie réactive positive soutirée"),
    etiq(5, "ER-_s", KVArh, Integer, Donnee, "Energie réactive négative soutirée"),
    etiq(6, "EAPP_s", VAh, Integer, Donnee, "Energie apparente soutirée"),
    etiq(7, "EA_i", KWh, Integer, Donnee, "Energie active injectée"),
    etiq(8, "ER+_i", KVArh, Integer, Donnee, "Energie réactive positive injectée"),
    etiq(9, "ER-_i", KVArh, Integer, Donnee, "Energie réactive négative injectée"),
    etiq(10, "EAPP_i", VAh, Integer, Donnee, "Energie apparente injectée"),
    etiq(11, "PTCOUR1", Sans, String, Donnee, "Période tarifaire courante"),
    etiq(12, "TARIFDYN", Sans, Ignored, Donnee, "Tarif dynamique en cours"),
    etiq(13, "ETATDYN1", Sans, Ignored, Donnee, "Etat de la période tarifaire dynamique"),
    etiq(14, "PREAVIS1", Sans, Ignored, Donnee, "Préavis de période tarifaire dynamique"),
    etiq(15, "DebP", Sans, String, HorodateSeule, "Début de la période P en cours"),
    etiq(16, "EAP_s", KWh, Integer, Donnee, "Energie active soutirée de la période P"),
    etiq(17, "ER+P_s", KVArh, Integer, Donnee, "Energie réactive positive soutirée de la période P"),
    etiq(18, "ER-P_s", KVArh, Integer, Donnee, "Energie réactive négative soutirée de la période P"),
    etiq(19, "EAPPP_s", VAh, Integer, Donnee, "Energie apparente soutirée de la période P"),
    etiq(20, "EAP_i", KWh, Integer, Donnee, "Energie active injectée de la période P"),
    etiq(21, "ER+P_i", KVArh, Integer, Donnee, "Energie réactive positive injectée de la période P"),
    etiq(22, "ER-P_i", KVArh, Integer, Donnee, "Energie réactive négative injectée de la période P"),
    etiq(23, "EAPPP_i", VAh, Integer, Donnee, "Energie apparente injectée de la période P"),
    etiq(24, "DebP-1", Sans, String, HorodateSeule, "Début de la période P-1"),
    etiq(25, "FinP-1", Sans, String, HorodateSeule, "Fin de la période P-1"),
    etiq(26, "EAP-1_s", KWh, Integer, Donnee, "Energie active soutirée de la période P-1"),
    etiq(27, "ER+P-1_s", KVArh, Integer, Donnee, "Energie réactive positive soutirée de la période P-1"),
    etiq(28, "ER-P-1_s", KVArh, Integer, Donnee, "Energie réactive négative soutirée de la période P-1"),
    etiq(29, "EAPPP-1_s", VAh, Integer, Donnee, "Energie apparente soutirée de la période P-1"),
    etiq(30, "EAP-1_i", KWh, Integer, Donnee, "Energie active injectée de la période P-1"),
    etiq(31, "ER+P-1_i", KVArh, Integer, Donnee, "Energie réactive positive injectée de la période P-1"),
    etiq(32, "ER-P-1_i", KVArh, Integer, Donnee, "Energie réactive négative injectée de la période P-1"),
    etiq(33, "EAPPP-1_i", VAh, Integer, Donnee, "Energie apparente injectée de la période P-1"),
    etiq(34, "PS", Sans, Integer, Donnee, "Puissance souscrite"),
    etiq(35, "PREAVIS", Sans, String, Donnee, "Préavis de dépassement de puissance souscrite"),
    etiq(36, "DATEPA1", Sans, String, HorodateSeule, "Date et heure de la puissance atteinte 1"),
    etiq(37, "DATEPA2", Sans, String, HorodateSeule, "Date et heure de la puissance atteinte 2"),
    etiq(38, "DATEPA3", Sans, String, HorodateSeule, "Date et heure de la puissance atteinte 3"),
    etiq(39, "DATEPA4", Sans, String, HorodateSeule, "Date et heure de la puissance atteinte 4"),
    etiq(40, "DATEPA5", Sans, String, HorodateSeule, "Date et heure de la puissance atteinte 5"),
    etiq(41, "DATEPA6", Sans, String, HorodateSeule, "Date et heure de la puissance atteinte 6"),
    etiq(42, "PA1_s", Sans, Integer, Donnee, "Puissance atteinte 1 soutirée"),
    etiq(43, "PA2_s", Sans, Integer, Donnee, "Puissance atteinte 2 soutirée"),
    etiq(44, "PA3_s", Sans, Integer, Donnee, "Puissance atteinte 3 soutirée"),
    etiq(45, "PA4_s", Sans, Integer, Donnee, "Puissance atteinte 4 soutirée"),
    etiq(46, "PA5_s", Sans, Integer, Donnee, "Puissance atteinte 5 soutirée"),
    etiq(47, "PA6_s", Sans, Integer, Donnee, "Puissance atteinte 6 soutirée"),
    etiq(48, "PA1_i", Sans, Integer, Donnee, "Puissance atteinte 1 injectée"),
    etiq(49, "PA2_i", Sans, Integer, Donnee, "Puissance atteinte 2 injectée"),
    etiq(50, "PA3_i", Sans, Integer, Donnee, "Puissance atteinte 3 injectée"),
    etiq(51, "PA4_i", Sans, Integer, Donnee, "Puissance atteinte 4 injectée"),
    etiq(52, "PA5_i", Sans, Integer, Donnee, "Puissance atteinte 5 injectée"),
    etiq(53, "PA6_i", Sans, Integer, Donnee, "Puissance atteinte 6 injectée"),
    etiq(54, "TGPHI_s", Sans, Ignored, Donnee, "Tangente phi soutirée"),
    etiq(55, "TGPHI_i", Sans, Ignored, Donnee, "Tangente phi injectée"),
];
