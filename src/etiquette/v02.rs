//! Version 02 "standard" label table.
//!
//! Emitted by Linky meters in native mode. A number of labels carry a
//! horodate (`SAAMMJJhhmmss`, the first byte a season hint).

use super::{etiq, DataType::*, Etiquette, Shape::*, Unit::*};

pub const ETIQUETTES: &[Etiquette] = &[
    etiq(0, "ADSC", Sans, String, Donnee, "Adresse Secondaire du Compteur"),
    etiq(1, "VTIC", Sans, String, Donnee, "Version de la TIC"),
    etiq(2, "DATE", Sans, String, HorodateSeule, "Date et heure courante"),
    etiq(3, "NGTF", Sans, String, Donnee, "Nom du calendrier tarifaire fournisseur"),
    etiq(4, "LTARF", Sans, String, Donnee, "Libellé tarif fournisseur en cours"),
    etiq(5, "EAST", Wh, Integer, Donnee, "Energie active soutirée totale"),
    etiq(6, "EASF01", Wh, Integer, Donnee, "Energie active soutirée Fournisseur, index 01"),
    etiq(7, "EASF02", Wh, Integer, Donnee, "Energie active soutirée Fournisseur, index 02"),
    etiq(8, "EASF03", Wh, Integer, Donnee, "Energie active soutirée Fournisseur, index 03"),
    etiq(9, "EASF04", Wh, Integer, Donnee, "Energie active soutirée Fournisseur, index 04"),
    etiq(10, "EASF05", Wh, Integer, Donnee, "Energie active soutirée Fournisseur, index 05"),
    etiq(11, "EASF06", Wh, Integer, Donnee, "Energie active soutirée Fournisseur, index 06"),
    etiq(12, "EASF07", Wh, Integer, Donnee, "Energie active soutirée Fournisseur, index 07"),
    etiq(13, "EASF08", Wh, Integer, Donnee, "Energie active soutirée Fournisseur, index 08"),
    etiq(14, "EASF09", Wh, Integer, Donnee, "Energie active soutirée Fournisseur, index 09"),
    etiq(15, "EASF10", Wh, Integer, Donnee, "Energie active soutirée Fournisseur, index 10"),
    etiq(16, "EASD01", Wh, Integer, Donnee, "Energie active soutirée Distributeur, index 01"),
    etiq(17, "EASD02", Wh, Integer, Donnee, "Energie active soutirée Distributeur, index 02"),
    etiq(18, "EASD03", Wh, Integer, Donnee, "Energie active soutirée Distributeur, index 03"),
    etiq(19, "EASD04", Wh, Integer, Donnee, "Energie active soutirée Distributeur, index 04"),
    etiq(20, "EAIT", Wh, Integer, Donnee, "Energie active injectée totale"),
    etiq(21, "ERQ1", VArh, Integer, Donnee, "Energie réactive Q1 totale"),
    etiq(22, "ERQ2", VArh, Integer, Donnee, "Energie réactive Q2 totale"),
    etiq(23, "ERQ3", VArh, Integer, Donnee, "Energie réactive Q3 totale"),
    etiq(24, "ERQ4", VArh, Integer, Donnee, "Energie réactive Q4 totale"),
    etiq(25, "IRMS1", A, Integer, Donnee, "Courant efficace, phase 1"),
    etiq(26, "IRMS2", A, Integer, Donnee, "Courant efficace, phase 2"),
    etiq(27, "IRMS3", A, Integer, Donnee, "Courant efficace, phase 3"),
    etiq(28, "URMS1", V, Integer, Donnee, "Tension efficace, phase 1"),
    etiq(29, "URMS2", V, Integer, Donnee, "Tension efficace, phase 2"),
    etiq(30, "URMS3", V, Integer, Donnee, "Tension efficace, phase 3"),
    etiq(31, "PREF", KVA, Integer, Donnee, "Puissance app. de référence"),
    etiq(32, "PCOUP", KVA, Integer, Donnee, "Puissance app. de coupure"),
    etiq(33, "SINSTS", VA, Integer, Donnee, "Puissance app. Instantanée soutirée"),
    etiq(34, "SINSTS1", VA, Integer, Donnee, "Puissance app. Instantanée soutirée phase 1"),
    etiq(35, "SINSTS2", VA, Integer, Donnee, "Puissance app. Instantanée soutirée phase 2"),
    etiq(36, "SINSTS3", VA, Integer, Donnee, "Puissance app. Instantanée soutirée phase 3"),
    etiq(37, "SMAXSN", VA, Integer, HorodateDonnee, "Puissance app. max. soutirée n"),
    etiq(38, "SMAXSN1", VA, Integer, HorodateDonnee, "Puissance app. max. soutirée n phase 1"),
    etiq(39, "SMAXSN2", VA, Integer, HorodateDonnee, "Puissance app. max. soutirée n phase 2"),
    etiq(40, "SMAXSN3", VA, Integer, HorodateDonnee, "Puissance app. max. soutirée n phase 3"),
    etiq(41, "SMAXSN-1", VA, Integer, HorodateDonnee, "Puissance app max. soutirée n-1"),
    etiq(42, "SMAXSN1-1", VA, Integer, HorodateDonnee, "Puissance app max. soutirée n-1 phase 1"),
    etiq(43, "SMAXSN2-1", VA, Integer, HorodateDonnee, "Puissance app max. soutirée n-1 phase 2"),
    etiq(44, "SMAXSN3-1", VA, Integer, HorodateDonnee, "Puissance app max. soutirée n-1 phase 3"),
    etiq(45, "SINSTI", VA, Integer, Donnee, "Puissance app. Instantanée injectée"),
    etiq(46, "SMAXIN", VA, Integer, HorodateDonnee, "Puissance app. max. injectée n"),
    etiq(47, "SMAXIN-1", VA, Integer, HorodateDonnee, "Puissance app max. injectée n-1"),
    etiq(48, "CCASN", W, Integer, HorodateDonnee, "Point n de la courbe de charge active soutirée"),
    etiq(49, "CCASN-1", W, Integer, HorodateDonnee, "Point n-1 de la courbe de charge active soutirée"),
    etiq(50, "CCAIN", W, Integer, HorodateDonnee, "Point n de la courbe de charge active injectée"),
    etiq(51, "CCAIN-1", W, Integer, HorodateDonnee, "Point n-1 de la courbe de charge active injectée"),
    etiq(52, "UMOY1", V, Integer, HorodateDonnee, "Tension moy. ph. 1"),
    etiq(53, "UMOY2", V, Integer, HorodateDonnee, "Tension moy. ph. 2"),
    etiq(54, "UMOY3", V, Integer, HorodateDonnee, "Tension moy. ph. 3"),
    etiq(55, "STGE", Sans, Hex, Donnee, "Registre de Statuts"),
    etiq(56, "DPM1", Sans, String, HorodateDonnee, "Début Pointe Mobile 1"),
    etiq(57, "FPM1", Sans, String, HorodateDonnee, "Fin Pointe Mobile 1"),
    etiq(58, "DPM2", Sans, String, HorodateDonnee, "Début Pointe Mobile 2"),
    etiq(59, "FPM2", Sans, String, HorodateDonnee, "Fin Pointe Mobile 2"),
    etiq(60, "DPM3", Sans, String, HorodateDonnee, "Début Pointe Mobile 3"),
    etiq(61, "FPM3", Sans, String, HorodateDonnee, "Fin Pointe Mobile 3"),
    etiq(62, "MSG1", Sans, String, Donnee, "Message court"),
    etiq(63, "MSG2", Sans, String, Donnee, "Message Ultra court"),
    etiq(64, "PRM", Sans, String, Donnee, "PRM"),
    etiq(65, "RELAIS", Sans, Integer, Donnee, "Relais"),
    etiq(66, "NTARF", Sans, Integer, Donnee, "Numéro de l'index tarifaire en cours"),
    etiq(67, "NJOURF", Sans, Integer, Donnee, "Numéro du jour en cours calendrier fournisseur"),
    etiq(68, "NJOURF+1", Sans, Integer, Donnee, "Numéro du prochain jour calendrier fournisseur"),
    etiq(69, "PJOURF+1", Sans, Profile, Donnee, "Profil du prochain jour calendrier fournisseur"),
    etiq(70, "PPOINTE", Sans, Profile, Donnee, "Profil du prochain jour de pointe"),
];
