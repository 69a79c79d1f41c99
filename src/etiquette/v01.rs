//! Version 01 "historique" label table.
//!
//! Emitted by electromechanical-era meters and by Linky in compatibility
//! mode. No dataset carries a horodate in this dialect.

use super::{etiq, DataType::*, Etiquette, Shape::*, Unit::*};

pub const ETIQUETTES: &[Etiquette] = &[
    etiq(0, "ADCO", Sans, String, Donnee, "Adresse du compteur"),
    etiq(1, "OPTARIF", Sans, String, Donnee, "Option tarifaire choisie"),
    etiq(2, "ISOUSC", A, Integer, Donnee, "Intensité souscrite"),
    etiq(3, "BASE", Wh, Integer, Donnee, "Index option Base"),
    etiq(4, "HCHC", Wh, Integer, Donnee, "Index option Heures Creuses: Heures Creuses"),
    etiq(5, "HCHP", Wh, Integer, Donnee, "Index option Heures Creuses: Heures Pleines"),
    etiq(6, "EJPHN", Wh, Integer, Donnee, "Index option EJP: Heures Normales"),
    etiq(7, "EJPHPM", Wh, Integer, Donnee, "Index option EJP: Heures de Pointe Mobile"),
    etiq(8, "BBRHCJB", Wh, Integer, Donnee, "Index option Tempo: Heures Creuses Jours Bleus"),
    etiq(9, "BBRHPJB", Wh, Integer, Donnee, "Index option Tempo: Heures Pleines Jours Bleus"),
    etiq(10, "BBRHCJW", Wh, Integer, Donnee, "Index option Tempo: Heures Creuses Jours Blancs"),
    etiq(11, "BBRHPJW", Wh, Integer, Donnee, "Index option Tempo: Heures Pleines Jours Blancs"),
    etiq(12, "BBRHCJR", Wh, Integer, Donnee, "Index option Tempo: Heures Creuses Jours Rouges"),
    etiq(13, "BBRHPJR", Wh, Integer, Donnee, "Index option Tempo: Heures Pleines Jours Rouges"),
    etiq(14, "PEJP", Min, Integer, Donnee, "Préavis Début EJP"),
    etiq(15, "PTEC", Sans, String, Donnee, "Période Tarifaire en cours"),
    etiq(16, "DEMAIN", Sans, String, Donnee, "Couleur du lendemain"),
    etiq(17, "IINST", A, Integer, Donnee, "Intensité Instantanée"),
    etiq(18, "IINST1", A, Integer, Donnee, "Intensité Instantanée phase 1"),
    etiq(19, "IINST2", A, Integer, Donnee, "Intensité Instantanée phase 2"),
    etiq(20, "IINST3", A, Integer, Donnee, "Intensité Instantanée phase 3"),
    etiq(21, "ADPS", A, Integer, Donnee, "Avertissement de Dépassement De Puissance Souscrite"),
    etiq(22, "ADIR1", A, Integer, Donnee, "Avertissement de Dépassement d'intensité de réglage phase 1"),
    etiq(23, "ADIR2", A, Integer, Donnee, "Avertissement de Dépassement d'intensité de réglage phase 2"),
    etiq(24, "ADIR3", A, Integer, Donnee, "Avertissement de Dépassement d'intensité de réglage phase 3"),
    etiq(25, "IMAX", A, Integer, Donnee, "Intensité maximale appelée"),
    etiq(26, "IMAX1", A, Integer, Donnee, "Intensité maximale appelée phase 1"),
    etiq(27, "IMAX2", A, Integer, Donnee, "Intensité maximale appelée phase 2"),
    etiq(28, "IMAX3", A, Integer, Donnee, "Intensité maximale appelée phase 3"),
    etiq(29, "PMAX", W, Integer, Donnee, "Puissance maximale triphasée atteinte"),
    etiq(30, "PAPP", VA, Integer, Donnee, "Puissance apparente"),
    etiq(31, "HHPHC", Sans, String, Donnee, "Horaire Heures Pleines Heures Creuses"),
    etiq(32, "MOTDETAT", Sans, String, Donnee, "Mot d'état du compteur"),
    etiq(33, "PPOT", Sans, String, Donnee, "Présence des potentiels"),
    etiq(34, "GAZ", DaL, Integer, Donnee, "Index gaz"),
    etiq(35, "AUTRE", DaL, Integer, Donnee, "Index d'un autre compteur"),
];
