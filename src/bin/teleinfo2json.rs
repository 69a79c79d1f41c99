//! Turn a TIC byte stream into newline-delimited JSON frames.
//!
//! Reads the meter stream on standard input and writes one JSON value per
//! frame on standard output; diagnostics go to standard error.

use std::fs;
use std::io::{self, BufWriter};
use std::path::PathBuf;

use anyhow::Context;
use clap::{ArgGroup, Parser};

use teleinfo::avec::json::{Json, Options};
use teleinfo::avec::reader;
use teleinfo::filter::Filter;
use teleinfo::Dialect;

/// Convertit les trames TIC ENEDIS en JSON.
#[derive(Parser)]
#[command(name = "teleinfo2json", version)]
#[command(group(ArgGroup::new("version_tic").required(true)))]
struct Args {
    /// Analyse les trames TIC version 01 "historique"
    #[arg(short = '1', group = "version_tic")]
    historique: bool,

    /// Analyse les trames TIC version 02 "standard"
    #[arg(short = '2', group = "version_tic")]
    standard: bool,

    /// Analyse les trames TIC du compteur PME-PMI
    #[arg(short = 'P', group = "version_tic")]
    pme: bool,

    /// Émet les trames sous forme de dictionnaire plutôt que de liste
    #[arg(short = 'd')]
    dict: bool,

    /// Utilise <FICHIER> pour configurer le filtre d'étiquettes
    #[arg(short = 'e', value_name = "FICHIER")]
    filtre: Option<PathBuf>,

    /// Ajoute une balise "id" avec la valeur <ID> à chaque groupe
    #[arg(short = 'i', value_name = "ID")]
    id: Option<String>,

    /// Ajoute les descriptions longues et les unités de chaque groupe
    #[arg(short = 'l')]
    descriptions: bool,

    /// Insère une nouvelle ligne après chaque groupe
    #[arg(short = 'n')]
    newlines: bool,

    /// Formate les trames de profils de prochain jour (TIC v02)
    #[arg(short = 'p')]
    profils: bool,

    /// Interprète les horodates en format RFC 3339 (TIC v02) ou ISO 8601
    #[arg(short = 'r')]
    long_dates: bool,

    /// Émet une trame toutes les <N> reçues
    #[arg(short = 's', value_name = "N", default_value_t = 0)]
    skip: u32,

    /// Décode le registre de statuts sous forme de dictionnaire (TIC v02)
    #[arg(short = 'u')]
    statuts: bool,

    /// Masque les groupes numériques à zéro
    #[arg(short = 'z')]
    zeroes: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let dialect = if args.historique {
        Dialect::V01
    } else if args.standard {
        Dialect::V02
    } else {
        Dialect::V01Pme
    };

    let filter = args
        .filtre
        .map(|path| {
            let text = fs::read_to_string(&path)
                .with_context(|| format!("reading filter file {}", path.display()))?;
            Filter::parse(dialect, &text)
                .with_context(|| format!("loading filter file {}", path.display()))
        })
        .transpose()?;

    let opts = Options {
        dict: args.dict,
        per_field_lines: args.newlines,
        descriptions: args.descriptions,
        long_dates: args.long_dates,
        decode_status: args.statuts,
        format_profiles: args.profils,
        mask_zeroes: args.zeroes,
        skip_frames: args.skip,
        id: args.id,
        filter,
    };

    let stdout = io::stdout();
    let mut sink = Json::new(BufWriter::new(stdout.lock()), opts);

    reader::decode(dialect, &mut io::stdin().lock(), &mut sink)
        .context("reading standard input")?;
    sink.finish().context("writing standard output")?;
    Ok(())
}
