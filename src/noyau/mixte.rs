// src/noyau/mixte.rs
//
// Pré-passe textuelle : nombres mixtes -> addition explicite.
//   "2-1/4"  => "(2 + 1/4)"
//   "1 3/8"  => "(1 + 3/8)"
//
// Deux passes indépendantes (tiret d’abord, espace ensuite), sur le texte brut,
// AVANT tokenisation. Aucune notion de jeton ici.
//
// Ambiguïté connue : "5 - 1/2" devient lui aussi (5 + 1/2).
// Pour soustraire une fraction, écrire "5 - (1/2)".

use std::sync::OnceLock;

use regex::Regex;

const MOTIF_TIRET: &str = r"([0-9]+)\s*-\s*([0-9]+)\s*/\s*([0-9]+)";
const MOTIF_ESPACE: &str = r"([0-9]+)\s+([0-9]+)\s*/\s*([0-9]+)";
const REMPLACEMENT: &str = "(${1} + ${2}/${3})";

static RE_TIRET: OnceLock<Regex> = OnceLock::new();
static RE_ESPACE: OnceLock<Regex> = OnceLock::new();

fn re_tiret() -> &'static Regex {
    RE_TIRET.get_or_init(|| Regex::new(MOTIF_TIRET).expect("motif mixte (tiret) valide"))
}

fn re_espace() -> &'static Regex {
    RE_ESPACE.get_or_init(|| Regex::new(MOTIF_ESPACE).expect("motif mixte (espace) valide"))
}

/// Réécrit les nombres mixtes en `(entier + n/d)`.
pub fn normalise_mixtes(s: &str) -> String {
    let etape1 = re_tiret().replace_all(s, REMPLACEMENT);
    re_espace().replace_all(&etape1, REMPLACEMENT).into_owned()
}
