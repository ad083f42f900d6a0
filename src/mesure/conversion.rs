// src/mesure/conversion.rs
//
// Texte libre -> longueur exacte en millimètres.
//
// Règles (atelier) :
// - unité métrique (mm/cm/m) ou pouce (in/inch/inches/") en fin de texte
// - la partie nombre passe par le noyau (donc "1 3/8\"" et "10+5mm" marchent)
// - sans unité : une expression (+ - * / parenthèses) est lue en pouces,
//   un nombre nu est REFUSÉ (on ne devine pas mm vs pouces)

use tracing::debug;

use crate::noyau::{evaluate_avec_demarche, Demarche, Rational};

use super::erreur::ErreurMesure;
use super::fraction::format_fraction_pouce;
use super::unite::{detache_unite, pouce_par_mm, Unite};

/// Décimales affichées pour les millimètres.
pub const DECIMALES_MM: usize = 2;

/// Décimales affichées pour les pouces.
pub const DECIMALES_POUCES: usize = 5;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Longueur {
    pub mm: Rational,
    /// Valeur saisie en pouces (None si l’entrée était métrique).
    pub pouces: Option<Rational>,
    pub unite: Unite,
    pub demarche: Demarche,
}

impl Longueur {
    /// Valeur exacte en pouces, quelle que soit l’unité saisie.
    pub fn en_pouces(&self) -> Rational {
        match &self.pouces {
            Some(p) => p.clone(),
            None => mm_en_pouces(&self.mm),
        }
    }
}

/// Minuscules, guillemets typographiques -> '"', espaces multiples -> un seul.
fn normalise_texte(s: &str) -> String {
    let s = s.to_lowercase().replace(&['″', '”', '“'][..], "\"");
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn ressemble_expression(s: &str) -> bool {
    s.contains(&['+', '-', '*', '/', '(', ')'][..])
}

pub fn convertir(texte: &str) -> Result<Longueur, ErreurMesure> {
    let brut = texte.trim();
    if brut.is_empty() {
        return Err(ErreurMesure::Vide);
    }

    let s = normalise_texte(brut);
    let (nombre, unite) = detache_unite(&s);

    let unite = match unite {
        Some(u) => {
            if nombre.is_empty() {
                return Err(ErreurMesure::NombreManquant(u.symbole()));
            }
            u
        }
        None if ressemble_expression(nombre) => Unite::Pouce,
        None => return Err(ErreurMesure::UniteManquante),
    };

    let (valeur, demarche) = evaluate_avec_demarche(nombre)?;
    let mm = &valeur * &unite.vers_mm();
    debug!(entree = brut, unite = unite.symbole(), mm = %mm, "longueur convertie");

    Ok(Longueur {
        mm,
        pouces: (!unite.est_metrique()).then_some(valeur),
        unite,
        demarche,
    })
}

/// Ligne de résultat : `= 34.93 mm   (pouce : 1.37500" ≈ 1 3/8")`.
pub fn resume(l: &Longueur, denom: u32) -> Result<String, ErreurMesure> {
    let pouces = l.en_pouces();
    let frac = format_fraction_pouce(&pouces, denom)?;
    Ok(format!(
        "= {:.dm$} mm   (pouce : {:.dp$}\" ≈ {frac}\")",
        l.mm.to_f64(),
        pouces.to_f64(),
        dm = DECIMALES_MM,
        dp = DECIMALES_POUCES,
    ))
}

/// mm exacts -> pouces exacts.
pub fn mm_en_pouces(mm: &Rational) -> Rational {
    mm * &pouce_par_mm()
}
