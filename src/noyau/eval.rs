//! Noyau: évaluation (pipeline réel)
//!
//! contrôle des caractères -> nombres mixtes -> jetons -> arbre -> Rational
//!
//! Le contrôle des caractères se fait sur le texte BRUT : la position d’un
//! caractère refusé est donc celle que l’utilisateur a tapée.

use tracing::{debug, trace};

use super::erreur::{CalcError, Result};
use super::jetons::{est_caractere_admis, format_tokens, tokenize};
use super::mixte::normalise_mixtes;
use super::parseur::parse;
use super::rationnel::Rational;

#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct Demarche {
    pub normalise: String,
    pub jetons: String,
    pub arbre: String,
}

/// API publique : texte -> rationnel exact.
pub fn evaluate(expr_str: &str) -> Result<Rational> {
    evaluate_avec_demarche(expr_str).map(|(r, _)| r)
}

/// Comme `evaluate`, avec les étapes intermédiaires (panneau « Démarche »).
pub fn evaluate_avec_demarche(expr_str: &str) -> Result<(Rational, Demarche)> {
    pipeline(expr_str).inspect_err(|e| {
        debug!(entree = expr_str, genre = e.genre(), erreur = %e, "évaluation refusée");
    })
}

fn pipeline(expr_str: &str) -> Result<(Rational, Demarche)> {
    // 1) Caractères (sur le texte brut)
    if let Some((pos, ch)) = expr_str
        .chars()
        .enumerate()
        .find(|&(_, c)| !est_caractere_admis(c))
    {
        return Err(CalcError::InvalidCharacter { ch, pos });
    }

    // 2) Nombres mixtes
    let normalise = normalise_mixtes(expr_str);
    if normalise != expr_str {
        trace!(avant = expr_str, apres = %normalise, "nombres mixtes réécrits");
    }

    // 3) Jetons
    let jetons = tokenize(&normalise)?;
    let jetons_txt = format_tokens(&jetons);

    // 4) Arbre
    let arbre = parse(&jetons, normalise.chars().count())?;

    // 5) Valeur exacte
    let valeur = arbre.eval()?;
    debug!(entree = expr_str, resultat = %valeur, "expression évaluée");

    let d = Demarche {
        normalise,
        jetons: jetons_txt,
        arbre: arbre.to_string(),
    };

    Ok((valeur, d))
}
