// src/mesure/fraction.rs
//
// Affichage « atelier » d’une valeur en pouces : entier + fraction au 1/denom près.
//   1.375  (denom 32) => "1 3/8"
//   0.4375 (denom 32) => "7/16"
//   1.999  (denom 32) => "2"
//
// Tout est exact (Rational) : l’arrondi se fait sur la fraction, pas sur un flottant.

use crate::noyau::Rational;

use super::erreur::ErreurMesure;

/// Précision par défaut : 1/32 de pouce.
pub const DENOM_DEFAUT: u32 = 32;

pub fn format_fraction_pouce(pouces: &Rational, denom: u32) -> Result<String, ErreurMesure> {
    if denom == 0 {
        return Err(ErreurMesure::DenominateurInvalide(denom));
    }

    let signe = if pouces.is_negative() { "-" } else { "" };
    let valeur = pouces.abs();

    let mut entier = valeur.floor();
    let reste = &valeur - &entier;

    // nombre de 1/denom dans le reste, arrondi au plus proche
    let denom_r = Rational::from_integer(denom);
    let mut unites = (&reste * &denom_r).round();
    if unites == denom_r {
        entier = &entier + &Rational::one();
        unites = Rational::zero();
    }

    if unites.is_zero() {
        // pas de "-0"
        let signe = if entier.is_zero() { "" } else { signe };
        return Ok(format!("{signe}{entier}"));
    }

    let frac = unites.checked_div(&denom_r)?;
    if entier.is_zero() {
        Ok(format!("{signe}{frac}"))
    } else {
        Ok(format!("{signe}{entier} {frac}"))
    }
}
