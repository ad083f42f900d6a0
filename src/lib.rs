//! Convertisseur Q-pur
//!
//! - noyau  : évaluateur exact (texte -> Rational), sans flottants
//! - mesure : unités, conversion en millimètres, fractions de pouce
//! - app    : interface eframe (natif + web)

pub mod app;
pub mod mesure;
pub mod noyau;
