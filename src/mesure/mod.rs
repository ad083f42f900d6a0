//! Mesures : la couche « atelier » autour du noyau.
//!
//! - unite.rs      : mm / cm / m / pouce + facteurs exacts
//! - conversion.rs : texte libre -> Longueur (mm exacts)
//! - fraction.rs   : pouces -> "1 3/8" au 1/N près
//! - erreur.rs     : ErreurMesure
//!
//! Le noyau ne connaît rien d’ici ; l’inverse seulement.

pub mod conversion;
pub mod erreur;
pub mod fraction;
pub mod unite;

pub use conversion::{convertir, resume, Longueur};
pub use erreur::ErreurMesure;
pub use fraction::{format_fraction_pouce, DENOM_DEFAUT};
