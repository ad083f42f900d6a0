// src/mesure/erreur.rs

use thiserror::Error;

use crate::noyau::CalcError;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ErreurMesure {
    #[error("Entrée vide")]
    Vide,

    #[error("nombre manquant avant l’unité « {0} »")]
    NombreManquant(&'static str),

    #[error(
        "Format non reconnu : ajoutez une unité mm/cm/m ou in/\"\n\
         Exemples : 25mm, 2.5cm, 0.75m, 1\", 1 3/8\", 7/16in"
    )]
    UniteManquante,

    #[error("le dénominateur d’affichage doit être positif (reçu {0})")]
    DenominateurInvalide(u32),

    #[error(transparent)]
    Calcul(#[from] CalcError),
}
