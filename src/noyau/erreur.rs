// src/noyau/erreur.rs
//
// Erreurs du noyau : une variante par genre d’échec, avec de quoi construire
// un message (caractère / jeton fautif + position) sans relire le texte.
//
// Les positions sont des indices de caractères (pas d’octets).
// InvalidCharacter : dans le texte brut reçu par `evaluate` ;
// les autres : dans le texte après réécriture des nombres mixtes.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CalcError>;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CalcError {
    #[error("division par zéro")]
    DivisionByZero,

    #[error("caractère inattendu: '{ch}' (position {pos})")]
    InvalidCharacter { ch: char, pos: usize },

    /// `found == None` : fin d’entrée atteinte alors qu’une valeur était attendue.
    #[error("{}", malformed_msg(.found, .pos))]
    MalformedExpression { found: Option<String>, pos: usize },

    #[error("parenthèse ouverte en position {pos} jamais fermée")]
    UnmatchedParenthesis { pos: usize },

    #[error("entrée en trop après l’expression: '{found}' (position {pos})")]
    TrailingInput { found: String, pos: usize },

    /// Imbrication ou nombre d’opérateurs au-delà des bornes du parseur.
    #[error("expression trop profonde (position {pos})")]
    TooDeep { pos: usize },
}

fn malformed_msg(found: &Option<String>, pos: &usize) -> String {
    match found {
        Some(t) => format!("expression invalide: valeur attendue, trouvé '{t}' (position {pos})"),
        None => "expression invalide: valeur attendue en fin d’entrée".to_string(),
    }
}

impl CalcError {
    /// Nom court du genre d’erreur (stable, utile pour les journaux).
    pub fn genre(&self) -> &'static str {
        match self {
            CalcError::DivisionByZero => "division_by_zero",
            CalcError::InvalidCharacter { .. } => "invalid_character",
            CalcError::MalformedExpression { .. } => "malformed_expression",
            CalcError::UnmatchedParenthesis { .. } => "unmatched_parenthesis",
            CalcError::TrailingInput { .. } => "trailing_input",
            CalcError::TooDeep { .. } => "too_deep",
        }
    }
}
