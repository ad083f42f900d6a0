//! Noyau exact Q-pur
//!
//! Organisation interne :
//! - rationnel.rs : Rational (BigRational réduit, signe au numérateur)
//! - mixte.rs     : pré-passe "1 3/8" / "2-1/4" -> "(1 + 3/8)"
//! - jetons.rs    : tokenisation (fractions littérales incluses)
//! - parseur.rs   : descente récursive -> Expr
//! - expr.rs      : arbre exact + évaluation
//! - erreur.rs    : CalcError
//! - eval.rs      : pipeline complet

pub mod erreur;
pub mod eval;
pub mod expr;
pub mod jetons;
pub mod mixte;
pub mod parseur;
pub mod rationnel;

#[cfg(test)]
mod tests_proprietes;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreur::CalcError;
pub use eval::{evaluate, evaluate_avec_demarche, Demarche};
pub use rationnel::Rational;
