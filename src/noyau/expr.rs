// src/noyau/expr.rs
//
// Arbre d’expression exact (sans flottants).
// Construit une fois par le parseur, évalué par `eval` (fonction pure).
// Utile aussi pour tester l’arithmétique sans passer par le texte.

use std::fmt;

use super::erreur::Result;
use super::rationnel::Rational;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Expr {
    Rat(Rational),
    Neg(Box<Expr>),

    Add(Box<Expr>, Box<Expr>),
    Sub(Box<Expr>, Box<Expr>),
    Mul(Box<Expr>, Box<Expr>),
    Div(Box<Expr>, Box<Expr>),
}

impl Expr {
    /// Évaluation exacte. Seul échec possible : division par zéro.
    pub fn eval(&self) -> Result<Rational> {
        use Expr::*;

        match self {
            Rat(r) => Ok(r.clone()),
            Neg(x) => Ok(-x.eval()?),
            Add(a, b) => Ok(&a.eval()? + &b.eval()?),
            Sub(a, b) => Ok(&a.eval()? - &b.eval()?),
            Mul(a, b) => Ok(&a.eval()? * &b.eval()?),
            Div(a, b) => a.eval()?.checked_div(&b.eval()?),
        }
    }
}

impl fmt::Display for Expr {
    /// Forme entièrement parenthésée (démarche) : montre la précédence retenue.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Expr::*;

        match self {
            Rat(r) if r.is_negative() || !r.is_integer() => write!(f, "[{r}]"),
            Rat(r) => write!(f, "{r}"),
            Neg(x) => write!(f, "-{x}"),
            Add(a, b) => write!(f, "({a} + {b})"),
            Sub(a, b) => write!(f, "({a} - {b})"),
            Mul(a, b) => write!(f, "({a} * {b})"),
            Div(a, b) => write!(f, "({a} / {b})"),
        }
    }
}
