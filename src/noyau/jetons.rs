// src/noyau/jetons.rs

use std::fmt;

use super::erreur::{CalcError, Result};
use super::rationnel::Rational;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Tok {
    Num(Rational),

    Plus,
    Minus,
    Star,
    Slash,

    LPar,
    RPar,
}

/// Jeton + position (indice de caractère dans le texte tokenisé).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Jeton {
    pub tok: Tok,
    pub pos: usize,
}

/// Caractères admis par le noyau (tout le reste => InvalidCharacter).
pub fn est_caractere_admis(c: char) -> bool {
    c.is_ascii_digit() || c.is_whitespace() || matches!(c, '.' | '+' | '-' | '*' | '/' | '(' | ')')
}

/// Tokenize une chaîne (déjà normalisée) en jetons.
/// Supporte:
/// - entiers (ex: 12) et décimaux (ex: 1.375, .5, 3.)
/// - fractions littérales sans espaces (ex: 3/8) -> Num(3/8)
/// - opérateurs + - * /
/// - parenthèses ( )
pub fn tokenize(s: &str) -> Result<Vec<Jeton>> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        let op = match c {
            '+' => Some(Tok::Plus),
            '-' => Some(Tok::Minus),
            '*' => Some(Tok::Star),
            '/' => Some(Tok::Slash),
            '(' => Some(Tok::LPar),
            ')' => Some(Tok::RPar),
            _ => None,
        };
        if let Some(tok) = op {
            out.push(Jeton { tok, pos: i });
            i += 1;
            continue;
        }

        // Nombre : chiffres avec au plus un '.' (le premier point gagne ;
        // un second point n’est pas consommé et ouvre un nouveau littéral).
        if c.is_ascii_digit() || c == '.' {
            let start = i;
            let mut point = false;
            while i < chars.len() {
                let ch = chars[i];
                if ch.is_ascii_digit() {
                    i += 1;
                } else if ch == '.' && !point {
                    point = true;
                    i += 1;
                } else {
                    break;
                }
            }
            let lit: String = chars[start..i].iter().collect();

            // fraction immédiate: 3/8 (entier, '/', au moins un chiffre)
            let fraction = !point
                && i + 1 < chars.len()
                && chars[i] == '/'
                && chars[i + 1].is_ascii_digit();

            let rat = if fraction {
                let start_d = i + 1;
                i = start_d;
                while i < chars.len() && chars[i].is_ascii_digit() {
                    i += 1;
                }
                let d_str: String = chars[start_d..i].iter().collect();
                Rational::new(entier(&lit, start)?, entier(&d_str, start_d)?)?
            } else {
                Rational::from_decimal_str(&lit).map_err(|e| decale(e, start))?
            };

            out.push(Jeton {
                tok: Tok::Num(rat),
                pos: start,
            });
            continue;
        }

        return Err(CalcError::InvalidCharacter { ch: c, pos: i });
    }

    Ok(out)
}

/// Suite de chiffres ASCII -> entier (via la lecture décimale exacte).
fn entier(chiffres: &str, pos: usize) -> Result<num_bigint::BigInt> {
    let r = Rational::from_decimal_str(chiffres).map_err(|e| decale(e, pos))?;
    Ok(r.numer().clone())
}

/// Recale une position d’erreur relative au littéral sur le texte complet.
fn decale(e: CalcError, offset: usize) -> CalcError {
    match e {
        CalcError::InvalidCharacter { ch, pos } => CalcError::InvalidCharacter {
            ch,
            pos: pos + offset,
        },
        CalcError::MalformedExpression { found, pos } => CalcError::MalformedExpression {
            found,
            pos: pos + offset,
        },
        autre => autre,
    }
}

impl fmt::Display for Tok {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tok::Num(r) => write!(f, "{r}"),
            Tok::Plus => f.write_str("+"),
            Tok::Minus => f.write_str("-"),
            Tok::Star => f.write_str("*"),
            Tok::Slash => f.write_str("/"),
            Tok::LPar => f.write_str("("),
            Tok::RPar => f.write_str(")"),
        }
    }
}

/// Format utilitaire (démarche) : liste de jetons en texte.
pub fn format_tokens(jetons: &[Jeton]) -> String {
    jetons
        .iter()
        .map(|j| match &j.tok {
            // fraction littérale : crochets pour la distinguer d’une division
            Tok::Num(r) if !r.is_integer() => format!("[{r}]"),
            t => t.to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
