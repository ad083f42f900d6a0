// src/noyau/rationnel.rs
//
// Rationnel exact (sans flottants).
// - stockage : BigRational (numérateur/dénominateur BigInt)
// - invariant : pgcd(|n|, d) == 1, d > 0, signe porté par n
// - valeur immuable : chaque opération rend un nouveau Rational
//
// Le seul passage en flottant est `to_f64()`, réservé à l’affichage.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, ToPrimitive, Zero};

use super::erreur::{CalcError, Result};

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rational(BigRational);

impl Rational {
    /// n/d réduit. Échoue si d == 0.
    pub fn new(n: impl Into<BigInt>, d: impl Into<BigInt>) -> Result<Self> {
        let d = d.into();
        if d.is_zero() {
            return Err(CalcError::DivisionByZero);
        }
        Ok(Self::reduit(n.into(), d))
    }

    /// Réduction + signe sur le numérateur. Appelant : d != 0 garanti.
    fn reduit(n: BigInt, d: BigInt) -> Self {
        // Ratio::new : pgcd(0, d) = d => 0/1 ; d < 0 => on retourne les deux signes.
        Self(BigRational::new(n, d))
    }

    /// n/D pour les constantes du crate : D != 0 vérifié à la compilation.
    pub(crate) fn fraction_const<const D: u32>(n: i64) -> Self {
        const { assert!(D != 0, "dénominateur nul") };
        Self::reduit(BigInt::from(n), BigInt::from(D))
    }

    pub fn from_integer(n: impl Into<BigInt>) -> Self {
        Self(BigRational::from_integer(n.into()))
    }

    pub fn zero() -> Self {
        Self(BigRational::zero())
    }

    pub fn one() -> Self {
        Self(BigRational::one())
    }

    /// Lecture décimale exacte : `[+|-]chiffres[.chiffres]`.
    ///
    /// - partie entière vide => 0 (".5" = 1/2)
    /// - partie fractionnaire vide => 0 ("3." = 3)
    /// - dénominateur = 10^(nombre de chiffres après le point)
    ///
    /// Un seul signe, en tête. Les positions d’erreur sont des indices de caractères dans `s`.
    pub fn from_decimal_str(s: &str) -> Result<Self> {
        let mut chars = s.chars().enumerate().peekable();

        let negatif = match chars.peek() {
            Some((_, '-')) => {
                chars.next();
                true
            }
            Some((_, '+')) => {
                chars.next();
                false
            }
            _ => false,
        };

        let mut entier = String::new();
        let mut frac = String::new();
        let mut point = false;

        for (pos, c) in chars {
            match c {
                '0'..='9' if point => frac.push(c),
                '0'..='9' => entier.push(c),
                '.' if !point => point = true,
                _ => return Err(CalcError::InvalidCharacter { ch: c, pos }),
            }
        }

        if !point && entier.is_empty() {
            return Err(CalcError::MalformedExpression {
                found: None,
                pos: s.chars().count(),
            });
        }

        let scale = BigInt::from(10).pow(frac.len() as u32);
        let mut n = lire_chiffres(&entier)? * &scale + lire_chiffres(&frac)?;
        if negatif {
            n = -n;
        }

        Self::new(n, scale)
    }

    pub fn numer(&self) -> &BigInt {
        self.0.numer()
    }

    pub fn denom(&self) -> &BigInt {
        self.0.denom()
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.0.is_negative()
    }

    pub fn is_integer(&self) -> bool {
        self.0.is_integer()
    }

    pub fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Plus grand entier <= self.
    pub fn floor(&self) -> Self {
        Self(self.0.floor())
    }

    /// Entier le plus proche (demi => on s’éloigne de zéro).
    pub fn round(&self) -> Self {
        Self(self.0.round())
    }

    /// Division exacte. Échoue si le diviseur est nul.
    pub fn checked_div(&self, rhs: &Rational) -> Result<Rational> {
        if rhs.numer().is_zero() {
            return Err(CalcError::DivisionByZero);
        }
        let n = self.numer() * rhs.denom();
        let d = self.denom() * rhs.numer();
        Ok(Self::reduit(n, d))
    }

    /// Approximation flottante : SEULEMENT pour l’affichage.
    pub fn to_f64(&self) -> f64 {
        self.0.to_f64().unwrap_or(f64::NAN)
    }
}

/// Chaîne de chiffres ASCII -> BigInt (vide => 0).
fn lire_chiffres(s: &str) -> Result<BigInt> {
    if s.is_empty() {
        return Ok(BigInt::zero());
    }
    BigInt::parse_bytes(s.as_bytes(), 10).ok_or(CalcError::MalformedExpression {
        found: Some(s.to_string()),
        pos: 0,
    })
}

/* ------------------------ Arithmétique (produit en croix + réduction) ------------------------ */

impl<'b> Add<&'b Rational> for &Rational {
    type Output = Rational;

    fn add(self, rhs: &'b Rational) -> Rational {
        let n = self.numer() * rhs.denom() + rhs.numer() * self.denom();
        Rational::reduit(n, self.denom() * rhs.denom())
    }
}

impl<'b> Sub<&'b Rational> for &Rational {
    type Output = Rational;

    fn sub(self, rhs: &'b Rational) -> Rational {
        let n = self.numer() * rhs.denom() - rhs.numer() * self.denom();
        Rational::reduit(n, self.denom() * rhs.denom())
    }
}

impl<'b> Mul<&'b Rational> for &Rational {
    type Output = Rational;

    fn mul(self, rhs: &'b Rational) -> Rational {
        Rational::reduit(self.numer() * rhs.numer(), self.denom() * rhs.denom())
    }
}

impl Neg for &Rational {
    type Output = Rational;

    fn neg(self) -> Rational {
        Rational(-&self.0)
    }
}

impl Add for Rational {
    type Output = Rational;

    fn add(self, rhs: Rational) -> Rational {
        &self + &rhs
    }
}

impl Sub for Rational {
    type Output = Rational;

    fn sub(self, rhs: Rational) -> Rational {
        &self - &rhs
    }
}

impl Mul for Rational {
    type Output = Rational;

    fn mul(self, rhs: Rational) -> Rational {
        &self * &rhs
    }
}

impl Neg for Rational {
    type Output = Rational;

    fn neg(self) -> Rational {
        -&self
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.denom().is_one() {
            write!(f, "{}", self.numer())
        } else {
            write!(f, "{}/{}", self.numer(), self.denom())
        }
    }
}
