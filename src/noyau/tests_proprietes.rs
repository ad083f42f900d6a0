//! Tests de propriétés (proptest) : lois arithmétiques + invariant de réduction.
//!
//! - nombre de cas fixe (stabilité CI)
//! - opérandes bornés en i64, produits calculés en BigInt (pas de débordement)
//! - facteurs communs volontairement grands pour stresser la réduction

use num_bigint::BigInt;
use num_traits::{One, Signed, Zero};
use proptest::prelude::*;

use super::erreur::CalcError;
use super::evaluate;
use super::rationnel::Rational;

fn pgcd(a: &BigInt, b: &BigInt) -> BigInt {
    let (mut a, mut b) = (a.abs(), b.abs());
    while !b.is_zero() {
        let r = &a % &b;
        a = b;
        b = r;
    }
    a
}

fn est_reduit(r: &Rational) -> bool {
    r.denom().is_positive() && pgcd(r.numer(), r.denom()).is_one()
}

/// Rationnel avec un facteur commun k imposé au numérateur et au dénominateur.
fn rationnel_gonfle() -> impl Strategy<Value = Rational> {
    (-10_000i64..10_000, 1i64..10_000, 1i64..1_000_000_007, any::<bool>()).prop_map(
        |(n, d, k, neg_d)| {
            let n = BigInt::from(n) * k;
            let mut d = BigInt::from(d) * k;
            if neg_d {
                d = -d;
            }
            Rational::new(n, d).expect("dénominateur non nul")
        },
    )
}

fn rationnel_non_nul() -> impl Strategy<Value = Rational> {
    rationnel_gonfle().prop_filter("non nul", |r| !r.is_zero())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn construction_toujours_reduite(r in rationnel_gonfle()) {
        prop_assert!(est_reduit(&r), "non réduit: {}", r);
    }

    #[test]
    fn operations_gardent_l_invariant(a in rationnel_gonfle(), b in rationnel_gonfle()) {
        prop_assert!(est_reduit(&(&a + &b)));
        prop_assert!(est_reduit(&(&a - &b)));
        prop_assert!(est_reduit(&(&a * &b)));
        match a.checked_div(&b) {
            Ok(q) => prop_assert!(est_reduit(&q)),
            Err(e) => {
                prop_assert!(b.is_zero());
                prop_assert_eq!(e, CalcError::DivisionByZero);
            }
        }
    }

    #[test]
    fn reduction_idempotente(r in rationnel_gonfle()) {
        let again = Rational::new(r.numer().clone(), r.denom().clone()).unwrap();
        prop_assert_eq!(&again, &r);
        prop_assert_eq!(again.numer(), r.numer());
        prop_assert_eq!(again.denom(), r.denom());
        // opérations neutres : pas de dérive
        prop_assert_eq!(&(&r + &Rational::zero()), &r);
        prop_assert_eq!(&(&r * &Rational::one()), &r);
    }

    #[test]
    fn inverse_multiplicatif(r in rationnel_non_nul()) {
        let inv = Rational::one().checked_div(&r).unwrap();
        let produit = &r * &inv;
        prop_assert!(produit.numer().is_one() && produit.denom().is_one());
    }

    #[test]
    fn precedence_a_plus_b_fois_c(a in -100_000i64..100_000, b in -100_000i64..100_000, c in -100_000i64..100_000) {
        let texte = format!("{a}+{b}*{c}");
        let attendu = &Rational::from_integer(a)
            + &(&Rational::from_integer(b) * &Rational::from_integer(c));
        prop_assert_eq!(evaluate(&texte).unwrap(), attendu);
    }

    #[test]
    fn decimal_aller_retour(entier in 0u32..1_000_000, frac in 0u32..1_000_000, neg in any::<bool>()) {
        let s = format!("{}{entier}.{frac}", if neg { "-" } else { "" });
        let r = Rational::from_decimal_str(&s).unwrap();
        let attendu: f64 = s.parse().unwrap();
        prop_assert!((r.to_f64() - attendu).abs() <= 1e-9 * attendu.abs().max(1.0), "{} -> {}", s, r);
    }
}

#[test]
fn division_par_zero_construit() {
    let zero = Rational::new(0, 1).unwrap();
    assert_eq!(
        Rational::one().checked_div(&zero),
        Err(CalcError::DivisionByZero)
    );
}
