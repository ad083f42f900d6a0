//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - invariant clé : jamais de panique, toute sortie est Ok(réduit) ou une CalcError

use std::time::{Duration, Instant};

use num_bigint::BigInt;
use num_traits::{One, Signed, Zero};

use super::erreur::CalcError;
use super::evaluate;
use super::rationnel::Rational;

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

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

/* ------------------------ Génération d’expressions (bornée) ------------------------ */

fn gen_nombre(rng: &mut Rng) -> String {
    let a = rng.pick(10);
    // éviter dénominateur 0 ici; la division par zéro doit arriver via / expr
    let b = 1 + rng.pick(16);

    match rng.pick(5) {
        0 => format!("{a}/{b}"),
        1 => format!("{a} {}/{b}", rng.pick(b)),
        2 => format!("{a}.{}", rng.pick(1000)),
        3 => format!("{a}-{}/{b}", rng.pick(b)),
        _ => format!("{a}"),
    }
}

fn gen_expr(rng: &mut Rng, depth: usize) -> String {
    if depth == 0 {
        return gen_nombre(rng);
    }

    match rng.pick(7) {
        0 => gen_nombre(rng),
        1 => format!("({} + {})", gen_expr(rng, depth - 1), gen_expr(rng, depth - 1)),
        2 => format!("({} - ({}))", gen_expr(rng, depth - 1), gen_expr(rng, depth - 1)),
        3 => format!("({} * {})", gen_expr(rng, depth - 1), gen_expr(rng, depth - 1)),
        4 => format!("({} / {})", gen_expr(rng, depth - 1), gen_expr(rng, depth - 1)),
        5 => format!("-({})", gen_expr(rng, depth - 1)),
        _ => format!("+{}", gen_expr(rng, depth - 1)),
    }
}

/// Mutation : insère / supprime / remplace un caractère (texte souvent invalide).
fn mute(rng: &mut Rng, s: &str) -> String {
    const ALPHABET: &[char] = &['(', ')', '+', '-', '*', '/', '.', ' ', '0', '7', 'x', '^', 'é'];
    let mut chars: Vec<char> = s.chars().collect();
    if chars.is_empty() {
        return String::new();
    }
    let i = rng.pick(chars.len() as u32) as usize;
    let c = ALPHABET[rng.pick(ALPHABET.len() as u32) as usize];
    match rng.pick(3) {
        0 => chars.insert(i, c),
        1 => {
            chars.remove(i);
        }
        _ => chars[i] = c,
    }
    chars.into_iter().collect()
}

/* ------------------------ Helper somme balancée anti pile ------------------------ */

fn somme_balancee(terme: &str, n: usize) -> String {
    let mut items: Vec<String> = (0..n).map(|_| terme.to_string()).collect();
    while items.len() > 1 {
        let mut next = Vec::new();
        let mut i = 0;
        while i < items.len() {
            if i + 1 < items.len() {
                next.push(format!("({}+{})", items[i], items[i + 1]));
                i += 2;
            } else {
                next.push(items[i].clone());
                i += 1;
            }
        }
        items = next;
    }
    items.pop().unwrap_or_else(|| "0".to_string())
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_determinisme_et_reduction() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..150 {
        budget(t0, max);

        let expr = gen_expr(&mut rng, 4);

        // Même entrée => même sortie
        let a = evaluate(&expr);
        let b = evaluate(&expr);
        assert_eq!(a, b, "non déterministe: {expr:?}");

        match a {
            Ok(r) => {
                assert!(est_reduit(&r), "non réduit: expr={expr:?} r={r}");
                seen_ok += 1;
            }
            Err(e) => {
                // seule erreur légitime sur une expression bien formée
                assert_eq!(e, CalcError::DivisionByZero, "expr={expr:?}");
                seen_err += 1;
            }
        }
    }

    assert!(seen_ok > 10, "trop peu de succès: {seen_ok}");
    assert!(seen_err > 0, "aucune erreur vue: fuzz trop “sage”");
}

#[test]
fn fuzz_safe_mutations_sans_panique() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xBADC0DE_u64);

    let mut genres = std::collections::BTreeSet::new();

    for _ in 0..400 {
        budget(t0, max);

        let mut expr = gen_expr(&mut rng, 3);
        for _ in 0..(1 + rng.pick(3)) {
            expr = mute(&mut rng, &expr);
        }
        if rng.coin() {
            expr = mute(&mut rng, &expr);
        }

        match evaluate(&expr) {
            Ok(r) => assert!(est_reduit(&r), "non réduit: expr={expr:?}"),
            Err(e) => {
                genres.insert(e.genre());
            }
        }
    }

    // le fuzz doit balayer plusieurs familles d’erreurs
    assert!(genres.contains("invalid_character"), "vu: {genres:?}");
    assert!(genres.len() >= 3, "trop peu de genres d’erreur: {genres:?}");
}

#[test]
fn fuzz_safe_somme_balancee_anti_pile() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);

    let expr = somme_balancee("1/2", 800);
    budget(t0, max);

    let r = evaluate(&expr).unwrap_or_else(|e| panic!("err: {e}"));

    // 800*(1/2) = 400
    assert_eq!(r, Rational::from_integer(400));
}

#[test]
fn fuzz_safe_parentheses_imbriquees() {
    let profondeur = 200;
    let expr = format!("{}3/8{}", "(".repeat(profondeur), ")".repeat(profondeur));
    assert_eq!(evaluate(&expr).unwrap(), Rational::new(3, 8).unwrap());

    let ouverte = format!("{}1", "(".repeat(profondeur));
    assert!(matches!(
        evaluate(&ouverte),
        Err(CalcError::UnmatchedParenthesis { .. })
    ));

    // entrées collées démesurées : erreur typée, pas de débordement de pile
    let n = 10_000;
    let gouffre = format!("{}1{}", "(".repeat(n), ")".repeat(n));
    assert!(matches!(evaluate(&gouffre), Err(CalcError::TooDeep { .. })));

    let gouffre_ouvert = "(".repeat(n);
    assert!(matches!(evaluate(&gouffre_ouvert), Err(CalcError::TooDeep { .. })));

    let moins = format!("{}1", "-".repeat(n));
    assert!(matches!(evaluate(&moins), Err(CalcError::TooDeep { .. })));

    let chaine = vec!["1"; n].join(" + ");
    assert!(matches!(evaluate(&chaine), Err(CalcError::TooDeep { .. })));
}
