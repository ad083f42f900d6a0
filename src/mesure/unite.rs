// src/mesure/unite.rs
//
// Unités reconnues + facteurs EXACTS vers le millimètre.
// 1 in = 25.4 mm = 127/5 mm (définition internationale).

use crate::noyau::Rational;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Unite {
    Mm,
    Cm,
    M,
    Pouce,
}

/// Suffixes reconnus, du plus long au plus court ("mm" avant "m", "inches" avant "in").
const SUFFIXES: &[(&str, Unite)] = &[
    ("inches", Unite::Pouce),
    ("inch", Unite::Pouce),
    ("mm", Unite::Mm),
    ("cm", Unite::Cm),
    ("in", Unite::Pouce),
    ("m", Unite::M),
    ("\"", Unite::Pouce),
];

impl Unite {
    /// Facteur exact : valeur dans l’unité * facteur = millimètres.
    pub fn vers_mm(self) -> Rational {
        match self {
            Unite::Mm => Rational::one(),
            Unite::Cm => Rational::from_integer(10),
            Unite::M => Rational::from_integer(1000),
            Unite::Pouce => pouce_en_mm(),
        }
    }

    pub fn symbole(self) -> &'static str {
        match self {
            Unite::Mm => "mm",
            Unite::Cm => "cm",
            Unite::M => "m",
            Unite::Pouce => "\"",
        }
    }

    pub fn est_metrique(self) -> bool {
        !matches!(self, Unite::Pouce)
    }
}

pub fn pouce_en_mm() -> Rational {
    Rational::fraction_const::<5>(127)
}

/// Inverse exact de `pouce_en_mm` : 5/127 de pouce par millimètre.
pub fn pouce_par_mm() -> Rational {
    Rational::fraction_const::<127>(5)
}

/// Détache une unité finale : ("1 3/8", Some(Pouce)) pour "1 3/8\"".
/// Le texte doit déjà être en minuscules. La partie nombre est rognée.
pub fn detache_unite(s: &str) -> (&str, Option<Unite>) {
    let s = s.trim();
    for &(suffixe, unite) in SUFFIXES {
        if let Some(nombre) = s.strip_suffix(suffixe) {
            return (nombre.trim_end(), Some(unite));
        }
    }
    (s, None)
}
