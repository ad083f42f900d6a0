// src/noyau/parseur.rs
//
// Descente récursive -> Expr
//
//   expr   := term (('+' | '-') term)*
//   term   := factor (('*' | '/') factor)*
//   factor := ('+' | '-') factor | '(' expr ')' | NUMBER
//
// Précédence : unaire > * / > + -, associativité à gauche, parenthèses prioritaires.
// Chaque règle avance le curseur ou échoue : pas de boucle sans progrès.
//
// Garde-fous pile : l’imbrication ( '(' et unaires ) et le nombre total
// d’opérateurs binaires sont bornés ; au-delà => CalcError::TooDeep.
// L’arbre produit reste ainsi assez bas pour eval / Display / Drop.

use super::erreur::{CalcError, Result};
use super::expr::Expr;
use super::jetons::{Jeton, Tok};

/// Imbrication maximale : parenthèses + signes unaires empilés.
pub const PROFONDEUR_MAX: usize = 256;

/// Nombre maximal d’opérateurs binaires dans une expression.
pub const OPERATEURS_MAX: usize = 1024;

struct Parseur<'a> {
    jetons: &'a [Jeton],
    i: usize,
    /// Position de fin du texte (pour les erreurs en fin d’entrée).
    fin: usize,
    /// Imbrication courante.
    profondeur: usize,
    /// Opérateurs binaires déjà lus.
    operateurs: usize,
}

/// Construit l’arbre d’une suite de jetons complète.
///
/// `fin` : longueur (en caractères) du texte tokenisé.
pub fn parse(jetons: &[Jeton], fin: usize) -> Result<Expr> {
    let mut p = Parseur {
        jetons,
        i: 0,
        fin,
        profondeur: 0,
        operateurs: 0,
    };
    let e = p.expr()?;

    if let Some(j) = p.peek() {
        return Err(CalcError::TrailingInput {
            found: j.tok.to_string(),
            pos: j.pos,
        });
    }
    Ok(e)
}

impl Parseur<'_> {
    fn peek(&self) -> Option<&Jeton> {
        self.jetons.get(self.i)
    }

    fn suivant(&mut self) -> Option<&Jeton> {
        let j = self.jetons.get(self.i);
        if j.is_some() {
            self.i += 1;
        }
        j
    }

    /// Un opérateur binaire de plus ; refuse au-delà de OPERATEURS_MAX.
    fn compte_operateur(&mut self, pos: usize) -> Result<()> {
        self.operateurs += 1;
        if self.operateurs > OPERATEURS_MAX {
            return Err(CalcError::TooDeep { pos });
        }
        Ok(())
    }

    /// Descend d’un niveau (parenthèse ou unaire) ; refuse au-delà de PROFONDEUR_MAX.
    fn entre(&mut self, pos: usize) -> Result<()> {
        if self.profondeur >= PROFONDEUR_MAX {
            return Err(CalcError::TooDeep { pos });
        }
        self.profondeur += 1;
        Ok(())
    }

    fn expr(&mut self) -> Result<Expr> {
        let mut gauche = self.term()?;

        while let Some(j) = self.peek() {
            let op = j.tok.clone();
            if !matches!(op, Tok::Plus | Tok::Minus) {
                break;
            }
            let pos = j.pos;
            self.compte_operateur(pos)?;
            self.i += 1;
            let droite = self.term()?;
            gauche = match op {
                Tok::Plus => Expr::Add(Box::new(gauche), Box::new(droite)),
                _ => Expr::Sub(Box::new(gauche), Box::new(droite)),
            };
        }

        Ok(gauche)
    }

    fn term(&mut self) -> Result<Expr> {
        let mut gauche = self.factor()?;

        while let Some(j) = self.peek() {
            let op = j.tok.clone();
            if !matches!(op, Tok::Star | Tok::Slash) {
                break;
            }
            let pos = j.pos;
            self.compte_operateur(pos)?;
            self.i += 1;
            let droite = self.factor()?;
            gauche = match op {
                Tok::Star => Expr::Mul(Box::new(gauche), Box::new(droite)),
                _ => Expr::Div(Box::new(gauche), Box::new(droite)),
            };
        }

        Ok(gauche)
    }

    fn factor(&mut self) -> Result<Expr> {
        let fin = self.fin;
        let Some(j) = self.suivant() else {
            return Err(CalcError::MalformedExpression {
                found: None,
                pos: fin,
            });
        };
        let pos = j.pos;

        match j.tok.clone() {
            Tok::Num(r) => Ok(Expr::Rat(r)),

            autre @ (Tok::Star | Tok::Slash | Tok::RPar) => Err(CalcError::MalformedExpression {
                found: Some(autre.to_string()),
                pos,
            }),

            // '+', '-', '(' : un niveau d’imbrication de plus
            tok => {
                self.entre(pos)?;
                let r = match tok {
                    Tok::Plus => self.factor(),
                    Tok::Minus => self.factor().map(|e| Expr::Neg(Box::new(e))),
                    _ => self.expr().and_then(|e| match self.suivant() {
                        Some(Jeton { tok: Tok::RPar, .. }) => Ok(e),
                        // "(1+2" : fin atteinte sans ')'
                        None => Err(CalcError::UnmatchedParenthesis { pos }),
                        // "(1 2)" : un jeton fautif à la place de ')'
                        Some(autre) => Err(CalcError::TrailingInput {
                            found: autre.tok.to_string(),
                            pos: autre.pos,
                        }),
                    }),
                };
                self.profondeur -= 1;
                r
            }
        }
    }
}
