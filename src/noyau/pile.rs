// src/noyau/pile.rs
//
// Évaluation d’une suite RPN sur une pile de f64.
//
// Invariants:
// - on ne lit jamais une pile vide : chaque dépilement est vérifié
// - en fin de suite, il reste exactement une valeur
// - division par zéro, racine d’un négatif... suivent IEEE 754 ici ;
//   c’est la façade qui refuse les résultats non finis

use super::erreur::{ErreurEval, Resultat};
use super::fonctions::{Constante, Fonction};
use super::jetons::{Op, Tok};

#[derive(Debug, Default)]
struct Pile {
    valeurs: Vec<f64>,
}

impl Pile {
    fn empiler(&mut self, v: f64) {
        self.valeurs.push(v);
    }

    fn depiler(&mut self) -> Resultat<f64> {
        self.valeurs
            .pop()
            .ok_or(ErreurEval::ExpressionMalformee("opérande manquant"))
    }

    /// Valeur finale (exactement une).
    fn resultat(mut self) -> Resultat<f64> {
        match self.valeurs.len() {
            0 => Err(ErreurEval::ExpressionMalformee("pile vide")),
            1 => self.depiler(),
            _ => Err(ErreurEval::ExpressionMalformee("opérandes en trop")),
        }
    }
}

fn appliquer_binaire(op: Op, a: f64, b: f64) -> f64 {
    match op {
        Op::Plus => a + b,
        Op::Minus => a - b,
        Op::Star => a * b,
        Op::Slash => a / b,
        Op::Percent => a % b,
        Op::Caret => a.powf(b),
        Op::Neg => -b, // unaire : traité avant, dans eval_rpn
    }
}

/// Évalue une suite RPN (telle que produite par `to_rpn`).
pub fn eval_rpn(rpn: &[Tok]) -> Resultat<f64> {
    let mut pile = Pile::default();

    for tok in rpn {
        match tok {
            Tok::Num(txt) => {
                let v = txt
                    .parse::<f64>()
                    .map_err(|_| ErreurEval::NombreInvalide(txt.clone()))?;
                pile.empiler(v);
            }

            Tok::Op(Op::Neg) => {
                let x = pile.depiler()?;
                pile.empiler(-x);
            }

            Tok::Op(op) => {
                // b au sommet = opérande de droite
                let b = pile.depiler()?;
                let a = pile.depiler()?;
                pile.empiler(appliquer_binaire(*op, a, b));
            }

            Tok::Ident(name) => {
                if let Some(c) = Constante::depuis_nom(name) {
                    pile.empiler(c.valeur());
                } else if let Some(f) = Fonction::depuis_nom(name) {
                    let mut args = vec![0.0; f.arite()];
                    for slot in args.iter_mut().rev() {
                        *slot = pile.depiler()?;
                    }
                    pile.empiler(f.appliquer(&args)?);
                } else {
                    return Err(ErreurEval::FonctionInconnue(name.clone()));
                }
            }

            Tok::LPar | Tok::RPar => {
                return Err(ErreurEval::ExpressionMalformee("parenthèses non appariées"))
            }
            Tok::Virgule => return Err(ErreurEval::ExpressionMalformee("virgule inattendue")),
        }
    }

    pile.resultat()
}
