// src/noyau/rpn.rs
//
// Shunting-yard : suite de Tok (infixe) -> suite de Tok (postfixe / RPN)
//
// Règles:
// - Num -> sortie
// - Ident:
//    - fonction connue (sin, cos, ..., pow) => pile ops (sortira après sa parenthèse fermante)
//    - pi / e => sortie (constante)
//    - sinon => pile ops, comme une fonction (échec "fonction inconnue" à l’évaluation)
// - Opérateur : dépile tant que la précédence/associativité l’exige, puis empile
// - Moins unaire : si '-' arrive quand on attend une valeur, on empile Neg (préfixe)
//   Plus unaire : ignoré
// - ',' : dépile jusqu’à '(' (séparateur d’arguments de pow)
//
// NOTE:
// - La conversion ne refuse rien. Une parenthèse non appariée laisse un '(' ou
//   un ')' dans la sortie, et c’est l’évaluation qui échoue.

use super::fonctions::{Constante, Fonction};
use super::jetons::{Assoc, Op, Tok};

/// Faut-il sortir `sommet` de la pile avant d’empiler `courant` ?
fn doit_depiler(courant: Op, sommet: Op) -> bool {
    match courant.associativite() {
        Assoc::Droite => courant.precedence() < sommet.precedence(),
        Assoc::Gauche => courant.precedence() <= sommet.precedence(),
    }
}

fn est_fonction(tok: &Tok) -> bool {
    matches!(tok, Tok::Ident(name) if Fonction::depuis_nom(name).is_some())
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Num("2"), Op(^), Num("3"), Op(^), Num("2")]
///   rpn:    [Num("2"), Num("3"), Num("2"), Op(^), Op(^)]
pub fn to_rpn(tokens: &[Tok]) -> Vec<Tok> {
    let mut out: Vec<Tok> = Vec::with_capacity(tokens.len());
    let mut ops: Vec<Tok> = Vec::new();

    // Vrai en début d’expression, après '(' / ',' / un opérateur / un nom de fonction.
    // Sert à détecter le moins unaire.
    let mut attend_valeur = true;

    for tok in tokens {
        match tok {
            Tok::Num(_) => {
                out.push(tok.clone());
                attend_valeur = false;
            }

            Tok::Ident(name) => {
                let name = name.to_ascii_lowercase();
                if Fonction::depuis_nom(&name).is_some() {
                    ops.push(Tok::Ident(name));
                    attend_valeur = true;
                } else if Constante::depuis_nom(&name).is_some() {
                    out.push(Tok::Ident(name));
                    attend_valeur = false;
                } else {
                    ops.push(Tok::Ident(name));
                    attend_valeur = true;
                }
            }

            Tok::Op(op) => {
                if attend_valeur {
                    match op {
                        Op::Minus => {
                            // préfixe : on n’éjecte rien
                            ops.push(Tok::Op(Op::Neg));
                            continue;
                        }
                        Op::Plus => continue,
                        _ => {}
                    }
                }

                while let Some(&Tok::Op(sommet)) = ops.last() {
                    if !doit_depiler(*op, sommet) {
                        break;
                    }
                    ops.pop();
                    out.push(Tok::Op(sommet));
                }

                ops.push(Tok::Op(*op));
                attend_valeur = true;
            }

            Tok::LPar => {
                ops.push(Tok::LPar);
                attend_valeur = true;
            }

            Tok::RPar => {
                let mut appariee = false;
                while let Some(top) = ops.pop() {
                    if top == Tok::LPar {
                        appariee = true;
                        break;
                    }
                    out.push(top);
                }

                if !appariee {
                    out.push(Tok::RPar);
                }

                // si une fonction est au sommet, on la colle à son argument
                if ops.last().is_some_and(est_fonction) {
                    if let Some(f) = ops.pop() {
                        out.push(f);
                    }
                }

                attend_valeur = false;
            }

            Tok::Virgule => {
                while let Some(top) = ops.last() {
                    if *top == Tok::LPar {
                        break;
                    }
                    if let Some(top) = ops.pop() {
                        out.push(top);
                    }
                }
                attend_valeur = true;
            }
        }
    }

    // vide la pile ops (les '(' orphelins partent aussi : l’évaluation les refusera)
    while let Some(op) = ops.pop() {
        out.push(op);
    }

    out
}
