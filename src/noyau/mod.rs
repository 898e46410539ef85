//! Noyau flottant RPN
//!
//! Organisation interne :
//! - erreur.rs    : erreurs typées + marqueur unique pour l’hôte
//! - jetons.rs    : tokenisation (tolérante)
//! - fonctions.rs : registre des fonctions + constantes pi / e
//! - rpn.rs       : shunting-yard (infixe -> postfixe)
//! - pile.rs      : évaluation de la RPN sur une pile de f64
//! - format.rs    : rendu texte du résultat
//! - eval.rs      : façade (normalisation, liste blanche, pipeline complet)
//! - session.rs   : registre "ans" (contexte explicite, pas de global)

pub mod erreur;
pub mod eval;
pub mod fonctions;
pub mod format;
pub mod jetons;
pub mod pile;
pub mod rpn;
pub mod session;


#[cfg(test)]
mod tests_fuzz_safe;


// API publique minimale
pub use erreur::{ErreurEval, MarqueurErreur, MARQUEUR_ERREUR};
pub use eval::{eval_expression, safe_evaluate, Evaluation};
pub use session::Session;
