//! Calculatrice RPN — bibliothèque
//!
//! Le noyau (jetons -> RPN -> pile -> texte) est exposé ici pour que l’hôte
//! (src/main.rs + src/app) et les tests l’utilisent sans passer par l’UI.

pub mod noyau;

pub use noyau::{eval_expression, safe_evaluate, ErreurEval, MarqueurErreur, Session};
