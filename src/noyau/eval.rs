//! Noyau — évaluation (pipeline réel)
//!
//! normalisation -> liste blanche -> jetons -> RPN -> pile -> fini ? -> texte
//!
//! Deux entrées :
//! - `eval_expression` : erreurs typées + démarche (diagnostic, tests, panneau UI)
//! - `safe_evaluate`   : contrat hôte, un texte ou le marqueur unique

use super::erreur::{ErreurEval, MarqueurErreur, Resultat};
use super::format::format_resultat;
use super::jetons::{format_tokens, tokenize};
use super::pile::eval_rpn;
use super::rpn::to_rpn;
use super::session::Session;

/// Résultat complet d’une évaluation réussie.
#[derive(Clone, Debug, PartialEq)]
pub struct Evaluation {
    pub valeur: f64,
    pub texte: String,
    pub jetons: String,
    pub rpn: String,
}

/// Glyphes alternatifs -> opérateurs ASCII.
pub fn normaliser(brut: &str) -> String {
    brut.chars()
        .map(|c| match c {
            '×' | 'x' | 'X' => '*',
            '÷' => '/',
            '−' => '-',
            autre => autre,
        })
        .collect()
}

fn caractere_autorise(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || matches!(
            c,
            '.' | '+' | '-' | '*' | '/' | '%' | '^' | '(' | ')' | ',' | ' '
        )
}

/// Liste blanche : plus stricte que `tokenize`, c’est elle la vraie barrière.
pub fn valider(s: &str) -> Resultat<()> {
    if s.is_empty() {
        return Err(ErreurEval::EntreeVide);
    }
    match s.chars().find(|c| !caractere_autorise(*c)) {
        Some(c) => Err(ErreurEval::CaractereInvalide(c)),
        None => Ok(()),
    }
}

/// API typée : évalue une expression et retourne valeur, texte et démarche.
pub fn eval_expression(expr_str: &str, decimales: usize) -> Resultat<Evaluation> {
    let s = normaliser(expr_str);
    valider(&s)?;

    // 1) Jetons
    let jetons = tokenize(&s);
    log::debug!("jetons: {}", format_tokens(&jetons));

    // 2) RPN
    let rpn = to_rpn(&jetons);
    log::debug!("rpn: {}", format_tokens(&rpn));

    // 3) Pile
    let valeur = eval_rpn(&rpn)?;
    if !valeur.is_finite() {
        return Err(ErreurEval::ResultatNonFini);
    }

    Ok(Evaluation {
        valeur,
        texte: format_resultat(valeur, decimales),
        jetons: format_tokens(&jetons),
        rpn: format_tokens(&rpn),
    })
}

/// Façade : le texte du résultat, ou `MarqueurErreur` quelle que soit la cause.
///
/// En cas de succès, le texte est mémorisé dans la session (registre "ans").
pub fn safe_evaluate(brut: &str, session: &mut Session) -> Result<String, MarqueurErreur> {
    match session.evaluer_detail(brut) {
        Ok(e) => Ok(e.texte),
        Err(err) => {
            log::debug!("évaluation refusée ({brut:?}): {err}");
            Err(err.into())
        }
    }
}
