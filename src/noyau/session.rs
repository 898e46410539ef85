//! Session de calcul : le registre "ans" + la précision d’arrondi.
//!
//! Le registre est un contexte explicite, possédé par l’appelant :
//! pas d’état global. Écrit seulement sur succès, lu par "insérer ans".

use super::erreur::{MarqueurErreur, Resultat};
use super::eval::{eval_expression, safe_evaluate, Evaluation};
use super::format::{DECIMALES_DEFAUT, DECIMALES_MAX};

#[derive(Clone, Debug)]
pub struct Session {
    derniere_reponse: Option<String>,
    decimales: usize,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            derniere_reponse: None,
            decimales: DECIMALES_DEFAUT,
        }
    }
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn avec_decimales(decimales: usize) -> Self {
        let mut s = Self::default();
        s.set_decimales(decimales);
        s
    }

    pub fn decimales(&self) -> usize {
        self.decimales
    }

    /// Garde-fou : borne la précision.
    pub fn set_decimales(&mut self, decimales: usize) {
        self.decimales = decimales.min(DECIMALES_MAX);
    }

    pub fn derniere_reponse(&self) -> Option<&str> {
        self.derniere_reponse.as_deref()
    }

    /// Texte à insérer pour "ans" ("0" tant que rien n’a réussi).
    pub fn ans(&self) -> &str {
        self.derniere_reponse().unwrap_or("0")
    }

    /// Évaluation typée ; mémorise le texte sur succès.
    pub fn evaluer_detail(&mut self, expression: &str) -> Resultat<Evaluation> {
        let e = eval_expression(expression, self.decimales)?;
        self.derniere_reponse = Some(e.texte.clone());
        Ok(e)
    }

    /// Contrat hôte : texte du résultat, ou "Error".
    pub fn evaluer(&mut self, expression: &str) -> String {
        safe_evaluate(expression, self).unwrap_or_else(|m: MarqueurErreur| m.to_string())
    }
}
