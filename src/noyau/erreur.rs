// src/noyau/erreur.rs

use thiserror::Error;

/// Texte unique renvoyé à l’hôte pour tout échec.
pub const MARQUEUR_ERREUR: &str = "Error";

/// Erreurs internes du noyau.
///
/// Elles restent distinctes pour le diagnostic (démarche, logs, tests) ;
/// la façade les écrase toutes en [`MarqueurErreur`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErreurEval {
    #[error("entrée vide")]
    EntreeVide,

    #[error("caractère non autorisé: '{0}'")]
    CaractereInvalide(char),

    #[error("fonction inconnue: {0}")]
    FonctionInconnue(String),

    #[error("expression mal formée: {0}")]
    ExpressionMalformee(&'static str),

    #[error("nombre invalide: {0}")]
    NombreInvalide(String),

    #[error("résultat non fini")]
    ResultatNonFini,
}

pub type Resultat<T> = std::result::Result<T, ErreurEval>;

/// Marqueur d’erreur externe : aucune information, aucun résultat partiel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Error")]
pub struct MarqueurErreur;

impl From<ErreurEval> for MarqueurErreur {
    fn from(_: ErreurEval) -> Self {
        MarqueurErreur
    }
}
