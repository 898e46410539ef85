// src/noyau/fonctions.rs
//
// Registre fixe : fonctions nommées + constantes.
//
// pow est binaire : pow(a, b) dépile deux valeurs (b au sommet).
// Les autres fonctions sont unaires ; sin/cos/tan en radians.

use super::erreur::{ErreurEval, Resultat};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fonction {
    Sin,
    Cos,
    Tan,
    Sqrt,
    Ln,
    Log,
    Pow,
}

impl Fonction {
    pub const TOUTES: [Fonction; 7] = [
        Fonction::Sin,
        Fonction::Cos,
        Fonction::Tan,
        Fonction::Sqrt,
        Fonction::Ln,
        Fonction::Log,
        Fonction::Pow,
    ];

    /// Recherche insensible à la casse.
    pub fn depuis_nom(nom: &str) -> Option<Fonction> {
        Self::TOUTES
            .into_iter()
            .find(|f| f.nom().eq_ignore_ascii_case(nom))
    }

    pub fn nom(self) -> &'static str {
        match self {
            Fonction::Sin => "sin",
            Fonction::Cos => "cos",
            Fonction::Tan => "tan",
            Fonction::Sqrt => "sqrt",
            Fonction::Ln => "ln",
            Fonction::Log => "log",
            Fonction::Pow => "pow",
        }
    }

    /// Nombre de valeurs dépilées.
    pub fn arite(self) -> usize {
        match self {
            Fonction::Pow => 2,
            _ => 1,
        }
    }

    /// `args` dans l’ordre d’écriture : pow(a, b) reçoit [a, b].
    pub fn appliquer(self, args: &[f64]) -> Resultat<f64> {
        let v = match (self, args) {
            (Fonction::Sin, [x]) => x.sin(),
            (Fonction::Cos, [x]) => x.cos(),
            (Fonction::Tan, [x]) => x.tan(),
            (Fonction::Sqrt, [x]) => x.sqrt(),
            (Fonction::Ln, [x]) => x.ln(),
            (Fonction::Log, [x]) => x.log10(),
            (Fonction::Pow, [a, b]) => a.powf(*b),
            _ => return Err(ErreurEval::ExpressionMalformee("nombre d’arguments incorrect")),
        };
        Ok(v)
    }
}

/// Constantes sans argument, sorties directement en RPN.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Constante {
    Pi,
    E,
}

impl Constante {
    pub fn depuis_nom(nom: &str) -> Option<Constante> {
        if nom.eq_ignore_ascii_case("pi") {
            Some(Constante::Pi)
        } else if nom.eq_ignore_ascii_case("e") {
            Some(Constante::E)
        } else {
            None
        }
    }

    pub fn valeur(self) -> f64 {
        match self {
            Constante::Pi => std::f64::consts::PI,
            Constante::E => std::f64::consts::E,
        }
    }
}
