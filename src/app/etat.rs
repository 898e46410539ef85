//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : contenir l’état de la calculatrice (entrée, session "ans", démarche, réglages)
//! et offrir les actions du pavé (C, DEL, ans, =, insertion) sans logique d’affichage.
//!
//! Contrats :
//! - L’évaluation passe par la session du noyau (registre "ans" = contexte explicite).
//! - Actions déterministes, testables sans egui.
//! - Après une erreur, la touche suivante repart d’une entrée vide.

use serde::{Deserialize, Serialize};

use calculatrice_rpn::noyau::format::{DECIMALES_DEFAUT, DECIMALES_MAX};
use calculatrice_rpn::noyau::{Session, MARQUEUR_ERREUR};

/// Réglages persistés entre deux lancements (eframe::Storage).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Reglages {
    pub decimales: usize,
    pub demarche_visible: bool,
}

impl Default for Reglages {
    fn default() -> Self {
        Self {
            decimales: DECIMALES_DEFAUT,
            demarche_visible: false,
        }
    }
}

#[derive(Clone, Default, Debug)]
pub struct Demarche {
    pub jetons: String,
    pub rpn: String,
    pub erreur: String,
}

/// Touches du pavé (boutons + clavier).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Touche {
    Inserer(&'static str),
    Effacer,
    Retour,
    Ans,
    Egal,
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub entree: String,

    // --- noyau ---
    pub session: Session,

    // --- sorties ---
    pub en_erreur: bool,
    pub demarche: Demarche,

    // --- paramètres ---
    pub reglages: Reglages,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self::avec_reglages(Reglages::default())
    }
}

impl AppCalc {
    pub fn avec_reglages(mut reglages: Reglages) -> Self {
        reglages.decimales = reglages.decimales.min(DECIMALES_MAX);
        Self {
            entree: String::new(),
            session: Session::avec_decimales(reglages.decimales),
            en_erreur: false,
            demarche: Demarche::default(),
            reglages,
        }
    }

    /// Texte de l’écran ("0" si l’entrée est vide).
    pub fn affichage(&self) -> &str {
        if self.entree.is_empty() {
            "0"
        } else {
            &self.entree
        }
    }

    /* ------------------------ Actions “boutons” ------------------------ */

    pub fn appuyer(&mut self, touche: Touche) {
        match touche {
            Touche::Inserer(v) => self.inserer(v),
            Touche::Effacer => self.clear_entree(),
            Touche::Retour => self.backspace_entree(),
            Touche::Ans => self.inserer_ans(),
            Touche::Egal => self.evaluer(),
        }
    }

    /// C : effacer l’entrée.
    pub fn clear_entree(&mut self) {
        self.entree.clear();
        self.en_erreur = false;
    }

    /// DEL : retire le dernier caractère (l’écran "Error" part d’un coup).
    pub fn backspace_entree(&mut self) {
        if self.en_erreur {
            self.clear_entree();
            return;
        }
        self.entree.pop();
    }

    fn sortir_erreur(&mut self) {
        if self.en_erreur {
            self.clear_entree();
        }
    }

    /// Ajoute un symbole, avec la garde du point décimal :
    /// - '.' ignoré si le nombre courant en a déjà un
    /// - '0' ajouté devant si l’entrée est vide ou finit par un opérateur / une parenthèse
    pub fn inserer(&mut self, valeur: &str) {
        self.sortir_erreur();

        if valeur == "." {
            let nombre_courant = self
                .entree
                .rsplit(|c: char| !(c.is_ascii_digit() || c == '.'))
                .next()
                .unwrap_or("");
            if nombre_courant.contains('.') {
                return;
            }
            let apres_operateur = self
                .entree
                .ends_with(['+', '-', '*', '/', '%', '^', '(', ')']);
            if self.entree.is_empty() || apres_operateur {
                self.entree.push('0');
            }
        }

        self.entree.push_str(valeur);
    }

    /// ans : ajoute le dernier résultat ("0" s’il n’y en a pas).
    pub fn inserer_ans(&mut self) {
        self.sortir_erreur();
        let ans = self.session.ans().to_string();
        self.entree.push_str(&ans);
    }

    /// = : évalue l’entrée, la remplace par le résultat (ou le marqueur).
    pub fn evaluer(&mut self) {
        if self.entree.is_empty() || self.en_erreur {
            return;
        }

        match self.session.evaluer_detail(&self.entree) {
            Ok(e) => {
                log::info!("{} = {}", self.entree, e.texte);
                self.demarche = Demarche {
                    jetons: e.jetons,
                    rpn: e.rpn,
                    erreur: String::new(),
                };
                self.entree = e.texte;
            }
            Err(err) => {
                log::info!("{} : {err}", self.entree);
                self.demarche = Demarche {
                    erreur: err.to_string(),
                    ..Demarche::default()
                };
                self.entree = MARQUEUR_ERREUR.to_string();
                self.en_erreur = true;
            }
        }
    }

    /// Clavier : un caractère tapé.
    ///
    /// Raccourcis : p -> pi, s -> sin(, c -> cos(, t -> tan(, l -> ln(
    pub fn touche_caractere(&mut self, c: char) {
        let touche = match c {
            '0' => Touche::Inserer("0"),
            '1' => Touche::Inserer("1"),
            '2' => Touche::Inserer("2"),
            '3' => Touche::Inserer("3"),
            '4' => Touche::Inserer("4"),
            '5' => Touche::Inserer("5"),
            '6' => Touche::Inserer("6"),
            '7' => Touche::Inserer("7"),
            '8' => Touche::Inserer("8"),
            '9' => Touche::Inserer("9"),
            '.' => Touche::Inserer("."),
            '+' => Touche::Inserer("+"),
            '-' => Touche::Inserer("-"),
            '*' => Touche::Inserer("*"),
            '/' => Touche::Inserer("/"),
            '^' => Touche::Inserer("^"),
            '%' => Touche::Inserer("%"),
            '(' => Touche::Inserer("("),
            ')' => Touche::Inserer(")"),
            '=' => Touche::Egal,
            'p' => Touche::Inserer("pi"),
            's' => Touche::Inserer("sin("),
            'c' => Touche::Inserer("cos("),
            't' => Touche::Inserer("tan("),
            'l' => Touche::Inserer("ln("),
            _ => return,
        };
        self.appuyer(touche);
    }

    /// Garde-fou : limite les décimales, et garde la session alignée.
    pub fn set_decimales(&mut self, decimales: usize) {
        self.session.set_decimales(decimales);
        self.reglages.decimales = self.session.decimales();
    }
}
