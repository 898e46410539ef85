// src/app.rs
//
// Calculatrice RPN — module App (racine)
// --------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
// - Charger / sauver les réglages (eframe::Storage)

pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

use etat::Reglages;

/// Clé de stockage des réglages.
const CLE_REGLAGES: &str = "calculatrice_rpn/reglages";

impl AppCalc {
    /// Démarrage : réglages relus depuis le stockage eframe s’il y en a.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let reglages: Reglages = cc
            .storage
            .and_then(|s| eframe::get_value(s, CLE_REGLAGES))
            .unwrap_or_default();
        log::debug!("réglages: {reglages:?}");
        Self::avec_reglages(reglages)
    }
}

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.gerer_clavier(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui);
        });
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, CLE_REGLAGES, &self.reglages);
    }
}
