// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Clavier : chiffres/opérateurs tapés, Enter évalue, Backspace efface, Escape vide
// - Tactile : gros boutons, pavé en grille
// - × ÷ − sur les boutons, ASCII dans l’entrée

use eframe::egui;

use calculatrice_rpn::noyau::format::DECIMALES_MAX;

use super::etat::{AppCalc, Touche};

/// Pavé : (étiquette, touche). Une ligne = une rangée de la grille.
const PAVE: [[(&str, Touche); 5]; 7] = [
    [
        ("C", Touche::Effacer),
        ("DEL", Touche::Retour),
        ("(", Touche::Inserer("(")),
        (")", Touche::Inserer(")")),
        ("÷", Touche::Inserer("/")),
    ],
    [
        ("sin", Touche::Inserer("sin(")),
        ("cos", Touche::Inserer("cos(")),
        ("tan", Touche::Inserer("tan(")),
        ("sqrt", Touche::Inserer("sqrt(")),
        ("×", Touche::Inserer("*")),
    ],
    [
        ("7", Touche::Inserer("7")),
        ("8", Touche::Inserer("8")),
        ("9", Touche::Inserer("9")),
        ("^", Touche::Inserer("^")),
        ("−", Touche::Inserer("-")),
    ],
    [
        ("4", Touche::Inserer("4")),
        ("5", Touche::Inserer("5")),
        ("6", Touche::Inserer("6")),
        ("%", Touche::Inserer("%")),
        ("+", Touche::Inserer("+")),
    ],
    [
        ("1", Touche::Inserer("1")),
        ("2", Touche::Inserer("2")),
        ("3", Touche::Inserer("3")),
        ("ln", Touche::Inserer("ln(")),
        ("log", Touche::Inserer("log(")),
    ],
    [
        ("0", Touche::Inserer("0")),
        (".", Touche::Inserer(".")),
        ("π", Touche::Inserer("pi")),
        ("e", Touche::Inserer("e")),
        ("ans", Touche::Ans),
    ],
    [
        ("pow", Touche::Inserer("pow(")),
        (",", Touche::Inserer(",")),
        ("", Touche::Inserer("")),
        ("", Touche::Inserer("")),
        ("=", Touche::Egal),
    ],
];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        // Densité “calc”
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Calculatrice RPN");
                ui.add_space(6.0);

                self.ui_ecran(ui);

                ui.add_space(8.0);
                self.ui_pave(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_reglages(ui);
                self.ui_demarche(ui);
            });
    }

    /// Clavier global (pas de champ texte : l’écran est en lecture seule).
    pub fn gerer_clavier(&mut self, ctx: &egui::Context) {
        // le champ "Décimales" a le focus : les chiffres sont pour lui
        if ctx.wants_keyboard_input() {
            return;
        }

        let evenements = ctx.input(|i| i.events.clone());
        for ev in evenements {
            match ev {
                egui::Event::Text(texte) => {
                    for c in texte.chars() {
                        self.touche_caractere(c);
                    }
                }
                egui::Event::Key {
                    key, pressed: true, ..
                } => match key {
                    egui::Key::Enter => self.appuyer(Touche::Egal),
                    egui::Key::Backspace => self.appuyer(Touche::Retour),
                    egui::Key::Escape => self.appuyer(Touche::Effacer),
                    _ => {}
                },
                _ => {}
            }
        }
    }

    fn ui_ecran(&mut self, ui: &mut egui::Ui) {
        let couleur = if self.en_erreur {
            ui.visuals().error_fg_color
        } else {
            ui.visuals().strong_text_color()
        };

        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(self.affichage())
                            .monospace()
                            .size(28.0)
                            .color(couleur),
                    );
                });
            });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_rpn")
            .num_columns(5)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for rangee in PAVE {
                    for (label, touche) in rangee {
                        self.bouton(ui, label, touche);
                    }
                    ui.end_row();
                }
            });
    }

    fn bouton(&mut self, ui: &mut egui::Ui, label: &str, touche: Touche) {
        if label.is_empty() {
            ui.label("");
            return;
        }
        let resp = ui.add_sized([64.0, 40.0], egui::Button::new(label));
        if resp.clicked() {
            self.appuyer(touche);
        }
    }

    fn ui_reglages(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("Décimales :");
            let mut d = self.reglages.decimales as u32;
            let resp = ui.add(
                egui::DragValue::new(&mut d)
                    .speed(1)
                    .range(0..=DECIMALES_MAX as u32),
            );
            if resp.changed() {
                self.set_decimales(d as usize);
            }

            ui.separator();
            ui.checkbox(&mut self.reglages.demarche_visible, "Démarche");
        });
    }

    fn ui_demarche(&mut self, ui: &mut egui::Ui) {
        if !self.reglages.demarche_visible {
            return;
        }

        ui.add_space(6.0);
        if self.demarche.erreur.is_empty() {
            Self::champ_demarche(ui, "Jetons", "demarche_jetons", &self.demarche.jetons);
            Self::champ_demarche(ui, "RPN", "demarche_rpn", &self.demarche.rpn);
        } else {
            ui.label("Erreur :");
            ui.colored_label(ui.visuals().error_fg_color, &self.demarche.erreur);
        }
    }

    fn champ_demarche(ui: &mut egui::Ui, titre: &str, id: &str, contenu: &str) {
        ui.add_space(4.0);
        ui.label(format!("{titre} :"));
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.monospace(contenu);
                });
            });
    }
}
