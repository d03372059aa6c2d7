// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Pavé fixe 4×4 (7 8 9 / … 0 . = +) + rangée Clear
// - Pendant un vol : opérateurs et "=" inertes + spinner dans l’afficheur
//
// Note :
// - Pas de gestion du clavier physique (assumé : surface tactile/souris
//   seulement).

use eframe::egui;

use crate::noyau::{Operateur, Touche};

use super::etat::AppCalc;

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        // Densité “calc”
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        ui.vertical_centered(|ui| {
            ui.set_max_width(300.0);

            ui.heading("Calculatrice distante");
            ui.add_space(6.0);

            self.ui_affichage(ui);
            ui.add_space(8.0);

            self.ui_pave(ui);
        });
    }

    /// Afficheur : contenu aligné à droite, spinner à gauche pendant un vol.
    fn ui_affichage(&mut self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.set_min_height(2.0 * ui.text_style_height(&egui::TextStyle::Heading));

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(egui::RichText::new(&self.etat.affichage).monospace().size(26.0));
                    if self.etat.en_vol {
                        ui.add(egui::Spinner::new().size(18.0));
                    }
                });
            });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_calculatrice")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton(ui, "7", Touche::Chiffre('7'));
                self.bouton(ui, "8", Touche::Chiffre('8'));
                self.bouton(ui, "9", Touche::Chiffre('9'));
                self.bouton(ui, "/", Touche::Operateur(Operateur::Division));
                ui.end_row();

                self.bouton(ui, "4", Touche::Chiffre('4'));
                self.bouton(ui, "5", Touche::Chiffre('5'));
                self.bouton(ui, "6", Touche::Chiffre('6'));
                self.bouton(ui, "*", Touche::Operateur(Operateur::Multiplication));
                ui.end_row();

                self.bouton(ui, "1", Touche::Chiffre('1'));
                self.bouton(ui, "2", Touche::Chiffre('2'));
                self.bouton(ui, "3", Touche::Chiffre('3'));
                self.bouton(ui, "-", Touche::Operateur(Operateur::Soustraction));
                ui.end_row();

                self.bouton(ui, "0", Touche::Chiffre('0'));
                self.bouton(ui, ".", Touche::Point);
                self.bouton(ui, "=", Touche::Egal);
                self.bouton(ui, "+", Touche::Operateur(Operateur::Addition));
                ui.end_row();
            });

        ui.add_space(4.0);

        // Clear sur toute la largeur. Sans effet sur un appel déjà parti
        // (pas d’annulation), son issue s’appliquera quand même.
        let resp = ui.add_sized(
            [ui.available_width(), 36.0],
            egui::Button::new("Clear"),
        );
        if resp.clicked() {
            let ctx = ui.ctx().clone();
            self.appuyer(&ctx, Touche::Effacer);
        }
    }

    fn bouton(&mut self, ui: &mut egui::Ui, label: &str, touche: Touche) {
        // Garde en vol (doublée dans le noyau) : opérateurs et "=" inertes.
        let actif = !self.etat.en_vol
            || matches!(touche, Touche::Chiffre(_) | Touche::Point | Touche::Effacer);

        let resp = ui.add_enabled(
            actif,
            egui::Button::new(label).min_size(egui::vec2(56.0, 40.0)),
        );
        if resp.clicked() {
            let ctx = ui.ctx().clone();
            self.appuyer(&ctx, touche);
        }
    }
}
