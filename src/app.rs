// src/app.rs
//
// Calculatrice distante — module App (racine)
// -------------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
//
// Important:
// - Les issues des appels distants sont relevées ICI, en tête de frame,
//   avant tout rendu : l’état vu par la vue est stable pour toute la frame.
// - Pas de raccourcis clavier (assumé).

pub mod etat;
pub mod vue;

pub use etat::AppCalc;

use eframe::egui;

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Issues des résolutions distantes d’abord, rendu ensuite.
        self.relever_issues();

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui); // vue.rs
        });
    }
}
