// src/main.rs
//
// Calculatrice distante — point d’entrée NATIF + WEB (WASM)
// ---------------------------------------------------------
// - NATIF : eframe::run_native, journalisation flexi_logger (RUST_LOG
//   prioritaire, sinon "info" — les pannes d’appels distants partent en error)
// - WEB   : eframe::WebRunner accroché au <canvas id="the_canvas_id"> de
//   index.html, démarré par wasm_bindgen(start)
//
// Toute la logique vit ailleurs : app.rs (cadre eframe) et noyau/ (contrôleur
// + client distant). Ici, démarrage seulement.

#![cfg_attr(target_arch = "wasm32", allow(unused_imports))]

use eframe::egui;

mod app;
mod noyau;

use app::AppCalc;

/// Titre unique (fenêtre native + onglet web).
const TITRE_APP: &str = "Calculatrice distante";

/* ------------------------ Entrée NATIF (PC) ------------------------ */

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    // Le handle doit rester vivant jusqu’à la fin du process.
    let _journal = installer_journal();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(TITRE_APP)
            .with_inner_size([340.0, 480.0])
            .with_min_inner_size([300.0, 420.0]),
        ..Default::default()
    };

    eframe::run_native(
        TITRE_APP,
        options,
        Box::new(|_cc| Ok(Box::<AppCalc>::default())),
    )
}

/// Journalisation native. Un échec d’initialisation n’empêche pas la
/// calculatrice de tourner : on continue simplement sans journal.
#[cfg(not(target_arch = "wasm32"))]
fn installer_journal() -> Option<flexi_logger::LoggerHandle> {
    flexi_logger::Logger::try_with_env_or_str("info")
        .and_then(|journal| journal.start())
        .ok()
}

/* ------------------------ Entrée WEB (WASM) ------------------------ */

#[cfg(target_arch = "wasm32")]
fn main() {
    // En wasm32, le vrai démarrage est `web::start()` (wasm_bindgen).
}

#[cfg(target_arch = "wasm32")]
mod web {
    use super::{AppCalc, TITRE_APP};

    use wasm_bindgen::JsCast;
    use web_sys::HtmlCanvasElement;

    /// ID du canvas attendu dans index.html.
    const CANVAS_ID: &str = "the_canvas_id";

    /// Démarrage automatique au chargement de la page : titre d’onglet,
    /// récupération du canvas, puis WebRunner dessus.
    #[wasm_bindgen::prelude::wasm_bindgen(start)]
    pub async fn start() -> Result<(), wasm_bindgen::JsValue> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| js_err("window/document indisponibles"))?;

        document.set_title(TITRE_APP);

        let canvas: HtmlCanvasElement = document
            .get_element_by_id(CANVAS_ID)
            .ok_or_else(|| js_err("canvas introuvable (id incorrect dans index.html)"))?
            .dyn_into()
            .map_err(|_| js_err("l’élément trouvé n’est pas un <canvas>"))?;

        eframe::WebRunner::new()
            .start(
                canvas,
                eframe::WebOptions::default(),
                Box::new(|_cc| Ok(Box::<AppCalc>::default())),
            )
            .await
    }

    fn js_err(msg: &str) -> wasm_bindgen::JsValue {
        wasm_bindgen::JsValue::from_str(msg)
    }
}
