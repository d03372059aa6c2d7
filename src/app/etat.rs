//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : porter l’état du contrôleur, câbler les résolutions vers le client
//! distant et rapatrier leurs issues sur le fil UI.
//!
//! Contrats :
//! - Le noyau décide, ici on ne fait que transporter (requête sortante,
//!   issue entrante via canal).
//! - Une issue arrive toujours par `relever_issues`, jamais en plein rendu :
//!   les mutations d’état restent atomiques frame par frame.

use std::sync::mpsc::{channel, Receiver, Sender};

use eframe::egui;

use crate::noyau::client::{lancer_calcul, URL_DEFAUT};
use crate::noyau::{Etat, IssueCalcul, Touche};

pub struct AppCalc {
    pub etat: Etat,

    /// Point d’accès du backend (compilé, pas de surface de configuration).
    url_backend: String,

    // Canal de retour des résolutions (callback ehttp -> fil UI).
    emetteur: Sender<IssueCalcul>,
    recepteur: Receiver<IssueCalcul>,
}

impl Default for AppCalc {
    fn default() -> Self {
        let (emetteur, recepteur) = channel();
        Self {
            etat: Etat::default(),
            url_backend: URL_DEFAUT.to_string(),
            emetteur,
            recepteur,
        }
    }
}

impl AppCalc {
    /// Applique une touche. Si le contrôleur émet une requête, on la lance
    /// tout de suite ; l’issue reviendra par le canal, avec un repaint pour
    /// ne pas attendre la prochaine frame.
    pub fn appuyer(&mut self, ctx: &egui::Context, touche: Touche) {
        if let Some(requete) = self.etat.appuyer(touche) {
            let emetteur = self.emetteur.clone();
            let ctx = ctx.clone();
            lancer_calcul(&self.url_backend, &requete, move |issue| {
                // Fenêtre fermée => envoi perdu, rien d’autre à faire.
                let _ = emetteur.send(issue);
                ctx.request_repaint();
            });
        }
    }

    /// Dépouille les issues arrivées depuis la dernière frame.
    pub fn relever_issues(&mut self) {
        while let Ok(issue) = self.recepteur.try_recv() {
            self.etat.terminer_calcul(issue);
        }
    }
}
