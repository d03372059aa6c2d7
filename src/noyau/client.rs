//! src/noyau/client.rs
//!
//! Client de l’évaluateur distant.
//!
//! Contrat externe : `calculate(operation, first, second) -> number | null`,
//! rendu ici en POST JSON. `null` signale un échec de domaine (ex: division
//! par zéro) sans lever d’erreur ; toute faute transport/serveur est ramenée
//! à `IssueCalcul::Panne` et traitée pareil à l’écran.
//!
//! `ehttp::fetch` est par callback : le même code sert en natif et en wasm,
//! et le fil UI ne bloque jamais. Pas de timeout, pas de reprise, pas
//! d’annulation (assumé, voir DESIGN.md).

use serde::{Deserialize, Serialize};

use super::controleur::{IssueCalcul, RequeteCalcul};

/// Point d’accès par défaut (pas de surface de configuration au-delà).
pub const URL_DEFAUT: &str = "http://127.0.0.1:8000/calculate";

#[derive(Serialize)]
struct CorpsRequete {
    operation: String,
    first: f64,
    second: f64,
}

#[derive(Deserialize)]
struct CorpsReponse {
    result: Option<f64>,
}

/// Lance la résolution. `sur_issue` est appelé exactement une fois, depuis
/// le fil de `ehttp` — à l’appelant de rapatrier l’issue vers le fil UI.
pub fn lancer_calcul(
    url: &str,
    requete: &RequeteCalcul,
    sur_issue: impl FnOnce(IssueCalcul) + Send + 'static,
) {
    let corps = CorpsRequete {
        operation: requete.operateur.symbole().to_string(),
        first: requete.premier,
        second: requete.second,
    };

    // NB: les f64 non finis (NaN d’une saisie difforme) partent en `null`
    // JSON ; le comportement aval est celui du backend, pas le nôtre.
    let octets = match serde_json::to_vec(&corps) {
        Ok(o) => o,
        Err(e) => {
            sur_issue(IssueCalcul::Panne(format!("sérialisation: {e}")));
            return;
        }
    };

    log::debug!(
        "calcul distant: {} {} {} -> {url}",
        requete.premier,
        requete.operateur.symbole(),
        requete.second
    );

    let mut requete_http = ehttp::Request::post(url, octets);
    requete_http
        .headers
        .insert("Content-Type", "application/json");

    ehttp::fetch(requete_http, move |resultat| {
        let issue = match resultat {
            Ok(reponse) if reponse.ok => depouiller_corps(&reponse.bytes),
            Ok(reponse) => {
                IssueCalcul::Panne(format!("HTTP {} {}", reponse.status, reponse.status_text))
            }
            Err(e) => IssueCalcul::Panne(e),
        };

        match &issue {
            IssueCalcul::Panne(msg) => log::error!("calcul distant en panne: {msg}"),
            issue => log::debug!("calcul distant terminé: {issue:?}"),
        }

        sur_issue(issue);
    });
}

/// Dépouille le corps de réponse : nombre, `null`, ou corps illisible.
fn depouiller_corps(octets: &[u8]) -> IssueCalcul {
    match serde_json::from_slice::<CorpsReponse>(octets) {
        Ok(CorpsReponse { result: Some(n) }) => IssueCalcul::Valeur(n),
        Ok(CorpsReponse { result: None }) => IssueCalcul::Indefini,
        Err(e) => IssueCalcul::Panne(format!("réponse illisible: {e}")),
    }
}
