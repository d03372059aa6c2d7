//! src/noyau/controleur.rs
//!
//! Contrôleur d’interaction (sans vue, sans réseau).
//!
//! Rôle : accumuler la saisie dans l’affichage, retenir au plus une opération
//! en attente (premier opérande + opérateur), et décrire les résolutions à
//! faire exécuter par l’évaluateur distant.
//!
//! Contrats :
//! - Aucune évaluation ici (pas d’arithmétique locale, pas de réseau).
//! - Transitions déterministes : (état, touche) -> état [+ requête éventuelle].
//!   Le code appelant exécute la requête puis rapporte l’issue via
//!   `terminer_calcul` ; entre les deux, `en_vol` reste vrai.
//! - Invariant : opérateur présent ssi premier opérande présent.
//! - Garde : tant qu’une résolution est en vol, opérateur et "=" sont ignorés.

use super::operation::{format_nombre, parse_nombre, Operateur};

/// Affichage par défaut / après remise à zéro.
pub const ZERO_CANONIQUE: &str = "0";

/// Marqueur affiché quand la résolution échoue (résultat nul ou panne).
pub const MARQUEUR_ERREUR: &str = "Erreur";

/// Une touche du pavé. La vue ne fait que traduire les clics en `Touche`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Touche {
    Chiffre(char),
    Point,
    Operateur(Operateur),
    Egal,
    Effacer,
}

/// Résolution à faire exécuter par l’évaluateur distant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RequeteCalcul {
    pub operateur: Operateur,
    pub premier: f64,
    pub second: f64,
}

/// Issue d’une résolution, rapportée par le client.
///
/// `Indefini` = le backend a répondu "pas de résultat" (ex: division par
/// zéro). `Panne` = faute transport/serveur. Les deux aboutissent au même
/// marqueur d’erreur à l’écran ; seule la panne est journalisée (client).
#[derive(Clone, Debug, PartialEq)]
pub enum IssueCalcul {
    Valeur(f64),
    Indefini,
    Panne(String),
}

#[derive(Clone, Debug)]
pub struct Etat {
    /// Contenu montré à l’utilisateur. Jamais vide.
    pub affichage: String,

    /// Opération en attente (les deux champs vont ensemble, cf. invariant).
    pub premier_operande: Option<f64>,
    pub operateur: Option<Operateur>,

    /// Opérateur pressé pendant qu’une opération était déjà en attente :
    /// il sera mis en attente à son tour quand la résolution en cours aboutit.
    pub enchainement: Option<Operateur>,

    /// Vrai strictement entre l’émission d’une requête et son issue.
    pub en_vol: bool,
}

impl Default for Etat {
    fn default() -> Self {
        Self {
            affichage: ZERO_CANONIQUE.to_string(),
            premier_operande: None,
            operateur: None,
            enchainement: None,
            en_vol: false,
        }
    }
}

impl Etat {
    /// Point d’entrée unique : applique une touche.
    ///
    /// `Some(requete)` signifie : l’appelant doit lancer la résolution puis
    /// rapporter l’issue via [`terminer_calcul`](Self::terminer_calcul).
    pub fn appuyer(&mut self, touche: Touche) -> Option<RequeteCalcul> {
        match touche {
            Touche::Chiffre(c) => {
                self.saisir(c);
                None
            }
            Touche::Point => {
                self.saisir('.');
                None
            }
            Touche::Operateur(op) => self.saisir_operateur(op),
            Touche::Egal => self.egal(),
            Touche::Effacer => {
                self.effacer();
                None
            }
        }
    }

    /* ------------------------ Saisie chiffres / point ------------------------ */

    /// Chiffre ou point : remplace le zéro canonique (ou le marqueur d’erreur,
    /// pour repartir de zéro après un échec), sinon concatène.
    ///
    /// Pas de garde contre plusieurs points dans un même nombre ("1.2.3") :
    /// saisie permissive, la lecture retombera sur NaN.
    fn saisir(&mut self, jeton: char) {
        if self.affichage == ZERO_CANONIQUE || self.affichage == MARQUEUR_ERREUR {
            self.affichage = jeton.to_string();
        } else {
            self.affichage.push(jeton);
        }
    }

    /* ------------------------ Opérateurs / égal ------------------------ */

    fn saisir_operateur(&mut self, op: Operateur) -> Option<RequeteCalcul> {
        if self.en_vol {
            return None;
        }

        if self.premier_operande.is_none() {
            // Rien en attente : on met l’opération en attente et on repart à zéro.
            self.premier_operande = Some(parse_nombre(&self.affichage));
            self.operateur = Some(op);
            self.affichage = ZERO_CANONIQUE.to_string();
            return None;
        }

        // Une opération attendait déjà : on la résout d’abord, le nouvel
        // opérateur prendra la suite à l’issue (même après un échec, l’opérande
        // mis en attente est alors NaN — voir DESIGN.md).
        self.enchainement = Some(op);
        self.lancer_resolution()
    }

    fn egal(&mut self) -> Option<RequeteCalcul> {
        if self.en_vol {
            return None;
        }
        self.lancer_resolution()
    }

    /// Émet la requête si une opération complète est en attente, sinon no-op.
    fn lancer_resolution(&mut self) -> Option<RequeteCalcul> {
        let premier = self.premier_operande?;
        let operateur = self.operateur?;

        self.en_vol = true;
        Some(RequeteCalcul {
            operateur,
            premier,
            second: parse_nombre(&self.affichage),
        })
    }

    /// Applique l’issue d’une résolution.
    ///
    /// Dans tous les cas : opération en attente effacée, `en_vol` retombe.
    /// Puis, si un opérateur d’enchaînement attendait, il est mis en attente
    /// avec l’affichage courant comme premier opérande.
    pub fn terminer_calcul(&mut self, issue: IssueCalcul) {
        self.en_vol = false;
        self.premier_operande = None;
        self.operateur = None;

        self.affichage = match issue {
            IssueCalcul::Valeur(n) => format_nombre(n),
            IssueCalcul::Indefini | IssueCalcul::Panne(_) => MARQUEUR_ERREUR.to_string(),
        };

        if let Some(op) = self.enchainement.take() {
            self.premier_operande = Some(parse_nombre(&self.affichage));
            self.operateur = Some(op);
            self.affichage = ZERO_CANONIQUE.to_string();
        }
    }

    /* ------------------------ Remise à zéro ------------------------ */

    /// Clear : retour à l’état initial. Ne touche PAS `en_vol` : un appel
    /// déjà parti n’est pas annulable, son issue s’appliquera quand même.
    pub fn effacer(&mut self) {
        self.affichage = ZERO_CANONIQUE.to_string();
        self.premier_operande = None;
        self.operateur = None;
        self.enchainement = None;
    }
}
