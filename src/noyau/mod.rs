//! Noyau — contrôleur d’interaction + client distant
//!
//! Organisation interne :
//! - controleur.rs : état + transitions (touches, résolutions, issues)
//! - operation.rs  : opérateurs binaires, lecture/affichage des nombres
//! - client.rs     : appel `calculate` au backend (POST JSON par callback)
//!
//! Toute l’arithmétique est déléguée au backend : le noyau ne calcule rien.

pub mod client;
pub mod controleur;
pub mod operation;

#[cfg(test)]
mod tests_sequences;

// API publique minimale
pub use controleur::{Etat, IssueCalcul, RequeteCalcul, Touche, MARQUEUR_ERREUR, ZERO_CANONIQUE};
pub use operation::Operateur;
