//! Tests de séquences : propriétés du contrôleur sur des suites de touches.
//!
//! But : couvrir les scénarios complets (saisie, mise en attente, résolution,
//! enchaînement, effacement) puis marteler le contrôleur avec des séquences
//! aléatoires déterministes, sans réseau ni rendu.
//! - RNG déterministe (seed fixe)
//! - budget temps global
//! - invariants clés : affichage jamais vide, opérateur présent ssi premier
//!   opérande présent, `en_vol` vrai seulement entre requête et issue.

use std::time::{Duration, Instant};

use super::controleur::{Etat, IssueCalcul, RequeteCalcul, Touche, MARQUEUR_ERREUR, ZERO_CANONIQUE};
use super::operation::Operateur;

/* ------------------------ RNG déterministe minimal ------------------------ */

struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Helpers séquences ------------------------ */

/// Tape une suite de chiffres / points ; la saisie n’émet jamais de requête.
fn taper(etat: &mut Etat, s: &str) {
    for c in s.chars() {
        let touche = if c == '.' {
            Touche::Point
        } else {
            Touche::Chiffre(c)
        };
        assert!(etat.appuyer(touche).is_none());
    }
}

fn verifier_invariants(etat: &Etat) {
    assert!(!etat.affichage.is_empty(), "affichage jamais vide");
    assert_eq!(
        etat.premier_operande.is_some(),
        etat.operateur.is_some(),
        "opérateur présent ssi premier opérande présent"
    );
}

/* ------------------------ Scénarios complets ------------------------ */

#[test]
fn accumulation_pure_concatenation() {
    // Depuis le zéro canonique, toute suite de chiffres donne la
    // concaténation littérale (le premier chiffre remplace le zéro).
    for suite in ["5", "50", "123456", "9.75"] {
        let mut etat = Etat::default();
        taper(&mut etat, suite);
        assert_eq!(etat.affichage, suite, "suite={suite:?}");
    }

    // Cas particulier : "0" tapé en premier ne change rien.
    let mut etat = Etat::default();
    taper(&mut etat, "0");
    assert_eq!(etat.affichage, ZERO_CANONIQUE);
}

#[test]
fn scenario_complet_addition() {
    let mut etat = Etat::default();

    taper(&mut etat, "5");
    assert!(etat.appuyer(Touche::Operateur(Operateur::Addition)).is_none());
    assert_eq!(etat.premier_operande, Some(5.0));
    assert_eq!(etat.affichage, ZERO_CANONIQUE);

    taper(&mut etat, "3");
    let req = etat.appuyer(Touche::Egal).expect("requête attendue");
    assert_eq!(
        req,
        RequeteCalcul {
            operateur: Operateur::Addition,
            premier: 5.0,
            second: 3.0
        }
    );
    assert!(etat.en_vol);

    etat.terminer_calcul(IssueCalcul::Valeur(8.0));
    assert_eq!(etat.affichage, "8");
    assert!(!etat.en_vol);
    verifier_invariants(&etat);
}

#[test]
fn scenario_division_par_zero() {
    let mut etat = Etat::default();
    taper(&mut etat, "5");
    etat.appuyer(Touche::Operateur(Operateur::Division));
    taper(&mut etat, "0");
    etat.appuyer(Touche::Egal).expect("requête attendue");

    etat.terminer_calcul(IssueCalcul::Indefini);
    assert_eq!(etat.affichage, MARQUEUR_ERREUR);
    assert_eq!(etat.premier_operande, None);
    verifier_invariants(&etat);
}

#[test]
fn scenario_enchaine_5_plus_3_fois_2() {
    let mut etat = Etat::default();
    taper(&mut etat, "5");
    etat.appuyer(Touche::Operateur(Operateur::Addition));
    taper(&mut etat, "3");

    let req = etat
        .appuyer(Touche::Operateur(Operateur::Multiplication))
        .expect("la résolution de l’addition part d’abord");
    assert_eq!((req.premier, req.second), (5.0, 3.0));

    etat.terminer_calcul(IssueCalcul::Valeur(8.0));
    assert_eq!(etat.premier_operande, Some(8.0));
    assert_eq!(etat.operateur, Some(Operateur::Multiplication));

    taper(&mut etat, "2");
    let req = etat.appuyer(Touche::Egal).expect("requête attendue");
    assert_eq!((req.premier, req.second), (8.0, 2.0));
    etat.terminer_calcul(IssueCalcul::Valeur(16.0));
    assert_eq!(etat.affichage, "16");
    verifier_invariants(&etat);
}

#[test]
fn resultat_puis_saisie_concatene() {
    // Après un résultat, un chiffre s’ajoute à la suite du résultat affiché
    // (seul le zéro canonique — ou le marqueur d’erreur — est remplacé).
    let mut etat = Etat::default();
    taper(&mut etat, "5");
    etat.appuyer(Touche::Operateur(Operateur::Addition));
    taper(&mut etat, "3");
    etat.appuyer(Touche::Egal).expect("requête attendue");
    etat.terminer_calcul(IssueCalcul::Valeur(8.0));

    taper(&mut etat, "5");
    assert_eq!(etat.affichage, "85");
}

/* ------------------------ Fuzz déterministe ------------------------ */

fn touche_aleatoire(rng: &mut Rng) -> Touche {
    match rng.pick(10) {
        0..=4 => {
            let c = char::from(b'0' + rng.pick(10) as u8);
            Touche::Chiffre(c)
        }
        5 => Touche::Point,
        6 => Touche::Operateur(match rng.pick(4) {
            0 => Operateur::Addition,
            1 => Operateur::Soustraction,
            2 => Operateur::Multiplication,
            _ => Operateur::Division,
        }),
        7 => Touche::Egal,
        8 => Touche::Effacer,
        _ => Touche::Egal,
    }
}

fn issue_aleatoire(rng: &mut Rng) -> IssueCalcul {
    match rng.pick(8) {
        0 => IssueCalcul::Indefini,
        1 => IssueCalcul::Panne("fuzz: panne simulée".into()),
        k => IssueCalcul::Valeur(f64::from(k) * 1.5 - 4.0),
    }
}

#[test]
fn fuzz_sequences_invariants() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);

    // Même seed => mêmes séquences => mêmes états (déterminisme)
    let mut rng = Rng::new(0xCA1C_u64);

    let mut requetes_vues = 0usize;

    for _ in 0..200 {
        budget(t0, max);

        let mut etat = Etat::default();
        for _ in 0..40 {
            let avant_en_vol = etat.en_vol;
            let requete = etat.appuyer(touche_aleatoire(&mut rng));

            if let Some(_req) = requete {
                assert!(!avant_en_vol, "aucune requête ne doit partir en plein vol");
                assert!(etat.en_vol, "en_vol doit lever à l’émission");

                // Résolution immédiate (jamais deux vols croisés ici).
                etat.terminer_calcul(issue_aleatoire(&mut rng));
                assert!(!etat.en_vol, "en_vol doit retomber à l’issue");
                requetes_vues += 1;
            }

            verifier_invariants(&etat);
        }
    }

    // Le fuzz doit réellement traverser des résolutions.
    assert!(requetes_vues > 50, "trop peu de requêtes: {requetes_vues}");
}

#[test]
fn fuzz_effacer_ramene_toujours_a_l_initial() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    let mut rng = Rng::new(0xBADC0DE_u64);

    for _ in 0..150 {
        budget(t0, max);

        let mut etat = Etat::default();
        for _ in 0..12 {
            if let Some(_req) = etat.appuyer(touche_aleatoire(&mut rng)) {
                etat.terminer_calcul(issue_aleatoire(&mut rng));
            }
        }

        etat.appuyer(Touche::Effacer);
        assert_eq!(etat.affichage, ZERO_CANONIQUE);
        assert_eq!(etat.premier_operande, None);
        assert_eq!(etat.operateur, None);
        assert_eq!(etat.enchainement, None);
        assert!(!etat.en_vol, "pas de vol en cours : tout a été résolu");
    }
}
