// src/noyau/operation.rs

/// Les quatre opérations binaires du pavé.
///
/// Le symbole sert deux fois :
/// - étiquette du bouton dans la vue,
/// - chaîne `operation` envoyée telle quelle au backend (contrat calculate).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Addition,
    Soustraction,
    Multiplication,
    Division,
}

impl Operateur {
    pub fn symbole(self) -> char {
        match self {
            Operateur::Addition => '+',
            Operateur::Soustraction => '-',
            Operateur::Multiplication => '*',
            Operateur::Division => '/',
        }
    }

    pub fn depuis_symbole(c: char) -> Option<Self> {
        match c {
            '+' => Some(Operateur::Addition),
            '-' => Some(Operateur::Soustraction),
            '*' => Some(Operateur::Multiplication),
            '/' => Some(Operateur::Division),
            _ => None,
        }
    }
}

/* ------------------------ Nombres (lecture / affichage) ------------------------ */

/// Lit l’affichage comme un f64.
///
/// Pas de garde sur les saisies difformes (".", "1.2.3", marqueur d’erreur…) :
/// on retombe sur NaN et on laisse la suite du pipeline le transporter.
/// C’est volontairement permissif, voir DESIGN.md.
pub fn parse_nombre(s: &str) -> f64 {
    s.trim().parse::<f64>().unwrap_or(f64::NAN)
}

/// Forme décimale d’un résultat.
///
/// Les valeurs entières s’affichent sans partie fractionnaire ("8", pas
/// "8.0"). Au-delà de la plage sûre en i64, on garde l’affichage f64 par
/// défaut.
pub fn format_nombre(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{n}")
    }
}
