// src/noyau/format.rs

use super::valeur::Valeur;

/* ------------------------ Réels ------------------------ */

/// Rendu d'un réel : point décimal toujours visible pour une valeur entière
/// (2.0, pas 2), sinon le décimal le plus court de Display.
/// Non finis : NaN, inf, -inf.
fn format_reel(x: f64) -> String {
    if x.is_nan() {
        return "NaN".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 {
            "inf".to_string()
        } else {
            "-inf".to_string()
        };
    }
    if x == x.trunc() {
        // valeur entière : on force une décimale (quotient réel lisible)
        return format!("{x:.1}");
    }
    format!("{x}")
}

/* ------------------------ Valeur ------------------------ */

/// Rendu d'une Valeur pour les lignes de sortie.
/// - Entier(15) -> "15"
/// - Reel(2.0)  -> "2.0"
/// - Reel(0.5)  -> "0.5"
pub fn format_valeur(v: &Valeur) -> String {
    match v {
        Valeur::Entier(n) => format!("{n}"),
        Valeur::Reel(x) => format_reel(*x),
    }
}
