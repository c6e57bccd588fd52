// src/demo.rs
//
// Démo arithmétique — le déroulé
// ------------------------------
// Rôle:
// - Appeler les quatre opérations dans l'ordre canonique (Addition,
//   Subtraction, Multiplication, Division) avec les opérandes fixes (10 et 5)
// - Produire une ligne par opération : "<Nom> of <x> and <y>: <résultat>"
// - N'écrire sur stdout QUE ces quatre lignes (les traces vont sur stderr)
//
// Contrats (Loi de Clément, version démo) :
// - Aucune erreur rattrapée ici : un diviseur nul (impossible avec les
//   opérandes fixes) remonte tel quel jusqu'à main() via `?`.
// - Déroulé strictement linéaire, sans état.

use tracing::debug;

use crate::noyau::{ErreurCalcul, Operation, Valeur};

/// Opérandes fixes de la démonstration.
const OPERANDE_X: Valeur = Valeur::Entier(10);
const OPERANDE_Y: Valeur = Valeur::Entier(5);

/// Construit les quatre lignes de sortie, dans l'ordre canonique.
pub fn lignes_demo() -> Result<Vec<String>, ErreurCalcul> {
    lignes_pour(OPERANDE_X, OPERANDE_Y)
}

/// Même déroulé, opérandes libres (un y nul fait échouer Division).
fn lignes_pour(x: Valeur, y: Valeur) -> Result<Vec<String>, ErreurCalcul> {
    let mut lignes = Vec::with_capacity(Operation::TOUTES.len());

    for op in Operation::TOUTES {
        let resultat = op.appliquer(x, y)?;
        debug!(operation = op.nom(), %resultat, "opération évaluée");
        lignes.push(format!("{} of {} and {}: {}", op.nom(), x, y, resultat));
    }

    Ok(lignes)
}

/// Lance la démo : imprime les quatre lignes sur stdout.
pub fn lancer_demo() -> Result<(), ErreurCalcul> {
    for ligne in lignes_demo()? {
        println!("{ligne}");
    }
    Ok(())
}
