//! Noyau — les quatre opérations (API publique)
//!
//! additionner / soustraire / multiplier : pures, jamais d'erreur.
//! diviser : quotient réel (jamais de troncature entière), refuse le
//! diviseur nul (ArgumentInvalide).
//!
//! `Operation` donne aux quatre la même surface (nom affiché + appliquer),
//! dans l'ordre canonique du déroulé de la démo.

use num_traits::Zero;

use super::erreur::ErreurCalcul;
use super::valeur::Valeur;

/// Message exact porté par l'erreur de division par zéro.
pub const MSG_DIVISION_PAR_ZERO: &str = "Cannot divide by zero!";

/// Somme (promotion entier/réel standard).
pub fn additionner(a: Valeur, b: Valeur) -> Valeur {
    a + b
}

/// Différence.
pub fn soustraire(a: Valeur, b: Valeur) -> Valeur {
    a - b
}

/// Produit.
pub fn multiplier(a: Valeur, b: Valeur) -> Valeur {
    a * b
}

/// Quotient réel.
/// Diviseur nul (Entier(0) comme Reel(0.0)) => ArgumentInvalide.
pub fn diviser(a: Valeur, b: Valeur) -> Result<Valeur, ErreurCalcul> {
    if b.is_zero() {
        return Err(ErreurCalcul::ArgumentInvalide(MSG_DIVISION_PAR_ZERO.into()));
    }
    Ok(Valeur::Reel(a.en_reel() / b.en_reel()))
}

/* ------------------------ Opération (surface uniforme) ------------------------ */

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    Addition,
    Soustraction,
    Multiplication,
    Division,
}

impl Operation {
    /// Ordre canonique du déroulé.
    pub const TOUTES: [Operation; 4] = [
        Operation::Addition,
        Operation::Soustraction,
        Operation::Multiplication,
        Operation::Division,
    ];

    /// Nom affiché dans les lignes de sortie.
    pub fn nom(self) -> &'static str {
        match self {
            Operation::Addition => "Addition",
            Operation::Soustraction => "Subtraction",
            Operation::Multiplication => "Multiplication",
            Operation::Division => "Division",
        }
    }

    /// Applique l'opération aux deux opérandes.
    /// Seule Division peut échouer ; les trois autres renvoient toujours Ok.
    pub fn appliquer(self, a: Valeur, b: Valeur) -> Result<Valeur, ErreurCalcul> {
        match self {
            Operation::Addition => Ok(additionner(a, b)),
            Operation::Soustraction => Ok(soustraire(a, b)),
            Operation::Multiplication => Ok(multiplier(a, b)),
            Operation::Division => diviser(a, b),
        }
    }
}
