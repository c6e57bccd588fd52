//! Noyau arithmétique (quatre opérations)
//!
//! Organisation interne :
//! - valeur.rs  : Valeur (Entier/Reel) + promotion + égalité croisée
//! - format.rs  : affichage (“15”, “2.0”, “0.5”…)
//! - erreur.rs  : ErreurCalcul (ArgumentInvalide)
//! - ops.rs     : additionner / soustraire / multiplier / diviser + Operation

pub mod erreur;
pub mod format;
pub mod ops;
pub mod valeur;

#[cfg(test)]
mod tests_proprietes;

// API publique minimale
pub use erreur::ErreurCalcul;
pub use ops::{additionner, diviser, multiplier, soustraire, Operation};
pub use valeur::Valeur;
