// src/noyau/erreur.rs
//
// Erreur unique du noyau : argument invalide (précondition violée).
// Politique : jamais rattrapée, jamais "réparée" — elle remonte telle quelle
// jusqu'à main() via `?`, et termine le programme.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErreurCalcul {
    /// Un opérande viole la précondition de l'opération
    /// (seule occurrence actuelle : diviseur nul).
    #[error("{0}")]
    ArgumentInvalide(String),
}
