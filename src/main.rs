// src/main.rs
//
// Démo arithmétique — point d'entrée
// ----------------------------------
// But:
// - Installer les traces développeur (stderr uniquement, pilotées par RUST_LOG)
// - Lancer le déroulé (demo::lancer_demo) et laisser toute erreur remonter
//
// IMPORTANT (structure projet):
// - Aucune logique ici : le déroulé vit dans src/demo.rs, le calcul dans src/noyau/
// - stdout est réservé aux quatre lignes de la démo

mod demo;
mod noyau;

use noyau::ErreurCalcul;

/* ------------------------ Traces (stderr) ------------------------ */

// Coupées par défaut ; RUST_LOG=debug les active.
// Écriture sur stderr pour garder stdout propre (contrat : quatre lignes).
fn installer_traces() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}

/* ------------------------ Entrée ------------------------ */

fn main() -> Result<(), ErreurCalcul> {
    installer_traces();
    demo::lancer_demo()
}
