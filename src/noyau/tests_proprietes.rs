//! Tests de propriétés (campagne) : lois algébriques + erreurs + promotion.
//!
//! But : vérifier les lois sur une grille mixte entiers/réels, sans harnais
//! externe.
//! - commutativité (addition, multiplication)
//! - antisymétrie de la soustraction : a−b = −(b−a)
//! - aller-retour : diviser(multiplier(a,b), b) ≈ a (tolérance flottante)
//! - diviseur nul => ArgumentInvalide, pour TOUT dividende de la grille
//!
//! Note : la grille reste modeste (pas de bornes i64) ; les bascules de
//! dépassement ont leurs propres tests dans valeur.rs.

use num_traits::Zero;

use super::erreur::ErreurCalcul;
use super::ops::{additionner, diviser, multiplier, soustraire, MSG_DIVISION_PAR_ZERO};
use super::valeur::Valeur;

const TOLERANCE: f64 = 1e-9;

/// Grille mixte : entiers et réels, signes variés, zéro inclus.
fn grille() -> Vec<Valeur> {
    vec![
        Valeur::Entier(0),
        Valeur::Entier(1),
        Valeur::Entier(-1),
        Valeur::Entier(5),
        Valeur::Entier(10),
        Valeur::Entier(-7),
        Valeur::Entier(1000),
        Valeur::Reel(0.0),
        Valeur::Reel(0.5),
        Valeur::Reel(-2.25),
        Valeur::Reel(3.0),
        Valeur::Reel(123.456),
    ]
}

fn assert_proche(obtenu: f64, attendu: f64, contexte: &str) {
    let ecart = (obtenu - attendu).abs();
    // tolérance relative pour les grandeurs > 1
    let borne = TOLERANCE * attendu.abs().max(1.0);
    assert!(
        ecart <= borne,
        "{contexte}: obtenu {obtenu}, attendu {attendu} (écart {ecart})"
    );
}

/* ------------------------ Lois algébriques ------------------------ */

#[test]
fn prop_addition_commutative() {
    for a in grille() {
        for b in grille() {
            assert_eq!(
                additionner(a, b),
                additionner(b, a),
                "addition non commutative pour {a:?}, {b:?}"
            );
        }
    }
}

#[test]
fn prop_multiplication_commutative() {
    for a in grille() {
        for b in grille() {
            assert_eq!(
                multiplier(a, b),
                multiplier(b, a),
                "multiplication non commutative pour {a:?}, {b:?}"
            );
        }
    }
}

#[test]
fn prop_soustraction_antisymetrique() {
    for a in grille() {
        for b in grille() {
            assert_eq!(
                soustraire(a, b),
                -soustraire(b, a),
                "antisymétrie violée pour {a:?}, {b:?}"
            );
        }
    }
}

/* ------------------------ Aller-retour division ------------------------ */

#[test]
fn prop_aller_retour_division() {
    for a in grille() {
        for b in grille() {
            if b.is_zero() {
                continue;
            }
            let quotient = diviser(multiplier(a, b), b)
                .unwrap_or_else(|e| panic!("diviser({a:?}*{b:?}, {b:?}) erreur: {e}"));
            assert_proche(
                quotient.en_reel(),
                a.en_reel(),
                &format!("aller-retour a={a:?}, b={b:?}"),
            );
        }
    }
}

/* ------------------------ Diviseur nul ------------------------ */

#[test]
fn prop_diviseur_nul_toujours_refuse() {
    for a in grille() {
        for zero in [Valeur::Entier(0), Valeur::Reel(0.0)] {
            let err = diviser(a, zero)
                .expect_err(&format!("diviser({a:?}, {zero:?}) aurait dû échouer"));
            assert_eq!(
                err,
                ErreurCalcul::ArgumentInvalide(MSG_DIVISION_PAR_ZERO.to_string())
            );
        }
    }
}

/* ------------------------ Promotion ------------------------ */

#[test]
fn prop_promotion_division() {
    // le quotient est TOUJOURS réel, même entre entiers qui tombent juste
    for a in grille() {
        for b in grille() {
            if b.is_zero() {
                continue;
            }
            assert!(
                matches!(diviser(a, b).unwrap(), Valeur::Reel(_)),
                "quotient non réel pour {a:?}, {b:?}"
            );
        }
    }
}

#[test]
fn prop_promotion_reel_contamine() {
    // dès qu'un opérande est réel, le résultat l'est aussi
    for a in grille() {
        let r = Valeur::Reel(0.5);
        assert!(matches!(additionner(a, r), Valeur::Reel(_)));
        assert!(matches!(soustraire(r, a), Valeur::Reel(_)));
        assert!(matches!(multiplier(a, r), Valeur::Reel(_)));
    }
}
