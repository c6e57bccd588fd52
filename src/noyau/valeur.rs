// src/noyau/valeur.rs
//
// Valeur numérique (entier ou réel).
// - Entier : i64 (résultat exact tant que les deux opérandes sont entiers)
// - Reel   : f64 (promotion dès qu'un opérande est réel)
//
// IMPORTANT (SAFE):
// - Add/Sub/Mul sur deux Entier restent Entier ; en cas de dépassement i64,
//   on bascule en Reel (jamais de wrap, jamais de panic).
// - La division ne vit PAS ici (elle est faillible) : voir ops.rs.
// - L'égalité compare la valeur numérique, pas la variante :
//   Entier(2) == Reel(2.0).

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use num_traits::Zero;

use super::format::format_valeur;

#[derive(Clone, Copy, Debug)]
pub enum Valeur {
    Entier(i64),
    Reel(f64),
}

impl Valeur {
    /// Lecture réelle (promotion f64), quelle que soit la variante.
    pub fn en_reel(self) -> f64 {
        match self {
            Valeur::Entier(n) => n as f64,
            Valeur::Reel(x) => x,
        }
    }
}

/* ------------------------ Conversions ------------------------ */

impl From<i64> for Valeur {
    fn from(n: i64) -> Self {
        Valeur::Entier(n)
    }
}

impl From<f64> for Valeur {
    fn from(x: f64) -> Self {
        Valeur::Reel(x)
    }
}

/* ------------------------ Égalité (valeur, pas variante) ------------------------ */

impl PartialEq for Valeur {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Valeur::Entier(a), Valeur::Entier(b)) => a == b,
            // comparaison croisée : via f64 (suffisant ici, opérandes modestes)
            _ => self.en_reel() == other.en_reel(),
        }
    }
}

/* ------------------------ Arithmétique (promotion) ------------------------ */

impl Add for Valeur {
    type Output = Valeur;

    fn add(self, rhs: Valeur) -> Valeur {
        match (self, rhs) {
            (Valeur::Entier(a), Valeur::Entier(b)) => match a.checked_add(b) {
                Some(s) => Valeur::Entier(s),
                None => Valeur::Reel(a as f64 + b as f64),
            },
            _ => Valeur::Reel(self.en_reel() + rhs.en_reel()),
        }
    }
}

impl Sub for Valeur {
    type Output = Valeur;

    fn sub(self, rhs: Valeur) -> Valeur {
        match (self, rhs) {
            (Valeur::Entier(a), Valeur::Entier(b)) => match a.checked_sub(b) {
                Some(d) => Valeur::Entier(d),
                None => Valeur::Reel(a as f64 - b as f64),
            },
            _ => Valeur::Reel(self.en_reel() - rhs.en_reel()),
        }
    }
}

impl Mul for Valeur {
    type Output = Valeur;

    fn mul(self, rhs: Valeur) -> Valeur {
        match (self, rhs) {
            (Valeur::Entier(a), Valeur::Entier(b)) => match a.checked_mul(b) {
                Some(p) => Valeur::Entier(p),
                None => Valeur::Reel(a as f64 * b as f64),
            },
            _ => Valeur::Reel(self.en_reel() * rhs.en_reel()),
        }
    }
}

impl Neg for Valeur {
    type Output = Valeur;

    fn neg(self) -> Valeur {
        match self {
            // garde-fou : -i64::MIN déborde
            Valeur::Entier(n) => match n.checked_neg() {
                Some(m) => Valeur::Entier(m),
                None => Valeur::Reel(-(n as f64)),
            },
            Valeur::Reel(x) => Valeur::Reel(-x),
        }
    }
}

/* ------------------------ Zéro (précondition de la division) ------------------------ */

impl Zero for Valeur {
    fn zero() -> Self {
        Valeur::Entier(0)
    }

    /// Vrai pour Entier(0) comme pour Reel(0.0).
    fn is_zero(&self) -> bool {
        match self {
            Valeur::Entier(n) => *n == 0,
            Valeur::Reel(x) => *x == 0.0,
        }
    }
}

/* ------------------------ Affichage ------------------------ */

impl fmt::Display for Valeur {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_valeur(self))
    }
}
