//! Noyau de la calculatrice (pur, sans E/S)
//!
//! Organisation interne :
//! - machine.rs : état + commandes + transition (union taguée fermée)
//! - eval.rs    : évaluation f64, arrondi 12 chiffres significatifs, rendu texte
//! - format.rs  : affichage d’une opérande (milliers groupés, décimales intactes)

pub mod eval;
pub mod format;
pub mod machine;

#[cfg(test)]
mod tests_proprietes;

// API publique minimale
pub use format::format_operande;
pub use machine::{transition, Commande, EtatCalc, Operation};
