// src/noyau/format.rs

use std::str::FromStr;

use num_bigint::BigInt;
use num_traits::Signed;

/* ------------------------ Regroupement des milliers ------------------------ */

/// Groupe les chiffres par 3 (séparateur US ",").
fn grouper_chiffres(chiffres: &str) -> String {
    let n = chiffres.len();
    let mut out = String::with_capacity(n + n / 3);
    for (i, c) in chiffres.chars().enumerate() {
        if i > 0 && (n - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Partie entière “jolie” :
/// - "" -> "0" (saisie ".5")
/// - zéros de tête retirés ("007" -> "7")
/// - signe conservé ("-1234" -> "-1,234")
/// - Infinity -> ∞ ; autre texte non entier (NaN, 1e+21) : tel quel
fn format_entier(entier: &str) -> String {
    if entier.is_empty() {
        return "0".to_string();
    }

    match entier {
        "Infinity" => return "∞".to_string(),
        "-Infinity" => return "-∞".to_string(),
        _ => {}
    }

    // BigInt : longueur quelconque, normalise les zéros de tête.
    // Le signe vient du texte : "-0.5" garde son "-" même si la partie entière vaut 0.
    match BigInt::from_str(entier) {
        Ok(n) if entier.bytes().all(|b| b.is_ascii_digit() || b == b'-') => {
            let groupe = grouper_chiffres(&n.abs().to_string());
            if entier.starts_with('-') {
                format!("-{groupe}")
            } else {
                groupe
            }
        }
        _ => entier.to_string(),
    }
}

/* ------------------------ Affichage d’une opérande ------------------------ */

/// Affichage d’une opérande (courante ou précédente).
///
/// La partie décimale n’est JAMAIS regroupée, et un point final sans
/// chiffre ("12.") reste visible : c’est la saisie en cours.
pub fn format_operande(operande: Option<&str>) -> String {
    let Some(s) = operande else {
        return String::new();
    };

    match s.split_once('.') {
        Some((entier, decimales)) => format!("{}.{decimales}", format_entier(entier)),
        None => format_entier(s),
    }
}
