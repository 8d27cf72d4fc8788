//! Noyau — évaluation numérique
//!
//! précédente ∘ courante -> f64 -> arrondi 12 chiffres significatifs -> texte court
//!
//! Le texte rendu suit la mise en page de `Number.prototype.toString` (JS) :
//! décimal “plat” pour des exposants raisonnables, notation e±x sinon,
//! `Infinity` / `-Infinity` / `NaN` en toutes lettres.
//! Ce texte doit pouvoir être relu par `evaluer` (chaînage).

use super::machine::Operation;

/// Précision du résultat (chiffres significatifs).
pub const CHIFFRES_SIGNIFICATIFS: usize = 12;

/// Évalue `precedente <op> courante`.
///
/// Total : opérande absente / illisible ou opération absente => "" (sentinelle vide).
pub fn evaluer(
    precedente: Option<&str>,
    courante: Option<&str>,
    operation: Option<Operation>,
) -> String {
    let (Some(a), Some(b), Some(op)) = (
        precedente.and_then(lire_nombre),
        courante.and_then(lire_nombre),
        operation,
    ) else {
        return String::new();
    };

    let brut = op.appliquer(a, b);
    texte_nombre(arrondi_significatif(brut, CHIFFRES_SIGNIFICATIFS))
}

/// Lecture d’une opérande (grammaire flottante Rust : "5.", "-3", "1e+21", "Infinity"…).
/// "NaN" se lit mais ne vaut rien : traité comme illisible.
fn lire_nombre(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|v| !v.is_nan())
}

/// Décimales demandées pour obtenir le développement EXACT d’un f64
/// (767 chiffres significatifs au plus).
const DECIMALES_EXACTES: usize = 800;

/// Arrondi à `chiffres` chiffres significatifs (équivalent toPrecision + relecture).
///
/// Égalité parfaite (…5000… exact) : on arrondit en s’éloignant de zéro,
/// pas au pair comme `{:.Ne}`.
pub fn arrondi_significatif(x: f64, chiffres: usize) -> f64 {
    if !x.is_finite() || x == 0.0 || chiffres == 0 {
        return x;
    }

    let exact = format!("{:.*e}", DECIMALES_EXACTES, x.abs());
    let Some((mantisse, exposant)) = exact.split_once('e') else {
        return x;
    };
    let Ok(mut exposant) = exposant.parse::<i32>() else {
        return x;
    };

    let tous: Vec<u8> = mantisse.bytes().filter(|b| *b != b'.').collect();
    let (garde, rejet) = tous.split_at(chiffres.min(tous.len()));
    let mut garde = garde.to_vec();

    // développement exact : le 1er chiffre rejeté suffit (>= 5 => on monte)
    if rejet.first().is_some_and(|&d| d >= b'5') {
        let mut i = garde.len();
        loop {
            if i == 0 {
                // 99…9 -> 100…0
                garde.insert(0, b'1');
                garde.pop();
                exposant += 1;
                break;
            }
            i -= 1;
            if garde[i] == b'9' {
                garde[i] = b'0';
            } else {
                garde[i] += 1;
                break;
            }
        }
    }

    let texte: String = garde.iter().map(|&b| b as char).collect();
    let (tete, reste) = texte.split_at(1);
    let signe = if x < 0.0 { "-" } else { "" };
    format!("{signe}{tete}.{reste}e{exposant}")
        .parse()
        .unwrap_or(x)
}

/// Rendu texte le plus court (mise en page JS).
pub fn texte_nombre(x: f64) -> String {
    if x.is_nan() {
        return "NaN".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if x == 0.0 {
        // -0 compris
        return "0".to_string();
    }

    // {:e} sans précision = plus courte écriture qui se relit à l’identique
    let sci = format!("{:e}", x.abs());
    let (mantisse, exposant) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };
    let chiffres: String = mantisse.chars().filter(|c| *c != '.').collect();

    let mut out = String::with_capacity(chiffres.len() + 8);
    if x < 0.0 {
        out.push('-');
    }
    out.push_str(&mise_en_page(&chiffres, exposant + 1));
    out
}

/// `chiffres` : d1 d2 … dk (sans zéros de tête), valeur = 0.d1…dk × 10^n
fn mise_en_page(chiffres: &str, n: i32) -> String {
    let k = chiffres.len() as i32;

    if k <= n && n <= 21 {
        // entier : on complète par des zéros
        let mut s = chiffres.to_string();
        s.extend(std::iter::repeat('0').take((n - k) as usize));
        return s;
    }

    if 0 < n && n <= 21 {
        let (ent, frac) = chiffres.split_at(n as usize);
        return format!("{ent}.{frac}");
    }

    if -6 < n && n <= 0 {
        let zeros = "0".repeat((-n) as usize);
        return format!("0.{zeros}{chiffres}");
    }

    // notation exponentielle
    let e = n - 1;
    let signe = if e >= 0 { '+' } else { '-' };
    let (tete, reste) = chiffres.split_at(1);
    if reste.is_empty() {
        format!("{tete}e{signe}{}", e.abs())
    } else {
        format!("{tete}.{reste}e{signe}{}", e.abs())
    }
}
