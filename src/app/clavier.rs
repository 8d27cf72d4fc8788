// src/app/clavier.rs
//
// Clavier -> commandes du noyau
// -----------------------------
// - Caractères (chiffres, ".", + - * /, "=") : via Event::Text
//   (respecte la disposition du clavier, pavé numérique compris)
// - Enter / Backspace / Escape : via Event::Key (pas de texte associé)
//
// Appliqué globalement chaque frame : la calculatrice n’a pas de champ texte.

use eframe::egui;

use crate::noyau::{Commande, Operation};

pub fn commande_pour_caractere(c: char) -> Option<Commande> {
    match c {
        '0'..='9' | '.' => Some(Commande::AjouterChiffre(c)),
        '+' => Some(Commande::ChoisirOperation(Operation::Ajouter)),
        '-' => Some(Commande::ChoisirOperation(Operation::Soustraire)),
        '*' => Some(Commande::ChoisirOperation(Operation::Multiplier)),
        '/' => Some(Commande::ChoisirOperation(Operation::Diviser)),
        '=' => Some(Commande::Evaluer),
        _ => None,
    }
}

pub fn commande_pour_touche(touche: egui::Key) -> Option<Commande> {
    match touche {
        egui::Key::Enter => Some(Commande::Evaluer),
        egui::Key::Backspace => Some(Commande::SupprimerChiffre),
        egui::Key::Escape => Some(Commande::Effacer),
        _ => None,
    }
}

/// Commandes de la frame, dans l’ordre des événements.
pub fn commandes_clavier(evenements: &[egui::Event]) -> Vec<Commande> {
    let mut out = Vec::new();
    for ev in evenements {
        match ev {
            egui::Event::Text(texte) => {
                out.extend(texte.chars().filter_map(commande_pour_caractere));
            }
            egui::Event::Key {
                key, pressed: true, ..
            } => {
                out.extend(commande_pour_touche(*key));
            }
            _ => {}
        }
    }
    out
}
