//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : porter l’état du noyau (EtatCalc) + l’état purement visuel
//! (effets activés, ondulations en cours) et offrir UN point d’entrée :
//! `envoyer(commande)`.
//!
//! Contrats :
//! - Aucune arithmétique ici : tout passe par `noyau::transition`.
//! - Une commande => exactement une transition.
//! - Journalisation ici (le noyau reste pur).

use crate::config::Effets;
use crate::noyau::{format_operande, transition, Commande, EtatCalc};

use super::ondulation::Ondulation;

/// Seuils de longueur (caractères affichés) pour réduire la police.
const SEUIL_MOYEN: usize = 6;
const SEUIL_PETIT: usize = 9;

/// Tailles de police (points) : grand / moyen / petit.
pub const TAILLE_GRANDE: f32 = 44.8;
pub const TAILLE_MOYENNE: f32 = 35.2;
pub const TAILLE_PETITE: f32 = 28.8;

#[derive(Clone, Debug, Default)]
pub struct AppCalc {
    // --- noyau ---
    pub etat: EtatCalc,

    // --- présentation ---
    pub effets: Effets,
    pub ondulations: Vec<Ondulation>,
}

impl AppCalc {
    pub fn new(effets: Effets) -> Self {
        Self {
            etat: EtatCalc::default(),
            effets,
            ondulations: Vec::new(),
        }
    }

    /// Seul chemin vers le noyau (clic ou clavier).
    pub fn envoyer(&mut self, commande: Commande) {
        tracing::debug!(?commande, "commande");

        let avant = std::mem::take(&mut self.etat);
        self.etat = transition(avant, commande);

        let sans_resultat = self.etat.ecrasement && self.etat.operande_courante.is_none();
        if matches!(commande, Commande::Evaluer) && sans_resultat {
            tracing::debug!("évaluation sans résultat (opérande illisible)");
        }
        tracing::trace!(etat = ?self.etat, "nouvel état");
    }

    /// Ligne principale : opérande courante formatée, "0" si vide.
    pub fn texte_courant(&self) -> String {
        let s = format_operande(self.etat.operande_courante.as_deref());
        if s.is_empty() {
            "0".to_string()
        } else {
            s
        }
    }

    /// Ligne du haut : opérande précédente + symbole d’opération.
    pub fn texte_precedent(&self) -> String {
        let prec = format_operande(self.etat.operande_precedente.as_deref());
        match self.etat.operation {
            Some(op) => format!("{prec} {}", op.symbole()),
            None => prec,
        }
    }

    pub fn ajouter_ondulation(&mut self, o: Ondulation) {
        if self.effets.ondulations {
            self.ondulations.push(o);
        }
    }
}

/// Taille de police selon la longueur affichée (heuristique “tient dans l’écran”).
pub fn taille_affichage(texte: &str) -> f32 {
    let n = texte.chars().count();
    if n > SEUIL_PETIT {
        TAILLE_PETITE
    } else if n > SEUIL_MOYEN {
        TAILLE_MOYENNE
    } else {
        TAILLE_GRANDE
    }
}
