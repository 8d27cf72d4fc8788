// src/app.rs
//
// Calculatrice Précision — module App (racine)
// -------------------------------------------
// Rôle:
// - Déclarer les sous-modules (état, vue, clavier, fond, ondulation)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
//
// Important:
// - Clavier géré ICI, globalement (pas de champ texte : rien à “focus”).
// - Une touche => une commande => une transition, dans l’ordre des événements.

pub mod clavier;
pub mod etat;
pub mod fond;
pub mod ondulation;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let commandes = ctx.input(|i| clavier::commandes_clavier(&i.events));
        for c in commandes {
            self.envoyer(c);
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                self.ui(ui); // méthode publique (dans vue.rs)
            });
    }
}
