// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Vue “mince” : chaque bouton envoie UNE commande au noyau, rien d’autre
// - Écran : précédente + opération en haut, courante en gros (police réduite si long)
// - Pavé 4 colonnes, AC et = en double largeur
//
// Note :
// - Après un clic, on rend le focus (surrender_focus) : sinon Enter
//   re-cliquerait le bouton focus EN PLUS d’évaluer (double déclenchement).

use eframe::egui;

use super::etat::{taille_affichage, AppCalc};
use super::ondulation::{self, Ondulation};
use super::fond;
use crate::noyau::{Commande, Operation};

/// Dimensions du pavé.
const LARGEUR_TOUCHE: f32 = 72.0;
const HAUTEUR_TOUCHE: f32 = 60.0;
const ESPACE: f32 = 8.0;
const COLONNES: f32 = 4.0;
const LARGEUR_PAVE: f32 = COLONNES * LARGEUR_TOUCHE + (COLONNES - 1.0) * ESPACE;
const LARGEUR_DOUBLE: f32 = 2.0 * LARGEUR_TOUCHE + ESPACE;

const TEXTE_TITRE: &str = "PRECISION CALCULATOR";
const TEXTE_AIDE: &str = "Keyboard supported · Esc to clear";

#[derive(Clone, Copy, Debug)]
enum Genre {
    Chiffre,
    Operation,
    Action,
    Egal,
}

impl Genre {
    fn fond(self) -> egui::Color32 {
        match self {
            Genre::Chiffre => egui::Color32::from_rgba_unmultiplied(255, 255, 255, 18),
            Genre::Operation => egui::Color32::from_rgba_unmultiplied(51, 128, 255, 70),
            Genre::Action => egui::Color32::from_rgba_unmultiplied(153, 26, 230, 60),
            Genre::Egal => egui::Color32::from_rgb(51, 102, 255),
        }
    }
}

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        let maintenant = ui.input(|i| i.time);
        let cadre = ui.max_rect();

        if self.effets.fond_anime {
            fond::peindre(ui.painter(), cadre, maintenant);
            ui.ctx().request_repaint();
        } else {
            fond::peindre_uni(ui.painter(), cadre);
        }

        ondulation::purger(&mut self.ondulations, maintenant);

        ui.spacing_mut().item_spacing = egui::vec2(ESPACE, ESPACE);
        let marge = ((ui.available_width() - LARGEUR_PAVE) / 2.0).max(0.0);
        let marge_haut = ((ui.available_height() - 560.0) / 2.0).max(12.0);

        ui.add_space(marge_haut);

        ui.vertical_centered(|ui| {
            ui.label(
                egui::RichText::new(TEXTE_TITRE)
                    .size(12.0)
                    .strong()
                    .color(egui::Color32::from_rgb(120, 150, 255)),
            );
        });
        ui.add_space(6.0);

        self.ui_ecran(ui, marge);
        ui.add_space(4.0);
        self.ui_pave(ui, marge, maintenant);

        ui.add_space(10.0);
        ui.vertical_centered(|ui| {
            ui.label(
                egui::RichText::new(TEXTE_AIDE)
                    .size(11.0)
                    .color(egui::Color32::from_gray(130)),
            );
        });

        // Par-dessus les boutons
        ondulation::peindre(ui.painter(), &self.ondulations, maintenant);
        if !self.ondulations.is_empty() {
            ui.ctx().request_repaint();
        }
    }

    fn ui_ecran(&self, ui: &mut egui::Ui, marge: f32) {
        let precedent = self.texte_precedent();
        let courant = self.texte_courant();
        let taille = taille_affichage(&courant);

        ui.horizontal(|ui| {
            ui.add_space(marge);
            egui::Frame::new()
                .fill(egui::Color32::from_black_alpha(120))
                .corner_radius(egui::CornerRadius::same(12))
                .inner_margin(egui::Margin::same(12))
                .show(ui, |ui| {
                    // largeur intérieure = largeur du pavé - marges du cadre
                    ui.set_width(LARGEUR_PAVE - 24.0);
                    ui.set_min_height(96.0);
                    ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
                        ui.label(
                            egui::RichText::new(precedent)
                                .size(18.0)
                                .color(egui::Color32::from_gray(160)),
                        );
                        ui.label(
                            egui::RichText::new(courant)
                                .size(taille)
                                .color(egui::Color32::WHITE),
                        );
                    });
                });
        });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui, marge: f32, maintenant: f64) {
        use Commande::*;
        use Operation::*;

        self.rangee(ui, marge, maintenant, |app, ui, t| {
            app.touche(ui, t, "AC", LARGEUR_DOUBLE, Genre::Action, Effacer);
            app.touche(ui, t, "DEL", LARGEUR_TOUCHE, Genre::Action, SupprimerChiffre);
            app.touche_op(ui, t, Diviser);
        });

        for (chiffres, op) in [("789", Multiplier), ("456", Soustraire), ("123", Ajouter)] {
            self.rangee(ui, marge, maintenant, |app, ui, t| {
                for c in chiffres.chars() {
                    app.touche_chiffre(ui, t, c);
                }
                app.touche_op(ui, t, op);
            });
        }

        self.rangee(ui, marge, maintenant, |app, ui, t| {
            app.touche_chiffre(ui, t, '.');
            app.touche_chiffre(ui, t, '0');
            app.touche(ui, t, "=", LARGEUR_DOUBLE, Genre::Egal, Evaluer);
        });
    }

    fn rangee(
        &mut self,
        ui: &mut egui::Ui,
        marge: f32,
        maintenant: f64,
        contenu: impl FnOnce(&mut Self, &mut egui::Ui, f64),
    ) {
        ui.horizontal(|ui| {
            ui.add_space(marge);
            contenu(self, ui, maintenant);
        });
    }

    fn touche_chiffre(&mut self, ui: &mut egui::Ui, maintenant: f64, c: char) {
        let mut buf = [0u8; 4];
        let label: &str = c.encode_utf8(&mut buf);
        self.touche(
            ui,
            maintenant,
            label,
            LARGEUR_TOUCHE,
            Genre::Chiffre,
            Commande::AjouterChiffre(c),
        );
    }

    fn touche_op(&mut self, ui: &mut egui::Ui, maintenant: f64, op: Operation) {
        self.touche(
            ui,
            maintenant,
            op.symbole(),
            LARGEUR_TOUCHE,
            Genre::Operation,
            Commande::ChoisirOperation(op),
        );
    }

    fn touche(
        &mut self,
        ui: &mut egui::Ui,
        maintenant: f64,
        label: &str,
        largeur: f32,
        genre: Genre,
        commande: Commande,
    ) {
        let bouton = egui::Button::new(
            egui::RichText::new(label)
                .size(22.0)
                .color(egui::Color32::WHITE),
        )
        .fill(genre.fond())
        .corner_radius(egui::CornerRadius::same(10));

        let resp = ui.add_sized([largeur, HAUTEUR_TOUCHE], bouton);
        if !resp.clicked() {
            return;
        }

        resp.surrender_focus();

        let origine = resp.interact_pointer_pos().unwrap_or(resp.rect.center());
        self.ajouter_ondulation(Ondulation::new(origine, resp.rect, maintenant));
        self.envoyer(commande);
    }
}
