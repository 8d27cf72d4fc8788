// src/app/ondulation.rs
//
// Ondulation au clic (retour visuel)
// ----------------------------------
// Un cercle part du point de clic, grandit jusqu’au plus grand côté du bouton
// en DUREE secondes en s’estompant, puis disparaît (purge).

use eframe::egui;

/// Durée de l’animation (s).
pub const DUREE: f64 = 0.5;

/// Alpha de départ (blanc translucide).
const ALPHA_MAX: f32 = 0.25;

#[derive(Clone, Debug)]
pub struct Ondulation {
    pub centre: egui::Pos2,
    /// Bouton d’origine : l’ondulation est découpée à ce rectangle.
    pub cadre: egui::Rect,
    pub debut: f64,
}

impl Ondulation {
    pub fn new(centre: egui::Pos2, cadre: egui::Rect, debut: f64) -> Self {
        Self {
            centre,
            cadre,
            debut,
        }
    }

    /// Avancement 0..1, ou None si terminée (ou pas encore commencée).
    pub fn progression(&self, maintenant: f64) -> Option<f32> {
        let p = (maintenant - self.debut) / DUREE;
        if (0.0..1.0).contains(&p) {
            Some(p as f32)
        } else {
            None
        }
    }

    /// (rayon, alpha) à l’instant donné.
    pub fn aspect(&self, maintenant: f64) -> Option<(f32, f32)> {
        let p = self.progression(maintenant)?;
        let taille = self.cadre.width().max(self.cadre.height());
        Some((taille * p, ALPHA_MAX * (1.0 - p)))
    }
}

/// Retire les ondulations terminées.
pub fn purger(ondulations: &mut Vec<Ondulation>, maintenant: f64) {
    ondulations.retain(|o| maintenant - o.debut < DUREE);
}

pub fn peindre(painter: &egui::Painter, ondulations: &[Ondulation], maintenant: f64) {
    for o in ondulations {
        if let Some((rayon, alpha)) = o.aspect(maintenant) {
            let a = (alpha * 255.0) as u8;
            painter
                .with_clip_rect(o.cadre)
                .circle_filled(o.centre, rayon, egui::Color32::from_white_alpha(a));
        }
    }
}
