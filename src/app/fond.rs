// src/app/fond.rs
//
// Fond animé (décoratif)
// ----------------------
// - base sombre + grille qui défile vers le haut
// - 4 orbes lumineux en orbite (teinte bleu -> violet)
// - géométrie = fonctions pures du temps (testables), peinture séparée

use eframe::egui;

/// Nombre d’orbes.
pub const NB_ORBES: usize = 4;

/// Cases de grille sur la hauteur.
const CASES_GRILLE: f32 = 6.0;

const BASE: egui::Color32 = egui::Color32::from_rgb(8, 8, 15);

/// Centre d’un orbe en coordonnées normalisées (0..1 sur chaque axe).
pub fn centre_orbe(i: usize, t: f64) -> egui::Vec2 {
    let fi = i as f64;
    let x = 0.5 + 0.45 * (t * 0.3 + fi * 1.7).sin();
    let y = 0.5 + 0.35 * (t * 0.25 + fi * 2.3).cos();
    egui::vec2(x as f32, y as f32)
}

/// Teinte d’un orbe : mélange bleu (0.1, 0.4, 1.0) -> violet (0.6, 0.1, 0.9).
pub fn couleur_orbe(i: usize, t: f64) -> [f32; 3] {
    let m = ((i as f64 * 1.3 + t * 0.5).sin() * 0.5 + 0.5) as f32;
    let bleu = [0.1, 0.4, 1.0];
    let violet = [0.6, 0.1, 0.9];
    [
        bleu[0] + (violet[0] - bleu[0]) * m,
        bleu[1] + (violet[1] - bleu[1]) * m,
        bleu[2] + (violet[2] - bleu[2]) * m,
    ]
}

/// Décalage vertical de la grille, en fraction de case (0..1).
pub fn decalage_grille(t: f64) -> f32 {
    (t * 0.15).rem_euclid(1.0) as f32
}

fn rgba(c: [f32; 3], alpha: f32) -> egui::Color32 {
    let canal = |v: f32| (v.clamp(0.0, 1.0) * 255.0) as u8;
    egui::Color32::from_rgba_unmultiplied(
        canal(c[0]),
        canal(c[1]),
        canal(c[2]),
        canal(alpha),
    )
}

/// Fond uni (effets désactivés).
pub fn peindre_uni(painter: &egui::Painter, rect: egui::Rect) {
    painter.rect_filled(rect, 0.0, BASE);
}

/// Peint le fond sur `rect` à l’instant `t` (secondes).
pub fn peindre(painter: &egui::Painter, rect: egui::Rect, t: f64) {
    peindre_uni(painter, rect);

    // Grille
    let pas = rect.height() / CASES_GRILLE;
    if pas > 1.0 {
        let trait_grille = egui::Stroke::new(1.0, rgba([0.2, 0.5, 1.0], 0.07));
        let dy = decalage_grille(t) * pas;

        let mut y = rect.bottom() - dy;
        while y >= rect.top() {
            painter.line_segment(
                [egui::pos2(rect.left(), y), egui::pos2(rect.right(), y)],
                trait_grille,
            );
            y -= pas;
        }

        let mut x = rect.left();
        while x <= rect.right() {
            painter.line_segment(
                [egui::pos2(x, rect.top()), egui::pos2(x, rect.bottom())],
                trait_grille,
            );
            x += pas;
        }
    }

    // Orbes : halo en couches concentriques (alpha décroissant vers l’extérieur)
    let rayon = rect.width().min(rect.height()) * 0.35;
    for i in 0..NB_ORBES {
        let c = centre_orbe(i, t);
        let centre = rect.min + egui::vec2(c.x * rect.width(), c.y * rect.height());
        let teinte = couleur_orbe(i, t);

        for couche in (1..=6).rev() {
            let f = couche as f32 / 6.0;
            painter.circle_filled(centre, rayon * f * f, rgba(teinte, 0.05 * (1.0 - f) + 0.01));
        }
    }

    // Vignette : bord assombri
    let epaisseur = rect.width().min(rect.height()) * 0.08;
    painter.rect_stroke(
        rect.shrink(epaisseur * 0.5),
        0.0,
        egui::Stroke::new(epaisseur, egui::Color32::from_black_alpha(90)),
        egui::StrokeKind::Middle,
    );
}
