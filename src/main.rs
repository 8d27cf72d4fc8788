// src/main.rs
//
// Calculatrice Précision — point d’entrée NATIF + WEB (WASM)
// ---------------------------------------------------------
// But:
// - NATIF (Linux/Windows/macOS) : clap + tracing + config, puis eframe::run_native
// - WEB  (wasm32)              : eframe::WebRunner + WebOptions + <canvas>
//
// Côté WEB (WASM) : index.html doit contenir un canvas :
//   <canvas id="the_canvas_id"></canvas>

#![cfg_attr(target_arch = "wasm32", allow(unused_imports))]

use eframe::egui;

mod app;
mod config;
mod noyau;

use app::AppCalc;
use config::Config;

/// Titre unique (natif + web).
const TITRE_APP: &str = "Calculatrice Précision";

/* ------------------------ Entrée NATIF (PC) ------------------------ */

#[cfg(not(target_arch = "wasm32"))]
mod natif {
    use std::path::PathBuf;

    use clap::Parser;
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    use super::Config;

    #[derive(Parser, Debug)]
    #[command(version, about = "Calculatrice à fond animé (chaînage gauche → droite)")]
    pub struct Args {
        /// Fichier de config (défaut : <config>/calculatrice-precision/config.toml)
        #[arg(long)]
        pub config: Option<PathBuf>,

        /// Désactive le fond animé
        #[arg(long)]
        pub sans_fond: bool,

        /// Désactive les ondulations au clic
        #[arg(long)]
        pub sans_ondulations: bool,
    }

    /// RUST_LOG sinon "info" ; sortie sur stderr.
    pub fn init_tracing() {
        let filtre = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr))
            .with(filtre)
            .init();
    }

    /// Config fichier + surcharges ligne de commande.
    /// Une config cassée ne bloque jamais le démarrage (défauts + warn).
    pub fn config_effective(args: &Args) -> Config {
        let chemin = args.config.clone().or_else(Config::chemin_par_defaut);

        let mut cfg = match &chemin {
            Some(p) => Config::charger(p).unwrap_or_else(|e| {
                tracing::warn!("{e} ; valeurs par défaut");
                Config::default()
            }),
            None => Config::default(),
        };

        if args.sans_fond {
            cfg.effets.fond_anime = false;
        }
        if args.sans_ondulations {
            cfg.effets.ondulations = false;
        }

        tracing::info!(
            chemin = ?chemin,
            fond_anime = cfg.effets.fond_anime,
            ondulations = cfg.effets.ondulations,
            "configuration"
        );
        cfg
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    use clap::Parser;

    let args = natif::Args::parse();
    natif::init_tracing();
    let cfg = natif::config_effective(&args);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(TITRE_APP)
            .with_inner_size([cfg.fenetre.largeur, cfg.fenetre.hauteur])
            .with_min_inner_size([340.0, 560.0]),
        ..Default::default()
    };

    let effets = cfg.effets;
    eframe::run_native(
        TITRE_APP,
        options,
        Box::new(move |_cc| Ok(Box::new(AppCalc::new(effets)))),
    )
}

/* ------------------------ Entrée WEB (WASM) ------------------------ */

#[cfg(target_arch = "wasm32")]
fn main() {
    // En wasm32, le démarrage réel passe par `start()` (wasm_bindgen).
}

#[cfg(target_arch = "wasm32")]
mod web {
    use super::{AppCalc, Config, TITRE_APP};

    use wasm_bindgen::JsCast;
    use web_sys::{window, HtmlCanvasElement};

    /// ID du canvas attendu dans index.html.
    const CANVAS_ID: &str = "the_canvas_id";

    /// Point d’entrée automatique au chargement de la page.
    /// - Fixe le titre de l’onglet (document.title)
    /// - Récupère le <canvas id="the_canvas_id">
    /// - Démarre eframe WebRunner dessus (config par défaut : pas de fichier côté web)
    #[wasm_bindgen::prelude::wasm_bindgen(start)]
    pub async fn start() -> Result<(), wasm_bindgen::JsValue> {
        let w = window().ok_or_else(|| js_err("window() indisponible"))?;
        let d = w
            .document()
            .ok_or_else(|| js_err("document() indisponible"))?;

        d.set_title(TITRE_APP);

        let el = d
            .get_element_by_id(CANVAS_ID)
            .ok_or_else(|| js_err("canvas introuvable (id incorrect dans index.html)"))?;

        let canvas: HtmlCanvasElement = el
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| js_err("l’élément trouvé n’est pas un <canvas>"))?;

        let effets = Config::default().effets;
        let web_options = eframe::WebOptions::default();

        eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(move |_cc| Ok(Box::new(AppCalc::new(effets)))),
            )
            .await
    }

    fn js_err(msg: &str) -> wasm_bindgen::JsValue {
        wasm_bindgen::JsValue::from_str(msg)
    }
}
