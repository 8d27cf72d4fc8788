//! src/config.rs
//!
//! Configuration (fichier TOML optionnel).
//!
//! Contrats :
//! - Fichier absent => valeurs par défaut (pas une erreur).
//! - Fichier illisible / TOML invalide => `ErreurConfig` ; l’appelant journalise
//!   et démarre quand même avec les défauts.
//! - Champs manquants => défaut champ par champ (`#[serde(default)]`).

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Nom du dossier sous le répertoire de config utilisateur.
pub const DOSSIER_APP: &str = "calculatrice-precision";
pub const FICHIER_CONFIG: &str = "config.toml";

#[derive(Debug, Error)]
pub enum ErreurConfig {
    #[error("lecture de {chemin} impossible: {source}")]
    Lecture {
        chemin: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("config invalide ({chemin}): {source}")]
    Syntaxe {
        chemin: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Fenetre {
    pub largeur: f32,
    pub hauteur: f32,
}

impl Default for Fenetre {
    fn default() -> Self {
        Self {
            largeur: 380.0,
            hauteur: 620.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Effets {
    /// Fond animé (grille + orbes).
    pub fond_anime: bool,
    /// Ondulation au clic sur les boutons.
    pub ondulations: bool,
}

impl Default for Effets {
    fn default() -> Self {
        Self {
            fond_anime: true,
            ondulations: true,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub fenetre: Fenetre,
    pub effets: Effets,
}

impl Config {
    /// Charge `chemin` ; absent => défauts.
    pub fn charger(chemin: &Path) -> Result<Self, ErreurConfig> {
        let texte = match std::fs::read_to_string(chemin) {
            Ok(t) => t,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(chemin = %chemin.display(), "pas de fichier de config, défauts");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ErreurConfig::Lecture {
                    chemin: chemin.to_path_buf(),
                    source,
                })
            }
        };

        Self::depuis_toml(&texte).map_err(|source| ErreurConfig::Syntaxe {
            chemin: chemin.to_path_buf(),
            source,
        })
    }

    pub fn depuis_toml(texte: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(texte)
    }

    /// Chemin par défaut : <config_dir>/calculatrice-precision/config.toml
    #[cfg(not(target_arch = "wasm32"))]
    pub fn chemin_par_defaut() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(DOSSIER_APP).join(FICHIER_CONFIG))
    }
}
