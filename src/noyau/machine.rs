//! Noyau — machine à états de la calculatrice
//!
//! `transition(etat, commande) -> etat` : fonction pure et totale.
//! - Aucune E/S, aucune mutation hors de la valeur rendue.
//! - Cas “sans effet” : on rend l’état tel quel (jamais d’erreur).
//! - Chaînage gauche → droite, SANS priorité : 2 + 3 × 4 = (2+3)×4 = 20.

use super::eval::evaluer;

/// Longueur max d’une opérande en cours de saisie.
pub const LONGUEUR_MAX_SAISIE: usize = 12;

/// Les quatre opérateurs binaires (ensemble fermé).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    Ajouter,
    Soustraire,
    Multiplier,
    Diviser,
}

impl Operation {
    #[cfg(test)]
    pub const TOUTES: [Operation; 4] = [
        Operation::Ajouter,
        Operation::Soustraire,
        Operation::Multiplier,
        Operation::Diviser,
    ];

    /// Symbole affiché (bouton + ligne “précédente”).
    pub fn symbole(self) -> &'static str {
        match self {
            Operation::Ajouter => "+",
            Operation::Soustraire => "−",
            Operation::Multiplier => "×",
            Operation::Diviser => "÷",
        }
    }

    pub fn appliquer(self, a: f64, b: f64) -> f64 {
        match self {
            Operation::Ajouter => a + b,
            Operation::Soustraire => a - b,
            Operation::Multiplier => a * b,
            // ÷ 0 : sémantique IEEE-754 (inf / NaN), pas d’erreur
            Operation::Diviser => a / b,
        }
    }
}

/// Commandes envoyées par la présentation (union taguée fermée).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Commande {
    /// '0'..='9' ou '.' ; tout autre caractère est ignoré.
    AjouterChiffre(char),
    ChoisirOperation(Operation),
    Effacer,
    SupprimerChiffre,
    Evaluer,
}

/// État de la calculatrice (valeur immuable par étape).
///
/// `Default` = état initial vide.
///
/// Invariant : `ecrasement` ⇒ pas d’opérande précédente ni d’opération
/// (un résultat tout juste calculé est terminal).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EtatCalc {
    pub operande_courante: Option<String>,
    pub operande_precedente: Option<String>,
    pub operation: Option<Operation>,
    /// Vrai juste après un résultat : le prochain chiffre démarre une nouvelle opérande.
    pub ecrasement: bool,
}

/// Transition pure : (état, commande) -> nouvel état.
pub fn transition(etat: EtatCalc, commande: Commande) -> EtatCalc {
    match commande {
        Commande::AjouterChiffre(c) => ajouter_chiffre(etat, c),
        Commande::ChoisirOperation(op) => choisir_operation(etat, op),
        Commande::Effacer => EtatCalc::default(),
        Commande::SupprimerChiffre => supprimer_chiffre(etat),
        Commande::Evaluer => evaluer_etat(etat),
    }
}

fn ajouter_chiffre(etat: EtatCalc, c: char) -> EtatCalc {
    if !(c.is_ascii_digit() || c == '.') {
        return etat;
    }

    if etat.ecrasement {
        return EtatCalc {
            operande_courante: Some(c.to_string()),
            ecrasement: false,
            ..etat
        };
    }

    let courante = etat.operande_courante.as_deref().unwrap_or("");

    if c == '0' && courante == "0" {
        return etat;
    }
    if c == '.' && courante.contains('.') {
        return etat;
    }
    if courante.len() >= LONGUEUR_MAX_SAISIE {
        return etat;
    }

    let mut nouvelle = String::with_capacity(courante.len() + 1);
    nouvelle.push_str(courante);
    nouvelle.push(c);

    EtatCalc {
        operande_courante: Some(nouvelle),
        ..etat
    }
}

fn choisir_operation(etat: EtatCalc, op: Operation) -> EtatCalc {
    match (&etat.operande_courante, &etat.operande_precedente) {
        (None, None) => etat,

        // Changement d’avis sur l’opérateur avant la 2e opérande
        (None, Some(_)) => EtatCalc {
            operation: Some(op),
            ecrasement: false,
            ..etat
        },

        // Premier opérateur : courante -> précédente
        (Some(_), None) => EtatCalc {
            operande_precedente: etat.operande_courante,
            operande_courante: None,
            operation: Some(op),
            ecrasement: false,
        },

        // Chaînage : on évalue tout de suite (gauche → droite)
        (Some(courante), Some(precedente)) => {
            let resultat = evaluer(
                Some(precedente.as_str()),
                Some(courante.as_str()),
                etat.operation,
            );
            EtatCalc {
                operande_precedente: non_vide(resultat),
                operande_courante: None,
                operation: Some(op),
                ecrasement: false,
            }
        }
    }
}

fn supprimer_chiffre(etat: EtatCalc) -> EtatCalc {
    if etat.ecrasement {
        return EtatCalc {
            operande_courante: None,
            ecrasement: false,
            ..etat
        };
    }

    match etat.operande_courante {
        None => etat,
        Some(mut courante) => {
            courante.pop();
            EtatCalc {
                operande_courante: non_vide(courante),
                ..etat
            }
        }
    }
}

fn evaluer_etat(etat: EtatCalc) -> EtatCalc {
    let (Some(op), Some(courante), Some(precedente)) = (
        etat.operation,
        etat.operande_courante.as_deref(),
        etat.operande_precedente.as_deref(),
    ) else {
        return etat;
    };

    let resultat = evaluer(Some(precedente), Some(courante), Some(op));

    EtatCalc {
        operande_courante: non_vide(resultat),
        operande_precedente: None,
        operation: None,
        ecrasement: true,
    }
}

/// Sentinelle vide -> absente (on ne stocke jamais "").
fn non_vide(s: String) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jouer(commandes: &[Commande]) -> EtatCalc {
        commandes
            .iter()
            .fold(EtatCalc::default(), |etat, &c| transition(etat, c))
    }

    fn taper(s: &str) -> Vec<Commande> {
        s.chars().map(Commande::AjouterChiffre).collect()
    }

    use Commande::*;
    use Operation::*;

    #[test]
    fn saisie_decimale() {
        let e = jouer(&taper("5.2"));
        assert_eq!(e.operande_courante.as_deref(), Some("5.2"));

        // 2e point : sans effet
        let apres = transition(e.clone(), AjouterChiffre('.'));
        assert_eq!(apres, e);
    }

    #[test]
    fn zero_redondant_ignore() {
        let e = jouer(&taper("00"));
        assert_eq!(e.operande_courante.as_deref(), Some("0"));

        // mais "0" puis "7" ajoute (comme à l’origine)
        let e = jouer(&taper("07"));
        assert_eq!(e.operande_courante.as_deref(), Some("07"));
    }

    #[test]
    fn plafond_douze_caracteres() {
        let e = jouer(&taper("1234567890123456"));
        assert_eq!(e.operande_courante.as_deref(), Some("123456789012"));
    }

    #[test]
    fn caractere_hors_ensemble_ignore() {
        let e = jouer(&taper("4"));
        assert_eq!(transition(e.clone(), AjouterChiffre('x')), e);
    }

    #[test]
    fn addition_simple() {
        let mut cmds = taper("2");
        cmds.push(ChoisirOperation(Ajouter));
        cmds.extend(taper("3"));
        cmds.push(Evaluer);

        let e = jouer(&cmds);
        assert_eq!(e.operande_courante.as_deref(), Some("5"));
        assert!(e.ecrasement);
        assert_eq!(e.operation, None);
        assert_eq!(e.operande_precedente, None);
    }

    #[test]
    fn chainage_sans_priorite() {
        let mut cmds = taper("2");
        cmds.push(ChoisirOperation(Ajouter));
        cmds.extend(taper("3"));
        cmds.push(ChoisirOperation(Multiplier));

        let e = jouer(&cmds);
        assert_eq!(e.operande_precedente.as_deref(), Some("5"));
        assert_eq!(e.operation, Some(Multiplier));
        assert_eq!(e.operande_courante, None);

        let e = transition(transition(e, AjouterChiffre('4')), Evaluer);
        assert_eq!(e.operande_courante.as_deref(), Some("20"));
    }

    #[test]
    fn changer_d_operateur() {
        let mut cmds = taper("9");
        cmds.push(ChoisirOperation(Ajouter));
        cmds.push(ChoisirOperation(Diviser));

        let e = jouer(&cmds);
        assert_eq!(e.operande_precedente.as_deref(), Some("9"));
        assert_eq!(e.operation, Some(Diviser));
    }

    #[test]
    fn operateur_sans_operande() {
        let e = transition(EtatCalc::default(), ChoisirOperation(Soustraire));
        assert_eq!(e, EtatCalc::default());
    }

    #[test]
    fn division_par_zero_infini() {
        let e = EtatCalc {
            operande_precedente: Some("1".into()),
            operande_courante: Some("0".into()),
            operation: Some(Diviser),
            ecrasement: false,
        };
        let e = transition(e, Evaluer);
        assert_eq!(e.operande_courante.as_deref(), Some("Infinity"));
        assert!(e.ecrasement);
    }

    #[test]
    fn nan_reutilise_efface_l_operande() {
        // 0 ÷ 0 = NaN, puis + 1 = : NaN ne se relit pas => résultat vide
        let cmds = [
            AjouterChiffre('0'),
            ChoisirOperation(Diviser),
            AjouterChiffre('0'),
            Evaluer,
            ChoisirOperation(Ajouter),
            AjouterChiffre('1'),
            Evaluer,
        ];
        let e = jouer(&cmds);
        assert_eq!(e.operande_courante, None);
        assert!(e.ecrasement);
        assert_eq!(e.operation, None);
    }

    #[test]
    fn evaluer_incomplet_sans_effet() {
        let e = jouer(&[AjouterChiffre('7'), ChoisirOperation(Multiplier)]);
        assert_eq!(transition(e.clone(), Evaluer), e);

        let e = jouer(&taper("7"));
        assert_eq!(transition(e.clone(), Evaluer), e);
    }

    #[test]
    fn chiffre_apres_resultat_repart_a_neuf() {
        let mut cmds = taper("6");
        cmds.push(ChoisirOperation(Multiplier));
        cmds.extend(taper("7"));
        cmds.push(Evaluer);
        cmds.extend(taper("1"));

        let e = jouer(&cmds);
        assert_eq!(e.operande_courante.as_deref(), Some("1"));
        assert!(!e.ecrasement);
    }

    #[test]
    fn resultat_reutilise_comme_operande() {
        let mut cmds = taper("6");
        cmds.push(ChoisirOperation(Multiplier));
        cmds.extend(taper("7"));
        cmds.push(Evaluer);
        cmds.push(ChoisirOperation(Soustraire));
        cmds.extend(taper("2"));
        cmds.push(Evaluer);

        let e = jouer(&cmds);
        assert_eq!(e.operande_courante.as_deref(), Some("40"));
    }

    #[test]
    fn operateur_apres_resultat_leve_ecrasement() {
        let mut cmds = taper("1");
        cmds.push(ChoisirOperation(Ajouter));
        cmds.extend(taper("1"));
        cmds.push(Evaluer);
        cmds.push(ChoisirOperation(Ajouter));

        let e = jouer(&cmds);
        assert!(!e.ecrasement);
        assert_eq!(e.operande_precedente.as_deref(), Some("2"));
    }

    #[test]
    fn supprimer_jusqu_a_absent() {
        let mut e = jouer(&taper("123"));
        for attendu in [Some("12"), Some("1"), None, None, None] {
            e = transition(e, SupprimerChiffre);
            assert_eq!(e.operande_courante.as_deref(), attendu);
        }
    }

    #[test]
    fn supprimer_efface_un_resultat() {
        let mut cmds = taper("8");
        cmds.push(ChoisirOperation(Soustraire));
        cmds.extend(taper("3"));
        cmds.push(Evaluer);
        cmds.push(SupprimerChiffre);

        let e = jouer(&cmds);
        assert_eq!(e, EtatCalc::default());
    }

    #[test]
    fn effacer_remet_a_zero() {
        let mut cmds = taper("12.5");
        cmds.push(ChoisirOperation(Diviser));
        cmds.extend(taper("4"));
        cmds.push(Effacer);
        assert_eq!(jouer(&cmds), EtatCalc::default());
    }

    #[test]
    fn chainage_avec_operande_invalide() {
        // "." seul ne se lit pas : résultat vide => précédente absente
        let cmds = [
            AjouterChiffre('.'),
            ChoisirOperation(Ajouter),
            AjouterChiffre('2'),
            ChoisirOperation(Ajouter),
        ];
        let e = jouer(&cmds);
        assert_eq!(e.operande_precedente, None);
        assert_eq!(e.operation, Some(Ajouter));
        assert_eq!(e.operande_courante, None);
    }

    #[test]
    fn symboles() {
        let s: Vec<&str> = Operation::TOUTES.iter().map(|o| o.symbole()).collect();
        assert_eq!(s, ["+", "−", "×", "÷"]);
    }
}
