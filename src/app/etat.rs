//! src/app/etat.rs
//!
//! État UI (sans vue, sans noyau).
//!
//! Rôle : contenir l’état du convertisseur (entrée, résultats, erreur, précision, démarche)
//! et offrir des opérations simples (C/CLR/AC) sans logique d’affichage.
//!
//! Contrats :
//! - Aucune évaluation ici (pas de noyau, pas de parsing).
//! - Actions déterministes, sans effet de bord caché.
//! - Précision fractionnaire bornée (puissances de 2, 1/2 .. 1/128).

use crate::mesure::{Longueur, DENOM_DEFAUT};
use crate::noyau::Demarche;

/// Garde-fous de la précision « 1/N de pouce ».
pub const DENOM_MIN: u32 = 2;
pub const DENOM_MAX: u32 = 128;

/// Textes prêts à afficher pour une longueur convertie.
#[derive(Clone, Default, Debug)]
pub struct Affichage {
    pub mm: String,
    pub pouces: String,
    pub fraction: String,
    pub exact: String,
    pub resume: String,
}

#[derive(Clone, Debug)]
pub struct AppConv {
    // --- entrée utilisateur ---
    pub entree: String,

    // --- sorties ---
    pub derniere: Option<Longueur>, // dernière conversion réussie (exacte)
    pub affichage: Affichage,
    pub erreur: String,

    // --- démarche (panneau d’explication) ---
    pub demarche: Demarche,

    // --- paramètres ---
    pub denom: u32, // précision fractionnaire : 1/denom de pouce

    // --- UX ---
    // Permet à vue.rs de redonner le focus à l’entrée après un clic sur un bouton.
    pub focus_entree: bool,
}

impl Default for AppConv {
    fn default() -> Self {
        Self {
            entree: String::new(),
            derniere: None,
            affichage: Affichage::default(),
            erreur: String::new(),
            demarche: Demarche::default(),
            denom: DENOM_DEFAUT,
            focus_entree: true, // au lancement, on veut pouvoir taper tout de suite
        }
    }
}

impl AppConv {
    /* ------------------------ Actions “boutons” (état seulement) ------------------------ */

    /// AC : remise à zéro totale (entrée + résultats + précision par défaut).
    pub fn reset_total(&mut self) {
        self.entree.clear();
        self.clear_resultats();
        self.denom = DENOM_DEFAUT;
        self.focus_entree = true;
    }

    /// C : effacer seulement l’entrée (sans toucher aux résultats).
    pub fn clear_entree(&mut self) {
        self.entree.clear();
        self.focus_entree = true;
    }

    /// CLR : effacer résultats + erreur + démarche (sans toucher à l’entrée).
    pub fn clear_resultats(&mut self) {
        self.derniere = None;
        self.affichage = Affichage::default();
        self.erreur.clear();
        self.demarche = Demarche::default();
        self.focus_entree = true;
    }

    pub fn resultat_dispo(&self) -> bool {
        self.derniere.is_some()
    }

    /// Utilitaire : placer une erreur.
    ///
    /// Choix UX :
    /// - On CONSERVE le dernier résultat affiché pour ne pas “effacer l’écran” sur une faute.
    /// - La démarche, elle, ne correspond plus à rien : on l’efface.
    pub fn set_erreur(&mut self, msg: impl Into<String>) {
        self.erreur = msg.into();
        self.demarche = Demarche::default();
        self.focus_entree = true;
    }

    /// Utilitaire : déposer un résultat complet (longueur exacte + textes + démarche).
    pub fn set_resultats(&mut self, longueur: Longueur, affichage: Affichage) {
        self.erreur.clear();
        self.demarche = longueur.demarche.clone();
        self.derniere = Some(longueur);
        self.affichage = affichage;
        self.focus_entree = true;
    }

    /// Garde-fou : précision = puissance de 2 dans [DENOM_MIN, DENOM_MAX].
    pub fn set_denom(&mut self, denom: u32) {
        self.denom = denom.clamp(DENOM_MIN, DENOM_MAX).next_power_of_two().min(DENOM_MAX);
        self.focus_entree = true;
    }
}
