// src/app/vue.rs
//
// Vue (UI egui): natif + web
// ---------------------------
// Objectifs :
// - Même AppConv (etat.rs) pour natif + wasm
// - Clavier : Enter convertit (quand le champ est focus) ; Backspace reste celui du TextEdit
// - DEL (pavé) : efface le dernier symbole, unité entière comprise ("mm", "in"...)
// - Tactile : gros boutons, focus redonné après clic (focus_entree)
// - Touches d’unités (mm, cm, m, ") pour le mobile

use eframe::egui;
use tracing::debug;

use super::etat::{Affichage, AppConv, DENOM_MAX, DENOM_MIN};
use crate::mesure::conversion::{DECIMALES_MM, DECIMALES_POUCES};
use crate::mesure::{convertir, format_fraction_pouce, resume, Longueur};

impl AppConv {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Convertisseur Q-pur");
                ui.add_space(6.0);

                self.ui_entree(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_resultats(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_demarche(ui);
            });
    }

    fn ui_entree(&mut self, ui: &mut egui::Ui) {
        ui.label("Longueur :");

        // IMPORTANT : id stable + focus contrôlé
        let resp = ui.add(
            egui::TextEdit::singleline(&mut self.entree)
                .desired_width(ui.available_width())
                .hint_text("Ex: 25mm, 2.5cm, 1 3/8\", 2-1/4in, 3/4 + 1/16")
                .id_source("entree_edit")
                .code_editor(),
        );

        if self.focus_entree {
            resp.request_focus();
            self.focus_entree = false;
        }

        // --- Clavier : Enter convertit (seulement si le champ est focus) ---
        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if resp.has_focus() && enter {
            self.convertir_via_mesure();
            self.focus_entree = true;
        }

        ui.add_space(6.0);

        // Actions + précision
        ui.horizontal(|ui| {
            // Contrat: C = entrée seulement ; CLR = résultats seulement ; AC = tout
            self.bouton_action(ui, "C", "Efface seulement l’entrée", Action::ClearEntree);
            self.bouton_action(
                ui,
                "CLR",
                "Efface résultats + erreur + démarche",
                Action::ClearResultats,
            );
            self.bouton_action(ui, "AC", "Remise à zéro totale", Action::ResetTotal);

            ui.separator();

            ui.label("Précision :");
            let mut d = self.denom;
            egui::ComboBox::from_id_salt("precision_denom")
                .selected_text(format!("1/{d}"))
                .show_ui(ui, |ui| {
                    let mut n = DENOM_MIN;
                    while n <= DENOM_MAX {
                        ui.selectable_value(&mut d, n, format!("1/{n}"));
                        n *= 2;
                    }
                });
            if d != self.denom {
                self.set_denom(d);
                self.rafraichit_affichage();
            }
        });

        ui.add_space(8.0);

        // Opérateurs + unités + "="
        ui.horizontal_wrapped(|ui| {
            self.bouton_insert(ui, "(", "(", InsertKind::OpenParen);
            self.bouton_insert(ui, ")", ")", InsertKind::CloseParen);

            self.bouton_insert(ui, "+", "+", InsertKind::Op);
            self.bouton_insert(ui, "-", "-", InsertKind::Op);
            self.bouton_insert(ui, "*", "*", InsertKind::Op);
            self.bouton_insert(ui, "/", "/", InsertKind::Slash);

            ui.separator();

            self.bouton_insert(ui, "mm", "mm", InsertKind::Unite);
            self.bouton_insert(ui, "cm", "cm", InsertKind::Unite);
            self.bouton_insert(ui, "m", "m", InsertKind::Unite);
            self.bouton_insert(ui, "\"", "\"", InsertKind::Unite);

            ui.add_space(10.0);

            let eq = ui.add_sized([64.0, 32.0], egui::Button::new("="));
            if eq.clicked() {
                self.convertir_via_mesure();
                self.focus_entree = true;
            }
        });

        ui.add_space(8.0);

        self.ui_pave_numerique(ui);

        if !self.erreur.is_empty() {
            ui.add_space(6.0);
            ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
        }
    }

    fn ui_pave_numerique(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_numerique_qpur")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton_insert(ui, "7", "7", InsertKind::Digit);
                self.bouton_insert(ui, "8", "8", InsertKind::Digit);
                self.bouton_insert(ui, "9", "9", InsertKind::Digit);
                self.bouton_action(ui, "DEL", "Efface le dernier symbole", Action::Backspace);
                ui.end_row();

                self.bouton_insert(ui, "4", "4", InsertKind::Digit);
                self.bouton_insert(ui, "5", "5", InsertKind::Digit);
                self.bouton_insert(ui, "6", "6", InsertKind::Digit);
                // espace : sépare l’entier de la fraction ("1 3/8")
                self.bouton_insert(ui, "␣", " ", InsertKind::Digit);
                ui.end_row();

                self.bouton_insert(ui, "1", "1", InsertKind::Digit);
                self.bouton_insert(ui, "2", "2", InsertKind::Digit);
                self.bouton_insert(ui, "3", "3", InsertKind::Digit);
                self.bouton_insert(ui, ".", ".", InsertKind::Digit);
                ui.end_row();

                self.bouton_insert(ui, "0", "0", InsertKind::Digit);
                ui.label("");
                ui.label("");
                ui.label("");
                ui.end_row();
            });
    }

    /// Backspace “intelligent” : retire d’un coup les unités ("mm", "cm", "in"...).
    fn backspace_entree(&mut self) {
        efface_dernier_symbole(&mut self.entree);
    }

    fn ui_resultats(&mut self, ui: &mut egui::Ui) {
        if !self.resultat_dispo() {
            ui.monospace("aucun résultat");
            return;
        }

        let a = &self.affichage;
        Self::champ_resultat(ui, "Millimètres", "res_mm", &a.mm);
        Self::champ_resultat(ui, "Pouces", "res_pouces", &a.pouces);
        Self::champ_resultat(ui, "Fraction", "res_fraction", &a.fraction);
        Self::champ_resultat(ui, "EXACT", "res_exact", &a.exact);

        ui.add_space(4.0);
        ui.monospace(&a.resume);
    }

    fn ui_demarche(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Démarche")
            .default_open(false)
            .show(ui, |ui| {
                Self::champ_resultat(ui, "Normalisé", "demarche_normalise", &self.demarche.normalise);
                Self::champ_resultat(ui, "Jetons", "demarche_jetons", &self.demarche.jetons);
                Self::champ_resultat(ui, "Arbre", "demarche_arbre", &self.demarche.arbre);
            });
    }

    fn champ_resultat(ui: &mut egui::Ui, titre: &str, id: &str, contenu: &str) {
        ui.add_space(4.0);
        ui.label(format!("{titre} :"));
        // Affichage lecture seule “stable”, sans TextEdit interactif.
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.monospace(contenu);
                });
            });
    }

    fn bouton_action(&mut self, ui: &mut egui::Ui, label: &str, tip: &str, action: Action) {
        let resp = ui
            .add_sized([56.0, 30.0], egui::Button::new(label))
            .on_hover_text(tip);

        if resp.clicked() {
            match action {
                Action::ClearEntree => self.clear_entree(),
                Action::ClearResultats => self.clear_resultats(),
                Action::ResetTotal => self.reset_total(),
                Action::Backspace => self.backspace_entree(),
            }
            self.focus_entree = true;
        }
    }

    fn bouton_insert(&mut self, ui: &mut egui::Ui, label: &str, to_insert: &str, kind: InsertKind) {
        let resp = ui.add_sized([46.0, 28.0], egui::Button::new(label));
        if resp.clicked() {
            insere(&mut self.entree, to_insert, kind);
            self.focus_entree = true;
        }
    }

    /// Convertit l’entrée via la couche mesure, puis dépose les résultats dans l’état UI.
    fn convertir_via_mesure(&mut self) {
        match convertir(&self.entree) {
            Ok(longueur) => match affichage(&longueur, self.denom) {
                Ok(a) => self.set_resultats(longueur, a),
                Err(e) => self.set_erreur(e.to_string()),
            },
            Err(e) => {
                debug!(entree = %self.entree, erreur = %e, "conversion refusée");
                self.set_erreur(e.to_string());
            }
        }
        self.focus_entree = true;
    }

    /// Précision changée : on reformate la dernière longueur (sans réévaluer).
    fn rafraichit_affichage(&mut self) {
        let Some(l) = &self.derniere else {
            return;
        };
        match affichage(l, self.denom) {
            Ok(a) => self.affichage = a,
            Err(e) => self.set_erreur(e.to_string()),
        }
    }
}

/// Textes d’une longueur (frontière exact -> flottant : ici seulement).
fn affichage(l: &Longueur, denom: u32) -> Result<Affichage, crate::mesure::ErreurMesure> {
    let pouces = l.en_pouces();
    Ok(Affichage {
        mm: format!("{:.dm$} mm", l.mm.to_f64(), dm = DECIMALES_MM),
        pouces: format!("{:.dp$}\"", pouces.to_f64(), dp = DECIMALES_POUCES),
        fraction: format!("{}\" (au 1/{denom})", format_fraction_pouce(&pouces, denom)?),
        exact: format!("{} mm = {}\"", l.mm, pouces),
        resume: resume(l, denom)?,
    })
}

fn retire_espaces_finaux(s: &mut String) {
    while s.ends_with(' ') {
        s.pop();
    }
}

fn efface_dernier_symbole(entree: &mut String) {
    if entree.is_empty() {
        return;
    }

    retire_espaces_finaux(entree);

    // Unités d’abord (les plus longues avant "m")
    for pat in ["inches", "inch", "mm", "cm", "in"] {
        if entree.ends_with(pat) {
            let garde = entree.len() - pat.len();
            entree.truncate(garde);
            retire_espaces_finaux(entree);
            return;
        }
    }

    // Sinon : un caractère
    entree.pop();
    retire_espaces_finaux(entree);
}

fn insere(entree: &mut String, to_insert: &str, kind: InsertKind) {
    if to_insert.is_empty() {
        return;
    }

    match kind {
        InsertKind::CloseParen | InsertKind::Unite => {
            retire_espaces_finaux(entree);
            entree.push_str(to_insert);
        }
        InsertKind::OpenParen => {
            let last = entree.chars().rev().find(|c| !c.is_whitespace());
            if let Some(c) = last {
                if c.is_ascii_digit() || c == ')' {
                    entree.push(' ');
                }
            }
            entree.push_str(to_insert);
        }
        InsertKind::Op => {
            retire_espaces_finaux(entree);
            if !entree.is_empty() {
                entree.push(' ');
            }
            entree.push_str(to_insert);
            entree.push(' ');
        }
        // "/" collé : garde "3/8" comme fraction littérale
        InsertKind::Slash | InsertKind::Digit => {
            entree.push_str(to_insert);
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Action {
    ClearEntree,
    ClearResultats,
    ResetTotal,
    Backspace,
}

#[derive(Clone, Copy, Debug)]
enum InsertKind {
    Digit,
    Slash,
    Op,
    Unite,
    OpenParen,
    CloseParen,
}
