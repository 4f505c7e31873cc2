use eframe::egui::{
    self,
    RichText,
};

use super::theme::Theme;
use crate::core::{
    DrillSession,
    KanaSet,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopBarAction {
    SwitchSet(KanaSet),
    Reset,
}

pub struct TopBar;

impl TopBar {
    pub fn show(
        ctx: &egui::Context,
        session: &DrillSession,
        theme: &Theme,
    ) -> Option<TopBarAction> {
        let mut action = None;

        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                egui::widgets::global_theme_preference_switch(ui);
                ui.separator();

                for set in KanaSet::ALL {
                    let selected = session.set() == set;
                    if ui.selectable_label(selected, set.label()).clicked() && !selected {
                        action = Some(TopBarAction::SwitchSet(set));
                    }
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Reset").on_hover_text("Reshuffle and start over").clicked() {
                        action = Some(TopBarAction::Reset);
                    }
                    ui.separator();
                    Self::show_score(ui, session, theme);
                });
            });
            ui.add_space(4.0);
        });

        action
    }

    fn show_score(ui: &mut egui::Ui, session: &DrillSession, theme: &Theme) {
        let color = if session.won() {
            theme.correct(ui.ctx())
        } else {
            theme.accent(ui.ctx())
        };
        ui.label(
            RichText::new(format!("{}/{}", session.correct_count(), session.total()))
                .strong()
                .color(color),
        );
        ui.small("Score");
    }
}
