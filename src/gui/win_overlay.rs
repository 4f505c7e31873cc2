use eframe::egui;

use super::theme::Theme;
use crate::core::DrillSession;

/// Full-screen congratulation shown once every card is solved.
pub struct WinOverlay;

impl WinOverlay {
    /// Returns true when the player asked for another round.
    pub fn show(ctx: &egui::Context, session: &DrillSession, theme: &Theme) -> bool {
        if !session.won() {
            return false;
        }

        // Dim everything behind the banner.
        egui::Area::new(egui::Id::new("win_overlay"))
            .order(egui::Order::Foreground)
            .fixed_pos(egui::Pos2::new(0.0, 0.0))
            .show(ctx, |ui| {
                let screen = ui.ctx().screen_rect();
                ui.allocate_space(screen.size());
                ui.painter().rect_filled(screen, 0.0, egui::Color32::from_black_alpha(120));
            });

        let mut play_again = false;
        egui::Window::new("win_banner")
            .order(egui::Order::Foreground)
            .collapsible(false)
            .resizable(false)
            .title_bar(false)
            .fixed_size(egui::Vec2::new(240.0, 120.0))
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::new(0.0, 0.0))
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(8.0);
                    ui.heading(egui::RichText::new("全部正解！").color(theme.correct(ui.ctx())));
                    ui.label("Every character answered correctly.");
                    ui.label(
                        egui::RichText::new(format!(
                            "{} cards, {} submissions",
                            session.total(),
                            session.total_attempts()
                        ))
                        .small()
                        .color(theme.muted(ui.ctx())),
                    );
                    ui.add_space(8.0);
                    if ui.button("Play again").clicked() {
                        play_again = true;
                    }
                    ui.add_space(4.0);
                });
            });

        play_again
    }
}
