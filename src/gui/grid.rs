use eframe::egui;

use super::{
    card::{
        AnswerCard,
        CardAction,
        CardState,
    },
    theme::Theme,
};
use crate::core::DrillSession;

/// Scrollable wrapped grid of answer cards.
///
/// `pending_focus` is consumed here: the card at that index grabs keyboard
/// focus this frame. Returns the card actions for the app to apply after
/// the frame is laid out.
pub fn show(
    ctx: &egui::Context,
    cards: &mut [CardState],
    session: &DrillSession,
    pending_focus: &mut Option<usize>,
    theme: &Theme,
) -> Vec<(usize, CardAction)> {
    let focus_target = pending_focus.take();
    let mut actions = Vec::new();

    egui::CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::vertical().auto_shrink([false; 2]).show(ui, |ui| {
            ui.add_space(6.0);
            ui.horizontal_wrapped(|ui| {
                ui.spacing_mut().item_spacing = egui::vec2(8.0, 8.0);
                for (index, state) in cards.iter_mut().enumerate() {
                    let grab_focus = focus_target == Some(index);
                    if let Some(action) = AnswerCard::show(ui, state, session, grab_focus, theme) {
                        actions.push((index, action));
                    }
                }
            });
            ui.add_space(6.0);
        });
    });

    actions
}
