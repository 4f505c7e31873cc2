use eframe::egui::{
    self,
    Align,
    Id,
    Margin,
    RichText,
    Sense,
    TextEdit,
};

use super::theme::{
    tint,
    Theme,
};
use crate::core::{
    DrillSession,
    Verdict,
};

const CARD_WIDTH: f32 = 74.0;
const ANSWER_SIZE: [f32; 2] = [58.0, 20.0];

/// What a card wants the app to do after this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardAction {
    /// Score the typed answer (the field lost focus while holding text).
    Submit,
    /// Score the typed answer, then move focus onward (Enter).
    SubmitAndAdvance,
    /// Just move focus onward (Enter on an empty field).
    Advance,
}

/// Per-card view state. Rebuilt wholesale on reset or set switch, which is
/// what unlocks and clears every card at once.
pub struct CardState {
    pub symbol: char,
    pub input: String,
    pub verdict: Verdict,
}

impl CardState {
    pub fn new(symbol: char) -> Self {
        Self { symbol, input: String::new(), verdict: Verdict::Unanswered }
    }

    /// A correct card stays locked until the next round.
    pub fn locked(&self) -> bool {
        self.verdict == Verdict::Correct
    }

    /// Whether Enter-navigation should stop here: still open, and either
    /// untouched or answered wrong.
    pub fn wants_focus(&self) -> bool {
        !self.locked() && (self.input.trim().is_empty() || self.verdict == Verdict::Incorrect)
    }

    /// Romaji never contains digits, so they are dropped as they are typed.
    /// Only ASCII digits: IME-entered full-width digits are left for the
    /// verdict to reject.
    pub fn strip_digits(&mut self) {
        self.input.retain(|c| !c.is_ascii_digit());
    }
}

pub struct AnswerCard;

impl AnswerCard {
    pub fn show(
        ui: &mut egui::Ui,
        state: &mut CardState,
        session: &DrillSession,
        grab_focus: bool,
        theme: &Theme,
    ) -> Option<CardAction> {
        let ctx = ui.ctx().clone();
        let field_id = Id::new(("kana_input", state.symbol));

        let base_fill = theme.card_fill(&ctx);
        let (fill, outline) = match state.verdict {
            Verdict::Unanswered => (base_fill, theme.card_outline(&ctx)),
            Verdict::Correct => {
                (tint(base_fill, theme.correct(&ctx), 0.22), theme.correct(&ctx))
            }
            Verdict::Incorrect => {
                (tint(base_fill, theme.incorrect(&ctx), 0.22), theme.incorrect(&ctx))
            }
        };

        let mut action = None;
        let frame = egui::Frame::group(ui.style())
            .fill(fill)
            .stroke(egui::Stroke::new(1.0, outline))
            .inner_margin(Margin::same(8))
            .show(ui, |ui| {
                ui.set_width(CARD_WIDTH);
                ui.vertical_centered(|ui| {
                    ui.label(
                        RichText::new(state.symbol.to_string())
                            .size(40.0)
                            .color(theme.kana_ink(&ctx)),
                    );

                    if state.locked() {
                        let expected = session.expected_romaji(state.symbol).unwrap_or("");
                        ui.add_sized(
                            ANSWER_SIZE,
                            egui::Label::new(
                                RichText::new(expected).strong().color(theme.correct(&ctx)),
                            ),
                        );
                    } else {
                        action = Self::show_input(ui, state, field_id, grab_focus);
                    }
                });
            });

        let card = frame.response.interact(Sense::click());
        if state.locked() {
            let attempts =
                session.record(state.symbol).map(|record| record.attempts).unwrap_or(0);
            let hover = if attempts <= 1 {
                "Solved on the first try".to_string()
            } else {
                format!("Solved after {} attempts", attempts)
            };
            card.on_hover_text(hover);
        } else if card.clicked() {
            // The whole card is a click target for its input field.
            ctx.memory_mut(|memory| memory.request_focus(field_id));
        }

        action
    }

    fn show_input(
        ui: &mut egui::Ui,
        state: &mut CardState,
        field_id: Id,
        grab_focus: bool,
    ) -> Option<CardAction> {
        let field = ui.add_sized(
            ANSWER_SIZE,
            TextEdit::singleline(&mut state.input)
                .id(field_id)
                .hint_text("...")
                .horizontal_align(Align::Center),
        );

        if field.changed() {
            state.strip_digits();
        }
        if grab_focus {
            field.request_focus();
        }

        let entered = field.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        let has_text = !state.input.trim().is_empty();

        if entered {
            // Enter always navigates; it only scores when there is text.
            Some(if has_text { CardAction::SubmitAndAdvance } else { CardAction::Advance })
        } else if field.lost_focus() && has_text {
            // Tabbing or clicking away submits whatever was typed.
            Some(CardAction::Submit)
        } else {
            None
        }
    }
}
