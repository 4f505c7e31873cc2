use eframe::egui;

use super::{
    card::{
        CardAction,
        CardState,
    },
    fonts,
    grid,
    theme::{
        set_theme,
        Theme,
    },
    top_bar::{
        TopBar,
        TopBarAction,
    },
    win_overlay::WinOverlay,
};
use crate::{
    core::{
        navigation,
        DrillSession,
        KanaSet,
    },
    persistence::{
        JsonPreferences,
        PreferenceStore,
    },
};

pub struct KanagridApp {
    // Drill state
    session: DrillSession,
    cards: Vec<CardState>,
    pending_focus: Option<usize>,

    // UI state
    theme: Theme,

    // Saved preference
    prefs: Box<dyn PreferenceStore>,
}

impl KanagridApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let app = Self::with_store(Box::new(JsonPreferences::new()));

        match fonts::install_japanese_font(&cc.egui_ctx) {
            Ok(path) => println!("Japanese font: {}", path),
            Err(e) => eprintln!("{}. Kana will not render correctly.", e),
        }

        set_theme(&cc.egui_ctx, &app.theme);
        cc.egui_ctx.set_zoom_factor(cc.egui_ctx.zoom_factor() + 0.2);

        app
    }

    /// Everything except the window-dependent setup, which keeps the app
    /// constructible in tests with an in-memory store.
    fn with_store(prefs: Box<dyn PreferenceStore>) -> Self {
        let set = prefs.load_active_set().unwrap_or_default();
        let session = DrillSession::new(set, &mut rand::rng());
        let cards = cards_for(&session);

        Self { session, cards, pending_focus: None, theme: Theme::default(), prefs }
    }

    fn handle_top_bar(&mut self, action: TopBarAction) {
        match action {
            TopBarAction::SwitchSet(set) => self.switch_set(set),
            TopBarAction::Reset => self.start_new_round(),
        }
    }

    fn switch_set(&mut self, set: KanaSet) {
        self.session.switch_set(set, &mut rand::rng());
        self.rebuild_cards();

        // The set choice is the one thing remembered across runs. Resets
        // never touch it.
        if let Err(e) = self.prefs.store_active_set(set) {
            eprintln!("Failed to save set preference: {}", e);
        }
    }

    fn start_new_round(&mut self) {
        self.session.reset(&mut rand::rng());
        self.rebuild_cards();
    }

    fn rebuild_cards(&mut self) {
        self.cards = cards_for(&self.session);
        self.pending_focus = None;
    }

    fn handle_card(&mut self, index: usize, action: CardAction) {
        if matches!(action, CardAction::Submit | CardAction::SubmitAndAdvance) {
            let state = &mut self.cards[index];
            if let Some(verdict) = self.session.record_attempt(state.symbol, &state.input) {
                state.verdict = verdict;
            }
        }

        if matches!(action, CardAction::Advance | CardAction::SubmitAndAdvance) {
            // Eligibility reflects the submission above, so a just-solved
            // card is already skipped.
            let eligible: Vec<bool> = self.cards.iter().map(CardState::wants_focus).collect();
            self.pending_focus = navigation::next_focus_target(&eligible, index);
        }
    }
}

impl eframe::App for KanagridApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Some(action) = TopBar::show(ctx, &self.session, &self.theme) {
            self.handle_top_bar(action);
        }

        let card_actions =
            grid::show(ctx, &mut self.cards, &self.session, &mut self.pending_focus, &self.theme);
        for (index, action) in card_actions {
            self.handle_card(index, action);
        }

        if WinOverlay::show(ctx, &self.session, &self.theme) {
            self.start_new_round();
        }
    }
}

fn cards_for(session: &DrillSession) -> Vec<CardState> {
    session.order().iter().map(|&symbol| CardState::new(symbol)).collect()
}
