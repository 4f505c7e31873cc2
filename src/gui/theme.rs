use eframe::egui::{
    self,
    style::{
        Selection,
        WidgetVisuals,
        Widgets,
    },
    Color32,
    Stroke,
    Visuals,
};

/// Dark/light palette pair for the drill.
///
/// Both variants are registered with egui up front, so the built-in theme
/// preference switch flips between them without us re-applying anything.
/// The accessors resolve against whichever variant is currently active.
#[derive(Clone)]
pub struct Theme {
    dark: Palette,
    light: Palette,
}

impl Default for Theme {
    fn default() -> Self {
        Theme { dark: Palette::dusk(), light: Palette::paper() }
    }
}

impl Theme {
    fn active(&self, ctx: &egui::Context) -> &Palette {
        if ctx.style().visuals.dark_mode {
            &self.dark
        } else {
            &self.light
        }
    }

    /// Color of the big kana glyph on each card.
    pub fn kana_ink(&self, ctx: &egui::Context) -> Color32 {
        self.active(ctx).kana
    }

    pub fn correct(&self, ctx: &egui::Context) -> Color32 {
        self.active(ctx).correct
    }

    pub fn incorrect(&self, ctx: &egui::Context) -> Color32 {
        self.active(ctx).incorrect
    }

    pub fn accent(&self, ctx: &egui::Context) -> Color32 {
        self.active(ctx).accent
    }

    pub fn muted(&self, ctx: &egui::Context) -> Color32 {
        self.active(ctx).muted
    }

    pub fn card_fill(&self, ctx: &egui::Context) -> Color32 {
        self.active(ctx).surface
    }

    pub fn card_outline(&self, ctx: &egui::Context) -> Color32 {
        self.active(ctx).outline
    }
}

#[derive(Clone)]
struct Palette {
    background: Color32,
    panel: Color32,
    surface: Color32,
    surface_raised: Color32,
    field: Color32,
    outline: Color32,
    ink: Color32,
    kana: Color32,
    muted: Color32,
    selection: Color32,
    accent: Color32,
    correct: Color32,
    incorrect: Color32,
}

impl Palette {
    fn dusk() -> Self {
        Self {
            background: Color32::from_rgb(24, 26, 36),
            panel: Color32::from_rgb(30, 33, 45),
            surface: Color32::from_rgb(40, 44, 60),
            surface_raised: Color32::from_rgb(50, 55, 74),
            field: Color32::from_rgb(18, 19, 28),
            outline: Color32::from_rgb(62, 68, 90),
            ink: Color32::from_rgb(208, 212, 226),
            kana: Color32::from_rgb(232, 235, 245),
            muted: Color32::from_rgb(126, 134, 158),
            selection: Color32::from_rgb(64, 72, 100),
            accent: Color32::from_rgb(110, 154, 236),
            correct: Color32::from_rgb(96, 192, 124),
            incorrect: Color32::from_rgb(226, 102, 108),
        }
    }

    fn paper() -> Self {
        Self {
            background: Color32::from_rgb(243, 242, 236),
            panel: Color32::from_rgb(250, 249, 244),
            surface: Color32::from_rgb(255, 255, 252),
            surface_raised: Color32::from_rgb(238, 236, 229),
            field: Color32::from_rgb(255, 255, 255),
            outline: Color32::from_rgb(209, 205, 194),
            ink: Color32::from_rgb(46, 48, 56),
            kana: Color32::from_rgb(28, 30, 38),
            muted: Color32::from_rgb(132, 132, 142),
            selection: Color32::from_rgb(214, 224, 246),
            accent: Color32::from_rgb(62, 112, 200),
            correct: Color32::from_rgb(56, 152, 92),
            incorrect: Color32::from_rgb(198, 72, 80),
        }
    }
}

/// Moves `base` toward `toward` by `t` in [0, 1]. Used for the faint
/// verdict washes behind answered cards.
pub fn tint(base: Color32, toward: Color32, t: f32) -> Color32 {
    let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
    Color32::from_rgba_unmultiplied(
        mix(base.r(), toward.r()),
        mix(base.g(), toward.g()),
        mix(base.b(), toward.b()),
        mix(base.a(), toward.a()),
    )
}

pub fn set_theme(ctx: &egui::Context, theme: &Theme) {
    set_theme_variant(ctx, &theme.dark, true);
    set_theme_variant(ctx, &theme.light, false);
}

fn set_theme_variant(ctx: &egui::Context, palette: &Palette, is_dark: bool) {
    let (default, variant) = match is_dark {
        true => (Visuals::dark(), egui::Theme::Dark),
        false => (Visuals::light(), egui::Theme::Light),
    };

    ctx.set_visuals_of(
        variant,
        Visuals {
            dark_mode: is_dark,
            widgets: Widgets {
                noninteractive: WidgetVisuals {
                    bg_fill: palette.panel,
                    weak_bg_fill: palette.surface,
                    bg_stroke: Stroke {
                        color: palette.outline,
                        ..default.widgets.noninteractive.bg_stroke
                    },
                    fg_stroke: Stroke {
                        color: palette.ink,
                        ..default.widgets.noninteractive.fg_stroke
                    },
                    ..default.widgets.noninteractive
                },
                inactive: WidgetVisuals {
                    bg_fill: palette.surface,
                    weak_bg_fill: palette.surface,
                    bg_stroke: Stroke {
                        color: palette.outline,
                        ..default.widgets.inactive.bg_stroke
                    },
                    fg_stroke: Stroke { color: palette.ink, ..default.widgets.inactive.fg_stroke },
                    ..default.widgets.inactive
                },
                hovered: WidgetVisuals {
                    bg_fill: palette.surface_raised,
                    weak_bg_fill: palette.surface_raised,
                    bg_stroke: Stroke { color: palette.accent, ..default.widgets.hovered.bg_stroke },
                    fg_stroke: Stroke { color: palette.ink, ..default.widgets.hovered.fg_stroke },
                    ..default.widgets.hovered
                },
                active: WidgetVisuals {
                    bg_fill: palette.selection,
                    weak_bg_fill: palette.selection,
                    bg_stroke: Stroke { color: palette.accent, ..default.widgets.active.bg_stroke },
                    fg_stroke: Stroke { color: palette.ink, ..default.widgets.active.fg_stroke },
                    ..default.widgets.active
                },
                open: WidgetVisuals {
                    bg_fill: palette.panel,
                    weak_bg_fill: palette.surface,
                    bg_stroke: Stroke { color: palette.outline, ..default.widgets.open.bg_stroke },
                    fg_stroke: Stroke { color: palette.ink, ..default.widgets.open.fg_stroke },
                    ..default.widgets.open
                },
            },
            selection: Selection {
                bg_fill: palette.selection,
                stroke: Stroke { color: palette.ink, ..default.selection.stroke },
            },
            hyperlink_color: palette.accent,
            faint_bg_color: palette.surface_raised,
            extreme_bg_color: palette.field,
            code_bg_color: palette.surface,
            error_fg_color: palette.incorrect,
            window_fill: palette.panel,
            window_stroke: Stroke { color: palette.outline, ..default.window_stroke },
            panel_fill: palette.background,
            ..default
        },
    );

    ctx.all_styles_mut(|style| {
        style.interaction.tooltip_delay = 0.0;
        style.interaction.show_tooltips_only_when_still = false;
    });
}
