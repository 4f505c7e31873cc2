use std::fs;

use eframe::{
    egui,
    epaint::text::{
        FontInsert,
        FontPriority,
        InsertFontFamily,
    },
};

use crate::core::errors::KanagridError;

/// Well-known Japanese-capable fonts, probed in order. No font ships with
/// the app, so kana rendering leans on whatever the OS provides.
const FONT_CANDIDATES: &[&str] = &[
    // Linux
    "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/opentype/noto/NotoSansCJKjp-Regular.otf",
    "/usr/share/fonts/truetype/fonts-japanese-gothic.ttf",
    // macOS
    "/System/Library/Fonts/ヒラギノ角ゴシック W4.ttc",
    "/System/Library/Fonts/Hiragino Sans GB.ttc",
    "/Library/Fonts/Osaka.ttf",
    // Windows
    "C:\\Windows\\Fonts\\YuGothM.ttc",
    "C:\\Windows\\Fonts\\meiryo.ttc",
    "C:\\Windows\\Fonts\\msgothic.ttc",
];

/// Registers the first Japanese font found on this system, reporting which
/// path was used. The app stays usable on a miss; kana just render as
/// replacement boxes until a font is installed.
pub fn install_japanese_font(ctx: &egui::Context) -> Result<&'static str, KanagridError> {
    for &path in FONT_CANDIDATES {
        let Ok(bytes) = fs::read(path) else {
            continue;
        };

        ctx.add_font(FontInsert::new(
            "japanese_system",
            egui::FontData::from_owned(bytes),
            vec![
                InsertFontFamily {
                    family: egui::FontFamily::Proportional,
                    priority: FontPriority::Highest,
                },
                InsertFontFamily {
                    family: egui::FontFamily::Monospace,
                    priority: FontPriority::Lowest,
                },
            ],
        ));
        return Ok(path);
    }

    Err(KanagridError::NoJapaneseFont)
}
