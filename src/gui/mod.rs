pub mod app;
pub mod card;
pub mod fonts;
pub mod grid;
pub mod theme;
pub mod top_bar;
pub mod win_overlay;

pub use app::KanagridApp;
