pub mod catalog;
pub mod errors;
pub mod navigation;
pub mod romaji;
pub mod session;
pub mod shuffle;

pub use catalog::{ KanaSet, SetDefinition };
pub use errors::KanagridError;
pub use session::{ AttemptRecord, DrillSession, Verdict };
