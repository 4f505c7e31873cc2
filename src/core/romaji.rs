use std::collections::HashMap;

use super::catalog::SetDefinition;

/// Expected lowercase romanization per symbol.
pub type RomajiMap = HashMap<char, &'static str>;

/// Flattens a set definition row-major into a symbol-to-romaji map.
///
/// Alignment of the two tables is a property of the catalog data, not
/// something checked here. A symbol appearing twice keeps its last
/// romanization.
pub fn build_romaji_map(definition: &SetDefinition) -> RomajiMap {
    let mut map = RomajiMap::new();
    for (symbols, romaji) in definition.symbols.iter().zip(definition.romaji.iter()) {
        for (&symbol, &expected) in symbols.iter().zip(romaji.iter()) {
            map.insert(symbol, expected);
        }
    }
    map
}
