use anyhow::{Context, Result};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

// ── Cans ──────────────────────────────────────────────────────────────

/// Every collectible can, in display order.
pub const CAN_NAMES: [&str; 49] = [
    "Cryo Original", "Cryo Zero", "Pixie", "Pixie Zero", "Newfoundland Dry", "Newfoundland Dry Zero",
    "Milky Pop", "Milky Pop Zero", "The Machinetta Americano", "The Machinetta Café Latte",
    "The Machinetta Caramel Macchiato", "Cryo Café Original", "Cryo Café Vanilla", "Cryo Café Mocha",
    "The Haven Earl Grey", "The Haven Milk Tea", "The Haven Green Tea", "GrainT Barley",
    "GrainT Oolong", "GrainT Corn", "Nectar Orange", "Nectar Grape", "Nectar Apple", "Nectar Cranberry",
    "Elixir Carrot", "Elixir Green", "Behemoth Red", "Behemoth Green", "Behemoth Black",
    "Liquid Fire", "Liquid Lightning", "Liquid Nuclear", "Potential Blast", "Potential Tempest",
    "Potential Frost", "Dionysus C", "Moonwell", "Starwell", "Mountain Sparkle Mont Blanc",
    "Mountain Sparkle Everest", "Mountain Sparkle Halla", "Cryo the Clear", "Cryo the Malt",
    "Bayern Hefe Weissbier", "Bayern Weissbier Dunkel", "Corsair Lager", "Corsair Ale",
    "Johnson's Highball Lemon", "Johnson's Highball Ginger",
];

pub fn can_catalog() -> Vec<String> {
    CAN_NAMES.iter().map(|s| s.to_string()).collect()
}

// ── Playthrough ───────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Playthrough {
    NewGame,
    NewGamePlus,
    Dlc,
}

impl Playthrough {
    /// Selector order.
    pub const ALL: [Playthrough; 3] = [Self::NewGame, Self::NewGamePlus, Self::Dlc];

    /// Human-readable label; also the middle segment of stored skin keys.
    pub fn label(&self) -> &'static str {
        match self {
            Self::NewGame     => "NG",
            Self::NewGamePlus => "NG+ and PC Patch",
            Self::Dlc         => "DLC",
        }
    }

    /// Key used inside the skin catalog file.
    pub fn key(&self) -> &'static str {
        match self {
            Self::NewGame     => "NG",
            Self::NewGamePlus => "NG+",
            Self::Dlc         => "DLC",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Self::NewGame     => Self::NewGamePlus,
            Self::NewGamePlus => Self::Dlc,
            Self::Dlc         => Self::NewGame,
        }
    }
}

// ── Skins ─────────────────────────────────────────────────────────────

/// Characters offered by the skin selector, in selector order.
pub const CHARACTERS: [&str; 3] = ["Eve", "Lily", "Adam"];

/// `character → playthrough key → ordered outfit names`, as read from
/// `full_skin_list.json`.
#[derive(Debug, Clone, Default)]
pub struct SkinCatalog {
    entries: HashMap<String, HashMap<String, Vec<String>>>,
}

impl SkinCatalog {
    /// Read the catalog file. A missing or malformed file is an error;
    /// there is no fallback catalog.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("skin catalog {} is not readable", path.display()))?;
        let entries = serde_json::from_str(&text)
            .with_context(|| format!("skin catalog {} is malformed", path.display()))?;
        log::info!("loaded skin catalog from {}", path.display());
        Ok(Self { entries })
    }

    /// Outfits for one character/playthrough. Unknown combinations yield
    /// an empty slice.
    pub fn outfits(&self, character: &str, playthrough: Playthrough) -> &[String] {
        self.entries
            .get(character)
            .and_then(|by_pt| by_pt.get(playthrough.key()))
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Characters present in the file, sorted.
    pub fn characters(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    const CATALOG: &str = r#"{
        "Eve":  { "NG": ["Battle Suit", "Planet Diving Suit"], "NG+": ["Skin Suit"] },
        "Adam": { "NG": ["Scavenger"] }
    }"#;

    #[test]
    fn can_catalog_has_49_unique_names() {
        let names = can_catalog();
        assert_eq!(names.len(), 49);
        assert_eq!(names.iter().collect::<HashSet<_>>().len(), 49);
        assert_eq!(names[0], "Cryo Original");
        assert_eq!(names[48], "Johnson's Highball Ginger");
    }

    #[test]
    fn playthrough_labels_translate_to_catalog_keys() {
        let pairs: Vec<(&str, &str)> = Playthrough::ALL.iter().map(|p| (p.label(), p.key())).collect();
        assert_eq!(pairs, vec![("NG", "NG"), ("NG+ and PC Patch", "NG+"), ("DLC", "DLC")]);
        assert_eq!(Playthrough::Dlc.next(), Playthrough::NewGame);
    }

    #[test]
    fn outfits_follow_file_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("full_skin_list.json");
        fs::write(&path, CATALOG).unwrap();

        let catalog = SkinCatalog::load(&path).unwrap();
        assert_eq!(
            catalog.outfits("Eve", Playthrough::NewGame).to_vec(),
            vec!["Battle Suit", "Planet Diving Suit"]
        );
        assert_eq!(catalog.outfits("Eve", Playthrough::NewGamePlus).to_vec(), vec!["Skin Suit"]);
        assert_eq!(catalog.characters(), vec!["Adam", "Eve"]);
    }

    #[test]
    fn unknown_combination_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("full_skin_list.json");
        fs::write(&path, CATALOG).unwrap();

        let catalog = SkinCatalog::load(&path).unwrap();
        assert!(catalog.outfits("Lily", Playthrough::NewGame).is_empty());
        assert!(catalog.outfits("Adam", Playthrough::Dlc).is_empty());
    }

    #[test]
    fn missing_or_malformed_catalog_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("full_skin_list.json");
        assert!(SkinCatalog::load(&path).is_err());

        fs::write(&path, "{ \"Eve\": [").unwrap();
        assert!(SkinCatalog::load(&path).is_err());
    }
}
