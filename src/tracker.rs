use crate::models::catalog::{can_catalog, Playthrough, SkinCatalog};
use crate::models::checklist::{Checklist, ItemKey};
use crate::util::progress_store::ProgressStore;
use anyhow::{bail, Result};
use std::path::Path;

// ── Skin key ──────────────────────────────────────────────────────────

/// Identity of one outfit in one character/playthrough context.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SkinKey {
    pub character:   String,
    pub playthrough: Playthrough,
    pub outfit:      String,
}

impl ItemKey for SkinKey {
    fn label(&self) -> &str { &self.outfit }

    /// `Character-PlaythroughLabel-Outfit`, the on-disk key format.
    fn storage_key(&self) -> String {
        format!("{}-{}-{}", self.character, self.playthrough.label(), self.outfit)
    }
}

// ── Cans ──────────────────────────────────────────────────────────────

pub struct CanTracker<S> {
    store: S,
    list:  Checklist<String>,
    show_uncollected_only: bool,
}

impl<S: ProgressStore> CanTracker<S> {
    /// Load the can store once; the filter starts at "show all".
    pub fn open(store: S) -> Result<Self> {
        let progress = store.load()?;
        let list = Checklist::from_progress(can_catalog(), &progress);
        log::info!("can tracker opened: {}", list.summary());
        Ok(Self { store, list, show_uncollected_only: false })
    }

    pub fn list(&self) -> &Checklist<String> { &self.list }
    pub fn show_uncollected_only(&self) -> bool { self.show_uncollected_only }

    /// Set one can's flag by name and rewrite the store.
    pub fn on_toggle(&mut self, name: &str, collected: bool) -> Result<()> {
        let Some(idx) = self.list.position(name) else {
            bail!("unknown can {:?}", name);
        };
        self.set_at(idx, collected)
    }

    fn set_at(&mut self, idx: usize, collected: bool) -> Result<()> {
        if !self.list.set(idx, collected) {
            bail!("can index {} out of range", idx);
        }
        self.store.persist(&self.list.view())
    }

    pub fn on_filter_change(&mut self, show_uncollected_only: bool) {
        self.show_uncollected_only = show_uncollected_only;
    }

    /// Clear every can after `confirm` agrees. Returns whether the reset
    /// happened; a declined confirmation touches neither memory nor disk.
    pub fn reset_all(&mut self, confirm: impl FnOnce() -> bool) -> Result<bool> {
        if !confirm() {
            return Ok(false);
        }
        self.list.clear();
        self.store.persist(&self.list.view())?;
        log::info!("can progress reset");
        Ok(true)
    }

    pub fn visible(&self) -> Vec<usize> {
        self.list.visible(self.show_uncollected_only)
    }

    pub fn summary(&self) -> String { self.list.summary() }
}

// ── Skins ─────────────────────────────────────────────────────────────

pub struct SkinTracker<S> {
    store:   S,
    catalog: SkinCatalog,
    context: Option<(String, Playthrough)>,
    list:    Checklist<SkinKey>,
    show_uncollected_only: bool,
}

impl<S: ProgressStore> SkinTracker<S> {
    /// Read the skin catalog. Without it the tracker cannot be used, so a
    /// missing or malformed file fails the open.
    pub fn open(catalog_path: &Path, store: S) -> Result<Self> {
        let catalog = SkinCatalog::load(catalog_path)?;
        Ok(Self::with_catalog(catalog, store))
    }

    pub fn with_catalog(catalog: SkinCatalog, store: S) -> Self {
        Self {
            store,
            catalog,
            context: None,
            list: Checklist::empty(),
            show_uncollected_only: false,
        }
    }

    pub fn catalog(&self) -> &SkinCatalog { &self.catalog }
    pub fn list(&self) -> &Checklist<SkinKey> { &self.list }
    pub fn show_uncollected_only(&self) -> bool { self.show_uncollected_only }

    /// Character/playthrough currently loaded, if any.
    pub fn context(&self) -> Option<(&str, Playthrough)> {
        self.context.as_ref().map(|(c, p)| (c.as_str(), *p))
    }

    /// Replace the list with one character/playthrough's outfits, taking
    /// flags from the store as it is on disk now.
    pub fn on_load_catalog(&mut self, character: &str, playthrough: Playthrough) -> Result<()> {
        let progress = self.store.load()?;
        let items: Vec<SkinKey> = self
            .catalog
            .outfits(character, playthrough)
            .iter()
            .map(|outfit| SkinKey {
                character:   character.to_string(),
                playthrough,
                outfit:      outfit.clone(),
            })
            .collect();
        self.list = Checklist::from_progress(items, &progress);
        self.context = Some((character.to_string(), playthrough));
        log::info!(
            "loaded {} / {}: {}",
            character, playthrough.label(), self.list.summary()
        );
        Ok(())
    }

    /// Set the flag of the outfit at `idx` in the loaded list and merge the
    /// visible flags into the store.
    pub fn on_toggle(&mut self, idx: usize, collected: bool) -> Result<()> {
        if !self.list.set(idx, collected) {
            bail!("outfit index {} out of range", idx);
        }
        self.store.persist(&self.list.view())
    }

    pub fn on_filter_change(&mut self, show_uncollected_only: bool) {
        self.show_uncollected_only = show_uncollected_only;
    }

    pub fn visible(&self) -> Vec<usize> {
        self.list.visible(self.show_uncollected_only)
    }

    pub fn summary(&self) -> String { self.list.summary() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::catalog::CAN_NAMES;
    use crate::util::progress_store::{JsonFileStore, Progress, WriteMode};
    use std::cell::RefCell;
    use std::fs;

    /// Records every persisted view.
    #[derive(Default)]
    struct MemoryStore {
        data:   RefCell<Progress>,
        writes: RefCell<usize>,
    }

    impl ProgressStore for &MemoryStore {
        fn load(&self) -> Result<Progress> { Ok(self.data.borrow().clone()) }
        fn persist(&self, view: &Progress) -> Result<()> {
            *self.data.borrow_mut() = view.clone();
            *self.writes.borrow_mut() += 1;
            Ok(())
        }
    }

    const SKINS: &str = r#"{
        "Eve":  { "NG": ["Battle Suit", "Planet Diving Suit"], "NG+": ["Skin Suit"] },
        "Adam": { "NG": ["Scavenger", "Old Coat"] }
    }"#;

    fn can_store(dir: &Path) -> JsonFileStore {
        JsonFileStore::new(dir.join("can_progress.json"), WriteMode::Overwrite)
    }

    fn skin_store(dir: &Path) -> JsonFileStore {
        JsonFileStore::new(dir.join("skin_progress.json"), WriteMode::Merge)
    }

    fn write_catalog(dir: &Path) -> std::path::PathBuf {
        let path = dir.join("full_skin_list.json");
        fs::write(&path, SKINS).unwrap();
        path
    }

    #[test]
    fn fresh_can_store_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let cans = CanTracker::open(can_store(dir.path())).unwrap();
        assert_eq!(cans.list().len(), 49);
        assert!((0..49).all(|i| !cans.list().is_collected(i)));
        assert_eq!(cans.summary(), "0 / 49");
        assert_eq!(cans.visible().len(), 49);
    }

    #[test]
    fn toggled_can_survives_reload() {
        let dir = tempfile::tempdir().unwrap();
        let mut cans = CanTracker::open(can_store(dir.path())).unwrap();
        cans.on_toggle("Cryo Original", true).unwrap();

        let reopened = CanTracker::open(can_store(dir.path())).unwrap();
        assert!(reopened.list().is_collected(0));
        assert!((1..49).all(|i| !reopened.list().is_collected(i)));
        assert_eq!(reopened.summary(), "1 / 49");

        let on_disk = can_store(dir.path()).load().unwrap();
        assert_eq!(on_disk.len(), 49);
        assert_eq!(on_disk.get("Cryo Original"), Some(&true));
    }

    #[test]
    fn double_toggle_restores_stored_state() {
        let dir = tempfile::tempdir().unwrap();
        let mut cans = CanTracker::open(can_store(dir.path())).unwrap();
        cans.on_toggle("Pixie", true).unwrap();
        let before = can_store(dir.path()).load().unwrap();

        cans.on_toggle("Pixie", false).unwrap();
        cans.on_toggle("Pixie", true).unwrap();
        assert_eq!(can_store(dir.path()).load().unwrap(), before);
    }

    #[test]
    fn unknown_can_is_rejected_without_write() {
        let store = MemoryStore::default();
        let mut cans = CanTracker::open(&store).unwrap();
        assert!(cans.on_toggle("Nuka Cola", true).is_err());
        assert_eq!(*store.writes.borrow(), 0);
    }

    #[test]
    fn filter_hides_collected_cans() {
        let store = MemoryStore::default();
        let mut cans = CanTracker::open(&store).unwrap();
        cans.on_toggle(CAN_NAMES[2], true).unwrap();
        cans.on_toggle(CAN_NAMES[5], true).unwrap();

        cans.on_filter_change(true);
        let visible = cans.visible();
        assert_eq!(visible.len(), 47);
        assert!(!visible.contains(&2) && !visible.contains(&5));
        assert!(visible.windows(2).all(|w| w[0] < w[1]));

        cans.on_filter_change(false);
        assert_eq!(cans.visible().len(), 49);
    }

    #[test]
    fn reset_accepted_clears_everything() {
        let dir = tempfile::tempdir().unwrap();
        let mut cans = CanTracker::open(can_store(dir.path())).unwrap();
        cans.on_toggle("Pixie", true).unwrap();
        cans.on_toggle("Moonwell", true).unwrap();

        assert!(cans.reset_all(|| true).unwrap());
        assert_eq!(cans.summary(), "0 / 49");
        let on_disk = can_store(dir.path()).load().unwrap();
        assert_eq!(on_disk.len(), 49);
        assert!(on_disk.values().all(|&v| !v));
    }

    #[test]
    fn reset_declined_changes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let mut cans = CanTracker::open(can_store(dir.path())).unwrap();
        cans.on_toggle("Pixie", true).unwrap();
        let path = dir.path().join("can_progress.json");
        let before = fs::read_to_string(&path).unwrap();

        assert!(!cans.reset_all(|| false).unwrap());
        assert_eq!(cans.summary(), "1 / 49");
        assert_eq!(fs::read_to_string(&path).unwrap(), before);
    }

    #[test]
    fn skin_tracker_requires_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("full_skin_list.json");
        assert!(SkinTracker::open(&missing, skin_store(dir.path())).is_err());
    }

    #[test]
    fn other_contexts_are_invisible_and_preserved() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("skin_progress.json"),
            r#"{"Eve-NG-Battle Suit": true}"#,
        )
        .unwrap();
        let catalog = write_catalog(dir.path());

        let mut skins = SkinTracker::open(&catalog, skin_store(dir.path())).unwrap();
        skins.on_load_catalog("Adam", Playthrough::NewGame).unwrap();
        assert_eq!(skins.list().len(), 2);
        assert_eq!(skins.summary(), "0 / 2");
        assert!(skins.list().item(0).map(|k| k.outfit.as_str()) == Some("Scavenger"));

        skins.on_toggle(0, true).unwrap();

        let on_disk = skin_store(dir.path()).load().unwrap();
        assert_eq!(on_disk.get("Eve-NG-Battle Suit"), Some(&true));
        assert_eq!(on_disk.get("Adam-NG-Scavenger"), Some(&true));
        assert_eq!(on_disk.get("Adam-NG-Old Coat"), Some(&false));
    }

    #[test]
    fn plus_playthrough_uses_label_in_storage_key() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = write_catalog(dir.path());
        let mut skins = SkinTracker::open(&catalog, skin_store(dir.path())).unwrap();
        skins.on_load_catalog("Eve", Playthrough::NewGamePlus).unwrap();
        skins.on_toggle(0, true).unwrap();

        let on_disk = skin_store(dir.path()).load().unwrap();
        assert_eq!(on_disk.get("Eve-NG+ and PC Patch-Skin Suit"), Some(&true));
    }

    #[test]
    fn unknown_skin_context_is_empty_not_error() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = write_catalog(dir.path());
        let mut skins = SkinTracker::open(&catalog, skin_store(dir.path())).unwrap();
        skins.on_load_catalog("Lily", Playthrough::Dlc).unwrap();
        assert!(skins.list().is_empty());
        assert_eq!(skins.summary(), "0 / 0");
        assert!(skins.visible().is_empty());
        assert_eq!(skins.context(), Some(("Lily", Playthrough::Dlc)));
    }

    #[test]
    fn skin_filter_survives_reload() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = write_catalog(dir.path());
        let mut skins = SkinTracker::open(&catalog, skin_store(dir.path())).unwrap();
        skins.on_load_catalog("Eve", Playthrough::NewGame).unwrap();
        skins.on_toggle(0, true).unwrap();
        skins.on_filter_change(true);
        assert_eq!(skins.visible(), vec![1]);

        skins.on_load_catalog("Eve", Playthrough::NewGame).unwrap();
        assert!(skins.show_uncollected_only());
        assert_eq!(skins.visible(), vec![1]);
    }

    #[test]
    fn load_picks_up_external_edits() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = write_catalog(dir.path());
        let mut skins = SkinTracker::open(&catalog, skin_store(dir.path())).unwrap();
        skins.on_load_catalog("Eve", Playthrough::NewGame).unwrap();
        assert_eq!(skins.summary(), "0 / 2");

        fs::write(
            dir.path().join("skin_progress.json"),
            r#"{"Eve-NG-Planet Diving Suit": true}"#,
        )
        .unwrap();
        skins.on_load_catalog("Eve", Playthrough::NewGame).unwrap();
        assert_eq!(skins.summary(), "1 / 2");
    }

    #[test]
    fn corrupt_skin_store_fails_load() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = write_catalog(dir.path());
        fs::write(dir.path().join("skin_progress.json"), "not json").unwrap();
        let mut skins = SkinTracker::open(&catalog, skin_store(dir.path())).unwrap();
        assert!(skins.on_load_catalog("Eve", Playthrough::NewGame).is_err());
    }
}
