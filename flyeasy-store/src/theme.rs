use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use serde::Serialize;
use tokio::sync::{broadcast, Mutex};
use tracing::{info, warn};

use crate::preferences::PreferenceStore;

/// Preference key holding `"true"` when dark mode is on.
pub const THEME_KEY: &str = "darkMode";

const CHANNEL_CAPACITY: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

/// Styling classes that depend on the active theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Palette {
    pub root: &'static str,
    pub nav: &'static str,
    pub page: &'static str,
    pub heading: &'static str,
    pub muted_text: &'static str,
    pub card: &'static str,
    pub control: &'static str,
}

impl Theme {
    fn from_dark(dark: bool) -> Self {
        if dark { Theme::Dark } else { Theme::Light }
    }

    /// Anything other than the literal `"true"` means light.
    pub fn from_stored(value: Option<&str>) -> Self {
        Self::from_dark(value == Some("true"))
    }

    pub fn is_dark(&self) -> bool {
        *self == Theme::Dark
    }

    pub fn toggled(&self) -> Self {
        Self::from_dark(!self.is_dark())
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn palette(&self) -> Palette {
        match self {
            Theme::Dark => Palette {
                root: "dark",
                nav: "bg-[var(--primarydark)] text-white border-slate-800",
                page: "bg-gradient-to-b from-gray-900 to-gray-800",
                heading: "text-white",
                muted_text: "text-gray-300",
                card: "bg-gray-800",
                control: "bg-gray-700 text-gray-300",
            },
            Theme::Light => Palette {
                root: "",
                nav: "bg-white text-slate-800 border-slate-200",
                page: "bg-gradient-to-b from-blue-50 to-white",
                heading: "text-gray-800",
                muted_text: "text-gray-600",
                card: "bg-white",
                control: "bg-gray-200 text-gray-700",
            },
        }
    }
}

/// Process-wide dark/light flag backed by a [`PreferenceStore`].
///
/// Subscribers get every theme change over a broadcast channel; dropping the
/// receiver unsubscribes.
pub struct ThemeStore {
    dark: AtomicBool,
    store: Arc<dyn PreferenceStore>,
    changes: broadcast::Sender<Theme>,
    toggling: Mutex<()>,
}

impl ThemeStore {
    /// Hydrate from the persisted preference, defaulting to light.
    pub fn load(store: Arc<dyn PreferenceStore>) -> Self {
        let stored = match store.get(THEME_KEY) {
            Ok(value) => value,
            Err(e) => {
                warn!("Could not read theme preference, using light: {}", e);
                None
            }
        };
        let theme = Theme::from_stored(stored.as_deref());
        info!("Theme loaded: {}", theme.as_str());

        let (changes, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self {
            dark: AtomicBool::new(theme.is_dark()),
            store,
            changes,
            toggling: Mutex::new(()),
        }
    }

    pub fn current(&self) -> Theme {
        Theme::from_dark(self.dark.load(Ordering::SeqCst))
    }

    /// Flip, persist and notify. Toggles run one at a time so the stored
    /// flag always matches the in-memory one. A failed write is logged; the
    /// in-memory theme still changes.
    pub async fn toggle(&self) -> Theme {
        let _guard = self.toggling.lock().await;
        let theme = self.current().toggled();
        self.dark.store(theme.is_dark(), Ordering::SeqCst);

        let persisted = if theme.is_dark() { "true" } else { "false" };
        let store = self.store.clone();
        // File stores do blocking I/O
        match tokio::task::spawn_blocking(move || store.set(THEME_KEY, persisted)).await {
            Ok(Ok(())) => {}
            Ok(Err(e)) => warn!("Failed to persist theme preference: {}", e),
            Err(e) => warn!("Theme persistence task failed: {}", e),
        }

        // No subscribers is fine
        let _ = self.changes.send(theme);
        info!("Theme toggled to {}", theme.as_str());
        theme
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Theme> {
        self.changes.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preferences::{FilePreferenceStore, MemoryPreferenceStore};
    use crate::StoreError;

    #[test]
    fn test_defaults_to_light() {
        let store = Arc::new(MemoryPreferenceStore::new());
        assert_eq!(ThemeStore::load(store.clone()).current(), Theme::Light);

        store.set(THEME_KEY, "yes please").unwrap();
        assert_eq!(ThemeStore::load(store).current(), Theme::Light);
    }

    #[tokio::test]
    async fn test_toggle_persists_and_rehydrates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.json");
        let store = Arc::new(FilePreferenceStore::new(&path));
        store.set(THEME_KEY, "false").unwrap();

        let themes = ThemeStore::load(store.clone());
        assert_eq!(themes.current(), Theme::Light);
        assert_eq!(themes.toggle().await, Theme::Dark);
        assert!(themes.current().is_dark());
        assert_eq!(store.get(THEME_KEY).unwrap().as_deref(), Some("true"));

        let reloaded = ThemeStore::load(Arc::new(FilePreferenceStore::new(&path)));
        assert_eq!(reloaded.current(), Theme::Dark);
    }

    #[tokio::test]
    async fn test_subscribers_see_each_toggle() {
        let themes = ThemeStore::load(Arc::new(MemoryPreferenceStore::new()));
        let mut rx = themes.subscribe();

        themes.toggle().await;
        themes.toggle().await;

        assert_eq!(rx.recv().await.unwrap(), Theme::Dark);
        assert_eq!(rx.recv().await.unwrap(), Theme::Light);
    }

    /// Holds every write of `"true"` for a while.
    struct SlowDarkWrites(MemoryPreferenceStore);

    impl PreferenceStore for SlowDarkWrites {
        fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
            self.0.get(key)
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
            if value == "true" {
                std::thread::sleep(std::time::Duration::from_millis(200));
            }
            self.0.set(key, value)
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_overlapping_toggles_keep_store_in_sync() {
        let store = Arc::new(SlowDarkWrites(MemoryPreferenceStore::new()));
        let themes = Arc::new(ThemeStore::load(store.clone()));

        let first = tokio::spawn({
            let themes = themes.clone();
            async move { themes.toggle().await }
        });
        tokio::time::sleep(std::time::Duration::from_millis(50)).await;
        let second = themes.toggle().await;
        first.await.unwrap();

        assert_eq!(second, Theme::Light);
        assert_eq!(themes.current(), Theme::Light);
        assert_eq!(store.get(THEME_KEY).unwrap().as_deref(), Some("false"));
    }

    #[test]
    fn test_palette_follows_theme() {
        assert_eq!(Theme::Dark.palette().root, "dark");
        assert_eq!(Theme::Light.palette().root, "");
        assert_ne!(Theme::Dark.palette().card, Theme::Light.palette().card);
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
    }
}
