use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::error::BrowserError;
use crate::observable::{Observable, Subscription};

pub const STORAGE_KEY: &str = "boutique-theme";
pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    /// Icon for the button that switches *away* from this theme.
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Theme::Light => "☾",
            Theme::Dark => "☀",
        }
    }
}

/// Where the chosen theme survives reloads.
pub trait ThemeStorage {
    fn load(&self) -> Option<String>;
    fn save(&self, raw: &str) -> Result<(), BrowserError>;
}

/// Stored preference wins; otherwise follow the system colour scheme.
/// Accepts both JSON (`"dark"`) and bare (`dark`) stored values.
pub fn resolve_initial(stored: Option<&str>, system_prefers_dark: bool) -> Theme {
    let parsed = stored.and_then(|raw| {
        serde_json::from_str::<Theme>(raw)
            .or_else(|_| serde_json::from_value(serde_json::Value::String(raw.trim().to_string())))
            .ok()
    });
    parsed.unwrap_or(if system_prefers_dark { Theme::Dark } else { Theme::Light })
}

/// Light/dark state for the whole page. Created once by the app root and
/// handed to consumers as a property; `toggle` is the only way to change it.
#[derive(Clone)]
pub struct ThemeStore {
    current: Observable<Theme>,
    storage: Rc<dyn ThemeStorage>,
}

impl PartialEq for ThemeStore {
    fn eq(&self, other: &Self) -> bool {
        self.current == other.current
    }
}

impl ThemeStore {
    pub fn init(storage: Rc<dyn ThemeStorage>, system_prefers_dark: bool) -> Self {
        let stored = storage.load();
        let theme = resolve_initial(stored.as_deref(), system_prefers_dark);
        log::info!("Initial theme: {:?}", theme);
        Self {
            current: Observable::new(theme),
            storage,
        }
    }

    pub fn current(&self) -> Theme {
        self.current.get()
    }

    pub fn subscribe(&self, listener: impl Fn(&Theme) + 'static) -> Subscription {
        self.current.subscribe(listener)
    }

    pub fn toggle(&self) -> Theme {
        let next = self.current().toggled();
        self.current.set(next);
        match serde_json::to_string(&next) {
            Ok(raw) => {
                if let Err(err) = self.storage.save(&raw) {
                    log::warn!("Theme not persisted: {}", err);
                }
            }
            Err(err) => log::warn!("Theme not serialized: {}", err),
        }
        log::info!("Theme switched to {:?}", next);
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    #[derive(Default)]
    struct MemoryStorage {
        value: RefCell<Option<String>>,
        fail: bool,
    }

    impl ThemeStorage for MemoryStorage {
        fn load(&self) -> Option<String> {
            self.value.borrow().clone()
        }

        fn save(&self, raw: &str) -> Result<(), BrowserError> {
            if self.fail {
                return Err(BrowserError::StorageUnavailable);
            }
            *self.value.borrow_mut() = Some(raw.to_string());
            Ok(())
        }
    }

    #[test]
    fn stored_preference_wins_over_system() {
        assert_eq!(resolve_initial(Some("\"light\""), true), Theme::Light);
        assert_eq!(resolve_initial(Some("dark"), false), Theme::Dark);
    }

    #[test]
    fn falls_back_to_system_scheme() {
        assert_eq!(resolve_initial(None, true), Theme::Dark);
        assert_eq!(resolve_initial(None, false), Theme::Light);
        assert_eq!(resolve_initial(Some("sepia"), true), Theme::Dark);
    }

    #[test]
    fn toggle_notifies_and_persists() {
        let storage = Rc::new(MemoryStorage::default());
        let store = ThemeStore::init(storage.clone(), false);
        assert_eq!(store.current(), Theme::Light);

        let notified = Rc::new(Cell::new(None));
        let sink = notified.clone();
        let _sub = store.subscribe(move |t| sink.set(Some(*t)));

        assert_eq!(store.toggle(), Theme::Dark);
        assert_eq!(notified.get(), Some(Theme::Dark));
        assert_eq!(storage.load().as_deref(), Some("\"dark\""));

        let reloaded = ThemeStore::init(storage, false);
        assert_eq!(reloaded.current(), Theme::Dark);
    }

    #[test]
    fn storage_failure_still_switches_theme() {
        let storage = Rc::new(MemoryStorage {
            fail: true,
            ..Default::default()
        });
        let store = ThemeStore::init(storage, true);
        assert_eq!(store.toggle(), Theme::Light);
        assert_eq!(store.current(), Theme::Light);
    }
}
