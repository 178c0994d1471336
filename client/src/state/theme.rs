//! Theme toggle state: initial resolution, the change observer, and a
//! framework-free state holder.
//!
//! DESIGN
//! ======
//! Two states, one transition each way. [`observe`] is the observer that runs
//! on mount and after every toggle. Through [`commit`] it applies the root
//! marker first and then persists, so a failed write can never leave the
//! document out of sync with the in-memory theme.
//!
//! The `ModeToggle` component calls [`observe`] from a Leptos effect with a
//! signal as the holder; [`ThemeController`] drives the same function without
//! a reactive runtime.

use crate::util::host::ThemeHost;
use crate::util::theme::{Icon, STORAGE_KEY, Theme};

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Theme the control starts in: the persisted value if any, otherwise the
/// system preference at this moment.
pub fn resolve_initial(host: &impl ThemeHost) -> Theme {
    resolve_from(host, host.read_storage(STORAGE_KEY).as_deref())
}

fn resolve_from(host: &impl ThemeHost, stored: Option<&str>) -> Theme {
    match stored {
        Some(raw) => Theme::from_stored(raw),
        None => system_theme(host),
    }
}

/// System color-scheme preference as a theme.
pub fn system_theme(host: &impl ThemeHost) -> Theme {
    if host.prefers_dark() { Theme::Dark } else { Theme::Light }
}

/// Apply `theme` to the document root, then persist it best-effort.
pub fn commit(host: &impl ThemeHost, theme: Theme) {
    host.set_dark_marker(theme.is_dark());
    if let Err(e) = host.write_storage(STORAGE_KEY, theme.as_str()) {
        log::warn!("theme preference not persisted: {e}");
    }
}

/// One run of the observer. Returns the theme the holder must now contain.
///
/// The first run ignores `current` and resolves the starting theme. A stored
/// value that is not `"light"` or `"dark"` is left in storage: only the marker
/// is applied, and the next toggle overwrites it. Later runs apply and persist
/// `current`.
pub fn observe(host: &impl ThemeHost, current: Theme, first_run: bool) -> Theme {
    if !first_run {
        log::debug!("theme changed to {current}");
        commit(host, current);
        return current;
    }

    let stored = host.read_storage(STORAGE_KEY);
    let theme = resolve_from(host, stored.as_deref());
    log::debug!("theme mounted as {theme}");
    if stored.is_some_and(|raw| raw.parse::<Theme>().is_err()) {
        host.set_dark_marker(theme.is_dark());
    } else {
        commit(host, theme);
    }
    theme
}

/// State holder for the toggle, driving a [`ThemeHost`] directly.
#[derive(Debug)]
pub struct ThemeController<H: ThemeHost> {
    host: H,
    theme: Theme,
}

impl<H: ThemeHost> ThemeController<H> {
    /// Resolve the initial theme and run the observer once.
    pub fn mount(host: H) -> Self {
        let theme = observe(&host, Theme::default(), true);
        Self { host, theme }
    }

    /// Flip the theme, run the observer, and return the new theme.
    pub fn toggle(&mut self) -> Theme {
        self.theme = observe(&self.host, self.theme.toggled(), false);
        self.theme
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Glyph the control currently shows.
    #[must_use]
    pub fn icon(&self) -> Icon {
        Icon::for_theme(self.theme)
    }

    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }
}
