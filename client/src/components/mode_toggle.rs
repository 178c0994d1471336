//! Light/dark mode toggle for the page header.
//!
//! SYSTEM CONTEXT
//! ==============
//! The component owns the page theme. A signal holds the current value and a
//! single effect runs `state::theme::observe`: first when the control mounts
//! in the browser, then after every click.
//!
//! TRADE-OFFS
//! ==========
//! Server rendering has no storage or media query, so markup is produced for
//! the light theme. The effect resolves the real initial theme on its first
//! run, which only happens after hydration. The system preference is read
//! once there and never tracked afterwards.

use leptos::ev::MouseEvent;
use leptos::prelude::*;

use crate::components::button::IconButton;
use crate::components::icons::ThemeIcon;
use crate::state::theme::observe;
use crate::util::host::BrowserHost;
use crate::util::theme::{Icon, TOGGLE_LABEL, Theme};

#[cfg(test)]
#[path = "mode_toggle_test.rs"]
mod mode_toggle_test;

/// Self-contained theme toggle button. Takes no props.
#[component]
pub fn ModeToggle() -> impl IntoView {
    let host = BrowserHost;
    let theme = RwSignal::new(Theme::default());

    Effect::new(move |ran: Option<()>| {
        let current = theme.get();
        let resolved = observe(&host, current, ran.is_none());
        // Only the first run can resolve to something else; the rerun it
        // triggers persists the same value again.
        if resolved != current {
            theme.set(resolved);
        }
    });

    let icon = Signal::derive(move || Icon::for_theme(theme.get()));
    let on_click = move |_: MouseEvent| theme.update(|t| *t = t.toggled());

    view! {
        <IconButton label=TOGGLE_LABEL on_click=on_click>
            <ThemeIcon icon=icon/>
        </IconButton>
    }
}
