//! Inline SVG glyphs for the theme toggle.
//!
//! Paths follow the lucide `sun` and `moon` icons so they inherit
//! `currentColor` from the surrounding button.

use leptos::prelude::*;

use crate::util::theme::Icon;

#[component]
pub fn SunIcon() -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            class="icon"
            data-icon={Icon::Sun.as_str()}
            width="16"
            height="16"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            <circle cx="12" cy="12" r="4"></circle>
            <path d="M12 2v2"></path>
            <path d="M12 20v2"></path>
            <path d="m4.93 4.93 1.41 1.41"></path>
            <path d="m17.66 17.66 1.41 1.41"></path>
            <path d="M2 12h2"></path>
            <path d="M20 12h2"></path>
            <path d="m6.34 17.66-1.41 1.41"></path>
            <path d="m19.07 4.93-1.41 1.41"></path>
        </svg>
    }
}

#[component]
pub fn MoonIcon() -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            class="icon"
            data-icon={Icon::Moon.as_str()}
            width="16"
            height="16"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            <path d="M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9Z"></path>
        </svg>
    }
}

/// Reactive glyph switching between [`SunIcon`] and [`MoonIcon`].
#[component]
pub fn ThemeIcon(#[prop(into)] icon: Signal<Icon>) -> impl IntoView {
    move || match icon.get() {
        Icon::Sun => view! { <SunIcon/> }.into_any(),
        Icon::Moon => view! { <MoonIcon/> }.into_any(),
    }
}
