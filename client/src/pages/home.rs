//! Landing page hosting the theme toggle in its header.

use leptos::prelude::*;

use crate::components::mode_toggle::ModeToggle;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="page">
            <header class="page__header">
                <span class="page__title">"Mode toggle"</span>
                <span class="page__spacer"></span>
                <ModeToggle/>
            </header>
            <main class="page__body">
                <p>
                    "The toggle follows your system color scheme until you pick one. "
                    "Your choice is remembered in this browser."
                </p>
            </main>
        </div>
    }
}
