//! Ghost icon button used for header controls.

use leptos::ev::MouseEvent;
use leptos::prelude::*;

/// Borderless square button. `label` doubles as the tooltip.
#[component]
pub fn IconButton(
    label: &'static str,
    #[prop(into)] on_click: Callback<MouseEvent>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class="btn btn--ghost btn--icon"
            aria-label=label
            title=label
            on:click=move |ev| on_click.run(ev)
        >
            {children()}
        </button>
    }
}
