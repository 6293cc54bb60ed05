//! TopHeader component - application top bar with the sidebar toggle.

use crate::layout::global_context::use_tabs;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_tabs();
    let is_sidebar_visible = move || ctx.left_open.get();

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if is_sidebar_visible() { "Hide navigation" } else { "Show navigation" }
                >
                    {move || if is_sidebar_visible() { icon("chevron-left") } else { icon("menu") }}
                </button>
                <span class="top-header__title">"Inventory Console"</span>
            </div>
        </div>
    }
}
