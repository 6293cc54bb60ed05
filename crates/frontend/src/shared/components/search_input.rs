use leptos::prelude::*;

/// Name filter input. Every keystroke is forwarded; debouncing happens in
/// the resource controller.
#[component]
pub fn SearchInput(
    /// Current filter text
    #[prop(into)]
    value: Signal<String>,
    #[prop(into)]
    on_change: Callback<String>,
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search by name...".to_string()
    } else {
        placeholder
    };

    let has_text = move || !value.get().is_empty();

    view! {
        <div class="search-input">
            <input
                type="text"
                class="search-input__field"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_change.run(event_target_value(&ev))
            />
            <Show when=has_text>
                <button
                    class="search-input__clear"
                    title="Clear"
                    on:click=move |_| on_change.run(String::new())
                >
                    "×"
                </button>
            </Show>
        </div>
    }
}
