use contracts::shared::validation::FieldErrors;
use leptos::prelude::*;

/// Inline validation message for one field path (`name`, `materials[0].id`).
#[component]
pub fn FieldError(errors: RwSignal<FieldErrors>, #[prop(into)] path: String) -> impl IntoView {
    let message = move || errors.with(|e| e.get(&path).map(str::to_string));

    view! {
        {move || message().map(|text| view! { <div class="field-error">{text}</div> })}
    }
}
