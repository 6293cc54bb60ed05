use super::view_model::MaterialDetailsViewModel;
use crate::layout::global_context::{use_gateway, use_resources};
use crate::shared::components::FieldError;
use crate::shared::notifications::use_notifications;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn MaterialDetails(id: Option<i64>, on_close: Callback<()>) -> impl IntoView {
    let vm = MaterialDetailsViewModel::new(id, use_gateway(), use_notifications());
    vm.load_if_needed();

    let resources = use_resources();
    let on_saved = Callback::new(move |_: ()| {
        resources.materials.refresh();
        // stock changes move the production report
        resources.production.refresh();
        on_close.run(());
    });

    view! {
        <div class="details-container material-details">
            <div class="details-header">
                <h3>{if vm.is_edit_mode() { "Edit Raw Material" } else { "New Raw Material" }}</h3>
            </div>

            {move || vm.load_error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <div class="details-form">
                <div class="form-group">
                    <label for="name">"Name"</label>
                    <input
                        type="text"
                        id="name"
                        prop:value=move || vm.form.with(|f| f.name.clone())
                        on:input=move |ev| vm.form.update(|f| f.name = event_target_value(&ev))
                    />
                    <FieldError errors=vm.errors path="name" />
                </div>

                <div class="form-group">
                    <label for="description">"Description"</label>
                    <textarea
                        id="description"
                        rows="3"
                        prop:value=move || vm.form.with(|f| f.description.clone())
                        on:input=move |ev| vm.form.update(|f| f.description = event_target_value(&ev))
                    />
                    <FieldError errors=vm.errors path="description" />
                </div>

                <div class="form-group">
                    <label for="amount">"Amount in stock"</label>
                    <input
                        type="number"
                        id="amount"
                        min="0"
                        prop:value=move || {
                            vm.form.with(|f| if f.amount.is_nan() { String::new() } else { f.amount.to_string() })
                        }
                        on:input=move |ev| {
                            let amount = event_target_value(&ev).parse().unwrap_or(f64::NAN);
                            vm.form.update(|f| f.amount = amount);
                        }
                    />
                    <FieldError errors=vm.errors path="amount" />
                </div>
            </div>

            <div class="details-actions">
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| vm.save_command(on_saved)
                    disabled=Signal::derive(move || vm.saving.get())
                >
                    {if vm.is_edit_mode() { "Save" } else { "Create" }}
                </Button>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                    "Cancel"
                </Button>
            </div>
        </div>
    }
}
