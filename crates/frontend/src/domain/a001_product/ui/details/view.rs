use super::view_model::ProductDetailsViewModel;
use crate::layout::global_context::{use_gateway, use_resources};
use crate::shared::components::FieldError;
use crate::shared::icons::icon;
use crate::shared::notifications::use_notifications;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn ProductDetails(id: Option<i64>, on_close: Callback<()>) -> impl IntoView {
    let vm = ProductDetailsViewModel::new(id, use_gateway(), use_notifications());
    vm.load();

    let resources = use_resources();
    let on_saved = Callback::new(move |_: ()| {
        resources.products.refresh();
        resources.production.refresh();
        on_close.run(());
    });

    view! {
        <div class="details-container product-details">
            <div class="details-header">
                <h3>{if vm.is_edit_mode() { "Edit Product" } else { "New Product" }}</h3>
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
                    <label for="code">"Code"</label>
                    <input
                        type="text"
                        id="code"
                        prop:value=move || vm.form.with(|f| f.code.clone())
                        on:input=move |ev| vm.form.update(|f| f.code = event_target_value(&ev))
                    />
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
                    <label for="price">"Price"</label>
                    <input
                        type="text"
                        id="price"
                        inputmode="decimal"
                        prop:value=move || vm.form.with(|f| f.price.clone())
                        on:input=move |ev| {
                            vm.input_price(&event_target_value(&ev));
                            // rejected keystrokes are reverted in the DOM too
                            let price = vm.form.with_untracked(|f| f.price.clone());
                            vm.form.update(|f| f.price = price);
                        }
                    />
                    <FieldError errors=vm.errors path="price" />
                </div>

                <div class="form-group form-group--inline">
                    <input
                        type="checkbox"
                        id="active"
                        prop:checked=move || vm.form.with(|f| f.active)
                        on:change=move |ev| vm.form.update(|f| f.active = event_target_checked(&ev))
                    />
                    <label for="active">"Active"</label>
                </div>

                <div class="form-group">
                    <label>"Materials"</label>
                    <FieldError errors=vm.errors path="materials" />
                    {move || {
                        let count = vm.form.with(|f| f.materials.len());
                        (0..count).map(|index| view! { <MaterialLine vm=vm index=index /> }).collect_view()
                    }}
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| vm.form.update(|f| f.add_material_line())
                    >
                        {icon("plus")}
                        "Add material"
                    </Button>
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

/// One recipe row: material picker, quantity, remove button.
#[component]
fn MaterialLine(vm: ProductDetailsViewModel, index: usize) -> impl IntoView {
    let id_path = format!("materials[{}].id", index);
    let quantity_path = format!("materials[{}].requiredQuantity", index);

    view! {
        <div class="material-line">
            <select
                prop:value=move || {
                    vm.form.with(|f| f.materials.get(index).map(|m| m.id).unwrap_or(0)).to_string()
                }
                on:change=move |ev| {
                    let id = event_target_value(&ev).parse().unwrap_or(0);
                    vm.form.update(|f| f.set_material_id(index, id));
                }
            >
                <option value="0">"Select material"</option>
                <For
                    each=move || vm.materials.get()
                    key=|m| m.id
                    children=move |m| {
                        view! { <option value=m.id.to_string()>{m.name}</option> }
                    }
                />
            </select>
            <input
                type="number"
                min="1"
                prop:value=move || {
                    vm.form
                        .with(|f| f.materials.get(index).map(|m| m.required_quantity).unwrap_or(0.0))
                        .to_string()
                }
                on:input=move |ev| {
                    let quantity = event_target_value(&ev).parse().unwrap_or(0.0);
                    vm.form.update(|f| f.set_material_quantity(index, quantity));
                }
            />
            <button
                class="btn btn-icon"
                title="Remove"
                on:click=move |_| vm.form.update(|f| f.remove_material_line(index))
            >
                {icon("trash")}
            </button>
            <FieldError errors=vm.errors path=id_path />
            <FieldError errors=vm.errors path=quantity_path />
        </div>
    }
}
