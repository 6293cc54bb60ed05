use crate::layout::global_context::{use_resources, use_tabs};
use crate::layout::tabs::{detail_tab_key, detail_tab_label, tab_label_for_key};
use crate::shared::components::{ResourceError, ResourcePagination, ResourceSearch, ResourceStatusRow};
use crate::shared::icons::icon;
use crate::shared::list_utils::{confirm, format_amount, highlight_matches};
use contracts::domain::a002_material::Material;
use leptos::prelude::*;
use thaw::*;

/// Row identity for `<For>`: any changed column rebuilds the row.
fn row_key(m: &Material) -> (i64, String, String, u64) {
    (m.id, m.name.clone(), m.description.clone(), m.amount.to_bits())
}

#[component]
#[allow(non_snake_case)]
pub fn MaterialList() -> impl IntoView {
    let tabs_store = use_tabs();
    let materials = use_resources().materials;
    materials.ensure_loaded();

    let open_new = move |_: leptos::ev::MouseEvent| {
        tabs_store.open_tab("a002_material_new", tab_label_for_key("a002_material_new"));
    };

    let open_detail = move |material: &Material| {
        tabs_store.open_tab(
            &detail_tab_key("a002_material", material.id),
            &detail_tab_label("Raw Material", &material.name),
        );
    };

    let delete = move |material: &Material| {
        if confirm(&format!("Delete raw material \"{}\"?", material.name)) {
            materials.delete_item(material.id);
        }
    };

    view! {
        <div class="page">
            <div class="page__header">
                <h1 class="page__title">"Raw Materials"</h1>
                <div class="page__header-actions">
                    <ResourceSearch resource=materials />
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| materials.refresh()>
                        {icon("refresh")}
                    </Button>
                    <Button appearance=ButtonAppearance::Primary on_click=open_new>
                        {icon("plus")}
                        "New Raw Material"
                    </Button>
                </div>
            </div>

            <ResourceError resource=materials />

            <table class="table">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Description"</th>
                        <th class="table__number">"Amount"</th>
                        <th class="table__actions">"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    <ResourceStatusRow resource=materials colspan=4 />
                    <For
                        each=move || materials.items()
                        key=row_key
                        children=move |material: Material| {
                            let name = material.name.clone();
                            let row = StoredValue::new(material.clone());
                            view! {
                                <tr>
                                    <td>
                                        {move || {
                                            materials.with_state(|s| highlight_matches(&name, s.name_filter()))
                                        }}
                                    </td>
                                    <td>{material.description.clone()}</td>
                                    <td class="table__number">{format_amount(material.amount)}</td>
                                    <td class="table__actions">
                                        <button
                                            class="btn btn-icon"
                                            title="Edit"
                                            on:click=move |_| row.with_value(open_detail)
                                        >
                                            {icon("edit")}
                                        </button>
                                        <button
                                            class="btn btn-icon btn-danger"
                                            title="Delete"
                                            on:click=move |_| row.with_value(delete)
                                        >
                                            {icon("trash")}
                                        </button>
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>

            <ResourcePagination resource=materials />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stock_change_gets_new_key() {
        let before = Material {
            id: 7,
            name: "Bolt M8".to_string(),
            description: "Hex bolt".to_string(),
            amount: 120.0,
        };
        let after = Material {
            amount: 80.0,
            ..before.clone()
        };
        assert_eq!(row_key(&before), row_key(&before.clone()));
        assert_ne!(row_key(&before), row_key(&after));
    }
}
