use crate::layout::global_context::{use_resources, use_tabs};
use crate::layout::tabs::{detail_tab_key, detail_tab_label, tab_label_for_key};
use crate::shared::components::{ResourceError, ResourcePagination, ResourceSearch, ResourceStatusRow};
use crate::shared::icons::icon;
use crate::shared::list_utils::{confirm, highlight_matches};
use contracts::domain::a001_product::Product;
use leptos::prelude::*;
use thaw::*;

/// Row identity for `<For>`: any changed column rebuilds the row.
fn row_key(p: &Product) -> (i64, String, String, bool) {
    (p.id, p.name.clone(), p.description.clone(), p.active)
}

#[component]
#[allow(non_snake_case)]
pub fn ProductList() -> impl IntoView {
    let tabs_store = use_tabs();
    let products = use_resources().products;
    products.ensure_loaded();

    let open_new = move |_: leptos::ev::MouseEvent| {
        tabs_store.open_tab("a001_product_new", tab_label_for_key("a001_product_new"));
    };

    let open_detail = move |product: &Product| {
        tabs_store.open_tab(
            &detail_tab_key("a001_product", product.id),
            &detail_tab_label("Product", &product.name),
        );
    };

    let delete = move |product: &Product| {
        if confirm(&format!("Delete product \"{}\"?", product.name)) {
            products.delete_item(product.id);
        }
    };

    view! {
        <div class="page">
            <div class="page__header">
                <h1 class="page__title">"Products"</h1>
                <div class="page__header-actions">
                    <ResourceSearch resource=products />
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| products.refresh()>
                        {icon("refresh")}
                    </Button>
                    <Button appearance=ButtonAppearance::Primary on_click=open_new>
                        {icon("plus")}
                        "New Product"
                    </Button>
                </div>
            </div>

            <ResourceError resource=products />

            <table class="table">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Description"</th>
                        <th>"Active"</th>
                        <th class="table__actions">"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    <ResourceStatusRow resource=products colspan=4 />
                    <For
                        each=move || products.items()
                        key=row_key
                        children=move |product: Product| {
                            let name = product.name.clone();
                            let row = StoredValue::new(product.clone());
                            view! {
                                <tr>
                                    <td>
                                        {move || {
                                            products.with_state(|s| highlight_matches(&name, s.name_filter()))
                                        }}
                                    </td>
                                    <td>{product.description.clone()}</td>
                                    <td>{if product.active { "Yes" } else { "No" }}</td>
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

            <ResourcePagination resource=products />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(name: &str, active: bool) -> Product {
        Product {
            id: 4,
            name: name.to_string(),
            description: "Oak table".to_string(),
            active,
        }
    }

    #[test]
    fn test_edited_row_gets_new_key() {
        let before = product("Table", true);
        assert_eq!(row_key(&before), row_key(&before.clone()));
        assert_ne!(row_key(&before), row_key(&product("Desk", true)));
        assert_ne!(row_key(&before), row_key(&product("Table", false)));
    }
}
