//! Tab content registry: tab.key → View

use super::tab_labels::parse_detail_id;
use crate::domain::a001_product::ui::details::ProductDetails;
use crate::domain::a001_product::ui::list::ProductList;
use crate::domain::a002_material::ui::details::MaterialDetails;
use crate::domain::a002_material::ui::list::MaterialList;
use crate::layout::global_context::AppGlobalContext;
use crate::projections::p900_production::ui::list::ProductionList;
use leptos::prelude::*;

pub fn render_tab_content(key: &str, tabs_store: AppGlobalContext) -> AnyView {
    let close_key = key.to_string();
    let on_close = Callback::new(move |_: ()| tabs_store.close_tab(&close_key));

    match key {
        "a001_product" => view! { <ProductList /> }.into_any(),
        "a001_product_new" => view! { <ProductDetails id=None on_close=on_close /> }.into_any(),
        k if parse_detail_id(k, "a001_product").is_some() => {
            let id = parse_detail_id(k, "a001_product");
            view! { <ProductDetails id=id on_close=on_close /> }.into_any()
        }
        "a002_material" => view! { <MaterialList /> }.into_any(),
        "a002_material_new" => view! { <MaterialDetails id=None on_close=on_close /> }.into_any(),
        k if parse_detail_id(k, "a002_material").is_some() => {
            let id = parse_detail_id(k, "a002_material");
            view! { <MaterialDetails id=id on_close=on_close /> }.into_any()
        }
        "p900_production" => view! { <ProductionList /> }.into_any(),
        _ => {
            log::warn!("Unknown tab type: {}", key);
            view! { <div class="placeholder">"Not implemented yet"</div> }.into_any()
        }
    }
}
