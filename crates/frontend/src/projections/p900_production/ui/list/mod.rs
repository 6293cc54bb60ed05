use crate::layout::global_context::use_resources;
use crate::shared::components::{ResourceError, ResourcePagination, ResourceSearch, ResourceStatusRow};
use crate::shared::icons::icon;
use crate::shared::list_utils::format_amount;
use contracts::projections::p900_production::ProductionRow;
use leptos::prelude::*;
use thaw::*;

/// Row identity for `<For>`: recomputed figures rebuild the row.
fn row_key(r: &ProductionRow) -> (i64, String, String, u64, u64, i64) {
    (
        r.id,
        r.name.clone(),
        r.code.clone(),
        r.unit_value.to_bits(),
        r.production_value.to_bits(),
        r.producible_amount,
    )
}

/// Read-only report: how many units of each product current stock allows.
#[component]
#[allow(non_snake_case)]
pub fn ProductionList() -> impl IntoView {
    let production = use_resources().production;
    production.ensure_loaded();

    view! {
        <div class="page">
            <div class="page__header">
                <h1 class="page__title">"Production"</h1>
                <div class="page__header-actions">
                    <ResourceSearch resource=production />
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| production.refresh()>
                        {icon("refresh")}
                    </Button>
                </div>
            </div>

            <ResourceError resource=production />

            <table class="table">
                <thead>
                    <tr>
                        <th>"Code"</th>
                        <th>"Name"</th>
                        <th class="table__number">"Unit value"</th>
                        <th class="table__number">"Production value"</th>
                        <th class="table__number">"Producible"</th>
                    </tr>
                </thead>
                <tbody>
                    <ResourceStatusRow resource=production colspan=5 />
                    <For
                        each=move || production.items()
                        key=row_key
                        children=move |row: ProductionRow| {
                            view! {
                                <tr>
                                    <td>{row.code}</td>
                                    <td>{row.name}</td>
                                    <td class="table__number">{format_amount(row.unit_value)}</td>
                                    <td class="table__number">{format_amount(row.production_value)}</td>
                                    <td class="table__number">{row.producible_amount.to_string()}</td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>

            <ResourcePagination resource=production />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recomputed_capacity_gets_new_key() {
        let before = ProductionRow {
            id: 1,
            name: "Table".to_string(),
            code: "T-1".to_string(),
            unit_value: 10.0,
            production_value: 50.0,
            producible_amount: 5,
        };
        let after = ProductionRow {
            production_value: 30.0,
            producible_amount: 3,
            ..before.clone()
        };
        assert_eq!(row_key(&before), row_key(&before.clone()));
        assert_ne!(row_key(&before), row_key(&after));
    }
}
