use super::model;
use crate::shared::gateway::RemoteGateway;
use crate::shared::notifications::NotificationService;
use contracts::domain::a001_product::{normalize_price_input, ProductForm};
use contracts::domain::a002_material::Material;
use contracts::shared::validation::FieldErrors;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// ViewModel for the product form
#[derive(Clone, Copy)]
pub struct ProductDetailsViewModel {
    pub id: Option<i64>,
    pub form: RwSignal<ProductForm>,
    pub errors: RwSignal<FieldErrors>,
    pub load_error: RwSignal<Option<String>>,
    pub materials: RwSignal<Vec<Material>>,
    pub saving: RwSignal<bool>,
    gateway: StoredValue<RemoteGateway>,
    notifications: NotificationService,
}

impl ProductDetailsViewModel {
    pub fn new(id: Option<i64>, gateway: RemoteGateway, notifications: NotificationService) -> Self {
        Self {
            id,
            form: RwSignal::new(ProductForm::default()),
            errors: RwSignal::new(FieldErrors::new()),
            load_error: RwSignal::new(None),
            materials: RwSignal::new(Vec::new()),
            saving: RwSignal::new(false),
            gateway: StoredValue::new(gateway),
            notifications,
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.id.is_some()
    }

    /// Loads the material picker and, in edit mode, the product itself.
    pub fn load(&self) {
        let this = *self;
        spawn_local(async move {
            let gateway = this.gateway.get_value();
            match model::fetch_material_options(&gateway).await {
                Ok(materials) => this.materials.set(materials),
                Err(e) => this.notifications.error(e),
            }
        });

        if let Some(id) = self.id {
            let this = *self;
            spawn_local(async move {
                let gateway = this.gateway.get_value();
                match model::fetch_by_id(&gateway, id).await {
                    Ok(details) => this.form.set(ProductForm::from_details(details)),
                    Err(e) => this.load_error.set(Some(e)),
                }
            });
        }
    }

    /// Applies a keystroke in the price box; rejected input keeps the old value.
    pub fn input_price(&self, text: &str) {
        if let Some(price) = normalize_price_input(text) {
            self.form.update(|f| f.price = price);
        }
    }

    /// Validates, then `POST`s or `PUT`s the form. `on_saved` runs after
    /// the server accepted it.
    pub fn save_command(&self, on_saved: Callback<()>) {
        let errors = self.form.with_untracked(|f| f.validate());
        let valid = errors.is_empty();
        self.errors.set(errors);
        if !valid || self.saving.get_untracked() {
            return;
        }

        let payload = self.form.with_untracked(|f| f.to_payload());
        let this = *self;
        this.saving.set(true);
        spawn_local(async move {
            let gateway = this.gateway.get_value();
            let outcome = model::save_form(&gateway, this.id, &payload).await;
            this.saving.set(false);
            match outcome {
                Ok(message) => {
                    this.notifications.success(if message.trim().is_empty() {
                        "Product saved.".to_string()
                    } else {
                        message
                    });
                    on_saved.run(());
                }
                Err(e) => this.notifications.error(e),
            }
        });
    }
}
