use super::model;
use crate::shared::gateway::RemoteGateway;
use crate::shared::notifications::NotificationService;
use contracts::domain::a002_material::MaterialForm;
use contracts::shared::validation::FieldErrors;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// ViewModel for the raw material form
#[derive(Clone, Copy)]
pub struct MaterialDetailsViewModel {
    pub id: Option<i64>,
    pub form: RwSignal<MaterialForm>,
    pub errors: RwSignal<FieldErrors>,
    pub load_error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
    gateway: StoredValue<RemoteGateway>,
    notifications: NotificationService,
}

impl MaterialDetailsViewModel {
    pub fn new(id: Option<i64>, gateway: RemoteGateway, notifications: NotificationService) -> Self {
        Self {
            id,
            form: RwSignal::new(MaterialForm::default()),
            errors: RwSignal::new(FieldErrors::new()),
            load_error: RwSignal::new(None),
            saving: RwSignal::new(false),
            gateway: StoredValue::new(gateway),
            notifications,
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.id.is_some()
    }

    /// Load form data from server if ID is provided
    pub fn load_if_needed(&self) {
        let Some(id) = self.id else {
            return;
        };
        let this = *self;
        spawn_local(async move {
            let gateway = this.gateway.get_value();
            match model::fetch_by_id(&gateway, id).await {
                Ok(material) => this.form.set(MaterialForm::from_material(material)),
                Err(e) => this.load_error.set(Some(e)),
            }
        });
    }

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
                        "Material saved.".to_string()
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
