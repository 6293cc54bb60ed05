use crate::shared::gateway::RemoteGateway;
use crate::shared::notifications::NotificationService;
use crate::shared::resource::ResourceController;
use contracts::domain::a001_product::Product;
use contracts::domain::a002_material::Material;
use contracts::projections::p900_production::ProductionRow;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub opened: RwSignal<Vec<Tab>>,
    pub active: RwSignal<Option<String>>,
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            opened: RwSignal::new(vec![]),
            active: RwSignal::new(None),
            left_open: RwSignal::new(true),
        }
    }

    pub fn open_tab(&self, key: &str, title: &str) {
        log::debug!("open_tab: key='{}', title='{}'", key, title);
        let exists = self
            .opened
            .with_untracked(|tabs| tabs.iter().any(|tab| tab.key == key));
        if !exists {
            let tab = Tab {
                key: key.to_string(),
                title: title.to_string(),
            };
            self.opened.update(|tabs| tabs.push(tab));
        }
        self.activate_tab(key);
    }

    pub fn activate_tab(&self, key: &str) {
        self.active.set(Some(key.to_string()));
    }

    pub fn close_tab(&self, key: &str) {
        log::debug!("close_tab: key='{}'", key);
        self.opened.update(|tabs| tabs.retain(|tab| tab.key != key));
        if self
            .active
            .with_untracked(|active| active.as_deref() == Some(key))
        {
            let next_active = self
                .opened
                .with_untracked(|tabs| tabs.last().map(|t| t.key.clone()));
            self.active.set(next_active);
        }
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub key: String,
    pub title: String,
}

/// One store per resource kind, created once and shared through context.
#[derive(Clone, Copy)]
pub struct ResourceStores {
    pub products: ResourceController<Product>,
    pub materials: ResourceController<Material>,
    pub production: ResourceController<ProductionRow>,
}

impl ResourceStores {
    pub fn new(gateway: RemoteGateway, notifications: NotificationService) -> Self {
        Self {
            products: ResourceController::new(
                "/products",
                "products",
                gateway.clone(),
                notifications,
            ),
            materials: ResourceController::new(
                "/materials",
                "materials",
                gateway.clone(),
                notifications,
            ),
            production: ResourceController::new(
                "/products/production",
                "production data",
                gateway,
                notifications,
            ),
        }
    }
}

pub fn use_resources() -> ResourceStores {
    use_context::<ResourceStores>().expect("ResourceStores not provided in context")
}

pub fn use_gateway() -> RemoteGateway {
    use_context::<RemoteGateway>().expect("RemoteGateway not provided in context")
}

pub fn use_tabs() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext context not found")
}
