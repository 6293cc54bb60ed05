use gloo_timers::callback::Timeout;
use leptos::prelude::*;

/// How long a notification stays on screen.
pub const NOTIFICATION_TTL_MS: u32 = 4000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub kind: NotificationKind,
    pub text: String,
}

/// Сервис всплывающих уведомлений (успех / ошибка)
#[derive(Clone, Copy)]
pub struct NotificationService {
    items: RwSignal<Vec<Notification>>,
    next_id: StoredValue<u64>,
}

impl NotificationService {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(1),
        }
    }

    pub fn success(&self, text: impl Into<String>) {
        self.push(NotificationKind::Success, text.into());
    }

    pub fn error(&self, text: impl Into<String>) {
        let text = text.into();
        log::warn!("{}", text);
        self.push(NotificationKind::Error, text);
    }

    pub fn dismiss(&self, id: u64) {
        self.items.update(|items| items.retain(|n| n.id != id));
    }

    pub fn items(&self) -> Signal<Vec<Notification>> {
        self.items.into()
    }

    fn push(&self, kind: NotificationKind, text: String) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        self.items.update(|items| items.push(Notification { id, kind, text }));

        let this = *self;
        Timeout::new(NOTIFICATION_TTL_MS, move || this.dismiss(id)).forget();
    }
}

impl Default for NotificationService {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_notifications() -> NotificationService {
    use_context::<NotificationService>().expect("NotificationService not provided in context")
}

/// Renders the notification stack in the top-right corner.
#[component]
pub fn NotificationHost() -> impl IntoView {
    let service = use_notifications();

    view! {
        <div class="notifications">
            <For
                each=move || service.items().get()
                key=|n| n.id
                children=move |n| {
                    let id = n.id;
                    let class = match n.kind {
                        NotificationKind::Success => "notification notification--success",
                        NotificationKind::Error => "notification notification--error",
                    };
                    view! {
                        <div class=class on:click=move |_| service.dismiss(id)>
                            {n.text}
                        </div>
                    }
                }
            />
        </div>
    }
}
