use contracts::system::session::CurrentUser;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api;
use crate::shared::mount_guard::MountGuard;

/// Текущая сессия: пользователь для шапки и выход.
///
/// Передаётся через контекст, страницы получают её через `use_session()`.
/// Живёт столько же, сколько `SessionProvider`, а не страница, с которой
/// вызвали `reload`.
#[derive(Clone, Copy)]
pub struct SessionContext {
    pub user: RwSignal<Option<CurrentUser>>,
    pub loading: RwSignal<bool>,
    alive: StoredValue<MountGuard>,
}

impl SessionContext {
    /// Создаётся внутри владельца провайдера, флаг снимается при его очистке
    fn new() -> Self {
        Self {
            user: RwSignal::new(None),
            loading: RwSignal::new(false),
            alive: StoredValue::new(MountGuard::new()),
        }
    }

    pub fn is_alive(&self) -> bool {
        self.alive
            .try_with_value(|guard| guard.is_alive())
            .unwrap_or(false)
    }

    /// Загрузить пользователя заново
    pub fn reload(&self) {
        let session = *self;
        session.loading.set(true);
        spawn_local(async move {
            let result = api::get_current_user().await;
            if !session.is_alive() {
                return;
            }
            session.apply_user(result);
        });
    }

    /// Результат загрузки пользователя; `loading` сбрасывается в любом случае
    fn apply_user(&self, result: Result<CurrentUser, String>) {
        match result {
            Ok(user) => self.user.set(Some(user)),
            Err(e) => {
                log::error!("Failed to load current user: {}", e);
                self.user.set(None);
            }
        }
        self.loading.set(false);
    }

    pub fn logout(&self) {
        self.user.set(None);
        spawn_local(async move {
            if let Err(e) = api::logout().await {
                log::warn!("Logout request failed: {}", e);
            }
        });
    }
}

/// Session context provider component
#[component]
pub fn SessionProvider(children: Children) -> impl IntoView {
    let session = SessionContext::new();
    session.reload();

    provide_context(session);

    children()
}

/// Hook to access the session
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("SessionProvider not found in component tree")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> CurrentUser {
        CurrentUser {
            first_name: "Mehmet".to_string(),
            last_name: "Yilmaz".to_string(),
            email: "mehmet@example.com".to_string(),
        }
    }

    #[test]
    fn test_session_outlives_page() {
        let app = Owner::new();
        app.with(|| {
            let session = SessionContext::new();
            session.loading.set(true);

            // Страница, с которой нажали "Sign in", закрылась до ответа
            let page = Owner::new();
            let page_guard = page.with(MountGuard::new);
            page.cleanup();
            assert!(!page_guard.is_alive());

            assert!(session.is_alive());
            session.apply_user(Ok(user()));
            assert!(!session.loading.get_untracked());
            assert_eq!(session.user.get_untracked(), Some(user()));
        });
    }

    #[test]
    fn test_failed_reload_clears_loading() {
        let app = Owner::new();
        app.with(|| {
            let session = SessionContext::new();
            session.user.set(Some(user()));
            session.loading.set(true);

            session.apply_user(Err("HTTP error: 500".to_string()));
            assert!(!session.loading.get_untracked());
            assert_eq!(session.user.get_untracked(), None);
        });
    }

    #[test]
    fn test_provider_cleanup_stops_session() {
        let app = Owner::new();
        let session = app.with(SessionContext::new);
        assert!(session.is_alive());
        app.cleanup();
        assert!(!session.is_alive());
    }
}
