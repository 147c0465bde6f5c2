use crate::routes::routes::AppRoutes;
use crate::system::session::context::SessionProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Текущий пользователь передаётся страницам через контекст
    view! {
        <SessionProvider>
            <AppRoutes />
        </SessionProvider>
    }
}
