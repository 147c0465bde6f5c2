use crate::routes::routes::AppRoute;
use crate::system::session::context::use_session;
use leptos::prelude::*;
use leptos_router::components::A;
use thaw::*;

#[component]
pub fn HomePage() -> impl IntoView {
    let session = use_session();

    let greeting = move || match session.user.get() {
        Some(user) => format!("Welcome back, {}", user.display_name()),
        None => "Welcome to the Supplier Portal".to_string(),
    };

    view! {
        <div class="page page--home">
            <h1 class="page__title">{greeting}</h1>
            <p class="page__subtitle">
                "Track orders, answer buyers and watch how your catalogue performs."
            </p>
            <Show
                when=move || session.user.get().is_some()
                fallback=move || view! {
                    <Button
                        appearance=ButtonAppearance::Primary
                        loading=session.loading
                        on_click=move |_| session.reload()
                    >
                        "Sign in"
                    </Button>
                }
            >
                <div class="home__links">
                    {AppRoute::nav_items()
                        .into_iter()
                        .map(|route| view! {
                            <A href=route.path() attr:class="home__link">{route.title()}</A>
                        })
                        .collect_view()}
                </div>
            </Show>
        </div>
    }
}
