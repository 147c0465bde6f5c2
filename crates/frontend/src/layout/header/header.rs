use crate::routes::routes::AppRoute;
use crate::shared::icons::icon;
use contracts::system::session::CurrentUser;
use leptos::callback::UnsyncCallback;
use leptos::prelude::*;
use leptos_router::hooks::use_location;

/// Шапка: логотип, меню разделов и меню пользователя.
///
/// Пользователь, навигация и выход приходят снаружи, шапка сама ничего
/// не загружает.
#[component]
pub fn Header(
    #[prop(into)]
    user: Signal<Option<CurrentUser>>,
    on_navigate: UnsyncCallback<AppRoute>,
    on_logout: UnsyncCallback<()>,
) -> impl IntoView {
    let location = use_location();
    let (menu_open, set_menu_open) = signal(false);

    let current_route = move || AppRoute::from_path(&location.pathname.get());

    let nav = {
        let on_navigate = on_navigate.clone();
        AppRoute::nav_items()
            .into_iter()
            .map(|route| {
                let on_navigate = on_navigate.clone();
                view! {
                    <button
                        class="header__nav-item"
                        class:header__nav-item--active=move || current_route() == Some(route)
                        on:click=move |_| on_navigate.run(route)
                    >
                        {route.title()}
                    </button>
                }
            })
            .collect_view()
    };

    let display_name = move || {
        user.get()
            .map(|u| u.display_name())
            .unwrap_or_else(|| "Guest".to_string())
    };
    let email = move || user.get().map(|u| u.email).unwrap_or_default();
    let initials = move || {
        user.get()
            .map(|u| u.initials())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| "?".to_string())
    };

    let on_home = on_navigate.clone();
    let on_profile = on_navigate.clone();

    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                <button class="header__title" on:click=move |_| on_home.run(AppRoute::Home)>
                    "Supplier Portal"
                </button>
                <nav class="header__nav">{nav}</nav>
            </div>
            <div class="header__actions">
                <button
                    class="header__user"
                    aria-label="User menu"
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    <span class="header__avatar">{initials}</span>
                    <span class="header__user-name">{display_name}</span>
                </button>
                <Show when=move || menu_open.get()>
                    {
                        let on_profile = on_profile.clone();
                        let on_logout = on_logout.clone();
                        view! {
                            <div class="header__menu">
                                <div class="header__menu-email">{email}</div>
                                <button
                                    class="header__menu-item"
                                    on:click=move |_| {
                                        set_menu_open.set(false);
                                        on_profile.run(AppRoute::Profile);
                                    }
                                >
                                    {icon("user")}
                                    " Profile"
                                </button>
                                <button
                                    class="header__menu-item"
                                    on:click=move |_| {
                                        set_menu_open.set(false);
                                        on_logout.run(());
                                    }
                                >
                                    {icon("log-out")}
                                    " Log out"
                                </button>
                            </div>
                        }
                    }
                </Show>
            </div>
        </header>
    }
}
