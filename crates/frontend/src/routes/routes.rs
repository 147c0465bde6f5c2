use crate::dashboards::d100_supplier_overview::ui::dashboard::SupplierDashboard;
use crate::domain::a101_supplier_message::ui::list::MessagesPage;
use crate::domain::a102_supplier_order::ui::list::OrdersPage;
use crate::layout::header::Header;
use crate::system::pages::home::HomePage;
use crate::system::pages::profile::ProfilePage;
use crate::system::session::context::use_session;
use leptos::callback::UnsyncCallback;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::hooks::use_navigate;
use leptos_router::path;

/// Именованные маршруты приложения
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppRoute {
    Home,
    Dashboard,
    Messages,
    Orders,
    Profile,
}

impl AppRoute {
    pub fn path(&self) -> &'static str {
        match self {
            AppRoute::Home => "/",
            AppRoute::Dashboard => "/dashboard",
            AppRoute::Messages => "/messages",
            AppRoute::Orders => "/orders",
            AppRoute::Profile => "/profile",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            AppRoute::Home => "Home",
            AppRoute::Dashboard => "Dashboard",
            AppRoute::Messages => "Messages",
            AppRoute::Orders => "Orders",
            AppRoute::Profile => "Profile",
        }
    }

    /// Пункты меню в шапке
    pub fn nav_items() -> [AppRoute; 3] {
        [AppRoute::Dashboard, AppRoute::Messages, AppRoute::Orders]
    }

    pub fn from_path(path: &str) -> Option<Self> {
        let path = path.trim_end_matches('/');
        match path {
            "" => Some(AppRoute::Home),
            "/dashboard" => Some(AppRoute::Dashboard),
            "/messages" => Some(AppRoute::Messages),
            "/orders" => Some(AppRoute::Orders),
            "/profile" => Some(AppRoute::Profile),
            _ => None,
        }
    }
}

/// Шапка + страницы. Навигация и выход передаются в шапку явно.
#[component]
fn MainLayout() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    let navigate_for_header = navigate.clone();
    let on_navigate = UnsyncCallback::new(move |route: AppRoute| {
        navigate_for_header(route.path(), Default::default());
    });

    let on_logout = UnsyncCallback::new(move |_: ()| {
        session.logout();
        navigate(AppRoute::Home.path(), Default::default());
    });

    view! {
        <div class="app">
            <Header user=session.user on_navigate=on_navigate on_logout=on_logout />
            <main class="app__main">
                <Routes fallback=|| view! { <div class="page">"Page not found"</div> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/dashboard") view=SupplierDashboard />
                    <Route path=path!("/messages") view=MessagesPage />
                    <Route path=path!("/orders") view=OrdersPage />
                    <Route path=path!("/profile") view=ProfilePage />
                </Routes>
            </main>
        </div>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <MainLayout />
        </Router>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_round_trip() {
        for route in [
            AppRoute::Home,
            AppRoute::Dashboard,
            AppRoute::Messages,
            AppRoute::Orders,
            AppRoute::Profile,
        ] {
            assert_eq!(AppRoute::from_path(route.path()), Some(route));
        }
        assert_eq!(AppRoute::from_path("/orders/"), Some(AppRoute::Orders));
        assert_eq!(AppRoute::from_path("/settings"), None);
    }
}
