use crate::system::session::context::use_session;
use leptos::prelude::*;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = use_session();

    let field = move |f: fn(&contracts::system::session::CurrentUser) -> String| {
        move || session.user.get().map(|u| f(&u)).unwrap_or_default()
    };

    view! {
        <div class="page page--profile">
            <h1 class="page__title">"Profile"</h1>
            <dl class="profile">
                <dt>"First name"</dt>
                <dd>{field(|u| u.first_name.clone())}</dd>
                <dt>"Last name"</dt>
                <dd>{field(|u| u.last_name.clone())}</dd>
                <dt>"Email"</dt>
                <dd>{field(|u| u.email.clone())}</dd>
            </dl>
        </div>
    }
}
