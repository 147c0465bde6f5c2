pub mod state;

use self::state::create_state;
use crate::domain::a101_supplier_message::api;
use crate::domain::a101_supplier_message::ui::details::MessageDetails;
use crate::shared::components::page_header::PageHeader;
use crate::shared::date_utils::format_message_time;
use crate::shared::icons::icon;
use crate::shared::list_utils::highlight_matches;
use crate::shared::mount_guard::MountGuard;
use contracts::shared::list_utils::filter_list;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Задержка перед применением поиска, мс
const SEARCH_DEBOUNCE_MS: u32 = 200;

#[component]
pub fn MessagesPage() -> impl IntoView {
    let guard = MountGuard::new();
    let state = create_state();
    let (loading, set_loading) = signal(true);

    // Что набрано в поле и что реально применено к списку
    let search_input = RwSignal::new(String::new());
    let (search_query, set_search_query) = signal(String::new());

    {
        let guard = guard.clone();
        spawn_local(async move {
            let result = api::get_messages().await;
            if !guard.is_alive() {
                return;
            }
            match result {
                Ok(messages) => state.update(|s| s.load(messages)),
                Err(e) => log::error!("Failed to load messages: {}", e),
            }
            set_loading.set(false);
        });
    }

    Effect::new(move |_| {
        let typed = search_input.get();
        let guard = guard.clone();
        spawn_local(async move {
            TimeoutFuture::new(SEARCH_DEBOUNCE_MS).await;
            if !guard.is_alive() {
                return;
            }
            // Применяем только последнее значение
            if search_input.get_untracked() == typed {
                set_search_query.set(typed);
            }
        });
    });

    let visible = Memo::new(move |_| {
        let query = search_query.get();
        state.with(|s| filter_list(s.messages.clone(), &query))
    });

    let unread = Memo::new(move |_| state.with(|s| s.unread_count()));
    let starred = Memo::new(move |_| state.with(|s| s.starred_count()));
    let selected_id = Memo::new(move |_| state.with(|s| s.selected.as_ref().map(|m| m.id.clone())));

    let on_toggle_star = Callback::new(move |id: String| state.update(|s| s.toggle_star(&id)));

    let rows = move || {
        let query = search_query.get();
        visible
            .get()
            .into_iter()
            .map(|m| {
                let id = m.id.clone();
                let star_id = m.id.clone();
                let is_selected = {
                    let id = m.id.clone();
                    move || selected_id.get().as_deref() == Some(id.as_str())
                };
                let row_class = move || {
                    let mut cls = String::from("message-row");
                    if !m.read {
                        cls.push_str(" message-row--unread");
                    }
                    if is_selected() {
                        cls.push_str(" message-row--selected");
                    }
                    cls
                };
                let star_icon = if m.starred { "star-filled" } else { "star" };
                view! {
                    <li class=row_class on:click=move |_| state.update(|s| s.select(&id))>
                        <div class="message-row__avatar">{m.sender.avatar.clone()}</div>
                        <div class="message-row__body">
                            <div class="message-row__top">
                                <span class="message-row__name">{highlight_matches(&m.sender.name, &query)}</span>
                                <span class="message-row__company">{highlight_matches(&m.sender.company, &query)}</span>
                                <span class="message-row__time">{format_message_time(&m.timestamp)}</span>
                            </div>
                            <div class="message-row__subject">{highlight_matches(&m.subject, &query)}</div>
                            <div class="message-row__preview">{highlight_matches(&m.preview, &query)}</div>
                        </div>
                        <button
                            class="message-row__star"
                            title="Star"
                            on:click=move |ev| {
                                ev.stop_propagation();
                                on_toggle_star.run(star_id.clone());
                            }
                        >
                            {icon(star_icon)}
                        </button>
                    </li>
                }
            })
            .collect_view()
    };

    view! {
        <div id="a101_supplier_message--list" class="page page--messages">
            <PageHeader
                title="Messages"
                subtitle=Signal::derive(move || Some(format!("{} unread \u{00B7} {} starred", unread.get(), starred.get())))
            >
                <Input value=search_input placeholder="Search messages..." />
            </PageHeader>

            <div class="messages">
                <div class="messages__list">
                    <Show
                        when=move || !loading.get()
                        fallback=|| view! { <div class="messages__loading"><Spinner /></div> }
                    >
                        <Show
                            when=move || !visible.get().is_empty()
                            fallback=|| view! { <div class="messages__empty">"No messages found"</div> }
                        >
                            <ul class="message-list">{rows}</ul>
                        </Show>
                    </Show>
                </div>
                <MessageDetails
                    message=Signal::derive(move || state.with(|s| s.selected.clone()))
                    on_toggle_star=on_toggle_star
                />
            </div>
        </div>
    }
}
