use crate::dashboards::d100_supplier_overview::api;
use crate::shared::components::color_badge::ColorBadge;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::icons::icon;
use crate::shared::mount_guard::MountGuard;
use contracts::domain::a103_activity::aggregate::ActivityItem;
use contracts::enums::DisplayColor;
use contracts::shared::pagination::{Page, ACTIVITY_PAGE_SIZE};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Лента "Recent Activity" с постраничным выводом на клиенте
#[component]
pub fn RecentActivity() -> impl IntoView {
    let guard = MountGuard::new();
    let (items, set_items) = signal(Vec::<ActivityItem>::new());
    let (current_page, set_current_page) = signal(1usize);

    spawn_local(async move {
        let result = api::get_activity().await;
        if !guard.is_alive() {
            return;
        }
        match result {
            Ok(list) => set_items.set(list),
            Err(e) => log::error!("Failed to load activity: {}", e),
        }
    });

    let page = Memo::new(move |_| {
        items.with(|list| Page::from_items(list, current_page.get(), ACTIVITY_PAGE_SIZE))
    });

    let rows = move || {
        page.get()
            .items
            .into_iter()
            .map(|item| {
                let icon_class = format!("activity__icon activity__icon--{}", item.activity_type.color().css_class());
                let status = item.status.map(|s| {
                    view! { <ColorBadge token=s.color() label=s.display_name() /> }
                });
                view! {
                    <li class="activity__item">
                        <div class=icon_class>{icon(item.activity_type.icon_name())}</div>
                        <div class="activity__body">
                            <div class="activity__title">{item.title}</div>
                            <div class="activity__description">{item.description}</div>
                        </div>
                        <div class="activity__meta">
                            <span class="activity__time">{item.timestamp}</span>
                            {status}
                        </div>
                    </li>
                }
            })
            .collect_view()
    };

    view! {
        <div class="activity">
            <div class="activity__header">
                <h3 class="activity__heading">"Recent Activity"</h3>
                <PaginationControls
                    page=Signal::from(page)
                    on_page_change=Callback::new(move |p: usize| set_current_page.set(p))
                />
            </div>
            <Show
                when=move || !page.get().items.is_empty()
                fallback=|| view! { <div class="activity__empty">"No recent activity"</div> }
            >
                <ul class="activity__list">{rows}</ul>
            </Show>
        </div>
    }
}
