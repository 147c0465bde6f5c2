pub mod state;

use self::state::create_state;
use crate::domain::a102_supplier_order::api;
use crate::shared::components::color_badge::ColorBadge;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::progress_bar::ProgressBar;
use crate::shared::date_utils::{format_date, format_optional_date};
use crate::shared::list_utils::{highlight_matches, sort_indicator};
use crate::shared::mount_guard::MountGuard;
use crate::shared::number_format::format_money;
use contracts::domain::a102_supplier_order::aggregate::OrderStatus;
use contracts::enums::DisplayColor;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[component]
pub fn OrdersPage() -> impl IntoView {
    let guard = MountGuard::new();
    let state = create_state();
    let (loading, set_loading) = signal(true);
    let search_input = RwSignal::new(String::new());

    spawn_local(async move {
        let result = api::get_orders().await;
        if !guard.is_alive() {
            return;
        }
        match result {
            Ok(orders) => state.update(|s| {
                s.orders = orders;
                s.is_loaded = true;
            }),
            Err(e) => log::error!("Failed to load orders: {}", e),
        }
        set_loading.set(false);
    });

    // Заказов мало, поиск применяется сразу
    Effect::new(move |_| {
        let query = search_input.get();
        state.update(|s| s.search_query = query);
    });

    let visible = Memo::new(move |_| state.with(|s| s.visible()));
    let counts = Memo::new(move |_| state.with(|s| s.status_counts()));
    let total = Memo::new(move |_| state.with(|s| s.search_count()));

    let chip = move |status: Option<OrderStatus>, label: String, count: usize| {
        let is_active = move || state.with(|s| s.status_filter == status);
        view! {
            <button
                class=move || if is_active() { "status-chip status-chip--active" } else { "status-chip" }
                on:click=move |_| state.update(|s| s.status_filter = status)
            >
                {label} " (" {count} ")"
            </button>
        }
    };

    let header = move |field: &'static str, label: &'static str| {
        view! {
            <th
                class="table__header-cell table__header-cell--sortable"
                on:click=move |_| state.update(|s| s.toggle_sort(field))
            >
                {move || state.with(|s| format!("{}{}", label, sort_indicator(&s.sort_field, field, s.sort_ascending)))}
            </th>
        }
    };

    let rows = move || {
        let query = state.with(|s| s.search_query.clone());
        visible
            .get()
            .into_iter()
            .map(|o| {
                let status_color = o.status.color();
                view! {
                    <tr class="table__row">
                        <td class="table__cell">{highlight_matches(&o.order_number, &query)}</td>
                        <td class="table__cell">
                            <div class="buyer">
                                <span class="buyer__avatar">{o.buyer.avatar.clone()}</span>
                                <div>
                                    <div class="buyer__name">{highlight_matches(&o.buyer.name, &query)}</div>
                                    <div class="buyer__company">{highlight_matches(&o.buyer.company, &query)}</div>
                                </div>
                            </div>
                        </td>
                        <td class="table__cell table__cell--right">{o.items}</td>
                        <td class="table__cell table__cell--right">{format_money(o.total_amount)}</td>
                        <td class="table__cell">
                            <ColorBadge token=status_color label=o.status.display_name() />
                        </td>
                        <td class="table__cell">
                            <ProgressBar percent=o.progress_percent() color=status_color />
                        </td>
                        <td class="table__cell">{format_date(&o.order_date)}</td>
                        <td class="table__cell">{format_optional_date(o.expected_delivery.as_ref())}</td>
                        <td class="table__cell">
                            <ColorBadge token=o.priority.color() label=o.priority.display_name() />
                        </td>
                    </tr>
                }
            })
            .collect_view()
    };

    view! {
        <div id="a102_supplier_order--list" class="page page--orders">
            <PageHeader title="Orders" subtitle="Manage and track your orders">
                <Input value=search_input placeholder="Search by order, buyer or company..." />
            </PageHeader>

            <div class="status-chips">
                {move || {
                    let mut chips = vec![chip(None, "All".to_string(), total.get())];
                    chips.extend(
                        counts
                            .get()
                            .into_iter()
                            .map(|(status, count)| chip(Some(status), status.display_name().to_string(), count)),
                    );
                    chips
                }}
            </div>

            <Show
                when=move || !loading.get()
                fallback=|| view! { <div class="orders__loading"><Spinner /></div> }
            >
                <Show
                    when=move || !visible.get().is_empty()
                    fallback=|| view! { <div class="orders__empty">"No orders found"</div> }
                >
                    <table class="table">
                        <thead>
                            <tr>
                                {header("order_number", "Order")}
                                {header("buyer", "Buyer")}
                                {header("items", "Items")}
                                {header("total_amount", "Total")}
                                <th class="table__header-cell">"Status"</th>
                                <th class="table__header-cell">"Progress"</th>
                                {header("order_date", "Order Date")}
                                {header("expected_delivery", "Expected")}
                                <th class="table__header-cell">"Priority"</th>
                            </tr>
                        </thead>
                        <tbody>{rows}</tbody>
                    </table>
                </Show>
            </Show>
        </div>
    }
}
