use crate::shared::components::color_badge::ColorBadge;
use crate::shared::date_utils::format_message_time;
use crate::shared::icons::icon;
use contracts::domain::a101_supplier_message::aggregate::Message;
use contracts::enums::DisplayColor;
use leptos::prelude::*;

/// Панель просмотра выбранного сообщения
#[component]
pub fn MessageDetails(
    #[prop(into)]
    message: Signal<Option<Message>>,
    /// id сообщения, у которого переключается звёздочка
    on_toggle_star: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="message-details">
            {move || match message.get() {
                None => view! {
                    <div class="message-details__empty">
                        {icon("message")}
                        <p>"Select a message to read it"</p>
                    </div>
                }.into_any(),
                Some(m) => {
                    let id = m.id.clone();
                    let star_icon = if m.starred { "star-filled" } else { "star" };
                    view! {
                        <div class="message-details__header">
                            <div class="message-details__avatar">{m.sender.avatar.clone()}</div>
                            <div class="message-details__sender">
                                <div class="message-details__name">
                                    {m.sender.name.clone()} " " {m.sender.flag.clone()}
                                </div>
                                <div class="message-details__company">{m.sender.company.clone()}</div>
                            </div>
                            <button
                                class="message-details__star"
                                title="Star"
                                on:click=move |_| on_toggle_star.run(id.clone())
                            >
                                {icon(star_icon)}
                            </button>
                        </div>
                        <h2 class="message-details__subject">{m.subject.clone()}</h2>
                        <div class="message-details__meta">
                            <span>{format_message_time(&m.timestamp)}</span>
                            <ColorBadge token=m.priority.color() label=m.priority.display_name() />
                            <ColorBadge token=m.category.color() label=m.category.display_name() />
                        </div>
                        <div class="message-details__content">{m.content.clone()}</div>
                    }.into_any()
                }
            }}
        </div>
    }
}
