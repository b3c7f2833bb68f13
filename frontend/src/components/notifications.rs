use shared::{Notification, NotificationId, NotificationKind};
use yew::prelude::*;

use super::feedback::{EmptyState, ErrorBanner, Loading};
use super::form_fields::{filter_options, SearchInput, SelectField};
use super::status_badge::StatusBadge;
use crate::domain::badges::notification_badge;
use crate::domain::filters::read_state_value;
use crate::hooks::use_notifications::use_notifications;
use crate::navigation::Screen;
use crate::services::date_utils::format_timestamp;
use crate::session::SessionContext;

#[derive(Properties, PartialEq)]
pub struct NotificationsProps {
    pub session: SessionContext,
    pub on_navigate: Callback<Screen>,
}

#[function_component(Notifications)]
pub fn notifications(props: &NotificationsProps) -> Html {
    let notifications = use_notifications(&props.session);
    let state = &notifications.state;
    let actions = &notifications.actions;

    let kind_options = filter_options(
        "Todos los tipos",
        NotificationKind::KNOWN.iter().map(|k| (k.as_wire(), k.label())),
    );
    let read_options = filter_options("Todas", [("no-leidas", "No leídas"), ("leidas", "Leídas")]);

    html! {
        <div class="screen notifications">
            <div class="screen-toolbar">
                <span class="unread-count">{format!("{} sin leer", state.inbox.unread_total)}</span>
            </div>
            <div class="filters">
                <SearchInput placeholder="Buscar en notificaciones..." on_search={actions.on_search.clone()} />
                <SelectField
                    label="Tipo"
                    value={state.filter.kind.select_value(|k| k.as_wire().to_string())}
                    options={kind_options}
                    on_change={actions.on_kind.clone()}
                />
                <SelectField
                    label="Estado"
                    value={state.filter.read.select_value(read_state_value)}
                    options={read_options}
                    on_change={actions.on_read.clone()}
                />
            </div>

            <ErrorBanner error={state.error.clone()} on_retry={actions.refresh.clone()} />

            {if state.loading && state.inbox.notifications.is_empty() {
                html! { <Loading message="Cargando notificaciones..." /> }
            } else if state.visible.is_empty() {
                html! { <EmptyState /> }
            } else {
                html! {
                    <ul class="notification-list">
                        {for state.visible.iter().map(|notification| html! {
                            <NotificationItem
                                notification={notification.clone()}
                                on_mark_read={actions.mark_read.clone()}
                                on_navigate={props.on_navigate.clone()}
                            />
                        })}
                    </ul>
                }
            }}
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct NotificationItemProps {
    notification: Notification,
    on_mark_read: Callback<NotificationId>,
    on_navigate: Callback<Screen>,
}

#[function_component(NotificationItem)]
fn notification_item(props: &NotificationItemProps) -> Html {
    let notification = &props.notification;
    let target = notification
        .related_entity()
        .and_then(|(entity_type, entity_id)| Screen::for_entity(entity_type, entity_id));

    let mark_read = {
        let on_mark_read = props.on_mark_read.clone();
        let id = notification.id.clone();
        Callback::from(move |_: MouseEvent| on_mark_read.emit(id.clone()))
    };

    html! {
        <li class={classes!("notification-item", (!notification.read).then_some("unread"))}>
            <div class="notification-header">
                <StatusBadge badge={notification_badge(&notification.kind)} />
                <span class="notification-date">{format_timestamp(&notification.created_at)}</span>
            </div>
            <p class="notification-message">{&notification.message}</p>
            <div class="button-row">
                {if let Some(screen) = target {
                    let on_navigate = props.on_navigate.clone();
                    html! {
                        <button class="btn btn-link" onclick={Callback::from(move |_: MouseEvent| on_navigate.emit(screen.clone()))}>
                            {"Ver detalle"}
                        </button>
                    }
                } else { html! {} }}
                {if notification.read {
                    html! {}
                } else {
                    html! { <button class="btn btn-link" onclick={mark_read}>{"Marcar como leída"}</button> }
                }}
            </div>
        </li>
    }
}
