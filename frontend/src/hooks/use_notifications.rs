use shared::{Notification, NotificationId, NotificationKind};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::domain::filters::{parse_read_state, Criterion, ListFilter, NotificationFilter, TextQuery};
use crate::domain::status_actions::Inbox;
use crate::session::SessionContext;

#[derive(Clone, PartialEq)]
pub struct NotificationsState {
    pub inbox: Inbox,
    pub visible: Vec<Notification>,
    pub filter: NotificationFilter,
    pub loading: bool,
    pub error: Option<String>,
}

pub struct UseNotificationsResult {
    pub state: NotificationsState,
    pub actions: UseNotificationsActions,
}

#[derive(Clone)]
pub struct UseNotificationsActions {
    pub mark_read: Callback<NotificationId>,
    pub on_search: Callback<String>,
    pub on_kind: Callback<String>,
    pub on_read: Callback<String>,
    pub refresh: Callback<()>,
}

#[hook]
pub fn use_notifications(session: &SessionContext) -> UseNotificationsResult {
    let inbox = use_state(Inbox::default);
    let filter = use_state(NotificationFilter::default);
    let loading = use_state(|| true);
    let error = use_state(|| Option::<String>::None);

    let refresh = {
        let session = session.clone();
        let inbox = inbox.clone();
        let loading = loading.clone();
        let error = error.clone();

        use_callback((), move |_: (), _| {
            let session = session.clone();
            let inbox = inbox.clone();
            let loading = loading.clone();
            let error = error.clone();
            let limit = session.config().notification_limit;

            spawn_local(async move {
                loading.set(true);
                match session.client().list_notifications(limit).await {
                    Ok(response) => {
                        inbox.set(Inbox::new(response.notifications, response.unread_total));
                        error.set(None);
                    }
                    Err(e) => error.set(Some(session.report("Loading notifications", &e))),
                }
                loading.set(false);
            });
        })
    };

    use_effect_with((), {
        let refresh = refresh.clone();
        move |_| {
            refresh.emit(());
            || ()
        }
    });

    let mark_read = {
        let session = session.clone();
        let inbox = inbox.clone();
        let error = error.clone();

        Callback::from(move |id: NotificationId| {
            let session = session.clone();
            let inbox = inbox.clone();
            let error = error.clone();

            spawn_local(async move {
                match session.client().mark_notification_read(&id).await {
                    Ok(()) => {
                        let mut next = (*inbox).clone();
                        if next.mark_read(&id) {
                            inbox.set(next);
                        }
                        error.set(None);
                    }
                    Err(e) => error.set(Some(session.report("Marking notification as read", &e))),
                }
            });
        })
    };

    let update_filter = |change: fn(&mut NotificationFilter, String)| {
        let filter = filter.clone();
        Callback::from(move |value: String| {
            let mut next = (*filter).clone();
            change(&mut next, value);
            filter.set(next);
        })
    };

    let on_search = update_filter(|f, value| f.text = TextQuery::new(&value));
    let on_kind = update_filter(|f, value| f.kind = Criterion::from_select(&value, NotificationKind::parse));
    let on_read = update_filter(|f, value| f.read = Criterion::from_select(&value, parse_read_state));

    let visible = use_memo(((*filter).clone(), (*inbox).clone()), |(filter, inbox)| {
        filter.apply(inbox.notifications.as_slice())
    });

    let state = NotificationsState {
        inbox: (*inbox).clone(),
        visible: (*visible).clone(),
        filter: (*filter).clone(),
        loading: *loading,
        error: (*error).clone(),
    };

    let actions = UseNotificationsActions {
        mark_read,
        on_search,
        on_kind,
        on_read,
        refresh,
    };

    UseNotificationsResult { state, actions }
}
