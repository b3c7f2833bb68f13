use gloo::dialogs::confirm;
use shared::{UserAccount, UserRole, UserUpdateRequest};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::domain::filters::{parse_active_state, Criterion, ListFilter, TextQuery, UserFilter};
use crate::session::SessionContext;

#[derive(Clone, PartialEq)]
pub struct UsersState {
    pub users: Vec<UserAccount>,
    pub visible: Vec<UserAccount>,
    pub filter: UserFilter,
    pub loading: bool,
    pub error: Option<String>,
}

pub struct UseUsersResult {
    pub state: UsersState,
    pub actions: UseUsersActions,
}

#[derive(Clone)]
pub struct UseUsersActions {
    pub toggle_active: Callback<i64>,
    pub delete: Callback<i64>,
    pub on_search: Callback<String>,
    pub on_role: Callback<String>,
    pub on_active: Callback<String>,
    pub refresh: Callback<()>,
}

#[hook]
pub fn use_users(session: &SessionContext) -> UseUsersResult {
    let users = use_state(Vec::<UserAccount>::new);
    let filter = use_state(UserFilter::default);
    let loading = use_state(|| true);
    let error = use_state(|| Option::<String>::None);

    let refresh = {
        let session = session.clone();
        let users = users.clone();
        let loading = loading.clone();
        let error = error.clone();

        use_callback((), move |_: (), _| {
            let session = session.clone();
            let users = users.clone();
            let loading = loading.clone();
            let error = error.clone();
            let limit = session.config().page_size;

            spawn_local(async move {
                loading.set(true);
                match session.client().list_users(0, limit).await {
                    Ok(response) => {
                        users.set(response.users);
                        error.set(None);
                    }
                    Err(e) => error.set(Some(session.report("Loading users", &e))),
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

    let toggle_active = {
        let session = session.clone();
        let users = users.clone();
        let error = error.clone();

        Callback::from(move |user_id: i64| {
            let Some(user) = users.iter().find(|u| u.id == user_id).cloned() else {
                return;
            };
            let session = session.clone();
            let users = users.clone();
            let error = error.clone();

            spawn_local(async move {
                let request = UserUpdateRequest::set_active(!user.active);
                match session.client().update_user(user.id, &request).await {
                    Ok(updated) => {
                        log::info!("User {} active={}", updated.id, updated.active);
                        let next = users
                            .iter()
                            .map(|u| if u.id == updated.id { updated.clone() } else { u.clone() })
                            .collect();
                        users.set(next);
                        error.set(None);
                    }
                    Err(e) => error.set(Some(session.report("Toggling user state", &e))),
                }
            });
        })
    };

    let delete = {
        let session = session.clone();
        let error = error.clone();
        let refresh = refresh.clone();
        let users = users.clone();

        Callback::from(move |user_id: i64| {
            let name = users
                .iter()
                .find(|u| u.id == user_id)
                .map(|u| u.full_name())
                .unwrap_or_else(|| format!("#{}", user_id));
            if !confirm(&format!("¿Eliminar al usuario {}? Esta acción no se puede deshacer.", name)) {
                return;
            }

            let session = session.clone();
            let error = error.clone();
            let refresh = refresh.clone();
            spawn_local(async move {
                match session.client().delete_user(user_id).await {
                    Ok(()) => {
                        log::info!("Deleted user {}", user_id);
                        refresh.emit(());
                    }
                    Err(e) => error.set(Some(session.report("Deleting user", &e))),
                }
            });
        })
    };

    let update_filter = |change: fn(&mut UserFilter, String)| {
        let filter = filter.clone();
        Callback::from(move |value: String| {
            let mut next = (*filter).clone();
            change(&mut next, value);
            filter.set(next);
        })
    };

    let on_search = update_filter(|f, value| f.text = TextQuery::new(&value));
    let on_role = update_filter(|f, value| f.role = Criterion::from_select(&value, UserRole::parse));
    let on_active = update_filter(|f, value| f.active = Criterion::from_select(&value, parse_active_state));

    let visible = use_memo(((*filter).clone(), (*users).clone()), |(filter, users)| {
        filter.apply(users.as_slice())
    });

    let state = UsersState {
        users: (*users).clone(),
        visible: (*visible).clone(),
        filter: (*filter).clone(),
        loading: *loading,
        error: (*error).clone(),
    };

    let actions = UseUsersActions {
        toggle_active,
        delete,
        on_search,
        on_role,
        on_active,
        refresh,
    };

    UseUsersResult { state, actions }
}
