use shared::{CleaningStatus, RoomCleaningState, RoomCleaningUpdateRequest};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::domain::filters::{CleaningFilter, Criterion, ListFilter};
use crate::domain::status_actions::can_change_cleaning;
use crate::session::SessionContext;

#[derive(Clone, PartialEq)]
pub struct CleaningState {
    pub rooms: Vec<RoomCleaningState>,
    pub visible: Vec<RoomCleaningState>,
    pub filter: CleaningFilter,
    pub loading: bool,
    /// Room whose status change is in flight
    pub updating: Option<String>,
    pub error: Option<String>,
}

pub struct UseCleaningResult {
    pub state: CleaningState,
    pub actions: UseCleaningActions,
}

#[derive(Clone)]
pub struct UseCleaningActions {
    pub change_status: Callback<(String, CleaningStatus)>,
    pub on_status_filter: Callback<String>,
    pub refresh: Callback<()>,
}

#[hook]
pub fn use_cleaning(session: &SessionContext) -> UseCleaningResult {
    let rooms = use_state(Vec::<RoomCleaningState>::new);
    let filter = use_state(CleaningFilter::default);
    let loading = use_state(|| true);
    let updating = use_state(|| Option::<String>::None);
    let error = use_state(|| Option::<String>::None);

    let refresh = {
        let session = session.clone();
        let rooms = rooms.clone();
        let loading = loading.clone();
        let error = error.clone();

        use_callback((), move |_: (), _| {
            let session = session.clone();
            let rooms = rooms.clone();
            let loading = loading.clone();
            let error = error.clone();

            spawn_local(async move {
                loading.set(true);
                match session.client().list_room_cleaning().await {
                    Ok(response) => {
                        rooms.set(response.rooms);
                        error.set(None);
                    }
                    Err(e) => error.set(Some(session.report("Loading room cleaning status", &e))),
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

    let change_status = {
        let session = session.clone();
        let rooms = rooms.clone();
        let updating = updating.clone();
        let error = error.clone();

        Callback::from(move |(room_name, target): (String, CleaningStatus)| {
            let Some(room) = rooms.iter().find(|r| r.room_name == room_name).cloned() else {
                log::warn!("Unknown room {}", room_name);
                return;
            };
            if !can_change_cleaning(&room.status, &target) {
                log::warn!("Ignoring {} -> {} for {}", room.status, target, room_name);
                return;
            }

            let session = session.clone();
            let rooms = rooms.clone();
            let updating = updating.clone();
            let error = error.clone();
            spawn_local(async move {
                updating.set(Some(room_name.clone()));
                let request = RoomCleaningUpdateRequest {
                    status: Some(target),
                    notes: None,
                };
                match session.client().update_room_cleaning(&room_name, &request).await {
                    Ok(updated) => {
                        log::info!("{} is now {}", updated.room_name, updated.status);
                        let next = replace_room((*rooms).clone(), updated);
                        rooms.set(next);
                        error.set(None);
                    }
                    Err(e) => error.set(Some(session.report("Changing cleaning status", &e))),
                }
                updating.set(None);
            });
        })
    };

    let on_status_filter = {
        let filter = filter.clone();
        Callback::from(move |value: String| {
            filter.set(CleaningFilter {
                status: Criterion::from_select(&value, CleaningStatus::parse),
            });
        })
    };

    let visible = use_memo(((*filter).clone(), (*rooms).clone()), |(filter, rooms)| {
        filter.apply(rooms.as_slice())
    });

    let state = CleaningState {
        rooms: (*rooms).clone(),
        visible: (*visible).clone(),
        filter: (*filter).clone(),
        loading: *loading,
        updating: (*updating).clone(),
        error: (*error).clone(),
    };

    let actions = UseCleaningActions {
        change_status,
        on_status_filter,
        refresh,
    };

    UseCleaningResult { state, actions }
}

/// Swap in the backend's copy of a room, keeping list order
pub fn replace_room(mut rooms: Vec<RoomCleaningState>, updated: RoomCleaningState) -> Vec<RoomCleaningState> {
    match rooms.iter_mut().find(|r| r.room_name == updated.room_name) {
        Some(slot) => *slot = updated,
        None => rooms.push(updated),
    }
    rooms
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room(name: &str, status: CleaningStatus) -> RoomCleaningState {
        RoomCleaningState {
            room_name: name.to_string(),
            status,
            occupied_until: None,
            last_cleaned: None,
            notes: None,
            room_id: None,
        }
    }

    #[test]
    fn test_replace_room_keeps_order() {
        let rooms = vec![
            room("Pabellón 1", CleaningStatus::PendingCleaning),
            room("Pabellón 2", CleaningStatus::Available),
        ];
        let updated = replace_room(rooms, room("Pabellón 1", CleaningStatus::InCleaning));
        assert_eq!(updated[0].status, CleaningStatus::InCleaning);
        assert_eq!(updated[1].room_name, "Pabellón 2");
        assert_eq!(updated.len(), 2);
    }
}
