use shared::{Surgery, SurgeryListQuery, SurgeryStatus};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::domain::filters::{
    distinct_physicians, distinct_values, physician_criterion, Criterion, ListFilter, SurgeryFilter,
    TextQuery,
};
use crate::session::SessionContext;

#[derive(Clone, PartialEq)]
pub struct SurgeryHistoryState {
    pub surgeries: Vec<Surgery>,
    pub visible: Vec<Surgery>,
    pub filter: SurgeryFilter,
    pub specialties: Vec<String>,
    pub rooms: Vec<String>,
    pub physicians: Vec<(i64, String)>,
    pub loading: bool,
    pub error: Option<String>,
}

pub struct UseSurgeryHistoryResult {
    pub state: SurgeryHistoryState,
    pub actions: UseSurgeryHistoryActions,
}

#[derive(Clone)]
pub struct UseSurgeryHistoryActions {
    pub on_search: Callback<String>,
    pub on_status: Callback<String>,
    pub on_specialty: Callback<String>,
    pub on_room: Callback<String>,
    pub on_physician: Callback<String>,
    pub refresh: Callback<()>,
}

#[hook]
pub fn use_surgery_history(session: &SessionContext) -> UseSurgeryHistoryResult {
    let surgeries = use_state(Vec::<Surgery>::new);
    let filter = use_state(SurgeryFilter::default);
    let loading = use_state(|| true);
    let error = use_state(|| Option::<String>::None);

    let refresh = {
        let session = session.clone();
        let surgeries = surgeries.clone();
        let loading = loading.clone();
        let error = error.clone();

        use_callback((), move |_: (), _| {
            let session = session.clone();
            let surgeries = surgeries.clone();
            let loading = loading.clone();
            let error = error.clone();
            let query = SurgeryListQuery::default().with_limit(session.config().page_size);

            spawn_local(async move {
                loading.set(true);
                match session.client().list_surgeries(&query).await {
                    Ok(response) => {
                        surgeries.set(response.surgeries);
                        error.set(None);
                    }
                    Err(e) => error.set(Some(session.report("Loading surgery history", &e))),
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

    let update_filter = |change: fn(&mut SurgeryFilter, String)| {
        let filter = filter.clone();
        Callback::from(move |value: String| {
            let mut next = (*filter).clone();
            change(&mut next, value);
            filter.set(next);
        })
    };

    let on_search = update_filter(|f, value| f.text = TextQuery::new(&value));
    let on_status = update_filter(|f, value| f.status = Criterion::from_select(&value, SurgeryStatus::parse));
    let on_specialty = update_filter(|f, value| f.specialty = Criterion::from_select(&value, str::to_string));
    let on_room = update_filter(|f, value| f.room = Criterion::from_select(&value, str::to_string));
    let on_physician = update_filter(|f, value| f.physician = physician_criterion(&value));

    let visible = use_memo(((*filter).clone(), (*surgeries).clone()), |(filter, surgeries)| {
        filter.apply(surgeries.as_slice())
    });

    let state = SurgeryHistoryState {
        specialties: distinct_values(surgeries.as_slice(), |s| s.specialty.clone()),
        rooms: distinct_values(surgeries.as_slice(), |s| s.room_name.clone()),
        physicians: distinct_physicians(surgeries.as_slice()),
        visible: (*visible).clone(),
        surgeries: (*surgeries).clone(),
        filter: (*filter).clone(),
        loading: *loading,
        error: (*error).clone(),
    };

    let actions = UseSurgeryHistoryActions {
        on_search,
        on_status,
        on_specialty,
        on_room,
        on_physician,
        refresh,
    };

    UseSurgeryHistoryResult { state, actions }
}
