use chrono::NaiveDate;
use shared::{Surgery, SurgeryListQuery};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::domain::filters::{distinct_values, Criterion, SurgeryFilter};
use crate::domain::week_grid::{build_week_grid, fetch_range, next_week, previous_week, WeekGrid};
use crate::services::date_utils::today;
use crate::session::SessionContext;

#[derive(Clone, PartialEq)]
pub struct WeekScheduleState {
    pub week_of: NaiveDate,
    pub grid: WeekGrid,
    pub filter: SurgeryFilter,
    pub rooms: Vec<String>,
    pub specialties: Vec<String>,
    pub loading: bool,
    pub error: Option<String>,
}

pub struct UseWeekScheduleResult {
    pub state: WeekScheduleState,
    pub actions: UseWeekScheduleActions,
}

#[derive(Clone)]
pub struct UseWeekScheduleActions {
    pub prev_week: Callback<MouseEvent>,
    pub next_week: Callback<MouseEvent>,
    pub this_week: Callback<MouseEvent>,
    pub on_room: Callback<String>,
    pub on_specialty: Callback<String>,
    pub refresh: Callback<()>,
}

#[hook]
pub fn use_week_schedule(session: &SessionContext, initial_week: NaiveDate) -> UseWeekScheduleResult {
    let week_of = use_state(|| initial_week);
    let surgeries = use_state(Vec::<Surgery>::new);
    let filter = use_state(SurgeryFilter::default);
    let loading = use_state(|| true);
    let error = use_state(|| Option::<String>::None);

    let refresh = {
        let session = session.clone();
        let surgeries = surgeries.clone();
        let loading = loading.clone();
        let error = error.clone();

        use_callback(*week_of, move |_: (), week_of| {
            let session = session.clone();
            let surgeries = surgeries.clone();
            let loading = loading.clone();
            let error = error.clone();
            let (from, to) = fetch_range(*week_of);
            let query = SurgeryListQuery::between(from, to).with_limit(session.config().page_size);

            spawn_local(async move {
                loading.set(true);
                match session.client().list_surgeries(&query).await {
                    Ok(response) => {
                        log::debug!("Loaded {} surgeries for {}..{}", response.surgeries.len(), from, to);
                        surgeries.set(response.surgeries);
                        error.set(None);
                    }
                    Err(e) => {
                        error.set(Some(session.report("Loading the week schedule", &e)));
                    }
                }
                loading.set(false);
            });
        })
    };

    // Reload whenever the displayed week changes
    use_effect_with(*week_of, {
        let refresh = refresh.clone();
        move |_| {
            refresh.emit(());
            || ()
        }
    });

    let prev_week = {
        let week_of = week_of.clone();
        Callback::from(move |_: MouseEvent| week_of.set(previous_week(*week_of)))
    };

    let next_week = {
        let week_of = week_of.clone();
        Callback::from(move |_: MouseEvent| week_of.set(next_week(*week_of)))
    };

    let this_week = {
        let week_of = week_of.clone();
        Callback::from(move |_: MouseEvent| week_of.set(today()))
    };

    let on_room = {
        let filter = filter.clone();
        Callback::from(move |value: String| {
            filter.set(SurgeryFilter {
                room: Criterion::from_select(&value, str::to_string),
                ..(*filter).clone()
            })
        })
    };

    let on_specialty = {
        let filter = filter.clone();
        Callback::from(move |value: String| {
            filter.set(SurgeryFilter {
                specialty: Criterion::from_select(&value, str::to_string),
                ..(*filter).clone()
            })
        })
    };

    let grid = use_memo(
        (*week_of, (*surgeries).clone(), (*filter).clone()),
        |(week_of, surgeries, filter)| build_week_grid(*week_of, surgeries, filter),
    );

    let state = WeekScheduleState {
        week_of: *week_of,
        grid: (*grid).clone(),
        filter: (*filter).clone(),
        rooms: distinct_values(surgeries.as_slice(), |s| s.room_name.clone()),
        specialties: distinct_values(surgeries.as_slice(), |s| s.specialty.clone()),
        loading: *loading,
        error: (*error).clone(),
    };

    let actions = UseWeekScheduleActions {
        prev_week,
        next_week,
        this_week,
        on_room,
        on_specialty,
        refresh,
    };

    UseWeekScheduleResult { state, actions }
}
