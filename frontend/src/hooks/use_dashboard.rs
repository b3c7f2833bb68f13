use shared::SurgeryListQuery;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::domain::dashboard::DashboardSummary;
use crate::domain::week_grid::fetch_range;
use crate::services::date_utils::today;
use crate::session::SessionContext;

#[derive(Clone, PartialEq)]
pub struct DashboardState {
    pub summary: Option<DashboardSummary>,
    pub loading: bool,
    /// Messages from the sources that failed; the others still render
    pub errors: Vec<String>,
}

pub struct UseDashboardResult {
    pub state: DashboardState,
    pub refresh: Callback<()>,
}

#[hook]
pub fn use_dashboard(session: &SessionContext) -> UseDashboardResult {
    let summary = use_state(|| Option::<DashboardSummary>::None);
    let loading = use_state(|| true);
    let errors = use_state(Vec::<String>::new);

    let refresh = {
        let session = session.clone();
        let summary = summary.clone();
        let loading = loading.clone();
        let errors = errors.clone();

        use_callback((), move |_: (), _| {
            let session = session.clone();
            let summary = summary.clone();
            let loading = loading.clone();
            let errors = errors.clone();

            spawn_local(async move {
                loading.set(true);
                let client = session.client();
                let day = today();
                let (from, to) = fetch_range(day);
                let mut failures = Vec::new();

                let query = SurgeryListQuery::between(from, to).with_limit(session.config().page_size);
                let surgeries = match client.list_surgeries(&query).await {
                    Ok(response) => response.surgeries,
                    Err(e) => {
                        failures.push(session.report("Loading today's surgeries", &e));
                        Vec::new()
                    }
                };
                let rooms = match client.list_room_cleaning().await {
                    Ok(response) => response.rooms,
                    Err(e) => {
                        failures.push(session.report("Loading rooms", &e));
                        Vec::new()
                    }
                };
                let unread = match client.list_notifications(session.config().notification_limit).await {
                    Ok(response) => response.unread_total,
                    Err(e) => {
                        failures.push(session.report("Loading notifications", &e));
                        0
                    }
                };

                summary.set(Some(DashboardSummary::build(day, &surgeries, &rooms, unread)));
                errors.set(failures);
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

    UseDashboardResult {
        state: DashboardState {
            summary: (*summary).clone(),
            loading: *loading,
            errors: (*errors).clone(),
        },
        refresh,
    }
}
