use shared::GeneralReport;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::session::SessionContext;

#[derive(Clone, PartialEq)]
pub struct ReportState {
    pub report: Option<GeneralReport>,
    pub loading: bool,
    pub error: Option<String>,
}

pub struct UseReportResult {
    pub state: ReportState,
    pub refresh: Callback<()>,
}

#[hook]
pub fn use_report(session: &SessionContext) -> UseReportResult {
    let report = use_state(|| Option::<GeneralReport>::None);
    let loading = use_state(|| true);
    let error = use_state(|| Option::<String>::None);

    let refresh = {
        let session = session.clone();
        let report = report.clone();
        let loading = loading.clone();
        let error = error.clone();

        use_callback((), move |_: (), _| {
            let session = session.clone();
            let report = report.clone();
            let loading = loading.clone();
            let error = error.clone();

            spawn_local(async move {
                loading.set(true);
                match session.client().general_report().await {
                    Ok(data) => {
                        report.set(Some(data));
                        error.set(None);
                    }
                    Err(e) => error.set(Some(session.report("Loading the general report", &e))),
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

    UseReportResult {
        state: ReportState {
            report: (*report).clone(),
            loading: *loading,
            error: (*error).clone(),
        },
        refresh,
    }
}
