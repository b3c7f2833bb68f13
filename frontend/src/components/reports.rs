use yew::prelude::*;

use super::feedback::{ErrorBanner, Loading};
use super::status_chart::StatusChart;
use crate::domain::reports::{chart_bars, format_percent, KpiSummary};
use crate::hooks::use_report::use_report;
use crate::session::SessionContext;

#[derive(Properties, PartialEq)]
pub struct ReportsProps {
    pub session: SessionContext,
}

#[function_component(Reports)]
pub fn reports(props: &ReportsProps) -> Html {
    let report = use_report(&props.session);
    let state = &report.state;

    let refresh = {
        let refresh = report.refresh.clone();
        Callback::from(move |_: MouseEvent| refresh.emit(()))
    };

    html! {
        <div class="screen reports">
            <div class="screen-toolbar">
                <button class="btn btn-secondary" onclick={refresh}>{"↻ Actualizar"}</button>
            </div>

            <ErrorBanner error={state.error.clone()} on_retry={report.refresh.clone()} />

            {match &state.report {
                None if state.loading => html! { <Loading message="Cargando reporte..." /> },
                None => html! {},
                Some(data) => {
                    let kpis = KpiSummary::from_report(data);
                    html! {
                        <>
                            <div class="kpi-grid">
                                <KpiCard title="Cirugías totales" value={kpis.total_surgeries.to_string()} />
                                <KpiCard title="Completadas" value={kpis.completed.to_string()} />
                                <KpiCard title="Canceladas" value={kpis.cancelled.to_string()} />
                                <KpiCard title="Tasa de completitud" value={format_percent(kpis.completion_rate)} />
                                <KpiCard title="Tasa de cancelación" value={format_percent(kpis.cancellation_rate)} />
                                <KpiCard title="Pacientes" value={kpis.total_patients.to_string()} />
                                <KpiCard title="Personal" value={kpis.total_staff.to_string()} />
                            </div>
                            <StatusChart bars={chart_bars(data)} loading={state.loading} />
                        </>
                    }
                }
            }}
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct KpiCardProps {
    pub title: AttrValue,
    pub value: String,
}

#[function_component(KpiCard)]
pub fn kpi_card(props: &KpiCardProps) -> Html {
    html! {
        <div class="kpi-card">
            <span class="kpi-title">{&props.title}</span>
            <span class="kpi-value">{&props.value}</span>
        </div>
    }
}
