use shared::CleaningStatus;
use yew::prelude::*;

use super::feedback::{EmptyState, Loading};
use super::reports::KpiCard;
use super::status_badge::StatusBadge;
use crate::domain::badges::{cleaning_badge, surgery_badge};
use crate::hooks::use_dashboard::use_dashboard;
use crate::navigation::Screen;
use crate::services::date_utils::{format_long_date, format_time};
use crate::session::SessionContext;

#[derive(Properties, PartialEq)]
pub struct DashboardProps {
    pub session: SessionContext,
    pub on_navigate: Callback<Screen>,
}

#[function_component(Dashboard)]
pub fn dashboard(props: &DashboardProps) -> Html {
    let dashboard = use_dashboard(&props.session);
    let state = &dashboard.state;

    let go = |screen: Screen| {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(screen.clone()))
    };

    let Some(summary) = &state.summary else {
        return html! { <Loading message="Cargando resumen..." /> };
    };

    html! {
        <div class="screen dashboard">
            <h2 class="dashboard-date">{format_long_date(summary.today)}</h2>

            {for state.errors.iter().map(|message| html! {
                <div class="form-message error">{"⚠️ "}{message}</div>
            })}

            <div class="kpi-grid">
                <KpiCard title="Cirugías hoy" value={summary.todays_surgeries.len().to_string()} />
                <KpiCard
                    title="Pabellones disponibles"
                    value={summary.rooms_in(&CleaningStatus::Available).to_string()}
                />
                <KpiCard
                    title="Pendientes de limpieza"
                    value={summary.rooms_in(&CleaningStatus::PendingCleaning).to_string()}
                />
                <KpiCard title="Notificaciones sin leer" value={summary.unread_notifications.to_string()} />
            </div>

            <div class="dashboard-columns">
                <section class="dashboard-panel">
                    <div class="panel-header">
                        <h3>{"Cirugías de hoy"}</h3>
                        <button class="btn btn-link" onclick={go(Screen::Schedule { week_of: summary.today })}>
                            {"Ver agenda"}
                        </button>
                    </div>
                    {if state.loading {
                        html! { <Loading /> }
                    } else if summary.todays_surgeries.is_empty() {
                        html! { <EmptyState message="No hay cirugías programadas para hoy" /> }
                    } else {
                        html! {
                            <ul class="today-list">
                                {for summary.todays_surgeries.iter().map(|item| {
                                    let surgery = &item.surgery;
                                    html! {
                                        <li key={surgery.id} onclick={go(Screen::SurgeryDetail { surgery_id: surgery.id })}>
                                            <span class="today-time">{format_time(item.start.wall)}</span>
                                            <span class="today-title">{&surgery.procedure_type}</span>
                                            <span class="today-meta">{format!("{} · {}", surgery.patient_label(), surgery.room_label())}</span>
                                            <StatusBadge badge={surgery_badge(&surgery.status)} />
                                        </li>
                                    }
                                })}
                            </ul>
                        }
                    }}
                </section>

                <section class="dashboard-panel">
                    <div class="panel-header">
                        <h3>{"Estado de pabellones"}</h3>
                        <button class="btn btn-link" onclick={go(Screen::Cleaning)}>{"Panel limpieza"}</button>
                    </div>
                    <ul class="room-summary">
                        {for summary.rooms_by_status.iter().map(|(status, count)| html! {
                            <li>
                                <StatusBadge badge={cleaning_badge(status)} />
                                <span class="room-count">{count.to_string()}</span>
                            </li>
                        })}
                    </ul>
                </section>
            </div>
        </div>
    }
}
