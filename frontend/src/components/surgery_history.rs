use shared::{Surgery, SurgeryStatus};
use yew::prelude::*;

use super::feedback::{EmptyState, ErrorBanner, Loading};
use super::form_fields::{filter_options, SearchInput, SelectField};
use super::status_badge::StatusBadge;
use crate::domain::badges::surgery_badge;
use crate::hooks::use_surgery_history::use_surgery_history;
use crate::navigation::Screen;
use crate::services::date_utils::format_timestamp;
use crate::session::SessionContext;

#[derive(Properties, PartialEq)]
pub struct SurgeryHistoryProps {
    pub session: SessionContext,
    pub on_navigate: Callback<Screen>,
}

#[function_component(SurgeryHistory)]
pub fn surgery_history(props: &SurgeryHistoryProps) -> Html {
    let history = use_surgery_history(&props.session);
    let state = &history.state;
    let actions = &history.actions;

    let status_options = filter_options(
        "Todos los estados",
        SurgeryStatus::KNOWN.iter().map(|s| (s.as_wire(), s.label())),
    );
    let specialty_options = filter_options(
        "Todas las especialidades",
        state.specialties.iter().map(|s| (s.as_str(), s.as_str())),
    );
    let room_options = filter_options(
        "Todos los pabellones",
        state.rooms.iter().map(|r| (r.as_str(), r.as_str())),
    );
    let physician_ids: Vec<(String, &str)> = state
        .physicians
        .iter()
        .map(|(id, label)| (id.to_string(), label.as_str()))
        .collect();
    let physician_options = filter_options(
        "Todos los médicos",
        physician_ids.iter().map(|(id, label)| (id.as_str(), *label)),
    );

    html! {
        <div class="screen surgery-history">
            <div class="filters">
                <SearchInput
                    placeholder="Buscar por paciente, médico o procedimiento..."
                    on_search={actions.on_search.clone()}
                />
                <SelectField
                    label="Estado"
                    value={state.filter.status.select_value(|s| s.as_wire().to_string())}
                    options={status_options}
                    on_change={actions.on_status.clone()}
                />
                <SelectField
                    label="Especialidad"
                    value={state.filter.specialty.select_value(|s| s.clone())}
                    options={specialty_options}
                    on_change={actions.on_specialty.clone()}
                />
                <SelectField
                    label="Pabellón"
                    value={state.filter.room.select_value(|r| r.clone())}
                    options={room_options}
                    on_change={actions.on_room.clone()}
                />
                <SelectField
                    label="Médico"
                    value={state.filter.physician.select_value(|id| id.to_string())}
                    options={physician_options}
                    on_change={actions.on_physician.clone()}
                />
            </div>

            <ErrorBanner error={state.error.clone()} on_retry={actions.refresh.clone()} />

            {if state.loading {
                html! { <Loading message="Cargando historial..." /> }
            } else if state.visible.is_empty() {
                html! { <EmptyState /> }
            } else {
                html! {
                    <>
                        <p class="list-count">
                            {format!("{} de {} cirugías", state.visible.len(), state.surgeries.len())}
                        </p>
                        <table class="data-table">
                            <thead>
                                <tr>
                                    <th>{"Fecha"}</th>
                                    <th>{"Paciente"}</th>
                                    <th>{"Procedimiento"}</th>
                                    <th>{"Médico"}</th>
                                    <th>{"Pabellón"}</th>
                                    <th>{"Especialidad"}</th>
                                    <th>{"Estado"}</th>
                                    <th></th>
                                </tr>
                            </thead>
                            <tbody>
                                {for state.visible.iter().map(|surgery| html! {
                                    <HistoryRow surgery={surgery.clone()} on_navigate={props.on_navigate.clone()} />
                                })}
                            </tbody>
                        </table>
                    </>
                }
            }}
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct HistoryRowProps {
    surgery: Surgery,
    on_navigate: Callback<Screen>,
}

#[function_component(HistoryRow)]
fn history_row(props: &HistoryRowProps) -> Html {
    let surgery = &props.surgery;
    let open = {
        let on_navigate = props.on_navigate.clone();
        let surgery_id = surgery.id;
        Callback::from(move |_: MouseEvent| on_navigate.emit(Screen::SurgeryDetail { surgery_id }))
    };

    html! {
        <tr>
            <td>{format_timestamp(&surgery.scheduled_start)}</td>
            <td>{surgery.patient_label()}</td>
            <td>{&surgery.procedure_type}</td>
            <td>{surgery.physician_label()}</td>
            <td>{surgery.room_label()}</td>
            <td>{surgery.specialty.clone().unwrap_or_else(|| "—".to_string())}</td>
            <td><StatusBadge badge={surgery_badge(&surgery.status)} /></td>
            <td><button class="btn btn-link" onclick={open}>{"Ver detalle"}</button></td>
        </tr>
    }
}
