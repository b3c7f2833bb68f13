use gloo::dialogs::confirm;
use shared::{Patient, Surgery};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::feedback::{ErrorBanner, Loading};
use super::status_badge::StatusBadge;
use super::surgery_form::SurgeryFormPanel;
use crate::domain::badges::surgery_badge;
use crate::domain::status_actions::surgery_actions;
use crate::hooks::use_surgery_detail::use_surgery_detail;
use crate::navigation::Screen;
use crate::services::date_utils::{format_duration, format_timestamp};
use crate::session::SessionContext;

#[derive(Properties, PartialEq)]
pub struct SurgeryDetailProps {
    pub session: SessionContext,
    pub surgery_id: i64,
    pub on_navigate: Callback<Screen>,
}

#[function_component(SurgeryDetail)]
pub fn surgery_detail(props: &SurgeryDetailProps) -> Html {
    let detail = use_surgery_detail(&props.session, props.surgery_id);
    let editing = use_state(|| false);
    let delete_error = use_state(|| Option::<String>::None);
    let state = &detail.state;

    let back = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(Screen::SurgeryHistory))
    };

    let toggle_edit = {
        let editing = editing.clone();
        Callback::from(move |_: MouseEvent| editing.set(!*editing))
    };

    let on_saved = {
        let editing = editing.clone();
        let refresh = detail.actions.refresh.clone();
        Callback::from(move |_| {
            editing.set(false);
            refresh.emit(());
        })
    };

    let on_cancel = {
        let editing = editing.clone();
        Callback::from(move |_| editing.set(false))
    };

    let on_delete = {
        let session = props.session.clone();
        let on_navigate = props.on_navigate.clone();
        let delete_error = delete_error.clone();
        let surgery_id = props.surgery_id;
        Callback::from(move |_: MouseEvent| {
            if !confirm(&format!("¿Eliminar la cirugía #{}?", surgery_id)) {
                return;
            }
            let session = session.clone();
            let on_navigate = on_navigate.clone();
            let delete_error = delete_error.clone();
            spawn_local(async move {
                match session.client().delete_surgery(surgery_id).await {
                    Ok(()) => {
                        log::info!("Deleted surgery {}", surgery_id);
                        on_navigate.emit(Screen::SurgeryHistory);
                    }
                    Err(e) => delete_error.set(Some(session.report("Deleting surgery", &e))),
                }
            });
        })
    };

    let error = state.error.clone().or_else(|| (*delete_error).clone());

    html! {
        <div class="screen surgery-detail">
            <div class="detail-toolbar">
                <button class="btn btn-link" onclick={back}>{"← Volver al historial"}</button>
            </div>

            <ErrorBanner {error} on_retry={detail.actions.refresh.clone()} />

            {if state.loading && state.surgery.is_none() {
                html! { <Loading message="Cargando cirugía..." /> }
            } else if let Some(surgery) = &state.surgery {
                let actions = surgery_actions(&surgery.status);
                html! {
                    <>
                        <SurgeryCard surgery={surgery.clone()} patient={state.patient.clone()} />

                        <section class="status-actions">
                            <h3>{"Cambiar estado"}</h3>
                            {if actions.is_empty() {
                                html! { <p class="muted">{"La cirugía está cerrada; su estado no puede cambiar."}</p> }
                            } else {
                                html! {
                                    <div class="button-row">
                                        {for actions.into_iter().map(|action| {
                                            let change_status = detail.actions.change_status.clone();
                                            let target = action.target.clone();
                                            html! {
                                                <button
                                                    class={action.tone.class()}
                                                    disabled={state.updating}
                                                    onclick={Callback::from(move |_: MouseEvent| change_status.emit(target.clone()))}
                                                >
                                                    {action.label}
                                                </button>
                                            }
                                        })}
                                    </div>
                                }
                            }}
                        </section>

                        <div class="button-row">
                            <button class="btn btn-secondary" onclick={toggle_edit}>
                                {if *editing { "Cerrar edición" } else { "✏️ Editar" }}
                            </button>
                            <button class="btn btn-danger" onclick={on_delete}>{"🗑️ Eliminar"}</button>
                        </div>

                        {if *editing {
                            html! {
                                <SurgeryFormPanel
                                    session={props.session.clone()}
                                    existing={Some(surgery.clone())}
                                    {on_saved}
                                    {on_cancel}
                                />
                            }
                        } else { html! {} }}
                    </>
                }
            } else {
                html! { <p class="muted">{"Cirugía no encontrada"}</p> }
            }}
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct SurgeryCardProps {
    surgery: Surgery,
    patient: Option<Patient>,
}

#[function_component(SurgeryCard)]
fn surgery_card(props: &SurgeryCardProps) -> Html {
    let surgery = &props.surgery;
    let optional = |value: &Option<String>| value.clone().unwrap_or_else(|| "—".to_string());

    html! {
        <section class="detail-card">
            <div class="detail-card-header">
                <h2>{&surgery.procedure_type}</h2>
                <StatusBadge badge={surgery_badge(&surgery.status)} />
            </div>
            <dl class="detail-grid">
                <dt>{"Inicio"}</dt>
                <dd>{format_timestamp(&surgery.scheduled_start)}</dd>
                <dt>{"Término estimado"}</dt>
                <dd>{surgery.scheduled_end.as_deref().map(format_timestamp).unwrap_or_else(|| "—".to_string())}</dd>
                <dt>{"Duración"}</dt>
                <dd>{surgery.duration_minutes.map(format_duration).unwrap_or_else(|| "—".to_string())}</dd>
                <dt>{"Pabellón"}</dt>
                <dd>{surgery.room_label()}</dd>
                <dt>{"Médico principal"}</dt>
                <dd>{surgery.physician_label()}</dd>
                <dt>{"Especialidad"}</dt>
                <dd>{optional(&surgery.specialty)}</dd>
                <dt>{"Notas preoperatorias"}</dt>
                <dd>{optional(&surgery.preop_notes)}</dd>
                <dt>{"Notas postoperatorias"}</dt>
                <dd>{optional(&surgery.postop_notes)}</dd>
            </dl>

            <h3>{"Paciente"}</h3>
            {match &props.patient {
                Some(patient) => html! {
                    <dl class="detail-grid">
                        <dt>{"Nombre"}</dt>
                        <dd>{patient.full_name()}</dd>
                        <dt>{"RUT"}</dt>
                        <dd>{&patient.rut}</dd>
                        <dt>{"Previsión"}</dt>
                        <dd>{optional(&patient.insurance)}</dd>
                        <dt>{"Teléfono"}</dt>
                        <dd>{optional(&patient.phone)}</dd>
                    </dl>
                },
                None => html! { <p>{surgery.patient_label()}</p> },
            }}
        </section>
    }
}
