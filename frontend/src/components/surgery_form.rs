use shared::{Surgery, SurgeryStatus};
use yew::prelude::*;

use super::feedback::ErrorBanner;
use super::form_fields::{SelectField, TextAreaField, TextField};
use crate::domain::forms::{FormMode, FormState, Submission, SurgeryForm};
use crate::hooks::use_form::{sender, use_form};
use crate::session::SessionContext;

#[derive(Properties, PartialEq)]
pub struct SurgeryFormPanelProps {
    pub session: SessionContext,
    /// Surgery being edited; a new one is scheduled when `None`
    #[prop_or_default]
    pub existing: Option<Surgery>,
    pub on_saved: Callback<()>,
    pub on_cancel: Callback<()>,
}

#[function_component(SurgeryFormPanel)]
pub fn surgery_form_panel(props: &SurgeryFormPanelProps) -> Html {
    let existing = props.existing.clone();
    let surgery_id = existing.as_ref().map(|s| s.id);

    let send = {
        let session = props.session.clone();
        sender::<SurgeryForm, _, _>(move |submission| {
            let client = session.client();
            async move {
                match submission {
                    Submission::Create(request) => client.create_surgery(&request).await.map(|created| {
                        log::info!("Scheduled surgery {}", created.id);
                    }),
                    Submission::Update(request) => match surgery_id {
                        Some(id) => client.update_surgery(id, &request).await.map(|_| {
                            log::info!("Updated surgery {}", id);
                        }),
                        None => Ok(()),
                    },
                }
            }
        })
    };

    let form = use_form(
        &props.session,
        move || match &existing {
            Some(surgery) => FormState::edit(SurgeryForm::from_surgery(surgery)),
            None => FormState::create(),
        },
        send,
        props.on_saved.clone(),
    );

    let values = &form.state.values;
    let editing = form.state.mode == FormMode::Edit;
    let status_options: Vec<(String, String)> = SurgeryStatus::KNOWN
        .iter()
        .map(|status| (status.as_wire().to_string(), status.label().to_string()))
        .collect();

    let on_cancel = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |_: MouseEvent| on_cancel.emit(()))
    };

    html! {
        <section class="form-panel">
            <h3>{if editing { "Editar cirugía" } else { "Programar cirugía" }}</h3>
            <ErrorBanner error={form.state.server_error.clone()} />

            <form class="surgery-form" onsubmit={form.on_submit.clone()}>
                <div class="form-row">
                    <TextField
                        label="ID paciente"
                        input_type="number"
                        required={true}
                        disabled={editing}
                        value={values.patient_id.clone()}
                        error={form.error("patient_id")}
                        on_change={form.field("patient_id", |f, v| f.patient_id = v)}
                    />
                    <TextField
                        label="ID médico principal"
                        input_type="number"
                        required={true}
                        disabled={editing}
                        value={values.physician_id.clone()}
                        error={form.error("physician_id")}
                        on_change={form.field("physician_id", |f, v| f.physician_id = v)}
                    />
                </div>
                <div class="form-row">
                    <TextField
                        label="Fecha"
                        input_type="date"
                        required={true}
                        value={values.start_date.clone()}
                        error={form.error("start_date")}
                        on_change={form.field("start_date", |f, v| f.start_date = v)}
                    />
                    <TextField
                        label="Hora de inicio"
                        input_type="time"
                        required={true}
                        value={values.start_time.clone()}
                        error={form.error("start_time")}
                        on_change={form.field("start_time", |f, v| f.start_time = v)}
                    />
                    <TextField
                        label="Duración (min)"
                        input_type="number"
                        value={values.duration_minutes.clone()}
                        error={form.error("duration_minutes")}
                        on_change={form.field("duration_minutes", |f, v| f.duration_minutes = v)}
                    />
                </div>
                <div class="form-row">
                    <TextField
                        label="Tipo de procedimiento"
                        required={true}
                        value={values.procedure_type.clone()}
                        error={form.error("procedure_type")}
                        on_change={form.field("procedure_type", |f, v| f.procedure_type = v)}
                    />
                    <TextField
                        label="Pabellón"
                        placeholder="Ej: Pabellón 1"
                        value={values.room_name.clone()}
                        on_change={form.field("room_name", |f, v| f.room_name = v)}
                    />
                    <SelectField
                        label="Estado"
                        value={values.status.as_wire().to_string()}
                        options={status_options}
                        on_change={form.field("status", |f, v| f.status = SurgeryStatus::parse(&v))}
                    />
                </div>
                <TextAreaField
                    label="Notas preoperatorias"
                    value={values.preop_notes.clone()}
                    on_change={form.field("preop_notes", |f, v| f.preop_notes = v)}
                />
                {if editing {
                    html! {
                        <TextAreaField
                            label="Notas postoperatorias"
                            value={values.postop_notes.clone()}
                            on_change={form.field("postop_notes", |f, v| f.postop_notes = v)}
                        />
                    }
                } else { html! {} }}

                <div class="form-actions">
                    <button type="button" class="btn btn-secondary" onclick={on_cancel}>{"Cancelar"}</button>
                    <button type="submit" class="btn btn-primary" disabled={form.state.submitting}>
                        {if form.state.submitting { "Guardando..." } else { "Guardar" }}
                    </button>
                </div>
            </form>
        </section>
    }
}
