use shared::INSURANCE_OPTIONS;
use yew::prelude::*;

use super::feedback::ErrorBanner;
use super::form_fields::{SelectField, TextField};
use crate::domain::forms::{FormState, PatientForm, Submission};
use crate::hooks::use_form::{sender, use_form};
use crate::session::SessionContext;

#[derive(Properties, PartialEq)]
pub struct PatientIntakeProps {
    pub session: SessionContext,
}

/// Intake screen; the form is remounted empty after every saved patient
#[function_component(PatientIntake)]
pub fn patient_intake(props: &PatientIntakeProps) -> Html {
    let generation = use_state(|| 0u32);
    let saved = use_state(|| false);

    let on_saved = {
        let generation = generation.clone();
        let saved = saved.clone();
        Callback::from(move |_| {
            generation.set(*generation + 1);
            saved.set(true);
        })
    };

    let on_edit = {
        let saved = saved.clone();
        Callback::from(move |_| saved.set(false))
    };

    html! {
        <div class="screen patient-intake">
            {if *saved {
                html! { <div class="form-message success">{"✅ Paciente registrado correctamente"}</div> }
            } else { html! {} }}
            <PatientIntakeForm
                key={*generation}
                session={props.session.clone()}
                {on_saved}
                {on_edit}
            />
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct PatientIntakeFormProps {
    session: SessionContext,
    on_saved: Callback<()>,
    /// Fired on the first keystroke so a stale success message disappears
    on_edit: Callback<()>,
}

#[function_component(PatientIntakeForm)]
fn patient_intake_form(props: &PatientIntakeFormProps) -> Html {
    let send = {
        let session = props.session.clone();
        sender::<PatientForm, _, _>(move |submission| {
            let client = session.client();
            async move {
                match submission {
                    Submission::Create(request) => client.create_patient(&request).await.map(|patient| {
                        log::info!("Registered patient {}", patient.id);
                    }),
                    Submission::Update(_) => {
                        log::warn!("Patient intake only registers new patients");
                        Ok(())
                    }
                }
            }
        })
    };

    let form = use_form(&props.session, FormState::<PatientForm>::create, send, props.on_saved.clone());
    let values = &form.state.values;

    let field = |name: &'static str, set: fn(&mut PatientForm, String)| {
        let update = form.field(name, set);
        let on_edit = props.on_edit.clone();
        Callback::from(move |value: String| {
            on_edit.emit(());
            update.emit(value);
        })
    };

    let insurance_options: Vec<(String, String)> = INSURANCE_OPTIONS
        .iter()
        .map(|option| (option.to_string(), option.to_string()))
        .collect();

    html! {
        <section class="form-panel">
            <h2>{"🧑‍⚕️ Registro de paciente"}</h2>
            <ErrorBanner error={form.state.server_error.clone()} />

            <form class="patient-form" onsubmit={form.on_submit.clone()}>
                <div class="form-row">
                    <TextField
                        label="Nombre"
                        required={true}
                        value={values.first_name.clone()}
                        error={form.error("first_name")}
                        on_change={field("first_name", |f, v| f.first_name = v)}
                    />
                    <TextField
                        label="Apellido"
                        required={true}
                        value={values.last_name.clone()}
                        error={form.error("last_name")}
                        on_change={field("last_name", |f, v| f.last_name = v)}
                    />
                </div>
                <div class="form-row">
                    <TextField
                        label="RUT"
                        required={true}
                        placeholder="12.345.678-9"
                        value={values.rut.clone()}
                        error={form.error("rut")}
                        on_change={field("rut", |f, v| f.rut = v)}
                    />
                    <TextField
                        label="Fecha de nacimiento"
                        input_type="date"
                        required={true}
                        value={values.birth_date.clone()}
                        error={form.error("birth_date")}
                        on_change={field("birth_date", |f, v| f.birth_date = v)}
                    />
                </div>
                <div class="form-row">
                    <TextField
                        label="Teléfono"
                        input_type="tel"
                        value={values.phone.clone()}
                        on_change={field("phone", |f, v| f.phone = v)}
                    />
                    <TextField
                        label="Correo electrónico"
                        input_type="email"
                        value={values.email.clone()}
                        error={form.error("email")}
                        on_change={field("email", |f, v| f.email = v)}
                    />
                </div>
                <TextField
                    label="Dirección"
                    value={values.address.clone()}
                    on_change={field("address", |f, v| f.address = v)}
                />
                <div class="form-row">
                    <SelectField
                        label="Previsión"
                        placeholder="Seleccione..."
                        value={values.insurance.clone()}
                        options={insurance_options}
                        on_change={field("insurance", |f, v| f.insurance = v)}
                    />
                    <TextField
                        label="N° ficha clínica"
                        value={values.record_number.clone()}
                        on_change={field("record_number", |f, v| f.record_number = v)}
                    />
                </div>

                <div class="form-actions">
                    <button type="submit" class="btn btn-primary" disabled={form.state.submitting}>
                        {if form.state.submitting { "Registrando..." } else { "Registrar paciente" }}
                    </button>
                </div>
            </form>
        </section>
    }
}
