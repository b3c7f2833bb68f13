use shared::LoginCredentials;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::feedback::ErrorBanner;
use super::form_fields::TextField;
use crate::session::SessionContext;

#[derive(Properties, PartialEq)]
pub struct LoginProps {
    pub session: SessionContext,
}

#[function_component(Login)]
pub fn login(props: &LoginProps) -> Html {
    let email = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(|| Option::<String>::None);
    let submitting = use_state(|| false);

    let on_email = {
        let email = email.clone();
        Callback::from(move |value: String| email.set(value))
    };
    let on_password = {
        let password = password.clone();
        Callback::from(move |value: String| password.set(value))
    };

    let on_submit = {
        let session = props.session.clone();
        let email = email.clone();
        let password = password.clone();
        let error = error.clone();
        let submitting = submitting.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }
            if email.trim().is_empty() || password.is_empty() {
                error.set(Some("Ingrese correo y contraseña".to_string()));
                return;
            }

            let credentials = LoginCredentials {
                email: email.trim().to_string(),
                password: (*password).clone(),
            };
            let session = session.clone();
            let error = error.clone();
            let submitting = submitting.clone();
            spawn_local(async move {
                submitting.set(true);
                match session.client().login(&credentials).await {
                    Ok(response) => {
                        log::info!("Signed in as {}", credentials.email);
                        error.set(None);
                        submitting.set(false);
                        session.login(&response);
                    }
                    Err(e) => {
                        log::warn!("Login rejected: {}", e);
                        error.set(Some(e.user_message()));
                        submitting.set(false);
                    }
                }
            });
        })
    };

    html! {
        <div class="login-screen">
            <form class="login-card" onsubmit={on_submit}>
                <h1>{"🏥 Gestión de Pabellones"}</h1>
                <p class="muted">{"Ingrese sus credenciales para continuar"}</p>
                <ErrorBanner error={(*error).clone()} />
                <TextField label="Correo electrónico" input_type="email" value={(*email).clone()} on_change={on_email} />
                <TextField label="Contraseña" input_type="password" value={(*password).clone()} on_change={on_password} />
                <button type="submit" class="btn btn-primary btn-block" disabled={*submitting}>
                    {if *submitting { "Ingresando..." } else { "Ingresar" }}
                </button>
            </form>
        </div>
    }
}
