use yew::prelude::*;

use super::layout::Layout;
use super::login::Login;
use crate::config::AppConfig;
use crate::session::{SessionContext, SessionProvider};

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub config: AppConfig,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    html! {
        <SessionProvider config={props.config.clone()}>
            <Shell />
        </SessionProvider>
    }
}

/// Login screen until a token exists, the application afterwards
#[function_component(Shell)]
fn shell() -> Html {
    let Some(session) = use_context::<SessionContext>() else {
        log::error!("Session context missing");
        return html! { <div class="form-message error">{"Error al iniciar la aplicación"}</div> };
    };

    if session.session().is_authenticated() {
        html! { <Layout {session} /> }
    } else {
        html! { <Login {session} /> }
    }
}
