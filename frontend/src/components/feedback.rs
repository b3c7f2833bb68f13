use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LoadingProps {
    #[prop_or(AttrValue::from("Cargando..."))]
    pub message: AttrValue,
}

#[function_component(Loading)]
pub fn loading(props: &LoadingProps) -> Html {
    html! {
        <div class="loading">
            <span class="spinner"></span>
            {&props.message}
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ErrorBannerProps {
    pub error: Option<String>,
    /// Shows a retry button when set
    #[prop_or_default]
    pub on_retry: Option<Callback<()>>,
}

#[function_component(ErrorBanner)]
pub fn error_banner(props: &ErrorBannerProps) -> Html {
    let Some(message) = &props.error else {
        return html! {};
    };

    html! {
        <div class="form-message error">
            <span>{"⚠️ "}{message}</span>
            {if let Some(on_retry) = &props.on_retry {
                let on_retry = on_retry.clone();
                html! {
                    <button class="btn btn-link" onclick={Callback::from(move |_| on_retry.emit(()))}>
                        {"Reintentar"}
                    </button>
                }
            } else { html! {} }}
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct EmptyStateProps {
    #[prop_or(AttrValue::from("Sin resultados"))]
    pub message: AttrValue,
}

#[function_component(EmptyState)]
pub fn empty_state(props: &EmptyStateProps) -> Html {
    html! {
        <div class="empty-state">
            <p>{&props.message}</p>
        </div>
    }
}
