use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub title: String,
    pub display_name: Option<String>,
    pub on_logout: Callback<()>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let on_logout = {
        let on_logout = props.on_logout.clone();
        Callback::from(move |_: MouseEvent| on_logout.emit(()))
    };

    html! {
        <header class="header">
            <h1>{&props.title}</h1>
            <div class="header-right">
                <span class="header-user">
                    {props.display_name.clone().unwrap_or_else(|| "Usuario".to_string())}
                </span>
                <button class="btn btn-secondary" onclick={on_logout}>{"Cerrar sesión"}</button>
            </div>
        </header>
    }
}
