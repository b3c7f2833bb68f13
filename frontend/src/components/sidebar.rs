use yew::prelude::*;

use crate::navigation::{menu, Screen};
use crate::services::date_utils::today;

#[derive(Properties, PartialEq)]
pub struct SidebarProps {
    pub current: Screen,
    pub on_navigate: Callback<Screen>,
}

#[function_component(Sidebar)]
pub fn sidebar(props: &SidebarProps) -> Html {
    html! {
        <nav class="sidebar">
            <div class="sidebar-brand">{"🏥 Pabellones"}</div>
            <ul class="sidebar-menu">
                {for menu(today()).into_iter().map(|entry| {
                    let active = entry.is_active(&props.current);
                    let onclick = {
                        let on_navigate = props.on_navigate.clone();
                        let screen = entry.screen.clone();
                        Callback::from(move |_: MouseEvent| on_navigate.emit(screen.clone()))
                    };
                    html! {
                        <li class={classes!("sidebar-item", active.then_some("active"))} {onclick}>
                            <span class="sidebar-icon">{entry.icon}</span>
                            <span class="sidebar-label">{entry.label}</span>
                        </li>
                    }
                })}
            </ul>
        </nav>
    }
}
