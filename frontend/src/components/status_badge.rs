use yew::prelude::*;

use crate::domain::badges::Badge;

#[derive(Properties, PartialEq)]
pub struct StatusBadgeProps {
    pub badge: Badge,
}

#[function_component(StatusBadge)]
pub fn status_badge(props: &StatusBadgeProps) -> Html {
    html! {
        <span class={props.badge.class}>{&props.badge.label}</span>
    }
}
