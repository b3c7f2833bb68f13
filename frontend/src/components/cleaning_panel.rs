use shared::{CleaningStatus, RoomCleaningState};
use yew::prelude::*;

use super::feedback::{EmptyState, ErrorBanner, Loading};
use super::form_fields::{filter_options, SelectField, TextAreaField};
use super::status_badge::StatusBadge;
use crate::domain::badges::cleaning_badge;
use crate::domain::forms::{CleaningForm, FormState, Submission};
use crate::domain::status_actions::cleaning_actions;
use crate::hooks::use_cleaning::use_cleaning;
use crate::hooks::use_form::{sender, use_form};
use crate::services::date_utils::format_timestamp;
use crate::session::SessionContext;

#[derive(Properties, PartialEq)]
pub struct CleaningPanelProps {
    pub session: SessionContext,
}

#[function_component(CleaningPanel)]
pub fn cleaning_panel(props: &CleaningPanelProps) -> Html {
    let cleaning = use_cleaning(&props.session);
    // room whose notes form is open
    let editing = use_state(|| Option::<String>::None);
    let state = &cleaning.state;

    let status_options = filter_options(
        "Todos los estados",
        CleaningStatus::KNOWN.iter().map(|s| (s.as_wire(), s.label())),
    );

    let on_saved = {
        let editing = editing.clone();
        let refresh = cleaning.actions.refresh.clone();
        Callback::from(move |_| {
            editing.set(None);
            refresh.emit(());
        })
    };

    let on_close = {
        let editing = editing.clone();
        Callback::from(move |_| editing.set(None))
    };

    html! {
        <div class="screen cleaning-panel">
            <div class="filters">
                <SelectField
                    label="Estado"
                    value={state.filter.status.select_value(|s| s.as_wire().to_string())}
                    options={status_options}
                    on_change={cleaning.actions.on_status_filter.clone()}
                />
                <button class="btn btn-secondary" onclick={
                    let refresh = cleaning.actions.refresh.clone();
                    Callback::from(move |_: MouseEvent| refresh.emit(()))
                }>{"↻ Actualizar"}</button>
            </div>

            <ErrorBanner error={state.error.clone()} on_retry={cleaning.actions.refresh.clone()} />

            {if state.loading && state.rooms.is_empty() {
                html! { <Loading message="Cargando pabellones..." /> }
            } else if state.visible.is_empty() {
                html! { <EmptyState /> }
            } else {
                html! {
                    <div class="room-grid">
                        {for state.visible.iter().map(|room| {
                            let is_editing = editing.as_deref() == Some(room.room_name.as_str());
                            let open_editor = {
                                let editing = editing.clone();
                                let name = room.room_name.clone();
                                Callback::from(move |_| editing.set(Some(name.clone())))
                            };
                            html! {
                                <div class="room-slot" key={room.room_name.clone()}>
                                    <RoomCard
                                        room={room.clone()}
                                        updating={state.updating.as_deref() == Some(room.room_name.as_str())}
                                        on_change_status={cleaning.actions.change_status.clone()}
                                        on_edit={open_editor}
                                    />
                                    {if is_editing {
                                        html! {
                                            <CleaningFormPanel
                                                session={props.session.clone()}
                                                room={room.clone()}
                                                on_saved={on_saved.clone()}
                                                on_cancel={on_close.clone()}
                                            />
                                        }
                                    } else { html! {} }}
                                </div>
                            }
                        })}
                    </div>
                }
            }}
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct RoomCardProps {
    room: RoomCleaningState,
    updating: bool,
    on_change_status: Callback<(String, CleaningStatus)>,
    on_edit: Callback<()>,
}

#[function_component(RoomCard)]
fn room_card(props: &RoomCardProps) -> Html {
    let room = &props.room;
    let on_edit = {
        let on_edit = props.on_edit.clone();
        Callback::from(move |_: MouseEvent| on_edit.emit(()))
    };

    html! {
        <div class="room-card">
            <div class="room-card-header">
                <h3>{&room.room_name}</h3>
                <StatusBadge badge={cleaning_badge(&room.status)} />
            </div>
            {if let Some(until) = &room.occupied_until {
                html! { <p class="room-meta">{format!("Ocupado hasta: {}", format_timestamp(until))}</p> }
            } else { html! {} }}
            <p class="room-meta">
                {format!(
                    "Última limpieza: {}",
                    room.last_cleaned.as_deref().map(format_timestamp).unwrap_or_else(|| "—".to_string())
                )}
            </p>
            {if let Some(notes) = room.notes.as_deref().filter(|n| !n.trim().is_empty()) {
                html! { <p class="room-notes">{notes}</p> }
            } else { html! {} }}

            <div class="button-row">
                {for cleaning_actions(&room.status).into_iter().map(|action| {
                    let on_change_status = props.on_change_status.clone();
                    let name = room.room_name.clone();
                    let target = action.target.clone();
                    html! {
                        <button
                            class={action.tone.class()}
                            disabled={props.updating}
                            onclick={Callback::from(move |_: MouseEvent| on_change_status.emit((name.clone(), target.clone())))}
                        >
                            {action.label}
                        </button>
                    }
                })}
                <button class="btn btn-link" onclick={on_edit}>{"📝 Notas"}</button>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct CleaningFormPanelProps {
    session: SessionContext,
    room: RoomCleaningState,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
}

#[function_component(CleaningFormPanel)]
fn cleaning_form_panel(props: &CleaningFormPanelProps) -> Html {
    let send = {
        let session = props.session.clone();
        let room_name = props.room.room_name.clone();
        sender::<CleaningForm, _, _>(move |submission| {
            let client = session.client();
            let room_name = room_name.clone();
            async move {
                let request = match submission {
                    Submission::Create(request) | Submission::Update(request) => request,
                };
                client.update_room_cleaning(&room_name, &request).await.map(|updated| {
                    log::info!("Saved cleaning notes for {}", updated.room_name);
                })
            }
        })
    };

    let room = props.room.clone();
    let form = use_form(
        &props.session,
        move || FormState::edit(CleaningForm::from_room(&room)),
        send,
        props.on_saved.clone(),
    );

    let status_options: Vec<(String, String)> = CleaningStatus::KNOWN
        .iter()
        .map(|s| (s.as_wire().to_string(), s.label().to_string()))
        .collect();

    let on_cancel = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |_: MouseEvent| on_cancel.emit(()))
    };

    html! {
        <form class="cleaning-form" onsubmit={form.on_submit.clone()}>
            <ErrorBanner error={form.state.server_error.clone()} />
            <SelectField
                label="Estado"
                required={true}
                placeholder="Seleccione..."
                value={form.state.values.status.clone()}
                options={status_options}
                error={form.error("status")}
                on_change={form.field("status", |f, v| f.status = v)}
            />
            <TextAreaField
                label="Notas"
                value={form.state.values.notes.clone()}
                on_change={form.field("notes", |f, v| f.notes = v)}
            />
            <div class="form-actions">
                <button type="button" class="btn btn-secondary" onclick={on_cancel}>{"Cancelar"}</button>
                <button type="submit" class="btn btn-primary" disabled={form.state.submitting}>{"Guardar"}</button>
            </div>
        </form>
    }
}
