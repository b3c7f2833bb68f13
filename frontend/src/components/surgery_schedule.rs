use chrono::{Datelike, NaiveDate};
use yew::prelude::*;

use super::feedback::{ErrorBanner, Loading};
use super::form_fields::{filter_options, SelectField};
use super::status_badge::StatusBadge;
use super::surgery_form::SurgeryFormPanel;
use crate::domain::badges::surgery_badge;
use crate::domain::week_grid::{ScheduledSurgery, WeekDay};
use crate::hooks::use_week_schedule::use_week_schedule;
use crate::navigation::Screen;
use crate::services::date_utils::{format_duration, format_time, today, weekday_short_es};
use crate::session::SessionContext;

#[derive(Properties, PartialEq)]
pub struct SurgeryScheduleProps {
    pub session: SessionContext,
    pub week_of: NaiveDate,
    pub on_navigate: Callback<Screen>,
}

#[function_component(SurgerySchedule)]
pub fn surgery_schedule(props: &SurgeryScheduleProps) -> Html {
    let schedule = use_week_schedule(&props.session, props.week_of);
    let creating = use_state(|| false);
    let state = &schedule.state;

    let toggle_form = {
        let creating = creating.clone();
        Callback::from(move |_: MouseEvent| creating.set(!*creating))
    };

    let on_saved = {
        let creating = creating.clone();
        let refresh = schedule.actions.refresh.clone();
        Callback::from(move |_| {
            creating.set(false);
            refresh.emit(());
        })
    };

    let on_cancel = {
        let creating = creating.clone();
        Callback::from(move |_| creating.set(false))
    };

    let current = today();
    let room_options = filter_options(
        "Todos los pabellones",
        state.rooms.iter().map(|r| (r.as_str(), r.as_str())),
    );
    let specialty_options = filter_options(
        "Todas las especialidades",
        state.specialties.iter().map(|s| (s.as_str(), s.as_str())),
    );

    html! {
        <div class="screen schedule">
            <div class="schedule-header">
                <h2>{state.grid.title()}</h2>
                <div class="schedule-nav">
                    <button class="btn btn-secondary" onclick={schedule.actions.prev_week.clone()}>{"‹ Anterior"}</button>
                    <button class="btn btn-secondary" onclick={schedule.actions.this_week.clone()}>{"Hoy"}</button>
                    <button class="btn btn-secondary" onclick={schedule.actions.next_week.clone()}>{"Siguiente ›"}</button>
                    <button class="btn btn-primary" onclick={toggle_form}>
                        {if *creating { "Cerrar" } else { "+ Nueva cirugía" }}
                    </button>
                </div>
            </div>

            <div class="filters">
                <SelectField
                    label="Pabellón"
                    value={state.filter.room.select_value(|r| r.clone())}
                    options={room_options}
                    on_change={schedule.actions.on_room.clone()}
                />
                <SelectField
                    label="Especialidad"
                    value={state.filter.specialty.select_value(|s| s.clone())}
                    options={specialty_options}
                    on_change={schedule.actions.on_specialty.clone()}
                />
            </div>

            {if *creating {
                html! {
                    <SurgeryFormPanel session={props.session.clone()} {on_saved} {on_cancel} />
                }
            } else { html! {} }}

            <ErrorBanner error={state.error.clone()} on_retry={schedule.actions.refresh.clone()} />

            {if state.loading {
                html! { <Loading message="Cargando agenda..." /> }
            } else {
                html! {
                    <>
                        <div class="week-grid">
                            {for state.grid.days.iter().map(|day| html! {
                                <DayColumn
                                    day={day.clone()}
                                    is_today={day.date == current}
                                    on_navigate={props.on_navigate.clone()}
                                />
                            })}
                        </div>
                        <p class="schedule-footer">
                            {format!("{} cirugías esta semana", state.grid.total())}
                            {if state.grid.skipped > 0 {
                                format!(" · {} con fecha inválida no se muestran", state.grid.skipped)
                            } else { String::new() }}
                        </p>
                    </>
                }
            }}
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct DayColumnProps {
    day: WeekDay,
    is_today: bool,
    on_navigate: Callback<Screen>,
}

#[function_component(DayColumn)]
fn day_column(props: &DayColumnProps) -> Html {
    let date = props.day.date;

    html! {
        <div class={classes!("day-column", props.is_today.then_some("today"))}>
            <div class="day-header">
                <span class="day-name">{weekday_short_es(date.weekday())}</span>
                <span class="day-number">{date.day()}</span>
            </div>
            <div class="day-events">
                {if props.day.surgeries.is_empty() {
                    html! { <div class="day-empty">{"—"}</div> }
                } else {
                    html! {
                        <>
                            {for props.day.surgeries.iter().map(|item| html! {
                                <EventCard item={item.clone()} on_navigate={props.on_navigate.clone()} />
                            })}
                        </>
                    }
                }}
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct EventCardProps {
    item: ScheduledSurgery,
    on_navigate: Callback<Screen>,
}

#[function_component(EventCard)]
fn event_card(props: &EventCardProps) -> Html {
    let surgery = &props.item.surgery;
    let onclick = {
        let on_navigate = props.on_navigate.clone();
        let surgery_id = surgery.id;
        Callback::from(move |_: MouseEvent| on_navigate.emit(Screen::SurgeryDetail { surgery_id }))
    };

    html! {
        <div class="event-card" {onclick}>
            <div class="event-time">
                {format_time(props.item.start.wall)}
                {surgery.duration_minutes.map(|m| format!(" · {}", format_duration(m))).unwrap_or_default()}
            </div>
            <div class="event-title">{&surgery.procedure_type}</div>
            <div class="event-meta">{surgery.patient_label()}</div>
            <div class="event-meta">{surgery.room_label()}</div>
            <StatusBadge badge={surgery_badge(&surgery.status)} />
        </div>
    }
}
