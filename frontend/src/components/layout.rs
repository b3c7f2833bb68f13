use yew::prelude::*;

use super::cleaning_panel::CleaningPanel;
use super::dashboard::Dashboard;
use super::header::Header;
use super::notifications::Notifications;
use super::patient_intake::PatientIntake;
use super::reports::Reports;
use super::sidebar::Sidebar;
use super::surgery_detail::SurgeryDetail;
use super::surgery_history::SurgeryHistory;
use super::surgery_schedule::SurgerySchedule;
use super::user_management::UserManagement;
use crate::navigation::Screen;
use crate::session::SessionContext;

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub session: SessionContext,
}

/// Signed-in shell: sidebar, header and the current screen
#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    let screen = use_state(Screen::default);

    let on_navigate = {
        let screen = screen.clone();
        Callback::from(move |next: Screen| {
            log::debug!("Navigating to {:?}", next);
            screen.set(next);
        })
    };

    let on_logout = {
        let session = props.session.clone();
        Callback::from(move |_| {
            log::info!("Signing out");
            session.logout();
        })
    };

    let session = props.session.clone();
    let content = match &*screen {
        Screen::Dashboard => html! { <Dashboard {session} on_navigate={on_navigate.clone()} /> },
        Screen::Schedule { week_of } => html! {
            <SurgerySchedule key={week_of.to_string()} {session} week_of={*week_of} on_navigate={on_navigate.clone()} />
        },
        Screen::PatientIntake => html! { <PatientIntake {session} /> },
        Screen::SurgeryDetail { surgery_id } => html! {
            <SurgeryDetail key={*surgery_id} {session} surgery_id={*surgery_id} on_navigate={on_navigate.clone()} />
        },
        Screen::SurgeryHistory => html! { <SurgeryHistory {session} on_navigate={on_navigate.clone()} /> },
        Screen::Cleaning => html! { <CleaningPanel {session} /> },
        Screen::Users => html! { <UserManagement {session} /> },
        Screen::Reports => html! { <Reports {session} /> },
        Screen::Notifications => html! { <Notifications {session} on_navigate={on_navigate.clone()} /> },
    };

    html! {
        <div class="app-layout">
            <Sidebar current={(*screen).clone()} on_navigate={on_navigate.clone()} />
            <div class="main-area">
                <Header
                    title={screen.title()}
                    display_name={props.session.session().display_name.clone()}
                    {on_logout}
                />
                <main class="content">
                    {content}
                </main>
            </div>
        </div>
    }
}
