use shared::{UserAccount, UserRole};
use yew::prelude::*;

use super::feedback::{EmptyState, ErrorBanner, Loading};
use super::form_fields::{filter_options, CheckboxField, SearchInput, SelectField, TextField};
use super::status_badge::StatusBadge;
use crate::domain::badges::{active_badge, role_badge};
use crate::domain::filters::active_state_value;
use crate::domain::forms::{FormMode, FormState, Submission, UserForm};
use crate::hooks::use_form::{sender, use_form};
use crate::hooks::use_users::use_users;
use crate::services::date_utils::format_timestamp;
use crate::session::SessionContext;

/// What the user modal is doing
#[derive(Clone, PartialEq)]
enum Editor {
    Closed,
    Create,
    Edit(UserAccount),
}

#[derive(Properties, PartialEq)]
pub struct UserManagementProps {
    pub session: SessionContext,
}

#[function_component(UserManagement)]
pub fn user_management(props: &UserManagementProps) -> Html {
    let users = use_users(&props.session);
    let editor = use_state(|| Editor::Closed);
    let state = &users.state;
    let actions = &users.actions;

    let role_options = filter_options(
        "Todos los roles",
        UserRole::KNOWN.iter().map(|r| (r.as_wire(), r.label())),
    );
    let active_options = filter_options("Todos", [("activo", "Activos"), ("inactivo", "Inactivos")]);

    let open_create = {
        let editor = editor.clone();
        Callback::from(move |_: MouseEvent| editor.set(Editor::Create))
    };

    let on_saved = {
        let editor = editor.clone();
        let refresh = actions.refresh.clone();
        Callback::from(move |_| {
            editor.set(Editor::Closed);
            refresh.emit(());
        })
    };

    let on_close = {
        let editor = editor.clone();
        Callback::from(move |_| editor.set(Editor::Closed))
    };

    let on_edit = {
        let editor = editor.clone();
        Callback::from(move |user: UserAccount| editor.set(Editor::Edit(user)))
    };

    html! {
        <div class="screen user-management">
            <div class="filters">
                <SearchInput placeholder="Buscar por nombre, correo o RUT..." on_search={actions.on_search.clone()} />
                <SelectField
                    label="Rol"
                    value={state.filter.role.select_value(|r| r.as_wire().to_string())}
                    options={role_options}
                    on_change={actions.on_role.clone()}
                />
                <SelectField
                    label="Estado"
                    value={state.filter.active.select_value(active_state_value)}
                    options={active_options}
                    on_change={actions.on_active.clone()}
                />
                <button class="btn btn-primary" onclick={open_create}>{"+ Nuevo usuario"}</button>
            </div>

            <ErrorBanner error={state.error.clone()} on_retry={actions.refresh.clone()} />

            {match &*editor {
                Editor::Closed => html! {},
                Editor::Create => html! {
                    <UserFormModal session={props.session.clone()} user={None::<UserAccount>} on_saved={on_saved.clone()} on_close={on_close.clone()} />
                },
                Editor::Edit(user) => html! {
                    <UserFormModal
                        key={user.id}
                        session={props.session.clone()}
                        user={Some(user.clone())}
                        on_saved={on_saved.clone()}
                        on_close={on_close.clone()}
                    />
                },
            }}

            {if state.loading && state.users.is_empty() {
                html! { <Loading message="Cargando usuarios..." /> }
            } else if state.visible.is_empty() {
                html! { <EmptyState /> }
            } else {
                html! {
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>{"Nombre"}</th>
                                <th>{"RUT"}</th>
                                <th>{"Correo"}</th>
                                <th>{"Rol"}</th>
                                <th>{"Especialidad"}</th>
                                <th>{"Estado"}</th>
                                <th>{"Último acceso"}</th>
                                <th>{"Acciones"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            {for state.visible.iter().map(|user| {
                                let edit = {
                                    let on_edit = on_edit.clone();
                                    let user = user.clone();
                                    Callback::from(move |_: MouseEvent| on_edit.emit(user.clone()))
                                };
                                let toggle = {
                                    let toggle_active = actions.toggle_active.clone();
                                    let id = user.id;
                                    Callback::from(move |_: MouseEvent| toggle_active.emit(id))
                                };
                                let delete = {
                                    let delete = actions.delete.clone();
                                    let id = user.id;
                                    Callback::from(move |_: MouseEvent| delete.emit(id))
                                };
                                html! {
                                    <tr key={user.id}>
                                        <td>{user.full_name()}</td>
                                        <td>{&user.rut}</td>
                                        <td>{&user.email}</td>
                                        <td><StatusBadge badge={role_badge(&user.role)} /></td>
                                        <td>{user.specialty.clone().unwrap_or_else(|| "—".to_string())}</td>
                                        <td><StatusBadge badge={active_badge(user.active)} /></td>
                                        <td>{user.last_access.as_deref().map(format_timestamp).unwrap_or_else(|| "Nunca".to_string())}</td>
                                        <td class="row-actions">
                                            <button class="btn btn-link" onclick={edit}>{"Editar"}</button>
                                            <button class="btn btn-link" onclick={toggle}>
                                                {if user.active { "Desactivar" } else { "Activar" }}
                                            </button>
                                            <button class="btn btn-link danger" onclick={delete}>{"Eliminar"}</button>
                                        </td>
                                    </tr>
                                }
                            })}
                        </tbody>
                    </table>
                }
            }}
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct UserFormModalProps {
    session: SessionContext,
    user: Option<UserAccount>,
    on_saved: Callback<()>,
    on_close: Callback<()>,
}

#[function_component(UserFormModal)]
fn user_form_modal(props: &UserFormModalProps) -> Html {
    let user_id = props.user.as_ref().map(|u| u.id);

    let send = {
        let session = props.session.clone();
        sender::<UserForm, _, _>(move |submission| {
            let client = session.client();
            async move {
                match (submission, user_id) {
                    (Submission::Create(request), _) => client.create_user(&request).await.map(|created| {
                        log::info!("Created user {}", created.id);
                    }),
                    (Submission::Update(request), Some(id)) => client.update_user(id, &request).await.map(|_| {
                        log::info!("Updated user {}", id);
                    }),
                    (Submission::Update(_), None) => {
                        log::warn!("User update without an id");
                        Ok(())
                    }
                }
            }
        })
    };

    let user = props.user.clone();
    let form = use_form(
        &props.session,
        move || match &user {
            Some(user) => FormState::edit(UserForm::from_user(user)),
            None => FormState::create(),
        },
        send,
        props.on_saved.clone(),
    );

    let values = &form.state.values;
    let creating = form.state.mode == FormMode::Create;
    let role_options: Vec<(String, String)> = UserRole::KNOWN
        .iter()
        .map(|r| (r.as_wire().to_string(), r.label().to_string()))
        .collect();

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class="modal-overlay">
            <div class="modal">
                <div class="modal-header">
                    <h3>{if creating { "Nuevo usuario" } else { "Editar usuario" }}</h3>
                    <button class="modal-close" onclick={close.clone()}>{"×"}</button>
                </div>
                <ErrorBanner error={form.state.server_error.clone()} />
                <form onsubmit={form.on_submit.clone()}>
                    <div class="form-row">
                        <TextField
                            label="Nombre"
                            required={true}
                            value={values.first_name.clone()}
                            error={form.error("first_name")}
                            on_change={form.field("first_name", |f, v| f.first_name = v)}
                        />
                        <TextField
                            label="Apellido"
                            required={true}
                            value={values.last_name.clone()}
                            error={form.error("last_name")}
                            on_change={form.field("last_name", |f, v| f.last_name = v)}
                        />
                    </div>
                    <div class="form-row">
                        <TextField
                            label="RUT"
                            required={true}
                            placeholder="12.345.678-9"
                            value={values.rut.clone()}
                            error={form.error("rut")}
                            on_change={form.field("rut", |f, v| f.rut = v)}
                        />
                        <TextField
                            label="Correo electrónico"
                            input_type="email"
                            required={true}
                            value={values.email.clone()}
                            error={form.error("email")}
                            on_change={form.field("email", |f, v| f.email = v)}
                        />
                    </div>
                    <div class="form-row">
                        <TextField
                            label="Teléfono"
                            input_type="tel"
                            value={values.phone.clone()}
                            on_change={form.field("phone", |f, v| f.phone = v)}
                        />
                        <SelectField
                            label="Rol"
                            required={true}
                            placeholder="Seleccione..."
                            value={values.role.clone()}
                            options={role_options}
                            error={form.error("role")}
                            on_change={form.field("role", |f, v| f.role = v)}
                        />
                        <TextField
                            label="Especialidad"
                            value={values.specialty.clone()}
                            on_change={form.field("specialty", |f, v| f.specialty = v)}
                        />
                    </div>
                    {if creating {
                        html! {
                            <TextField
                                label="Contraseña"
                                input_type="password"
                                required={true}
                                value={values.password.clone()}
                                error={form.error("password")}
                                on_change={form.field("password", |f, v| f.password = v)}
                            />
                        }
                    } else { html! {} }}
                    <CheckboxField
                        label="Usuario activo"
                        checked={values.active}
                        on_toggle={{
                            let state = form.state.clone();
                            Callback::from(move |active: bool| {
                                let mut next = (*state).clone();
                                next.edit_field("active", |f| f.active = active);
                                state.set(next);
                            })
                        }}
                    />
                    <div class="form-actions">
                        <button type="button" class="btn btn-secondary" onclick={close}>{"Cancelar"}</button>
                        <button type="submit" class="btn btn-primary" disabled={form.state.submitting}>
                            {if form.state.submitting { "Guardando..." } else { "Guardar" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
