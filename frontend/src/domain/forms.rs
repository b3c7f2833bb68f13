//! Form state for the create/edit dialogs.
//!
//! A form keeps the raw text of every field, validates it locally and only
//! then turns it into a backend payload. Invalid input never reaches the
//! network; backend failures are kept on the form so the user can fix the
//! values and resubmit.

use std::future::Future;

use chrono::Local;
use once_cell::sync::Lazy;
use regex::Regex;
use shared::{
    CleaningStatus, Patient, PatientCreateRequest, PatientUpdateRequest, RoomCleaningState,
    RoomCleaningUpdateRequest, Surgery, SurgeryCreateRequest, SurgeryStatus,
    SurgeryUpdateRequest, UserAccount, UserCreateRequest, UserRole, UserUpdateRequest,
};

use crate::services::api::ApiError;
use crate::services::date_utils::{
    format_time, parse_input_date, parse_input_time, resolve_timestamp, to_iso_date,
    to_iso_datetime,
};

/// Chilean RUT as accepted by the backend, e.g. `12.345.678-5`
pub const RUT_PATTERN: &str = r"^\d{1,2}\.?\d{3}\.?\d{3}-?[\dkK]$";

const REQUIRED: &str = "Este campo es obligatorio";

static RUT_REGEX: Lazy<Option<Regex>> = Lazy::new(|| match Regex::new(RUT_PATTERN) {
    Ok(pattern) => Some(pattern),
    Err(error) => {
        log::error!("Invalid RUT pattern: {}", error);
        None
    }
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// Field-level validation failures, shown next to each input
#[derive(Debug, Clone, Default, PartialEq, Eq, thiserror::Error)]
#[error("El formulario tiene {} campo(s) con errores", .errors.len())]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.push(FieldError {
            field,
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// First message for `field`, if any
    pub fn for_field(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|error| error.field == field)
            .map(|error| error.message.as_str())
    }

    pub fn clear_field(&mut self, field: &str) {
        self.errors.retain(|error| error.field != field);
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }

    fn require(&mut self, field: &'static str, value: &str) {
        if value.trim().is_empty() {
            self.push(field, REQUIRED);
        }
    }

    fn into_result<T>(self, value: impl FnOnce() -> T) -> Result<T, ValidationErrors> {
        if self.is_empty() {
            Ok(value())
        } else {
            Err(self)
        }
    }
}

/// Payload produced by a valid form
#[derive(Debug, Clone, PartialEq)]
pub enum Submission<C, U> {
    Create(C),
    Update(U),
}

/// Field values of one kind of form
pub trait FormModel: Clone + PartialEq {
    type Create;
    type Update;

    /// Validate the fields and build the payload for `mode`
    fn build(&self, mode: FormMode) -> Result<Submission<Self::Create, Self::Update>, ValidationErrors>;
}

/// What happened to a submit attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Local validation failed; nothing was sent
    Invalid,
    /// Backend accepted the payload; the form can close
    Saved,
    /// Backend rejected the payload; the message is on the form
    Failed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormState<M> {
    pub mode: FormMode,
    pub values: M,
    pub errors: ValidationErrors,
    pub server_error: Option<String>,
    pub submitting: bool,
}

impl<M: FormModel> FormState<M> {
    pub fn create() -> Self
    where
        M: Default,
    {
        Self::with_values(FormMode::Create, M::default())
    }

    pub fn edit(values: M) -> Self {
        Self::with_values(FormMode::Edit, values)
    }

    fn with_values(mode: FormMode, values: M) -> Self {
        Self {
            mode,
            values,
            errors: ValidationErrors::default(),
            server_error: None,
            submitting: false,
        }
    }

    /// Change one field. Clears that field's message and any backend error.
    pub fn edit_field(&mut self, field: &'static str, change: impl FnOnce(&mut M)) {
        change(&mut self.values);
        self.errors.clear_field(field);
        self.server_error = None;
    }
}

/// Validate `state` and, when valid, hand the payload to `send`.
///
/// `send` is not called for invalid forms. Field values are never reset, so
/// a failed attempt can be corrected and resubmitted.
pub async fn submit<M, F, Fut>(state: &mut FormState<M>, send: F) -> SubmitOutcome
where
    M: FormModel,
    F: FnOnce(Submission<M::Create, M::Update>) -> Fut,
    Fut: Future<Output = Result<(), ApiError>>,
{
    let submission = match state.values.build(state.mode) {
        Ok(submission) => submission,
        Err(errors) => {
            log::debug!("Form rejected locally: {}", errors);
            state.errors = errors;
            return SubmitOutcome::Invalid;
        }
    };

    state.errors = ValidationErrors::default();
    state.server_error = None;
    state.submitting = true;
    let result = send(submission).await;
    state.submitting = false;

    match result {
        Ok(()) => SubmitOutcome::Saved,
        Err(error) => {
            log::error!("Form submission failed: {}", error);
            state.server_error = Some(error.user_message());
            SubmitOutcome::Failed
        }
    }
}

pub fn is_valid_rut(raw: &str) -> bool {
    RUT_REGEX
        .as_ref()
        .map_or(false, |pattern| pattern.is_match(raw.trim()))
}

fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Update value for an optional field: blank clears it on the backend
fn clearable(value: &str) -> Option<Option<String>> {
    Some(optional(value))
}

fn trimmed(value: &str) -> String {
    value.trim().to_string()
}

fn check_rut(errors: &mut ValidationErrors, value: &str) {
    if value.trim().is_empty() {
        errors.push("rut", REQUIRED);
    } else if !is_valid_rut(value) {
        errors.push("rut", "RUT inválido (formato: 12.345.678-9)");
    }
}

fn check_email(errors: &mut ValidationErrors, value: &str, required: bool) {
    let value = value.trim();
    if value.is_empty() {
        if required {
            errors.push("email", REQUIRED);
        }
    } else if !value.contains('@') || value.starts_with('@') || value.ends_with('@') {
        errors.push("email", "Correo electrónico inválido");
    }
}

fn parse_id(errors: &mut ValidationErrors, field: &'static str, value: &str) -> Option<i64> {
    let value = value.trim();
    if value.is_empty() {
        errors.push(field, REQUIRED);
        return None;
    }
    match value.parse::<i64>() {
        Ok(id) if id > 0 => Some(id),
        _ => {
            errors.push(field, "Debe ser un número entero positivo");
            None
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PatientForm {
    pub first_name: String,
    pub last_name: String,
    pub rut: String,
    /// `YYYY-MM-DD` from the date input
    pub birth_date: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub insurance: String,
    pub record_number: String,
}

impl PatientForm {
    pub fn from_patient(patient: &Patient) -> Self {
        Self {
            first_name: patient.first_name.clone(),
            last_name: patient.last_name.clone(),
            rut: patient.rut.clone(),
            birth_date: patient
                .parsed_birth_date()
                .map(to_iso_date)
                .unwrap_or_else(|| patient.birth_date.clone()),
            phone: patient.phone.clone().unwrap_or_default(),
            email: patient.email.clone().unwrap_or_default(),
            address: patient.address.clone().unwrap_or_default(),
            insurance: patient.insurance.clone().unwrap_or_default(),
            record_number: patient.record_number.clone().unwrap_or_default(),
        }
    }
}

impl FormModel for PatientForm {
    type Create = PatientCreateRequest;
    type Update = PatientUpdateRequest;

    fn build(&self, mode: FormMode) -> Result<Submission<Self::Create, Self::Update>, ValidationErrors> {
        let mut errors = ValidationErrors::default();
        errors.require("first_name", &self.first_name);
        errors.require("last_name", &self.last_name);
        check_rut(&mut errors, &self.rut);
        check_email(&mut errors, &self.email, false);

        let birth_date = if self.birth_date.trim().is_empty() {
            errors.push("birth_date", REQUIRED);
            None
        } else {
            let parsed = parse_input_date(&self.birth_date);
            if parsed.is_none() {
                errors.push("birth_date", "Fecha inválida");
            }
            parsed
        };

        errors.into_result(|| {
            let birth_date = birth_date.map(to_iso_date).unwrap_or_default();
            match mode {
                FormMode::Create => Submission::Create(PatientCreateRequest {
                    first_name: trimmed(&self.first_name),
                    last_name: trimmed(&self.last_name),
                    rut: trimmed(&self.rut),
                    birth_date,
                    phone: optional(&self.phone),
                    email: optional(&self.email),
                    address: optional(&self.address),
                    insurance: optional(&self.insurance),
                    record_number: optional(&self.record_number),
                }),
                FormMode::Edit => Submission::Update(PatientUpdateRequest {
                    first_name: Some(trimmed(&self.first_name)),
                    last_name: Some(trimmed(&self.last_name)),
                    rut: Some(trimmed(&self.rut)),
                    birth_date: Some(birth_date),
                    phone: clearable(&self.phone),
                    email: clearable(&self.email),
                    address: clearable(&self.address),
                    insurance: clearable(&self.insurance),
                    record_number: clearable(&self.record_number),
                }),
            }
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SurgeryForm {
    pub patient_id: String,
    pub physician_id: String,
    pub room_name: String,
    pub start_date: String,
    pub start_time: String,
    pub duration_minutes: String,
    pub procedure_type: String,
    pub status: SurgeryStatus,
    pub preop_notes: String,
    pub postop_notes: String,
}

impl Default for SurgeryForm {
    fn default() -> Self {
        Self {
            patient_id: String::new(),
            physician_id: String::new(),
            room_name: String::new(),
            start_date: String::new(),
            start_time: String::new(),
            duration_minutes: String::new(),
            procedure_type: String::new(),
            status: SurgeryStatus::Scheduled,
            preop_notes: String::new(),
            postop_notes: String::new(),
        }
    }
}

impl SurgeryForm {
    pub fn from_surgery(surgery: &Surgery) -> Self {
        let start = resolve_timestamp(&surgery.scheduled_start, &Local);
        Self {
            patient_id: surgery.patient_id.to_string(),
            physician_id: surgery.physician_id.to_string(),
            room_name: surgery.room_name.clone().unwrap_or_default(),
            start_date: start.map(|s| to_iso_date(s.date())).unwrap_or_default(),
            start_time: start.map(|s| format_time(s.wall)).unwrap_or_default(),
            duration_minutes: surgery
                .duration_minutes
                .map(|minutes| minutes.to_string())
                .unwrap_or_default(),
            procedure_type: surgery.procedure_type.clone(),
            status: surgery.status.clone(),
            preop_notes: surgery.preop_notes.clone().unwrap_or_default(),
            postop_notes: surgery.postop_notes.clone().unwrap_or_default(),
        }
    }
}

impl FormModel for SurgeryForm {
    type Create = SurgeryCreateRequest;
    type Update = SurgeryUpdateRequest;

    fn build(&self, mode: FormMode) -> Result<Submission<Self::Create, Self::Update>, ValidationErrors> {
        let mut errors = ValidationErrors::default();

        let patient_id = parse_id(&mut errors, "patient_id", &self.patient_id);
        let physician_id = parse_id(&mut errors, "physician_id", &self.physician_id);

        let start_date = if self.start_date.trim().is_empty() {
            errors.push("start_date", REQUIRED);
            None
        } else {
            let parsed = parse_input_date(&self.start_date);
            if parsed.is_none() {
                errors.push("start_date", "Fecha inválida");
            }
            parsed
        };
        let start_time = if self.start_time.trim().is_empty() {
            errors.push("start_time", REQUIRED);
            None
        } else {
            let parsed = parse_input_time(&self.start_time);
            if parsed.is_none() {
                errors.push("start_time", "Hora inválida");
            }
            parsed
        };

        errors.require("procedure_type", &self.procedure_type);

        let duration = match self.duration_minutes.trim() {
            "" => None,
            raw => match raw.parse::<i64>() {
                Ok(minutes) if minutes > 0 => Some(minutes),
                _ => {
                    errors.push("duration_minutes", "La duración debe ser un número positivo de minutos");
                    None
                }
            },
        };

        errors.into_result(|| {
            let scheduled_start = match (start_date, start_time) {
                (Some(date), Some(time)) => to_iso_datetime(date.and_time(time)),
                _ => String::new(),
            };
            match mode {
                FormMode::Create => Submission::Create(SurgeryCreateRequest {
                    patient_id: patient_id.unwrap_or_default(),
                    physician_id: physician_id.unwrap_or_default(),
                    room_name: optional(&self.room_name),
                    scheduled_start,
                    duration_minutes: duration,
                    procedure_type: trimmed(&self.procedure_type),
                    status: self.status.clone(),
                    preop_notes: optional(&self.preop_notes),
                }),
                FormMode::Edit => Submission::Update(SurgeryUpdateRequest {
                    room_name: clearable(&self.room_name),
                    scheduled_start: Some(scheduled_start),
                    duration_minutes: Some(duration),
                    procedure_type: Some(trimmed(&self.procedure_type)),
                    status: Some(self.status.clone()),
                    preop_notes: clearable(&self.preop_notes),
                    postop_notes: clearable(&self.postop_notes),
                }),
            }
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UserForm {
    pub first_name: String,
    pub last_name: String,
    pub rut: String,
    pub email: String,
    pub phone: String,
    /// Raw role select value; empty until chosen
    pub role: String,
    pub specialty: String,
    pub active: bool,
    /// Only used when creating an account
    pub password: String,
}

impl Default for UserForm {
    fn default() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            rut: String::new(),
            email: String::new(),
            phone: String::new(),
            role: String::new(),
            specialty: String::new(),
            active: true,
            password: String::new(),
        }
    }
}

impl UserForm {
    /// Edit values for an existing account; the password is never loaded
    pub fn from_user(user: &UserAccount) -> Self {
        Self {
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            rut: user.rut.clone(),
            email: user.email.clone(),
            phone: user.phone.clone().unwrap_or_default(),
            role: user.role.as_wire().to_string(),
            specialty: user.specialty.clone().unwrap_or_default(),
            active: user.active,
            password: String::new(),
        }
    }
}

impl FormModel for UserForm {
    type Create = UserCreateRequest;
    type Update = UserUpdateRequest;

    fn build(&self, mode: FormMode) -> Result<Submission<Self::Create, Self::Update>, ValidationErrors> {
        let mut errors = ValidationErrors::default();
        errors.require("first_name", &self.first_name);
        errors.require("last_name", &self.last_name);
        check_rut(&mut errors, &self.rut);
        check_email(&mut errors, &self.email, true);
        errors.require("role", &self.role);
        if mode == FormMode::Create {
            if self.password.is_empty() {
                errors.push("password", REQUIRED);
            } else if self.password.chars().count() < 6 {
                errors.push("password", "La contraseña debe tener al menos 6 caracteres");
            }
        }

        errors.into_result(|| {
            let role = UserRole::parse(&self.role);
            match mode {
                FormMode::Create => Submission::Create(UserCreateRequest {
                    first_name: trimmed(&self.first_name),
                    last_name: trimmed(&self.last_name),
                    rut: trimmed(&self.rut),
                    email: trimmed(&self.email),
                    phone: optional(&self.phone),
                    role,
                    specialty: optional(&self.specialty),
                    active: self.active,
                    password: self.password.clone(),
                }),
                FormMode::Edit => Submission::Update(UserUpdateRequest {
                    first_name: Some(trimmed(&self.first_name)),
                    last_name: Some(trimmed(&self.last_name)),
                    rut: Some(trimmed(&self.rut)),
                    email: Some(trimmed(&self.email)),
                    phone: clearable(&self.phone),
                    role: Some(role),
                    specialty: clearable(&self.specialty),
                    active: Some(self.active),
                }),
            }
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CleaningForm {
    /// Raw status select value
    pub status: String,
    pub notes: String,
}

impl CleaningForm {
    pub fn from_room(room: &RoomCleaningState) -> Self {
        Self {
            status: room.status.as_wire().to_string(),
            notes: room.notes.clone().unwrap_or_default(),
        }
    }
}

impl FormModel for CleaningForm {
    type Create = RoomCleaningUpdateRequest;
    type Update = RoomCleaningUpdateRequest;

    fn build(&self, mode: FormMode) -> Result<Submission<Self::Create, Self::Update>, ValidationErrors> {
        let mut errors = ValidationErrors::default();
        errors.require("status", &self.status);

        errors.into_result(|| {
            let request = RoomCleaningUpdateRequest {
                status: Some(CleaningStatus::parse(&self.status)),
                notes: clearable(&self.notes),
            };
            match mode {
                FormMode::Create => Submission::Create(request),
                FormMode::Edit => Submission::Update(request),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn valid_surgery_form() -> SurgeryForm {
        SurgeryForm {
            patient_id: "12".to_string(),
            physician_id: "3".to_string(),
            start_date: "2025-06-25".to_string(),
            start_time: "08:30".to_string(),
            duration_minutes: "90".to_string(),
            procedure_type: " Apendicectomía ".to_string(),
            ..SurgeryForm::default()
        }
    }

    #[test]
    fn test_rut_pattern() {
        assert!(is_valid_rut("12.345.678-5"));
        assert!(is_valid_rut("12345678K"));
        assert!(is_valid_rut("9.876.543-k"));
        assert!(!is_valid_rut("12.345.678-X"));
        assert!(!is_valid_rut("123"));
    }

    #[test]
    fn test_rut_pattern_compiles_once_and_stays_consistent() {
        assert!(RUT_REGEX.is_some());
        for _ in 0..3 {
            assert!(is_valid_rut(" 7.654.321-0 "));
            assert!(!is_valid_rut("7.654.321-Z"));
        }
        let first = RUT_REGEX.as_ref().map(|p| p as *const Regex);
        let second = RUT_REGEX.as_ref().map(|p| p as *const Regex);
        assert_eq!(first, second);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[tokio::test]
    async fn test_missing_patient_id_does_not_call_backend() {
        let mut state = FormState::edit(SurgeryForm {
            patient_id: String::new(),
            ..valid_surgery_form()
        });
        state.mode = FormMode::Create;
        let called = Cell::new(false);

        let outcome = submit(&mut state, |_| {
            called.set(true);
            async { Ok(()) }
        })
        .await;

        assert_eq!(outcome, SubmitOutcome::Invalid);
        assert!(!called.get());
        assert_eq!(state.errors.for_field("patient_id"), Some(REQUIRED));
        assert_eq!(state.values.procedure_type, " Apendicectomía ");
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[tokio::test]
    async fn test_valid_surgery_builds_iso_payload() {
        let mut state: FormState<SurgeryForm> = FormState::create();
        state.values = valid_surgery_form();
        let mut sent = None;

        let outcome = submit(&mut state, |submission| {
            sent = Some(submission);
            async { Ok(()) }
        })
        .await;

        assert_eq!(outcome, SubmitOutcome::Saved);
        match sent {
            Some(Submission::Create(request)) => {
                assert_eq!(request.patient_id, 12);
                assert_eq!(request.scheduled_start, "2025-06-25T08:30:00");
                assert_eq!(request.duration_minutes, Some(90));
                assert_eq!(request.procedure_type, "Apendicectomía");
                assert_eq!(request.status, SurgeryStatus::Scheduled);
            }
            other => panic!("unexpected submission: {:?}", other),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[tokio::test]
    async fn test_backend_failure_keeps_values_and_message() {
        let mut state = FormState::edit(valid_surgery_form());

        let outcome = submit(&mut state, |_| async {
            Err(ApiError::Backend {
                status: 400,
                message: "El quirófano no está disponible".to_string(),
            })
        })
        .await;

        assert_eq!(outcome, SubmitOutcome::Failed);
        assert_eq!(
            state.server_error.as_deref(),
            Some("El quirófano no está disponible")
        );
        assert_eq!(state.values, valid_surgery_form());
        assert!(!state.submitting);

        state.edit_field("room_name", |values| values.room_name = "Pabellón 3".to_string());
        assert_eq!(state.server_error, None);
    }

    #[test]
    fn test_surgery_duration_must_be_positive() {
        let form = SurgeryForm {
            duration_minutes: "-30".to_string(),
            ..valid_surgery_form()
        };
        let errors = form.build(FormMode::Create).unwrap_err();
        assert!(errors.for_field("duration_minutes").is_some());
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_surgery_edit_payload() {
        let submission = valid_surgery_form().build(FormMode::Edit).unwrap();
        match submission {
            Submission::Update(update) => {
                assert_eq!(update.scheduled_start.as_deref(), Some("2025-06-25T08:30:00"));
                assert_eq!(update.status, Some(SurgeryStatus::Scheduled));
            }
            Submission::Create(_) => panic!("edit mode must build an update"),
        }
    }

    #[test]
    fn test_patient_form_validation() {
        let form = PatientForm {
            first_name: "María".to_string(),
            last_name: "".to_string(),
            rut: "11.111.111-X".to_string(),
            birth_date: "1985-02-30".to_string(),
            ..PatientForm::default()
        };
        let errors = form.build(FormMode::Create).unwrap_err();
        assert_eq!(errors.for_field("last_name"), Some(REQUIRED));
        assert!(errors.for_field("rut").is_some());
        assert_eq!(errors.for_field("birth_date"), Some("Fecha inválida"));
        assert_eq!(errors.for_field("first_name"), None);
    }

    #[test]
    fn test_patient_form_payload_drops_blank_optionals() {
        let form = PatientForm {
            first_name: "María".to_string(),
            last_name: "González".to_string(),
            rut: "11.111.111-1".to_string(),
            birth_date: "1985-02-14".to_string(),
            insurance: "FONASA".to_string(),
            phone: "   ".to_string(),
            ..PatientForm::default()
        };
        match form.build(FormMode::Create).unwrap() {
            Submission::Create(request) => {
                assert_eq!(request.birth_date, "1985-02-14");
                assert_eq!(request.insurance.as_deref(), Some("FONASA"));
                assert_eq!(request.phone, None);
            }
            Submission::Update(_) => panic!("create mode must build a create request"),
        }
    }

    #[test]
    fn test_user_password_only_required_when_creating() {
        let account = UserAccount {
            id: 5,
            first_name: "Ana".to_string(),
            last_name: "Pérez".to_string(),
            rut: "15.222.333-4".to_string(),
            email: "ana@clinicabak.cl".to_string(),
            phone: None,
            role: UserRole::Nurse,
            specialty: None,
            active: true,
            created_at: None,
            last_access: None,
        };
        let form = UserForm::from_user(&account);
        assert!(form.password.is_empty());
        assert_eq!(form.role, "enfermero");

        match form.build(FormMode::Edit).unwrap() {
            Submission::Update(update) => {
                let json = serde_json::to_value(&update).unwrap();
                assert!(json.get("contrasena").is_none());
                assert_eq!(json["rol"], "enfermero");
            }
            Submission::Create(_) => panic!("edit mode must build an update"),
        }

        let errors = form.build(FormMode::Create).unwrap_err();
        assert_eq!(errors.for_field("password"), Some(REQUIRED));
    }

    #[test]
    fn test_cleaning_form_requires_status() {
        let errors = CleaningForm::default().build(FormMode::Edit).unwrap_err();
        assert_eq!(errors.for_field("status"), Some(REQUIRED));

        let form = CleaningForm {
            status: "En Limpieza".to_string(),
            notes: "".to_string(),
        };
        assert_eq!(
            form.build(FormMode::Edit).unwrap(),
            Submission::Update(RoomCleaningUpdateRequest {
                status: Some(CleaningStatus::InCleaning),
                notes: Some(None),
            })
        );
    }

    #[test]
    fn test_edit_sends_cleared_fields_as_null() {
        let form = SurgeryForm {
            room_name: "  ".to_string(),
            preop_notes: String::new(),
            postop_notes: "Sin complicaciones".to_string(),
            ..valid_surgery_form()
        };
        let update = match form.build(FormMode::Edit).unwrap() {
            Submission::Update(update) => update,
            Submission::Create(_) => panic!("edit mode must build an update"),
        };
        let json = serde_json::to_value(&update).unwrap();
        assert!(json["nombre_quirofano"].is_null());
        assert!(json.as_object().unwrap().contains_key("nombre_quirofano"));
        assert!(json.as_object().unwrap().contains_key("notas_preoperatorias"));
        assert_eq!(json["notas_postoperatorias"], "Sin complicaciones");

        let patient = PatientForm {
            first_name: "María".to_string(),
            last_name: "González".to_string(),
            rut: "11.111.111-1".to_string(),
            birth_date: "1985-02-14".to_string(),
            phone: String::new(),
            ..PatientForm::default()
        };
        match patient.build(FormMode::Edit).unwrap() {
            Submission::Update(update) => {
                let json = serde_json::to_value(&update).unwrap();
                assert!(json.as_object().unwrap().contains_key("telefono"));
                assert!(json["telefono"].is_null());
            }
            Submission::Create(_) => panic!("edit mode must build an update"),
        }

        let cleaning = CleaningForm {
            status: "Disponible".to_string(),
            notes: String::new(),
        };
        match cleaning.build(FormMode::Edit).unwrap() {
            Submission::Update(update) => {
                let json = serde_json::to_value(&update).unwrap();
                assert!(json.as_object().unwrap().contains_key("notas_limpieza"));
            }
            Submission::Create(_) => panic!("cleaning always builds an update"),
        }
    }
}
