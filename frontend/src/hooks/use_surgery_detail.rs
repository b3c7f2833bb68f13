use shared::{Patient, Surgery, SurgeryStatus, SurgeryUpdateRequest};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::domain::status_actions::can_change_surgery;
use crate::session::SessionContext;

#[derive(Clone, PartialEq)]
pub struct SurgeryDetailState {
    pub surgery: Option<Surgery>,
    pub patient: Option<Patient>,
    pub loading: bool,
    pub updating: bool,
    pub error: Option<String>,
}

pub struct UseSurgeryDetailResult {
    pub state: SurgeryDetailState,
    pub actions: UseSurgeryDetailActions,
}

#[derive(Clone)]
pub struct UseSurgeryDetailActions {
    pub change_status: Callback<SurgeryStatus>,
    pub refresh: Callback<()>,
}

#[hook]
pub fn use_surgery_detail(session: &SessionContext, surgery_id: i64) -> UseSurgeryDetailResult {
    let surgery = use_state(|| Option::<Surgery>::None);
    let patient = use_state(|| Option::<Patient>::None);
    let loading = use_state(|| true);
    let updating = use_state(|| false);
    let error = use_state(|| Option::<String>::None);

    let refresh = {
        let session = session.clone();
        let surgery = surgery.clone();
        let patient = patient.clone();
        let loading = loading.clone();
        let error = error.clone();

        use_callback(surgery_id, move |_: (), surgery_id| {
            let session = session.clone();
            let surgery = surgery.clone();
            let patient = patient.clone();
            let loading = loading.clone();
            let error = error.clone();
            let surgery_id = *surgery_id;

            spawn_local(async move {
                loading.set(true);
                let client = session.client();
                match client.get_surgery(surgery_id).await {
                    Ok(found) => {
                        // patient details are a nicety; the screen works without them
                        match client.get_patient(found.patient_id).await {
                            Ok(found_patient) => patient.set(Some(found_patient)),
                            Err(e) => log::warn!("Patient {} unavailable: {}", found.patient_id, e),
                        }
                        surgery.set(Some(found));
                        error.set(None);
                    }
                    Err(e) => error.set(Some(session.report("Loading surgery", &e))),
                }
                loading.set(false);
            });
        })
    };

    use_effect_with(surgery_id, {
        let refresh = refresh.clone();
        move |_| {
            refresh.emit(());
            || ()
        }
    });

    let change_status = {
        let session = session.clone();
        let surgery = surgery.clone();
        let updating = updating.clone();
        let error = error.clone();

        Callback::from(move |target: SurgeryStatus| {
            let Some(current) = (*surgery).clone() else {
                return;
            };
            if !can_change_surgery(&current.status, &target) {
                log::warn!("Ignoring {} -> {} for surgery {}", current.status, target, current.id);
                return;
            }

            let session = session.clone();
            let surgery = surgery.clone();
            let updating = updating.clone();
            let error = error.clone();
            spawn_local(async move {
                updating.set(true);
                let request = SurgeryUpdateRequest::status_only(target.clone());
                match session.client().update_surgery(current.id, &request).await {
                    Ok(updated) => {
                        log::info!("Surgery {} is now {}", updated.id, updated.status);
                        surgery.set(Some(updated));
                        error.set(None);
                    }
                    Err(e) => error.set(Some(session.report("Changing surgery status", &e))),
                }
                updating.set(false);
            });
        })
    };

    let state = SurgeryDetailState {
        surgery: (*surgery).clone(),
        patient: (*patient).clone(),
        loading: *loading,
        updating: *updating,
        error: (*error).clone(),
    };

    let actions = UseSurgeryDetailActions {
        change_status,
        refresh,
    };

    UseSurgeryDetailResult { state, actions }
}
