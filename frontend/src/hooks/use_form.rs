use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::domain::forms::{submit, FormModel, FormState, SubmitOutcome, Submission};
use crate::services::api::ApiError;
use crate::session::SessionContext;

/// Sends a validated payload to the backend
pub type SendFn<M> = Rc<
    dyn Fn(
        Submission<<M as FormModel>::Create, <M as FormModel>::Update>,
    ) -> Pin<Box<dyn Future<Output = Result<(), ApiError>>>>,
>;

/// Wrap an async closure as a [`SendFn`]
pub fn sender<M, F, Fut>(send: F) -> SendFn<M>
where
    M: FormModel,
    F: Fn(Submission<M::Create, M::Update>) -> Fut + 'static,
    Fut: Future<Output = Result<(), ApiError>> + 'static,
{
    Rc::new(
        move |submission: Submission<M::Create, M::Update>| -> Pin<Box<dyn Future<Output = Result<(), ApiError>>>> {
            Box::pin(send(submission))
        },
    )
}

pub struct UseFormResult<M: FormModel> {
    pub state: UseStateHandle<FormState<M>>,
    pub on_submit: Callback<SubmitEvent>,
}

impl<M: FormModel + 'static> UseFormResult<M> {
    /// Callback updating one field from an input's new value
    pub fn field(&self, name: &'static str, set: fn(&mut M, String)) -> Callback<String> {
        let state = self.state.clone();
        Callback::from(move |value: String| {
            let mut next = (*state).clone();
            next.edit_field(name, |values| set(values, value));
            state.set(next);
        })
    }

    pub fn error(&self, field: &str) -> Option<String> {
        self.state.errors.for_field(field).map(str::to_string)
    }
}

#[hook]
pub fn use_form<M, I>(
    session: &SessionContext,
    init: I,
    send: SendFn<M>,
    on_saved: Callback<()>,
) -> UseFormResult<M>
where
    M: FormModel + 'static,
    I: FnOnce() -> FormState<M>,
{
    let state = use_state(init);

    let on_submit = {
        let state = state.clone();
        let session = session.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let mut draft = (*state).clone();
            if draft.submitting {
                return;
            }
            if draft.values.build(draft.mode).is_ok() {
                let mut busy = draft.clone();
                busy.submitting = true;
                state.set(busy);
            }

            let state = state.clone();
            let session = session.clone();
            let send = send.clone();
            let on_saved = on_saved.clone();
            spawn_local(async move {
                let outcome = submit(&mut draft, |submission| {
                    let request = send(submission);
                    async move {
                        let result = request.await;
                        if let Err(error) = &result {
                            if error.is_unauthorized() {
                                session.logout();
                            }
                        }
                        result
                    }
                })
                .await;
                state.set(draft);

                if outcome == SubmitOutcome::Saved {
                    on_saved.emit(());
                }
            });
        })
    };

    UseFormResult { state, on_submit }
}
