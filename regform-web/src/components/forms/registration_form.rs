use std::rc::Rc;

use leptos::ev::SubmitEvent;
use leptos::*;
use regform::{
    FetchClient, FieldName, FieldRegistry, FormConfig, LifetimeToken,
    SubmitController, SubmitOutcome, UserSchema,
};
use uuid::Uuid;
use wasm_bindgen_futures::spawn_local;

use super::{FormField, SubmissionStatusView};
use crate::api::{BrowserNotifier, SignalFieldRegistry};
use crate::components::buttons::{ButtonType, FormButton};

type RegistrationController =
    SubmitController<UserSchema, FetchClient, BrowserNotifier>;

#[component]
pub fn RegistrationForm() -> impl IntoView {
    let form_id = Uuid::new_v4().to_string();
    let config = FormConfig::new();
    let controller: Rc<RegistrationController> = Rc::new(
        SubmitController::new(
            UserSchema::new(),
            FetchClient::from_config(&config),
            BrowserNotifier,
        )
        .with_config(&config),
    );

    let registry = SignalFieldRegistry::new();
    registry.register_all();
    let is_submitting = create_rw_signal(false);

    // responses arriving after unmount must not touch the disposed signals
    let token = LifetimeToken::new();
    on_cleanup({
        let token = token.clone();
        let form_id = form_id.clone();
        move || {
            log::debug!("Form {} unmounted", form_id);
            token.cancel();
        }
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let input = registry.input();
        let controller = Rc::clone(&controller);
        let token = token.clone();
        is_submitting.set(true);
        spawn_local(async move {
            let outcome = controller.submit(&input, &registry, &token).await;
            if matches!(outcome, SubmitOutcome::Discarded) {
                return;
            }
            log::debug!("Submit finished: {:?}", outcome);
            is_submitting.set(false);
        });
    };

    let fields = FieldName::ALL
        .into_iter()
        .map(|field| {
            view! { <FormField field signals=registry.signals(field)/> }
        })
        .collect_view();

    view! {
        <form id=form_id class="w-full p-4" on:submit=on_submit>
            <div class="grid col-auto gap-2">
                <h1 class="text-3xl font-bold mb-4">"Registration"</h1>
                {fields}
                {FormButton::new(ButtonType::Submit, None).into_view()}
            </div>
        </form>
        <SubmissionStatusView is_submitting=is_submitting.into()/>
    }
}
