use leptos::*;
use regform::{FieldError, FieldName};

use crate::api::FieldSignals;

#[component]
pub fn FormField(field: FieldName, signals: FieldSignals) -> impl IntoView {
    let FieldSignals { value, error } = signals;

    view! {
        <div class="w-full flex-col items-start text-left mb-2 p-2 bg-white text-gray-800">
            <input
                type=field.input_type()
                name=field.as_str()
                placeholder=field.placeholder()
                prop:value=value
                on:input=move |ev| value.set(event_target_value(&ev))
                class=move || input_class(error.with(Option::is_some))
            />
            <FieldErrorView error/>
        </div>
    }
}

#[component]
pub fn FieldErrorView(error: RwSignal<Option<FieldError>>) -> impl IntoView {
    view! {
        <div class="text-red-500 text-sm">
            { move || error.with(|error| {
                error.as_ref().map(|e| e.message().to_string()).unwrap_or_default()
            })}
        </div>
    }
}

fn input_class(has_error: bool) -> &'static str {
    if has_error {
        "bg-gray-50 border border-red-500 text-gray-900 rounded-lg \
         focus:ring-red-500 focus:border-red-500 block w-full p-2.5"
    } else {
        "bg-gray-50 border border-gray-300 text-gray-900 rounded-lg \
         focus:ring-blue-500 focus:border-blue-500 block w-full p-2.5"
    }
}
