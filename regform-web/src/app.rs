use leptos::*;
use leptos_meta::*;

use crate::components::forms::RegistrationForm;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Registration"/>
        <Stylesheet id="regform" href="/pkg/tailwind.css"/>
        <div class="my-0 mx-auto px-8 max-w-xl text-left">
            <RegistrationForm/>
        </div>
    }
}
