use leptos::*;

#[component]
pub fn SubmissionStatusView(is_submitting: Signal<bool>) -> impl IntoView {
    view! {
       { move || if is_submitting.get() {
           view! {
               <div class="text-gray-600">
                   "Submitting..."
               </div>
           }.into_view()
       } else {
           view! { }.into_view()
       }}
    }
}
