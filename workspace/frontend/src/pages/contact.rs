use homeprice_common::contact::{send_contact, ContactMessage, ContactStatus};
use web_sys::{FormData, HtmlFormElement, HtmlInputElement};
use yew::prelude::*;

use crate::common::error::{AlertKind, InlineAlert};
use crate::hooks::{use_services, use_session};

#[function_component(ContactPage)]
pub fn contact_page() -> Html {
    let services = use_services();
    let session = use_session();
    let form_ref = use_node_ref();
    let email_ref = use_node_ref();
    let is_sending = use_state(|| false);
    let status = use_state(|| None::<ContactStatus>);

    // Prefill the signed-in user's email
    {
        let email_ref = email_ref.clone();
        let email = session.state.email().map(str::to_string);
        use_effect_with(email, move |email| {
            if let (Some(email), Some(input)) = (email, email_ref.cast::<HtmlInputElement>()) {
                input.set_value(email);
            }
            || ()
        });
    }

    let on_submit = {
        let store = services.store.clone();
        let form_ref = form_ref.clone();
        let is_sending = is_sending.clone();
        let status = status.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if *is_sending {
                return;
            }
            let Some(form) = form_ref.cast::<HtmlFormElement>() else {
                return;
            };
            let form_data = match FormData::new_with_form(&form) {
                Ok(data) => data,
                Err(e) => {
                    log::error!("Failed to read contact form: {:?}", e);
                    return;
                }
            };
            let field = |name: &str| form_data.get(name).as_string().unwrap_or_default();

            let message = match ContactMessage::new(
                &field("name"),
                &field("email"),
                &field("subject"),
                &field("message"),
                chrono::Utc::now(),
            ) {
                Ok(message) => message,
                Err(err) => {
                    status.set(Some(err.into()));
                    return;
                }
            };

            let store = store.clone();
            let is_sending = is_sending.clone();
            let status = status.clone();

            is_sending.set(true);
            status.set(None);

            wasm_bindgen_futures::spawn_local(async move {
                let outcome = send_contact(&store, &message).await;
                if outcome == ContactStatus::Sent {
                    form.reset();
                }
                status.set(Some(outcome));
                is_sending.set(false);
            });
        })
    };

    html! {
        <div class="max-w-2xl mx-auto card bg-base-100 shadow-xl">
            <form ref={form_ref} onsubmit={on_submit} class="card-body space-y-4">
                <h1 class="card-title text-2xl">{"Contact Us"}</h1>
                <p class="text-sm text-gray-500">{"Questions about an estimate? Send us a message."}</p>

                <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                    <div class="form-control">
                        <label class="label"><span class="label-text">{"Name"}</span></label>
                        <input type="text" name="name" class="input input-bordered w-full" disabled={*is_sending} />
                    </div>
                    <div class="form-control">
                        <label class="label"><span class="label-text">{"Email"}</span></label>
                        <input ref={email_ref} type="email" name="email" class="input input-bordered w-full" disabled={*is_sending} />
                    </div>
                </div>
                <div class="form-control">
                    <label class="label"><span class="label-text">{"Subject"}</span></label>
                    <input type="text" name="subject" class="input input-bordered w-full" disabled={*is_sending} />
                </div>
                <div class="form-control">
                    <label class="label"><span class="label-text">{"Message"}</span></label>
                    <textarea name="message" rows="5" class="textarea textarea-bordered w-full" disabled={*is_sending} />
                </div>

                <div class="card-actions justify-end">
                    <button type="submit" class="btn btn-primary" disabled={*is_sending}>
                        {if *is_sending { "Sending..." } else { "Send Message" }}
                    </button>
                </div>

                {if let Some(status) = (*status).as_ref() {
                    let kind = match status {
                        ContactStatus::Sent => AlertKind::Success,
                        ContactStatus::Failed(_) => AlertKind::Error,
                    };
                    html! {
                        <InlineAlert
                            message={status.text().to_string()}
                            title={Some(status.title().to_string())}
                            kind={kind}
                        />
                    }
                } else {
                    html! {}
                }}
            </form>
        </div>
    }
}
