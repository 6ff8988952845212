use homeprice_common::api::{PredictionApi, PredictionResponse};
use homeprice_common::error::ClientError;
use homeprice_common::form::{FormSnapshot, FLOOR_FIELD, PROPERTY_TYPE_FIELD};
use homeprice_common::property::{FloorField, PROPERTY_TYPES};
use homeprice_common::submit::Submission;
use std::rc::Rc;
use web_sys::{FormData, HtmlFormElement, HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use super::amenities::AmenitiesPicker;
use super::location_fields::LocationFields;
use super::result::ResultCard;
use crate::common::error::{AlertKind, InlineAlert};
use crate::hooks::use_services;

const FURNISHED_STATUSES: [&str; 3] = ["Furnished", "Semi-Furnished", "Unfurnished"];
const ACCESSIBILITY_LEVELS: [&str; 3] = ["High", "Medium", "Low"];
const YES_NO: [&str; 2] = ["Yes", "No"];
const FACINGS: [&str; 4] = ["North", "South", "East", "West"];
const OWNER_TYPES: [&str; 3] = ["Owner", "Builder", "Broker"];
const AVAILABILITY_STATUSES: [&str; 2] = ["Ready_to_Move", "Under_Construction"];

#[derive(Clone, Default, PartialEq)]
struct SubmissionStore(Submission);

enum SubmissionAction {
    Begin,
    Finish(Result<PredictionResponse, ClientError>),
}

impl Reducible for SubmissionStore {
    type Action = SubmissionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut submission = self.0.clone();
        match action {
            SubmissionAction::Begin => {
                submission.begin();
            }
            SubmissionAction::Finish(result) => {
                submission.finish(result);
            }
        }
        Rc::new(Self(submission))
    }
}

/// Every named entry of the form, in document order.
fn form_entries(form: &HtmlFormElement) -> Vec<(String, String)> {
    let form_data = match FormData::new_with_form(form) {
        Ok(data) => data,
        Err(e) => {
            log::error!("Failed to read form data: {:?}", e);
            return Vec::new();
        }
    };
    let Ok(Some(entries)) = js_sys::try_iter(&form_data) else {
        log::error!("Form data is not iterable");
        return Vec::new();
    };

    entries
        .filter_map(Result::ok)
        .filter_map(|entry| {
            let pair = js_sys::Array::from(&entry);
            Some((pair.get(0).as_string()?, pair.get(1).as_string()?))
        })
        .collect()
}

fn select_field(name: &'static str, label: &'static str, choices: &'static [&'static str]) -> Html {
    html! {
        <div class="form-control">
            <label class="label"><span class="label-text">{label}</span></label>
            <select name={name} class="select select-bordered w-full" required={true}>
                <option value="" selected={true} disabled={true}>{format!("Select {}", label)}</option>
                {for choices.iter().map(|choice| html! { <option value={*choice}>{*choice}</option> })}
            </select>
        </div>
    }
}

fn number_field(name: &'static str, label: &'static str, placeholder: &'static str) -> Html {
    html! {
        <div class="form-control">
            <label class="label"><span class="label-text">{label}</span></label>
            <input type="number" name={name} min="0" class="input input-bordered w-full" placeholder={placeholder} required={true} />
        </div>
    }
}

/// Property details form and the estimate it produces.
#[function_component(PredictionForm)]
pub fn prediction_form() -> Html {
    let services = use_services();
    let form_ref = use_node_ref();
    let submission = use_reducer(SubmissionStore::default);
    let ignored = use_state(Vec::<String>::new);
    let floor = use_state(|| {
        let mut field = FloorField::default();
        field.apply_property_type(PROPERTY_TYPES[0]);
        field
    });

    let on_property_type = {
        let floor = floor.clone();
        Callback::from(move |e: Event| {
            let property_type = e.target_unchecked_into::<HtmlSelectElement>().value();
            log::debug!("Property type changed: {}", property_type);
            let mut next = (*floor).clone();
            next.apply_property_type(&property_type);
            floor.set(next);
        })
    };

    let on_floor_input = {
        let floor = floor.clone();
        Callback::from(move |e: InputEvent| {
            let value = e.target_unchecked_into::<HtmlInputElement>().value();
            let mut next = (*floor).clone();
            next.set_value(&value);
            floor.set(next);
        })
    };

    let on_submit = {
        let api = services.api.clone();
        let form_ref = form_ref.clone();
        let submission = submission.clone();
        let floor = floor.clone();
        let ignored = ignored.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if submission.0.is_in_flight() {
                return;
            }
            let Some(form) = form_ref.cast::<HtmlFormElement>() else {
                return;
            };

            let (snapshot, gaps) = FormSnapshot::capture(form_entries(&form), Some(floor.value.as_str()));
            ignored.set(gaps.into_iter().map(|gap| gap.field).collect());
            log::info!("Submitting prediction with {} fields", snapshot.len());

            submission.dispatch(SubmissionAction::Begin);
            let api = api.clone();
            let dispatcher = submission.dispatcher();
            wasm_bindgen_futures::spawn_local(async move {
                let result = api.predict(&snapshot).await;
                // Always unlocks the submit button
                dispatcher.dispatch(SubmissionAction::Finish(result));
            });
        })
    };

    let in_flight = submission.0.is_in_flight();

    html! {
        <>
            <form ref={form_ref} onsubmit={on_submit} class="card bg-base-100 shadow-xl">
                <div class="card-body space-y-4">
                    <h2 class="card-title">{"Property Details"}</h2>

                    <LocationFields />

                    <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                        <div class="form-control">
                            <label class="label"><span class="label-text">{"Property Type"}</span></label>
                            <select name={PROPERTY_TYPE_FIELD} class="select select-bordered w-full" onchange={on_property_type}>
                                {for PROPERTY_TYPES.iter().enumerate().map(|(i, kind)| html! {
                                    <option value={*kind} selected={i == 0}>{*kind}</option>
                                })}
                            </select>
                        </div>
                        {number_field("BHK", "BHK", "e.g. 3")}
                        {number_field("Size_in_SqFt", "Size (sq ft)", "e.g. 1200")}
                    </div>

                    <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                        <div class="form-control">
                            <label class="label"><span class="label-text">{"Floor No"}</span></label>
                            <input
                                type="number"
                                name={FLOOR_FIELD}
                                min="0"
                                class="input input-bordered w-full"
                                placeholder={floor.placeholder()}
                                value={floor.value.clone()}
                                disabled={!floor.enabled}
                                oninput={on_floor_input}
                            />
                        </div>
                        {number_field("Total_Floors", "Total Floors", "e.g. 10")}
                        {number_field("Age_of_Property", "Age of Property (years)", "e.g. 5")}
                    </div>

                    <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                        {select_field("Furnished_Status", "Furnished Status", &FURNISHED_STATUSES)}
                        {number_field("Nearby_Schools", "Nearby Schools", "e.g. 3")}
                        {number_field("Nearby_Hospitals", "Nearby Hospitals", "e.g. 2")}
                    </div>

                    <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                        {select_field("Public_Transport_Accessibility", "Public Transport", &ACCESSIBILITY_LEVELS)}
                        {select_field("Parking_Space", "Parking Space", &YES_NO)}
                        {select_field("Security", "Security", &YES_NO)}
                    </div>

                    <AmenitiesPicker />

                    <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                        {select_field("Facing", "Facing", &FACINGS)}
                        {select_field("Owner_Type", "Owner Type", &OWNER_TYPES)}
                        {select_field("Availability_Status", "Availability", &AVAILABILITY_STATUSES)}
                    </div>

                    {if ignored.is_empty() {
                        html! {}
                    } else {
                        html! {
                            <InlineAlert
                                kind={AlertKind::Warning}
                                message={format!("Ignored non-numeric value in: {}", ignored.join(", "))}
                            />
                        }
                    }}

                    <div class="card-actions justify-end">
                        <button type="submit" class="btn btn-primary" disabled={in_flight}>
                            {if in_flight {
                                html! { <span class="loading loading-spinner loading-sm"></span> }
                            } else {
                                html! { <i class="fas fa-calculator"></i> }
                            }}
                            {submission.0.button_label()}
                        </button>
                    </div>
                </div>
            </form>

            {if let Some(outcome) = submission.0.outcome() {
                html! { <ResultCard outcome={outcome.clone()} /> }
            } else {
                html! {}
            }}
        </>
    }
}
