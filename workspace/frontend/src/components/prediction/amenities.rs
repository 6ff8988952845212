use homeprice_common::amenities::{AmenitySelection, AMENITIES, AMENITIES_PLACEHOLDER};
use homeprice_common::form::AMENITIES_FIELD;
use wasm_bindgen::JsCast;
use yew::prelude::*;

/// Multi-select dropdown with removable tags. The picked amenities travel in
/// a hidden form field.
#[function_component(AmenitiesPicker)]
pub fn amenities_picker() -> Html {
    let selection = use_state(AmenitySelection::default);
    let open = use_state(|| false);
    let container_ref = use_node_ref();

    let on_toggle_open = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| open.set(!*open))
    };

    // Close when focus leaves the picker, e.g. on a click elsewhere
    let on_focus_out = {
        let open = open.clone();
        let container_ref = container_ref.clone();
        Callback::from(move |e: FocusEvent| {
            let inside = match (container_ref.cast::<web_sys::Node>(), e.related_target()) {
                (Some(container), Some(target)) => container.contains(target.dyn_ref::<web_sys::Node>()),
                _ => false,
            };
            if !inside {
                open.set(false);
            }
        })
    };

    let tags = if selection.is_empty() {
        html! { <span class="text-gray-400">{AMENITIES_PLACEHOLDER}</span> }
    } else {
        html! {
            {for selection.iter().map(|amenity| {
                let on_remove = {
                    let selection = selection.clone();
                    let amenity = amenity.to_string();
                    Callback::from(move |e: MouseEvent| {
                        // Keep the dropdown as it is
                        e.stop_propagation();
                        let mut next = (*selection).clone();
                        next.remove(&amenity);
                        selection.set(next);
                    })
                };
                html! {
                    <span class="badge badge-primary gap-1">
                        {amenity}
                        <i class="fas fa-times cursor-pointer" onclick={on_remove}></i>
                    </span>
                }
            })}
        }
    };

    let options = AMENITIES.into_iter().map(|amenity| {
        let checked = selection.contains(amenity);
        let on_change = {
            let selection = selection.clone();
            Callback::from(move |_: Event| {
                let mut next = (*selection).clone();
                next.toggle(amenity);
                selection.set(next);
            })
        };
        html! {
            <li>
                <label class="label cursor-pointer justify-start gap-3">
                    <input type="checkbox" class="checkbox checkbox-sm" checked={checked} onchange={on_change} />
                    <span class="label-text">{amenity}</span>
                </label>
            </li>
        }
    });

    html! {
        <div class="form-control">
            <label class="label"><span class="label-text">{"Amenities"}</span></label>
            <input type="hidden" name={AMENITIES_FIELD} value={selection.field_value()} />
            <div ref={container_ref} class="dropdown w-full" onfocusout={on_focus_out}>
                <div
                    tabindex="0"
                    role="button"
                    class="input input-bordered w-full flex flex-wrap items-center gap-1 h-auto min-h-12 py-2"
                    onclick={on_toggle_open}
                >
                    {tags}
                </div>
                {if *open {
                    html! {
                        <ul tabindex="-1" class="dropdown-content menu bg-base-100 rounded-box z-10 w-full p-2 shadow">
                            {for options}
                        </ul>
                    }
                } else {
                    html! {}
                }}
            </div>
        </div>
    }
}
