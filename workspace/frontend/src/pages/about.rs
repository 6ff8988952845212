use yew::prelude::*;

#[function_component(AboutPage)]
pub fn about_page() -> Html {
    html! {
        <div class="max-w-3xl mx-auto card bg-base-100 shadow-xl">
            <div class="card-body space-y-4">
                <h1 class="card-title text-3xl">{"About HomePrice"}</h1>
                <p>
                    {"HomePrice estimates residential property prices across Indian states, cities and localities. "}
                    {"The estimate comes from a machine learning model trained on listing data."}
                </p>
                <h2 class="text-xl font-semibold">{"What goes into an estimate"}</h2>
                <ul class="list-disc list-inside space-y-1">
                    <li>{"Location: state, city and locality"}</li>
                    <li>{"Property type, size, BHK and floor"}</li>
                    <li>{"Age, furnishing, facing and availability"}</li>
                    <li>{"Nearby schools, hospitals and public transport"}</li>
                    <li>{"Parking, security and amenities"}</li>
                </ul>
                <p class="text-sm text-gray-500">
                    {"Prices are shown in lakhs, or in crores from one hundred lakhs upwards. "}
                    {"Estimates are indicative only."}
                </p>
            </div>
        </div>
    }
}
