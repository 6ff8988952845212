use homeprice_common::api::{LocationApi, LocationQuery, LocationsResponse};
use homeprice_common::error::ClientError;
use homeprice_common::location::{Level, LocationCascade};
use std::rc::Rc;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::api_client::ApiClient;
use crate::common::error::InlineAlert;
use crate::hooks::use_services;

#[derive(Clone, Default, PartialEq)]
struct CascadeStore {
    cascade: LocationCascade,
    /// Query returned by the last transition, numbered so that asking for the
    /// same list twice still triggers a fetch
    pending: Option<(u64, LocationQuery)>,
    issued: u64,
}

impl CascadeStore {
    fn issue(&mut self, query: Option<LocationQuery>) {
        self.pending = query.map(|query| {
            self.issued += 1;
            (self.issued, query)
        });
    }
}

enum CascadeAction {
    BeginRegions,
    Select { level: Level, value: String },
    Loaded {
        query: LocationQuery,
        result: Result<LocationsResponse, ClientError>,
    },
}

impl Reducible for CascadeStore {
    type Action = CascadeAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut store = (*self).clone();
        match action {
            CascadeAction::BeginRegions => {
                let query = store.cascade.begin_load_regions();
                store.issue(Some(query));
            }
            CascadeAction::Select { level, value } => {
                // Descendants are cleared before the request goes out
                let query = store.cascade.select(level, &value);
                store.issue(query);
            }
            CascadeAction::Loaded { query, result } => {
                let applied = store.cascade.apply(&query, result);
                log::trace!("Location response for {:?}: {:?}", query, applied);
            }
        }
        Rc::new(store)
    }
}

fn fetch(api: ApiClient, dispatcher: UseReducerDispatcher<CascadeStore>, query: LocationQuery) {
    wasm_bindgen_futures::spawn_local(async move {
        let result = api.fetch_locations(&query).await;
        dispatcher.dispatch(CascadeAction::Loaded { query, result });
    });
}

/// The State, City and Locality dropdowns.
#[function_component(LocationFields)]
pub fn location_fields() -> Html {
    let services = use_services();
    let cascade = use_reducer(CascadeStore::default);

    // Load states on mount
    {
        let dispatcher = cascade.dispatcher();
        use_effect_with((), move |_| {
            log::debug!("Loading states");
            dispatcher.dispatch(CascadeAction::BeginRegions);
            || ()
        });
    }

    // Run whatever the last transition asked for
    {
        let api = services.api.clone();
        let dispatcher = cascade.dispatcher();
        use_effect_with(cascade.pending.clone(), move |pending| {
            if let Some((_, query)) = pending.clone() {
                fetch(api, dispatcher, query);
            }
            || ()
        });
    }

    let select_for = |level: Level| {
        let field = cascade.cascade.field(level);
        let onchange = {
            let dispatcher = cascade.dispatcher();
            Callback::from(move |e: Event| {
                let value = e.target_unchecked_into::<HtmlSelectElement>().value();
                dispatcher.dispatch(CascadeAction::Select { level, value });
            })
        };

        html! {
            <div class="form-control">
                <label class="label">
                    <span class="label-text">{level.field_name()}</span>
                    {if field.loading {
                        html! { <span class="loading loading-spinner loading-xs"></span> }
                    } else {
                        html! {}
                    }}
                </label>
                <select
                    name={level.field_name()}
                    class="select select-bordered w-full"
                    required={true}
                    disabled={!field.enabled}
                    onchange={onchange}
                >
                    {for field.options().into_iter().map(|option| {
                        let selected = if option.value.is_empty() {
                            field.selected.is_none()
                        } else {
                            field.is_selected(&option.value)
                        };
                        html! {
                            <option value={option.value} selected={selected}>{option.label}</option>
                        }
                    })}
                </select>
            </div>
        }
    };

    html! {
        <>
            <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                {for Level::ALL.into_iter().map(select_for)}
            </div>
            {if let Some(notice) = cascade.cascade.notice() {
                html! { <div class="mt-2"><InlineAlert message={notice.to_string()} /></div> }
            } else {
                html! {}
            }}
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(store: Rc<CascadeStore>, action: CascadeAction) -> Rc<CascadeStore> {
        store.reduce(action)
    }

    fn cities(values: &[&str]) -> LocationsResponse {
        LocationsResponse {
            cities: values.iter().map(|v| v.to_string()).collect(),
            ..Default::default()
        }
    }

    fn select(level: Level, value: &str) -> CascadeAction {
        CascadeAction::Select { level, value: value.to_string() }
    }

    #[test]
    fn test_select_issues_the_query_it_returns() {
        let store = step(Rc::new(CascadeStore::default()), CascadeAction::BeginRegions);
        assert_eq!(store.pending, Some((1, LocationQuery::States)));

        let store = step(store, select(Level::Region, "Karnataka"));
        let karnataka = LocationQuery::Cities { state: "Karnataka".to_string() };
        assert_eq!(store.pending, Some((2, karnataka.clone())));
        assert!(store.cascade.field(Level::SubRegion).loading);

        let store = step(store, CascadeAction::Loaded { query: karnataka, result: Ok(cities(&["Bangalore"])) });
        assert_eq!(store.pending.as_ref().map(|(n, _)| *n), Some(2));
        assert!(store.cascade.field(Level::SubRegion).enabled);
    }

    #[test]
    fn test_empty_selection_issues_nothing() {
        let store = step(Rc::new(CascadeStore::default()), select(Level::Region, "Karnataka"));
        let store = step(store, select(Level::Region, ""));

        assert_eq!(store.pending, None);
        assert!(!store.cascade.field(Level::SubRegion).enabled);
    }

    #[test]
    fn test_repeated_query_is_issued_again() {
        let store = step(Rc::new(CascadeStore::default()), select(Level::Region, "Goa"));
        let first = store.pending.clone();
        let store = step(store, select(Level::Region, "Goa"));

        assert_ne!(store.pending, first);
        assert_eq!(
            store.pending.clone().map(|(_, query)| query),
            Some(LocationQuery::Cities { state: "Goa".to_string() })
        );
    }

    #[test]
    fn test_stale_answer_leaves_store_untouched() {
        let store = step(Rc::new(CascadeStore::default()), select(Level::Region, "Karnataka"));
        let store = step(store, select(Level::Region, "Kerala"));
        let store = step(
            store,
            CascadeAction::Loaded {
                query: LocationQuery::Cities { state: "Karnataka".to_string() },
                result: Ok(cities(&["Bangalore"])),
            },
        );

        assert!(store.cascade.field(Level::SubRegion).choices.is_empty());
        assert!(store.cascade.field(Level::SubRegion).loading);
    }
}
