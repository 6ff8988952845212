//! State → City → Locality cascade.
//!
//! [`LocationCascade`] owns the three dependent dropdowns. Every change goes
//! through two steps so the UI can render between them:
//!
//! 1. [`LocationCascade::select`] records the choice and synchronously clears
//!    and disables every descendant, returning the query to issue (if any);
//! 2. [`LocationCascade::apply`] stores the response of that query.
//!
//! A response whose filter no longer matches the current parent selection is
//! dropped, so a slow request can never fill a field for a parent the user has
//! already moved away from.

use tracing::{debug, error, warn};

use crate::api::{LocationQuery, LocationsResponse};
use crate::error::ClientError;

/// Position of a field in the cascade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    Region,
    SubRegion,
    Area,
}

impl Level {
    pub const ALL: [Level; 3] = [Level::Region, Level::SubRegion, Level::Area];

    /// Form field name the backend expects.
    pub fn field_name(self) -> &'static str {
        match self {
            Level::Region => "State",
            Level::SubRegion => "City",
            Level::Area => "Locality",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Level::Region => "Select State",
            Level::SubRegion => "Select City",
            Level::Area => "Select Locality",
        }
    }

    pub fn load_error(self) -> &'static str {
        match self {
            Level::Region => "Failed to load states. Please refresh the page.",
            Level::SubRegion => "Failed to load cities. Please try again.",
            Level::Area => "Failed to load localities. Please try again.",
        }
    }

    pub fn parent(self) -> Option<Level> {
        match self {
            Level::Region => None,
            Level::SubRegion => Some(Level::Region),
            Level::Area => Some(Level::SubRegion),
        }
    }

    /// Levels below this one, nearest first.
    pub fn descendants(self) -> &'static [Level] {
        match self {
            Level::Region => &[Level::SubRegion, Level::Area],
            Level::SubRegion => &[Level::Area],
            Level::Area => &[],
        }
    }
}

/// Current choice at every level.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    pub region: Option<String>,
    pub sub_region: Option<String>,
    pub area: Option<String>,
}

/// One `<option>` of a rendered dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

/// Render model of a single dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceField {
    pub level: Level,
    pub choices: Vec<String>,
    pub selected: Option<String>,
    pub enabled: bool,
    pub loading: bool,
}

impl ChoiceField {
    pub fn new(level: Level) -> Self {
        Self {
            level,
            choices: Vec::new(),
            selected: None,
            // the top level is always selectable, even while empty
            enabled: level == Level::Region,
            loading: false,
        }
    }

    fn clear(&mut self) {
        self.choices.clear();
        self.selected = None;
        self.enabled = self.level == Level::Region;
        self.loading = false;
    }

    /// Placeholder first, then one option per choice in server order.
    pub fn options(&self) -> Vec<SelectOption> {
        std::iter::once(SelectOption {
            value: String::new(),
            label: self.level.placeholder().to_string(),
        })
        .chain(self.choices.iter().map(|choice| SelectOption {
            value: choice.clone(),
            label: choice.clone(),
        }))
        .collect()
    }

    pub fn is_selected(&self, value: &str) -> bool {
        self.selected.as_deref() == Some(value)
    }
}

/// Outcome of [`LocationCascade::apply`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    /// Choices replaced; carries how many came back
    Populated(usize),
    /// The request failed and an inline error is shown
    Failed,
    /// The parent changed while the request was in flight
    Stale,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationCascade {
    region: ChoiceField,
    sub_region: ChoiceField,
    area: ChoiceField,
    notice: Option<String>,
}

impl Default for LocationCascade {
    fn default() -> Self {
        Self::new()
    }
}

impl LocationCascade {
    pub fn new() -> Self {
        Self {
            region: ChoiceField::new(Level::Region),
            sub_region: ChoiceField::new(Level::SubRegion),
            area: ChoiceField::new(Level::Area),
            notice: None,
        }
    }

    pub fn field(&self, level: Level) -> &ChoiceField {
        match level {
            Level::Region => &self.region,
            Level::SubRegion => &self.sub_region,
            Level::Area => &self.area,
        }
    }

    fn field_mut(&mut self, level: Level) -> &mut ChoiceField {
        match level {
            Level::Region => &mut self.region,
            Level::SubRegion => &mut self.sub_region,
            Level::Area => &mut self.area,
        }
    }

    pub fn selection(&self) -> SelectionState {
        SelectionState {
            region: self.region.selected.clone(),
            sub_region: self.sub_region.selected.clone(),
            area: self.area.selected.clone(),
        }
    }

    /// Inline error left by the last failed load.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Marks the region list as loading and returns the unfiltered query.
    pub fn begin_load_regions(&mut self) -> LocationQuery {
        self.region.clear();
        self.region.loading = true;
        LocationQuery::States
    }

    /// Records a choice at `level`, clears and disables every descendant, and
    /// returns the query that fills the next level.
    pub fn select(&mut self, level: Level, value: &str) -> Option<LocationQuery> {
        debug!(?level, value, "Location selected");
        self.field_mut(level).selected = (!value.is_empty()).then(|| value.to_string());
        for descendant in level.descendants() {
            self.field_mut(*descendant).clear();
        }

        let query = LocationQuery::for_children_of(level, value)?;
        self.field_mut(query.target()).loading = true;
        Some(query)
    }

    fn is_stale(&self, query: &LocationQuery) -> bool {
        match query.target().parent() {
            Some(parent) => self.field(parent).selected.as_deref() != query.filter_value(),
            None => false,
        }
    }

    /// Stores the outcome of `query` in the field it targets.
    pub fn apply(
        &mut self,
        query: &LocationQuery,
        result: Result<LocationsResponse, ClientError>,
    ) -> Applied {
        if self.is_stale(query) {
            debug!(?query, "Discarding stale location response");
            return Applied::Stale;
        }

        let level = query.target();
        match result {
            Ok(response) => {
                let choices = query.pick(response);
                if choices.is_empty() {
                    warn!(?query, "No {} returned from API", level.field_name());
                }
                let count = choices.len();
                let field = self.field_mut(level);
                field.enabled = level == Level::Region || count > 0;
                field.choices = choices;
                field.selected = None;
                field.loading = false;
                self.notice = None;
                Applied::Populated(count)
            }
            Err(err) => {
                error!(?query, %err, "Error loading {}", level.field_name());
                self.field_mut(level).clear();
                self.notice = Some(level.load_error().to_string());
                Applied::Failed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::LocationApi;
    use async_trait::async_trait;
    use std::cell::RefCell;
    use std::collections::HashMap;

    /// In-memory location endpoint keyed by query.
    #[derive(Default)]
    struct FakeLocations {
        responses: HashMap<Option<String>, LocationsResponse>,
        fail: bool,
        calls: RefCell<Vec<LocationQuery>>,
    }

    impl FakeLocations {
        fn with(mut self, filter: Option<&str>, response: LocationsResponse) -> Self {
            self.responses.insert(filter.map(str::to_string), response);
            self
        }
    }

    #[async_trait(?Send)]
    impl LocationApi for FakeLocations {
        async fn fetch_locations(&self, query: &LocationQuery) -> crate::error::Result<LocationsResponse> {
            self.calls.borrow_mut().push(query.clone());
            if self.fail {
                return Err(ClientError::Network("connection refused".to_string()));
            }
            Ok(self
                .responses
                .get(&query.filter_value().map(str::to_string))
                .cloned()
                .unwrap_or_default())
        }
    }

    fn states(values: &[&str]) -> LocationsResponse {
        LocationsResponse {
            states: values.iter().map(|v| v.to_string()).collect(),
            ..Default::default()
        }
    }

    fn cities(values: &[&str]) -> LocationsResponse {
        LocationsResponse {
            cities: values.iter().map(|v| v.to_string()).collect(),
            ..Default::default()
        }
    }

    fn localities(values: &[&str]) -> LocationsResponse {
        LocationsResponse {
            localities: values.iter().map(|v| v.to_string()).collect(),
            ..Default::default()
        }
    }

    fn fixture() -> FakeLocations {
        FakeLocations::default()
            .with(None, states(&["Karnataka", "Maharashtra"]))
            .with(Some("Karnataka"), cities(&["Bangalore"]))
            .with(Some("Maharashtra"), cities(&["Mumbai", "Pune"]))
            .with(Some("Bangalore"), localities(&["Whitefield", "Indiranagar"]))
            .with(Some("Mumbai"), localities(&["Andheri"]))
    }

    /// Issues the query a transition returned and applies its answer, the way
    /// the location dropdowns do.
    async fn fetch_into(
        cascade: &mut LocationCascade,
        api: &FakeLocations,
        query: Option<LocationQuery>,
    ) -> Option<Applied> {
        let query = query?;
        let result = api.fetch_locations(&query).await;
        Some(cascade.apply(&query, result))
    }

    async fn load_regions(cascade: &mut LocationCascade, api: &FakeLocations) -> Applied {
        let query = cascade.begin_load_regions();
        fetch_into(cascade, api, Some(query)).await.expect("region query always runs")
    }

    async fn change(
        cascade: &mut LocationCascade,
        api: &FakeLocations,
        level: Level,
        value: &str,
    ) -> Option<Applied> {
        let query = cascade.select(level, value);
        fetch_into(cascade, api, query).await
    }

    fn init_tracing() {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    }

    fn labels(field: &ChoiceField) -> Vec<String> {
        field.options().into_iter().map(|o| o.label).collect()
    }

    #[tokio::test]
    async fn test_load_regions_keeps_server_order() {
        let api = fixture();
        let mut cascade = LocationCascade::new();

        let applied = load_regions(&mut cascade, &api).await;

        assert_eq!(applied, Applied::Populated(2));
        assert_eq!(
            labels(cascade.field(Level::Region)),
            vec!["Select State", "Karnataka", "Maharashtra"]
        );
        assert_eq!(cascade.field(Level::Region).options()[0].value, "");
        assert!(cascade.field(Level::Region).enabled);
        assert!(!cascade.field(Level::SubRegion).enabled);
        assert!(!cascade.field(Level::Area).enabled);
        assert_eq!(api.calls.borrow().as_slice(), &[LocationQuery::States]);
    }

    #[tokio::test]
    async fn test_empty_region_list_shows_placeholder_only() {
        init_tracing();
        let api = FakeLocations::default().with(None, states(&[]));
        let mut cascade = LocationCascade::new();

        let applied = load_regions(&mut cascade, &api).await;

        assert_eq!(applied, Applied::Populated(0));
        assert_eq!(labels(cascade.field(Level::Region)), vec!["Select State"]);
        assert_eq!(cascade.notice(), None);
    }

    #[tokio::test]
    async fn test_region_load_failure_leaves_field_empty() {
        init_tracing();
        let api = FakeLocations { fail: true, ..Default::default() };
        let mut cascade = LocationCascade::new();

        let applied = load_regions(&mut cascade, &api).await;

        assert_eq!(applied, Applied::Failed);
        assert!(cascade.field(Level::Region).choices.is_empty());
        assert!(!cascade.field(Level::Region).loading);
        assert_eq!(cascade.notice(), Some("Failed to load states. Please refresh the page."));
    }

    #[tokio::test]
    async fn test_region_populates_single_city() {
        let api = fixture();
        let mut cascade = LocationCascade::new();
        load_regions(&mut cascade, &api).await;

        let applied = change(&mut cascade, &api, Level::Region, "Karnataka").await;

        assert_eq!(applied, Some(Applied::Populated(1)));
        let city = cascade.field(Level::SubRegion);
        assert_eq!(labels(city), vec!["Select City", "Bangalore"]);
        assert!(city.enabled);
        assert!(!city.loading);
        assert_eq!(
            api.calls.borrow().last(),
            Some(&LocationQuery::Cities { state: "Karnataka".to_string() })
        );
    }

    #[tokio::test]
    async fn test_region_without_cities_stays_disabled() {
        let api = fixture();
        let mut cascade = LocationCascade::new();

        let applied = change(&mut cascade, &api, Level::Region, "Goa").await;

        assert_eq!(applied, Some(Applied::Populated(0)));
        assert!(!cascade.field(Level::SubRegion).enabled);
    }

    #[tokio::test]
    async fn test_empty_region_clears_and_disables_descendants() {
        let api = fixture();
        let mut cascade = LocationCascade::new();
        load_regions(&mut cascade, &api).await;

        for region in ["Karnataka", "", "Maharashtra", "", ""] {
            change(&mut cascade, &api, Level::Region, region).await;
            if let Some(city) = cascade.field(Level::SubRegion).choices.first().cloned() {
                change(&mut cascade, &api, Level::SubRegion, &city).await;
            }
            if region.is_empty() {
                assert_eq!(cascade.selection(), SelectionState::default());
                for level in [Level::SubRegion, Level::Area] {
                    let field = cascade.field(level);
                    assert!(!field.enabled, "{level:?} should be disabled");
                    assert!(field.choices.is_empty());
                    assert_eq!(field.selected, None);
                }
            }
        }

        // an empty region issues no request
        let issued = api.calls.borrow().len();
        assert_eq!(change(&mut cascade, &api, Level::Region, "").await, None);
        assert_eq!(api.calls.borrow().len(), issued);
    }

    #[test]
    fn test_select_clears_descendants_before_fetch() {
        let mut cascade = LocationCascade::new();
        cascade.apply(&LocationQuery::States, Ok(states(&["Karnataka", "Maharashtra"])));
        let query = cascade.select(Level::Region, "Karnataka").unwrap();
        cascade.apply(&query, Ok(cities(&["Bangalore"])));
        let query = cascade.select(Level::SubRegion, "Bangalore").unwrap();
        cascade.apply(&query, Ok(localities(&["Whitefield"])));
        cascade.select(Level::Area, "Whitefield");

        let query = cascade.select(Level::Region, "Maharashtra");

        assert_eq!(query, Some(LocationQuery::Cities { state: "Maharashtra".to_string() }));
        let city = cascade.field(Level::SubRegion);
        assert!(city.loading);
        assert!(!city.enabled);
        assert!(city.choices.is_empty());
        let area = cascade.field(Level::Area);
        assert!(!area.enabled);
        assert_eq!(area.selected, None);
        assert_eq!(
            cascade.selection(),
            SelectionState { region: Some("Maharashtra".to_string()), ..Default::default() }
        );
    }

    #[test]
    fn test_stale_locality_response_is_discarded() {
        let mut cascade = LocationCascade::new();
        cascade.apply(&LocationQuery::States, Ok(states(&["Karnataka", "Maharashtra"])));
        let query = cascade.select(Level::Region, "Karnataka").unwrap();
        cascade.apply(&query, Ok(cities(&["Bangalore"])));
        let bangalore = cascade.select(Level::SubRegion, "Bangalore").unwrap();

        // the user switches state before the Bangalore localities arrive
        let maharashtra = cascade.select(Level::Region, "Maharashtra").unwrap();
        cascade.apply(&maharashtra, Ok(cities(&["Mumbai", "Pune"])));
        let applied = cascade.apply(&bangalore, Ok(localities(&["Whitefield"])));

        assert_eq!(applied, Applied::Stale);
        assert!(cascade.field(Level::Area).choices.is_empty());
        assert!(!cascade.field(Level::Area).enabled);

        let mumbai = cascade.select(Level::SubRegion, "Mumbai").unwrap();
        assert_eq!(cascade.apply(&bangalore, Ok(localities(&["Whitefield"]))), Applied::Stale);
        assert_eq!(cascade.apply(&mumbai, Ok(localities(&["Andheri"]))), Applied::Populated(1));
        assert_eq!(cascade.field(Level::Area).choices, vec!["Andheri".to_string()]);
    }

    #[test]
    fn test_out_of_order_city_responses() {
        let mut cascade = LocationCascade::new();
        let first = cascade.select(Level::Region, "Karnataka").unwrap();
        let second = cascade.select(Level::Region, "Maharashtra").unwrap();

        assert_eq!(cascade.apply(&second, Ok(cities(&["Mumbai"]))), Applied::Populated(1));
        assert_eq!(cascade.apply(&first, Ok(cities(&["Bangalore"]))), Applied::Stale);
        assert_eq!(cascade.field(Level::SubRegion).choices, vec!["Mumbai".to_string()]);
    }

    #[tokio::test]
    async fn test_city_failure_keeps_parent_selection() {
        let mut cascade = LocationCascade::new();
        load_regions(&mut cascade, &fixture()).await;
        let failing = FakeLocations { fail: true, ..Default::default() };

        let applied = change(&mut cascade, &failing, Level::Region, "Karnataka").await;

        assert_eq!(applied, Some(Applied::Failed));
        assert_eq!(cascade.selection().region.as_deref(), Some("Karnataka"));
        assert_eq!(cascade.field(Level::Region).choices.len(), 2);
        assert!(!cascade.field(Level::SubRegion).enabled);
        assert_eq!(cascade.notice(), Some("Failed to load cities. Please try again."));

        // a later success clears the notice
        change(&mut cascade, &fixture(), Level::Region, "Karnataka").await;
        assert_eq!(cascade.notice(), None);
    }

    #[tokio::test]
    async fn test_full_selection() {
        let api = fixture();
        let mut cascade = LocationCascade::new();
        load_regions(&mut cascade, &api).await;
        change(&mut cascade, &api, Level::Region, "Karnataka").await;
        change(&mut cascade, &api, Level::SubRegion, "Bangalore").await;
        assert_eq!(change(&mut cascade, &api, Level::Area, "Indiranagar").await, None);

        assert_eq!(
            cascade.selection(),
            SelectionState {
                region: Some("Karnataka".to_string()),
                sub_region: Some("Bangalore".to_string()),
                area: Some("Indiranagar".to_string()),
            }
        );
        assert!(cascade.field(Level::Area).is_selected("Indiranagar"));
    }
}
