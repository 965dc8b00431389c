//! Map interaction controller: pan/zoom view, marker selection and filters.

use std::collections::BTreeSet;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use memoria_core::defaults::{
    MAP_CENTER_LAT, MAP_CENTER_LNG, MAP_DRAG_FACTOR, MAP_FOCUS_ZOOM, MAP_ZOOM, MAP_ZOOM_MAX,
    MAP_ZOOM_MIN, MAP_ZOOM_STEP,
};
use memoria_core::{LocationFilter, MapLocation, RecordStore, TimelineEvent};

/// Centre and zoom of the map viewport.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapView {
    pub center_lat: f64,
    pub center_lng: f64,
    pub zoom: f64,
}

impl Default for MapView {
    fn default() -> Self {
        Self {
            center_lat: MAP_CENTER_LAT,
            center_lng: MAP_CENTER_LNG,
            zoom: MAP_ZOOM,
        }
    }
}

/// Stateful controller for one map view.
#[derive(Debug, Clone)]
pub struct MapController {
    store: Arc<RecordStore>,
    view: MapView,
    /// Last pointer position while a drag is in progress.
    drag_origin: Option<(f64, f64)>,
    selected: Option<usize>,
    filter: LocationFilter,
}

impl MapController {
    pub fn new(store: Arc<RecordStore>) -> Self {
        Self {
            store,
            view: MapView::default(),
            drag_origin: None,
            selected: None,
            filter: LocationFilter::default(),
        }
    }

    pub fn view(&self) -> MapView {
        self.view
    }

    pub fn is_dragging(&self) -> bool {
        self.drag_origin.is_some()
    }

    pub fn begin_drag(&mut self, x: f64, y: f64) {
        self.drag_origin = Some((x, y));
    }

    /// Pan by the pointer movement since the previous drag position.
    ///
    /// Dragging right moves the centre west, dragging down moves it north;
    /// the distance shrinks as the zoom grows. Ignored when no drag is active.
    pub fn drag_to(&mut self, x: f64, y: f64) {
        let Some((last_x, last_y)) = self.drag_origin else {
            return;
        };
        let dx = x - last_x;
        let dy = y - last_y;
        self.view.center_lng -= dx * MAP_DRAG_FACTOR / self.view.zoom;
        self.view.center_lat += dy * MAP_DRAG_FACTOR / self.view.zoom;
        self.drag_origin = Some((x, y));
    }

    pub fn end_drag(&mut self) {
        self.drag_origin = None;
    }

    pub fn zoom_in(&mut self) {
        self.view.zoom = (self.view.zoom + MAP_ZOOM_STEP).min(MAP_ZOOM_MAX);
    }

    pub fn zoom_out(&mut self) {
        self.view.zoom = (self.view.zoom - MAP_ZOOM_STEP).max(MAP_ZOOM_MIN);
    }

    pub fn can_zoom_in(&self) -> bool {
        self.view.zoom < MAP_ZOOM_MAX
    }

    pub fn can_zoom_out(&self) -> bool {
        self.view.zoom > MAP_ZOOM_MIN
    }

    pub fn reset_view(&mut self) {
        self.view = MapView::default();
    }

    /// Select a location by id, or clear the selection with `None`.
    /// Unknown ids leave the selection unchanged and return `false`.
    pub fn select_location(&mut self, id: Option<&str>) -> bool {
        match id {
            None => {
                self.selected = None;
                true
            }
            Some(id) => match self.index_of(id) {
                Some(index) => {
                    self.selected = Some(index);
                    true
                }
                None => false,
            },
        }
    }

    /// Select the location and centre the view on it at the focus zoom.
    pub fn focus_location(&mut self, id: &str) -> bool {
        let Some(index) = self.index_of(id) else {
            debug!(
                subsystem = "map",
                op = "focus_location",
                record_id = id,
                "Unknown location id ignored"
            );
            return false;
        };
        let coordinates = self.store.locations()[index].coordinates;
        self.selected = Some(index);
        self.view = MapView {
            center_lat: coordinates.lat,
            center_lng: coordinates.lng,
            zoom: MAP_FOCUS_ZOOM,
        };
        debug!(
            subsystem = "map",
            op = "focus_location",
            record_id = id,
            lat = coordinates.lat,
            lng = coordinates.lng,
            "Map focused on location"
        );
        true
    }

    pub fn selected_location(&self) -> Option<&MapLocation> {
        self.selected.map(|i| &self.store.locations()[i])
    }

    /// Timeline events linked from the selected location.
    pub fn selected_location_events(&self) -> Vec<&TimelineEvent> {
        self.selected_location()
            .map(|location| self.store.events_for_location(location))
            .unwrap_or_default()
    }

    pub fn filter(&self) -> &LocationFilter {
        &self.filter
    }

    /// Mutable access for toggling categories, countries, years or labels.
    pub fn filter_mut(&mut self) -> &mut LocationFilter {
        &mut self.filter
    }

    /// Locations passing the current filter, in collection order.
    pub fn visible_locations(&self) -> Vec<&MapLocation> {
        self.filter.apply(self.store.locations())
    }

    /// Sorted, de-duplicated country names across all locations.
    pub fn countries(&self) -> Vec<&str> {
        self.store
            .locations()
            .iter()
            .map(|l| l.country.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    fn index_of(&self, id: &str) -> Option<usize> {
        self.store.locations().iter().position(|l| l.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use memoria_core::{Coordinates, LocationCategory};

    fn location(id: &str, country: &str, lat: f64, lng: f64) -> MapLocation {
        MapLocation {
            id: id.to_string(),
            name: id.to_string(),
            description: String::new(),
            long_description: None,
            categories: vec![LocationCategory::Memorial],
            coordinates: Coordinates { lat, lng },
            country: country.to_string(),
            year_established: None,
            year_closed: None,
            sources: Vec::new(),
            media: Vec::new(),
            related_locations: Vec::new(),
            related_events: Vec::new(),
        }
    }

    fn controller() -> MapController {
        let store = RecordStore::new(
            Vec::new(),
            vec![
                location("auschwitz", "Poland", 50.0343, 19.1779),
                location("pier-21", "Canada", 44.6367, -63.5714),
                location("bergen-belsen", "Germany", 52.7585, 9.9083),
                location("treblinka", "Poland", 52.6293, 22.0583),
            ],
            Vec::new(),
            Vec::new(),
        )
        .unwrap();
        MapController::new(Arc::new(store))
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!((actual - expected).abs() < 1e-9, "{actual} != {expected}");
    }

    #[test]
    fn test_default_view() {
        let map = controller();
        assert_eq!(map.view(), MapView::default());
        assert_eq!(map.view().center_lat, 50.0);
        assert_eq!(map.view().center_lng, 15.0);
        assert_eq!(map.view().zoom, 1.0);
    }

    #[test]
    fn test_view_serializes_camel_case() {
        let json = serde_json::to_value(MapView::default()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"centerLat": 50.0, "centerLng": 15.0, "zoom": 1.0})
        );
    }

    #[test]
    fn test_drag_is_incremental_and_zoom_scaled() {
        let mut map = controller();
        map.drag_to(10.0, 10.0);
        assert_eq!(map.view(), MapView::default());

        map.begin_drag(100.0, 100.0);
        map.drag_to(110.0, 95.0);
        assert_close(map.view().center_lng, 14.0);
        assert_close(map.view().center_lat, 49.5);

        map.zoom_in();
        map.zoom_in();
        map.drag_to(130.0, 95.0);
        assert_close(map.view().center_lng, 13.0);
        map.end_drag();
        assert!(!map.is_dragging());
    }

    #[test]
    fn test_zoom_limits() {
        let mut map = controller();
        for _ in 0..10 {
            map.zoom_in();
        }
        assert_eq!(map.view().zoom, 3.0);
        assert!(!map.can_zoom_in());
        for _ in 0..10 {
            map.zoom_out();
        }
        assert_eq!(map.view().zoom, 0.5);
        assert!(!map.can_zoom_out());
        map.reset_view();
        assert_eq!(map.view(), MapView::default());
    }

    #[test]
    fn test_focus_location() {
        let mut map = controller();
        assert!(map.focus_location("pier-21"));
        assert_eq!(
            map.view(),
            MapView {
                center_lat: 44.6367,
                center_lng: -63.5714,
                zoom: 2.0
            }
        );
        assert_eq!(map.selected_location().unwrap().id, "pier-21");

        assert!(!map.focus_location("ghost"));
        assert_eq!(map.selected_location().unwrap().id, "pier-21");
        assert_eq!(map.view().zoom, 2.0);
    }

    #[test]
    fn test_countries_sorted_unique() {
        assert_eq!(controller().countries(), vec!["Canada", "Germany", "Poland"]);
    }

    #[test]
    fn test_visible_locations_follow_filter() {
        let mut map = controller();
        assert_eq!(map.visible_locations().len(), 4);
        map.filter_mut().toggle_country("Poland");
        let ids: Vec<&str> = map.visible_locations().iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["auschwitz", "treblinka"]);
        map.filter_mut().clear();
        assert_eq!(map.visible_locations().len(), 4);
    }
}
