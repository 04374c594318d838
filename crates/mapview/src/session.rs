use crate::events::EventLog;
use foundation::geo::{GeoBounds, GeoPoint};
use foundation::ids::FeatureId;
use foundation::time::Time;
use input::arbiter::InputArbiter;
use markers::cluster::{MarkerCluster, aggregate};
use markers::feature::PostFeature;
use markers::visible::{FeatureQuery, visible_features};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;
use viewstate::broker::ViewStateBroker;
use viewstate::place::{Place, Zoom};

/// Session-level tunables.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Cap on features considered per viewport recompute.
    pub max_visible: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self { max_visible: 1000 }
    }
}

type ActivationHandler = Box<dyn FnMut(&FeatureId)>;

/// One live map view: visible posts, their marker clusters, and the
/// per-marker input state, recomputed as the viewport and filters change.
///
/// The session is the composition point of the core: viewport changes flow in
/// (directly or via an installed [`ViewStateBroker`]), the visible feature
/// set and cluster snapshot are recomputed synchronously, and marker
/// interactions flow back out through the activation handler.
///
/// Identity stability contract:
/// - Cluster ids survive recomputation as long as their representative post
///   does, and the arbiter (with its debounce state) keyed on that id
///   survives with them.
/// - Arbiters for clusters that left the viewport are dropped, which disarms
///   any pending tap timer. A timer can therefore never fire for an unmounted
///   marker.
pub struct MapView<K> {
    grouping: K,
    config: SessionConfig,
    posts: Vec<PostFeature>,
    visible: Vec<PostFeature>,
    clusters: Vec<MarkerCluster>,
    inputs: BTreeMap<FeatureId, InputArbiter>,
    bounds: Option<GeoBounds>,
    place: Option<Place>,
    zoom: Option<Zoom>,
    category: Option<String>,
    on_activate: Option<ActivationHandler>,
    log: EventLog,
}

impl<K> MapView<K>
where
    K: Fn(&PostFeature) -> String,
{
    pub fn new(grouping: K) -> Self {
        Self::with_config(grouping, SessionConfig::default())
    }

    pub fn with_config(grouping: K, config: SessionConfig) -> Self {
        Self {
            grouping,
            config,
            posts: Vec::new(),
            visible: Vec::new(),
            clusters: Vec::new(),
            inputs: BTreeMap::new(),
            bounds: None,
            place: None,
            zoom: None,
            category: None,
            on_activate: None,
            log: EventLog::new(),
        }
    }

    /// Registers the callback fired with the cluster id on each activation.
    ///
    /// Without a handler, activations are no-ops.
    pub fn set_activation_handler(&mut self, handler: ActivationHandler) {
        self.on_activate = Some(handler);
    }

    /// Replaces the full post list (e.g. after a content fetch).
    pub fn set_posts(&mut self, posts: Vec<PostFeature>) {
        self.posts = posts;
        self.recompute();
    }

    /// Applies a category filter ("Foodies" etc.); `None` clears it.
    pub fn set_category_filter(&mut self, category: Option<String>) {
        self.category = category;
        self.recompute();
    }

    /// Viewport-change notification from the map-rendering collaborator.
    pub fn update_viewport(&mut self, bounds: GeoBounds, zoom: Zoom) {
        self.bounds = Some(bounds);
        self.zoom = Some(zoom);
        self.log.emit("view", format!("viewport moved, zoom {zoom}"));
        self.recompute();
    }

    /// Place selection delivered through the view-state broker.
    ///
    /// Selecting a place pans the viewport (keeping its span) onto the
    /// place's position; clearing the selection leaves the viewport alone.
    pub fn apply_place(&mut self, place: Option<Place>) {
        if let (Some(p), Some(bounds)) = (&place, self.bounds) {
            let half_lat = (bounds.max.latitude - bounds.min.latitude) / 2.0;
            let half_lon = (bounds.max.longitude - bounds.min.longitude) / 2.0;
            self.bounds = Some(GeoBounds::new(
                GeoPoint::new(
                    p.position.latitude - half_lat,
                    p.position.longitude - half_lon,
                ),
                GeoPoint::new(
                    p.position.latitude + half_lat,
                    p.position.longitude + half_lon,
                ),
            ));
        }
        match &place {
            Some(p) => self.log.emit("view", format!("place selected: {}", p.name)),
            None => self.log.emit("view", "place cleared"),
        }
        self.place = place;
        self.recompute();
    }

    /// Zoom command delivered through the view-state broker.
    pub fn apply_zoom(&mut self, zoom: Option<Zoom>) {
        self.zoom = zoom;
        if let Some(z) = zoom {
            self.log.emit("view", format!("zoom set to {z}"));
        }
    }

    pub fn markers(&self) -> &[MarkerCluster] {
        &self.clusters
    }

    pub fn visible(&self) -> &[PostFeature] {
        &self.visible
    }

    pub fn place(&self) -> Option<&Place> {
        self.place.as_ref()
    }

    pub fn zoom(&self) -> Option<Zoom> {
        self.zoom
    }

    pub fn log(&mut self) -> &mut EventLog {
        &mut self.log
    }

    /// A cluster is highlighted when it sits exactly at the selected place.
    pub fn is_highlighted(&self, cluster: &MarkerCluster) -> bool {
        self.place
            .as_ref()
            .is_some_and(|p| p.position == cluster.position)
    }

    /// Touch-start on a rendered marker. The rendering layer must suppress
    /// the platform's default synthetic click for this interaction.
    pub fn touch_start(&mut self, id: &FeatureId, now: Time) {
        let Some(arbiter) = self.inputs.get_mut(id) else {
            self.log.emit("drop", format!("touch on unknown marker {id}"));
            return;
        };
        arbiter.touch_start(now);
    }

    /// Pointer click on a rendered marker.
    pub fn click(&mut self, id: &FeatureId, now: Time) {
        let fired = match self.inputs.get_mut(id) {
            Some(arbiter) => arbiter.click(now),
            None => {
                self.log.emit("drop", format!("click on unknown marker {id}"));
                return;
            }
        };
        if fired {
            self.fire(id);
        }
    }

    /// Advances all pending tap timers; call once per UI tick.
    pub fn poll(&mut self, now: Time) {
        let fired: Vec<FeatureId> = self
            .inputs
            .iter_mut()
            .filter_map(|(id, arbiter)| arbiter.poll(now).then(|| id.clone()))
            .collect();
        for id in fired {
            self.fire(&id);
        }
    }

    fn fire(&mut self, id: &FeatureId) {
        self.log.emit("activate", id.to_string());
        if let Some(handler) = &mut self.on_activate {
            handler(id);
        }
    }

    fn recompute(&mut self) {
        let query = FeatureQuery {
            bounds: self.bounds,
            category: self.category.clone(),
            limit: self.config.max_visible,
        };
        // No viewport yet means nothing is rendered.
        self.visible = match self.bounds {
            None => Vec::new(),
            Some(_) => visible_features(&self.posts, &query),
        };
        self.clusters = aggregate(&self.visible, &self.grouping);

        // Prune arbiters for unmounted markers, keep state for survivors.
        let mut inputs = std::mem::take(&mut self.inputs);
        for cluster in &self.clusters {
            let arbiter = inputs
                .remove(&cluster.feature_id)
                .unwrap_or_else(InputArbiter::new);
            self.inputs.insert(cluster.feature_id.clone(), arbiter);
        }
        for (id, _) in inputs {
            self.log.emit("drop", format!("marker unmounted: {id}"));
        }

        self.log.emit(
            "cluster",
            format!(
                "{} visible features in {} markers",
                self.visible.len(),
                self.clusters.len()
            ),
        );
    }
}

/// Installs a shared [`MapView`] as the broker's view-state owner.
///
/// This is the explicit, single initialization step of the view-state
/// contract: after it, search boxes and filter bars command the map through
/// the broker without sharing a parent with it.
pub fn connect_broker<K>(broker: &mut ViewStateBroker, view: Rc<RefCell<MapView<K>>>)
where
    K: Fn(&PostFeature) -> String + 'static,
{
    broker.install(
        Box::new({
            let view = view.clone();
            move |place| view.borrow_mut().apply_place(place)
        }),
        Box::new(move |zoom| view.borrow_mut().apply_zoom(zoom)),
    );
}
