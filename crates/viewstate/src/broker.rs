use crate::place::{Place, Zoom};

/// Mutator installed by the component that owns the map viewport.
pub type PlaceSetter = Box<dyn FnMut(Option<Place>)>;
pub type ZoomSetter = Box<dyn FnMut(Option<Zoom>)>;

enum Binding {
    Uninstalled,
    Installed {
        set_place: PlaceSetter,
        set_zoom: ZoomSetter,
    },
}

/// Write-through bridge between non-map UI and the map viewport.
///
/// Independent UI subtrees (search box, category filter) need to command the
/// same logical viewport without a shared parent. The broker holds no view
/// state of its own: whoever installs the setters keeps the state, and the
/// broker only forwards writes to them.
///
/// Contract:
/// - `install` binds both setters; calling it again replaces both, last
///   caller wins. Production wiring installs exactly once at startup;
///   replacement exists for hot-reload and tests.
/// - Writes before installation are dropped and reported via the `bool`
///   return. They never panic: components may mount in an order the
///   application does not fully control.
/// - There is no subscription mechanism. Consumers that react to changes are
///   the same components whose setters were installed.
pub struct ViewStateBroker {
    binding: Binding,
}

impl ViewStateBroker {
    pub fn new() -> Self {
        Self {
            binding: Binding::Uninstalled,
        }
    }

    pub fn install(&mut self, set_place: PlaceSetter, set_zoom: ZoomSetter) {
        self.binding = Binding::Installed {
            set_place,
            set_zoom,
        };
    }

    pub fn is_installed(&self) -> bool {
        matches!(self.binding, Binding::Installed { .. })
    }

    /// Forwards to the installed place setter.
    ///
    /// Returns `false` if the write was dropped because nothing is installed.
    pub fn set_place(&mut self, place: Option<Place>) -> bool {
        match &mut self.binding {
            Binding::Uninstalled => false,
            Binding::Installed { set_place, .. } => {
                set_place(place);
                true
            }
        }
    }

    /// Forwards to the installed zoom setter.
    ///
    /// Returns `false` if the write was dropped because nothing is installed.
    pub fn set_zoom(&mut self, zoom: Option<Zoom>) -> bool {
        match &mut self.binding {
            Binding::Uninstalled => false,
            Binding::Installed { set_zoom, .. } => {
                set_zoom(zoom);
                true
            }
        }
    }
}

impl Default for ViewStateBroker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::ViewStateBroker;
    use crate::place::Place;
    use foundation::geo::GeoPoint;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn writes_before_install_are_dropped_without_panicking() {
        let mut broker = ViewStateBroker::new();
        assert!(!broker.is_installed());
        assert!(!broker.set_place(Some(Place::new("x", GeoPoint::new(0.0, 0.0)))));
        assert!(!broker.set_zoom(Some(12)));
    }

    #[test]
    fn installed_setters_receive_writes_unchanged() {
        let places: Rc<RefCell<Vec<Option<Place>>>> = Rc::new(RefCell::new(Vec::new()));
        let zooms: Rc<RefCell<Vec<Option<u8>>>> = Rc::new(RefCell::new(Vec::new()));

        let mut broker = ViewStateBroker::new();
        broker.install(
            Box::new({
                let places = places.clone();
                move |p| places.borrow_mut().push(p)
            }),
            Box::new({
                let zooms = zooms.clone();
                move |z| zooms.borrow_mut().push(z)
            }),
        );
        assert!(broker.is_installed());

        let place = Place::new("Central Market", GeoPoint::new(14.55, 121.02));
        assert!(broker.set_place(Some(place.clone())));
        assert!(broker.set_zoom(Some(15)));
        assert!(broker.set_place(None));

        assert_eq!(*places.borrow(), vec![Some(place), None]);
        assert_eq!(*zooms.borrow(), vec![Some(15)]);
    }

    #[test]
    fn reinstall_replaces_both_setters() {
        let first = Rc::new(RefCell::new(0u32));
        let second = Rc::new(RefCell::new(0u32));

        let mut broker = ViewStateBroker::new();
        broker.install(
            Box::new({
                let first = first.clone();
                move |_| *first.borrow_mut() += 1
            }),
            Box::new(|_| {}),
        );
        broker.install(
            Box::new({
                let second = second.clone();
                move |_| *second.borrow_mut() += 1
            }),
            Box::new(|_| {}),
        );

        broker.set_place(None);
        assert_eq!(*first.borrow(), 0);
        assert_eq!(*second.borrow(), 1);
    }
}
