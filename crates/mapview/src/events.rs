/// Structured record of something the map session did.
///
/// This is the session's whole observability story: a drainable in-process
/// log that tests and debug overlays can inspect. Nothing here crosses a
/// thread or touches a global logger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewEvent {
    pub kind: &'static str,
    pub message: String,
}

#[derive(Debug, Default)]
pub struct EventLog {
    events: Vec<ViewEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn emit(&mut self, kind: &'static str, message: impl Into<String>) {
        self.events.push(ViewEvent {
            kind,
            message: message.into(),
        });
    }

    pub fn events(&self) -> &[ViewEvent] {
        &self.events
    }

    pub fn drain(&mut self) -> Vec<ViewEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::EventLog;

    #[test]
    fn records_events_in_order() {
        let mut log = EventLog::new();
        log.emit("view", "zoom 12");
        log.emit("activate", "a/1");
        let kinds: Vec<_> = log.events().iter().map(|e| e.kind).collect();
        assert_eq!(kinds, vec!["view", "activate"]);
    }

    #[test]
    fn drain_clears_the_log() {
        let mut log = EventLog::new();
        log.emit("cluster", "3 markers");
        assert_eq!(log.drain().len(), 1);
        assert!(log.events().is_empty());
    }
}
