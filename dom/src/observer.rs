//! Attribute observers: queued change notifications for one attribute of one element.

use crate::{Document, ElementId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObserverId(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MutationRecord {
    pub target: ElementId,
    pub attribute: String,
    pub old_value: Option<String>,
}

#[derive(Debug)]
pub(crate) struct Observer {
    target: ElementId,
    attribute: String,
    pending: Vec<MutationRecord>,
}

impl Document {
    /// Start observing changes of `attribute` on `target`.
    pub fn observe_attribute(&mut self, target: ElementId, attribute: &str) -> ObserverId {
        let id = ObserverId(self.next_observer);
        self.next_observer += 1;
        self.observers.insert(
            id,
            Observer {
                target,
                attribute: attribute.to_string(),
                pending: Vec::new(),
            },
        );
        id
    }

    /// Stop observing. Pending records are discarded.
    pub fn disconnect_observer(&mut self, id: ObserverId) -> bool {
        self.observers.remove(&id).is_some()
    }

    /// Drain queued records. Unknown or disconnected observers yield nothing.
    pub fn take_records(&mut self, id: ObserverId) -> Vec<MutationRecord> {
        self.observers
            .get_mut(&id)
            .map(|observer| std::mem::take(&mut observer.pending))
            .unwrap_or_default()
    }

    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    pub(crate) fn notify(&mut self, target: ElementId, attribute: &str, old_value: Option<String>) {
        for observer in self.observers.values_mut() {
            if observer.target == target && observer.attribute == attribute {
                observer.pending.push(MutationRecord {
                    target,
                    attribute: attribute.to_string(),
                    old_value: old_value.clone(),
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::Document;

    #[test]
    fn records_only_matching_attribute_changes() {
        let mut doc = Document::new();
        let root = doc.root();
        let observer = doc.observe_attribute(root, "data-theme");

        doc.set_attribute(root, "data-theme", "dark");
        doc.set_attribute(root, "data-theme", "dark");
        doc.set_attribute(root, "lang", "en");
        doc.set_attribute(root, "data-theme", "light");

        let records = doc.take_records(observer);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].old_value, None);
        assert_eq!(records[1].old_value.as_deref(), Some("dark"));
        assert!(doc.take_records(observer).is_empty());
    }

    #[test]
    fn removal_is_recorded() {
        let mut doc = Document::new();
        let root = doc.root();
        doc.set_attribute(root, "data-theme", "dark");
        let observer = doc.observe_attribute(root, "data-theme");
        assert!(doc.remove_attribute(root, "data-theme"));
        assert_eq!(doc.take_records(observer).len(), 1);
    }

    #[test]
    fn disconnected_observer_stops_receiving() {
        let mut doc = Document::new();
        let root = doc.root();
        let observer = doc.observe_attribute(root, "data-theme");
        assert!(doc.disconnect_observer(observer));
        doc.set_attribute(root, "data-theme", "light");
        assert!(doc.take_records(observer).is_empty());
        assert_eq!(doc.observer_count(), 0);
    }
}
