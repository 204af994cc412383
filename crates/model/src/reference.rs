//! Options for reference selection controls

use tuning_core::RecordId;

use crate::car::Car;
use crate::client::Client;
use crate::schema::ReferenceSource;

/// One entry of a selection control
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceOption {
    pub id: RecordId,
    pub label: String,
}

/// Client and car options handed to the editor by the page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenceLists {
    pub clients: Vec<ReferenceOption>,
    pub cars: Vec<ReferenceOption>,
}

impl ReferenceLists {
    /// Build options from the loaded collections.
    ///
    /// Records without an id cannot be referenced and are skipped.
    pub fn new(clients: &[Client], cars: &[Car]) -> Self {
        Self {
            clients: clients
                .iter()
                .filter_map(|c| {
                    c.id.map(|id| ReferenceOption {
                        id,
                        label: c.name.clone(),
                    })
                })
                .collect(),
            cars: cars
                .iter()
                .filter_map(|c| {
                    c.id.map(|id| ReferenceOption {
                        id,
                        label: c.display_name(),
                    })
                })
                .collect(),
        }
    }

    /// Options for the given source
    pub fn options(&self, source: ReferenceSource) -> &[ReferenceOption] {
        match source {
            ReferenceSource::Clients => &self.clients,
            ReferenceSource::Cars => &self.cars,
        }
    }

    /// Id of the first option, used to seed create dialogs
    pub fn first_id(&self, source: ReferenceSource) -> Option<RecordId> {
        self.options(source).first().map(|o| o.id)
    }

    /// Label for an id, if it is in the list
    pub fn label_of(&self, source: ReferenceSource, id: RecordId) -> Option<&str> {
        self.options(source)
            .iter()
            .find(|o| o.id == id)
            .map(|o| o.label.as_str())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_builds_labels_and_skips_unsaved() {
        let clients = vec![
            Client::named(7, "Петров Алексей"),
            Client {
                id: None,
                ..Client::named(0, "Черновик")
            },
        ];
        let cars = vec![Car {
            id: Some(3),
            brand: "BMW".into(),
            model: "M3".into(),
            ..Car::default()
        }];

        let refs = ReferenceLists::new(&clients, &cars);
        assert_eq!(refs.clients.len(), 1);
        assert_eq!(refs.first_id(ReferenceSource::Clients), Some(7));
        assert_eq!(refs.label_of(ReferenceSource::Cars, 3), Some("BMW M3"));
        assert_eq!(refs.label_of(ReferenceSource::Cars, 4), None);
    }

    #[test]
    fn test_empty_lists_have_no_first_id() {
        let refs = ReferenceLists::default();
        assert_eq!(refs.first_id(ReferenceSource::Cars), None);
        assert!(refs.options(ReferenceSource::Clients).is_empty());
    }
}
