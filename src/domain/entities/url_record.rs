//! URL record entity representing an alias mapping.

/// A persisted mapping from an alias to its target URL.
///
/// Records are immutable once created: the only way to change a mapping is to
/// delete it and save a new one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlRecord {
    pub id: i64,
    pub alias: String,
    pub target_url: String,
}

impl UrlRecord {
    /// Creates a new UrlRecord instance.
    pub fn new(id: i64, alias: String, target_url: String) -> Self {
        Self {
            id,
            alias,
            target_url,
        }
    }
}

/// Data required to create a new record.
///
/// The identifier is assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUrlRecord {
    pub alias: String,
    pub target_url: String,
}

impl NewUrlRecord {
    /// Attaches a store-assigned identifier.
    pub fn into_record(self, id: i64) -> UrlRecord {
        UrlRecord::new(id, self.alias, self.target_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_record_keeps_fields() {
        let new_record = NewUrlRecord {
            alias: "awesome-project".to_string(),
            target_url: "https://google.com".to_string(),
        };

        let record = new_record.into_record(7);

        assert_eq!(record.id, 7);
        assert_eq!(record.alias, "awesome-project");
        assert_eq!(record.target_url, "https://google.com");
    }
}
