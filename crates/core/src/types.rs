/// Campground identifiers are UUIDs assigned by the application on insert.
pub type DbId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Generate a fresh, time-ordered identifier.
pub fn new_id() -> DbId {
    uuid::Uuid::now_v7()
}

/// Parse an identifier taken from a URL path segment.
///
/// Malformed input yields `None` so callers can treat it exactly like a
/// missing record.
pub fn parse_id(raw: &str) -> Option<DbId> {
    uuid::Uuid::parse_str(raw.trim()).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_id_accepts_generated_ids() {
        let id = new_id();
        assert_eq!(parse_id(&id.to_string()), Some(id));
    }

    #[test]
    fn parse_id_rejects_garbage() {
        assert_eq!(parse_id("not-an-id"), None);
        assert_eq!(parse_id(""), None);
        assert_eq!(parse_id("12345"), None);
    }
}
