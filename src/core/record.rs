use serde::{de::DeserializeOwned, Serialize};

pub type Id = i64;

/// An entry of a collection, identified by an id unique within that collection.
pub trait Record: Serialize + DeserializeOwned + Clone + Send + 'static {
    /// Name of the document the collection is persisted to.
    const COLLECTION: &'static str;

    fn id(&self) -> Id;
}

/// Id for a record appended to `records`: one past the largest id, or 1 for an empty collection.
pub fn next_id<T: Record>(records: &[T]) -> Id {
    return records.iter()
        .map(Record::id)
        .max()
        .map_or(1, |max| max + 1);
}

pub fn find<T: Record>(records: &[T], id: Id) -> Option<&T> {
    records.iter().find(|record| record.id() == id)
}

pub fn find_mut<T: Record>(records: &mut [T], id: Id) -> Option<&mut T> {
    records.iter_mut().find(|record| record.id() == id)
}

/// Reads an id the way clients are used to: leading whitespace and an optional
/// sign, then as many digits as are present. Anything else yields `None`.
pub fn parse_id(raw: &str) -> Option<Id> {
    let trimmed = raw.trim_start();
    let (sign, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, trimmed.strip_prefix('+').unwrap_or(trimmed))
    };
    let digits_end = rest.find(|c: char| !c.is_ascii_digit()).unwrap_or(rest.len());
    let digits = &rest[..digits_end];
    if digits.is_empty() {
        return None;
    }
    return digits.parse::<Id>().ok().map(|id| sign * id);
}

/// Empty strings count as absent, so an update never blanks a field.
pub(crate) fn provided(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.is_empty())
}
