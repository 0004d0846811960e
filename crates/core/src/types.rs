use serde::{Deserialize, Deserializer};

/// All database primary keys are SQLite INTEGER PRIMARY KEY (rowid aliases).
pub type DbId = i64;

/// Timestamps are naive wall-clock values, stored and returned without a zone.
pub type Timestamp = chrono::NaiveDateTime;

/// An update field that distinguishes "absent" (`None`) from an explicit
/// JSON `null` (`Some(None)`) and a value (`Some(Some(v))`).
///
/// Use together with [`deserialize_nullable`] and `#[serde(default)]`.
pub type Nullable<T> = Option<Option<T>>;

/// Deserialize a present field into `Some(..)`, keeping `null` as `Some(None)`.
///
/// Serde maps both a missing key and `null` to `None` for `Option<Option<T>>`
/// unless told otherwise; pairing this with `#[serde(default)]` keeps the
/// missing case as `None`.
pub fn deserialize_nullable<'de, D, T>(deserializer: D) -> Result<Nullable<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
