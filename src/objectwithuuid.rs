use uuid::Uuid;

/// Stable identity of a stored object, the key a persistence layer files it under.
pub trait ObjectWithUUID {
    fn uuid(&self) -> &Uuid;
}
