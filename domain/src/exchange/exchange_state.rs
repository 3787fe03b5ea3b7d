//! Persisted first-exchange flag

/// Key under which the flag is stored.
pub const FIRST_EXCHANGE_KEY: &str = "first_exchange_done";

/// Session state that survives restarts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExchangeState {
    pub first_exchange_done: bool,
}

impl ExchangeState {
    /// Decode the stored value. Anything other than `"true"` reads as `false`.
    pub fn from_stored(value: Option<&str>) -> Self {
        Self {
            first_exchange_done: value.map(str::trim) == Some("true"),
        }
    }

    /// Encoded value for the store.
    pub fn stored_value(&self) -> &'static str {
        if self.first_exchange_done {
            "true"
        } else {
            "false"
        }
    }
}
