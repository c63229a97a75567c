//! Payloads carried by dispatched events.
//!
//! The engine never inspects a payload beyond asking whether it is
//! "error-like". Error-like payloads on transitions without an action are
//! surfaced to observers through the `is_error` flag.

/// Value carried alongside a dispatched event.
///
/// # Example
///
/// ```rust
/// use kahtox::core::Payload;
///
/// let ok: Result<u32, String> = Ok(1);
/// let failed: Result<u32, String> = Err("boom".to_string());
///
/// assert!(!ok.is_error());
/// assert!(failed.is_error());
/// ```
pub trait Payload: Send + Sync {
    /// Check if this payload represents an error condition.
    ///
    /// Default implementation returns `false`.
    fn is_error(&self) -> bool {
        false
    }
}

impl Payload for serde_json::Value {}

impl Payload for String {}

impl Payload for &'static str {}

impl Payload for () {}

macro_rules! plain_payload {
    ($($ty:ty),* $(,)?) => {
        $(impl Payload for $ty {})*
    };
}

plain_payload!(
    bool, char, u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64,
);

impl<T: Send + Sync, E: Send + Sync> Payload for Result<T, E> {
    fn is_error(&self) -> bool {
        self.is_err()
    }
}
