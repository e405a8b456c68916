/// Outcome of a lookup that may substitute a default instead of failing.
///
/// Hard failures are reported through `Result`; this type only separates a
/// clean answer from one that needed a fallback the user should hear about.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution<T> {
    Exact(T),
    Fallback { value: T, reason: String },
}

impl<T> Resolution<T> {
    pub fn value(&self) -> &T {
        match self {
            Resolution::Exact(value) | Resolution::Fallback { value, .. } => value,
        }
    }

    pub fn warning(&self) -> Option<&str> {
        match self {
            Resolution::Exact(_) => None,
            Resolution::Fallback { reason, .. } => Some(reason),
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Resolution::Fallback { .. })
    }

    /// Split into the value and the fallback reason, logging the latter
    pub fn into_parts(self) -> (T, Option<String>) {
        match self {
            Resolution::Exact(value) => (value, None),
            Resolution::Fallback { value, reason } => {
                log::warn!("{}", reason);
                (value, Some(reason))
            }
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Resolution<U> {
        match self {
            Resolution::Exact(value) => Resolution::Exact(f(value)),
            Resolution::Fallback { value, reason } => Resolution::Fallback {
                value: f(value),
                reason,
            },
        }
    }
}
