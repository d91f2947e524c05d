/// Generation tag attached to every fetch issued for a slot.
///
/// A result is applied only while its token is still the slot's current
/// one; anything older was superseded and is dropped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestToken(u64);

impl RequestToken {
    pub fn value(self) -> u64 {
        self.0
    }

    /// The token following this one.
    pub(crate) fn next(self) -> Self {
        RequestToken(self.0.wrapping_add(1))
    }
}

impl std::fmt::Display for RequestToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}
