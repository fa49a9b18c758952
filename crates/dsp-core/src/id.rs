use lasso::{Spur, ThreadedRodeo};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::sync::LazyLock;
use std::sync::atomic::{AtomicU64, Ordering};

/// Every instance token ever issued or echoed back by a host.
static INTERNER: LazyLock<ThreadedRodeo> = LazyLock::new(ThreadedRodeo::default);

/// Suffix of the next `inst_{n}` token. Only ever grows, so a deleted
/// instance's token is never reissued to a new one.
static COUNTER: AtomicU64 = AtomicU64::new(0);

/// Handle of a placed instance. Stays valid as a key after the instance
/// is deleted; the store simply no longer finds it.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct InstanceId(Spur);

impl InstanceId {
    /// Issue the token for a newly placed instance.
    pub fn fresh() -> Self {
        let n = COUNTER.fetch_add(1, Ordering::Relaxed);
        Self::intern(&format!("inst_{n}"))
    }

    /// Resolve a token from outside (e.g. a JS host) without recording it.
    /// `None` means no instance ever carried this token.
    pub fn lookup(token: &str) -> Option<Self> {
        INTERNER.get(token).map(InstanceId)
    }

    /// Register `token` as an ID, recording it if it is new.
    pub fn intern(token: &str) -> Self {
        InstanceId(INTERNER.get_or_intern(token))
    }

    pub fn as_str(&self) -> &str {
        INTERNER.resolve(&self.0)
    }
}

impl fmt::Debug for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.as_str())
    }
}

impl fmt::Display for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for InstanceId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for InstanceId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(InstanceId::intern(&s))
    }
}
