use serde::{Deserialize, Serialize};

/// On/off switch read from configuration.
///
/// Deserializes from a plain boolean, so `JANITOR_DEBUG=false` works as expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Flag(bool);

impl Flag {
    pub const fn enabled() -> Self {
        Self(true)
    }

    pub const fn disabled() -> Self {
        Self(false)
    }

    pub const fn is_enabled(&self) -> bool {
        self.0
    }

    pub const fn is_disabled(&self) -> bool {
        !self.0
    }
}

impl Default for Flag {
    fn default() -> Self {
        Self::enabled()
    }
}

impl From<bool> for Flag {
    fn from(b: bool) -> Self {
        Self(b)
    }
}

impl From<Flag> for bool {
    fn from(f: Flag) -> Self {
        f.0
    }
}

#[cfg(test)]
mod tests {
    use super::Flag;

    #[test]
    fn default_is_enabled() {
        assert!(Flag::default().is_enabled());
    }

    #[test]
    fn deserializes_from_bool() {
        let on: Flag = serde_json::from_str("true").unwrap();
        let off: Flag = serde_json::from_str("false").unwrap();
        assert!(on.is_enabled());
        assert!(off.is_disabled());
        assert!(!bool::from(off));
    }
}
