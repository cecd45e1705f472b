use serde::Deserialize;

/// Default cap on VTBs accepted from one script.
pub const DEFAULT_MAX_VTBS: usize = 256;

/// Config for extracting proofs from scripts.
#[derive(Clone, Debug, Eq, PartialEq, Deserialize)]
#[serde(default)]
pub struct PopScriptConfig {
    /// Most VTBs accepted before the script is rejected.
    pub max_vtbs: usize,

    /// Whether `OP_CHECKPOP` ends the scan.  If unset it is skipped like any
    /// other unrelated byte and scanning runs to the end of the script.
    pub stop_at_checkpop: bool,
}

impl PopScriptConfig {
    /// Constructs a new instance.
    pub fn new(max_vtbs: usize, stop_at_checkpop: bool) -> Self {
        Self {
            max_vtbs,
            stop_at_checkpop,
        }
    }
}

impl Default for PopScriptConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_VTBS, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_json() {
        let cfg: PopScriptConfig = serde_json::from_str(r#"{"max_vtbs": 3}"#).unwrap();
        assert_eq!(cfg, PopScriptConfig::new(3, true));

        let cfg: PopScriptConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg, PopScriptConfig::default());

        let cfg: PopScriptConfig =
            serde_json::from_str(r#"{"max_vtbs": 0, "stop_at_checkpop": false}"#).unwrap();
        assert!(!cfg.stop_at_checkpop);
        assert_eq!(cfg.max_vtbs, 0);
    }
}
