use serde::{Deserialize, Serialize};

/// Conversion settings. Every field has a default, so partial documents deserialize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvertOptions {
    /// Level count of an `xp_levels` reward that omits `xp_levels`.
    pub default_xp_levels: i64,
    /// Point count of an `xp` reward that omits `xp`.
    pub default_xp_points: i64,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        ConvertOptions {
            default_xp_levels: 5,
            default_xp_points: 100,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn partial_options_keep_defaults() {
        let opts: ConvertOptions = serde_json::from_value(json!({"default_xp_points": 50})).unwrap();
        assert_eq!(opts.default_xp_points, 50);
        assert_eq!(opts.default_xp_levels, 5);
    }
}
