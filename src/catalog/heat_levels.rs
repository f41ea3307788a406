//! Heat level table: maps the current heat value to escalating penalties.

#![allow(dead_code)]

#[derive(Debug, Clone, Copy)]
pub struct HeatLevelDef {
    /// Inclusive lower bound of this level's heat range.
    pub min_heat: f64,
    pub name_key: &'static str,
    pub icon: &'static str,
    /// Fractional income penalty applied by the host economy (0.10 = -10%).
    pub income_penalty: f64,
    /// Fractional surcharge on generated deal costs.
    pub cost_increase: f64,
    /// Flat risk increase on generated deals, percent points.
    pub risk_increase: u8,
    /// Probability an investigation spawns on each periodic check.
    pub investigation_chance: f64,
}

/// Ordered ascending by `min_heat`; every penalty column is monotone so a
/// hotter level never punishes less than a cooler one.
pub const HEAT_LEVELS: [HeatLevelDef; 5] = [
    HeatLevelDef {
        min_heat: 0.0,
        name_key: "heat.cold",
        icon: "❄",
        income_penalty: 0.0,
        cost_increase: 0.0,
        risk_increase: 0,
        investigation_chance: 0.0,
    },
    HeatLevelDef {
        min_heat: 20.0,
        name_key: "heat.warm",
        icon: "🔥",
        income_penalty: 0.0,
        cost_increase: 0.05,
        risk_increase: 0,
        investigation_chance: 0.02,
    },
    HeatLevelDef {
        min_heat: 40.0,
        name_key: "heat.hot",
        icon: "🔥🔥",
        income_penalty: 0.05,
        cost_increase: 0.10,
        risk_increase: 5,
        investigation_chance: 0.05,
    },
    HeatLevelDef {
        min_heat: 60.0,
        name_key: "heat.blazing",
        icon: "🔥🔥🔥",
        income_penalty: 0.10,
        cost_increase: 0.20,
        risk_increase: 10,
        investigation_chance: 0.10,
    },
    HeatLevelDef {
        min_heat: 80.0,
        name_key: "heat.inferno",
        icon: "💀",
        income_penalty: 0.20,
        cost_increase: 0.35,
        risk_increase: 15,
        investigation_chance: 0.20,
    },
];

/// Returns the level whose range contains `heat`.
pub fn level_for(heat: f64) -> &'static HeatLevelDef {
    HEAT_LEVELS
        .iter()
        .rev()
        .find(|level| heat >= level.min_heat)
        .unwrap_or(&HEAT_LEVELS[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_for_boundaries() {
        assert_eq!(level_for(0.0).name_key, "heat.cold");
        assert_eq!(level_for(19.9).name_key, "heat.cold");
        assert_eq!(level_for(20.0).name_key, "heat.warm");
        assert_eq!(level_for(40.0).name_key, "heat.hot");
        assert_eq!(level_for(79.9).name_key, "heat.blazing");
        assert_eq!(level_for(100.0).name_key, "heat.inferno");
    }

    #[test]
    fn test_penalties_escalate_monotonically() {
        for pair in HEAT_LEVELS.windows(2) {
            assert!(pair[0].min_heat < pair[1].min_heat);
            assert!(pair[0].income_penalty <= pair[1].income_penalty);
            assert!(pair[0].cost_increase <= pair[1].cost_increase);
            assert!(pair[0].risk_increase <= pair[1].risk_increase);
            assert!(pair[0].investigation_chance <= pair[1].investigation_chance);
        }
    }

    #[test]
    fn test_negative_heat_falls_back_to_coldest() {
        // Heat is clamped elsewhere; the lookup still has to be total.
        assert_eq!(level_for(-5.0).name_key, "heat.cold");
    }
}
