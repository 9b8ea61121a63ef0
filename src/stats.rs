// src/stats.rs
//
// Base-stat aggregation for the detail view: a fixed, ordered set of six
// stat keys, each scaled against the 0..=255 base-stat range for a bar
// percent, plus a raw total. Keys missing from the input count as 0;
// extra keys are ignored.

/// (wire key, display label), in display order.
pub const STAT_KEYS: [(&str, &str); 6] = [
    ("hp", "HP"),
    ("attack", "Attack"),
    ("defense", "Defense"),
    ("special-attack", "Sp. Atk"),
    ("special-defense", "Sp. Def"),
    ("speed", "Speed"),
];

/// Upper bound of the base-stat scale.
pub const STAT_MAX: u32 = 255;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatRow {
    pub key: &'static str,
    pub label: &'static str,
    pub value: u32,
    /// Bar fill, 0..=100.
    pub percent: u8,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StatSummary {
    pub rows: Vec<StatRow>,
    pub total: u32,
}

pub fn aggregate(stats: &[(String, u32)]) -> StatSummary {
    let mut rows = Vec::with_capacity(STAT_KEYS.len());
    let mut total = 0u32;

    for (key, label) in STAT_KEYS {
        let value = stats
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| *v)
            .unwrap_or(0);
        total += value;
        rows.push(StatRow { key, label, value, percent: percent_of(value) });
    }

    StatSummary { rows, total }
}

#[inline]
pub fn percent_of(value: u32) -> u8 {
    let pct = (value as f32 / STAT_MAX as f32 * 100.0).round();
    pct.clamp(0.0, 100.0) as u8
}

/* ---------- tests ---------- */

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_follow_display_order_regardless_of_input() {
        let input = vec![
            (s!("speed"), 90),
            (s!("hp"), 35),
            (s!("attack"), 55),
            (s!("defense"), 40),
            (s!("special-attack"), 50),
            (s!("special-defense"), 50),
        ];
        let summary = aggregate(&input);
        let keys: Vec<&str> = summary.rows.iter().map(|r| r.key).collect();
        assert_eq!(keys, vec!["hp", "attack", "defense", "special-attack", "special-defense", "speed"]);
        assert_eq!(summary.total, 320);
    }

    #[test]
    fn missing_stats_count_as_zero() {
        let summary = aggregate(&[(s!("hp"), 100)]);
        assert_eq!(summary.total, 100);
        assert_eq!(summary.rows.len(), 6);
        assert_eq!(summary.rows[5].value, 0);
        assert_eq!(summary.rows[5].percent, 0);
    }

    #[test]
    fn extra_keys_are_ignored() {
        let summary = aggregate(&[(s!("hp"), 10), (s!("accuracy"), 999)]);
        assert_eq!(summary.total, 10);
    }

    #[test]
    fn percent_scales_against_255() {
        assert_eq!(percent_of(0), 0);
        assert_eq!(percent_of(255), 100);
        assert_eq!(percent_of(300), 100); // out-of-scale values clamp
        assert_eq!(percent_of(128), 50);
    }
}
