/// Water-level severity classification.
///
/// Maps a numeric gauge reading to a discrete severity bucket and a
/// display color. Thresholds are fixed constants in meters; readings in
/// feet are converted first. The ladder is checked highest-first and
/// has no hysteresis — a borderline reading can flip buckets between
/// consecutive calls, which downstream consumers must tolerate.

use crate::model::LevelUnit;

// ---------------------------------------------------------------------------
// Thresholds and colors
// ---------------------------------------------------------------------------

/// Feet-to-meters conversion factor.
pub const FT_TO_M: f64 = 0.3048;

/// Ladder thresholds, in meters.
pub const DANGER_M: f64 = 2.5;
pub const ALERT2_M: f64 = 2.0;
pub const ALERT3_M: f64 = 1.5;
pub const ALERT1_M: f64 = 1.0;

const COLOR_RED: &str = "#ef4444";
const COLOR_AMBER: &str = "#f59e0b";
const COLOR_BLUE: &str = "#3b82f6";
const COLOR_GREEN: &str = "#22c55e";

// ---------------------------------------------------------------------------
// Severity buckets
// ---------------------------------------------------------------------------

/// Water-level severity buckets.
///
/// Bucket order by threshold is normal < alert1 < alert3 < alert2 <
/// danger — `alert2` sits at 2.0 m, above `alert3` at 1.5 m. Use
/// `rank()` when comparing severities; the declaration order is not the
/// escalation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaterSeverity {
    Normal,
    Alert1,
    Alert2,
    Alert3,
    Danger,
}

impl WaterSeverity {
    /// Escalation rank, following the threshold ladder.
    pub fn rank(&self) -> u8 {
        match self {
            WaterSeverity::Normal => 0,
            WaterSeverity::Alert1 => 1,
            WaterSeverity::Alert3 => 2,
            WaterSeverity::Alert2 => 3,
            WaterSeverity::Danger => 4,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WaterSeverity::Normal => "normal",
            WaterSeverity::Alert1 => "alert1",
            WaterSeverity::Alert2 => "alert2",
            WaterSeverity::Alert3 => "alert3",
            WaterSeverity::Danger => "danger",
        }
    }
}

/// Classification result for a single reading.
#[derive(Debug, Clone, PartialEq)]
pub struct LevelClassification {
    /// Severity code, suitable for substring matching in aggregations.
    pub status: &'static str,
    pub severity: WaterSeverity,
    /// Display color as a hex string.
    pub color: &'static str,
}

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

/// Classifies a gauge reading against the fixed threshold ladder.
///
/// Feet convert to meters before comparison. Negative, NaN, and other
/// out-of-range inputs fail every ladder comparison and fall through to
/// `normal` — no error is ever raised.
pub fn classify(level: f64, unit: LevelUnit) -> LevelClassification {
    let level_m = match unit {
        LevelUnit::Meters => level,
        LevelUnit::Feet => level * FT_TO_M,
    };

    if level_m >= DANGER_M {
        LevelClassification {
            status: "danger",
            severity: WaterSeverity::Danger,
            color: COLOR_RED,
        }
    } else if level_m >= ALERT2_M {
        LevelClassification {
            status: "alert2",
            severity: WaterSeverity::Alert2,
            color: COLOR_AMBER,
        }
    } else if level_m >= ALERT3_M {
        LevelClassification {
            status: "alert3",
            severity: WaterSeverity::Alert3,
            color: COLOR_AMBER,
        }
    } else if level_m >= ALERT1_M {
        LevelClassification {
            status: "alert1",
            severity: WaterSeverity::Alert1,
            color: COLOR_BLUE,
        }
    } else {
        LevelClassification {
            status: "normal",
            severity: WaterSeverity::Normal,
            color: COLOR_GREEN,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // --- Ladder boundaries ---------------------------------------------------

    #[test]
    fn test_each_threshold_is_inclusive() {
        // A reading exactly at a threshold belongs to that bucket.
        assert_eq!(classify(1.0, LevelUnit::Meters).severity, WaterSeverity::Alert1);
        assert_eq!(classify(1.5, LevelUnit::Meters).severity, WaterSeverity::Alert3);
        assert_eq!(classify(2.0, LevelUnit::Meters).severity, WaterSeverity::Alert2);
        assert_eq!(classify(2.5, LevelUnit::Meters).severity, WaterSeverity::Danger);
    }

    #[test]
    fn test_just_below_each_threshold_stays_in_lower_bucket() {
        assert_eq!(classify(0.999, LevelUnit::Meters).severity, WaterSeverity::Normal);
        assert_eq!(classify(1.499, LevelUnit::Meters).severity, WaterSeverity::Alert1);
        assert_eq!(classify(1.999, LevelUnit::Meters).severity, WaterSeverity::Alert3);
        assert_eq!(classify(2.499, LevelUnit::Meters).severity, WaterSeverity::Alert2);
    }

    #[test]
    fn test_severity_rank_is_monotonic_in_level() {
        // Sweep 0–100 m in small steps; rank must never decrease.
        let mut prev_rank = 0;
        let mut level = 0.0;
        while level < 100.0 {
            let rank = classify(level, LevelUnit::Meters).severity.rank();
            assert!(
                rank >= prev_rank,
                "severity rank decreased at {} m: {} -> {}",
                level,
                prev_rank,
                rank
            );
            prev_rank = rank;
            level += 0.05;
        }
    }

    #[test]
    fn test_bucket_order_places_alert2_above_alert3() {
        assert!(WaterSeverity::Alert2.rank() > WaterSeverity::Alert3.rank());
        assert!(WaterSeverity::Alert3.rank() > WaterSeverity::Alert1.rank());
        assert!(WaterSeverity::Danger.rank() > WaterSeverity::Alert2.rank());
    }

    // --- Unit conversion -----------------------------------------------------

    #[test]
    fn test_feet_convert_before_comparison() {
        // 82 ft = 24.9936 m — within a centimeter of 25 m, both danger.
        let in_feet = classify(82.0, LevelUnit::Feet);
        let in_meters = classify(25.0, LevelUnit::Meters);
        assert_eq!(in_feet.severity, WaterSeverity::Danger);
        assert_eq!(in_meters.severity, WaterSeverity::Danger);
        assert!((82.0 * FT_TO_M - 25.0f64).abs() < 0.01);
    }

    #[test]
    fn test_low_feet_reading_is_normal() {
        // 3 ft = 0.9144 m, below the first threshold.
        assert_eq!(classify(3.0, LevelUnit::Feet).severity, WaterSeverity::Normal);
    }

    // --- Degenerate inputs ---------------------------------------------------

    #[test]
    fn test_negative_reading_falls_through_to_normal() {
        let c = classify(-4.2, LevelUnit::Meters);
        assert_eq!(c.severity, WaterSeverity::Normal);
        assert_eq!(c.status, "normal");
    }

    #[test]
    fn test_nan_reading_falls_through_to_normal() {
        assert_eq!(classify(f64::NAN, LevelUnit::Meters).severity, WaterSeverity::Normal);
    }

    // --- Display attributes --------------------------------------------------

    #[test]
    fn test_colors_follow_severity() {
        assert_eq!(classify(3.0, LevelUnit::Meters).color, COLOR_RED);
        assert_eq!(classify(2.2, LevelUnit::Meters).color, COLOR_AMBER);
        assert_eq!(classify(1.7, LevelUnit::Meters).color, COLOR_AMBER);
        assert_eq!(classify(1.2, LevelUnit::Meters).color, COLOR_BLUE);
        assert_eq!(classify(0.3, LevelUnit::Meters).color, COLOR_GREEN);
    }

    #[test]
    fn test_status_matches_severity_code() {
        for level in [0.2, 1.1, 1.6, 2.1, 2.6] {
            let c = classify(level, LevelUnit::Meters);
            assert_eq!(c.status, c.severity.as_str());
        }
    }
}
