/// Safe-zone verdicts.
///
/// Combines a nearby water level, the active alert text, and ground
/// elevation into a boolean safety verdict with a confidence score.
/// This is a hand-tuned decision list evaluated first-match-wins, not a
/// statistical model; the thresholds are literal constants.
///
/// All three inputs are optional. An absent input fails whichever
/// comparisons it appears in, so missing data pushes the verdict toward
/// the low-confidence fallback rather than raising an error.

/// Water level below which a location reads as safe, in meters.
const SAFE_LEVEL_M: f64 = 1.0;
/// Water level below which a location still reads as safe when no
/// danger alert is in effect, in meters.
const CAUTION_LEVEL_M: f64 = 1.5;
/// Water level at or above which a location is unsafe, in meters.
const UNSAFE_LEVEL_M: f64 = 2.0;
/// Ground elevation above which a location counts as high ground, in meters.
const HIGH_GROUND_M: f64 = 50.0;

/// Outcome of a safe-zone evaluation.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct SafetyVerdict {
    pub is_safe: bool,
    /// Confidence in the verdict, 0–100.
    pub confidence: u8,
    pub reason: &'static str,
}

/// Evaluates the safe-zone decision list. First match wins.
///
/// 1. level < 1.0 m, no alert (or "Normal"), elevation > 50 m → safe, 95
/// 2. level < 1.5 m and the alert does not contain "Danger" → safe, 70
/// 3. level ≥ 2.0 m or the alert contains "Danger" → unsafe, 90
/// 4. otherwise → unsafe, 40 (insufficient data)
///
/// The "Danger" and "Normal" matches are exact-case, as emitted by the
/// alert feed.
pub fn classify(
    water_level: Option<f64>,
    alert_level: Option<&str>,
    elevation: Option<f64>,
) -> SafetyVerdict {
    let level_below = |limit: f64| water_level.map_or(false, |l| l < limit);
    let level_at_least = |limit: f64| water_level.map_or(false, |l| l >= limit);
    let alert_is_clear = alert_level.map_or(true, |a| a == "Normal");
    let alert_has_danger = alert_level.map_or(false, |a| a.contains("Danger"));

    if level_below(SAFE_LEVEL_M) && alert_is_clear && elevation.map_or(false, |e| e > HIGH_GROUND_M)
    {
        SafetyVerdict {
            is_safe: true,
            confidence: 95,
            reason: "Low water level, no active alert, and high ground",
        }
    } else if level_below(CAUTION_LEVEL_M) && !alert_has_danger {
        SafetyVerdict {
            is_safe: true,
            confidence: 70,
            reason: "Water level within safe range and no danger alert",
        }
    } else if level_at_least(UNSAFE_LEVEL_M) || alert_has_danger {
        SafetyVerdict {
            is_safe: false,
            confidence: 90,
            reason: "High water level or danger alert in effect",
        }
    } else {
        SafetyVerdict {
            is_safe: false,
            confidence: 40,
            reason: "Insufficient data to confirm safety",
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
