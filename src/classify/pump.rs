/// Pump condition classification.
///
/// The pump-status proxy reports free text ("Currently Operating",
/// "Scheduled Maintenance", operator notes in any casing). The matcher
/// lower-cases the text and checks substrings in priority order; any
/// unrecognized text classifies as offline. Offline is the fallback,
/// not an explicit unknown state.

/// Operational state of a pump station.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PumpStatus {
    Active,
    Maintenance,
    Offline,
}

impl PumpStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PumpStatus::Active => "active",
            PumpStatus::Maintenance => "maintenance",
            PumpStatus::Offline => "offline",
        }
    }
}

/// Classification result for a pump condition string.
#[derive(Debug, Clone, PartialEq)]
pub struct PumpClassification {
    pub status: PumpStatus,
    /// Human-readable label for display.
    pub label: &'static str,
    /// Display color as a hex string.
    pub color: &'static str,
}

/// Classifies a free-text pump condition.
///
/// Priority order: `active`/`operating` win over `maintenance`, so
/// "active, maintenance scheduled next week" reads as active.
pub fn classify(condition: &str) -> PumpClassification {
    let condition = condition.to_lowercase();

    if condition.contains("active") || condition.contains("operating") {
        PumpClassification {
            status: PumpStatus::Active,
            label: "Active",
            color: "#22c55e",
        }
    } else if condition.contains("maintenance") {
        PumpClassification {
            status: PumpStatus::Maintenance,
            label: "Under Maintenance",
            color: "#f59e0b",
        }
    } else {
        PumpClassification {
            status: PumpStatus::Offline,
            label: "Offline",
            color: "#6b7280",
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
