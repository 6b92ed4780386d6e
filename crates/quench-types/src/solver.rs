//! Solver definition records.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Identity and capability description of a remote solver.
///
/// Immutable once retrieved; only ever constructed from service responses.
/// `properties` is left untyped because its shape varies per solver class
/// (QPU topology descriptions, hybrid time limits, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolverConfiguration {
    /// Solver ID, used as the `solver` field of a submission.
    pub id: String,
    /// Operational status (e.g. `"ONLINE"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Human-readable description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Capability properties, solver-class specific.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<Value>,
    /// Average load reported by the service, in [0, 1].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_load: Option<f64>,
}

impl SolverConfiguration {
    /// Check if the solver is accepting problems.
    pub fn is_online(&self) -> bool {
        self.status
            .as_deref()
            .is_some_and(|s| s.eq_ignore_ascii_case("online"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_solver_decode() {
        let raw = json!({
            "id": "qpu_topaz_1",
            "status": "ONLINE",
            "description": "Topaz QPU, 5000+ qubits",
            "properties": {"num_qubits": 5760, "topology": {"type": "zephyr"}},
            "avg_load": 0.42
        });
        let solver: SolverConfiguration = serde_json::from_value(raw).unwrap();
        assert_eq!(solver.id, "qpu_topaz_1");
        assert!(solver.is_online());
        assert_eq!(solver.properties.unwrap()["num_qubits"], 5760);
    }

    #[test]
    fn test_solver_minimal_decode() {
        let solver: SolverConfiguration = serde_json::from_value(json!({"id": "s1"})).unwrap();
        assert!(!solver.is_online());
        assert!(solver.avg_load.is_none());
    }
}
