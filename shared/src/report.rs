use serde::{Deserialize, Serialize};

use crate::SurgeryStatus;

/// Number of surgeries currently in one status
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusCount {
    #[serde(rename = "estado")]
    pub status: SurgeryStatus,
    #[serde(rename = "cantidad")]
    pub count: u64,
}

/// Response of `GET /reportes/general`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneralReport {
    #[serde(rename = "total_pacientes_registrados", default)]
    pub total_patients: u64,
    #[serde(rename = "total_usuarios_personal", default)]
    pub total_staff: u64,
    #[serde(rename = "conteo_cirugias_por_estado", default)]
    pub surgeries_by_status: Vec<StatusCount>,
}

impl GeneralReport {
    pub fn total_surgeries(&self) -> u64 {
        self.surgeries_by_status.iter().map(|entry| entry.count).sum()
    }

    /// Count for a status; duplicate rows (e.g. two spellings of the same
    /// state) are added together
    pub fn count_for(&self, status: &SurgeryStatus) -> u64 {
        self.surgeries_by_status
            .iter()
            .filter(|entry| &entry.status == status)
            .map(|entry| entry.count)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_general_report_totals() {
        let json = r#"{
            "total_pacientes_registrados": 120,
            "total_usuarios_personal": 18,
            "conteo_cirugias_por_estado": [
                {"estado": "Programada", "cantidad": 10},
                {"estado": "finalizada", "cantidad": 25},
                {"estado": "Completada", "cantidad": 5},
                {"estado": "cancelada", "cantidad": 2}
            ]
        }"#;

        let report: GeneralReport = serde_json::from_str(json).unwrap();
        assert_eq!(report.total_surgeries(), 42);
        assert_eq!(report.count_for(&SurgeryStatus::Completed), 30);
        assert_eq!(report.count_for(&SurgeryStatus::Postponed), 0);
    }
}
