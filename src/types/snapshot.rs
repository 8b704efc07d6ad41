use serde::{Deserialize, Serialize};

use super::{Project, StatusGroup};

/// Every project grouped by lane, as returned by `GET /projects`.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectSnapshot {
    #[serde(rename = "New / Pending", default)]
    pub pending: Vec<Project>,
    #[serde(rename = "Offered / Waiting", default)]
    pub offered: Vec<Project>,
    #[serde(rename = "Ongoing", default)]
    pub ongoing: Vec<Project>,
    #[serde(rename = "History", default)]
    pub history: Vec<Project>,
}

impl ProjectSnapshot {
    pub fn group(&self, group: StatusGroup) -> &[Project] {
        match group {
            StatusGroup::Pending => &self.pending,
            StatusGroup::Offered => &self.offered,
            StatusGroup::Ongoing => &self.ongoing,
            StatusGroup::History => &self.history,
        }
    }

    /// Lanes in board order.
    pub fn groups(&self) -> impl Iterator<Item = (StatusGroup, &[Project])> {
        StatusGroup::ALL.into_iter().map(move |g| (g, self.group(g)))
    }

    pub fn find(&self, id: i64) -> Option<&Project> {
        self.groups()
            .flat_map(|(_, projects)| projects.iter())
            .find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.groups().map(|(_, projects)| projects.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BODY: &str = r#"{
        "New / Pending": [
            {"id": 7, "subject_name": "Networks", "username": "lina", "status": "pending", "details": "Lab 2", "deadline": "2024-05-10"},
            {"id": 3, "subject_name": "Compilers", "user_full_name": "Omar H", "status": "pending", "details": "", "deadline": "2024-06-01"}
        ],
        "Offered / Waiting": [],
        "Ongoing": [
            {"id": 1, "subject_name": "Algebra", "status": "ongoing", "details": "", "deadline": ""}
        ],
        "History": []
    }"#;

    #[test]
    fn test_deserialize_grouped_body() {
        let snapshot: ProjectSnapshot = serde_json::from_str(BODY).unwrap();
        assert_eq!(snapshot.len(), 3);
        let ids: Vec<i64> = snapshot.pending.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![7, 3]);
        assert_eq!(snapshot.group(StatusGroup::Ongoing)[0].subject_name, "Algebra");
        assert!(snapshot.group(StatusGroup::History).is_empty());
    }

    #[test]
    fn test_missing_lane_is_empty() {
        let snapshot: ProjectSnapshot =
            serde_json::from_str(r#"{"New / Pending": [{"id": 2}]}"#).unwrap();
        assert_eq!(snapshot.pending.len(), 1);
        assert!(snapshot.offered.is_empty());
        assert!(snapshot.ongoing.is_empty());
        assert!(snapshot.history.is_empty());
    }

    #[test]
    fn test_groups_in_board_order() {
        let snapshot = ProjectSnapshot::default();
        let labels: Vec<&str> = snapshot.groups().map(|(g, _)| g.label()).collect();
        assert_eq!(
            labels,
            vec!["New / Pending", "Offered / Waiting", "Ongoing", "History"]
        );
    }

    #[test]
    fn test_serializes_wire_labels() {
        let value = serde_json::to_value(ProjectSnapshot::default()).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj.len(), 4);
        for group in StatusGroup::ALL {
            assert!(obj.contains_key(group.label()));
        }
    }

    #[test]
    fn test_find_across_lanes() {
        let snapshot: ProjectSnapshot = serde_json::from_str(BODY).unwrap();
        assert_eq!(snapshot.find(1).map(|p| p.status.as_str()), Some("ongoing"));
        assert!(snapshot.find(99).is_none());
    }
}
