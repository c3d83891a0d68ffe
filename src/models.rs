//! Frontend Models
//!
//! Data structures matching backend records.

use serde::{Deserialize, Serialize};

/// Project record as returned by the backend.
///
/// The backend assigns the identifier; this client never mutates or
/// deletes a record. Extra fields on the wire are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_reads_server_id_field() {
        let json = r#"{"_id":"1","title":"T1","description":"D1"}"#;
        let project: Project = serde_json::from_str(json).unwrap();
        assert_eq!(project.id, "1");
        assert_eq!(project.title, "T1");
        assert_eq!(project.description, "D1");
    }

    #[test]
    fn project_ignores_unknown_fields() {
        let json = r#"{"_id":"abc","title":"T","description":"D","__v":0,"createdAt":"2024-01-01"}"#;
        let project: Project = serde_json::from_str(json).unwrap();
        assert_eq!(project.id, "abc");
    }

    #[test]
    fn project_list_keeps_response_order() {
        let json = r#"[
            {"_id":"2","title":"B","description":"b"},
            {"_id":"1","title":"A","description":"a"}
        ]"#;
        let projects: Vec<Project> = serde_json::from_str(json).unwrap();
        assert_eq!(projects[0].id, "2");
        assert_eq!(projects[1].id, "1");
    }
}
