use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::user::{Campus, Cursus};

/// A catalog project as returned by `GET /projects/:slug`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    pub id: u64,
    pub name: String,
    pub slug: String,
    pub parent: Option<ProjectRef>,
    pub children: Vec<ProjectRef>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub exam: bool,
    pub git_id: Option<u64>,
    pub repository: Option<String>,
    pub cursus: Vec<Cursus>,
    pub campus: Vec<Campus>,
    pub videos: Vec<String>,
    pub project_sessions: Vec<ProjectSession>,
}

/// Short project record used for parents, children and user projects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectRef {
    pub id: u64,
    pub name: String,
    pub slug: String,
    pub parent_id: Option<u64>,
}

/// A campus- or cursus-specific run of a project.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectSession {
    pub id: u64,
    pub solo: Option<bool>,
    pub begin_at: Option<DateTime<Utc>>,
    pub end_at: Option<DateTime<Utc>>,
    pub estimate_time: Option<String>,
    pub difficulty: Option<u64>,
    pub objectives: Vec<String>,
    pub description: String,
    pub duration_days: Option<u64>,
    pub project_id: u64,
    pub campus_id: Option<u64>,
    pub cursus_id: Option<u64>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub max_people: Option<u64>,
    pub is_subscriptable: bool,
    pub scales: Vec<Scale>,
    pub uploads: Vec<SessionUpload>,
    pub team_behaviour: String,
}

/// Reference to an evaluation scale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Scale {
    pub id: u64,
    pub correction_number: u32,
    pub is_primary: bool,
}

/// Automated grader attached to a session, e.g. "Moulinette".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionUpload {
    pub id: u64,
    pub name: String,
}

/// A project as seen by one user, with the teams formed for it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectUser {
    pub id: u64,
    pub occurrence: u32,
    pub final_mark: Option<i64>,
    pub status: String,
    #[serde(rename = "validated?")]
    pub validated: Option<bool>,
    pub current_team_id: Option<u64>,
    pub project: ProjectRef,
    pub cursus_ids: Vec<u64>,
    pub marked_at: Option<DateTime<Utc>>,
    pub marked: bool,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub teams: Vec<Team>,
}

impl ProjectUser {
    /// The team for the current attempt: the one matching `current_team_id`,
    /// or the last team listed when the id is missing or matches none.
    pub fn current_team(&self) -> Option<&Team> {
        self.current_team_id
            .and_then(|id| self.teams.iter().find(|t| t.id == id))
            .or_else(|| self.teams.last())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Team {
    pub id: u64,
    pub name: String,
    pub url: String,
    pub final_mark: Option<i64>,
    pub project_id: u64,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub status: String,
    pub users: Vec<TeamMember>,
    #[serde(rename = "locked?")]
    pub locked: bool,
    #[serde(rename = "validated?")]
    pub validated: Option<bool>,
    #[serde(rename = "closed?")]
    pub closed: bool,
    /// Null until a repository has been provisioned for the team.
    pub repo_url: Option<String>,
    pub repo_uuid: Option<String>,
    pub locked_at: Option<DateTime<Utc>>,
    pub closed_at: Option<DateTime<Utc>>,
    pub project_session_id: Option<u64>,
}

impl Team {
    /// The repository URL, if one has been provisioned.
    pub fn repository(&self) -> Option<&str> {
        self.repo_url.as_deref().filter(|url| !url.is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeamMember {
    pub id: u64,
    pub login: String,
    pub url: String,
    pub leader: bool,
    pub occurrence: u32,
    pub validated: bool,
    pub projects_user_id: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_full_project() {
        let raw = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/project.json"));
        let project: Project = serde_json::from_str(raw).unwrap();
        assert_eq!(project.id, 1);
        assert_eq!(project.name, "Libft");
        assert_eq!(project.slug, "libft");
        assert_eq!(project.created_at.unwrap().to_rfc3339(), "2014-11-02T18:23:57.156+00:00");
        assert!(!project.exam);
        assert_eq!(project.git_id, None);
        assert_eq!(project.repository, None);
        assert!(project.parent.is_none());

        assert_eq!(project.cursus.len(), 3);
        assert_eq!(project.cursus[0].id, 1);
        assert_eq!(project.cursus[0].name, "42");

        assert_eq!(project.campus.len(), 2);
        assert_eq!(project.campus[0].id, 42);
        assert_eq!(project.campus[0].name, "42Network");
        assert_eq!(project.campus[0].time_zone, "Europe/Paris");
        assert!(project.campus[1].default_hidden_phone);

        assert!(project.videos.is_empty());

        let session = &project.project_sessions[0];
        assert_eq!(session.id, 2697);
        assert_eq!(session.solo, Some(true));
        assert_eq!(session.estimate_time.as_deref(), Some("14 days"));
        assert_eq!(session.difficulty, Some(85));
        assert_eq!(
            session.objectives,
            ["Basics of C programming", "Unix C library", "Static library creation"]
        );
        assert_eq!(session.project_id, 1);
        assert_eq!(session.campus_id, Some(13));
        assert_eq!(session.scales.len(), 4);
        assert!(session.scales[0].is_primary);
        assert_eq!(session.uploads[0].name, "Moulinette");
    }

    fn team(id: u64, repo_url: Option<&str>) -> Team {
        Team {
            id,
            repo_url: repo_url.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn current_team_prefers_the_current_id() {
        let entry = ProjectUser {
            current_team_id: Some(2),
            teams: vec![team(1, None), team(2, Some("git@vogsphere:a")), team(3, None)],
            ..Default::default()
        };
        assert_eq!(entry.current_team().map(|t| t.id), Some(2));
    }

    #[test]
    fn current_team_falls_back_to_the_last_team() {
        let entry = ProjectUser {
            current_team_id: None,
            teams: vec![team(1, None), team(3, None)],
            ..Default::default()
        };
        assert_eq!(entry.current_team().map(|t| t.id), Some(3));
        assert!(ProjectUser::default().current_team().is_none());
    }

    #[test]
    fn unprovisioned_repository_is_none() {
        assert_eq!(team(1, None).repository(), None);
        assert_eq!(team(1, Some("")).repository(), None);
        assert_eq!(team(1, Some("git@vogsphere:a")).repository(), Some("git@vogsphere:a"));
    }
}
