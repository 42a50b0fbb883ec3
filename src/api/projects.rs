// Project lookups and the paginated projects-of-a-user collection.

use std::collections::BTreeMap;

use reqwest::Method;

use super::body::Body;
use super::classify::Expectation;
use super::client::{decode, ApiClient};
use super::error::{ApiError, Subject};
use super::models::{Project, ProjectUser};
use super::pagination::Pages;

const FETCH_PROJECT: Expectation = Expectation::new(Subject::Project, "fetching project");
const FETCH_USER_PROJECTS: Expectation = Expectation::new(Subject::User, "fetching user projects");

/// Filters and sort order for collection endpoints.
///
/// Filters become `filter[<field>]=<value>` and sort fields are joined into a
/// single `sort=a,-b` parameter; a leading `-` sorts descending.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectsQuery {
    filters: BTreeMap<String, String>,
    sort: Vec<String>,
}

impl ProjectsQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filter(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.filters.insert(field.into(), value.into());
        self
    }

    pub fn sort_by(mut self, field: impl Into<String>) -> Self {
        self.sort.push(field.into());
        self
    }

    fn to_query(&self, page: u32) -> Vec<(String, String)> {
        let mut query = vec![("page".to_string(), page.to_string())];
        for (field, value) in &self.filters {
            query.push((format!("filter[{field}]"), value.clone()));
        }
        if !self.sort.is_empty() {
            query.push(("sort".to_string(), self.sort.join(",")));
        }
        query
    }
}

impl ApiClient {
    /// Fetch a project by its slug, e.g. `libft`.
    pub fn get_project_by_name(&self, slug: &str) -> Result<Project, ApiError> {
        let request = self.prepare_resource(Method::GET, &["projects", slug], &[], Body::Empty)?;
        decode(self.exchange(request, FETCH_PROJECT)?)
    }

    /// Fetch one page (1-based) of the projects of `login`.
    ///
    /// A page past the end is an empty `Vec`, not an error.
    pub fn get_user_projects(
        &self,
        login: &str,
        query: &ProjectsQuery,
        page: u32,
    ) -> Result<Vec<ProjectUser>, ApiError> {
        let path = ["users", login, "projects_users"];
        let request =
            self.prepare_resource(Method::GET, &path, &query.to_query(page), Body::Empty)?;
        decode(self.exchange(request, FETCH_USER_PROJECTS)?)
    }

    /// All projects of `login`, fetched page by page as the sequence is consumed.
    pub fn user_projects(&self, login: &str, query: ProjectsQuery) -> Pages<'_, ProjectUser> {
        let login = login.to_string();
        Pages::new(move |page| self.get_user_projects(&login, &query, page))
    }
}
