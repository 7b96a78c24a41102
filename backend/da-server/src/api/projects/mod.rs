pub mod list_projects_query;
pub mod projects;
