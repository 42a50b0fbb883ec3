// UI layer: an interactive menu built on `dialoguer`. Each entry collects its
// inputs, runs one API call behind a spinner and prints the outcome. Errors
// are printed and the menu keeps running.

use crate::api::{ApiClient, ApiError, ProjectUser, ProjectsQuery, Upload, User, UserPatch};
use anyhow::{Context, Result};
use dialoguer::{Input, Password, Select};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Duration;

/// Main interactive menu. Runs until the user chooses "Exit".
pub fn main_menu(api: &ApiClient) -> Result<()> {
    let items = [
        "Show user",
        "Project repository path",
        "Show project",
        "Set profile image",
        "Update user",
        "Add correction points",
        "Remove correction points",
        "Exit",
    ];
    loop {
        let selection = Select::new().items(&items).default(0).interact()?;
        let outcome = match selection {
            0 => handle_show_user(api),
            1 => handle_repo_path(api),
            2 => handle_show_project(api),
            3 => handle_set_image(api),
            4 => handle_update_user(api),
            5 => handle_correction_points(api, true),
            6 => handle_correction_points(api, false),
            _ => break,
        };
        if let Err(e) = outcome {
            println!("Error: {e:#}");
        }
    }
    Ok(())
}

/// Ask for an access token; input is hidden.
pub fn prompt_token() -> Result<String> {
    let token: String = Password::new().with_prompt("API access token").interact()?;
    Ok(token.trim().to_string())
}

/// Run `call` behind a spinner showing `message`.
fn with_spinner<T>(message: &'static str, call: impl FnOnce() -> Result<T, ApiError>) -> Result<T> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template("{spinner} {msg}")?);
    spinner.set_message(message);
    spinner.enable_steady_tick(Duration::from_millis(100));
    let result = call();
    spinner.finish_and_clear();
    Ok(result?)
}

fn prompt_login() -> Result<String> {
    let default = std::env::var("USER").unwrap_or_default();
    let login: String = Input::new()
        .with_prompt("Login")
        .default(default)
        .interact_text()?;
    Ok(login)
}

fn handle_show_user(api: &ApiClient) -> Result<()> {
    let login = prompt_login()?;
    let user = with_spinner("Fetching user...", || api.get_user_by_login(&login))?;
    print_user(&user);
    Ok(())
}

fn print_user(user: &User) {
    println!("{} ({})", user.displayname, user.login);
    println!("  email:             {}", user.email);
    println!("  staff:             {}", user.is_staff);
    println!("  correction points: {}", user.correction_point);
    println!("  wallet:            {}", user.wallet);
    if let (Some(month), Some(year)) = (&user.pool_month, &user.pool_year) {
        println!("  pool:              {month} {year}");
    }
    match user.primary_campus() {
        Some(campus) => println!("  campus:            {} ({})", campus.name, campus.time_zone),
        None => println!("  campus:            none"),
    }
}

/// Outcome of looking a project up in a user's project list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoLookup {
    Found(String),
    /// The project has a team but no repository has been provisioned.
    NotProvisioned,
    /// No project with that slug has a team.
    NotInProjects,
}

/// Walk a user's projects until `slug` turns up with a team, then report the
/// current team's repository.
pub fn find_repository(
    projects: impl Iterator<Item = Result<ProjectUser, ApiError>>,
    slug: &str,
) -> Result<RepoLookup, ApiError> {
    for entry in projects {
        let entry = entry?;
        if entry.project.slug != slug {
            continue;
        }
        let Some(team) = entry.current_team() else {
            continue;
        };
        return Ok(match team.repository() {
            Some(url) => RepoLookup::Found(url.to_string()),
            None => RepoLookup::NotProvisioned,
        });
    }
    Ok(RepoLookup::NotInProjects)
}

fn handle_repo_path(api: &ApiClient) -> Result<()> {
    let login = prompt_login()?;
    let slug: String = Input::new().with_prompt("Project slug").interact_text()?;
    let lookup = with_spinner("Searching projects...", || {
        find_repository(api.user_projects(&login, ProjectsQuery::new()).items(), &slug)
    })?;
    match lookup {
        RepoLookup::Found(url) => println!("{url}"),
        RepoLookup::NotProvisioned => println!("repository not found: {slug}"),
        RepoLookup::NotInProjects => {
            println!("Team of {slug} is not locked.");
            anyhow::bail!("{slug} is not in the projects of {login}");
        }
    }
    Ok(())
}

fn handle_show_project(api: &ApiClient) -> Result<()> {
    let slug: String = Input::new().with_prompt("Project slug").interact_text()?;
    let project = with_spinner("Fetching project...", || api.get_project_by_name(&slug))?;
    println!("{} ({}) #{}", project.name, project.slug, project.id);
    println!("  exam: {}", project.exam);
    let cursus: Vec<&str> = project.cursus.iter().map(|c| c.name.as_str()).collect();
    println!("  cursus: {}", cursus.join(", "));
    for session in &project.project_sessions {
        println!(
            "  session #{}: {} / difficulty {}",
            session.id,
            session.estimate_time.as_deref().unwrap_or("?"),
            session.difficulty.map(|d| d.to_string()).unwrap_or_else(|| "?".into()),
        );
        for objective in &session.objectives {
            println!("    - {objective}");
        }
    }
    Ok(())
}

fn handle_set_image(api: &ApiClient) -> Result<()> {
    let login = prompt_login()?;
    let path: String = Input::new().with_prompt("Image file path").interact_text()?;
    let image = Upload::open(&PathBuf::from(path)).context("Failed to read image file")?;
    with_spinner("Uploading...", || api.set_user_image(&login, image))?;
    println!("Upload successful");
    Ok(())
}

/// Blank answers leave the field out of the patch.
fn optional(prompt: &str) -> Result<Option<String>> {
    let value: String = Input::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()?;
    Ok(Some(value).filter(|v| !v.trim().is_empty()))
}

fn handle_update_user(api: &ApiClient) -> Result<()> {
    let login = prompt_login()?;
    let patch = UserPatch {
        email: optional("Email (blank to keep)")?,
        first_name: optional("First name (blank to keep)")?,
        last_name: optional("Last name (blank to keep)")?,
        kind: optional("Kind (blank to keep)")?,
        password: None,
    };
    if patch == UserPatch::default() {
        println!("Nothing to update.");
        return Ok(());
    }
    with_spinner("Updating user...", || api.update_user(&login, &patch))?;
    println!("User updated");
    Ok(())
}

fn handle_correction_points(api: &ApiClient, add: bool) -> Result<()> {
    let login = prompt_login()?;
    let amount: u32 = Input::new().with_prompt("Amount").interact_text()?;
    let reason: String = Input::new().with_prompt("Reason").interact_text()?;
    if add {
        with_spinner("Adding points...", || {
            api.add_correction_points(&login, amount, &reason)
        })?;
    } else {
        with_spinner("Removing points...", || {
            api.remove_correction_points(&login, amount, &reason)
        })?;
    }
    println!("Done");
    Ok(())
}
