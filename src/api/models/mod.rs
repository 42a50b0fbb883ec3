// DTOs for the intranet API. Decoded from a response, optionally edited by
// the caller and re-encoded for a write. Field names follow the API's
// snake_case keys, including the `?`-suffixed boolean flags.

mod close;
mod project;
mod user;

pub use close::Close;
pub(crate) use close::NewClose;
pub use project::{
    Project, ProjectRef, ProjectSession, ProjectUser, Scale, SessionUpload, Team, TeamMember,
};
pub use user::{Campus, CampusUser, Cursus, CursusUser, Language, User, UserPatch, UserRef};
