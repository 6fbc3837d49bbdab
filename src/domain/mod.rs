pub mod member;
pub mod announcement;
pub mod blog;
pub mod project;
pub mod resource;
pub mod profile;

pub use member::*;
pub use announcement::*;
pub use blog::*;
pub use project::*;
pub use resource::*;
pub use profile::*;
