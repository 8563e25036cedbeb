pub mod auth;

pub mod users;

pub mod missions;

pub mod progress;

pub mod skills;

pub mod system;

pub use auth::configure_auth_routes;
pub use missions::configure_mission_routes;
pub use progress::configure_progress_routes;
pub use skills::configure_skill_routes;
pub use system::configure_system_routes;
pub use users::configure_user_routes;
