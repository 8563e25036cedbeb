//! 业务服务层
//!
//! 每个领域一个 Service 结构体：路由层持有 Lazy 单例，存储句柄在
//! 请求期从 app_data 取出。

pub mod auth;
pub mod missions;
pub mod progress;
pub mod skills;
pub mod system;
pub mod users;

pub use auth::AuthService;
pub use missions::MissionService;
pub use progress::ProgressService;
pub use skills::SkillService;
pub use system::SystemService;
pub use users::UserService;
