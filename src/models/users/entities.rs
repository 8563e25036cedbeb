use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use ts_rs::TS;

// 用户角色（注册类型）
#[derive(Debug, Clone, Serialize, PartialEq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
pub enum UserRole {
    Student,      // 学生
    Professional, // 职业人士
    Employer,     // 雇主
    Nonprofit,    // 非营利组织
    College,      // 高校
    Agency,       // 就业机构
    Teacher,      // 教师
    Admin,        // 管理员
}

impl UserRole {
    pub const STUDENT: &'static str = "student";
    pub const PROFESSIONAL: &'static str = "professional";
    pub const EMPLOYER: &'static str = "employer";
    pub const NONPROFIT: &'static str = "nonprofit";
    pub const COLLEGE: &'static str = "college";
    pub const AGENCY: &'static str = "agency";
    pub const TEACHER: &'static str = "teacher";
    pub const ADMIN: &'static str = "admin";

    pub fn admin_roles() -> &'static [&'static UserRole] {
        &[&Self::Admin]
    }

    pub fn student_roles() -> &'static [&'static UserRole] {
        &[&Self::Student, &Self::Admin]
    }

    /// 注册接口允许的角色（管理员账号只能由种子流程或管理员创建）
    pub fn registrable_roles() -> &'static [&'static UserRole] {
        &[
            &Self::Student,
            &Self::Professional,
            &Self::Employer,
            &Self::Nonprofit,
            &Self::College,
            &Self::Agency,
            &Self::Teacher,
        ]
    }
}

impl<'de> Deserialize<'de> for UserRole {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<UserRole>().map_err(|_| {
            serde::de::Error::custom(format!(
                "无效的用户角色: '{s}'. 支持的角色: student, professional, employer, nonprofit, college, agency, teacher, admin"
            ))
        })
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            UserRole::Student => UserRole::STUDENT,
            UserRole::Professional => UserRole::PROFESSIONAL,
            UserRole::Employer => UserRole::EMPLOYER,
            UserRole::Nonprofit => UserRole::NONPROFIT,
            UserRole::College => UserRole::COLLEGE,
            UserRole::Agency => UserRole::AGENCY,
            UserRole::Teacher => UserRole::TEACHER,
            UserRole::Admin => UserRole::ADMIN,
        };
        write!(f, "{s}")
    }
}

impl std::str::FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            UserRole::STUDENT => Ok(UserRole::Student),
            UserRole::PROFESSIONAL => Ok(UserRole::Professional),
            UserRole::EMPLOYER => Ok(UserRole::Employer),
            UserRole::NONPROFIT => Ok(UserRole::Nonprofit),
            UserRole::COLLEGE => Ok(UserRole::College),
            UserRole::AGENCY => Ok(UserRole::Agency),
            UserRole::TEACHER => Ok(UserRole::Teacher),
            UserRole::ADMIN => Ok(UserRole::Admin),
            _ => Err(format!("Invalid user role: {s}")),
        }
    }
}

// 用户状态
#[derive(Debug, Clone, Serialize, PartialEq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
pub enum UserStatus {
    Active,    // 活跃
    Inactive,  // 非活跃
    Suspended, // 暂停
}

impl<'de> Deserialize<'de> for UserStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<UserStatus>().map_err(|_| {
            serde::de::Error::custom(format!(
                "无效的用户状态: '{s}'. 支持的状态: active, inactive, suspended"
            ))
        })
    }
}

impl std::fmt::Display for UserStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserStatus::Active => write!(f, "active"),
            UserStatus::Inactive => write!(f, "inactive"),
            UserStatus::Suspended => write!(f, "suspended"),
        }
    }
}

impl std::str::FromStr for UserStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(UserStatus::Active),
            "inactive" => Ok(UserStatus::Inactive),
            "suspended" => Ok(UserStatus::Suspended),
            _ => Err(format!("Invalid user status: {s}")),
        }
    }
}

// 审核等级：注册 -> 待审核 -> 已认证
#[derive(Debug, Clone, Serialize, PartialEq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
pub enum VerificationLevel {
    Created,    // 刚注册
    Moderation, // 审核中
    Verified,   // 已认证
}

impl<'de> Deserialize<'de> for VerificationLevel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<VerificationLevel>().map_err(|_| {
            serde::de::Error::custom(format!(
                "无效的审核等级: '{s}'. 支持的等级: created, moderation, verified"
            ))
        })
    }
}

impl std::fmt::Display for VerificationLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VerificationLevel::Created => write!(f, "created"),
            VerificationLevel::Moderation => write!(f, "moderation"),
            VerificationLevel::Verified => write!(f, "verified"),
        }
    }
}

impl std::str::FromStr for VerificationLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "created" => Ok(VerificationLevel::Created),
            "moderation" => Ok(VerificationLevel::Moderation),
            "verified" => Ok(VerificationLevel::Verified),
            _ => Err(format!("Invalid verification level: {s}")),
        }
    }
}

// 用户资料
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
pub struct UserProfile {
    pub first_name: String,
    pub last_name: String,
    pub middle_name: Option<String>,
    pub avatar_url: Option<String>,
}

// 用户实体
//
// coins / entrepreneurship / role_points / motivation_points / completed_at
// 只对学生角色有意义，由任务积分引擎独占写入。
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
pub struct User {
    pub id: i64,
    pub email: String,
    #[serde(skip_serializing, default)] // 不序列化到JSON响应中
    #[ts(skip)]
    pub password_hash: String,
    pub role: UserRole,
    pub status: UserStatus,
    pub verification: VerificationLevel,
    pub profile: UserProfile,
    pub coins: i64,
    pub entrepreneurship: i32,
    pub role_points: BTreeMap<String, u32>,
    pub motivation_points: BTreeMap<String, u32>,
    pub completed_at: Option<chrono::DateTime<chrono::Utc>>,
    pub last_login: Option<chrono::DateTime<chrono::Utc>>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl User {
    // 生成访问令牌
    pub async fn generate_access_token(&self) -> String {
        match crate::utils::jwt::JwtUtils::generate_access_token(self.id, &self.role.to_string()) {
            Ok(token) => token,
            Err(e) => {
                tracing::error!("JWT token 生成失败: {}", e);
                format!(
                    "fallback_token_{}_{}",
                    self.id,
                    chrono::Utc::now().timestamp()
                )
            }
        }
    }

    // 生成 token 对（access + refresh）
    pub async fn generate_token_pair(
        &self,
        refresh_token_expiry: Option<chrono::TimeDelta>,
    ) -> Result<crate::utils::jwt::TokenPair, String> {
        crate::utils::jwt::JwtUtils::generate_token_pair(
            self.id,
            &self.role.to_string(),
            refresh_token_expiry,
        )
        .map_err(|e| format!("生成 token 对失败: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trip() {
        for raw in [
            "student",
            "professional",
            "employer",
            "nonprofit",
            "college",
            "agency",
            "teacher",
            "admin",
        ] {
            let role: UserRole = raw.parse().unwrap();
            assert_eq!(role.to_string(), raw);
        }
        assert!("pupil".parse::<UserRole>().is_err());
    }

    #[test]
    fn test_admin_not_registrable() {
        assert!(
            !UserRole::registrable_roles()
                .iter()
                .any(|r| **r == UserRole::Admin)
        );
    }
}
