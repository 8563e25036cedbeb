//! 预导入模块，方便使用

pub use super::mission_questions::{
    ActiveModel as MissionQuestionActiveModel, Entity as MissionQuestions,
    Model as MissionQuestionModel,
};
pub use super::missions::{
    ActiveModel as MissionActiveModel, Entity as Missions, Model as MissionModel,
};
pub use super::skill_scopes::{
    ActiveModel as SkillScopeActiveModel, Entity as SkillScopes, Model as SkillScopeModel,
};
pub use super::student_missions::{
    ActiveModel as StudentMissionActiveModel, Entity as StudentMissions,
    Model as StudentMissionModel,
};
pub use super::student_skills::{
    ActiveModel as StudentSkillActiveModel, Entity as StudentSkills, Model as StudentSkillModel,
};
pub use super::users::{ActiveModel as UserActiveModel, Entity as Users, Model as UserModel};
