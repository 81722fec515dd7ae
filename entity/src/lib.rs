pub mod sea_orm_active_enums;

pub mod company;
pub mod membership;
pub mod notification;
pub mod quiz;
pub mod quiz_result;
pub mod user;

/*
 Users sign up on their own and may own any number of companies.
 Joining a company goes through a membership row: the owner invites or
 the user requests, the other side accepts. Members can be promoted to
 admin, which lets them manage quizzes and read company analytics.
 Members take quizzes, each attempt becomes a quiz_result row.
 */
