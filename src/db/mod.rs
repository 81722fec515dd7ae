pub mod company;
pub mod membership;
pub mod notification;
pub mod postgres_service;
pub mod quiz;
pub mod quiz_result;
pub mod user;
