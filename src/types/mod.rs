pub mod company;
pub mod error;
pub mod membership;
pub mod notification;
pub mod pagination;
pub mod quiz;
pub mod quiz_result;
pub mod response;
pub mod token;
pub mod user;
