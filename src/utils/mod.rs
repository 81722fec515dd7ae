pub mod analytics;
pub mod auth;
pub mod auth0;
pub mod export;
pub mod jwt;
pub mod password;
pub mod permissions;
pub mod readiness;
pub mod scheduler;
pub mod webutils;
