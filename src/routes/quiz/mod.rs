pub mod answer;
pub mod create;
pub mod delete;
pub mod list;
pub mod result;
pub mod update;
