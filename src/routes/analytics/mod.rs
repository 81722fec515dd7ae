pub mod dynamics;
pub mod latest;
pub mod rating;
pub mod results;
