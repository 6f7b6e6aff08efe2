pub mod assessment;
pub mod audit;
pub mod benchmark;
pub mod criterion;
pub mod patient;
pub mod ranking;
pub mod rating;
pub mod status;
