pub mod auth;
pub mod check;
pub mod dispatch;
pub mod drugs;
pub mod export;
pub mod graph;
pub mod serve;
