//! CLI commands for roadsearch

pub mod compare;
pub mod dispatch;
pub mod endpoints;
pub mod observer;
pub mod output;
pub mod route;
pub mod search;
