//! Small browser helpers shared by pages and components.

pub mod cookie;
