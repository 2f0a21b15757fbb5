pub mod functional;
pub mod guard;
pub mod time;
