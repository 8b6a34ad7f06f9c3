//! Store records and the domain entities mapped from them.

pub mod channel;
pub mod character;
pub mod item;
pub mod show;
