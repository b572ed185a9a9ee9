//! Browser helpers shared by components and the socket task.

pub mod alert;
pub mod markup;
