//! Entity Module

pub mod category;
pub mod kudos;
pub mod team;
