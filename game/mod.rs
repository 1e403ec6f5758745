//! The demo logic: a steerable circle and the obstacles that stop it.

pub mod rect;
pub mod entity;

interface::expose_game!{bumper::Bumper}
