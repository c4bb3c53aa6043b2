//! Product-specific persistence hooks for the resource actor.

pub mod entity;
