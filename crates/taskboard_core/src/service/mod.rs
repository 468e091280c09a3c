//! Core use-case services.
//!
//! # Responsibility
//! - Bind the reducer to a snapshot store behind one injectable object.
//! - Keep UI layers decoupled from storage details.

pub mod board_service;

pub use board_service::BoardService;
