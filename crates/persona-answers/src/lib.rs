//! Question answering for Persona
//!
//! A question is first checked against an ordered table of trigger phrases;
//! a hit is answered with a pre-recorded audio file name. Everything else is
//! sent to the completion API together with the personality instruction, and
//! its reply (or a description of its failure) is returned as text.

#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

pub mod dispatcher;
pub mod error;
pub mod matcher;
pub mod personality;
mod router;
pub mod types;

pub use dispatcher::{Dispatcher, GenerationSettings};
pub use error::AnswersError;
pub use matcher::{Trigger, TriggerTable};
pub use personality::Personality;
pub use router::ask_router;
pub use types::{Answer, Question};
