//! Wire formats spoken to completion APIs

pub mod openai;
