//! Substitution cipher: derangement generation and phrase encoding.

pub mod derangement;
pub mod encode;

pub use derangement::Derangement;
pub use encode::encode;
