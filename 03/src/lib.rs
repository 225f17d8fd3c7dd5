#![deny(clippy::pedantic)]
#![allow(clippy::implicit_hasher)]
pub mod intersection;
pub mod wire;
