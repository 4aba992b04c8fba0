//! Structures of general use, not tied to any particular part of a solve.

pub mod index_heap;
pub mod luby;
pub mod minimal_pcg;
