//! Flight journey search server.
//!
//! A web service that answers: "how do I fly from this city to that
//! city on this date, direct or with one connection?"

pub mod domain;
pub mod events;
pub mod search;
pub mod web;
