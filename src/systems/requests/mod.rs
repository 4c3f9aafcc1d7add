//! Background request lanes, one per endpoint.
//!
//! The UI thread sends id-tagged [`RequestCommand`]s and receives
//! [`RequestResult`]s on a shared channel. Ids only ever grow, so the UI can
//! discard anything that is not the latest answer for its endpoint.

mod commands;
mod worker;

pub(crate) use commands::{RequestCommand, RequestOutcome, RequestResult};
pub(crate) use worker::spawn;
