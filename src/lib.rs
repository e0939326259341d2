#![deny(unsafe_code, missing_debug_implementations)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! Basic, session and no-auth strategies for http services built on top of [tower](https://docs.rs/tower/latest/tower/),
//! plus redaction of sensitive fields in log lines.

pub mod authorize;
pub mod config;
pub mod error;
pub mod extension;
pub mod redact;
