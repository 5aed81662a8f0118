#![doc = include_str!("../README.md")]
#![forbid(rust_2018_idioms)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::missing_errors_doc, forbidden_lint_groups)]

#[macro_use]
extern crate tracing;

pub use self::{
    extension::OriginalReferrer, future::ResponseFuture, layer::HerkunftLayer,
    service::HerkunftService,
};

mod event;
mod extension;
mod future;
mod layer;
mod request;
mod service;
mod user_agent;
