#![doc = include_str!("../README.md")]
#![forbid(rust_2018_idioms)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::missing_errors_doc, forbidden_lint_groups)]

pub use self::{
    classify::{classify, RequestFacts, SkipReason, Verdict},
    config::{Config, FAVICON_PATH},
    error::{BoxError, Error, Result},
    medium::{Classification, Medium, MediumEngine},
    record::{ReferralRecord, StoredReferral},
    token::TokenCodec,
};
pub use herkunft_config::referrer::TokenEncoding;

mod classify;
mod config;
mod error;
mod medium;
mod record;
mod token;
