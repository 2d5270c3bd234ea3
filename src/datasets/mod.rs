//! # Reference datasets for the demonstration views
//! Loading utilities for the labeled tweet corpus shown on the project overview
//! page. Nothing here participates in inference.

pub mod tweet_eval;
