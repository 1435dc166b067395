/*
 * Copyright (c) 2024.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Core primitives shared by the rasterfx crates
//!
//! This crate carries the leaf types every other rasterfx crate builds on:
//! pixel layouts, channel selectors, simple geometry and the buffer access
//! mode flags. It has no knowledge of images or filters.
#![warn(
    clippy::correctness,
    clippy::perf,
    clippy::pedantic,
    clippy::missing_errors_doc
)]
#![allow(
    clippy::needless_return,
    clippy::module_name_repetitions,
    clippy::doc_markdown
)]

pub mod access;
pub mod geom;
pub mod layout;
