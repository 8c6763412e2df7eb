//! Core types for wavlit.
//!
//! This crate defines the values passed between the stages of the
//! transcoder: the chunk tags the container parser matches on, the
//! validated source format, and the mono 16-bit result the emitters
//! serialize.
//!
//! Designed to be `no_std` compatible with the `alloc` crate.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod format;
mod fourcc;
mod mono;

pub use format::{Encoding, FormatDescriptor, SampleWidth, MAX_BITS, MIN_BITS};
pub use fourcc::FourCc;
pub use mono::{MonoPcm, OUTPUT_BITS, OUTPUT_CHANNELS};
