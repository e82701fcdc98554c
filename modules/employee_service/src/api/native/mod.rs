//! In-process transport

pub mod client;

pub use client::NativeClient;
