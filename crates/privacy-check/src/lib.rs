//! Core library for the RA 10173 compliance self-assessment service.
//!
//! The crate is organized around the three user-facing capabilities:
//! [`assessment`] (question catalog, scoring, and the remediation action
//! plan), [`guidance`] (the bridge to the external legal-guidance LLM), and
//! [`report`] (PDF export). [`config`], [`telemetry`], and [`error`] carry
//! the shared service plumbing.

pub mod assessment;
pub mod config;
pub mod error;
pub mod guidance;
pub mod report;
pub mod telemetry;
