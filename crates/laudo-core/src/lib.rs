//! # laudo-core
//!
//! Wire data model for the LaudoSync audit client.
//!
//! This crate holds the types exchanged with the audit backend and nothing
//! that performs I/O over the network:
//! - Request types (`AuditRequest`, `TextAuditRequest`) and their form
//!   defaulting rules
//! - The comparison result returned by an audit (`AuditResult`)
//! - Stored audit records and listings
//! - Service status responses and the backend error body
//! - Cross-cutting error types

pub mod audit;
pub mod errors;
pub mod request;
pub mod responses;

pub use audit::{AuditList, AuditRecord, AuditResult, Discrepancy, ExtractedTexts};
pub use errors::CoreError;
pub use request::{AuditRequest, NOT_INFORMED, ReportFile, TextAuditRequest};
pub use responses::{ErrorBody, HealthStatus, ServiceInfo};
