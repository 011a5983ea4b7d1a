//! Model to entity mappers
//!
//! Conversions from database rows (this crate's models) to domain
//! entities (relay-core). The audit mapping is fallible because the
//! stored action string must parse into a known [`relay_core::AuditAction`].

mod audit_entry;
mod roster_user;
