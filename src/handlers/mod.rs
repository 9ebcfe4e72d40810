//! MCP tool handlers for the checklist server
//!
//! This module contains the implementation of all MCP tool handlers.
//! Each handler is in a separate file for better organization.

pub mod add_item;
pub mod list;
pub mod remove_item;
pub mod reset_all;
pub mod share;
pub mod toggle_status;
