//! Timesheets domain module.
//!
//! A timesheet collects a month of logged hours against one project; the
//! total is derived from its entries on every read.

pub mod timesheet;

pub use timesheet::{Timesheet, TimesheetEntry};
