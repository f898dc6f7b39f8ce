//! Integration tests for fieldkit

mod dispatch;
mod documents;
mod radio_groups;
