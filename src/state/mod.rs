//! Application state for the notification widget.
//!
//! DESIGN
//! ======
//! All mutable widget data lives in one record that only changes through
//! `WidgetState::apply`. The DOM is an output of that record, never an input.

pub mod widget;
