//! Contact form - a terminal contact form with live field validation.
//!
//! The form collects first name, last name, email and an optional message.
//! Required fields are validated as they change, when focus leaves them and
//! on submit; a submit that passes validation renders a summary of what was
//! sent.
//!
//! - [`form`] - values, validators and the [`ContactForm`](form::ContactForm) state holder
//! - [`ui`] - ratatui rendering
//! - [`input`] / [`app`] - key and mouse handling
//! - [`terminal`], [`cli`], [`config`], [`logging`], [`error`] - the binary's plumbing

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod form;
pub mod input;
pub mod logging;
pub mod terminal;
pub mod ui;
