//! # Integration tests that require a look inside the crate.
//!
//! Convention for function names:
//!
//! * `const ALP_STRING`
//! * `const MPS_STRING`
//! * `fn surface_form()`
//! * `fn model_form()`
