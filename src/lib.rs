//! staylist application library
//!
//! The listings module and the registration glue live here.

pub mod modules;
