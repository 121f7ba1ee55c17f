//! Request execution
//!
//! Everything between a built JSON body and a parsed JSON response lives
//! here: header construction, the pluggable transport and error
//! classification.

pub mod http;
