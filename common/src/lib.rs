//! Common library exports shared by the frontend: the expert model, the directory
//! query engine and the insight generator boundary.

extern crate serde;


pub mod expert;
pub mod directory_query;
pub mod directory_const;
pub mod sample_data;
pub mod insight;
