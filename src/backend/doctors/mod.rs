//! Doctor Directory
//!
//! Storage and HTTP handlers for the clinic's doctors.

pub mod handlers;
pub mod repository;

pub use repository::DoctorRepository;
