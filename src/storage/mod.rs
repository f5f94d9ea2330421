//! JSON file storage helpers

pub mod file_io;
