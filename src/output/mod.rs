// ABOUTME: Output handling module for the stencil renderer
// ABOUTME: Exports sink selection and the stdout/file writers

pub mod error;
pub mod writer;

pub use error::{OutputError, Result};
pub use writer::{select_writer, FileWriter, OutputWriter, StdoutWriter};
