//! # Error reporting for reading of linear program files
//!
//! A collection of enums describing any problems encountered during reading and parsing.
use std::io;

use thiserror::Error;

/// An `ImportError` is created when an error was encountered during IO or parsing.
///
/// It is the highest error in the io error hierarchy.
#[derive(Error, Debug)]
pub enum ImportError {
    /// The file extension of the provided file path is not known or supported.
    ///
    /// The contained `String` is a message for the end user.
    #[error("{0}")]
    FileExtension(String),
    /// The file to read isn't found, or the reading of file couldn't start or was interrupted.
    #[error("Could not read file: {0}")]
    IO(#[from] io::Error),
    /// Contents of the file could not be parsed into a linear program.
    ///
    /// # Note
    ///
    /// A problem that is not in canonical form is not represented with this error. This variant
    /// should only be created for syntactically incorrect files.
    #[error("Could not parse file: {0}")]
    Parse(#[from] ParseError),
}

/// A `ParseError` represents all errors encountered during parsing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The file as a whole is not a valid problem, for example because the objective function is
    /// missing.
    #[error("{0}")]
    Program(String),
    /// A specific line could not be parsed.
    #[error("{description}\n\tCaused at line\t{line_number}:\t{line}")]
    Line {
        /// What's wrong with the line.
        description: String,
        /// Line number in the file as originally read from the disk, starting at 1.
        line_number: usize,
        /// Contents of the line.
        line: String,
    },
}

impl ParseError {
    /// Create a new `ParseError` that refers to a line in the file.
    pub(crate) fn at_line(description: impl Into<String>, (line_number, line): FileLocation) -> Self {
        Self::Line {
            description: description.into(),
            line_number,
            line: line.to_string(),
        }
    }
}

/// A `FileLocation` references a line in the file by the line number of the file as originally
/// read from the disk. It contains a reference to the line itself.
pub(crate) type FileLocation<'a> = (usize, &'a str);
