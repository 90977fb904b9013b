//! # Reading of linear programs
//!
//! This module provides read functionality for linear program files.
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::data::number_types::traits::OrderedField;
use crate::io::error::ImportError;
use crate::io::lp::LinearProgram;

pub mod error;
pub mod lp;

/// Import a problem from a file.
///
/// Currently only supports the `.lp` filetype, see the `lp` module for the format.
///
/// # Errors
///
/// When a file extension is unknown, a file cannot be found or read, or the contents can't be
/// parsed, an error type is returned.
pub fn import<F: OrderedField>(
    file_path: &Path,
) -> Result<LinearProgram<F>, ImportError> {
    // Choose the right parser before reading
    match file_path.extension() {
        Some(extension) => match extension.to_str() {
            Some("lp") => {},
            Some(extension_string) => return Err(ImportError::FileExtension(format!(
                "Could not recognise file extension \"{}\" of file: {:?}",
                extension_string, file_path,
            ))),
            None => return Err(ImportError::FileExtension(format!(
                "Could not convert OsStr to &str, probably invalid unicode: {:?}",
                extension,
            ))),
        },
        None => return Err(ImportError::FileExtension(format!(
            "Could not read extension from file path: {:?}",
            file_path,
        ))),
    }

    let mut program = String::new();
    File::open(file_path)?.read_to_string(&mut program)?;

    Ok(lp::parse(&program)?)
}

#[cfg(test)]
mod test {
    use std::path::Path;

    use crate::io::error::ImportError;
    use crate::io::import;

    #[test]
    fn unknown_extension() {
        let result = import::<f64>(Path::new("problem.mps"));
        assert!(matches!(result, Err(ImportError::FileExtension(_))));
        let result = import::<f64>(Path::new("problem"));
        assert!(matches!(result, Err(ImportError::FileExtension(_))));
    }

    #[test]
    fn missing_file() {
        let result = import::<f64>(Path::new("does/not/exist.lp"));
        assert!(matches!(result, Err(ImportError::IO(_))));
    }
}
