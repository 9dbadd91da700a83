/// This is the part of the library that describes the password configuration,
/// its default values and the eager validation of user supplied values.
pub mod config;
/// This is the library part that implements the password synthesis, the
/// classification of character positions and the per category repair passes.
pub mod generate;
/// This is the library that handles drawing random words from the built in
/// word list, used for the word based password mode.
pub mod words;

pub(crate) mod error;
