use serde::Serialize;

/// A single page of extracted text, numbered from 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Page<'a> {
    pub number: usize,
    pub text: &'a str,
}
