/*! Language identification

Holds a [Classify] trait for implementing other classifiers.

The classifier shipped with the crate is [fasttext](https://fasttext.cc), see [FastTextClassifier].
!*/
mod fasttext;

pub use self::fasttext::FastTextClassifier;

use crate::error::Error;

/// Language classification of a document.
///
/// Returns the language code of `text`, or [None] if no reliable identification can be made.
pub trait Classify: Sync {
    fn classify(&self, text: &str) -> Result<Option<String>, Error>;
}

impl<F> Classify for F
where
    F: Fn(&str) -> Option<String> + Sync,
{
    fn classify(&self, text: &str) -> Result<Option<String>, Error> {
        Ok(self(text))
    }
}
