// Input accepted by `Vocabulary::add`.
//
// Raw text gets tokenized, another vocabulary gets merged, and anything else
// with a textual form is tokenized from that form.

use std::borrow::Cow;
use std::fmt::Display;

use super::Vocabulary;

/// Something that can be folded into a vocabulary.
#[derive(Debug, Clone)]
pub enum Input<'a> {
    /// Nothing to add (e.g. `None`)
    Absent,
    /// Raw text, tokenized on word boundaries
    Text(Cow<'a, str>),
    /// Another vocabulary, merged with summed counts
    Vocabulary(&'a Vocabulary),
    /// The textual representation of some other value, tokenized like text
    Other(String),
}

impl Input<'_> {
    /// Wrap any displayable value as input, using its `to_string()` form.
    pub fn other(value: &impl Display) -> Self {
        Input::Other(value.to_string())
    }

    /// The text to tokenize, if this input is textual.
    pub(crate) fn as_text(&self) -> Option<&str> {
        match self {
            Input::Text(text) => Some(text.as_ref()),
            Input::Other(text) => Some(text.as_str()),
            Input::Absent | Input::Vocabulary(_) => None,
        }
    }
}

impl<'a> From<&'a str> for Input<'a> {
    fn from(text: &'a str) -> Self {
        Input::Text(Cow::Borrowed(text))
    }
}

impl<'a> From<&'a String> for Input<'a> {
    fn from(text: &'a String) -> Self {
        Input::Text(Cow::Borrowed(text.as_str()))
    }
}

impl From<String> for Input<'_> {
    fn from(text: String) -> Self {
        Input::Text(Cow::Owned(text))
    }
}

impl<'a> From<&'a Vocabulary> for Input<'a> {
    fn from(vocabulary: &'a Vocabulary) -> Self {
        Input::Vocabulary(vocabulary)
    }
}

impl<'a, T: Into<Input<'a>>> From<Option<T>> for Input<'a> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Input::Absent, Into::into)
    }
}

macro_rules! scalar_input {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Input<'_> {
                fn from(value: $ty) -> Self {
                    Input::Other(value.to_string())
                }
            }
        )*
    };
}

scalar_input!(i32, i64, u32, u64, usize, f32, f64, char);
