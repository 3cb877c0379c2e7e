use std::error::Error;
use std::fmt::{self, Display, Formatter};

use derive_more::{Display, Error, From, IsVariant, TryInto};

#[derive(Debug)]
pub struct IndexOutOfBounds {
    pub index: usize,
    pub len: usize,
}

impl Display for IndexOutOfBounds {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Index {} out of bounds for list with {} elements!", self.index, self.len)
    }
}

impl Error for IndexOutOfBounds {}

#[derive(Debug)]
pub struct ValueNotFound;

impl Display for ValueNotFound {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "No matching value in this list!")
    }
}

impl Error for ValueNotFound {}

#[derive(Debug)]
pub struct EmptyList;

impl Display for EmptyList {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "The list is empty!")
    }
}

impl Error for EmptyList {}

#[derive(Debug)]
pub struct InvalidRange {
    pub start: usize,
    pub end: usize,
    pub len: usize,
}

impl Display for InvalidRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Range {}..{} is invalid for list with {} elements!",
            self.start, self.end, self.len
        )
    }
}

impl Error for InvalidRange {}

#[derive(Debug)]
pub struct StaleCursor;

impl Display for StaleCursor {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Cursor is parked on a removed node!")
    }
}

impl Error for StaleCursor {}

#[derive(Debug)]
pub struct NoCurrentElement;

impl Display for NoCurrentElement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Cursor has not returned an element yet!")
    }
}

impl Error for NoCurrentElement {}

#[derive(Debug, Display, Error, From, TryInto, IsVariant)]
pub enum LookupError {
    IndexOutOfBounds(IndexOutOfBounds),
    ValueNotFound(ValueNotFound),
}

#[derive(Debug, Display, Error, From, TryInto, IsVariant)]
pub enum CursorError {
    StaleCursor(StaleCursor),
    NoCurrentElement(NoCurrentElement),
}
