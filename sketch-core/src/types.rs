/// Identifier for an item on a [`crate::canvas::Canvas`].
///
/// Ids are handed out in increasing order and are never reused within
/// the lifetime of a given `Canvas`, even after the item is deleted.
pub type ItemId = usize;

/// Label used to address a group of canvas items at once.
pub type Tag = &'static str;

/// Toolkit-independent colours used by the sketches.
///
/// The viewer maps these to whatever colour type its painter expects.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    Brown,
    Green,
    Red,
    Black,
}
