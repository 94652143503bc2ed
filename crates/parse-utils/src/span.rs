use nom::{AsBytes, InputIter, InputLength, InputTake, Offset, Slice};
use std::ops::{RangeFrom, RangeTo};

/// Parser input that pairs a byte fragment with its absolute offset in the
/// original buffer.
///
/// This plays the same role as `nom_locate`'s `LocatedSpan`, minus the
/// line/column bookkeeping: binary protocols only ever need the byte offset,
/// and dropping the newline scan keeps slicing O(1).
#[derive(Debug, Clone, Copy)]
pub struct ByteSpan<T> {
    offset: usize,
    fragment: T,
}

impl<T> ByteSpan<T> {
    pub const fn new(buffer: T) -> Self {
        Self {
            offset: 0,
            fragment: buffer,
        }
    }

    /// Construct a span starting at an arbitrary offset.
    ///
    /// # Safety
    /// The offset is trusted blindly. Methods that slice backwards assume any
    /// index within the offset is valid, so an offset larger than the real
    /// position in the parent buffer leads to undefined behavior.
    pub const unsafe fn new_from_raw_offset(offset: usize, fragment: T) -> Self {
        Self { offset, fragment }
    }

    /// Offset of the first byte of this fragment within the original buffer.
    #[inline]
    pub const fn location_offset(&self) -> usize {
        self.offset
    }

    #[inline]
    pub const fn fragment(&self) -> &T {
        &self.fragment
    }
}

impl<T, R> Slice<R> for ByteSpan<T>
where
    T: Slice<R> + Offset + AsBytes + Slice<RangeTo<usize>>,
{
    #[inline]
    fn slice(&self, range: R) -> Self {
        let next_fragment = self.fragment.slice(range);
        let consumed = self.fragment.offset(&next_fragment);
        Self {
            offset: self.offset + consumed,
            fragment: next_fragment,
        }
    }
}

impl<T: InputIter> InputIter for ByteSpan<T> {
    type Item = T::Item;
    type Iter = T::Iter;
    type IterElem = T::IterElem;

    #[inline]
    fn iter_indices(&self) -> Self::Iter {
        self.fragment.iter_indices()
    }

    #[inline]
    fn iter_elements(&self) -> Self::IterElem {
        self.fragment.iter_elements()
    }

    #[inline]
    fn position<P>(&self, predicate: P) -> Option<usize>
    where
        P: Fn(Self::Item) -> bool,
    {
        self.fragment.position(predicate)
    }

    #[inline]
    fn slice_index(&self, count: usize) -> Result<usize, nom::Needed> {
        self.fragment.slice_index(count)
    }
}

impl<T: InputLength> InputLength for ByteSpan<T> {
    #[inline]
    fn input_len(&self) -> usize {
        self.fragment.input_len()
    }
}

impl<T> InputTake for ByteSpan<T>
where
    Self: Slice<RangeFrom<usize>> + Slice<RangeTo<usize>>,
{
    #[inline]
    fn take(&self, count: usize) -> Self {
        self.slice(..count)
    }

    #[inline]
    fn take_split(&self, count: usize) -> (Self, Self) {
        (self.slice(count..), self.slice(..count))
    }
}

impl<T> std::ops::Deref for ByteSpan<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.fragment
    }
}

impl<T: AsBytes> AsBytes for ByteSpan<T> {
    #[inline]
    fn as_bytes(&self) -> &[u8] {
        self.fragment.as_bytes()
    }
}

impl<T: AsBytes + PartialEq> PartialEq for ByteSpan<T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.offset == other.offset && self.fragment == other.fragment
    }
}

impl<T: AsBytes + Eq> Eq for ByteSpan<T> {}

impl<T: AsBytes> From<T> for ByteSpan<T> {
    #[inline]
    fn from(buffer: T) -> Self {
        Self::new(buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slice_advances_offset() {
        let span = ByteSpan::new(&[0x01u8, 0x02, 0x03, 0x04][..]);
        assert_eq!(span.location_offset(), 0);
        let (rest, taken) = span.take_split(3);
        assert_eq!(taken.location_offset(), 0);
        assert_eq!(*taken.fragment(), &[0x01, 0x02, 0x03][..]);
        assert_eq!(rest.location_offset(), 3);
        assert_eq!(*rest.fragment(), &[0x04][..]);
    }

    #[test]
    fn test_empty_slice_keeps_offset() {
        let span = ByteSpan::new(&[0x01u8, 0x02][..]);
        let sliced = span.slice(0..0);
        assert_eq!(sliced.location_offset(), 0);
        assert_eq!(sliced.input_len(), 0);
    }

    #[test]
    fn test_eq_compares_offset_and_bytes() {
        let a = ByteSpan::new(&[0x01u8, 0x02][..]);
        let b = unsafe { ByteSpan::new_from_raw_offset(1, &[0x01u8, 0x02][..]) };
        assert_ne!(a, b);
        assert_eq!(a, ByteSpan::new(&[0x01u8, 0x02][..]));
    }
}
