use crate::dictionary::FrontCodedDict;
use std::iter::FusedIterator;

/// Iterator that decodes every string of a dictionary in id order.
///
/// Each item is a freshly allocated buffer; use
/// [`FrontCodedDict::access_into`] to decode into a reused one.
pub struct DictIter<'a> {
    dict: &'a FrontCodedDict,
    next: usize,
    end: usize,
}

impl<'a> DictIter<'a> {
    pub(crate) fn new(dict: &'a FrontCodedDict) -> Self {
        Self {
            dict,
            next: 0,
            end: dict.len(),
        }
    }
}

impl<'a> Iterator for DictIter<'a> {
    type Item = Vec<u8>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next == self.end {
            return None;
        }
        let mut buf = Vec::new();
        self.dict.decode_into(self.next, &mut buf);
        self.next += 1;
        Some(buf)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end - self.next;
        (remaining, Some(remaining))
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        self.next = self.next.saturating_add(n).min(self.end);
        self.next()
    }
}

impl<'a> DoubleEndedIterator for DictIter<'a> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.next == self.end {
            return None;
        }
        self.end -= 1;
        let mut buf = Vec::new();
        self.dict.decode_into(self.end, &mut buf);
        Some(buf)
    }
}

impl<'a> ExactSizeIterator for DictIter<'a> {}

impl<'a> FusedIterator for DictIter<'a> {}
