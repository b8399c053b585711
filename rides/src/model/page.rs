// III-IV
// Copyright 2023 Julio Merino
//
// Licensed under the Apache License, Version 2.0 (the "License"); you may not
// use this file except in compliance with the License.  You may obtain a copy
// of the License at:
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS, WITHOUT
// WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.  See the
// License for the specific language governing permissions and limitations
// under the License.

//! Pagination of ride listings.

/// Number of rides returned in each page of a listing.
pub(crate) const PAGE_SIZE: u32 = 10;

/// A 1-based page number into the listing of all rides, sorted by creation order.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Page(u32);

impl Default for Page {
    fn default() -> Self {
        Self(1)
    }
}

impl Page {
    /// Creates a page from an untrusted `page` number.  Numbers below 1 select the first page.
    pub(crate) fn new(page: i64) -> Self {
        Self(u32::try_from(page.max(1)).unwrap_or(u32::MAX))
    }

    /// Creates a page from an optional query parameter.  A missing parameter or one that does not
    /// hold an integer selects the first page.
    pub(crate) fn from_param(param: Option<&str>) -> Self {
        param.and_then(|p| p.trim().parse::<i64>().ok()).map(Page::new).unwrap_or_default()
    }

    /// Returns the maximum number of rows in this page.
    pub(crate) fn limit(&self) -> i64 {
        i64::from(PAGE_SIZE)
    }

    /// Returns the number of rows that precede this page.
    pub(crate) fn offset(&self) -> i64 {
        (i64::from(self.0) - 1) * i64::from(PAGE_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_offsets() {
        assert_eq!(0, Page::default().offset());
        assert_eq!(0, Page::new(1).offset());
        assert_eq!(10, Page::new(2).offset());
        assert_eq!(90, Page::new(10).offset());
        assert_eq!(10, Page::new(3).limit());
    }

    #[test]
    fn test_page_not_positive_is_first() {
        assert_eq!(Page::default(), Page::new(0));
        assert_eq!(Page::default(), Page::new(-3));
        assert_eq!(Page::default(), Page::new(i64::MIN));
    }

    #[test]
    fn test_page_too_large_is_clamped() {
        let page = Page::new(i64::MAX);
        assert_eq!(Page::new(i64::from(u32::MAX)), page);
        assert_eq!((i64::from(u32::MAX) - 1) * 10, page.offset());
    }

    #[test]
    fn test_page_from_param() {
        assert_eq!(Page::default(), Page::from_param(None));
        assert_eq!(Page::new(2), Page::from_param(Some("2")));
        assert_eq!(Page::new(2), Page::from_param(Some(" 2 ")));
        assert_eq!(Page::default(), Page::from_param(Some("0")));
        assert_eq!(Page::default(), Page::from_param(Some("-3")));
        assert_eq!(Page::default(), Page::from_param(Some("")));
        assert_eq!(Page::default(), Page::from_param(Some("two")));
        assert_eq!(Page::default(), Page::from_param(Some("2.5")));
    }
}
