/// A normalized page request.
///
/// `page` is zero-based and never negative; `size` is at least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: i32,
    size: i32,
}

impl PageRequest {
    /// Clamps raw caller input: negative pages become 0, sizes below 1 become 1.
    pub fn new(page: i32, size: i32) -> Self {
        Self {
            page: page.max(0),
            size: size.max(1),
        }
    }

    pub fn page(&self) -> i32 {
        self.page
    }

    pub fn size(&self) -> i32 {
        self.size
    }

    /// Number of rows to skip before this page.
    pub fn offset(&self) -> i64 {
        i64::from(self.page) * i64::from(self.size)
    }
}
