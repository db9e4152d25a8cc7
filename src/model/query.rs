use std::fmt;

/// Sort direction for list endpoints
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SortDir {
    Asc,
    Desc,
}

impl fmt::Display for SortDir {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SortDir::Asc => write!(f, "Asc"),
            SortDir::Desc => write!(f, "Desc"),
        }
    }
}

/// Sorting and paging parameters for list endpoints.
///
/// Unset fields are left to the server's defaults.
#[derive(Debug, Clone, Default)]
pub struct QueryParameters {
    pub sort_by: Option<String>,
    pub sort_dir: Option<SortDir>,
    pub offset: Option<u32>,
    pub limit: Option<u32>,
}

impl QueryParameters {
    /// Render the populated fields as query pairs for the request URL
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(sort_by) = &self.sort_by {
            pairs.push(("SortBy", sort_by.clone()));
        }
        if let Some(sort_dir) = self.sort_dir {
            pairs.push(("SortDir", sort_dir.to_string()));
        }
        if let Some(offset) = self.offset {
            pairs.push(("Offset", offset.to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("Limit", limit.to_string()));
        }
        pairs
    }
}
