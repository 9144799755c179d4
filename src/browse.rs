//! Query-side contracts applied to a built catalog: search, content
//! filtering of PDFs, and code-based playlist lookup.

pub mod codes;
pub mod content;
pub mod search;

pub use codes::{is_valid_code, lookup_codes, parse_codes_param, CodeLookup, PlaylistLink};
pub use content::{ContentFilter, ContentKind};
pub use search::{is_searchable, normalize_search_string, search, SearchQuery};
