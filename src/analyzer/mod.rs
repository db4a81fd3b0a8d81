//! Content analyzers. Each one reads the markup (or the URL) and returns findings.
//! None of them can fail and none depend on another's output.

pub mod headings;
pub mod images;
pub mod keywords;
pub mod meta_tags;
pub mod page_speed;
pub mod url;
