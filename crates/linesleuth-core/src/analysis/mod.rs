/// Analysis modules — extension classification and post-scan rankings.

pub mod file_types;
pub mod top_files;

pub use file_types::{classify, file_extension, is_code_extension, CODE_EXTENSIONS};
pub use top_files::{rank_files, ExtensionTally, TOP_N};
