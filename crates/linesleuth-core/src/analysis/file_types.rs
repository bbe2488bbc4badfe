/// Extension classification for recognised source files.
///
/// Only files whose extension appears in [`CODE_EXTENSIONS`] take part in a
/// scan. Classification looks at the name alone; content is never sniffed.
use compact_str::CompactString;
use std::collections::HashSet;
use std::sync::LazyLock;

/// Every extension LineSleuth counts, lowercase and without the dot.
const CODE_EXTENSION_LIST: &[&str] = &[
    // Systems / compiled languages
    "rs", "c", "h", "cc", "cpp", "cxx", "hpp", "hh", "hxx", "m", "mm", "go", "zig", "nim",
    "d", "swift", "java", "kt", "kts", "scala", "groovy", "cs", "fs", "fsx", "vb", "dart",
    "asm", "s",
    // Scripting languages
    "js", "mjs", "cjs", "jsx", "ts", "mts", "cts", "tsx", "py", "pyi", "rb", "php", "pl",
    "pm", "lua", "r", "jl", "ex", "exs", "erl", "hrl", "clj", "cljs", "hs", "elm", "ml",
    "mli", "coffee",
    // Shell scripts
    "sh", "bash", "zsh", "fish", "ps1", "psm1", "bat", "cmd",
    // Web / markup templates
    "html", "htm", "css", "scss", "sass", "less", "vue", "svelte", "astro", "ejs", "hbs",
    "handlebars", "mustache", "pug", "jade", "njk", "twig", "liquid", "erb", "jinja",
    "jinja2", "j2", "tmpl", "tpl",
    // Config / data formats
    "json", "jsonc", "json5", "yaml", "yml", "toml", "xml", "ini", "cfg", "conf", "env",
    "properties", "csv", "tsv", "sql", "graphql", "gql", "proto", "plist",
    // Docs
    "md", "mdx", "markdown", "rst", "txt", "adoc", "tex",
    // Container / CI / package-manager manifests
    "dockerfile", "dockerignore", "gitignore", "gitattributes", "gitmodules", "editorconfig",
    "npmrc", "nvmrc", "yarnrc", "lock", "gradle", "sbt", "cabal", "gemspec", "podspec",
    "csproj", "fsproj", "sln", "cmake", "mk", "makefile", "tf", "tfvars", "hcl", "nix",
    // Select binary formats
    "exe", "dll", "so", "dylib", "wasm", "jar", "class", "pyc",
];

/// Process-wide allow-list, built on first use and never mutated.
pub static CODE_EXTENSIONS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| CODE_EXTENSION_LIST.iter().copied().collect());

/// Extract the extension of a file name.
///
/// Returns the text after the last `.`, ASCII-lowercased, or an empty string
/// when the name contains no `.`. A dot-file such as `.gitignore` therefore
/// yields `gitignore`.
pub fn file_extension(name: &str) -> CompactString {
    match name.rsplit_once('.') {
        Some((_, ext)) => CompactString::from(ext.to_ascii_lowercase()),
        None => CompactString::default(),
    }
}

/// Whether `ext` (already lowercase, no dot) is an allow-listed extension.
pub fn is_code_extension(ext: &str) -> bool {
    !ext.is_empty() && CODE_EXTENSIONS.contains(ext)
}

/// Extension of `name` and whether it is allow-listed.
pub fn classify(name: &str) -> (CompactString, bool) {
    let ext = file_extension(name);
    let accepted = is_code_extension(&ext);
    (ext, accepted)
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── file_extension ───────────────────────────────────────────────────

    #[test]
    fn extension_is_text_after_last_dot() {
        assert_eq!(file_extension("main.rs").as_str(), "rs");
        assert_eq!(file_extension("archive.tar.gz").as_str(), "gz");
        assert_eq!(file_extension("types.d.ts").as_str(), "ts");
    }

    #[test]
    fn extension_is_lowercased() {
        assert_eq!(file_extension("README.MD").as_str(), "md");
        assert_eq!(file_extension("Setup.EXE").as_str(), "exe");
    }

    #[test]
    fn extension_missing_or_trailing_dot_is_empty() {
        assert_eq!(file_extension("Makefile").as_str(), "");
        assert_eq!(file_extension("weird.").as_str(), "");
        assert_eq!(file_extension("").as_str(), "");
    }

    #[test]
    fn dotfile_extension_is_its_name() {
        assert_eq!(file_extension(".gitignore").as_str(), "gitignore");
    }

    // ── is_code_extension / classify ─────────────────────────────────────

    #[test]
    fn known_code_extensions_are_accepted() {
        for ext in &["rs", "py", "js", "ts", "go", "java", "c", "cpp", "rb", "php"] {
            assert!(is_code_extension(ext), "expected .{ext} to be accepted");
        }
    }

    #[test]
    fn config_docs_and_manifests_are_accepted() {
        for ext in &["json", "yaml", "yml", "toml", "md", "sh", "dockerfile", "lock", "html"] {
            assert!(is_code_extension(ext), "expected .{ext} to be accepted");
        }
    }

    #[test]
    fn select_binary_formats_are_accepted() {
        assert!(is_code_extension("exe"));
        assert!(is_code_extension("wasm"));
    }

    #[test]
    fn unknown_and_empty_extensions_are_rejected() {
        assert!(!is_code_extension("png"));
        assert!(!is_code_extension("zip"));
        assert!(!is_code_extension("xyz"));
        assert!(!is_code_extension(""));
    }

    /// The allow-list stores lowercase keys only; callers lowercase first.
    #[test]
    fn classify_is_case_insensitive() {
        assert_eq!(classify("LIB.RS"), (CompactString::new("rs"), true));
        assert_eq!(classify("photo.JPG"), (CompactString::new("jpg"), false));
        assert_eq!(classify("LICENSE"), (CompactString::new(""), false));
    }

    #[test]
    fn allow_list_has_no_duplicates_or_uppercase() {
        assert_eq!(CODE_EXTENSIONS.len(), CODE_EXTENSION_LIST.len());
        for ext in CODE_EXTENSION_LIST {
            assert_eq!(*ext, ext.to_ascii_lowercase(), "allow-list entry .{ext}");
        }
    }
}
