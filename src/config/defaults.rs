//! Built-in target, marker and replacement block used when nothing overrides them.

pub const DEFAULT_TARGET_PATH: &str = "src/app/page.tsx";

pub const DEFAULT_MARKER: &str = "export default function Page";

pub const DEFAULT_REPLACEMENT: &str = include_str!("../defaults/page_imports.tsx");
