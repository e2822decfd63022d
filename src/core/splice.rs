use crate::core::{Splice, TargetFile};

/// 在記憶體中完成替換：第一個包含 `marker` 的行之前全部換成 `replacement`，
/// 該行（含）之後原封不動保留。找不到 marker 時回傳 `None`。
pub fn splice(content: &str, marker: &str, replacement: &str) -> Option<Splice> {
    splice_file(&TargetFile::from_content("", content), marker, replacement)
}

pub fn splice_file(file: &TargetFile, marker: &str, replacement: &str) -> Option<Splice> {
    let marker_line = file.find_marker(marker)?;
    let lines = &file.lines;

    let suffix_len: usize = lines[marker_line..].iter().map(String::len).sum();
    let mut content = String::with_capacity(replacement.len() + suffix_len);
    content.push_str(replacement);
    for line in &lines[marker_line..] {
        content.push_str(line);
    }

    Some(Splice {
        content,
        marker_line,
    })
}
