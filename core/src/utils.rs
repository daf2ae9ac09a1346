/// Longest input echoed back in error messages.
const FMT_PREVIEW_LEN: usize = 32;

/// Render bytes for diagnostics: quoted when printable, hex otherwise.
/// Long inputs are cut at `FMT_PREVIEW_LEN` bytes.
pub fn fmt_bytes(b: &[u8]) -> String {
    let (head, cut) = if b.len() > FMT_PREVIEW_LEN {
        (&b[..FMT_PREVIEW_LEN], "…")
    } else {
        (b, "")
    };
    if head.iter().all(|&c| c.is_ascii_graphic() || c == b' ') {
        format!("\"{}{}\"", String::from_utf8_lossy(head), cut)
    } else {
        format!("0x{}{}", hex::encode(head), cut)
    }
}
