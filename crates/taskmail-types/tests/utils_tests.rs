use taskmail_types::*;

#[test]
fn test_shorten() {
    assert_eq!(shorten("short", 12), "short");
    assert_eq!(shorten("abcdefghijkl", 12), "abcdefghijkl");
    assert_eq!(shorten("abcdefghijklmnop", 12), "abcdefghijkl...");
}

#[test]
fn test_shorten_counts_chars_not_bytes() {
    assert_eq!(shorten("会话会话会话", 4), "会话会话...");
}

#[test]
fn test_non_blank() {
    assert_eq!(non_blank("  hello \n"), Some("hello".to_string()));
    assert_eq!(non_blank(" \n\t "), None);
    assert_eq!(non_blank(""), None);
}
