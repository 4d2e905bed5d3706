pub fn git_commit_hash() -> &'static str {
    match option_env!("ADMATCH_WEB_GIT_SHA") {
        Some(value) if !value.is_empty() => value,
        _ => "unknown",
    }
}

/// Short form of the commit hash for footer display.
pub fn short_commit_hash() -> &'static str {
    let hash = git_commit_hash();
    if hash.len() >= 7 { &hash[..7] } else { hash }
}

#[cfg(test)]
mod tests {
    use super::short_commit_hash;

    #[test]
    fn short_hash_never_exceeds_seven_chars() {
        assert!(short_commit_hash().len() <= 7);
    }
}
