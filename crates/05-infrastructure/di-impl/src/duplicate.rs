//! 重复键检查
//!
//! 唯一性在两个粒度上保证：单次调用的载荷内部，以及同一注入点的历史记录。
//! 叠加多个不同的标记是允许的，同一个键注册两次则不允许。

use infrastructure_common::{MetadataEntry, MetadataError, MetadataKey, MetadataPayload, MetadataResult};
use std::collections::HashSet;

/// 按顺序返回第一个重复出现的键
pub fn first_duplicate<'a, I>(keys: I) -> Option<&'a MetadataKey>
where
    I: IntoIterator<Item = &'a MetadataKey>,
{
    let mut seen = HashSet::new();
    keys.into_iter().find(|key| !seen.insert(*key))
}

/// 规范化载荷并确认其内部没有重复的键
pub fn ensure_unique_keys(payload: MetadataPayload) -> MetadataResult<Vec<MetadataEntry>> {
    let entries = payload.into_entries();
    if let Some(key) = first_duplicate(entries.iter().map(MetadataEntry::key)) {
        return Err(MetadataError::duplicated(key.clone()));
    }
    Ok(entries)
}

/// 确认新条目与注入点已有条目没有相同的键
///
/// 按已有条目的顺序检查，报告第一个冲突的键。
pub fn ensure_no_conflicts(
    incoming: &[MetadataEntry],
    existing: Option<&[MetadataEntry]>,
) -> MetadataResult<()> {
    let Some(existing) = existing else {
        return Ok(());
    };

    let incoming_keys: HashSet<&MetadataKey> = incoming.iter().map(MetadataEntry::key).collect();
    match existing.iter().find(|entry| incoming_keys.contains(entry.key())) {
        Some(entry) => Err(MetadataError::duplicated(entry.key().clone())),
        None => Ok(()),
    }
}

/// 完整检查：先检查载荷内部，再与已有条目比较，通过后返回可追加的条目
pub fn approve(
    payload: MetadataPayload,
    existing: Option<&[MetadataEntry]>,
) -> MetadataResult<Vec<MetadataEntry>> {
    let entries = ensure_unique_keys(payload)?;
    ensure_no_conflicts(&entries, existing)?;
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use infrastructure_common::{Identifier, Symbol};

    fn entry(key: &str, value: &str) -> MetadataEntry {
        MetadataEntry::new(key, value)
    }

    #[test]
    fn test_first_duplicate() {
        let keys: Vec<MetadataKey> = ["a", "b", "c", "b", "a"].into_iter().map(Into::into).collect();

        assert_eq!(first_duplicate(&keys), Some(&Identifier::from("b")));
        assert_eq!(first_duplicate(&keys[..3]), None);
    }

    #[test]
    fn test_symbols_with_same_description_are_not_duplicates() {
        let keys: Vec<MetadataKey> = vec![Symbol::new("k").into(), Symbol::new("k").into()];

        assert_eq!(first_duplicate(&keys), None);
    }

    #[test]
    fn test_single_entry_is_wrapped() {
        let entries = ensure_unique_keys(entry("tag", "bar").into()).unwrap();

        assert_eq!(entries, vec![entry("tag", "bar")]);
    }

    #[test]
    fn test_duplicate_within_payload() {
        let payload = MetadataPayload::from([entry("a", "1"), entry("a", "2")]);

        assert_eq!(
            ensure_unique_keys(payload),
            Err(MetadataError::duplicated("a"))
        );
    }

    #[test]
    fn test_conflict_with_existing_entries() {
        let existing = vec![entry("tag", "bar"), entry("name", "baz")];
        let incoming = vec![entry("other", "x"), entry("name", "qux"), entry("tag", "qux")];

        // 按已有条目的顺序报告
        assert_eq!(
            ensure_no_conflicts(&incoming, Some(existing.as_slice())),
            Err(MetadataError::duplicated("tag"))
        );
        assert!(ensure_no_conflicts(&incoming, None).is_ok());
        assert!(ensure_no_conflicts(&[entry("fresh", "v")], Some(existing.as_slice())).is_ok());
    }

    #[test]
    fn test_identical_pair_is_still_rejected() {
        let existing = vec![entry("tag", "bar")];

        assert_eq!(
            approve(entry("tag", "bar").into(), Some(existing.as_slice())),
            Err(MetadataError::duplicated("tag"))
        );
    }

    #[test]
    fn test_payload_check_runs_before_history_check() {
        let existing = vec![entry("b", "0")];
        let payload = MetadataPayload::from([entry("b", "1"), entry("a", "1"), entry("a", "2")]);

        assert_eq!(
            approve(payload, Some(existing.as_slice())),
            Err(MetadataError::duplicated("a"))
        );
    }
}
