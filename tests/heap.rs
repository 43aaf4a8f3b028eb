use reviewrank::error::HeapError;
use reviewrank::heap::MinHeap;

#[test]
fn insert_and_extract_min() -> anyhow::Result<()> {
    let mut h = MinHeap::new();
    h.insert((3, "c"));
    h.insert((1, "a"));
    h.insert((2, "b"));

    assert_eq!(h.extract_min()?, (1, "a"));
    assert_eq!(h.extract_min()?, (2, "b"));
    assert_eq!(h.extract_min()?, (3, "c"));
    Ok(())
}

#[test]
fn extract_min_yields_non_decreasing_order() -> anyhow::Result<()> {
    let mut h = MinHeap::new();
    for v in [(5, "e"), (3, "c"), (8, "h"), (1, "a"), (4, "d")] {
        h.insert(v);
    }

    let mut out = Vec::new();
    while !h.is_empty() {
        out.push(h.extract_min()?);
    }

    let scores: Vec<i32> = out.iter().map(|(s, _)| *s).collect();
    let mut sorted = scores.clone();
    sorted.sort_unstable();
    assert_eq!(scores, sorted);
    Ok(())
}

#[test]
fn extract_min_handles_duplicate_keys() -> anyhow::Result<()> {
    let mut h = MinHeap::new();
    for v in [4, 1, 4, 2, 4, 1, 3] {
        h.insert(v);
    }

    let mut out = Vec::new();
    while !h.is_empty() {
        out.push(h.extract_min()?);
    }
    assert_eq!(out, vec![1, 1, 2, 3, 4, 4, 4]);
    Ok(())
}

#[test]
fn build_then_peek_returns_global_minimum() -> anyhow::Result<()> {
    let mut h = MinHeap::new();
    h.build(vec![(5, "e"), (3, "c"), (8, "h"), (1, "a"), (4, "d")]);

    assert_eq!(h.peek_min()?, &(1, "a"));
    assert_eq!(h.len(), 5);
    Ok(())
}

#[test]
fn build_replaces_previous_contents() -> anyhow::Result<()> {
    let mut h = MinHeap::new();
    h.insert((1, "old"));
    h.build(vec![(7, "g"), (2, "b")]);

    assert_eq!(h.len(), 2);
    assert_eq!(h.extract_min()?, (2, "b"));
    assert_eq!(h.extract_min()?, (7, "g"));
    Ok(())
}

#[test]
fn extract_min_on_empty_heap_errors() {
    let mut h: MinHeap<(i32, &str)> = MinHeap::new();
    assert_eq!(h.extract_min(), Err(HeapError::Empty));
}

#[test]
fn peek_min_on_empty_heap_errors() {
    let h: MinHeap<(i32, &str)> = MinHeap::new();
    assert_eq!(h.peek_min(), Err(HeapError::Empty));
}

#[test]
fn decrease_key_moves_element_to_root() -> anyhow::Result<()> {
    let mut h = MinHeap::new();
    h.insert((10, "x"));
    h.insert((20, "y"));
    h.insert((30, "z"));

    h.decrease_key(2, (5, "w"))?;
    assert_eq!(h.peek_min()?, &(5, "w"));
    Ok(())
}

#[test]
fn decrease_key_with_greater_key_errors_and_leaves_heap_untouched() -> anyhow::Result<()> {
    let mut h = MinHeap::new();
    h.insert((10, "x"));

    assert_eq!(
        h.decrease_key(0, (20, "bigger")),
        Err(HeapError::InvalidKey { index: 0 })
    );
    assert_eq!(h.peek_min()?, &(10, "x"));
    assert_eq!(h.len(), 1);
    Ok(())
}

#[test]
fn len_tracks_inserts_and_extractions() -> anyhow::Result<()> {
    let mut h = MinHeap::new();
    assert!(h.is_empty());

    h.insert((1, "a"));
    assert_eq!(h.len(), 1);
    h.insert((2, "b"));
    assert_eq!(h.len(), 2);

    h.extract_min()?;
    assert_eq!(h.len(), 1);
    Ok(())
}
