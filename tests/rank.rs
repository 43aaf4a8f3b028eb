use reviewrank::aggregate::{Aggregated, RatingStats};
use reviewrank::{rank_bounded, rank_full_sort, score};

fn stats(sum: f64, count: u64) -> RatingStats {
    RatingStats { sum, count }
}

/// A map of `n` items with strictly increasing, collision-free scores:
/// every item has a single review, so score = (1000 + i) * ln(2).
fn distinct_scores(n: usize) -> Aggregated {
    (0..n)
        .map(|i| (format!("item{i:04}"), stats(1000.0 + i as f64, 1)))
        .collect()
}

#[test]
fn end_to_end_scenario() -> anyhow::Result<()> {
    let aggregated: Aggregated = [
        ("A".to_string(), stats(20.0, 5)),
        ("B".to_string(), stats(5.0, 1)),
        ("C".to_string(), stats(12.0, 3)),
    ]
    .into_iter()
    .collect();

    let ranking = rank_bounded(&aggregated, 2)?;

    assert_eq!(ranking.len(), 2);
    assert_eq!(ranking[0].item_id, "A");
    assert_eq!(ranking[1].item_id, "C");
    assert!((ranking[0].score.0 - 4.0 * 6.0_f64.ln()).abs() < 1e-9);
    assert!((ranking[1].score.0 - 4.0 * 4.0_f64.ln()).abs() < 1e-9);
    Ok(())
}

#[test]
fn bounded_matches_naive_on_distinct_scores() -> anyhow::Result<()> {
    let aggregated = distinct_scores(200);

    for k in [1, 10, 50, 199, 200] {
        let bounded = rank_bounded(&aggregated, k)?;
        let naive = rank_full_sort(&aggregated, k);
        assert_eq!(bounded, naive, "k = {k}");
    }
    Ok(())
}

#[test]
fn both_selectors_return_descending_rankings() -> anyhow::Result<()> {
    let aggregated = distinct_scores(50);

    for ranking in [rank_bounded(&aggregated, 20)?, rank_full_sort(&aggregated, 20)] {
        for pair in ranking.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }
    Ok(())
}

#[test]
fn fewer_items_than_k_returns_all_items() -> anyhow::Result<()> {
    let aggregated = distinct_scores(3);

    let bounded = rank_bounded(&aggregated, 10)?;
    let naive = rank_full_sort(&aggregated, 10);

    assert_eq!(bounded.len(), 3);
    assert_eq!(naive.len(), 3);
    assert_eq!(bounded, naive);
    Ok(())
}

#[test]
fn k_zero_returns_empty_rankings() -> anyhow::Result<()> {
    let aggregated = distinct_scores(5);

    assert!(rank_bounded(&aggregated, 0)?.is_empty());
    assert!(rank_full_sort(&aggregated, 0).is_empty());
    Ok(())
}

#[test]
fn empty_input_returns_empty_rankings() -> anyhow::Result<()> {
    let aggregated = Aggregated::new();

    assert!(rank_bounded(&aggregated, 10)?.is_empty());
    assert!(rank_full_sort(&aggregated, 10).is_empty());
    Ok(())
}

/// Ties *above* the K boundary: ten clear winners over a sea of tied
/// losers. Both selectors must agree exactly.
#[test]
fn bounded_matches_naive_when_ties_sit_below_the_cut() -> anyhow::Result<()> {
    let mut aggregated = Aggregated::new();
    for i in 0..10 {
        // high scorers: mean 5.0 with growing counts
        aggregated.insert(
            format!("hit{i:02}"),
            stats(5.0 * (i + 2) as f64, i + 2),
        );
    }
    for i in 0..90 {
        // all tied on score(1.0, 1)
        aggregated.insert(format!("tail{i:02}"), stats(1.0, 1));
    }

    let bounded = rank_bounded(&aggregated, 10)?;
    let naive = rank_full_sort(&aggregated, 10);
    assert_eq!(bounded, naive);
    Ok(())
}

/// Ties *at* the K boundary. The bounded selector admits candidates on
/// score alone, so which tied item survives depends on encounter order;
/// the baseline breaks such ties by item id. Only the score profile is
/// guaranteed to agree.
#[test]
fn boundary_ties_agree_on_scores_if_not_on_ids() -> anyhow::Result<()> {
    let aggregated: Aggregated = (0..40)
        .map(|i| (format!("tied{i:02}"), stats(3.0, 1)))
        .collect();

    let bounded = rank_bounded(&aggregated, 7)?;
    let naive = rank_full_sort(&aggregated, 7);

    assert_eq!(bounded.len(), 7);
    assert_eq!(naive.len(), 7);
    let expected = score(3.0, 1);
    for item in bounded.iter().chain(naive.iter()) {
        assert!((item.score.0 - expected).abs() < 1e-12);
    }
    Ok(())
}
