use chrono::{DateTime, Days, NaiveDate, Utc};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyClicks {
    pub date: String,
    pub clicks: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PopularCard {
    pub project_title: String,
    pub clicks: u64,
}

/// Click counts for the last 7 calendar days, today inclusive, in
/// chronological order. Days without clicks appear as explicit zeros so
/// a chart never collapses gaps.
pub fn daily_click_buckets(today: NaiveDate, clicks: &[DateTime<Utc>]) -> Vec<DailyClicks> {
    let window_start = today
        .checked_sub_days(Days::new(6))
        .unwrap_or(NaiveDate::MIN);

    let mut buckets: Vec<(NaiveDate, u64)> = (0..7)
        .filter_map(|offset| window_start.checked_add_days(Days::new(offset)))
        .map(|date| (date, 0u64))
        .collect();

    for clicked_at in clicks {
        let date = clicked_at.date_naive();
        if let Some(bucket) = buckets.iter_mut().find(|(d, _)| *d == date) {
            bucket.1 += 1;
        }
    }

    buckets
        .into_iter()
        .map(|(date, clicks)| DailyClicks {
            date: date.format("%b %d").to_string(),
            clicks,
        })
        .collect()
}

/// Groups click titles, counts them, and keeps the `top_n` most clicked.
/// Ties keep first-seen order, so the list is stable across refreshes.
pub fn popular_cards(titles: &[String], top_n: usize) -> Vec<PopularCard> {
    let mut cards: Vec<PopularCard> = Vec::new();

    for title in titles {
        match cards.iter_mut().find(|c| &c.project_title == title) {
            Some(card) => card.clicks += 1,
            None => cards.push(PopularCard {
                project_title: title.clone(),
                clicks: 1,
            }),
        }
    }

    cards.sort_by(|a, b| b.clicks.cmp(&a.clicks));
    cards.truncate(top_n);
    cards
}
