use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use serde_json::json;
use situation_model::{
    AlertLevel, AlertLevelId, ContentItem, LangCode, UpdateRecord, ValidityWindow,
};
use situation_resolver::match_transition;

fn bench_match_transition(c: &mut Criterion) {
    let current = AlertLevel::new(2, "orange");
    let next = AlertLevel::new(5, "red");
    let window = ValidityWindow::new(
        3,
        NaiveDate::from_ymd_opt(2021, 3, 1).unwrap(),
        NaiveDate::from_ymd_opt(2021, 3, 14).unwrap(),
        Some(AlertLevelId(5)),
    )
    .unwrap();
    let locale = LangCode::new("fr").unwrap();

    // Worst case: the only match is last among a few dozen updates
    let mut candidates: Vec<UpdateRecord> = (0..40)
        .map(|i| {
            UpdateRecord::new(i, 1, 2)
                .with_content(ContentItem::from([("text".to_string(), json!("x"))]))
        })
        .collect();
    candidates.push(
        UpdateRecord::new(99, 2, 5)
            .with_content(ContentItem::from([("text".to_string(), json!("B"))]))
            .with_translation(
                locale.clone(),
                ContentItem::from([("text".to_string(), json!("B-fr"))]),
            ),
    );

    c.bench_function("match_transition_last_of_41", |b| {
        b.iter(|| {
            match_transition(
                black_box(&current),
                black_box(&window),
                black_box(&next),
                black_box(&candidates),
                black_box(&locale),
            )
        })
    });
}

criterion_group!(benches, bench_match_transition);
criterion_main!(benches);
