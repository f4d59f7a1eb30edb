use club_tracker::services::parse_feed_page;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn feed_entry(index: u32) -> String {
    // Spread timestamps so no two entries collapse as duplicates
    let stamp = format!("2021-06-{:02} 12:{:02}:00 UTC", 1 + index % 28, index % 60);
    format!(
        r#"<div class="activity">
  <div class="entry-head">
    <a class="entry-athlete" href="/athletes/{id}">Athlete {id}</a>
    <time class="timestamp" datetime="{stamp}">Today</time>
  </div>
  <div class="entry-body">
    <strong><a href="/activities/{id}">Morning Run</a></strong>
  </div>
  <ul class="inline-stats">
    <li title="Time">1<abbr class="unit">h</abbr> {min}<abbr class="unit">m</abbr></li>
  </ul>
</div>"#,
        id = 1000 + index,
        stamp = stamp,
        min = index % 60,
    )
}

fn benchmark_parse_feed_page(c: &mut Criterion) {
    // A page the size the live feed actually serves
    let entries: Vec<String> = (0..30).map(feed_entry).collect();
    let full_page = format!("<html><body>{}</body></html>", entries.join("\n"));
    let single_page = format!("<html><body>{}</body></html>", feed_entry(0));

    let mut group = c.benchmark_group("feed_parse");

    group.bench_function("thirty_entry_page", |b| {
        b.iter(|| parse_feed_page(black_box(&full_page)))
    });

    group.bench_function("single_entry_page", |b| {
        b.iter(|| parse_feed_page(black_box(&single_page)))
    });

    group.finish();
}

criterion_group!(benches, benchmark_parse_feed_page);
criterion_main!(benches);
