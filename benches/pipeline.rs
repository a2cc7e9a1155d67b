// benches/pipeline.rs
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use xc_dash::{specs, stats};

/// Synthetic listing: `n` flights spread over a few seasons, with the
/// header/spacer rows the real page interleaves.
fn sample_listing(n: usize) -> String {
    let mut body = String::with_capacity(n * 400);
    for i in 0..n {
        if i % 20 == 0 {
            body.push_str(r#"<tr class="month"><td colspan="7">&nbsp;</td></tr>"#);
        }
        let y = 2018 + (i / 300) % 7;
        let m = 1 + (i / 25) % 12;
        let d = 1 + i % 28;
        body.push_str(&format!(
            r#"<tr data-flight-id="{i}">
                 <td class="flight-date">{y:04}-{m:02}-{d:02}</td>
                 <td class="takeoff">Startplatz {}</td>
                 <td class="landing">Landeplatz {}</td>
                 <td class="duration">{:02}:{:02}</td>
                 <td class="distance">{}.{} km</td>
                 <td class="points">{}</td>
                 <td class="glider">Glider {}</td>
               </tr>"#,
            i % 40,
            i % 35,
            i % 7,
            i % 60,
            i % 180,
            i % 10,
            (i * 7) % 400,
            i % 5,
        ));
    }
    format!(r#"<html><body><table class="flights-table"><tbody>{body}</tbody></table></body></html>"#)
}

fn bench_pipeline(c: &mut Criterion) {
    let doc = sample_listing(1500);
    let flights = specs::flights::parse_doc(&doc).unwrap_or_default();

    c.bench_function("flights_parse_doc", |b| {
        b.iter(|| {
            let rows = specs::flights::parse_doc(black_box(&doc));
            black_box(rows.map(|r| r.len()).unwrap_or(0))
        })
    });

    c.bench_function("stats_calculate", |b| {
        b.iter(|| {
            let s = stats::calculate(black_box(&flights));
            black_box(s.total_flights)
        })
    });
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
