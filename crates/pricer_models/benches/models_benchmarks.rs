//! Criterion benchmarks for Black-76 pricing and batch valuation.
//!
//! Measures the raw formula, the date-based entry point with rounding, and
//! batch valuation across portfolio sizes.

use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pricer_core::types::Date;
use pricer_models::analytical::{price_option, Black76};
use pricer_models::instruments::commodity::{NewOptionContract, OptionContract, OptionId};
use pricer_models::valuation::{value_batch, MarketParameters};

/// Builds `n` contracts cycling through the demo book.
fn generate_book(n: usize) -> Vec<OptionContract> {
    let created = NaiveDate::from_ymd_opt(2023, 4, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .expect("valid timestamp");
    let templates = [
        ("BRN", "Jan24", 100.0, "Call"),
        ("HH", "Mar24", 10.0, "Put"),
        ("BRN", "Apr24", 100.0, "Call"),
        ("HH", "May24", 10.0, "Put"),
    ];

    (0..n)
        .map(|i| {
            let (commodity, month, strike, option_type) = templates[i % templates.len()];
            OptionContract::create(
                OptionId::new(i as u64 + 1),
                NewOptionContract::new(commodity, month, strike, option_type),
                created,
            )
            .expect("valid contract")
        })
        .collect()
}

fn bench_formula(c: &mut Criterion) {
    let mut group = c.benchmark_group("black76_formula");
    let model = Black76::new(78.94_f64, 0.2, 0.3).expect("valid model");

    group.bench_function("price_call", |b| {
        b.iter(|| model.price_call(black_box(100.0), black_box(0.59)))
    });
    group.bench_function("price_put", |b| {
        b.iter(|| model.price_put(black_box(100.0), black_box(0.59)))
    });

    let expiry = Date::from_ymd(2023, 11, 30).expect("valid date");
    let today = Date::from_ymd(2023, 4, 29).expect("valid date");
    group.bench_function("price_option", |b| {
        b.iter(|| {
            price_option(
                black_box(expiry),
                black_box(100.0),
                black_box("CALL"),
                0.2,
                0.3,
                78.94,
                today,
            )
        })
    });

    group.finish();
}

fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("value_batch");
    let market = MarketParameters::new(0.2, 0.3, 78.94);
    let today = Date::from_ymd(2023, 4, 29).expect("valid date");

    for size in [10, 100, 1000] {
        let book = generate_book(size);
        group.bench_with_input(BenchmarkId::new("serial", size), &book, |b, book| {
            b.iter(|| value_batch(black_box(book), &market, today))
        });

        #[cfg(feature = "parallel")]
        group.bench_with_input(BenchmarkId::new("parallel", size), &book, |b, book| {
            b.iter(|| pricer_models::valuation::value_batch_parallel(black_box(book), &market, today))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_formula, bench_batch);
criterion_main!(benches);
