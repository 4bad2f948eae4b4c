//! Report generation benchmarks
//!
//! Measures layout alone and layout plus PDF encoding across store sizes.

use chrono::{Days, NaiveDate};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use libro_report::{Book, Genre, Loan, LoanStatus, ReportGenerator, ReportSnapshot, Role, User};
use std::hint::black_box;

fn snapshot(records: usize) -> ReportSnapshot {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date");
    let users: Vec<User> = (1..=records as u64)
        .map(|id| User::new(id, format!("user{id}"), format!("user{id}@librored.com"), Role::User))
        .collect();
    let books: Vec<Book> = (1..=records as u64)
        .map(|id| Book::new(id, format!("Book {id}"), format!("Author {id}"), Genre::Fiction))
        .collect();
    let loans = (1..=records as u64)
        .map(|id| Loan {
            id,
            book: books[(id - 1) as usize].clone(),
            lender: users[0].clone(),
            borrower: users[(id - 1) as usize].clone(),
            start_date: start,
            end_date: (id % 2 == 0).then(|| start + Days::new(21)),
            status: LoanStatus::Completed,
        })
        .collect();
    ReportSnapshot::new(users, books, loans)
}

fn benchmark_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("report_layout");
    let generator = ReportGenerator::default();

    for records in [10, 100, 1000] {
        let data = snapshot(records);
        group.throughput(Throughput::Elements(data.record_count() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(records), &data, |b, data| {
            b.iter(|| generator.plan(black_box(data)).expect("layout failed"));
        });
    }

    group.finish();
}

fn benchmark_pdf_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("report_pdf");
    let generator = ReportGenerator::default();

    for records in [10, 100, 1000] {
        let data = snapshot(records);
        group.throughput(Throughput::Elements(data.record_count() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(records), &data, |b, data| {
            b.iter(|| generator.generate(black_box(data)).expect("generation failed"));
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_layout, benchmark_pdf_generation);
criterion_main!(benches);
