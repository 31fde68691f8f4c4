//! Benchmarks for claude-pattern-audit
//!
//! Run with: cargo bench

use claude_pattern_audit::{Config, PatternAuditor};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

const CLEAN_SOURCE: &str = r#"
import { formatPrice } from './format';

export function totalPrice(items: number[]): string {
    const total = items.reduce((acc, n) => acc + n, 0);
    return formatPrice(total);
}
"#;

const NOISY_SOURCE: &str = r#"
const config = { password: "abc123", apiKey: "sk_live_abcdef123456" };
console.log(config);
// TODO: remove before ship
eval(userInput);
"#;

/// Benchmark compiling the rule tables
fn bench_auditor_creation(c: &mut Criterion) {
    c.bench_function("auditor_creation", |b| {
        b.iter(|| {
            let config = Config::default();
            black_box(PatternAuditor::new(config))
        })
    });
}

/// Benchmark auditing clean content
fn bench_clean_audit(c: &mut Criterion) {
    let auditor = PatternAuditor::new(Config::default());

    c.bench_function("audit_clean_file", |b| {
        b.iter(|| black_box(auditor.audit_content("ts", black_box(CLEAN_SOURCE))))
    });
}

/// Benchmark auditing content with findings in every category
fn bench_noisy_audit(c: &mut Criterion) {
    let auditor = PatternAuditor::new(Config::default());

    c.bench_function("audit_noisy_file", |b| {
        b.iter(|| black_box(auditor.audit_content("ts", black_box(NOISY_SOURCE))))
    });
}

/// Benchmark a large file (repeated clean content)
fn bench_large_audit(c: &mut Criterion) {
    let auditor = PatternAuditor::new(Config::default());
    let large: String = CLEAN_SOURCE.repeat(500);

    c.bench_function("audit_large_file", |b| {
        b.iter(|| black_box(auditor.audit_content("ts", black_box(&large))))
    });
}

criterion_group!(
    benches,
    bench_auditor_creation,
    bench_clean_audit,
    bench_noisy_audit,
    bench_large_audit
);
criterion_main!(benches);
