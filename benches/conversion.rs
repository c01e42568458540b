//! Benchmark suite for the conversion pipeline
//!
//! Measures the synchronous middle of a conversion (header check, row
//! transformation and serialization) on generated Nordea exports, with and
//! without payee inference.
//!
//! # Running Benchmarks
//!
//! ```bash
//! cargo bench
//! ```

use ynab_csv::{render, RunContext, RunOptions};

fn main() {
    divan::main();
}

const MEMOS: [&str; 4] = [
    "Drive now  4412 København",
    "Spotify AB  Stockholm",
    "Netto   Vesterbro",
    "Løn Oktober",
];

/// Build a Nordea export with `rows` transactions
fn nordea_export(rows: usize) -> String {
    let mut content = String::from("Bogført;Tekst;Rentedato;Beløb;Saldo\n");
    for i in 0..rows {
        let day = i % 28 + 1;
        let sign = if i % 3 == 0 { "" } else { "-" };
        content.push_str(&format!(
            "{:02}-10-2016;{};{:02}-10-2016;{}{},{:02};{}\n",
            day,
            MEMOS[i % MEMOS.len()],
            day,
            sign,
            i % 1000,
            i % 100,
            i
        ));
    }
    content
}

fn context(payees: &[&str]) -> RunContext {
    RunContext::new(RunOptions {
        payees: payees.iter().map(|p| p.to_string()).collect(),
        ..RunOptions::default()
    })
    .expect("nordea is registered")
}

#[divan::bench(args = [100, 1_000, 10_000])]
fn render_plain(bencher: divan::Bencher, rows: usize) {
    let content = nordea_export(rows);
    let ctx = context(&[]);

    bencher.bench(|| render(&ctx, &content).expect("Rendering failed"));
}

#[divan::bench(args = [100, 1_000, 10_000])]
fn render_with_payees(bencher: divan::Bencher, rows: usize) {
    let content = nordea_export(rows);
    let ctx = context(&["Drive now", "Spotify", "Netto", "Irma"]);

    bencher.bench(|| render(&ctx, &content).expect("Rendering failed"));
}
