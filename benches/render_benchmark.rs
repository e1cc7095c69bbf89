//! Performance benchmarks for shell rendering
//!
//! Measures a full frame (layout, sidebar, overlays, hit areas) at several
//! terminal sizes, plus the pure open-set derivation run on every navigation.
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use hrbuddie::app::App;
use hrbuddie::config::ShellConfig;
use hrbuddie::nav::{default_tree, derive_open_set, SidebarMode};
use hrbuddie::theme::{FixedDarkModeSignal, MemoryPreferenceStore, ThemePreference, ThemeProvider};
use ratatui::{backend::TestBackend, Terminal};

fn create_app(collapsed: bool) -> App {
    let config = ShellConfig::default()
        .with_initial_route("/settings/security")
        .with_collapsed(collapsed);
    let theme = ThemeProvider::new(
        ThemePreference::Dark,
        Box::new(MemoryPreferenceStore::new()),
        Box::new(FixedDarkModeSignal(true)),
    );
    let mut app = App::new(config, default_tree(), theme);
    app.mount();
    app
}

/// Benchmark a full frame for each sidebar mode and terminal size
fn bench_render_shell(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_shell");

    for (width, height) in [(60u16, 24u16), (120, 40), (200, 60)] {
        for collapsed in [false, true] {
            let mut app = create_app(collapsed);
            let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
            let label = format!(
                "{}x{}_{}",
                width,
                height,
                if collapsed { "compact" } else { "expanded" }
            );

            group.bench_with_input(BenchmarkId::from_parameter(label), &(), |b, _| {
                b.iter(|| {
                    terminal.draw(|f| app.render(f).unwrap()).unwrap();
                    black_box(app.hits.len())
                });
            });
        }
    }

    group.finish();
}

/// Benchmark open-set derivation for every route in the default tree
fn bench_derive_open_set(c: &mut Criterion) {
    let tree = default_tree();
    let routes: Vec<String> = tree
        .iter()
        .flat_map(|e| std::iter::once(e.href.clone()).chain(e.sub_items.iter().map(|s| s.href.clone())))
        .collect();

    c.bench_function("derive_open_set_all_routes", |b| {
        b.iter(|| {
            for route in &routes {
                black_box(derive_open_set(black_box(&tree), route, SidebarMode::Expanded));
            }
        });
    });
}

criterion_group!(benches, bench_render_shell, bench_derive_open_set);
criterion_main!(benches);
