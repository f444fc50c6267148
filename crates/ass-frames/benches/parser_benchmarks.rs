//! Benchmarks for script parsing, override extraction and frame sampling
//!
//! Generates synthetic ASS data programmatically so the runs need no
//! external files.

use ass_frames::{
    animation::{generate_frame_data, FrameSampler, SamplerConfig},
    parse,
    parser::ast::Style,
    tags::{extract_transitions, parse_segments},
};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::fmt::Write;

/// Synthetic ASS script generator for benchmarking
struct ScriptGenerator {
    /// Number of styles to generate
    styles_count: usize,
    /// Number of events to generate
    events_count: usize,
    /// Complexity level for generated content
    complexity_level: ComplexityLevel,
}

/// Dialogue text complexity
#[derive(Debug, Clone, Copy)]
enum ComplexityLevel {
    /// Plain text
    Simple,
    /// Immediate overrides only
    Moderate,
    /// Several transitions per line
    Animated,
}

impl ScriptGenerator {
    fn new(events_count: usize, complexity_level: ComplexityLevel) -> Self {
        let styles_count = match complexity_level {
            ComplexityLevel::Simple => 1,
            ComplexityLevel::Moderate => 5,
            ComplexityLevel::Animated => 10,
        };
        Self {
            styles_count,
            events_count,
            complexity_level,
        }
    }

    /// Generate complete ASS script as string
    fn generate(&self) -> String {
        let mut script =
            String::with_capacity(512 + (self.styles_count * 200) + (self.events_count * 150));

        script.push_str(
            "[Script Info]\nTitle: Benchmark Script\nScriptType: v4.00+\nPlayResX: 1920\nPlayResY: 1080\n\n",
        );
        script.push_str(
            "[V4+ Styles]\n\
             Format: Name, Fontname, Fontsize, PrimaryColour, SecondaryColour, OutlineColour, BackColour, Bold, Italic, Underline, StrikeOut, ScaleX, ScaleY, Spacing, Angle, BorderStyle, Outline, Shadow, Alignment, MarginL, MarginR, MarginV, Encoding\n",
        );
        for i in 0..self.styles_count {
            let name = if i == 0 {
                "Default".to_string()
            } else {
                format!("Style{i}")
            };
            let fontsize = 20 + (i * 2);
            let color = format!("&H00{:06X}", i * 0x0011_1111);
            let _ = writeln!(
                script,
                "Style: {name},Arial,{fontsize},{color},{color},{color},&H00000000,0,0,0,0,100,100,0,0,1,2,0,2,10,10,10,1"
            );
        }

        script.push_str(
            "\n[Events]\nFormat: Layer, Start, End, Style, Name, MarginL, MarginR, MarginV, Effect, Text\n",
        );
        for i in 0..self.events_count {
            let start = format_time(i * 300);
            let end = format_time(i * 300 + 250);
            let style = if i % self.styles_count == 0 {
                "Default".to_string()
            } else {
                format!("Style{}", i % self.styles_count)
            };
            let _ = writeln!(
                script,
                "Dialogue: 0,{start},{end},{style},Speaker,0,0,0,,{}",
                self.dialogue_text(i)
            );
        }

        script
    }

    fn dialogue_text(&self, index: usize) -> String {
        let base = format!("This is dialogue line number {}", index + 1);
        match self.complexity_level {
            ComplexityLevel::Simple => base,
            ComplexityLevel::Moderate => {
                format!(r"{{\c&H00FF00&\fs28}}{base}{{\3c&H0000FF&}} with an outline")
            }
            ComplexityLevel::Animated => format!(
                r"{{\pos(100,200)\alpha&H80&\t(0,500,\fscx120\fscy120)\t(500,1000,\alpha&H00&\frz-15)\t(1000,2500,0.5,\c&H0000FF&\fs48)}}{base}{{\k50}} tail"
            ),
        }
    }
}

/// Format centiseconds as `H:MM:SS.cc`
fn format_time(centiseconds: usize) -> String {
    let hours = centiseconds / 360_000;
    let minutes = (centiseconds % 360_000) / 6_000;
    let seconds = (centiseconds % 6_000) / 100;
    let cs = centiseconds % 100;
    format!("{hours}:{minutes:02}:{seconds:02}.{cs:02}")
}

/// Benchmark whole-script parsing
fn bench_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");

    for &size in &[10, 100, 1000, 5000] {
        for (name, level) in [
            ("simple", ComplexityLevel::Simple),
            ("moderate", ComplexityLevel::Moderate),
            ("animated", ComplexityLevel::Animated),
        ] {
            let script = ScriptGenerator::new(size, level).generate();
            group.throughput(Throughput::Bytes(script.len() as u64));
            group.bench_with_input(BenchmarkId::new(name, size), &script, |b, script| {
                b.iter(|| black_box(parse(black_box(script))));
            });
        }
    }

    group.finish();
}

/// Benchmark override and transition extraction on single lines
fn bench_override_extraction(c: &mut Criterion) {
    let mut group = c.benchmark_group("override_extraction");

    let generator = ScriptGenerator::new(1, ComplexityLevel::Animated);
    let texts = [
        ("plain", "Simple dialogue text".to_string()),
        (
            "moderate",
            ScriptGenerator::new(1, ComplexityLevel::Moderate).dialogue_text(0),
        ),
        ("animated", generator.dialogue_text(0)),
    ];

    for (name, text) in &texts {
        group.bench_with_input(BenchmarkId::new("segments", name), text, |b, text| {
            b.iter(|| black_box(parse_segments(black_box(text))));
        });
        group.bench_with_input(BenchmarkId::new("transitions", name), text, |b, text| {
            b.iter(|| black_box(extract_transitions(black_box(text))));
        });
    }

    group.finish();
}

/// Benchmark frame sampling at common rates
fn bench_frame_sampling(c: &mut Criterion) {
    let mut group = c.benchmark_group("frame_sampling");

    let subtitle = parse(&ScriptGenerator::new(1, ComplexityLevel::Animated).generate());
    let Some(dialogue) = subtitle.dialogues().first() else {
        return;
    };
    let style = Style::default();

    for &rate in &[24.0, 30.0, 60.0, 120.0] {
        group.bench_with_input(
            BenchmarkId::new("generate", rate),
            &rate,
            |b, &rate| {
                b.iter(|| black_box(generate_frame_data(black_box(dialogue), &style, rate)));
            },
        );
    }

    group.finish();
}

/// Benchmark cache preparation over whole scripts
fn bench_prepare(c: &mut Criterion) {
    let mut group = c.benchmark_group("prepare_frames");
    group.sample_size(20);

    for &size in &[100, 1000] {
        let script = ScriptGenerator::new(size, ComplexityLevel::Animated).generate();
        group.bench_with_input(BenchmarkId::new("animated", size), &script, |b, script| {
            b.iter(|| {
                let subtitle = parse(script);
                FrameSampler::new(SamplerConfig::default()).prepare(&subtitle);
                black_box(subtitle)
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_parsing,
    bench_override_extraction,
    bench_frame_sampling,
    bench_prepare
);
criterion_main!(benches);
