use anyhow::Context;
use laesbarhed_lib::services::text_processor::count_tokens;
use laesbarhed_lib::services::{format_summary, TextAnalysis};
use laesbarhed_lib::{has_flag, init_logging, parse_arg_value, resolve_config};
use serde::Serialize;

fn preview(s: &str, max_chars: usize) -> String {
    let mut out: String = s.chars().take(max_chars).collect();
    if s.chars().count() > max_chars {
        out.push_str("...");
    }
    out.replace('\n', " ")
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 || has_flag(&args, "--help") {
        eprintln!(
            "Usage:\n  cargo run --bin analyze_file -- <path.txt> [--sentences <n>] [--config <json_path>] [--out <json_path>]\n\nNotes:\n  - Filen læses som almindelig UTF-8 tekst.\n  - `--out` skriver sætninger, statistik og resultat som JSON."
        );
        return Ok(());
    }
    init_logging();

    let path = args[1].clone();
    let sentences_n: usize = parse_arg_value(&args, "--sentences")
        .and_then(|s| s.parse().ok())
        .unwrap_or(50);
    let out_path = parse_arg_value(&args, "--out");

    let config = resolve_config(&args)?;
    let text = std::fs::read_to_string(&path).with_context(|| format!("read file failed: {}", path))?;

    let mut analysis = TextAnalysis::with_config(text, config);

    let long_sentence_min_tokens = analysis.config().long_sentence_min_tokens;

    println!("File: {}", path);
    println!(
        "Text: {} chars ({} bytes), {} words, {} sentences, {} long words",
        analysis.char_count(),
        analysis.text().len(),
        analysis.words().len(),
        analysis.sentence_count(),
        analysis.long_words().len()
    );
    println!();

    let sentences = analysis.sentences().to_vec();
    println!("Sentences: {}", sentences.len());
    for (i, s) in sentences.iter().take(sentences_n).enumerate() {
        let tokens = count_tokens(s);
        let kind = if tokens > long_sentence_min_tokens { "long " } else { "short" };
        println!("[S{:04}] tokens={:<3} {}  {}", i, tokens, kind, preview(s, 120));
    }
    if sentences.len() > sentences_n {
        println!("... ({} more sentences)", sentences.len() - sentences_n);
    }

    let summary = analysis
        .summary()
        .with_context(|| format!("analysis failed for {}", path))?;
    print!("{}", format_summary(&summary));

    if let Some(out_path) = out_path {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Output<'a> {
            file: &'a str,
            sentences: &'a [String],
            summary: &'a laesbarhed_lib::models::AnalysisSummary,
        }

        let out = Output {
            file: &path,
            sentences: &sentences,
            summary: &summary,
        };

        let json = serde_json::to_string_pretty(&out)?;
        std::fs::write(&out_path, json).with_context(|| format!("write out failed: {}", out_path))?;
        println!();
        println!("Wrote JSON: {}", out_path);
    }

    Ok(())
}
