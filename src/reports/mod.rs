// ===== readalign/src/reports/mod.rs =====
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use readalign::align::{AnalysisReport, WordStatus};

fn status_cell(status: WordStatus) -> Cell {
    let cell = Cell::new(status.to_string());
    match status {
        WordStatus::Correct => cell.fg(Color::Green),
        WordStatus::Misread => cell.fg(Color::Yellow),
        WordStatus::Skipped => cell.fg(Color::Red),
    }
}

pub fn print_alignment_table(report: &AnalysisReport) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("#").add_attribute(Attribute::Bold),
        Cell::new("Expected").add_attribute(Attribute::Bold),
        Cell::new("Spoken"),
        Cell::new("Status"),
        Cell::new("Conf"),
    ]);

    for item in &report.aligned_items {
        let spoken = item.spoken.as_deref().unwrap_or("-");
        let conf = item
            .confidence
            .map(|c| format!("{:.2}", c))
            .unwrap_or_else(|| "-".to_string());
        table.add_row(vec![
            Cell::new(item.ref_index).set_alignment(CellAlignment::Right),
            Cell::new(&item.expected),
            Cell::new(spoken),
            status_cell(item.status),
            Cell::new(conf).set_alignment(CellAlignment::Right),
        ]);
    }
    println!("\n📋 === ALIGNMENT === 📋");
    println!("{}", table);
}

pub fn print_error_report(report: &AnalysisReport) {
    let errors = &report.errors;

    if !errors.misread_pairs.is_empty() {
        let mut table = Table::new();
        table.load_preset(ASCII_FULL);
        table.add_row(vec![
            Cell::new("Ref#").add_attribute(Attribute::Bold),
            Cell::new("Expected"),
            Cell::new("Heard"),
        ]);
        for pair in &errors.misread_pairs {
            table.add_row(vec![
                Cell::new(pair.ref_index).set_alignment(CellAlignment::Right),
                Cell::new(&pair.expected),
                Cell::new(&pair.spoken).fg(Color::Yellow),
            ]);
        }
        println!("\nMisread words:");
        println!("{}", table);
    }

    if !errors.hesitations.is_empty() {
        let mut table = Table::new();
        table.load_preset(ASCII_FULL);
        table.add_row(vec![
            Cell::new("Idx").add_attribute(Attribute::Bold),
            Cell::new("Kind"),
            Cell::new("Word"),
        ]);
        for h in &errors.hesitations {
            table.add_row(vec![
                Cell::new(h.index).set_alignment(CellAlignment::Right),
                Cell::new(h.kind.to_string()),
                Cell::new(&h.word),
            ]);
        }
        println!("\nHesitations:");
        println!("{}", table);
    }

    if !errors.repeated_words.is_empty() {
        println!("\nRepeated words:");
        for r in &errors.repeated_words {
            println!("  [{}] \"{}\"", r.index, r.word);
        }
    }

    if !errors.skipped_line_runs.is_empty() {
        println!("\nSkipped lines:");
        for run in &errors.skipped_line_runs {
            println!(
                "  words {}..={} ({} in a row)",
                run.start, run.end, run.count
            );
        }
    }

    if !errors.repeated_phrases.is_empty() {
        println!("\nRepeated phrases:");
        for p in &errors.repeated_phrases {
            println!(
                "  \"{}\" at spoken positions {} and {}",
                p.phrase, p.indices[0], p.indices[1]
            );
        }
    }
}

pub fn print_summary(report: &AnalysisReport) {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);

    table.add_row(vec![
        Cell::new("Words").add_attribute(Attribute::Bold),
        Cell::new("Correct").fg(Color::Green),
        Cell::new("Misread").fg(Color::Yellow),
        Cell::new("Skipped").fg(Color::Red),
        Cell::new("Accuracy").add_attribute(Attribute::Bold),
        Cell::new("WPM"),
    ]);

    let wpm = report
        .timing
        .map(|t| format!("{:.0}", t.words_per_minute))
        .unwrap_or_else(|| "-".to_string());

    table.add_row(vec![
        Cell::new(report.aligned_items.len()),
        Cell::new(report.correct_count),
        Cell::new(report.misread_count),
        Cell::new(report.skipped_count),
        Cell::new(format!("{:.1}%", report.accuracy * 100.0)).fg(Color::Cyan),
        Cell::new(wpm),
    ]);

    println!("\n📊 === SUMMARY === 📊");
    println!("{}", table);
}

pub fn print_batch_table(results: &[(String, &AnalysisReport)]) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Transcript").add_attribute(Attribute::Bold),
        Cell::new("Words"),
        Cell::new("Correct").fg(Color::Green),
        Cell::new("Misread").fg(Color::Yellow),
        Cell::new("Skipped").fg(Color::Red),
        Cell::new("Hesit"),
        Cell::new("Accuracy").add_attribute(Attribute::Bold),
    ]);

    for i in 1..=6 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for (name, report) in results {
        table.add_row(vec![
            Cell::new(name).add_attribute(Attribute::Bold),
            Cell::new(report.aligned_items.len()),
            Cell::new(report.correct_count),
            Cell::new(report.misread_count),
            Cell::new(report.skipped_count),
            Cell::new(report.errors.hesitations.len()),
            Cell::new(format!("{:.1}%", report.accuracy * 100.0)).fg(Color::Cyan),
        ]);
    }

    println!("\n📊 === BATCH RESULTS === 📊");
    println!("{}", table);
}
